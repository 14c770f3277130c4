//! Collision - brute-force AABB overlap pass
//!
//! Every unordered pair `{i, j}` with `i < j` is tested once per frame. There
//! is no broad phase and no response: an overlap only brightens both bodies'
//! colour. Flashes are additions, so the final colour of a body depends only
//! on how many bodies it overlaps, never on the order pairs are visited.

use serde::{Deserialize, Serialize};

use crate::rigid_body::RigidBody;

/// Default per-contact brightening for r/g/b.
pub const DEFAULT_FLASH_STEP: u8 = 50;

/// Default body count at which the rayon scan takes over.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Tuning for the contact pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollisionSettings {
    /// Amount added to each colour channel per overlapping pair
    pub flash_step: u8,
    /// Use the parallel pair scan at or above this many bodies
    pub parallel_threshold: usize,
}

impl Default for CollisionSettings {
    fn default() -> Self {
        Self {
            flash_step: DEFAULT_FLASH_STEP,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// An overlapping pair found this frame, by index into the body slice
/// (`a < b`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Contact {
    pub a: usize,
    pub b: usize,
}

/// Strict AABB overlap. Rectangles that only share an edge do not overlap.
#[inline]
pub fn overlaps(a: &RigidBody, b: &RigidBody) -> bool {
    a.pos.x < b.max_x() && a.max_x() > b.pos.x && a.pos.y < b.max_y() && a.max_y() > b.pos.y
}

/// Test one pair and flash both bodies if they overlap.
///
/// Returns whether the pair overlapped.
#[inline]
pub fn check_pair(a: &mut RigidBody, b: &mut RigidBody, flash_step: u8) -> bool {
    if !overlaps(a, b) {
        return false;
    }
    a.color = a.color.flashed(flash_step);
    b.color = b.color.flashed(flash_step);
    true
}

/// Test every unordered pair once and return the contacts in index order.
pub fn check_all_pairs(bodies: &mut [RigidBody], settings: &CollisionSettings) -> Vec<Contact> {
    #[cfg(feature = "parallel")]
    {
        if bodies.len() >= settings.parallel_threshold.max(2) {
            return check_all_pairs_parallel(bodies, settings.flash_step);
        }
    }

    let n = bodies.len();
    let mut contacts = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            // Split so we can borrow bodies[i] and bodies[j] mutably at once.
            let (head, tail) = bodies.split_at_mut(j);
            if check_pair(&mut head[i], &mut tail[0], settings.flash_step) {
                contacts.push(Contact { a: i, b: j });
            }
        }
    }
    contacts
}

/// Read-only pair scan on the rayon pool, then a sequential flash pass.
///
/// Colour writes never race: workers only collect index pairs.
#[cfg(feature = "parallel")]
fn check_all_pairs_parallel(bodies: &mut [RigidBody], flash_step: u8) -> Vec<Contact> {
    use rayon::prelude::*;

    let contacts: Vec<Contact> = {
        let view: &[RigidBody] = bodies;
        (0..view.len())
            .into_par_iter()
            .flat_map_iter(|i| {
                ((i + 1)..view.len())
                    .filter(move |&j| overlaps(&view[i], &view[j]))
                    .map(move |j| Contact { a: i, b: j })
            })
            .collect()
    };

    for c in &contacts {
        bodies[c.a].color = bodies[c.a].color.flashed(flash_step);
        bodies[c.b].color = bodies[c.b].color.flashed(flash_step);
    }
    contacts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rigid_body::Rgba;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> RigidBody {
        RigidBody::new_rect(x, y, w, h, 0).unwrap()
    }

    fn sequential() -> CollisionSettings {
        CollisionSettings { parallel_threshold: usize::MAX, ..Default::default() }
    }

    #[test]
    fn overlap_is_symmetric() {
        let cases = [
            (rect(0.0, 0.0, 50.0, 50.0), rect(40.0, 0.0, 50.0, 50.0)),
            (rect(0.0, 0.0, 50.0, 50.0), rect(50.0, 0.0, 50.0, 50.0)),
            (rect(10.0, 10.0, 5.0, 5.0), rect(0.0, 0.0, 100.0, 100.0)),
            (rect(0.0, 0.0, 5.0, 5.0), rect(0.0, 6.0, 5.0, 5.0)),
            (rect(-20.0, 3.0, 25.0, 1.0), rect(4.0, -10.0, 2.0, 30.0)),
        ];
        for (a, b) in cases.iter() {
            assert_eq!(overlaps(a, b), overlaps(b, a));
        }
    }

    #[test]
    fn shared_edges_do_not_overlap() {
        let a = rect(0.0, 0.0, 50.0, 50.0);
        assert!(!overlaps(&a, &rect(50.0, 0.0, 50.0, 50.0)));
        assert!(!overlaps(&a, &rect(-50.0, 0.0, 50.0, 50.0)));
        assert!(!overlaps(&a, &rect(0.0, 50.0, 50.0, 50.0)));
        assert!(!overlaps(&a, &rect(0.0, -50.0, 50.0, 50.0)));
        // Corner touch.
        assert!(!overlaps(&a, &rect(50.0, 50.0, 10.0, 10.0)));
    }

    #[test]
    fn containment_overlaps() {
        assert!(overlaps(&rect(0.0, 0.0, 100.0, 100.0), &rect(10.0, 10.0, 1.0, 1.0)));
    }

    #[test]
    fn check_pair_flashes_both_only_on_overlap() {
        let mut a = rect(0.0, 0.0, 50.0, 50.0);
        let mut b = rect(40.0, 0.0, 50.0, 50.0);
        assert!(check_pair(&mut a, &mut b, 50));
        assert_eq!(a.color(), Rgba::new(50, 50, 50, 255));
        assert_eq!(b.color(), Rgba::new(50, 50, 50, 255));

        let mut c = rect(500.0, 0.0, 50.0, 50.0);
        assert!(!check_pair(&mut a, &mut c, 50));
        assert_eq!(a.color(), Rgba::new(50, 50, 50, 255));
        assert_eq!(c.color(), Rgba::BASELINE);
    }

    #[test]
    fn flashes_accumulate_per_contact() {
        // Hub overlaps three spokes; spokes do not touch each other.
        let mut bodies = vec![
            rect(0.0, 0.0, 30.0, 30.0),
            rect(-10.0, -10.0, 15.0, 15.0),
            rect(25.0, -10.0, 15.0, 15.0),
            rect(10.0, 25.0, 10.0, 10.0),
        ];
        let contacts = check_all_pairs(&mut bodies, &sequential());

        assert_eq!(
            contacts,
            vec![Contact { a: 0, b: 1 }, Contact { a: 0, b: 2 }, Contact { a: 0, b: 3 }]
        );
        assert_eq!(bodies[0].color(), Rgba::new(150, 150, 150, 255));
        for spoke in &bodies[1..] {
            assert_eq!(spoke.color(), Rgba::new(50, 50, 50, 255));
        }
    }

    #[test]
    fn pair_order_does_not_change_result() {
        let make = || {
            vec![
                rect(0.0, 0.0, 30.0, 30.0),
                rect(20.0, 0.0, 30.0, 30.0),
                rect(40.0, 0.0, 30.0, 30.0),
                rect(10.0, 10.0, 30.0, 30.0),
            ]
        };
        let mut forward = make();
        check_all_pairs(&mut forward, &sequential());

        // Same pairs, visited from the highest index down.
        let mut backward = make();
        let n = backward.len();
        for i in (0..n).rev() {
            for j in (0..i).rev() {
                let (head, tail) = backward.split_at_mut(i);
                check_pair(&mut tail[0], &mut head[j], DEFAULT_FLASH_STEP);
            }
        }

        let f: Vec<Rgba> = forward.iter().map(|b| b.color()).collect();
        let b: Vec<Rgba> = backward.iter().map(|b| b.color()).collect();
        assert_eq!(f, b);
    }

    #[test]
    fn never_tests_a_body_against_itself() {
        // A lone body trivially overlaps itself; it must stay baseline.
        let mut one = vec![rect(0.0, 0.0, 10.0, 10.0)];
        assert!(check_all_pairs(&mut one, &sequential()).is_empty());
        assert_eq!(one[0].color(), Rgba::BASELINE);

        let mut none: Vec<RigidBody> = Vec::new();
        assert!(check_all_pairs(&mut none, &sequential()).is_empty());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_scan_matches_sequential() {
        let make = || -> Vec<RigidBody> {
            (0..40)
                .map(|i| rect((i % 7) as f32 * 9.0, (i / 7) as f32 * 9.0, 12.0, 12.0))
                .collect()
        };
        let mut seq = make();
        let seq_contacts = check_all_pairs(&mut seq, &sequential());

        let mut par = make();
        let par_contacts = check_all_pairs(
            &mut par,
            &CollisionSettings { parallel_threshold: 2, ..Default::default() },
        );

        assert_eq!(seq_contacts, par_contacts);
        assert_eq!(seq, par);
    }
}
