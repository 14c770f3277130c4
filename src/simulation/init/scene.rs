use crate::core::SimResult;
use crate::rigid_body::{add_vectors, scale_vector, RigidBody};

use super::SpawnTemplate;

/// Build the initial body set described by `template`.
pub fn spawn_bodies(template: &SpawnTemplate) -> SimResult<Vec<RigidBody>> {
    template.check_count()?;
    (0..template.count)
        .map(|i| {
            let velocity = add_vectors(template.base_velocity, scale_vector(template.velocity_step, i as f32));
            RigidBody::new_rect(template.position.x, template.position.y, template.width, template.height, i)?
                .with_velocity(velocity)?
                .with_acceleration(template.acceleration)
        })
        .collect()
}
