use tracing::{debug, info, trace};

use crate::collision::{check_all_pairs, CollisionSettings, Contact};
use crate::core::SimResult;
use crate::integrator::{advance_all, TimeStep};
use crate::rigid_body::RigidBody;

use super::{
    spawn_bodies, Clock, EventSource, Frame, FrameStats, InputEvent, PerfTimer, QuitPolicy,
    Renderer, SimConfig,
};

/// Lifecycle of a driver. `Stopped` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    Running,
    Stopped,
}

/// What a finished run did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunSummary {
    /// Frames integrated and presented (the quitting iteration is not counted)
    pub frames: u64,
    /// Sum of all frame deltas, in seconds
    pub simulated_seconds: f64,
}

/// Owns the bodies and runs integrate -> collide -> present once per frame.
///
/// Frame timing lives here rather than in a global, so independent drivers
/// (and mock clocks) can coexist.
pub struct FrameDriver<C: Clock> {
    clock: C,
    bodies: Vec<RigidBody>,
    contacts: Vec<Contact>,
    collision: CollisionSettings,
    quit_policy: QuitPolicy,

    // State
    state: DriverState,
    t_prev: f64,
    frame: u64,
    simulated_seconds: f64,

    // Perf metrics
    perf_enabled: bool,
    stats: FrameStats,
}

impl<C: Clock> FrameDriver<C> {
    /// Take ownership of `bodies` and sample the clock once as the time origin.
    pub fn new(mut clock: C, bodies: Vec<RigidBody>, config: &SimConfig) -> Self {
        let t_prev = clock.now_seconds();
        info!(bodies = bodies.len(), "simulation started");
        Self {
            clock,
            bodies,
            contacts: Vec::new(),
            collision: config.collision,
            quit_policy: config.quit_policy,
            state: DriverState::Running,
            t_prev,
            frame: 0,
            simulated_seconds: 0.0,
            perf_enabled: config.perf_metrics,
            stats: FrameStats::default(),
        }
    }

    /// Validate `config`, spawn its scene and start driving it.
    pub fn from_config(clock: C, config: &SimConfig) -> SimResult<Self> {
        config.validate()?;
        let bodies = spawn_bodies(&config.spawn)?;
        Ok(Self::new(clock, bodies, config))
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    pub fn bodies(&self) -> &[RigidBody] {
        &self.bodies
    }

    /// Contacts found in the last simulated frame.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Re-sample the clock as the previous-frame time, so the next frame's
    /// delta starts from now.
    pub fn resync_clock(&mut self) {
        self.t_prev = self.clock.now_seconds();
    }

    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.perf_enabled = enabled;
    }

    /// Run one loop iteration.
    ///
    /// Quit is only checked here, before any body is touched; a frame in
    /// progress is never cut short. Once stopped, further calls do nothing.
    pub fn tick<E, R>(&mut self, events: &mut E, renderer: &mut R) -> SimResult<DriverState>
    where
        E: EventSource + ?Sized,
        R: Renderer + ?Sized,
    {
        if self.state == DriverState::Stopped {
            return Ok(DriverState::Stopped);
        }

        let t_now = self.clock.now_seconds();
        let dt = TimeStep::between(self.t_prev, t_now);
        self.t_prev = t_now;
        let dt = dt?;

        if self.drain_events(events) {
            info!(frame = self.frame, "quitting");
            self.state = DriverState::Stopped;
            return Ok(DriverState::Stopped);
        }

        self.step(dt);

        renderer.present(&Frame {
            index: self.frame,
            dt: dt.seconds(),
            bodies: &self.bodies,
            contacts: &self.contacts,
        })?;

        Ok(self.state)
    }

    /// Tick until a quit event arrives or a collaborator fails, then release
    /// the bodies.
    pub fn run<E, R>(mut self, events: &mut E, renderer: &mut R) -> SimResult<RunSummary>
    where
        E: EventSource + ?Sized,
        R: Renderer + ?Sized,
    {
        while self.tick(events, renderer)? == DriverState::Running {}

        let summary = RunSummary {
            frames: self.frame,
            simulated_seconds: self.simulated_seconds,
        };
        info!(frames = summary.frames, "window closing");
        Ok(summary)
    }

    /// Drain the whole queue; true if any event asked to quit.
    fn drain_events<E: EventSource + ?Sized>(&mut self, events: &mut E) -> bool {
        let mut quit = false;
        while let Some(event) = events.poll_event() {
            if self.quit_policy.is_quit(&event) {
                quit = true;
                continue;
            }
            match event {
                InputEvent::MouseButtonPressed { x, y } => debug!(x, y, "mouse down"),
                other => trace!(?other, "ignored event"),
            }
        }
        quit
    }

    fn step(&mut self, dt: TimeStep) {
        let perf_on = self.perf_enabled;
        self.stats.reset();
        let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

        if perf_on {
            let t0 = PerfTimer::start();
            advance_all(&mut self.bodies, dt);
            self.stats.integrate_ms = t0.elapsed_ms();
        } else {
            advance_all(&mut self.bodies, dt);
        }

        if perf_on {
            let t0 = PerfTimer::start();
            self.contacts = check_all_pairs(&mut self.bodies, &self.collision);
            self.stats.collide_ms = t0.elapsed_ms();
        } else {
            self.contacts = check_all_pairs(&mut self.bodies, &self.collision);
        }

        self.frame += 1;
        self.simulated_seconds += f64::from(dt.seconds());

        self.stats.frame = self.frame;
        self.stats.dt = dt.seconds();
        self.stats.body_count = self.bodies.len() as u32;
        self.stats.contact_pairs = self.contacts.len() as u32;
        self.stats.flashed_bodies = count_flashed(&self.contacts, self.bodies.len());
        if let Some(t) = step_start {
            self.stats.step_ms = t.elapsed_ms();
        }

        debug!(
            frame = self.frame,
            dt = self.stats.dt,
            contacts = self.stats.contact_pairs,
            "frame simulated"
        );
    }
}

fn count_flashed(contacts: &[Contact], body_count: usize) -> u32 {
    let mut touched = vec![false; body_count];
    for c in contacts {
        touched[c.a] = true;
        touched[c.b] = true;
    }
    touched.iter().filter(|&&t| t).count() as u32
}
