//! The animation driver: owns all simulation state and turns variable
//! frame deltas plus fixed-interval effects into consistent frames.
//!
//! Time is injected — the embedding loop calls `tick(dt)` once per display
//! frame, and every fixed-rate effect (battery depletion, electron
//! emission) runs off accumulator timers fed by those same deltas. Nothing
//! here reads a wall clock, which keeps the whole engine drivable by
//! synthetic time.

use crate::circuit::battery::{Battery, BatteryPhase};
use crate::circuit::layout::Layout;
use crate::config::{ConfigError, EngineConfig};
use crate::core::rng::Rng;
use crate::core::time::IntervalTimer;
use crate::input::queue::{InputEvent, InputQueue};
use crate::particles::emission::EmissionPool;
use crate::particles::pool::ElectronPool;
use crate::render::projection;
use crate::render::snapshot::FrameSnapshot;

/// Seconds between battery depletion ticks.
pub const DEPLETION_PERIOD: f32 = 1.0;
/// Seconds between battery-interior electron emissions.
pub const EMISSION_PERIOD: f32 = 0.2;

/// Owns the circuit simulation and its schedule.
///
/// Single-threaded and cooperative: all mutation for a frame happens
/// inside `tick`, and the snapshot is rebuilt only after every update has
/// run, so a renderer always observes one self-consistent frame.
pub struct CircuitRunner {
    layout: Layout,
    battery: Battery,
    electrons: ElectronPool,
    emissions: EmissionPool,
    depletion_timer: IntervalTimer,
    emission_timer: IntervalTimer,
    rng: Rng,
    input: InputQueue,
    snapshot: FrameSnapshot,
    /// Engine clock in seconds, accumulated from frame deltas.
    clock: f64,
}

impl CircuitRunner {
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let layout = Layout::new(&config);
        let mut rng = Rng::new(config.seed);
        let electrons = ElectronPool::new(config.particle_count, layout.path.length(), &mut rng);
        let snapshot = FrameSnapshot::new(config.particle_count);
        log::info!(
            "circuit engine up: {} electrons on a {}-unit loop",
            config.particle_count,
            layout.path.length()
        );
        Ok(Self {
            layout,
            battery: Battery::new(),
            electrons,
            emissions: EmissionPool::new(),
            depletion_timer: IntervalTimer::new(DEPLETION_PERIOD),
            emission_timer: IntervalTimer::new(EMISSION_PERIOD),
            rng,
            input: InputQueue::new(),
            snapshot,
            clock: 0.0,
        })
    }

    /// Queue a user command for the next tick.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// The single UI command: resets an exhausted battery, otherwise
    /// toggles the switch.
    pub fn switch(&mut self) {
        if self.battery.exhausted() {
            self.reset();
        } else {
            self.toggle();
        }
    }

    /// Open or close the circuit. Safe at any time; pending fixed-interval
    /// work is cancelled or restarted synchronously with the transition.
    pub fn toggle(&mut self) {
        let was_active = self.battery.phase() == BatteryPhase::ClosedActive;
        self.battery.toggle();
        self.sync_timers(was_active);
    }

    /// Restore a fresh open circuit. Safe at any time. In-flight emissions
    /// keep their own removal schedule.
    pub fn reset(&mut self) {
        let was_active = self.battery.phase() == BatteryPhase::ClosedActive;
        self.battery.reset();
        self.sync_timers(was_active);
    }

    /// Run one frame: drain input, advance the clock, run due fixed-rate
    /// effects, integrate electron drift, expire emissions, rebuild the
    /// snapshot.
    pub fn tick(&mut self, dt: f32) {
        for event in self.input.drain() {
            match event {
                InputEvent::Switch => self.switch(),
            }
        }

        self.clock += dt as f64;

        if self.battery.phase() == BatteryPhase::ClosedActive {
            for _ in 0..self.depletion_timer.fire(dt) {
                self.battery.deplete();
                if self.battery.phase() != BatteryPhase::ClosedActive {
                    // Exhausted mid-frame: stop the schedule where it stands.
                    self.depletion_timer.rearm();
                    self.emission_timer.rearm();
                    break;
                }
            }
        }

        if self.battery.phase() == BatteryPhase::ClosedActive {
            for _ in 0..self.emission_timer.fire(dt) {
                self.emissions
                    .spawn(&self.layout.emission_box, self.clock, &mut self.rng);
            }
            self.electrons.advance(dt);
        }

        // Expiry runs every frame: reopening the switch stops admission but
        // never cancels an in-flight entry's removal.
        self.emissions.prune(self.clock);

        projection::project(
            &mut self.snapshot,
            &self.layout,
            &self.battery,
            &self.electrons,
            &self.emissions,
            self.clock,
        );
    }

    /// The most recently built frame.
    pub fn snapshot(&self) -> &FrameSnapshot {
        &self.snapshot
    }

    pub fn battery(&self) -> &Battery {
        &self.battery
    }

    pub fn electrons(&self) -> &ElectronPool {
        &self.electrons
    }

    pub fn emissions(&self) -> &EmissionPool {
        &self.emissions
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Engine clock in seconds.
    pub fn clock(&self) -> f64 {
        self.clock
    }

    /// Zero both fixed-interval timers when the sim crosses into or out of
    /// the active phase, so no firing can use time accumulated under a
    /// previous activation. Rearming is idempotent.
    fn sync_timers(&mut self, was_active: bool) {
        let is_active = self.battery.phase() == BatteryPhase::ClosedActive;
        if was_active != is_active {
            self.depletion_timer.rearm();
            self.emission_timer.rearm();
        }
    }
}
