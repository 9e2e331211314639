//! The wire electrons: a fixed pool of identically-governed points
//! circulating the conductor loop at constant speed.

use crate::core::rng::Rng;

/// Drift speed along the rail, in world units per second.
pub const DRIFT_SPEED: f32 = 20.0;
/// Electrons sit in a random lane within the wire's width.
pub const LATERAL_RANGE: f32 = 4.0;

const PHASE_DELAY_MAX: f32 = 2.0;
const PHASE_DURATION_MIN: f32 = 0.8;
const PHASE_DURATION_MAX: f32 = 2.0;

/// One electron in the wire.
///
/// `track` is the only dynamic field. The rest is per-particle entropy
/// assigned once at pool construction: the lane within the wire, and the
/// phase offsets driving the idle vibration while the circuit is open.
#[derive(Debug, Clone)]
pub struct Electron {
    pub track: f32,
    pub lateral: f32,
    pub phase_delay: f32,
    pub phase_duration: f32,
}

/// Fixed-size pool of wire electrons.
pub struct ElectronPool {
    electrons: Vec<Electron>,
    loop_length: f32,
}

impl ElectronPool {
    /// Spread `count` electrons evenly along a loop of `loop_length`,
    /// drawing per-particle entropy from `rng`.
    pub fn new(count: usize, loop_length: f32, rng: &mut Rng) -> Self {
        let spacing = loop_length / count as f32;
        let electrons = (0..count)
            .map(|i| Electron {
                track: i as f32 * spacing,
                lateral: rng.range_f32(-LATERAL_RANGE, LATERAL_RANGE),
                phase_delay: rng.range_f32(0.0, PHASE_DELAY_MAX),
                phase_duration: rng.range_f32(PHASE_DURATION_MIN, PHASE_DURATION_MAX),
            })
            .collect();
        Self {
            electrons,
            loop_length,
        }
    }

    /// Advance every electron by `dt` seconds of drift, wrapping at the
    /// loop length. The caller decides when movement is enabled; when it
    /// skips this call, positions are frozen exactly.
    pub fn advance(&mut self, dt: f32) {
        let step = DRIFT_SPEED * dt;
        for e in &mut self.electrons {
            e.track = (e.track + step).rem_euclid(self.loop_length);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Electron> {
        self.electrons.iter()
    }

    pub fn len(&self) -> usize {
        self.electrons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.electrons.is_empty()
    }

    pub fn loop_length(&self) -> f32 {
        self.loop_length
    }
}
