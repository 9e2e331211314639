//! Electrons emitted inside the battery: a self-expiring pool of
//! short-lived points that drift toward the terminal and fade out.

use glam::Vec2;

use crate::circuit::layout::Rect;
use crate::core::rng::Rng;

/// A single emitted electron. Born at a random point in the battery
/// interior, removed exactly one lifetime later.
#[derive(Debug, Clone)]
pub struct Emission {
    pub id: u64,
    pub spawn_pos: Vec2,
    /// Engine-clock timestamp of creation, in seconds.
    pub birth: f64,
}

impl Emission {
    /// Seconds from birth to removal.
    pub const LIFETIME: f32 = 1.0;

    /// Elapsed-lifetime fraction at `now`, clamped to [0, 1].
    pub fn progress(&self, now: f64) -> f32 {
        ((now - self.birth) as f32 / Self::LIFETIME).clamp(0.0, 1.0)
    }

    /// Whether this entry's lifetime has fully elapsed at `now`.
    pub fn expired(&self, now: f64) -> bool {
        now - self.birth >= Self::LIFETIME as f64
    }
}

/// Variable-size pool of emitted electrons with monotonic birth stamps.
pub struct EmissionPool {
    entries: Vec<Emission>,
    next_id: u64,
}

impl EmissionPool {
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(8),
            next_id: 1,
        }
    }

    /// Create one entry at a random point inside `region`, stamped `now`.
    pub fn spawn(&mut self, region: &Rect, now: f64, rng: &mut Rng) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Emission {
            id,
            spawn_pos: Vec2::new(
                rng.range_f32(region.min.x, region.max.x),
                rng.range_f32(region.min.y, region.max.y),
            ),
            birth: now,
        });
        id
    }

    /// Drop every entry whose lifetime has elapsed. Runs every frame no
    /// matter the circuit state — opening the switch never cancels an
    /// in-flight entry's removal.
    pub fn prune(&mut self, now: f64) {
        self.entries.retain(|e| !e.expired(now));
    }

    pub fn iter(&self) -> impl Iterator<Item = &Emission> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for EmissionPool {
    fn default() -> Self {
        Self::new()
    }
}
