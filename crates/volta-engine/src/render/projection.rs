//! Projects current simulation state into a frame snapshot.
//! Pure and read-only with respect to the simulation: the same state and
//! clock always produce the same snapshot.

use std::f32::consts::TAU;

use crate::circuit::battery::{Battery, BatteryPhase};
use crate::circuit::layout::Layout;
use crate::circuit::path::Side;
use crate::particles::emission::EmissionPool;
use crate::particles::pool::{Electron, ElectronPool};
use crate::render::snapshot::{FieldMarker, FrameSnapshot, PointInstance};

/// Arc-length spacing of field-line samples along the loop.
pub const FIELD_STEP: f32 = 40.0;
/// Half-width of the idle vibration, in lateral units.
const JITTER_AMPLITUDE: f32 = 1.2;

/// Bounded repeating oscillation of an electron's lane while the circuit
/// is idle. Render-time only; the track position is untouched.
fn idle_jitter(e: &Electron, now: f64) -> f32 {
    JITTER_AMPLITUDE * (TAU * (now as f32 + e.phase_delay) / e.phase_duration).sin()
}

/// Rebuild `snapshot` from the current state at engine-clock `now`.
pub fn project(
    snapshot: &mut FrameSnapshot,
    layout: &Layout,
    battery: &Battery,
    electrons: &ElectronPool,
    emissions: &EmissionPool,
    now: f64,
) {
    snapshot.clear();

    let phase = battery.phase();
    let flowing = phase == BatteryPhase::ClosedActive;
    snapshot.circuit_closed = battery.circuit_closed();
    snapshot.exhausted = battery.exhausted();
    snapshot.electrolyte_level = battery.electrolyte_level();

    // Wire electrons: cull under the battery artwork always, under the
    // switch artwork only while it is drawn open.
    let switch_open = !battery.circuit_closed();
    for e in electrons.iter() {
        let lateral = if flowing {
            e.lateral
        } else {
            e.lateral + idle_jitter(e, now)
        };
        let point = layout.path.locate(e.track, lateral);
        if layout.battery_box.contains(point.pos) {
            continue;
        }
        if switch_open && layout.switch_box.contains(point.pos) {
            continue;
        }
        snapshot.electrons.push(PointInstance {
            x: point.pos.x,
            y: point.pos.y,
            alpha: 1.0,
        });
    }

    // Field-line markers only exist while current is flowing.
    if flowing {
        let length = layout.path.length();
        let mut s = 0.0;
        while s < length {
            let point = layout.path.locate(s, 0.0);
            if !layout.field_excluded(&point) {
                let orientation = match point.side {
                    Side::Top | Side::Bottom => FieldMarker::VERTICAL,
                    Side::Left | Side::Right => FieldMarker::HORIZONTAL,
                };
                snapshot.field_markers.push(FieldMarker {
                    x: point.pos.x,
                    y: point.pos.y,
                    orientation,
                });
            }
            s += FIELD_STEP;
        }
    }

    // Battery-interior electrons drift toward the terminal and fade.
    for emission in emissions.iter() {
        let progress = emission.progress(now);
        if progress >= 1.0 {
            continue;
        }
        let pos = emission.spawn_pos.lerp(layout.emission_target, progress);
        snapshot.emissions.push(PointInstance {
            x: pos.x,
            y: pos.y,
            alpha: 1.0 - progress,
        });
    }

    // Ion glyphs: one per remaining ion, filled along the fixed grid.
    for index in 0..battery.ion_count() {
        let pos = layout.glyph_pos(index);
        snapshot.ion_glyphs.push(PointInstance {
            x: pos.x,
            y: pos.y,
            alpha: 1.0,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;
    use crate::core::rng::Rng;
    use glam::Vec2;

    struct Fixture {
        layout: Layout,
        battery: Battery,
        electrons: ElectronPool,
        emissions: EmissionPool,
        snapshot: FrameSnapshot,
        rng: Rng,
    }

    fn fixture(particle_count: usize) -> Fixture {
        let config = EngineConfig {
            particle_count,
            ..EngineConfig::default()
        };
        let layout = Layout::new(&config);
        let mut rng = Rng::new(config.seed);
        let electrons = ElectronPool::new(particle_count, layout.path.length(), &mut rng);
        Fixture {
            layout,
            battery: Battery::new(),
            electrons,
            emissions: EmissionPool::new(),
            snapshot: FrameSnapshot::new(particle_count),
            rng,
        }
    }

    fn run(f: &mut Fixture, now: f64) {
        project(
            &mut f.snapshot,
            &f.layout,
            &f.battery,
            &f.electrons,
            &f.emissions,
            now,
        );
    }

    #[test]
    fn field_marker_count_for_default_loop() {
        // 2040 / 40 = 51 samples; 4 land on the top rail under the battery.
        let mut f = fixture(1);
        f.battery.toggle();
        run(&mut f, 0.0);
        assert_eq!(f.snapshot.field_markers.len(), 47);
    }

    #[test]
    fn no_field_markers_while_open() {
        let mut f = fixture(1);
        run(&mut f, 0.0);
        assert!(f.snapshot.field_markers.is_empty());
    }

    #[test]
    fn field_markers_never_under_battery() {
        let mut f = fixture(1);
        f.battery.toggle();
        run(&mut f, 0.0);
        for m in &f.snapshot.field_markers {
            let covered = m.y == 100.0 && m.x >= 250.0 && m.x <= 400.0;
            assert!(!covered, "marker under battery at ({}, {})", m.x, m.y);
        }
    }

    #[test]
    fn marker_orientation_follows_side() {
        let mut f = fixture(1);
        f.battery.toggle();
        run(&mut f, 0.0);
        for m in &f.snapshot.field_markers {
            let on_left_or_right = m.x <= 104.0 || m.x >= 731.0;
            if on_left_or_right {
                assert_eq!(m.orientation, FieldMarker::HORIZONTAL);
            } else {
                assert_eq!(m.orientation, FieldMarker::VERTICAL);
            }
        }
    }

    #[test]
    fn electrons_culled_under_battery() {
        let mut f = fixture(1000);
        f.battery.toggle();
        run(&mut f, 0.0);
        assert!(f.snapshot.electrons.len() < 1000, "nothing was culled");
        for p in &f.snapshot.electrons {
            assert!(
                !f.layout.battery_box.contains(Vec2::new(p.x, p.y)),
                "electron drawn under the battery at ({}, {})",
                p.x,
                p.y
            );
        }
    }

    #[test]
    fn switch_culls_only_while_open() {
        let mut f = fixture(1000);

        // Open: no electron under the switch artwork.
        run(&mut f, 0.0);
        for p in &f.snapshot.electrons {
            assert!(!f.layout.switch_box.contains(Vec2::new(p.x, p.y)));
        }

        // Closed: electrons pass through the switch region again.
        f.battery.toggle();
        run(&mut f, 0.0);
        let through = f
            .snapshot
            .electrons
            .iter()
            .any(|p| f.layout.switch_box.contains(Vec2::new(p.x, p.y)));
        assert!(through, "closed switch should not cull electrons");
    }

    #[test]
    fn idle_vibration_moves_points_between_frames() {
        let mut f = fixture(64);
        run(&mut f, 0.25);
        let first: Vec<(f32, f32)> = f.snapshot.electrons.iter().map(|p| (p.x, p.y)).collect();
        run(&mut f, 0.55);
        let second: Vec<(f32, f32)> = f.snapshot.electrons.iter().map(|p| (p.x, p.y)).collect();
        assert_ne!(first, second, "idle electrons should visibly vibrate");
    }

    #[test]
    fn no_vibration_while_flowing() {
        let mut f = fixture(64);
        f.battery.toggle();
        run(&mut f, 0.25);
        let first: Vec<(f32, f32)> = f.snapshot.electrons.iter().map(|p| (p.x, p.y)).collect();
        run(&mut f, 0.55);
        let second: Vec<(f32, f32)> = f.snapshot.electrons.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(first, second, "flowing electrons only move via advance()");
    }

    #[test]
    fn emission_fades_as_it_travels() {
        let mut f = fixture(1);
        let region = f.layout.emission_box;
        f.emissions.spawn(&region, 0.0, &mut f.rng);
        run(&mut f, 0.5);
        assert_eq!(f.snapshot.emissions.len(), 1);
        let p = &f.snapshot.emissions[0];
        assert!((p.alpha - 0.5).abs() < 1e-5, "alpha was {}", p.alpha);
    }

    #[test]
    fn finished_emission_not_rendered() {
        let mut f = fixture(1);
        let region = f.layout.emission_box;
        f.emissions.spawn(&region, 0.0, &mut f.rng);
        run(&mut f, 1.0);
        assert!(f.snapshot.emissions.is_empty());
    }

    #[test]
    fn ion_glyphs_track_ion_count() {
        let mut f = fixture(1);
        f.battery.toggle();
        f.battery.deplete();
        f.battery.deplete();
        run(&mut f, 0.0);
        assert_eq!(f.snapshot.ion_glyphs.len(), 65);
        assert_eq!(f.snapshot.electrolyte_level, 65.0);
    }
}
