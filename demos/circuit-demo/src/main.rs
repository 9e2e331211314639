//! Drives the circuit engine through a full battery life at 60 fps and
//! logs what a renderer would see. No graphics; run with
//! `RUST_LOG=info cargo run -p circuit-demo`.

use volta_engine::{CircuitRunner, ConfigError, EngineConfig, InputEvent};

const DT: f32 = 1.0 / 60.0;

fn main() -> Result<(), ConfigError> {
    env_logger::init();

    let mut runner = CircuitRunner::new(EngineConfig::default())?;

    // Close the switch through the one UI command.
    runner.push_input(InputEvent::Switch);

    // 16 simulated seconds: the battery exhausts at 15.
    for frame in 0..(16 * 60) {
        runner.tick(DT);
        if frame % 60 == 59 {
            let snapshot = runner.snapshot();
            log::info!(
                "t={:>5.1}s electrons={} markers={} emissions={} electrolyte={} ions={}",
                runner.clock(),
                snapshot.electrons.len(),
                snapshot.field_markers.len(),
                snapshot.emissions.len(),
                snapshot.electrolyte_level,
                snapshot.ion_glyphs.len(),
            );
        }
    }

    let battery = runner.battery();
    log::info!(
        "battery exhausted: {} (level {}, ions {})",
        battery.exhausted(),
        battery.electrolyte_level(),
        battery.ion_count()
    );

    // The same command now resets the cell.
    runner.push_input(InputEvent::Switch);
    runner.tick(DT);
    log::info!(
        "after reset: level {}, circuit closed {}",
        runner.battery().electrolyte_level(),
        runner.battery().circuit_closed()
    );

    Ok(())
}
