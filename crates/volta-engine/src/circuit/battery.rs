/// Electrolyte level of a fresh cell, in fill-height units.
pub const FULL_ELECTROLYTE: f32 = 75.0;
/// Ion count of a fresh cell.
pub const FULL_IONS: u32 = 75;
/// Amount removed from each quantity by one depletion tick.
const DEPLETION_STEP: f32 = 5.0;

/// Phase of the battery state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryPhase {
    /// Circuit closed, charge remaining: current flows and the cell depletes.
    ClosedActive,
    /// Circuit open: everything frozen at its current level.
    Open,
    /// Electrolyte gone. Terminal until an explicit reset.
    Exhausted,
}

/// The battery cell: two depleting quantities, the circuit-closed toggle,
/// and the terminal exhausted flag.
#[derive(Debug, Clone)]
pub struct Battery {
    electrolyte_level: f32,
    ion_count: u32,
    circuit_closed: bool,
    exhausted: bool,
}

impl Battery {
    pub fn new() -> Self {
        Self {
            electrolyte_level: FULL_ELECTROLYTE,
            ion_count: FULL_IONS,
            circuit_closed: false,
            exhausted: false,
        }
    }

    pub fn phase(&self) -> BatteryPhase {
        if self.exhausted {
            BatteryPhase::Exhausted
        } else if self.circuit_closed {
            BatteryPhase::ClosedActive
        } else {
            BatteryPhase::Open
        }
    }

    pub fn electrolyte_level(&self) -> f32 {
        self.electrolyte_level
    }

    pub fn ion_count(&self) -> u32 {
        self.ion_count
    }

    pub fn circuit_closed(&self) -> bool {
        self.circuit_closed
    }

    pub fn exhausted(&self) -> bool {
        self.exhausted
    }

    /// Flip the circuit open/closed. No-op once exhausted — a dead cell
    /// cannot be switched back on, only reset.
    pub fn toggle(&mut self) {
        if self.exhausted {
            log::debug!("toggle ignored: battery exhausted");
            return;
        }
        self.circuit_closed = !self.circuit_closed;
        log::debug!("circuit closed: {}", self.circuit_closed);
    }

    /// One depletion tick. Both quantities step down together and clamp at
    /// zero independently; hitting zero electrolyte is terminal.
    pub fn deplete(&mut self) {
        if self.phase() != BatteryPhase::ClosedActive {
            return;
        }
        self.electrolyte_level = (self.electrolyte_level - DEPLETION_STEP).max(0.0);
        self.ion_count = self.ion_count.saturating_sub(DEPLETION_STEP as u32);
        if self.electrolyte_level == 0.0 {
            self.exhausted = true;
            log::debug!("battery exhausted");
        }
    }

    /// Restore a fresh cell with the circuit open. Valid from any state.
    pub fn reset(&mut self) {
        self.electrolyte_level = FULL_ELECTROLYTE;
        self.ion_count = FULL_IONS;
        self.circuit_closed = false;
        self.exhausted = false;
        log::debug!("battery reset");
    }
}

impl Default for Battery {
    fn default() -> Self {
        Self::new()
    }
}
