use bytemuck::{Pod, Zeroable};

/// One drawable point written to the frame snapshot.
/// Flat f32 layout: 3 floats = 12 bytes stride, castable to a byte slice
/// for renderers that want a raw buffer.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct PointInstance {
    /// X position in world space.
    pub x: f32,
    /// Y position in world space.
    pub y: f32,
    /// Opacity (0.0 = invisible, 1.0 = opaque).
    pub alpha: f32,
}

impl PointInstance {
    pub const FLOATS: usize = 3;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;
}

/// One field-line marker sampled along the loop.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct FieldMarker {
    pub x: f32,
    pub y: f32,
    /// Orientation code: `VERTICAL` on the top/bottom rails, `HORIZONTAL`
    /// on the left/right rails.
    pub orientation: f32,
}

impl FieldMarker {
    pub const VERTICAL: f32 = 0.0;
    pub const HORIZONTAL: f32 = 1.0;
}

/// Everything an external renderer needs to draw one frame.
/// Rebuilt in place every tick; the renderer makes no callbacks into the
/// engine and the engine makes no assumption about the renderer.
pub struct FrameSnapshot {
    /// Visible wire electrons, after occlusion culling.
    pub electrons: Vec<PointInstance>,
    /// Field-line markers; empty unless current is flowing.
    pub field_markers: Vec<FieldMarker>,
    /// Battery-interior electrons with interpolated position and opacity.
    pub emissions: Vec<PointInstance>,
    /// Ion glyph centers; length equals the current ion count.
    pub ion_glyphs: Vec<PointInstance>,
    /// Electrolyte fill height, in the same units it is stored in.
    pub electrolyte_level: f32,
    pub circuit_closed: bool,
    pub exhausted: bool,
}

impl FrameSnapshot {
    pub fn new(particle_capacity: usize) -> Self {
        Self {
            electrons: Vec::with_capacity(particle_capacity),
            field_markers: Vec::with_capacity(64),
            emissions: Vec::with_capacity(8),
            ion_glyphs: Vec::with_capacity(80),
            electrolyte_level: 0.0,
            circuit_closed: false,
            exhausted: false,
        }
    }

    /// Clear all per-frame data, keeping allocations.
    pub fn clear(&mut self) {
        self.electrons.clear();
        self.field_markers.clear();
        self.emissions.clear();
        self.ion_glyphs.clear();
        self.electrolyte_level = 0.0;
        self.circuit_closed = false;
        self.exhausted = false;
    }

    /// Electron instances as raw bytes for flat-buffer renderers.
    pub fn electrons_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.electrons)
    }

    /// Field markers as raw bytes for flat-buffer renderers.
    pub fn field_markers_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.field_markers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_instance_is_3_floats() {
        assert_eq!(std::mem::size_of::<PointInstance>(), 12);
        assert_eq!(PointInstance::STRIDE_BYTES, 12);
    }

    #[test]
    fn byte_views_match_counts() {
        let mut snapshot = FrameSnapshot::new(4);
        snapshot.electrons.push(PointInstance::default());
        snapshot.electrons.push(PointInstance::default());
        assert_eq!(snapshot.electrons_bytes().len(), 2 * PointInstance::STRIDE_BYTES);
    }

    #[test]
    fn clear_resets_everything() {
        let mut snapshot = FrameSnapshot::new(4);
        snapshot.electrons.push(PointInstance::default());
        snapshot.field_markers.push(FieldMarker::default());
        snapshot.electrolyte_level = 75.0;
        snapshot.circuit_closed = true;
        snapshot.clear();
        assert!(snapshot.electrons.is_empty());
        assert!(snapshot.field_markers.is_empty());
        assert_eq!(snapshot.electrolyte_level, 0.0);
        assert!(!snapshot.circuit_closed);
    }
}
