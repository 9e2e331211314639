use glam::Vec2;

use crate::circuit::path::{LoopPath, RailPoint, Side};
use crate::config::EngineConfig;

/// Axis-aligned rectangle in world units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}

/// Number of ion glyph columns in the battery indicator.
pub const GLYPH_COLS: u32 = 15;
/// Number of ion glyph rows in the battery indicator.
pub const GLYPH_ROWS: u32 = 5;

/// All overlay geometry, derived from the same origin and dimensions as
/// the loop path so the occlusion logic can never drift from the layout.
///
/// The battery sits across the left half of the top rail, the switch
/// across the right half.
#[derive(Debug, Clone)]
pub struct Layout {
    pub path: LoopPath,
    /// Region occluding wire electrons at all times.
    pub battery_box: Rect,
    /// Region occluding wire electrons while the switch is open.
    pub switch_box: Rect,
    /// Battery-interior region where emitted electrons appear.
    pub emission_box: Rect,
    /// Point emitted electrons drift toward.
    pub emission_target: Vec2,
}

impl Layout {
    pub fn new(config: &EngineConfig) -> Self {
        let o = Vec2::from(config.loop_origin);
        let path = LoopPath::new(o, config.loop_width, config.loop_height);
        Self {
            path,
            battery_box: Rect::new(
                Vec2::new(o.x + 150.0, o.y - 40.0),
                Vec2::new(o.x + 300.0, o.y + 40.0),
            ),
            switch_box: Rect::new(
                Vec2::new(o.x + 400.0, o.y - 15.0),
                Vec2::new(o.x + 460.0, o.y + 15.0),
            ),
            emission_box: Rect::new(
                Vec2::new(o.x + 170.0, o.y - 30.0),
                Vec2::new(o.x + 280.0, o.y - 10.0),
            ),
            emission_target: Vec2::new(o.x + 290.0, o.y),
        }
    }

    /// Whether a field-line sample must be dropped: samples on the top rail
    /// under the battery's horizontal extent are covered by its artwork.
    pub fn field_excluded(&self, point: &RailPoint) -> bool {
        point.side == Side::Top
            && point.pos.x >= self.battery_box.min.x
            && point.pos.x <= self.battery_box.max.x
    }

    /// Center of ion glyph cell `index` on the battery's fixed grid,
    /// filled row by row from the bottom of the electrolyte.
    pub fn glyph_pos(&self, index: u32) -> Vec2 {
        let col = index % GLYPH_COLS;
        let row = index / GLYPH_COLS;
        let cell_w = self.battery_box.width() / GLYPH_COLS as f32;
        Vec2::new(
            self.battery_box.min.x + cell_w * (col as f32 + 0.5),
            self.battery_box.max.y - 7.5 - 15.0 * row as f32,
        )
    }
}
