//! # Editor Configuration
//!
//! Geometry rules the canvas editor enforces on every mutation.
//!
//! | Setting | Default |
//! |---------|---------|
//! | Minimum element size | 50 × 20 |
//! | Arrow nudge | 1 unit (10 with Shift) |
//! | Duplicate offset | +20, +20 |
//! | New element stacking | (50, 50), 60 units per existing element |

use crate::document::{Position, Size};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorConfig {
    /// Floor applied to every resize.
    pub min_size: Size,

    /// Arrow-key step without modifiers.
    pub nudge_step: f32,

    /// Arrow-key step with Shift held.
    pub nudge_step_large: f32,

    /// Offset of a duplicate from its source, on both axes.
    pub duplicate_offset: f32,

    /// Where the first added element lands.
    pub stack_origin: Position,

    /// Vertical distance between successively added elements.
    pub stack_spacing: f32,
}

impl EditorConfig {
    pub const DEFAULT: EditorConfig = EditorConfig {
        min_size: Size {
            width: 50.0,
            height: 20.0,
        },
        nudge_step: 1.0,
        nudge_step_large: 10.0,
        duplicate_offset: 20.0,
        stack_origin: Position { x: 50.0, y: 50.0 },
        stack_spacing: 60.0,
    };

    /// Clamp a size to the configured floor.
    pub fn clamp_size(&self, size: Size) -> Size {
        Size::new(
            size.width.max(self.min_size.width),
            size.height.max(self.min_size.height),
        )
    }

    /// Keep positions on the canvas (non-negative).
    pub fn clamp_position(&self, position: Position) -> Position {
        Position::new(position.x.max(0.0), position.y.max(0.0))
    }

    /// Position for the `index`-th added element.
    pub fn stacked_position(&self, index: usize) -> Position {
        self.stack_origin
            .offset(0.0, self.stack_spacing * index as f32)
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
