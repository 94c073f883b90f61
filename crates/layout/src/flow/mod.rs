//! Directional layout flows.
//!
//! A document selects one flow from its direction and runs it over the whole
//! run buffer. Only the horizontal flow consults the kinsoku and punctuation
//! engines; the vertical flow places runs by their natural advance.

mod horizontal;
mod vertical;

pub use horizontal::HorizontalFlow;
pub use vertical::{VerticalFlow, is_tate_chu_yoko};

use crate::context::LayoutContext;
use stone_types::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutFlow {
    Horizontal(HorizontalFlow),
    Vertical(VerticalFlow),
}

impl LayoutFlow {
    pub fn for_direction(direction: Direction) -> Self {
        match direction {
            Direction::LrTb => LayoutFlow::Horizontal(HorizontalFlow),
            Direction::TbRl => LayoutFlow::Vertical(VerticalFlow),
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            LayoutFlow::Horizontal(_) => Direction::LrTb,
            LayoutFlow::Vertical(_) => Direction::TbRl,
        }
    }

    /// Writes `position`, `frame` and `line` of every run in `ctx`.
    pub fn layout(&self, ctx: &mut LayoutContext) {
        match self {
            LayoutFlow::Horizontal(flow) => flow.layout(ctx),
            LayoutFlow::Vertical(flow) => flow.layout(ctx),
        }
    }
}
