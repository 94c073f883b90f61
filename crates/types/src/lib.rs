pub mod geometry;
pub mod text;

pub use geometry::{Point, Rect, Size};
pub use text::{Direction, PunctuationMode, PunctuationType, Script, TextAlign};
