//! Reusable UI components.
//!
//! Styling is class-based; the desktop app ships the stylesheet.

mod banner;
mod button;
mod filter_pills;
mod input;
mod tags;

pub use banner::*;
pub use button::*;
pub use filter_pills::*;
pub use input::*;
pub use tags::*;
