//! UI Components for the portfolio app.

pub mod cards;
mod message_card;
mod nav_header;
mod protected;

pub use message_card::MessageCard;
pub use nav_header::{NavHeader, NavLocation};
pub use protected::Protected;
