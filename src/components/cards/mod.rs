//! Card grid components.
//!
//! - `DisclosureGrid`: chooses inline or popup from the page's style
//! - `CardGrid`: inline morph grid with optional category filter
//! - `PopupGrid`: grid whose cards open a full-viewport overlay
//! - `MorphCard` / `CardDetail`: a single card and its expanded content

mod card_detail;
mod card_grid;
mod disclosure_grid;
mod escape_key;
mod morph_card;
mod popup_grid;

pub use card_detail::CardDetail;
pub use card_grid::CardGrid;
pub use disclosure_grid::DisclosureGrid;
pub use escape_key::use_escape_key;
pub use morph_card::MorphCard;
pub use popup_grid::PopupGrid;
