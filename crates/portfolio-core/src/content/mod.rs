//! Static page content.
//!
//! Everything in here is compiled into the binary and never mutated. Card
//! pages expose a [`CardGridPage`]; the remaining pages expose plain lists.

mod about;
mod contact;
mod education;
mod experience;
mod projects;
mod skills;

pub use about::{ABOUT, ABOUT_CLASSIC};
pub use contact::{CONTACT_CHANNELS, SOCIAL_LINKS};
pub use education::{CERTIFICATIONS, DEGREES};
pub use experience::EXPERIENCE;
pub use projects::PROJECTS;
pub use skills::SKILLS;

use crate::disclosure::Categorized;

/// Display name shown in the header and on the home page.
pub const OWNER_NAME: &str = "Alex Morgan";

/// One-line headline under the owner name.
pub const OWNER_HEADLINE: &str =
    "BCA Graduate | Python | IoT Enthusiast | Embedded Systems | MERN Stack Developer";

/// Detail text of a card: a paragraph or a bullet list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardBody {
    Text(&'static str),
    List(&'static [&'static str]),
}

/// External link attached to a card (GitHub, demo...).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardLink {
    pub label: &'static str,
    pub url: &'static str,
}

/// A single topic card on a disclosure grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardEntry {
    /// Unique within its grid
    pub id: &'static str,
    pub title: &'static str,
    /// Secondary heading (company and duration for experience cards)
    pub subtitle: Option<&'static str>,
    /// Short description shown with the detail view
    pub summary: &'static str,
    pub body: CardBody,
    pub tags: &'static [&'static str],
    pub accent_color: &'static str,
    pub icon: &'static str,
    /// Category id matched against the active filter
    pub category: &'static str,
    pub links: &'static [CardLink],
}

impl Categorized for CardEntry {
    fn id(&self) -> &str {
        self.id
    }

    fn category(&self) -> &str {
        self.category
    }
}

/// A filter choice offered above a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryChoice {
    pub id: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

/// How a grid discloses a card's details.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisclosureStyle {
    /// The card morphs in place; Escape collapses it
    Inline,
    /// A full-viewport overlay shows the entry
    Popup,
}

/// Content and presentation mode of one card page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CardGridPage {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub style: DisclosureStyle,
    /// Filter choices; empty when the page has no filter bar
    pub categories: &'static [CategoryChoice],
    pub entries: &'static [CardEntry],
}

impl CardGridPage {
    /// Find an entry by id.
    pub fn entry(&self, id: &str) -> Option<&'static CardEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Whether this page renders a filter bar.
    pub fn has_filter(&self) -> bool {
        !self.categories.is_empty()
    }
}

/// A degree on the education page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EducationEntry {
    pub degree: &'static str,
    pub institution: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
    pub subjects: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Certification {
    pub name: &'static str,
    pub issuer: &'static str,
    pub date: &'static str,
}

/// A way to reach the owner, listed on the contact page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactChannel {
    pub label: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
    /// `mailto:`/`tel:` style target; `None` for informational rows
    pub href: Option<&'static str>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub icon: &'static str,
    pub href: &'static str,
}

/// All card pages, for checks that must hold across the whole site.
pub fn card_pages() -> [&'static CardGridPage; 5] {
    [&ABOUT, &ABOUT_CLASSIC, &PROJECTS, &SKILLS, &EXPERIENCE]
}
