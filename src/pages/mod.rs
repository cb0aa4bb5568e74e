//! Page components for the portfolio app.

mod about;
mod admin;
mod contact;
mod education;
mod experience;
mod home;
mod login;
mod not_found;
mod projects;
mod skills;

pub use about::{About, AboutClassic};
pub use admin::Admin;
pub use contact::Contact;
pub use education::Education;
pub use experience::Experience;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use projects::Projects;
pub use skills::Skills;
