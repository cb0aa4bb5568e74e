//! Portfolio Core Library
//!
//! Everything behind the portfolio site that is not rendering.
//!
//! ## Overview
//!
//! - [`content`]: the static site content (cards, categories, degrees, links)
//! - [`disclosure`]: expand/collapse and filter state for card grids
//! - [`api`]: the admin backend client
//! - [`console`]: login and message dashboard controllers
//! - [`guard`]: route protection for admin pages
//! - [`storage`]: durable session token store (redb)
//!
//! ## Quick Start
//!
//! ```ignore
//! use std::sync::Arc;
//! use portfolio_core::{AppConfig, Dashboard, HttpAdminApi, Storage};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::from_env()?;
//!     let session = Arc::new(Storage::new(config.session_db_path())?);
//!     let api = Arc::new(HttpAdminApi::from_config(&config)?);
//!
//!     let dashboard = Dashboard::new(api, session);
//!     dashboard.fetch_messages().await?;
//!     for message in dashboard.messages() {
//!         println!("{} <{}>: {}", message.name, message.email, message.subject);
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod console;
pub mod content;
pub mod disclosure;
pub mod error;
pub mod guard;
pub mod logging;
pub mod session;
pub mod storage;
pub mod types;

pub use api::{AdminApi, HttpAdminApi, SharedApi};
pub use config::AppConfig;
pub use console::{BusyGuard, BusySet, Dashboard, DashboardSnapshot, LoginController};
pub use disclosure::{Categorized, GridState, PopupState, TransitionLatch, FILTER_ALL};
pub use error::{PortfolioError, PortfolioResult};
pub use guard::{AuthState, GuardDecision, RouteGuard};
pub use session::{MemorySessionStore, SessionStore, SharedSession};
pub use storage::Storage;
pub use types::{Banner, BannerKind, Credentials, Message};
