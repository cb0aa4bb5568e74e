#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use portfolio_core::content::OWNER_NAME;
use portfolio_core::{
    logging, AppConfig, HttpAdminApi, MemorySessionStore, SharedApi, SharedSession, Storage,
};

use crate::context::Services;

/// Portfolio desktop app
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Portfolio site with admin console")]
struct Args {
    /// Data directory for the session store
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Admin backend base URL
    #[arg(long)]
    api_url: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = AppConfig::from_env()?.with_overrides(args.api_url.as_deref(), args.data_dir)?;
    logging::init(&config.log_filter);

    // A broken session store should not keep the public pages from loading
    let session: SharedSession = match Storage::new(config.session_db_path()) {
        Ok(storage) => Arc::new(storage),
        Err(e) => {
            tracing::error!(
                "Failed to open session store in {:?}, admin login will not persist: {}",
                config.data_dir,
                e
            );
            Arc::new(MemorySessionStore::new())
        }
    };
    let api: SharedApi = Arc::new(HttpAdminApi::from_config(&config)?);

    tracing::info!(
        "Starting with API {} and data dir: {:?}",
        config.api_base_url,
        config.data_dir
    );
    context::install(Services {
        config,
        session,
        api,
    });

    let window = WindowBuilder::new()
        .with_title(OWNER_NAME)
        .with_inner_size(dioxus::desktop::LogicalSize::new(1200.0, 900.0))
        .with_resizable(true);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(Config::new().with_window(window))
        .launch(app::App);

    Ok(())
}
