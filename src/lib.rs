//! Intelboard
//!
//! Client for a dated attack-report API: loads the report index, renders the
//! selected report's ranked attacks and lessons into an explicit render
//! context, and presents it as HTML or terminal output.

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod dates;
pub mod defaults;
pub mod errors;
pub mod loader;
pub mod models;
pub mod renderer;
pub mod terminal;
pub mod view;

pub use errors::{IntelError, IntelResult};
pub use view::Dashboard;
