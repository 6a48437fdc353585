//! Shared application state for request handlers.

use std::sync::Arc;
use tera::Tera;

use crate::config::AppConfig;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Contains the application configuration and the Tera template engine.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub tera: Arc<Tera>,
}

impl AppState {
    /// Creates a new application state from the given configuration and templates.
    pub fn new(config: AppConfig, tera: Tera) -> Self {
        Self {
            config: Arc::new(config),
            tera: Arc::new(tera),
        }
    }
}
