//! Home page handler.
//!
//! Renders the home template with the deployed application version. The
//! version is read from the environment on every request so a wrapper
//! script can change it without touching configuration files.

use axum::{extract::State, response::Html};
use tracing::instrument;

use crate::config::{APP_VERSION_ENV, DEFAULT_APP_VERSION};
use crate::error::AppError;
use crate::state::AppState;

/// Resolve the application version from the environment, falling back to
/// the default literal when the variable is unset.
fn resolve_app_version() -> String {
    std::env::var(APP_VERSION_ENV).unwrap_or_else(|_| DEFAULT_APP_VERSION.to_string())
}

/// Home page handler showing the deployed application version.
#[instrument(name = "home::show", skip(state))]
pub async fn show(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let app_version = resolve_app_version();

    let mut context = tera::Context::new();
    context.insert("config", &state.config.ui);
    context.insert("app_version", &app_version);

    let html = state.tera.render("home.html", &context)?;
    Ok(Html(html))
}
