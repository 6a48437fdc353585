//! Placard: a small status page service.
//!
//! Exposes a liveness probe at `/health` and a home page at `/home` that
//! renders the deployed application version from the `APP_VERSION`
//! environment variable.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod templates;

pub use error::AppError;
pub use routes::create_router;
pub use state::AppState;
