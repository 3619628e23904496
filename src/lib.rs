//! Publica client core.
//!
//! Shared data layer for the Publica mobile app: typed REST client, feed
//! aggregation, like and comment mutation, auth/session flows and the
//! equipment-incident feed. Screens sit on top of this crate; nothing in
//! here renders anything.

pub mod api;
pub mod auth;
pub mod config;
pub mod errors;
pub mod feed;
pub mod models;
pub mod upload;

pub use api::ApiClient;
pub use auth::{AuthClient, Session};
pub use config::Config;
pub use errors::ApiError;
pub use feed::FeedService;
pub use upload::UploadClient;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing for binaries embedding this crate.
///
/// Honors `RUST_LOG` when set, otherwise falls back to the configured log
/// level. Calling this twice panics (subscriber already set), so apps should
/// call it exactly once at startup.
pub fn init_tracing(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
