mod auth;
mod generate;
mod health;
mod metrics;
mod suggestions;

pub use auth::require_api_key;
pub use generate::generate_handler;
pub use health::health_handler;
pub use metrics::metrics_handler;
pub use suggestions::suggestions_handler;
