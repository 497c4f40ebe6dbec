pub mod category;
pub mod config;
pub mod deserializers;
pub mod error;
pub mod metrics;
pub mod middleware;
pub mod pagination;
pub mod question;
pub mod quiz;
pub mod response;
pub mod router;
pub mod state;
pub mod tracing;

pub use config::ApiConfig;
pub use state::ApiState;
