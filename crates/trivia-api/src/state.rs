use sqlx::PgPool;

use crate::{ApiConfig, config::Environment};

/// Shared handler state, cloned into every request by axum
#[derive(Clone, Debug)]
pub struct ApiState {
    pub pool: PgPool,
    pub environment: Environment,
}

impl ApiState {
    pub const fn new(config: &ApiConfig, pool: PgPool) -> Self {
        Self {
            pool,
            environment: config.env,
        }
    }
}
