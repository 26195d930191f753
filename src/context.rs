//! Application context providing dependency injection root.

use std::sync::Arc;

use crate::config::Config;
use crate::di::FromRef;

/// Root application context for dependency injection.
///
/// Holds the shared dependencies; each field is extractable via `FromRef`
/// so services can be resolved with `from_context!`.
#[derive(Clone)]
pub struct Context {
    /// Application configuration.
    pub config: Arc<Config>,
}

impl Context {
    /// Creates a new context with the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

impl From<Config> for Context {
    fn from(config: Config) -> Self {
        Self::new(config)
    }
}

impl FromRef<Context> for Arc<Config> {
    fn from_ref(ctx: &Context) -> Self {
        ctx.config.clone()
    }
}
