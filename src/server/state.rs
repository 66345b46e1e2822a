use std::sync::Arc;

use super::config::ServerConfig;
use super::probe::{DatabaseProbe, PostgresProbe};

/// Shared state handed to every route.
pub struct State {
    pub config: ServerConfig,
    pub probe: Arc<dyn DatabaseProbe>,
}

impl State {
    /// State backed by a real Postgres probe for `config.database_url`.
    #[must_use]
    pub fn new(config: ServerConfig) -> Arc<Self> {
        let probe = Arc::new(PostgresProbe::new(config.database_url.as_str()));
        Self::with_probe(config, probe)
    }

    #[must_use]
    pub fn with_probe(config: ServerConfig, probe: Arc<dyn DatabaseProbe>) -> Arc<Self> {
        Arc::new(Self { config, probe })
    }
}
