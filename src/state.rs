use crate::client::ScoringClient;
use crate::config::Config;
use crate::session::SessionStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub client: ScoringClient,
    pub sessions: SessionStore,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let client = ScoringClient::new(&config.backend_url);
        Self {
            config,
            client,
            sessions: SessionStore::new(),
        }
    }
}
