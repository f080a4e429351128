use crate::clients::ghl::GhlClient;
use crate::clients::maps::DistanceMatrixClient;
use crate::config::Config;

/// Shared per-app state: the two outbound collaborators, built once and
/// cloned into each worker. The underlying HTTP connection pool is shared.
pub struct AppState {
    pub appointments: GhlClient,
    pub travel: DistanceMatrixClient,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        let http = reqwest::Client::new();
        Self {
            appointments: GhlClient::new(
                http.clone(),
                config.ghl_api_key.clone(),
                config.ghl_calendar_id.clone(),
            ),
            travel: DistanceMatrixClient::new(http, config.google_api_key.clone()),
        }
    }
}
