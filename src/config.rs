use std::env;

/// Process-wide configuration, loaded once at startup and passed explicitly
/// into the collaborator clients.
#[derive(Debug, Clone)]
pub struct Config {
    pub google_api_key: String,
    pub ghl_api_key: String,
    pub ghl_calendar_id: String,
    pub port: u16,
}

impl Config {
    /// Reads configuration from the environment. Missing credentials abort
    /// startup; `PORT` falls back to 3000.
    pub fn from_env() -> Self {
        Self {
            google_api_key: env::var("GOOGLE_API_KEY").expect("GOOGLE_API_KEY must be set"),
            ghl_api_key: env::var("GHL_API_KEY").expect("GHL_API_KEY must be set"),
            ghl_calendar_id: env::var("GHL_CALENDAR_ID").expect("GHL_CALENDAR_ID must be set"),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
        }
    }
}
