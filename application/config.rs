use std::env;

use tracing::warn;

/// Environment configuration, read once at startup. Missing credentials leave
/// the corresponding capability unconfigured instead of aborting; requests
/// that need it get a configuration error.
pub struct Config {
    pub port: u16,
    pub backend_url: Option<String>,
    pub backend_service_key: Option<String>,
    pub places_api_key: Option<String>,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: load_port(),
            backend_url: load_optional("SUPABASE_URL"),
            backend_service_key: load_optional("SUPABASE_SERVICE_KEY"),
            places_api_key: load_optional("PLACES_API_KEY"),
        }
    }
}

fn load_optional(key: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) if !value.is_empty() => Some(value),
        _ => {
            warn!(key, "environment variable not set");
            None
        }
    }
}

fn load_port() -> u16 {
    match env::var("PORT") {
        Ok(value) => value.parse().expect("PORT to be a valid port number"),
        Err(_) => 3000,
    }
}
