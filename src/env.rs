//! Environment resolution: which endpoint pair the client targets.

use std::env;

pub const LOCAL_API_BASE_URL: &str = "http://localhost:8000";
pub const LOCAL_WS_BASE_URL: &str = "ws://localhost:8000";
pub const REMOTE_API_BASE_URL: &str = "https://aws.adasistemas.com.br/assistente";
pub const REMOTE_WS_BASE_URL: &str = "wss://aws.adasistemas.com.br/assistente";

/// Opaque token that unlocks the developer-only panels.
pub const DEV_PANEL_TOKEN: &str = "f9a6e6f8-9c6d-4b0b-8b4d-7e5c6f2a0f1d";

/// Base endpoint pair, resolved once at startup and immutable afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Environment {
    pub api_base_url: &'static str,
    pub ws_base_url: &'static str,
}

/// Pure function of the host context: the local pair when development mode
/// is forced, requested via `useDev=true`, or the hostname is a loopback
/// address; the production pair otherwise. Never fails.
pub fn detect_environment(hostname: &str, query: &str, force_dev: bool) -> Environment {
    let use_dev = force_dev || query_param(query, "useDev").as_deref() == Some("true");

    if use_dev || hostname == "localhost" || hostname == "127.0.0.1" {
        Environment {
            api_base_url: LOCAL_API_BASE_URL,
            ws_base_url: LOCAL_WS_BASE_URL,
        }
    } else {
        Environment {
            api_base_url: REMOTE_API_BASE_URL,
            ws_base_url: REMOTE_WS_BASE_URL,
        }
    }
}

/// Whether the query string carries the developer token that reveals the
/// sources and documents panels.
pub fn dev_panels_enabled(query: &str) -> bool {
    query_param(query, "dev").as_deref() == Some(DEV_PANEL_TOKEN)
}

pub fn query_param(query: &str, key: &str) -> Option<String> {
    query
        .trim_start_matches('?')
        .split('&')
        .find_map(|pair| {
            let (name, value) = pair.split_once('=')?;
            (name == key).then(|| value.to_string())
        })
}

/// Desktop builds have no page location; the host context arrives through
/// environment variables loaded by dotenv at startup.
pub fn from_process_env() -> (Environment, bool) {
    let hostname = env::var("ASSISTENTE_HOSTNAME").unwrap_or_default();
    let query = env::var("ASSISTENTE_QUERY").unwrap_or_default();
    let force_dev = env::var("ASSISTENTE_USE_DEV").is_ok_and(|value| value == "true");

    (
        detect_environment(&hostname, &query, force_dev),
        dev_panels_enabled(&query),
    )
}
