use std::collections::HashMap;

/// Agents registered when no RELAY_AGENTS override is present
const DEFAULT_AGENTS: &[&str] = &["rhodes", "chadly"];

const DEFAULT_PORT: u16 = 3000;

/// Relay configuration, read from the environment at startup
///
/// - `PORT` — listen port (default 3000)
/// - `RELAY_AGENTS` — comma-separated agent names (default `rhodes,chadly`)
/// - `<NAME>_TOKEN` — credential for each agent (default `<name>-dev-token`)
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub port: u16,
    pub agent_tokens: HashMap<String, String>,
}

impl RelayConfig {
    pub fn from_env() -> Self {
        Self::from_env_with(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup
    ///
    /// Split out from `from_env` so the fallback logic can be tested
    /// without mutating process environment.
    pub fn from_env_with(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = match lookup("PORT").and_then(|v| v.parse().ok()) {
            Some(port) => port,
            None => {
                tracing::warn!("PORT not set, using default {}", DEFAULT_PORT);
                DEFAULT_PORT
            }
        };

        let names: Vec<String> = match lookup("RELAY_AGENTS") {
            Some(list) => list
                .split(',')
                .map(|name| name.trim().to_lowercase())
                .filter(|name| !name.is_empty())
                .collect(),
            None => DEFAULT_AGENTS.iter().map(|s| s.to_string()).collect(),
        };

        let agent_tokens = names
            .into_iter()
            .map(|name| {
                let var = format!("{}_TOKEN", name.to_uppercase());
                let token = match lookup(&var) {
                    Some(token) => token,
                    None => {
                        tracing::warn!("{} not set, using dev default", var);
                        format!("{}-dev-token", name)
                    }
                };
                (name, token)
            })
            .collect();

        Self { port, agent_tokens }
    }
}
