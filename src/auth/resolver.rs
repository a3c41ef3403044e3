use std::collections::HashMap;

/// Resolves a presented credential to a known agent identity
///
/// Built once at startup from the configured agent->token table and
/// read-only afterwards. The reverse (token->agent) map is precomputed so
/// resolution stays a single lookup even if the agent set grows.
#[derive(Debug)]
pub struct IdentityResolver {
    by_token: HashMap<String, String>,
    names: Vec<String>,
}

impl IdentityResolver {
    /// Builds a resolver from an agent-name -> credential table
    pub fn new(agent_tokens: &HashMap<String, String>) -> Self {
        let by_token = agent_tokens
            .iter()
            .map(|(name, token)| (token.clone(), name.clone()))
            .collect();
        let mut names: Vec<String> = agent_tokens.keys().cloned().collect();
        names.sort();

        Self { by_token, names }
    }

    /// Returns the agent name the credential belongs to, if any
    ///
    /// Exact byte-for-byte equality; no trimming or normalization.
    pub fn resolve(&self, credential: &str) -> Option<&str> {
        self.by_token.get(credential).map(String::as_str)
    }

    /// The known agent names, used to build the queue store at startup
    pub fn agent_names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
