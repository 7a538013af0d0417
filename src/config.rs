//! Configuration types.

/// Mail-source configuration.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Mailbox search query handed to the retrieval collaborator.
    pub query: String,
    /// Maximum number of messages to ingest per invocation.
    pub max_messages: usize,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            query: "label:inbox".to_string(),
            max_messages: 250,
        }
    }
}

impl SourceConfig {
    /// Build config from environment variables, falling back to defaults.
    ///
    /// Reads `MAIL_ORIGINS_QUERY` and `MAIL_ORIGINS_MAX_MESSAGES`.
    /// Unparseable values fall back rather than fail.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let query = std::env::var("MAIL_ORIGINS_QUERY").unwrap_or(defaults.query);

        let max_messages: usize = std::env::var("MAIL_ORIGINS_MAX_MESSAGES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.max_messages);

        Self {
            query,
            max_messages,
        }
    }
}
