use std::fmt;

pub const DEFAULT_ENDPOINT: &str = "http://localhost:1234/v1";
pub const DEFAULT_MODEL: &str = "llama-3.1-70b-instruct";

/// Connection settings for an OpenAI-compatible LLM server (e.g. LM Studio).
///
/// The API key is optional; local servers usually run without one.
#[derive(Clone, PartialEq, Eq)]
pub struct LlmEndpoint {
    pub url: String,
    pub api_key: String,
    pub model: String,
}

impl LlmEndpoint {
    pub fn new(url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }
}

impl Default for LlmEndpoint {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT, "")
    }
}

// The key never ends up in logs.
impl fmt::Debug for LlmEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmEndpoint")
            .field("url", &self.url)
            .field("api_key", &if self.has_api_key() { "<redacted>" } else { "" })
            .field("model", &self.model)
            .finish()
    }
}
