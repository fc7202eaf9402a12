use std::env;
use std::fmt;
use std::time::Duration;

use crate::error::{LookupError, Result};
use crate::lookup::SupplierProfile;

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o-search-preview";
const DEFAULT_MAX_TOKENS: u32 = 500;
const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Clone)]
pub struct LookupConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
    pub max_tokens: u32,
    pub timeout: Duration,
    pub supplier: SupplierProfile,
}

impl LookupConfig {
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(missing_key());
        }
        Ok(Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            supplier: SupplierProfile::default(),
        })
    }

    /// Uses the explicit key when given, otherwise `OPENAI_API_KEY` (a `.env` file is honoured).
    pub fn resolve(explicit_key: Option<String>) -> Result<Self> {
        let _ = dotenvy::dotenv();
        Self::resolve_with(explicit_key, env::var(API_KEY_ENV).ok())
    }

    pub fn resolve_with(explicit_key: Option<String>, env_key: Option<String>) -> Result<Self> {
        let key = explicit_key
            .filter(|k| !k.trim().is_empty())
            .or_else(|| env_key.filter(|k| !k.trim().is_empty()))
            .ok_or_else(missing_key)?;
        Self::new(key)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens.max(1);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_supplier(mut self, supplier: SupplierProfile) -> Self {
        self.supplier = supplier;
        self
    }
}

impl fmt::Debug for LookupConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LookupConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("timeout", &self.timeout)
            .field("supplier", &self.supplier)
            .finish()
    }
}

fn missing_key() -> LookupError {
    LookupError::MissingCredential {
        env_var: API_KEY_ENV,
    }
}
