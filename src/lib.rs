pub mod batch;
pub mod config;
pub mod domain;
pub mod error;
pub mod lookup;
pub mod report;
pub mod utils;

pub use config::LookupConfig;
pub use domain::{ProductRequest, ProductResult};
pub use error::{LookupError, Result};
pub use lookup::{LLMClient, LookupClient, MockLLMClient, OpenAISearchClient, ProgressSink};
