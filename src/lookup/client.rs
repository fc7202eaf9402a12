use std::sync::Arc;

use tracing::{info, info_span, warn};

use super::extractor::extract_answer;
use super::llm_client::{LLMClient, OpenAISearchClient};
use super::progress::ProgressSink;
use super::prompt::PromptBuilder;
use crate::config::LookupConfig;
use crate::domain::{ProductRequest, ProductResult};
use crate::error::Result;

const DEFAULT_MAX_TOKENS: u32 = 500;

/// Turns product requests into results through a search-enabled model.
///
/// Per-request failures never escape: a failed call or an unparsable answer
/// becomes an error-shaped [`ProductResult`] and the batch moves on.
pub struct LookupClient<C: LLMClient> {
    llm: Arc<C>,
    prompt_builder: PromptBuilder,
    max_tokens: u32,
}

impl LookupClient<OpenAISearchClient> {
    pub fn from_config(config: &LookupConfig) -> Result<Self> {
        let llm = OpenAISearchClient::new(config)?;
        Ok(Self::new(Arc::new(llm), PromptBuilder::new(config.supplier.clone()))
            .with_max_tokens(config.max_tokens))
    }
}

impl<C: LLMClient> LookupClient<C> {
    pub fn new(llm: Arc<C>, prompt_builder: PromptBuilder) -> Self {
        Self {
            llm,
            prompt_builder,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens.max(1);
        self
    }

    pub fn lookup(&self, request: &ProductRequest) -> ProductResult {
        let span = info_span!("lookup", search_term = %request.name);
        let _guard = span.enter();

        let prompt = self.prompt_builder.build(request);
        let text = match self.llm.generate(&prompt, self.max_tokens, true) {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "lookup call failed");
                return ProductResult::transport_failure(&request.name, &err.to_string());
            }
        };

        match extract_answer(&text) {
            Ok(answer) => answer.into_result(request.name.clone()),
            Err(err) => {
                warn!(error = %err, "model answer could not be parsed");
                ProductResult::parse_failure(&request.name, &err.to_string())
            }
        }
    }

    /// Looks up every request in order; the output has one result per input, same index.
    pub fn lookup_batch(
        &self,
        requests: &[ProductRequest],
        progress: &mut dyn ProgressSink,
    ) -> Vec<ProductResult> {
        let total = requests.len();
        let mut results = Vec::with_capacity(total);

        for (i, request) in requests.iter().enumerate() {
            progress.started(i + 1, total, request);
            let result = self.lookup(request);
            progress.completed(i + 1, total, &result);
            results.push(result);
        }

        let failed = results.iter().filter(|r| r.is_error()).count();
        info!(total, failed, "batch lookup finished");
        results
    }
}
