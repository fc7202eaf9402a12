mod client;
mod extractor;
mod llm_client;
mod progress;
mod prompt;

pub use client::LookupClient;
pub use extractor::{extract_answer, ExtractedAnswer};
pub use llm_client::{LLMClient, MockLLMClient, OpenAISearchClient, RecordedCall};
pub use progress::{completion_line, ConsoleProgress, NoProgress, ProgressSink};
pub use prompt::{PromptBuilder, SupplierProfile};
