mod loader;
mod writer;

pub use loader::{load_requests, read_requests, read_requests_from};
pub use writer::{default_output_path, result_columns, write_results, write_results_to};
