use crate::domain::{ProductRequest, ProductResult};

/// Receives batch progress. `index` is 1-based.
pub trait ProgressSink {
    fn started(&mut self, _index: usize, _total: usize, _request: &ProductRequest) {}

    fn completed(&mut self, index: usize, total: usize, result: &ProductResult);
}

impl<F> ProgressSink for F
where
    F: FnMut(usize, usize, &ProductResult),
{
    fn completed(&mut self, index: usize, total: usize, result: &ProductResult) {
        self(index, total, result)
    }
}

/// Discards all notifications.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn completed(&mut self, _index: usize, _total: usize, _result: &ProductResult) {}
}

/// Prints one line per request start and one per completion.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleProgress;

impl ProgressSink for ConsoleProgress {
    fn started(&mut self, index: usize, total: usize, request: &ProductRequest) {
        println!("Processing {}/{}: {}", index, total, request.name);
    }

    fn completed(&mut self, _index: usize, _total: usize, result: &ProductResult) {
        println!("{}", completion_line(result));
    }
}

pub fn completion_line(result: &ProductResult) -> String {
    format!(
        "  → {} ({}) - {}",
        result.product_name, result.catalog_number, result.estimated_price
    )
}
