use std::path::{Path, PathBuf};

use crate::domain::ProductResult;

const RULE_WIDTH: usize = 60;

pub fn render_product_report(result: &ProductResult) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = format!(
        "\n{rule}\nResults for: {}\n{rule}\nProduct Name: {}\nCatalog Number: {}\nEstimated Price: {}\nDescription: {}\nAvailability: {}\nConfidence: {}\n",
        result.search_term,
        result.product_name,
        result.catalog_number,
        result.estimated_price,
        result.description,
        result.availability,
        result.confidence,
        rule = rule,
    );
    if !result.notes.is_empty() {
        out.push_str(&format!("Notes: {}\n", result.notes));
    }
    out
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub high_confidence: usize,
    pub output: PathBuf,
}

impl BatchSummary {
    pub fn from_results(results: &[ProductResult], output: &Path) -> Self {
        Self {
            total: results.len(),
            high_confidence: results.iter().filter(|r| r.is_high_confidence()).count(),
            output: output.to_path_buf(),
        }
    }

    pub fn render(&self) -> String {
        format!(
            "\nSummary:\nTotal products processed: {}\nHigh confidence matches: {}\nResults saved to: {}\n",
            self.total,
            self.high_confidence,
            self.output.display()
        )
    }
}
