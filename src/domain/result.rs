use serde::{Deserialize, Serialize};

pub const UNKNOWN: &str = "Unknown";
pub const NOT_AVAILABLE: &str = "N/A";
pub const LOW_CONFIDENCE: &str = "Low";
pub const HIGH_CONFIDENCE: &str = "High";

pub const TRANSPORT_ERROR_MARKER: &str = "Error";
pub const PARSE_ERROR_MARKER: &str = "Error parsing response";

/// The seven keys the model is asked to answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerField {
    ProductName,
    CatalogNumber,
    EstimatedPrice,
    Description,
    Availability,
    Confidence,
    Notes,
}

impl AnswerField {
    pub fn all() -> &'static [AnswerField] {
        &[
            AnswerField::ProductName,
            AnswerField::CatalogNumber,
            AnswerField::EstimatedPrice,
            AnswerField::Description,
            AnswerField::Availability,
            AnswerField::Confidence,
            AnswerField::Notes,
        ]
    }

    pub fn key(self) -> &'static str {
        match self {
            AnswerField::ProductName => "product_name",
            AnswerField::CatalogNumber => "catalog_number",
            AnswerField::EstimatedPrice => "estimated_price",
            AnswerField::Description => "description",
            AnswerField::Availability => "availability",
            AnswerField::Confidence => "confidence",
            AnswerField::Notes => "notes",
        }
    }

    /// Sentinel stored when the answer lacks this key.
    pub fn default_value(self) -> &'static str {
        match self {
            AnswerField::ProductName => UNKNOWN,
            AnswerField::CatalogNumber => NOT_AVAILABLE,
            AnswerField::EstimatedPrice => NOT_AVAILABLE,
            AnswerField::Description => NOT_AVAILABLE,
            AnswerField::Availability => UNKNOWN,
            AnswerField::Confidence => UNKNOWN,
            AnswerField::Notes => "",
        }
    }

    /// Column header used in result files.
    pub fn column(self) -> &'static str {
        match self {
            AnswerField::ProductName => "Product Name",
            AnswerField::CatalogNumber => "Catalog Number",
            AnswerField::EstimatedPrice => "Estimated Price",
            AnswerField::Description => "Description",
            AnswerField::Availability => "Availability",
            AnswerField::Confidence => "Confidence",
            AnswerField::Notes => "Notes",
        }
    }
}

/// Normalized outcome of one lookup. Every field always holds content or its sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductResult {
    #[serde(rename = "Search Term")]
    pub search_term: String,
    #[serde(rename = "Product Name")]
    pub product_name: String,
    #[serde(rename = "Catalog Number")]
    pub catalog_number: String,
    #[serde(rename = "Estimated Price")]
    pub estimated_price: String,
    #[serde(rename = "Description")]
    pub description: String,
    #[serde(rename = "Availability")]
    pub availability: String,
    #[serde(rename = "Confidence")]
    pub confidence: String,
    #[serde(rename = "Notes")]
    pub notes: String,
}

impl ProductResult {
    /// A result with every answer field at its sentinel.
    pub fn unanswered(search_term: impl Into<String>) -> Self {
        let mut result = Self {
            search_term: search_term.into(),
            product_name: String::new(),
            catalog_number: String::new(),
            estimated_price: String::new(),
            description: String::new(),
            availability: String::new(),
            confidence: String::new(),
            notes: String::new(),
        };
        for field in AnswerField::all() {
            result.set(*field, field.default_value());
        }
        result
    }

    pub fn transport_failure(search_term: impl Into<String>, error: &str) -> Self {
        let mut result = Self::unanswered(search_term);
        result.product_name = TRANSPORT_ERROR_MARKER.to_string();
        result.description = "Failed to get product information".to_string();
        result.confidence = LOW_CONFIDENCE.to_string();
        result.notes = format!("Error: {}", error);
        result
    }

    pub fn parse_failure(search_term: impl Into<String>, error: &str) -> Self {
        let mut result = Self::unanswered(search_term);
        result.product_name = PARSE_ERROR_MARKER.to_string();
        result.description = "Failed to parse model response".to_string();
        result.confidence = LOW_CONFIDENCE.to_string();
        result.notes = format!("JSON parse error: {}", error);
        result
    }

    pub fn get(&self, field: AnswerField) -> &str {
        match field {
            AnswerField::ProductName => &self.product_name,
            AnswerField::CatalogNumber => &self.catalog_number,
            AnswerField::EstimatedPrice => &self.estimated_price,
            AnswerField::Description => &self.description,
            AnswerField::Availability => &self.availability,
            AnswerField::Confidence => &self.confidence,
            AnswerField::Notes => &self.notes,
        }
    }

    pub fn set(&mut self, field: AnswerField, value: impl Into<String>) {
        let value = value.into();
        match field {
            AnswerField::ProductName => self.product_name = value,
            AnswerField::CatalogNumber => self.catalog_number = value,
            AnswerField::EstimatedPrice => self.estimated_price = value,
            AnswerField::Description => self.description = value,
            AnswerField::Availability => self.availability = value,
            AnswerField::Confidence => self.confidence = value,
            AnswerField::Notes => self.notes = value,
        }
    }

    pub fn is_high_confidence(&self) -> bool {
        self.confidence == HIGH_CONFIDENCE
    }

    pub fn is_error(&self) -> bool {
        self.product_name == TRANSPORT_ERROR_MARKER || self.product_name == PARSE_ERROR_MARKER
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unanswered_uses_sentinels() {
        let result = ProductResult::unanswered("DPBS");
        assert_eq!(result.search_term, "DPBS");
        assert_eq!(result.product_name, "Unknown");
        assert_eq!(result.catalog_number, "N/A");
        assert_eq!(result.estimated_price, "N/A");
        assert_eq!(result.description, "N/A");
        assert_eq!(result.availability, "Unknown");
        assert_eq!(result.confidence, "Unknown");
        assert_eq!(result.notes, "");
    }

    #[test]
    fn failure_shapes_are_distinct() {
        let transport = ProductResult::transport_failure("x", "timed out");
        let parse = ProductResult::parse_failure("x", "expected value");
        assert_eq!(transport.product_name, "Error");
        assert_eq!(transport.notes, "Error: timed out");
        assert_eq!(parse.product_name, "Error parsing response");
        assert_eq!(parse.notes, "JSON parse error: expected value");
        for result in [&transport, &parse] {
            assert_eq!(result.confidence, "Low");
            assert_eq!(result.catalog_number, "N/A");
            assert!(result.is_error());
        }
    }
}
