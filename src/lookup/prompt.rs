use crate::domain::{AnswerField, ProductRequest};

const NOT_SPECIFIED: &str = "Not specified";

/// Vague request phrasing mapped to the catalog wording worth searching for.
const SEARCH_EXAMPLES: &[(&str, &str)] = &[
    ("DPBS", "Dulbecco's Phosphate Buffered Saline"),
    ("DBS solution", "DPBS Dulbecco's PBS"),
    ("PCR mix", "PCR Master Mix"),
    ("Trypsin", "Trypsin-EDTA"),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupplierProfile {
    pub name: String,
    pub domain: String,
}

impl SupplierProfile {
    pub fn new(name: impl Into<String>, domain: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            domain: domain.into(),
        }
    }
}

impl Default for SupplierProfile {
    fn default() -> Self {
        Self::new("Thermo Fisher Scientific", "thermofisher.com")
    }
}

#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    supplier: SupplierProfile,
}

impl PromptBuilder {
    pub fn new(supplier: SupplierProfile) -> Self {
        Self { supplier }
    }

    pub fn build(&self, request: &ProductRequest) -> String {
        let supplier = &self.supplier;
        let quantity = request
            .quantity
            .map(|q| q.to_string())
            .unwrap_or_else(|| NOT_SPECIFIED.to_string());

        let examples: Vec<String> = SEARCH_EXAMPLES
            .iter()
            .map(|(vague, canonical)| {
                format!(
                    "- \"{}\" → Search \"{} site:{}\"",
                    vague, canonical, supplier.domain
                )
            })
            .collect();

        let schema: Vec<String> = AnswerField::all()
            .iter()
            .map(|field| {
                format!(
                    "  \"{}\": \"{}\"",
                    field.key(),
                    field_instruction(*field, supplier)
                )
            })
            .collect();

        format!(
            concat!(
                "You are a {name} product expert with access to current web information.\n",
                "Search the {name} website for the CLOSEST matching product.\n\n",
                "Product Request:\n",
                "- Name: {product}\n",
                "- Quantity needed: {quantity}\n",
                "- Known catalog number: {catalog}\n",
                "- Additional info: {info}\n\n",
                "SEARCH INSTRUCTIONS:\n",
                "1. Search the current {name} website ({domain}) for this product\n",
                "2. Look for exact matches first, then similar products\n",
                "3. Get current pricing from their website if available\n",
                "4. Verify catalog numbers and product details from their current catalog\n\n",
                "IMPORTANT: Always find and return the closest matching {name} product, ",
                "even if it's not an exact match.\n",
                "Use current web search results to get accurate, up-to-date information.\n\n",
                "Search examples:\n{examples}\n\n",
                "Respond with a JSON object containing exactly these keys:\n",
                "{{\n{schema}\n}}\n\n",
                "Use only current information found on {domain} - don't make up details.\n",
                "Always provide your best match based on live web search results.\n"
            ),
            name = supplier.name,
            domain = supplier.domain,
            product = request.name,
            quantity = quantity,
            catalog = request.catalog_number.as_deref().unwrap_or(NOT_SPECIFIED),
            info = request.additional_info.as_deref().unwrap_or(NOT_SPECIFIED),
            examples = examples.join("\n"),
            schema = schema.join(",\n"),
        )
    }
}

fn field_instruction(field: AnswerField, supplier: &SupplierProfile) -> String {
    match field {
        AnswerField::ProductName => format!("The closest matching {} product name", supplier.name),
        AnswerField::CatalogNumber => {
            "The actual catalog/part number from their website".to_string()
        }
        AnswerField::EstimatedPrice => format!(
            "Current price from {} or 'Contact for pricing' if not shown",
            supplier.domain
        ),
        AnswerField::Description => "Product description from their website".to_string(),
        AnswerField::Availability => {
            "Current availability status from their website".to_string()
        }
        AnswerField::Confidence => "High/Medium/Low based on match quality".to_string(),
        AnswerField::Notes => "Alternative products or additional info if relevant".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_carries_request_fields() {
        let request = ProductRequest::new("DPBS solution")
            .with_quantity(3)
            .with_catalog_number("14190144")
            .with_additional_info("500 mL bottle");
        let prompt = PromptBuilder::default().build(&request);
        assert!(prompt.contains("- Name: DPBS solution"));
        assert!(prompt.contains("- Quantity needed: 3"));
        assert!(prompt.contains("- Known catalog number: 14190144"));
        assert!(prompt.contains("- Additional info: 500 mL bottle"));
    }

    #[test]
    fn missing_optionals_render_as_not_specified() {
        let prompt = PromptBuilder::default().build(&ProductRequest::new("Trypsin"));
        assert!(prompt.contains("- Quantity needed: Not specified"));
        assert!(prompt.contains("- Known catalog number: Not specified"));
        assert!(prompt.contains("- Additional info: Not specified"));
    }

    #[test]
    fn schema_names_every_answer_key() {
        let prompt = PromptBuilder::default().build(&ProductRequest::new("PCR mix"));
        for field in AnswerField::all() {
            assert!(
                prompt.contains(&format!("\"{}\":", field.key())),
                "missing key {}",
                field.key()
            );
        }
    }

    #[test]
    fn examples_target_the_supplier_domain() {
        let builder = PromptBuilder::new(SupplierProfile::new("Sigma-Aldrich", "sigmaaldrich.com"));
        let prompt = builder.build(&ProductRequest::new("PCR mix"));
        assert!(prompt.contains("\"PCR mix\" → Search \"PCR Master Mix site:sigmaaldrich.com\""));
        assert!(prompt.contains("You are a Sigma-Aldrich product expert"));
        assert!(!prompt.contains("thermofisher.com"));
    }
}
