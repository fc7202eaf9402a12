/// One product to look up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRequest {
    pub name: String,
    pub quantity: Option<u32>,
    pub catalog_number: Option<String>,
    pub additional_info: Option<String>,
}

impl ProductRequest {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            quantity: None,
            catalog_number: None,
            additional_info: None,
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = Some(quantity);
        self
    }

    pub fn with_catalog_number(mut self, catalog_number: impl Into<String>) -> Self {
        self.catalog_number = Some(catalog_number.into());
        self
    }

    pub fn with_additional_info(mut self, info: impl Into<String>) -> Self {
        self.additional_info = Some(info.into());
        self
    }
}
