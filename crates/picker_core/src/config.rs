use shared::ConfigError;

/// Fixed catalog driving one picker: the allowed condition types (catalog
/// order defines dropdown order) and the type newly created conditions get.
///
/// `default_type` is not cross-validated against the catalog; hosts may
/// present a default the dropdown does not offer.
#[derive(Debug, Clone)]
pub struct PickerConfig {
    condition_types: Vec<String>,
    default_type: String,
}

impl PickerConfig {
    pub fn new(
        condition_types: Vec<String>,
        default_type: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        if condition_types.is_empty() {
            return Err(ConfigError::EmptyConditionTypes);
        }
        Ok(Self {
            condition_types,
            default_type: default_type.into(),
        })
    }

    pub fn condition_types(&self) -> &[String] {
        &self.condition_types
    }

    pub fn default_type(&self) -> &str {
        &self.default_type
    }
}
