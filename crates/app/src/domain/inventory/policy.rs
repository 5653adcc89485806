//! Stock Policy

/// Default category tag for non-inventory items such as consultations.
pub const DEFAULT_SERVICE_CATEGORY: &str = "service";

/// Decides which products take part in stock accounting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockPolicy {
    service_category: String,
}

impl StockPolicy {
    #[must_use]
    pub fn new(service_category: impl Into<String>) -> Self {
        Self {
            service_category: service_category.into().trim().to_owned(),
        }
    }

    #[must_use]
    pub fn service_category(&self) -> &str {
        &self.service_category
    }

    /// Services are sold without touching stock. Matching ignores case and padding.
    #[must_use]
    pub fn is_exempt(&self, category: &str) -> bool {
        category.trim().eq_ignore_ascii_case(&self.service_category)
    }
}

impl Default for StockPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_SERVICE_CATEGORY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_category_is_exempt_regardless_of_case() {
        let policy = StockPolicy::default();

        assert!(policy.is_exempt("service"));
        assert!(policy.is_exempt(" Service "));
        assert!(!policy.is_exempt("food"));
        assert!(!policy.is_exempt("services"));
    }

    #[test]
    fn custom_service_category_is_trimmed() {
        let policy = StockPolicy::new("  consulta ");

        assert_eq!(policy.service_category(), "consulta");
        assert!(policy.is_exempt("CONSULTA"));
    }
}
