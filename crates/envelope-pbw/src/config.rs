//! Configuration for a PBW basis.

/// Options for [`PbwBasis`](crate::PbwBasis).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PbwConfig {
    /// Name used when describing monomials, as in `PBW[E]*PBW[F]^2`.
    pub prefix: String,
    /// Memoize `product_on_basis` results for pairs that needed rewriting.
    pub cache_products: bool,
    /// Maximum number of memoized products; further results are not stored.
    pub product_cache_limit: usize,
    /// Maximum number of memoized monomial keys; further keys are not stored.
    pub key_cache_limit: usize,
}

impl Default for PbwConfig {
    fn default() -> Self {
        Self {
            prefix: "PBW".to_string(),
            cache_products: true,
            product_cache_limit: 1 << 16,
            key_cache_limit: 1 << 16,
        }
    }
}

impl PbwConfig {
    /// Sets the prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Enables or disables the product cache.
    #[must_use]
    pub fn with_product_cache(mut self, enabled: bool) -> Self {
        self.cache_products = enabled;
        self
    }

    /// Bounds the product cache.
    #[must_use]
    pub fn with_product_cache_limit(mut self, limit: usize) -> Self {
        self.product_cache_limit = limit;
        self
    }

    /// Bounds the monomial key cache.
    #[must_use]
    pub fn with_key_cache_limit(mut self, limit: usize) -> Self {
        self.key_cache_limit = limit;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = PbwConfig::default()
            .with_prefix("U")
            .with_product_cache(false)
            .with_product_cache_limit(8)
            .with_key_cache_limit(4);
        assert_eq!(config.prefix, "U");
        assert!(!config.cache_products);
        assert_eq!(config.product_cache_limit, 8);
        assert_eq!(config.key_cache_limit, 4);
    }
}
