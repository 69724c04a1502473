//! Built-in classification rules

use super::{AssetClass, ClassificationRule};
use std::collections::HashMap;

/// Default crypto marker: crypto pairs in the feed are quoted against USD
pub const DEFAULT_CRYPTO_PATTERN: &str = "USD";

/// Crypto when the symbol contains a substring.
///
/// Cheap, but misclassifies any equity ticker that happens to contain the
/// pattern.
#[derive(Debug, Clone)]
pub struct ContainsRule {
    pattern: String,
}

impl ContainsRule {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }
}

impl Default for ContainsRule {
    fn default() -> Self {
        Self::new(DEFAULT_CRYPTO_PATTERN)
    }
}

impl ClassificationRule for ContainsRule {
    fn classify(&self, symbol: &str) -> AssetClass {
        if !self.pattern.is_empty() && symbol.contains(&self.pattern) {
            AssetClass::Crypto
        } else {
            AssetClass::Equity
        }
    }
}

/// Crypto when the symbol ends with any declared quote suffix
#[derive(Debug, Clone)]
pub struct SuffixRule {
    suffixes: Vec<String>,
}

impl SuffixRule {
    pub fn new(suffixes: Vec<String>) -> Self {
        Self { suffixes }
    }
}

impl ClassificationRule for SuffixRule {
    fn classify(&self, symbol: &str) -> AssetClass {
        let is_crypto = self
            .suffixes
            .iter()
            .any(|s| !s.is_empty() && symbol.ends_with(s.as_str()));
        if is_crypto {
            AssetClass::Crypto
        } else {
            AssetClass::Equity
        }
    }
}

/// Explicit symbol registry with a fallback for unlisted symbols
#[derive(Debug, Clone)]
pub struct LookupRule {
    symbols: HashMap<String, AssetClass>,
    fallback: AssetClass,
}

impl LookupRule {
    pub fn new(symbols: HashMap<String, AssetClass>, fallback: AssetClass) -> Self {
        Self { symbols, fallback }
    }
}

impl ClassificationRule for LookupRule {
    fn classify(&self, symbol: &str) -> AssetClass {
        self.symbols.get(symbol).copied().unwrap_or(self.fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_rule_boundaries() {
        let rule = ContainsRule::default();
        assert_eq!(rule.classify("BTCUSD"), AssetClass::Crypto);
        assert_eq!(rule.classify("AAPL"), AssetClass::Equity);
        assert_eq!(rule.classify("US"), AssetClass::Equity);
        assert_eq!(rule.classify(""), AssetClass::Equity);
    }

    #[test]
    fn test_contains_rule_empty_pattern_never_matches() {
        let rule = ContainsRule::new("");
        assert_eq!(rule.classify("BTCUSD"), AssetClass::Equity);
    }

    #[test]
    fn test_suffix_rule_ignores_infix() {
        let rule = SuffixRule::new(vec!["USD".to_string()]);
        assert_eq!(rule.classify("BTCUSD"), AssetClass::Crypto);
        assert_eq!(rule.classify("USDJPYX"), AssetClass::Equity);
    }

    #[test]
    fn test_lookup_rule_crypto_fallback() {
        let mut symbols = HashMap::new();
        symbols.insert("AAPL".to_string(), AssetClass::Equity);
        let rule = LookupRule::new(symbols, AssetClass::Crypto);
        assert_eq!(rule.classify("AAPL"), AssetClass::Equity);
        assert_eq!(rule.classify("DOGE"), AssetClass::Crypto);
    }
}
