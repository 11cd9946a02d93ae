use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.07 = 7%).
pub type Rate = Decimal;

/// Rates expressed as percentages (7 = 7%), the way the calculator takes them.
pub type Percent = Decimal;

/// Year counts. Kept as Decimal so fractional or negative input reaches validation.
pub type Years = Decimal;

/// Standard computation output envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationOutput<T: Serialize> {
    pub result: T,
    pub methodology: String,
    pub assumptions: serde_json::Value,
    pub warnings: Vec<String>,
    pub metadata: ComputationMetadata,
}

/// Metadata for every computation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationMetadata {
    pub version: String,
    pub computation_time_us: u64,
    pub precision: String,
}

/// Helper to wrap computation results with metadata
pub fn with_metadata<T: Serialize>(
    methodology: &str,
    assumptions: &impl Serialize,
    warnings: Vec<String>,
    elapsed_us: u64,
    result: T,
) -> ComputationOutput<T> {
    ComputationOutput {
        result,
        methodology: methodology.to_string(),
        assumptions: serde_json::to_value(assumptions).unwrap_or_default(),
        warnings,
        metadata: ComputationMetadata {
            version: env!("CARGO_PKG_VERSION").to_string(),
            computation_time_us: elapsed_us,
            precision: "rust_decimal_128bit".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_with_metadata_envelope() {
        let out = with_metadata(
            "Annual compounding",
            &serde_json::json!({ "years": 3 }),
            vec!["note".into()],
            12,
            dec!(107.00),
        );
        assert_eq!(out.result, dec!(107.00));
        assert_eq!(out.methodology, "Annual compounding");
        assert_eq!(out.assumptions["years"], 3);
        assert_eq!(out.warnings.len(), 1);
        assert_eq!(out.metadata.computation_time_us, 12);
        assert_eq!(out.metadata.precision, "rust_decimal_128bit");
    }
}
