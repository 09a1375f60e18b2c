use serde::{Deserialize, Serialize};
use std::fmt;

use super::confidence::Confidence;

/// Industry code classification scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CodeType {
    /// North American Industry Classification System.
    Naics,
    /// Standard Industrial Classification.
    Sic,
    /// Merchant Category Code.
    Mcc,
}

impl fmt::Display for CodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodeType::Naics => write!(f, "NAICS"),
            CodeType::Sic => write!(f, "SIC"),
            CodeType::Mcc => write!(f, "MCC"),
        }
    }
}

/// A single industry code with its descriptive metadata.
///
/// Immutable once classified; identity is `(code_type, code)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndustryCode {
    pub code: String,
    pub code_type: CodeType,
    pub description: String,
    pub category: String,
    pub subcategory: Option<String>,
    pub keywords: Vec<String>,
    /// Stored confidence for this code assignment.
    pub confidence: Confidence,
}

impl IndustryCode {
    /// Identity key used by all cross-strategy set-overlap math.
    pub fn identity(&self) -> (CodeType, &str) {
        (self.code_type, self.code.as_str())
    }

    /// Owned identity key, for use in hash sets that outlive the code.
    pub fn identity_owned(&self) -> (CodeType, String) {
        (self.code_type, self.code.clone())
    }
}
