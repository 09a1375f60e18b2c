use crate::models::industry_code::CodeType;

/// Errors surfaced by `CodeStore` implementations.
///
/// The store itself lives outside this workspace; only the error contract
/// is defined here.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("no {code_type} code found for {code}")]
    NotFound { code: String, code_type: CodeType },

    #[error("store backend error: {message}")]
    Backend { message: String },
}
