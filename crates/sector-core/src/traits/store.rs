use crate::errors::SectorResult;
use crate::models::industry_code::{CodeType, IndustryCode};

/// Lookup/search contract for the industry-code persistence layer.
pub trait CodeStore: Send + Sync {
    /// Fetch a single code by value and scheme.
    fn code_by_code_and_type(&self, code: &str, code_type: CodeType)
        -> SectorResult<IndustryCode>;

    /// Search codes by free-text query, optionally scoped to one scheme.
    fn search_codes(
        &self,
        query: &str,
        code_type: Option<CodeType>,
        limit: usize,
    ) -> SectorResult<Vec<IndustryCode>>;
}
