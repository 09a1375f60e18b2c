use crate::models::classification::{ClassificationRequest, ClassificationResult};

/// An independent classification algorithm producing candidate industry
/// codes with confidences. Strategy internals are opaque to the core.
pub trait ClassificationStrategy: Send + Sync {
    /// Stable name used in votes, anomaly warnings, and logs.
    fn name(&self) -> &str;

    /// Produce candidate classifications for a request.
    fn classify(&self, request: &ClassificationRequest) -> Vec<ClassificationResult>;
}
