/// Errors produced by the confidence scorer.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("classification result has no industry code to score")]
    MissingCode,
}
