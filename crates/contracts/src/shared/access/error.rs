use thiserror::Error;

/// Failures detected while turning session data into access decisions.
///
/// None of these ever reach UI code: the evaluator converts each of them into
/// a denial. They exist so the fallible parsers can be diagnosed and tested.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessError {
    #[error("Malformed grant data: {0}")]
    MalformedGrantData(String),

    #[error("Unparseable composite permission key: {0:?}")]
    UnparseableCompositeKey(String),
}
