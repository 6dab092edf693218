/// A slide type name outside the fixed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown slide type: {0}")]
pub struct UnknownSlideType(pub String);
