use crate::error::GraphShapeError;

/// Result of a structural graph check
pub type ShapeResult<T> = Result<T, GraphShapeError>;
