pub mod limits;
pub mod models;
pub mod wind;

pub use limits::{FieldRange, InputLimits, LimitError};
pub use models::LegInputs;
pub use wind::{normalize_degrees, solve, NoSolution, WindTriangleResult};
