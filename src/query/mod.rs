/// Query domain layer: raw input validation and cheat.sh path assembly.
pub mod build;
pub mod errors;
pub mod model;
pub mod values;

pub use build::{Segment, build, segments};
pub use errors::QueryError;
pub use model::{QueryModel, RawQuery, validate};
