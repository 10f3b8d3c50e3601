/// Command implementations.
pub mod lookup;

pub use lookup::run;
