pub mod sine;

pub use sine::{LookupTable, SanityPoint, TableError};
