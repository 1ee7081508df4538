//! Domain model (comparable values, algorithms, ids, errors).

pub mod comparable;
pub mod algorithm;
pub mod ids;
pub mod errors;

pub use self::comparable::Comparable;
pub use self::algorithm::SortAlgorithm;
pub use self::ids::RunId;
pub use self::errors::SortwiseError;
