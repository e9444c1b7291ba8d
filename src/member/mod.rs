/// Member domain layer: filter predicates and the run-level error type.
pub mod errors;
pub mod filter;

pub use errors::{FilterField, MemberError};
pub use filter::MemberFilter;
