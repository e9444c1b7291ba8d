/// Command implementations. There is only one: `members`.
pub mod members;
