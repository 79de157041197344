pub mod builtin;
pub mod catalogue;
pub mod definition;

pub use catalogue::*;
pub use definition::*;
