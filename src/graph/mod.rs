pub mod cycle;
pub mod definition;

pub use cycle::{build_adjacency, has_cycle, would_create_cycle};
pub use definition::*;
