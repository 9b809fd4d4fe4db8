pub mod phase;
pub mod pipeline;
pub mod universe;
