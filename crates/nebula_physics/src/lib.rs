pub mod explosion;
pub mod galaxy;
pub mod sampler;
