pub mod patterns;
pub mod resolve;

pub use patterns::candidates;
pub use resolve::{build_field_map, resolve};
