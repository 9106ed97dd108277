pub mod vertex_cover;

pub use vertex_cover::*;
