//! Track library: scanning a directory into tracks and serving their
//! metadata to the renderer.

mod model;
mod scan;

pub use model::*;
pub use scan::scan;

#[cfg(test)]
mod tests;
