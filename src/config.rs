//! Configuration loader and schema types.
//!
//! Settings hold the now-playing template and destination together with the
//! library scan options. They are loaded once at startup; nothing here is
//! global.

mod load;
mod schema;

pub use load::{default_config_dir, default_config_path, resolve_config_path};
pub use schema::*;
