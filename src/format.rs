//! Now-playing template renderer.
//!
//! A template is literal text with `%<key>` directives:
//!
//! | key | substitution |
//! |-----|--------------|
//! | `%A` | album |
//! | `%a` | artist |
//! | `%t` | title |
//! | `%n` | track number |
//! | `%F` | file format |
//! | `%T` | total duration, `m:ss` |
//! | `%C` | elapsed playtime, `m:ss` |
//! | `%%` | a literal `%` |
//!
//! Rendering is a single forward pass into a fixed-capacity buffer. Output
//! that does not fit is dropped silently; callers that care can ask
//! [`Rendered::is_truncated`].

mod buffer;
mod directive;
mod render;

pub use directive::{Directive, format_clock, format_duration};
pub use render::{NULL_PLACEHOLDER, Rendered, render};
