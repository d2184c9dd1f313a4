//! Now-playing file writer for music players.
//!
//! Every time the player starts a track, a user template such as
//! `"%a - %t (%T)"` is rendered against the track's metadata and written to a
//! file that status bars and chat scripts can read.
//!
//! - [`format`]: the template renderer
//! - [`metadata`]: the lookup capability the renderer reads from
//! - [`library`]: scanned tracks serving that capability
//! - [`events`]: synchronous player event bus with scoped subscriptions
//! - [`plugin`]: wires the bus, the renderer and the output file together
//! - [`config`]: settings from file and environment

pub mod config;
pub mod events;
pub mod format;
pub mod library;
pub mod metadata;
pub mod plugin;
pub mod runtime;
pub mod sink;
