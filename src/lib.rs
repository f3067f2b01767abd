//! Tool registry and arrow rendering primitives for vector drawing tools.
//!
//! Exposes the read-only tool/palette registry, the [`draw::Surface`] capability the
//! renderers draw through, and the arrow renderer, alongside the configuration types
//! the `sketchkit` binary uses.

pub mod config;
pub mod device;
pub mod draw;
pub mod input;
pub mod registry;
pub mod util;

pub use config::Config;
