#![doc = include_str!("../README.md")]
#![cfg_attr(not(debug_assertions), warn(missing_docs))]

/// Emit a [tracing](https://docs.rs/tracing) event if the `tracing` feature is enabled.
macro_rules! event {
    ($level:ident, $($arg:tt)+) => {
        #[cfg(feature = "tracing")]
        tracing::$level!($($arg)+);
    };
}
pub(crate) use event;

pub mod error;
mod material;
pub mod mesh;
pub mod pool;
#[cfg(feature = "serialize")]
pub mod ser;
mod triangle;
mod vec;

pub use error::{Error, ErrorKind, Result};
pub use material::*;
pub use mesh::{Channel, Channels, Face, FaceVertex, Mesh, MeshOptions, NormalPolicy};
pub use pool::AttributePool;
pub use triangle::*;
pub use vec::*;
