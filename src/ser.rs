//! Serialization of [Meshes](crate::Mesh) to storage formats.

pub mod mtl;
pub mod obj;

pub use mtl::{MtlStyle, MtlText};
pub use obj::{ObjText, ObjWriter, SavedFiles};
