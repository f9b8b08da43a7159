//! Attribute walkers for system view types.
//!
//! A view type is a read-only accessor contract (a trait, or a type with
//! inherent getters). This crate discovers its accessors from Rust source,
//! assigns every attribute a stable index and emits a walker that implements
//! the [`protocol`] traits, so consumers can enumerate and read attributes
//! without knowing the view's internals.

pub mod constants;
pub mod discover;
pub mod emit;
pub mod enumerate;
pub mod error;
pub mod imports;
pub mod model;
pub mod protocol;

// Re-export commonly used items
pub use discover::discover;
pub use emit::{artifact_file_name, artifact_name, emit, EmitOptions};
pub use enumerate::enumerate;
pub use error::{Result, WalkerError};
pub use model::{AccessorDeclaration, Attribute, Receiver, TypeRef, ViewKind, ViewType};
pub use protocol::{AttributeVisitor, AttributeWithValueVisitor, RowAttributeWalker};
