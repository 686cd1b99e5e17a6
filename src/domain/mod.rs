//! Domain layer: the component tree
//!
//! This layer is independent of external concerns (no config loading, no CLI);
//! output goes through the [`OutputSink`] capability.

pub mod component;
pub mod composite;
pub mod error;
pub mod leaf;
pub mod sink;
pub mod tree;

pub use component::Component;
pub use composite::{ChildId, CompositeNode};
pub use error::{DomainError, DomainResult};
pub use leaf::Leaf;
pub use sink::OutputSink;
pub use tree::ComponentTreeExt;
