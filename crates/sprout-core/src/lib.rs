//! Component tree model for Sprout.
//!
//! This crate provides the editable side of the code generator:
//! - Node types and property values
//! - The node type registry (defaults, structure, per-profile strategies)
//! - The UI tree and its structural operations
//! - Error types shared with `sprout-codegen`
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use sprout_core::{NodeType, NodeTypeRegistry, PropValue, UiTree};
//!
//! let mut tree = UiTree::new(Arc::new(NodeTypeRegistry::builtin()));
//! let card = tree.insert(None, NodeType::Card)?;
//! let title = tree.insert(Some(card.as_str()), NodeType::Heading)?;
//! tree.set_prop(title.as_str(), "text", PropValue::text("Welcome"))?;
//!
//! assert_eq!(tree.find(title.as_str()).and_then(|n| n.text()), Some("Welcome"));
//! # Ok::<(), sprout_core::TreeError>(())
//! ```

pub mod errors;
pub mod registry;
pub mod tree;
pub mod types;

pub use errors::*;
pub use registry::{
    profile_ids, ContentShape, DescriptorBuilder, NodeTypeDescriptor, NodeTypeRegistry,
    RenderStrategy,
};
pub use tree::{Node, NodeSnapshot, Preorder, TreeOptions, UiTree};
pub use types::*;
