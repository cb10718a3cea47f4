//! Retargetable code generation for Sprout UI trees.
//!
//! A tree built with `sprout-core` renders under one of several profiles:
//! - `inline-style`: HTML with inline style declarations
//! - `utility-class`: HTML with utility class tokens
//! - `component-call`: JSX calling a component library, with imports
//! - `semantic`: plain semantic HTML
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use sprout_codegen::{CodeGenerator, ProfileRegistry};
//! use sprout_core::{profile_ids, NodeType, NodeTypeRegistry, UiTree};
//!
//! let types = Arc::new(NodeTypeRegistry::builtin());
//! let profiles = ProfileRegistry::builtin();
//!
//! let mut tree = UiTree::new(types.clone());
//! let card = tree.insert(None, NodeType::Card)?;
//! tree.insert(Some(card.as_str()), NodeType::Button)?;
//!
//! let generator = CodeGenerator::new(&types, &profiles);
//! let jsx = generator.render(&tree, profile_ids::COMPONENT_CALL)?;
//! assert!(jsx.starts_with("import { Button } from"));
//! # Ok::<(), sprout_core::SproutError>(())
//! ```

pub mod emit;
pub mod generator;
pub mod profiles;
pub mod syntax;

pub use emit::{Attr, AttrValue, EmitContext, Emission, Emitter, Import, Imports};
pub use generator::{CodeGenerator, INDENT};
pub use profiles::{PreambleFn, ProfileRegistry, RenderProfile};
pub use syntax::Syntax;

use sprout_core::{RenderError, UiTree};

/// Render a tree with its own node type registry and the built-in profiles.
pub fn render(tree: &UiTree, profile_id: &str) -> Result<String, RenderError> {
    let profiles = ProfileRegistry::builtin();
    CodeGenerator::new(tree.registry(), &profiles).render(tree, profile_id)
}
