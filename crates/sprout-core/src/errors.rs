//! Error types for Sprout.

use thiserror::Error;

/// Top-level error type for Sprout.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SproutError {
    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Errors from structural tree operations and registry lookups.
///
/// A failed operation never leaves a partial mutation behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("Unknown node type: {name}")]
    UnknownType { name: String },

    #[error("Parent node not found: {id}")]
    ParentNotFound { id: String },

    #[error("Node not found: {id}")]
    NodeNotFound { id: String },

    #[error("Cannot place a {node_type} node under {parent}: leaf types cannot own children")]
    InvalidStructure { parent: String, node_type: String },

    #[error("Cannot move node {id} into {target}: target is inside the moved subtree")]
    InvalidMove { id: String, target: String },
}

/// Errors during code generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("Unknown render profile: {id}")]
    UnknownProfile { id: String },

    #[error("Unknown node type: {name}")]
    UnknownType { name: String },

    #[error("Node not found: {id}")]
    NodeNotFound { id: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offender() {
        let err = TreeError::NodeNotFound { id: "button-7".into() };
        assert_eq!(err.to_string(), "Node not found: button-7");

        let err = RenderError::UnknownProfile { id: "nonexistent-profile".into() };
        assert!(err.to_string().contains("nonexistent-profile"));
    }

    #[test]
    fn test_umbrella_conversion() {
        let err: SproutError = TreeError::UnknownType { name: "carousel".into() }.into();
        assert!(matches!(err, SproutError::Tree(TreeError::UnknownType { .. })));
        assert_eq!(err.to_string(), "Unknown node type: carousel");
    }
}
