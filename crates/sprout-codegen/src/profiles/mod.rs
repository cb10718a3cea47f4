//! Render profiles and their registry.
//!
//! A profile is a target syntax, a dispatch table of emitters keyed by node
//! type, and a preamble function. Types without an emitter go through the
//! generic fallback in the generator.

mod component_call;
mod inline_style;
mod semantic;
mod utility_class;

use std::collections::HashMap;

use indexmap::IndexMap;
use sprout_core::{NodeType, RenderError};

use crate::emit::{Emitter, Imports};
use crate::syntax::Syntax;

pub(crate) use utility_class::class_tokens;

/// Builds preamble lines from the imports collected during a render.
pub type PreambleFn = fn(&Imports) -> Vec<String>;

fn no_preamble(_: &Imports) -> Vec<String> {
    Vec::new()
}

/// A rendering profile.
#[derive(Clone)]
pub struct RenderProfile {
    id: String,
    syntax: Syntax,
    emitters: HashMap<NodeType, Emitter>,
    preamble: PreambleFn,
}

impl RenderProfile {
    /// Create a profile with no emitters and no preamble.
    pub fn new(id: &str, syntax: Syntax) -> Self {
        Self {
            id: id.to_string(),
            syntax,
            emitters: HashMap::new(),
            preamble: no_preamble,
        }
    }

    /// Register an emitter for one type.
    pub fn with_emitter(mut self, node_type: NodeType, emitter: Emitter) -> Self {
        self.emitters.insert(node_type, emitter);
        self
    }

    /// Register the same emitter for several types.
    pub fn with_emitters(mut self, node_types: &[NodeType], emitter: Emitter) -> Self {
        for node_type in node_types {
            self.emitters.insert(*node_type, emitter);
        }
        self
    }

    pub fn with_preamble(mut self, preamble: PreambleFn) -> Self {
        self.preamble = preamble;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn syntax(&self) -> Syntax {
        self.syntax
    }

    /// Emitter for a type, if the profile covers it.
    pub fn emitter(&self, node_type: NodeType) -> Option<Emitter> {
        self.emitters.get(&node_type).copied()
    }

    pub fn supports(&self, node_type: NodeType) -> bool {
        self.emitters.contains_key(&node_type)
    }

    /// Preamble lines for a finished render.
    pub fn preamble(&self, imports: &Imports) -> Vec<String> {
        (self.preamble)(imports)
    }
}

impl std::fmt::Debug for RenderProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut covered: Vec<&str> = self.emitters.keys().map(|t| t.as_str()).collect();
        covered.sort_unstable();
        f.debug_struct("RenderProfile")
            .field("id", &self.id)
            .field("syntax", &self.syntax)
            .field("emitters", &covered)
            .finish()
    }
}

/// Registry of render profiles, keyed by id.
#[derive(Debug, Clone, Default)]
pub struct ProfileRegistry {
    profiles: IndexMap<String, RenderProfile>,
}

impl ProfileRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The four built-in profiles.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(inline_style::profile());
        registry.register(utility_class::profile());
        registry.register(component_call::profile());
        registry.register(semantic::profile());
        registry
    }

    /// Register a profile, replacing any previous profile with the same id.
    pub fn register(&mut self, profile: RenderProfile) {
        self.profiles.insert(profile.id.clone(), profile);
    }

    pub fn get_profile(&self, id: &str) -> Result<&RenderProfile, RenderError> {
        self.profiles.get(id).ok_or_else(|| RenderError::UnknownProfile {
            id: id.to_string(),
        })
    }

    /// Registered profile ids, in registration order.
    pub fn ids(&self) -> Vec<&str> {
        self.profiles.keys().map(String::as_str).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprout_core::profile_ids;

    #[test]
    fn test_builtin_ids() {
        let registry = ProfileRegistry::builtin();
        assert_eq!(
            registry.ids(),
            vec![
                profile_ids::INLINE_STYLE,
                profile_ids::UTILITY_CLASS,
                profile_ids::COMPONENT_CALL,
                profile_ids::SEMANTIC,
            ]
        );
    }

    #[test]
    fn test_unknown_profile() {
        let registry = ProfileRegistry::builtin();
        let err = registry.get_profile("nonexistent-profile").unwrap_err();
        assert_eq!(
            err,
            RenderError::UnknownProfile {
                id: "nonexistent-profile".into()
            }
        );
    }

    #[test]
    fn test_profiles_are_partial() {
        let registry = ProfileRegistry::builtin();

        let inline = registry.get_profile(profile_ids::INLINE_STYLE).unwrap();
        assert!(inline.supports(NodeType::Heading));
        assert!(!inline.supports(NodeType::Icon));

        let utility = registry.get_profile(profile_ids::UTILITY_CLASS).unwrap();
        assert!(!utility.supports(NodeType::Video));

        let component = registry.get_profile(profile_ids::COMPONENT_CALL).unwrap();
        assert_eq!(component.syntax(), Syntax::Jsx);
        for ty in [NodeType::Select, NodeType::Table, NodeType::List, NodeType::Icon] {
            assert!(!component.supports(ty), "{} should fall back", ty);
        }

        let semantic = registry.get_profile(profile_ids::SEMANTIC).unwrap();
        for ty in NodeType::ALL {
            assert!(semantic.supports(ty));
        }
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = ProfileRegistry::builtin();
        registry.register(RenderProfile::new(profile_ids::SEMANTIC, Syntax::Html));
        assert_eq!(registry.ids().len(), 4);
        assert!(!registry
            .get_profile(profile_ids::SEMANTIC)
            .unwrap()
            .supports(NodeType::Text));
    }
}
