//! Emission model shared by all profiles.
//!
//! An emitter turns one node into an [`Emission`]: the wrapper tag and the
//! attribute list. Content shape (text, list items, table rows, children)
//! is handled by the generator, so emitters never build markup strings.

use std::collections::{BTreeMap, BTreeSet};

use sprout_core::{ContentShape, Node, NodeType, NodeTypeDescriptor, PropValue, RenderStrategy};

use crate::syntax::Syntax;

/// An attribute value.
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

/// A single attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct Attr {
    pub name: String,
    pub value: AttrValue,
}

impl Attr {
    pub fn text(name: &str, value: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            value: AttrValue::Text(value.into()),
        }
    }

    pub fn number(name: &str, value: f64) -> Self {
        Self {
            name: name.to_string(),
            value: AttrValue::Number(value),
        }
    }

    pub fn bool(name: &str, value: bool) -> Self {
        Self {
            name: name.to_string(),
            value: AttrValue::Bool(value),
        }
    }

    /// Convert a prop value into an attribute, if it has a scalar form.
    pub fn from_prop(name: &str, value: &PropValue) -> Option<Self> {
        match value {
            PropValue::Text(s) => Some(Attr::text(name, s.clone())),
            PropValue::Number(n) => Some(Attr::number(name, *n)),
            PropValue::Bool(b) => Some(Attr::bool(name, *b)),
            PropValue::StringList(_) | PropValue::Table { .. } => None,
        }
    }
}

/// A component import required by an emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    pub name: String,
    pub module: String,
}

/// Imports collected over a render, by module.
pub type Imports = BTreeMap<String, BTreeSet<String>>;

/// Profile-specific representation of one node.
#[derive(Debug, Clone, PartialEq)]
pub struct Emission {
    pub tag: String,
    pub attrs: Vec<Attr>,
    pub import: Option<Import>,
}

impl Emission {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            import: None,
        }
    }

    pub fn with_attrs(mut self, attrs: Vec<Attr>) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn with_import(mut self, name: &str, module: &str) -> Self {
        self.import = Some(Import {
            name: name.to_string(),
            module: module.to_string(),
        });
        self
    }
}

/// Everything an emitter sees for one node.
pub struct EmitContext<'a> {
    pub node: &'a Node,
    pub descriptor: &'a NodeTypeDescriptor,
    pub strategy: &'a RenderStrategy,
    pub syntax: Syntax,
}

impl<'a> EmitContext<'a> {
    pub fn text_prop(&self, key: &str) -> Option<&'a str> {
        self.node.prop(key).and_then(PropValue::as_text)
    }

    pub fn number_prop(&self, key: &str) -> Option<f64> {
        self.node.prop(key).and_then(PropValue::as_number)
    }

    pub fn bool_prop(&self, key: &str) -> bool {
        self.node.prop(key).and_then(PropValue::as_bool).unwrap_or(false)
    }
}

/// A per-(type, profile) emitter.
pub type Emitter = fn(&EmitContext<'_>) -> Emission;

/// Generic fallback: the type's default tag and nothing but the `text` prop.
///
/// Wrapper, item and table shapes place the text inside the element; a
/// self-closing element has no inside, so it carries the text as a label.
pub fn generic_fallback(node: &Node, descriptor: &NodeTypeDescriptor) -> Emission {
    let mut attrs = Vec::new();
    if descriptor.shape() == ContentShape::SelfClosing {
        label_from_text(node, &mut attrs);
    }
    Emission::new(descriptor.tag()).with_attrs(attrs)
}

/// Wrapper tag for a node, honoring props that change the element.
pub fn element_tag(node: &Node, descriptor: &NodeTypeDescriptor) -> String {
    match node.node_type() {
        NodeType::Heading => match node.prop("level").and_then(PropValue::as_number) {
            Some(level) => format!("h{}", (level as i64).clamp(1, 6)),
            None => descriptor.tag().to_string(),
        },
        NodeType::List if node.prop("ordered").and_then(PropValue::as_bool) == Some(true) => {
            "ol".to_string()
        }
        _ => descriptor.tag().to_string(),
    }
}

/// Attributes every markup target carries regardless of styling.
pub fn semantic_attrs(node: &Node) -> Vec<Attr> {
    let mut attrs = Vec::new();
    let copy = |key: &str, attrs: &mut Vec<Attr>| {
        if let Some(attr) = node.prop(key).and_then(|v| Attr::from_prop(key, v)) {
            attrs.push(attr);
        }
    };

    match node.node_type() {
        NodeType::Link => copy("href", &mut attrs),
        NodeType::Image | NodeType::Avatar => {
            copy("src", &mut attrs);
            copy("alt", &mut attrs);
        }
        NodeType::Video => {
            copy("src", &mut attrs);
            copy("controls", &mut attrs);
        }
        NodeType::Button => {
            attrs.push(Attr::text("type", "button"));
            copy("disabled", &mut attrs);
        }
        NodeType::Input => {
            copy("type", &mut attrs);
            copy("placeholder", &mut attrs);
            copy("disabled", &mut attrs);
        }
        NodeType::Textarea => {
            copy("placeholder", &mut attrs);
            copy("rows", &mut attrs);
            copy("disabled", &mut attrs);
        }
        NodeType::Select => copy("disabled", &mut attrs),
        NodeType::Checkbox | NodeType::Switch => {
            attrs.push(Attr::text("type", "checkbox"));
            if node.node_type() == NodeType::Switch {
                attrs.push(Attr::text("role", "switch"));
            }
            copy("checked", &mut attrs);
            label_from_text(node, &mut attrs);
        }
        NodeType::Radio => {
            attrs.push(Attr::text("type", "radio"));
            copy("name", &mut attrs);
            copy("checked", &mut attrs);
            label_from_text(node, &mut attrs);
        }
        NodeType::Slider => {
            attrs.push(Attr::text("type", "range"));
            copy("min", &mut attrs);
            copy("max", &mut attrs);
            copy("step", &mut attrs);
            copy("value", &mut attrs);
        }
        NodeType::Progress => {
            copy("value", &mut attrs);
            copy("max", &mut attrs);
        }
        NodeType::Label => copy("for", &mut attrs),
        NodeType::Alert => attrs.push(Attr::text("role", "alert")),
        NodeType::Icon => {
            attrs.push(Attr::text("aria-hidden", "true"));
            if let Some(name) = node.prop("name").and_then(PropValue::as_text) {
                attrs.push(Attr::text("data-icon", name));
            }
        }
        NodeType::Modal => copy("open", &mut attrs),
        _ => {}
    }
    attrs
}

/// Self-closing controls cannot hold their caption, so it becomes an accessible label.
fn label_from_text(node: &Node, attrs: &mut Vec<Attr>) {
    if let Some(text) = node.text().filter(|t| !t.is_empty()) {
        attrs.push(Attr::text("aria-label", text));
    }
}
