//! Node type registry: defaults, structure and per-profile rendering strategies.
//!
//! The registry is read-only configuration. Build it once (usually with
//! [`NodeTypeRegistry::builtin`]) and hand it to the tree and the code
//! generator explicitly.

use indexmap::IndexMap;

use crate::errors::TreeError;
use crate::types::{NodeType, PropValue, Props};

/// Identifiers of the built-in render profiles.
pub mod profile_ids {
    pub const INLINE_STYLE: &str = "inline-style";
    pub const UTILITY_CLASS: &str = "utility-class";
    pub const COMPONENT_CALL: &str = "component-call";
    pub const SEMANTIC: &str = "semantic";
}

use profile_ids::{COMPONENT_CALL, INLINE_STYLE, SEMANTIC, UTILITY_CLASS};

/// Structural rendering rule of a node type, independent of the profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentShape {
    /// Open tag, inner `text` or children, close tag.
    Wrapper,
    /// One `item_tag` line per string in the `prop` string list.
    Items {
        prop: &'static str,
        item_tag: &'static str,
    },
    /// Header row followed by one row per entry of the `prop` table.
    Table { prop: &'static str },
    /// Always self-closes; children are never rendered.
    SelfClosing,
}

/// Data handed to a profile's emitter for one node type.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderStrategy {
    /// Literal style declarations, in output order.
    Declarations(Vec<(String, String)>),
    /// Pre-composed utility class tokens.
    Classes(String),
    /// A library component, or an intrinsic element when `module` is `None`.
    Component {
        name: String,
        module: Option<String>,
    },
    /// Plain semantic markup, no styling.
    Semantic,
}

/// Metadata for one node type.
#[derive(Debug, Clone)]
pub struct NodeTypeDescriptor {
    node_type: NodeType,
    label: String,
    container: bool,
    tag: String,
    shape: ContentShape,
    defaults: Props,
    strategies: IndexMap<String, RenderStrategy>,
}

impl NodeTypeDescriptor {
    /// Start building a descriptor with its default wrapper tag.
    pub fn builder(node_type: NodeType, tag: &str) -> DescriptorBuilder {
        DescriptorBuilder::new(node_type, tag)
    }

    pub fn node_type(&self) -> NodeType {
        self.node_type
    }

    /// Human-readable name for editors.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Whether nodes of this type semantically own rendered children.
    pub fn is_container(&self) -> bool {
        self.container
    }

    /// Default wrapper tag.
    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn shape(&self) -> ContentShape {
        self.shape
    }

    /// A fresh copy of the default props. Nodes never share prop state.
    pub fn default_props(&self) -> Props {
        self.defaults.clone()
    }

    /// Look at a single default without copying the whole map.
    pub fn default_prop(&self, key: &str) -> Option<&PropValue> {
        self.defaults.get(key)
    }

    /// Strategy for a profile, if the type has one.
    pub fn strategy(&self, profile_id: &str) -> Option<&RenderStrategy> {
        self.strategies.get(profile_id)
    }
}

/// Builder for node type descriptors.
pub struct DescriptorBuilder {
    descriptor: NodeTypeDescriptor,
}

impl DescriptorBuilder {
    /// Create a new descriptor builder for a leaf type with wrapper shape.
    pub fn new(node_type: NodeType, tag: &str) -> Self {
        Self {
            descriptor: NodeTypeDescriptor {
                node_type,
                label: default_label(node_type),
                container: false,
                tag: tag.to_string(),
                shape: ContentShape::Wrapper,
                defaults: Props::new(),
                strategies: IndexMap::new(),
            },
        }
    }

    /// Override the editor label.
    pub fn label(mut self, label: &str) -> Self {
        self.descriptor.label = label.to_string();
        self
    }

    /// Mark the type as a container.
    pub fn container(mut self) -> Self {
        self.descriptor.container = true;
        self
    }

    /// Set the content shape.
    pub fn shape(mut self, shape: ContentShape) -> Self {
        self.descriptor.shape = shape;
        self
    }

    /// Add a default prop.
    pub fn prop(mut self, key: &str, value: impl Into<PropValue>) -> Self {
        self.descriptor.defaults.insert(key.to_string(), value.into());
        self
    }

    /// Attach an arbitrary strategy for a profile.
    pub fn strategy(mut self, profile_id: &str, strategy: RenderStrategy) -> Self {
        self.descriptor
            .strategies
            .insert(profile_id.to_string(), strategy);
        self
    }

    /// Inline style declarations for the `inline-style` profile.
    pub fn style(self, declarations: &[(&str, &str)]) -> Self {
        let declarations = declarations
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.strategy(INLINE_STYLE, RenderStrategy::Declarations(declarations))
    }

    /// Utility class tokens for the `utility-class` profile.
    pub fn classes(self, tokens: &str) -> Self {
        self.strategy(UTILITY_CLASS, RenderStrategy::Classes(tokens.to_string()))
    }

    /// Library component for the `component-call` profile.
    pub fn component(self, name: &str, module: &str) -> Self {
        self.strategy(
            COMPONENT_CALL,
            RenderStrategy::Component {
                name: name.to_string(),
                module: Some(module.to_string()),
            },
        )
    }

    /// Intrinsic element for the `component-call` profile.
    pub fn intrinsic(self, name: &str) -> Self {
        self.strategy(
            COMPONENT_CALL,
            RenderStrategy::Component {
                name: name.to_string(),
                module: None,
            },
        )
    }

    /// Plain markup for the `semantic` profile.
    pub fn semantic(self) -> Self {
        self.strategy(SEMANTIC, RenderStrategy::Semantic)
    }

    pub fn build(self) -> NodeTypeDescriptor {
        self.descriptor
    }
}

fn default_label(node_type: NodeType) -> String {
    let id = node_type.as_str();
    let mut chars = id.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// A registry of node type descriptors.
#[derive(Debug, Clone, Default)]
pub struct NodeTypeRegistry {
    types: IndexMap<NodeType, NodeTypeDescriptor>,
}

impl NodeTypeRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            types: IndexMap::new(),
        }
    }

    /// Register a descriptor, replacing any previous entry for its type.
    pub fn register(&mut self, descriptor: NodeTypeDescriptor) {
        self.types.insert(descriptor.node_type, descriptor);
    }

    /// Look up a type's descriptor.
    pub fn lookup(&self, node_type: NodeType) -> Result<&NodeTypeDescriptor, TreeError> {
        self.types
            .get(&node_type)
            .ok_or_else(|| TreeError::UnknownType {
                name: node_type.as_str().to_string(),
            })
    }

    /// Check if a type is registered.
    pub fn contains(&self, node_type: NodeType) -> bool {
        self.types.contains_key(&node_type)
    }

    /// Registered types, in registration order.
    pub fn list_types(&self) -> Vec<NodeType> {
        self.types.keys().copied().collect()
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Check if registry is empty.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// The built-in table covering every [`NodeType`].
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for descriptor in builtin_descriptors() {
            registry.register(descriptor);
        }
        registry
    }
}

const UI: &str = "@/components/ui";

fn ui_module(name: &str) -> String {
    format!("{}/{}", UI, name)
}

fn builtin_descriptors() -> Vec<NodeTypeDescriptor> {
    use NodeType as T;

    vec![
        // Containers
        NodeTypeDescriptor::builder(T::Container, "div")
            .container()
            .style(&[
                ("display", "flex"),
                ("flex-direction", "column"),
                ("gap", "16px"),
                ("padding", "16px"),
            ])
            .classes("flex flex-col gap-4 p-4")
            .intrinsic("div")
            .semantic()
            .build(),
        NodeTypeDescriptor::builder(T::Section, "section")
            .container()
            .style(&[("padding", "48px 24px")])
            .classes("py-12 px-6")
            .intrinsic("section")
            .semantic()
            .build(),
        NodeTypeDescriptor::builder(T::Card, "div")
            .container()
            .style(&[
                ("border", "1px solid #e5e7eb"),
                ("border-radius", "8px"),
                ("padding", "24px"),
                ("box-shadow", "0 1px 2px rgba(0, 0, 0, 0.05)"),
            ])
            .classes("rounded-lg border bg-white p-6 shadow-sm")
            .component("Card", &ui_module("card"))
            .semantic()
            .build(),
        NodeTypeDescriptor::builder(T::Row, "div")
            .container()
            .style(&[
                ("display", "flex"),
                ("flex-direction", "row"),
                ("gap", "16px"),
                ("align-items", "center"),
            ])
            .classes("flex flex-row items-center gap-4")
            .intrinsic("div")
            .semantic()
            .build(),
        NodeTypeDescriptor::builder(T::Column, "div")
            .container()
            .style(&[("display", "flex"), ("flex-direction", "column"), ("gap", "8px")])
            .classes("flex flex-col gap-2")
            .intrinsic("div")
            .semantic()
            .build(),
        NodeTypeDescriptor::builder(T::Grid, "div")
            .container()
            .prop("columns", 2.0)
            .style(&[("display", "grid"), ("gap", "16px")])
            .classes("grid gap-4")
            .intrinsic("div")
            .semantic()
            .build(),
        NodeTypeDescriptor::builder(T::Form, "form")
            .container()
            .style(&[("display", "flex"), ("flex-direction", "column"), ("gap", "12px")])
            .classes("flex flex-col gap-3")
            .intrinsic("form")
            .semantic()
            .build(),
        NodeTypeDescriptor::builder(T::Navbar, "nav")
            .container()
            .label("Navigation bar")
            .style(&[
                ("display", "flex"),
                ("justify-content", "space-between"),
                ("align-items", "center"),
                ("padding", "16px 24px"),
                ("border-bottom", "1px solid #e5e7eb"),
            ])
            .classes("flex items-center justify-between border-b px-6 py-4")
            .intrinsic("nav")
            .semantic()
            .build(),
        NodeTypeDescriptor::builder(T::Footer, "footer")
            .container()
            .style(&[
                ("padding", "24px"),
                ("border-top", "1px solid #e5e7eb"),
                ("color", "#6b7280"),
            ])
            .classes("border-t p-6 text-gray-500")
            .intrinsic("footer")
            .semantic()
            .build(),
        NodeTypeDescriptor::builder(T::Modal, "dialog")
            .container()
            .prop("open", true)
            .style(&[
                ("border", "none"),
                ("border-radius", "12px"),
                ("padding", "24px"),
                ("max-width", "480px"),
            ])
            .classes("rounded-xl p-6 max-w-md shadow-lg")
            .component("Dialog", &ui_module("dialog"))
            .semantic()
            .build(),
        NodeTypeDescriptor::builder(T::Tabs, "div")
            .container()
            .style(&[("display", "flex"), ("flex-direction", "column"), ("gap", "8px")])
            .classes("flex flex-col gap-2")
            .component("Tabs", &ui_module("tabs"))
            .semantic()
            .build(),
        NodeTypeDescriptor::builder(T::Accordion, "div")
            .container()
            .style(&[("border", "1px solid #e5e7eb"), ("border-radius", "8px")])
            .classes("divide-y rounded-lg border")
            .component("Accordion", &ui_module("accordion"))
            .semantic()
            .build(),
        // Text
        NodeTypeDescriptor::builder(T::Heading, "h2")
            .prop("text", "Heading")
            .prop("level", 2.0)
            .style(&[("font-size", "2rem"), ("font-weight", "700"), ("margin", "0")])
            .classes("font-bold tracking-tight")
            .intrinsic("h2")
            .semantic()
            .build(),
        NodeTypeDescriptor::builder(T::Text, "p")
            .prop("text", "Lorem ipsum dolor sit amet.")
            .style(&[("font-size", "1rem"), ("line-height", "1.5"), ("margin", "0")])
            .classes("text-base leading-relaxed")
            .intrinsic("p")
            .semantic()
            .build(),
        NodeTypeDescriptor::builder(T::Label, "label")
            .prop("text", "Label")
            .style(&[("font-size", "0.875rem"), ("font-weight", "500")])
            .classes("text-sm font-medium")
            .component("Label", &ui_module("label"))
            .semantic()
            .build(),
        NodeTypeDescriptor::builder(T::Link, "a")
            .prop("text", "Link")
            .prop("href", "#")
            .style(&[("color", "#2563eb"), ("text-decoration", "underline")])
            .classes("text-blue-600 underline hover:text-blue-800")
            .intrinsic("a")
            .semantic()
            .build(),
        NodeTypeDescriptor::builder(T::Code, "pre")
            .prop("text", "console.log('hello');")
            .style(&[
                ("font-family", "monospace"),
                ("background", "#f3f4f6"),
                ("padding", "12px"),
                ("border-radius", "6px"),
            ])
            .classes("rounded-md bg-gray-100 p-3 font-mono text-sm")
            .semantic()
            .build(),
        NodeTypeDescriptor::builder(T::Blockquote, "blockquote")
            .prop("text", "A well-chosen quote.")
            .style(&[
                ("border-left", "4px solid #d1d5db"),
                ("padding-left", "16px"),
                ("font-style", "italic"),
            ])
            .classes("border-l-4 pl-4 italic")
            .semantic()
            .build(),
        // Controls
        NodeTypeDescriptor::builder(T::Button, "button")
            .prop("text", "Button")
            .prop("variant", "primary")
            .prop("size", "md")
            .prop("disabled", false)
            .style(&[
                ("padding", "8px 16px"),
                ("border-radius", "6px"),
                ("border", "none"),
                ("cursor", "pointer"),
            ])
            .classes("inline-flex items-center justify-center rounded-md font-medium")
            .component("Button", &ui_module("button"))
            .semantic()
            .build(),
        NodeTypeDescriptor::builder(T::Input, "input")
            .shape(ContentShape::SelfClosing)
            .prop("type", "text")
            .prop("placeholder", "Enter text")
            .prop("disabled", false)
            .style(&[
                ("padding", "8px 12px"),
                ("border", "1px solid #d1d5db"),
                ("border-radius", "6px"),
            ])
            .classes("rounded-md border border-gray-300 px-3 py-2")
            .component("Input", &ui_module("input"))
            .semantic()
            .build(),
        NodeTypeDescriptor::builder(T::Textarea, "textarea")
            .label("Text area")
            .prop("placeholder", "Type your message")
            .prop("rows", 4.0)
            .style(&[
                ("padding", "8px 12px"),
                ("border", "1px solid #d1d5db"),
                ("border-radius", "6px"),
            ])
            .classes("rounded-md border border-gray-300 px-3 py-2")
            .component("Textarea", &ui_module("textarea"))
            .semantic()
            .build(),
        NodeTypeDescriptor::builder(T::Select, "select")
            .shape(ContentShape::Items { prop: "options", item_tag: "option" })
            .prop("options", PropValue::list(["Option 1", "Option 2", "Option 3"]))
            .style(&[
                ("padding", "8px 12px"),
                ("border", "1px solid #d1d5db"),
                ("border-radius", "6px"),
            ])
            .classes("rounded-md border border-gray-300 px-3 py-2")
            .semantic()
            .build(),
        NodeTypeDescriptor::builder(T::Checkbox, "input")
            .shape(ContentShape::SelfClosing)
            .prop("text", "Checkbox")
            .prop("checked", false)
            .style(&[("width", "16px"), ("height", "16px")])
            .classes("h-4 w-4 rounded border-gray-300")
            .component("Checkbox", &ui_module("checkbox"))
            .semantic()
            .build(),
        NodeTypeDescriptor::builder(T::Radio, "input")
            .label("Radio button")
            .shape(ContentShape::SelfClosing)
            .prop("text", "Option")
            .prop("name", "choice")
            .prop("checked", false)
            .style(&[("width", "16px"), ("height", "16px")])
            .classes("h-4 w-4 border-gray-300")
            .component("RadioGroupItem", &ui_module("radio-group"))
            .semantic()
            .build(),
        NodeTypeDescriptor::builder(T::Switch, "input")
            .shape(ContentShape::SelfClosing)
            .prop("text", "Toggle")
            .prop("checked", false)
            .style(&[("width", "36px"), ("height", "20px")])
            .classes("h-5 w-9 rounded-full")
            .component("Switch", &ui_module("switch"))
            .semantic()
            .build(),
        NodeTypeDescriptor::builder(T::Slider, "input")
            .shape(ContentShape::SelfClosing)
            .prop("min", 0.0)
            .prop("max", 100.0)
            .prop("step", 1.0)
            .prop("value", 50.0)
            .style(&[("width", "100%")])
            .classes("w-full accent-blue-600")
            .semantic()
            .build(),
        // Media
        NodeTypeDescriptor::builder(T::Image, "img")
            .shape(ContentShape::SelfClosing)
            .prop("src", "https://placehold.co/600x400")
            .prop("alt", "Placeholder image")
            .style(&[("max-width", "100%"), ("height", "auto"), ("border-radius", "8px")])
            .classes("h-auto max-w-full rounded-lg")
            .intrinsic("img")
            .semantic()
            .build(),
        NodeTypeDescriptor::builder(T::Video, "video")
            .shape(ContentShape::SelfClosing)
            .prop("src", "")
            .prop("controls", true)
            .style(&[("max-width", "100%"), ("border-radius", "8px")])
            .semantic()
            .build(),
        NodeTypeDescriptor::builder(T::Avatar, "img")
            .shape(ContentShape::SelfClosing)
            .prop("src", "https://placehold.co/64x64")
            .prop("alt", "Avatar")
            .style(&[
                ("width", "40px"),
                ("height", "40px"),
                ("border-radius", "9999px"),
                ("object-fit", "cover"),
            ])
            .classes("h-10 w-10 rounded-full object-cover")
            .component("Avatar", &ui_module("avatar"))
            .semantic()
            .build(),
        NodeTypeDescriptor::builder(T::Icon, "span")
            .prop("name", "star")
            .prop("text", "\u{2605}")
            .classes("inline-block h-5 w-5")
            .semantic()
            .build(),
        // Feedback and data
        NodeTypeDescriptor::builder(T::Badge, "span")
            .prop("text", "Badge")
            .prop("variant", "default")
            .style(&[
                ("display", "inline-block"),
                ("padding", "2px 10px"),
                ("border-radius", "9999px"),
                ("font-size", "0.75rem"),
                ("font-weight", "600"),
            ])
            .classes("inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-semibold")
            .component("Badge", &ui_module("badge"))
            .semantic()
            .build(),
        NodeTypeDescriptor::builder(T::Alert, "div")
            .prop("text", "Heads up! Something needs your attention.")
            .prop("variant", "info")
            .style(&[
                ("padding", "16px"),
                ("border-radius", "8px"),
                ("border", "1px solid #bfdbfe"),
                ("background", "#eff6ff"),
            ])
            .classes("rounded-lg border p-4")
            .component("Alert", &ui_module("alert"))
            .semantic()
            .build(),
        NodeTypeDescriptor::builder(T::Divider, "hr")
            .shape(ContentShape::SelfClosing)
            .style(&[("border", "none"), ("border-top", "1px solid #e5e7eb"), ("margin", "16px 0")])
            .classes("my-4 border-gray-200")
            .component("Separator", &ui_module("separator"))
            .semantic()
            .build(),
        NodeTypeDescriptor::builder(T::Progress, "progress")
            .label("Progress bar")
            .shape(ContentShape::SelfClosing)
            .prop("value", 60.0)
            .prop("max", 100.0)
            .style(&[("width", "100%"), ("height", "8px")])
            .classes("h-2 w-full")
            .component("Progress", &ui_module("progress"))
            .semantic()
            .build(),
        NodeTypeDescriptor::builder(T::List, "ul")
            .shape(ContentShape::Items { prop: "items", item_tag: "li" })
            .prop("items", PropValue::list(["First item", "Second item", "Third item"]))
            .prop("ordered", false)
            .style(&[("padding-left", "24px"), ("margin", "0")])
            .classes("list-inside space-y-1")
            .semantic()
            .build(),
        NodeTypeDescriptor::builder(T::Table, "table")
            .shape(ContentShape::Table { prop: "data" })
            .prop(
                "data",
                PropValue::Table {
                    headers: vec!["Name".into(), "Email".into(), "Role".into()],
                    rows: vec![
                        vec!["Ada Lovelace".into(), "ada@example.com".into(), "Admin".into()],
                        vec!["Alan Turing".into(), "alan@example.com".into(), "Editor".into()],
                    ],
                },
            )
            .style(&[("width", "100%"), ("border-collapse", "collapse")])
            .classes("w-full border-collapse text-left text-sm")
            .semantic()
            .build(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_covers_every_type() {
        let registry = NodeTypeRegistry::builtin();
        assert_eq!(registry.len(), NodeType::ALL.len());
        for ty in NodeType::ALL {
            assert!(registry.contains(ty), "missing descriptor for {}", ty);
        }
    }

    #[test]
    fn test_registry_new() {
        let registry = NodeTypeRegistry::new();
        assert!(registry.is_empty());
        let err = registry.lookup(NodeType::Heading).unwrap_err();
        assert_eq!(err, TreeError::UnknownType { name: "heading".into() });
    }

    #[test]
    fn test_default_props_are_copies() {
        let registry = NodeTypeRegistry::builtin();
        let heading = registry.lookup(NodeType::Heading).unwrap();

        let mut first = heading.default_props();
        first.insert("text".into(), PropValue::text("Changed"));

        let second = heading.default_props();
        assert_eq!(second.get("text"), Some(&PropValue::text("Heading")));
        assert_eq!(heading.default_prop("level"), Some(&PropValue::Number(2.0)));
    }

    #[test]
    fn test_container_flags() {
        let registry = NodeTypeRegistry::builtin();
        assert!(registry.lookup(NodeType::Card).unwrap().is_container());
        assert!(!registry.lookup(NodeType::Button).unwrap().is_container());
        assert_eq!(
            registry.lookup(NodeType::Image).unwrap().shape(),
            ContentShape::SelfClosing
        );
    }

    #[test]
    fn test_strategies_may_be_absent() {
        let registry = NodeTypeRegistry::builtin();
        let table = registry.lookup(NodeType::Table).unwrap();
        assert!(table.strategy(COMPONENT_CALL).is_none());
        assert_eq!(table.strategy(SEMANTIC), Some(&RenderStrategy::Semantic));

        let button = registry.lookup(NodeType::Button).unwrap();
        assert!(matches!(
            button.strategy(COMPONENT_CALL),
            Some(RenderStrategy::Component { name, module: Some(_) }) if name == "Button"
        ));
    }

    #[test]
    fn test_descriptor_builder() {
        let descriptor = NodeTypeDescriptor::builder(NodeType::Card, "article")
            .container()
            .label("Panel")
            .prop("text", "Hi")
            .classes("p-2")
            .build();

        assert_eq!(descriptor.label(), "Panel");
        assert_eq!(descriptor.tag(), "article");
        assert!(descriptor.is_container());
        assert_eq!(
            descriptor.strategy(UTILITY_CLASS),
            Some(&RenderStrategy::Classes("p-2".into()))
        );
        assert!(descriptor.strategy(INLINE_STYLE).is_none());
    }

    #[test]
    fn test_default_label() {
        let registry = NodeTypeRegistry::builtin();
        assert_eq!(registry.lookup(NodeType::Heading).unwrap().label(), "Heading");
        assert_eq!(registry.lookup(NodeType::Navbar).unwrap().label(), "Navigation bar");
    }
}
