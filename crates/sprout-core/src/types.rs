//! Core value types: node identifiers, node types, and property values.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;

use crate::errors::TreeError;

/// Identifier of a node, unique across an entire [`UiTree`](crate::UiTree).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct NodeId(pub String);

impl NodeId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(s: &str) -> Self {
        NodeId(s.to_string())
    }
}

impl From<String> for NodeId {
    fn from(s: String) -> Self {
        NodeId(s)
    }
}

impl Borrow<str> for NodeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// The closed set of built-in node types.
///
/// Each variant has a stable kebab-case identifier used in generated ids,
/// registry lookups and editor integrations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum NodeType {
    // Containers
    Container,
    Section,
    Card,
    Row,
    Column,
    Grid,
    Form,
    Navbar,
    Footer,
    Modal,
    Tabs,
    Accordion,
    // Text
    Heading,
    Text,
    Label,
    Link,
    Code,
    Blockquote,
    // Controls
    Button,
    Input,
    Textarea,
    Select,
    Checkbox,
    Radio,
    Switch,
    Slider,
    // Media
    Image,
    Video,
    Avatar,
    Icon,
    // Feedback and data
    Badge,
    Alert,
    Divider,
    Progress,
    List,
    Table,
}

impl NodeType {
    /// Every built-in type, in declaration order.
    pub const ALL: [NodeType; 36] = [
        NodeType::Container,
        NodeType::Section,
        NodeType::Card,
        NodeType::Row,
        NodeType::Column,
        NodeType::Grid,
        NodeType::Form,
        NodeType::Navbar,
        NodeType::Footer,
        NodeType::Modal,
        NodeType::Tabs,
        NodeType::Accordion,
        NodeType::Heading,
        NodeType::Text,
        NodeType::Label,
        NodeType::Link,
        NodeType::Code,
        NodeType::Blockquote,
        NodeType::Button,
        NodeType::Input,
        NodeType::Textarea,
        NodeType::Select,
        NodeType::Checkbox,
        NodeType::Radio,
        NodeType::Switch,
        NodeType::Slider,
        NodeType::Image,
        NodeType::Video,
        NodeType::Avatar,
        NodeType::Icon,
        NodeType::Badge,
        NodeType::Alert,
        NodeType::Divider,
        NodeType::Progress,
        NodeType::List,
        NodeType::Table,
    ];

    /// Stable string identifier.
    pub const fn as_str(&self) -> &'static str {
        match self {
            NodeType::Container => "container",
            NodeType::Section => "section",
            NodeType::Card => "card",
            NodeType::Row => "row",
            NodeType::Column => "column",
            NodeType::Grid => "grid",
            NodeType::Form => "form",
            NodeType::Navbar => "navbar",
            NodeType::Footer => "footer",
            NodeType::Modal => "modal",
            NodeType::Tabs => "tabs",
            NodeType::Accordion => "accordion",
            NodeType::Heading => "heading",
            NodeType::Text => "text",
            NodeType::Label => "label",
            NodeType::Link => "link",
            NodeType::Code => "code",
            NodeType::Blockquote => "blockquote",
            NodeType::Button => "button",
            NodeType::Input => "input",
            NodeType::Textarea => "textarea",
            NodeType::Select => "select",
            NodeType::Checkbox => "checkbox",
            NodeType::Radio => "radio",
            NodeType::Switch => "switch",
            NodeType::Slider => "slider",
            NodeType::Image => "image",
            NodeType::Video => "video",
            NodeType::Avatar => "avatar",
            NodeType::Icon => "icon",
            NodeType::Badge => "badge",
            NodeType::Alert => "alert",
            NodeType::Divider => "divider",
            NodeType::Progress => "progress",
            NodeType::List => "list",
            NodeType::Table => "table",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeType {
    type Err = TreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| TreeError::UnknownType { name: s.to_string() })
    }
}

/// A node property value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PropValue {
    Text(String),
    Number(f64),
    Bool(bool),
    StringList(Vec<String>),
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
}

/// A node's property map. Insertion order only matters for deterministic output.
pub type Props = IndexMap<String, PropValue>;

impl PropValue {
    /// Convenience constructor for text values.
    pub fn text(s: impl Into<String>) -> Self {
        PropValue::Text(s.into())
    }

    /// Convenience constructor for string lists.
    pub fn list<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        PropValue::StringList(items.into_iter().map(Into::into).collect())
    }

    /// Get as text if it's a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get as number if it's a number value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            PropValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Get as boolean if it's a boolean value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PropValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get as a string list.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            PropValue::StringList(items) => Some(items),
            _ => None,
        }
    }

    /// Get table headers and rows.
    pub fn as_table(&self) -> Option<(&[String], &[Vec<String>])> {
        match self {
            PropValue::Table { headers, rows } => Some((headers, rows)),
            _ => None,
        }
    }

    /// Name of the variant, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            PropValue::Text(_) => "text",
            PropValue::Number(_) => "number",
            PropValue::Bool(_) => "bool",
            PropValue::StringList(_) => "string-list",
            PropValue::Table { .. } => "table",
        }
    }
}

/// Format a number the way it is written in source: integral values drop the `.0`.
pub fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}

impl fmt::Display for PropValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropValue::Text(s) => f.write_str(s),
            PropValue::Number(n) => f.write_str(&format_number(*n)),
            PropValue::Bool(b) => write!(f, "{}", b),
            PropValue::StringList(items) => f.write_str(&items.join(", ")),
            PropValue::Table { headers, .. } => f.write_str(&headers.join(", ")),
        }
    }
}

impl From<&str> for PropValue {
    fn from(s: &str) -> Self {
        PropValue::Text(s.to_string())
    }
}

impl From<String> for PropValue {
    fn from(s: String) -> Self {
        PropValue::Text(s)
    }
}

impl From<f64> for PropValue {
    fn from(n: f64) -> Self {
        PropValue::Number(n)
    }
}

impl From<bool> for PropValue {
    fn from(b: bool) -> Self {
        PropValue::Bool(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_type_round_trips_through_its_id() {
        for ty in NodeType::ALL {
            assert_eq!(ty.as_str().parse::<NodeType>(), Ok(ty));
        }
    }

    #[test]
    fn test_unknown_type_id() {
        let err = "carousel".parse::<NodeType>().unwrap_err();
        assert_eq!(err, TreeError::UnknownType { name: "carousel".into() });
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(2.0), "2");
        assert_eq!(format_number(-40.0), "-40");
        assert_eq!(format_number(0.5), "0.5");
    }

    #[test]
    fn test_prop_value_accessors() {
        let list = PropValue::list(["a", "b"]);
        assert_eq!(list.as_list(), Some(&["a".to_string(), "b".to_string()][..]));
        assert_eq!(list.as_text(), None);
        assert_eq!(PropValue::from(3.0).as_number(), Some(3.0));
        assert_eq!(PropValue::from(true).as_bool(), Some(true));
        assert_eq!(PropValue::from("hi").to_string(), "hi");
        assert_eq!(list.kind(), "string-list");
    }
}
