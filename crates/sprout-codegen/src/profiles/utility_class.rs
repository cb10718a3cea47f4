//! `utility-class`: HTML styled with utility class tokens.

use sprout_core::{
    profile_ids::UTILITY_CLASS, Node, NodeType, NodeTypeDescriptor, PropValue, RenderStrategy,
};

use super::RenderProfile;
use crate::emit::{element_tag, semantic_attrs, Attr, EmitContext, Emission, Imports};
use crate::syntax::Syntax;

const STYLESHEET: &str = r#"<script src="https://cdn.tailwindcss.com"></script>"#;

pub fn profile() -> RenderProfile {
    let covered: Vec<NodeType> = NodeType::ALL
        .into_iter()
        .filter(|ty| *ty != NodeType::Video)
        .collect();
    RenderProfile::new(UTILITY_CLASS, Syntax::Html)
        .with_emitters(&covered, emit)
        .with_preamble(preamble)
}

fn preamble(_: &Imports) -> Vec<String> {
    vec![STYLESHEET.to_string()]
}

fn emit(ctx: &EmitContext<'_>) -> Emission {
    let base = match ctx.strategy {
        RenderStrategy::Classes(tokens) => tokens.as_str(),
        _ => "",
    };
    let classes = class_tokens(ctx.node, ctx.descriptor, base);

    let mut attrs = Vec::new();
    if !classes.is_empty() {
        attrs.push(Attr::text("class", classes));
    }
    attrs.extend(semantic_attrs(ctx.node));

    Emission::new(element_tag(ctx.node, ctx.descriptor)).with_attrs(attrs)
}

/// The full class list for a node: the type's base tokens plus tokens
/// derived from its props.
pub(crate) fn class_tokens(node: &Node, descriptor: &NodeTypeDescriptor, base: &str) -> String {
    let mut tokens: Vec<String> = base.split_whitespace().map(str::to_string).collect();
    let text = |key: &str| node.prop(key).and_then(PropValue::as_text);

    match node.node_type() {
        NodeType::Heading => {
            let level = node
                .prop("level")
                .or_else(|| descriptor.default_prop("level"))
                .and_then(PropValue::as_number);
            if let Some(level) = level {
                tokens.push(heading_size(level).to_string());
            }
        }
        NodeType::Grid => {
            if let Some(columns) = node.prop("columns").and_then(PropValue::as_number) {
                tokens.push(format!("grid-cols-{}", (columns as i64).max(1)));
            }
        }
        NodeType::List => {
            let ordered = node.prop("ordered").and_then(PropValue::as_bool) == Some(true);
            tokens.push(if ordered { "list-decimal" } else { "list-disc" }.to_string());
        }
        NodeType::Button => {
            let variant = match text("variant").unwrap_or("primary") {
                "secondary" => "bg-gray-100 text-gray-900 hover:bg-gray-200",
                "outline" => "border border-gray-300 bg-transparent hover:bg-gray-50",
                "ghost" => "bg-transparent hover:bg-gray-100",
                "destructive" => "bg-red-600 text-white hover:bg-red-700",
                _ => "bg-blue-600 text-white hover:bg-blue-700",
            };
            let size = match text("size").unwrap_or("md") {
                "sm" => "h-8 px-3 text-sm",
                "lg" => "h-12 px-6 text-lg",
                _ => "h-10 px-4 py-2",
            };
            tokens.extend(variant.split(' ').chain(size.split(' ')).map(str::to_string));
            if node.prop("disabled").and_then(PropValue::as_bool) == Some(true) {
                tokens.push("opacity-50".to_string());
                tokens.push("cursor-not-allowed".to_string());
            }
        }
        NodeType::Badge => {
            let variant = match text("variant").unwrap_or("default") {
                "secondary" => "bg-gray-100 text-gray-900",
                "outline" => "border text-gray-900",
                "success" => "bg-green-100 text-green-800",
                "warning" => "bg-yellow-100 text-yellow-800",
                "destructive" => "bg-red-100 text-red-800",
                _ => "bg-gray-900 text-white",
            };
            tokens.extend(variant.split(' ').map(str::to_string));
        }
        NodeType::Alert => {
            let variant = match text("variant").unwrap_or("info") {
                "success" => "border-green-200 bg-green-50 text-green-900",
                "warning" => "border-yellow-200 bg-yellow-50 text-yellow-900",
                "error" => "border-red-200 bg-red-50 text-red-900",
                _ => "border-blue-200 bg-blue-50 text-blue-900",
            };
            tokens.extend(variant.split(' ').map(str::to_string));
        }
        _ => {}
    }

    if let Some(align) = text("align") {
        tokens.push(format!("text-{}", align));
    }
    if let Some(extra) = text("className") {
        tokens.extend(extra.split_whitespace().map(str::to_string));
    }

    tokens.join(" ")
}

fn heading_size(level: f64) -> &'static str {
    match (level as i64).clamp(1, 6) {
        1 => "text-4xl",
        2 => "text-3xl",
        3 => "text-2xl",
        4 => "text-xl",
        5 => "text-lg",
        _ => "text-base",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sprout_core::{NodeTypeRegistry, UiTree};
    use std::sync::Arc;

    #[test]
    fn test_button_tokens_follow_props() {
        let registry = Arc::new(NodeTypeRegistry::builtin());
        let mut tree = UiTree::new(registry.clone());
        let id = tree.insert(None, NodeType::Button).unwrap();
        tree.set_prop(id.as_str(), "variant", PropValue::text("destructive")).unwrap();
        tree.set_prop(id.as_str(), "size", PropValue::text("sm")).unwrap();
        tree.set_prop(id.as_str(), "disabled", PropValue::Bool(true)).unwrap();

        let descriptor = registry.lookup(NodeType::Button).unwrap();
        let tokens = class_tokens(tree.find(id.as_str()).unwrap(), descriptor, "rounded-md");
        let expected = [
            "rounded-md",
            "bg-red-600 text-white hover:bg-red-700",
            "h-8 px-3 text-sm",
            "opacity-50 cursor-not-allowed",
        ];
        assert_eq!(tokens, expected.join(" "));
    }

    #[test]
    fn test_heading_without_level_uses_default_size() {
        let registry = Arc::new(NodeTypeRegistry::builtin());
        let mut tree = UiTree::new(registry.clone());
        let id = tree.insert(None, NodeType::Heading).unwrap();
        tree.update_props(id.as_str(), Default::default()).unwrap();

        let descriptor = registry.lookup(NodeType::Heading).unwrap();
        let tokens = class_tokens(tree.find(id.as_str()).unwrap(), descriptor, "font-bold");
        assert_eq!(tokens, "font-bold text-3xl");
    }

    #[test]
    fn test_extra_class_name_is_appended() {
        let registry = Arc::new(NodeTypeRegistry::builtin());
        let mut tree = UiTree::new(registry.clone());
        let id = tree.insert(None, NodeType::Card).unwrap();
        tree.set_prop(id.as_str(), "className", PropValue::text(" mt-8  mx-auto ")).unwrap();

        let descriptor = registry.lookup(NodeType::Card).unwrap();
        let tokens = class_tokens(tree.find(id.as_str()).unwrap(), descriptor, "p-6");
        assert_eq!(tokens, "p-6 mt-8 mx-auto");
    }
}
