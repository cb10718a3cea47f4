//! `component-call`: JSX against a component library.
//!
//! Types with a library component render as that component and contribute
//! an import. Layout types render as intrinsic elements styled with the
//! type's utility classes.

use sprout_core::{
    profile_ids::{COMPONENT_CALL, UTILITY_CLASS},
    NodeType, RenderStrategy,
};

use super::{class_tokens, RenderProfile};
use crate::emit::{element_tag, semantic_attrs, Attr, EmitContext, Emission, Imports};
use crate::syntax::{js_string_literal, Syntax};

/// Types with no component-call rendering.
const UNSUPPORTED: [NodeType; 8] = [
    NodeType::Select,
    NodeType::Slider,
    NodeType::Table,
    NodeType::List,
    NodeType::Video,
    NodeType::Code,
    NodeType::Blockquote,
    NodeType::Icon,
];

pub fn profile() -> RenderProfile {
    let covered: Vec<NodeType> = NodeType::ALL
        .into_iter()
        .filter(|ty| !UNSUPPORTED.contains(ty))
        .collect();
    RenderProfile::new(COMPONENT_CALL, Syntax::Jsx)
        .with_emitters(&covered, emit)
        .with_preamble(preamble)
}

/// One import line per module, names sorted and de-duplicated.
fn preamble(imports: &Imports) -> Vec<String> {
    imports
        .iter()
        .map(|(module, names)| {
            let names: Vec<&str> = names.iter().map(String::as_str).collect();
            format!("import {{ {} }} from {};", names.join(", "), js_string_literal(module))
        })
        .collect()
}

fn emit(ctx: &EmitContext<'_>) -> Emission {
    match ctx.strategy {
        RenderStrategy::Component {
            name,
            module: Some(module),
        } => Emission::new(name.as_str())
            .with_attrs(component_attrs(ctx))
            .with_import(name, module),
        RenderStrategy::Component { module: None, .. } => intrinsic(ctx),
        _ => Emission::new(ctx.descriptor.tag()),
    }
}

fn intrinsic(ctx: &EmitContext<'_>) -> Emission {
    let base = match ctx.descriptor.strategy(UTILITY_CLASS) {
        Some(RenderStrategy::Classes(tokens)) => tokens.as_str(),
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

/// Props of a library component, in the library's vocabulary.
fn component_attrs(ctx: &EmitContext<'_>) -> Vec<Attr> {
    let mut attrs = Vec::new();
    let text = |key: &str, attr: &str, attrs: &mut Vec<Attr>| {
        if let Some(value) = ctx.text_prop(key) {
            attrs.push(Attr::text(attr, value));
        }
    };

    match ctx.node.node_type() {
        NodeType::Button => {
            let variant = match ctx.text_prop("variant") {
                Some("primary") | None => "default",
                Some(other) => other,
            };
            let size = match ctx.text_prop("size") {
                Some("md") | None => "default",
                Some(other) => other,
            };
            attrs.push(Attr::text("variant", variant));
            attrs.push(Attr::text("size", size));
        }
        NodeType::Badge => text("variant", "variant", &mut attrs),
        NodeType::Alert => {
            let variant = match ctx.text_prop("variant") {
                Some("error") => "destructive",
                _ => "default",
            };
            attrs.push(Attr::text("variant", variant));
        }
        NodeType::Input => {
            text("type", "type", &mut attrs);
            text("placeholder", "placeholder", &mut attrs);
        }
        NodeType::Textarea => {
            text("placeholder", "placeholder", &mut attrs);
            if let Some(rows) = ctx.number_prop("rows") {
                attrs.push(Attr::number("rows", rows));
            }
        }
        NodeType::Checkbox | NodeType::Switch | NodeType::Radio => {
            if ctx.node.node_type() == NodeType::Radio {
                text("text", "value", &mut attrs);
            }
            if ctx.bool_prop("checked") {
                attrs.push(Attr::bool("defaultChecked", true));
            }
            text("text", "aria-label", &mut attrs);
        }
        NodeType::Avatar => {
            text("src", "src", &mut attrs);
            text("alt", "alt", &mut attrs);
        }
        NodeType::Progress => {
            if let Some(value) = ctx.number_prop("value") {
                attrs.push(Attr::number("value", value));
            }
        }
        NodeType::Label => text("for", "for", &mut attrs),
        NodeType::Modal => {
            if ctx.bool_prop("open") {
                attrs.push(Attr::bool("open", true));
            }
        }
        NodeType::Accordion => {
            attrs.push(Attr::text("type", "single"));
            attrs.push(Attr::bool("collapsible", true));
        }
        _ => {}
    }

    if ctx.bool_prop("disabled") {
        attrs.push(Attr::bool("disabled", true));
    }
    text("className", "class", &mut attrs);
    attrs
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_preamble_groups_by_module() {
        let mut imports = Imports::new();
        imports
            .entry("@/components/ui/card".to_string())
            .or_insert_with(BTreeSet::new)
            .extend(["CardHeader".to_string(), "Card".to_string()]);
        imports
            .entry("@/components/ui/button".to_string())
            .or_default()
            .insert("Button".to_string());

        assert_eq!(
            preamble(&imports),
            vec![
                r#"import { Button } from "@/components/ui/button";"#.to_string(),
                r#"import { Card, CardHeader } from "@/components/ui/card";"#.to_string(),
            ]
        );
    }

    #[test]
    fn test_preamble_empty_without_imports() {
        assert!(preamble(&Imports::new()).is_empty());
    }
}
