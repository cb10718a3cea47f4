//! `inline-style`: HTML with a `style` attribute per element.

use sprout_core::{profile_ids::INLINE_STYLE, NodeType, RenderStrategy};

use super::RenderProfile;
use crate::emit::{element_tag, semantic_attrs, Attr, EmitContext, Emission};
use crate::syntax::Syntax;

pub fn profile() -> RenderProfile {
    // Icons have no inline rendering; they go through the fallback.
    let covered: Vec<NodeType> = NodeType::ALL
        .into_iter()
        .filter(|ty| *ty != NodeType::Icon)
        .collect();
    RenderProfile::new(INLINE_STYLE, Syntax::Html).with_emitters(&covered, emit)
}

fn emit(ctx: &EmitContext<'_>) -> Emission {
    let mut declarations = match ctx.strategy {
        RenderStrategy::Declarations(declarations) => declarations.clone(),
        _ => Vec::new(),
    };
    derived_declarations(ctx, &mut declarations);

    let mut attrs = Vec::new();
    if !declarations.is_empty() {
        attrs.push(Attr::text("style", style_value(&declarations)));
    }
    attrs.extend(semantic_attrs(ctx.node));

    Emission::new(element_tag(ctx.node, ctx.descriptor)).with_attrs(attrs)
}

fn style_value(declarations: &[(String, String)]) -> String {
    declarations
        .iter()
        .map(|(property, value)| format!("{}: {}", property, value))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Set a declaration, replacing an earlier one for the same property in place.
fn set_decl(declarations: &mut Vec<(String, String)>, property: &str, value: impl Into<String>) {
    let value = value.into();
    match declarations.iter_mut().find(|(p, _)| p == property) {
        Some(existing) => existing.1 = value,
        None => declarations.push((property.to_string(), value)),
    }
}

fn derived_declarations(ctx: &EmitContext<'_>, declarations: &mut Vec<(String, String)>) {
    match ctx.node.node_type() {
        NodeType::Heading => {
            if let Some(level) = ctx.number_prop("level") {
                set_decl(declarations, "font-size", heading_size(level));
            }
        }
        NodeType::Grid => {
            if let Some(columns) = ctx.number_prop("columns") {
                let columns = (columns as i64).max(1);
                set_decl(
                    declarations,
                    "grid-template-columns",
                    format!("repeat({}, minmax(0, 1fr))", columns),
                );
            }
        }
        NodeType::Button => {
            let (background, color, border) = match ctx.text_prop("variant").unwrap_or("primary") {
                "secondary" => ("#e5e7eb", "#111827", None),
                "outline" => ("transparent", "#111827", Some("1px solid #d1d5db")),
                "ghost" => ("transparent", "#111827", None),
                "destructive" => ("#dc2626", "#ffffff", None),
                _ => ("#2563eb", "#ffffff", None),
            };
            set_decl(declarations, "background", background);
            set_decl(declarations, "color", color);
            if let Some(border) = border {
                set_decl(declarations, "border", border);
            }
            match ctx.text_prop("size") {
                Some("sm") => {
                    set_decl(declarations, "padding", "4px 12px");
                    set_decl(declarations, "font-size", "0.875rem");
                }
                Some("lg") => {
                    set_decl(declarations, "padding", "12px 24px");
                    set_decl(declarations, "font-size", "1.125rem");
                }
                _ => {}
            }
            if ctx.bool_prop("disabled") {
                set_decl(declarations, "opacity", "0.5");
                set_decl(declarations, "cursor", "not-allowed");
            }
        }
        NodeType::Badge => {
            let (background, color) = match ctx.text_prop("variant").unwrap_or("default") {
                "secondary" => ("#f3f4f6", "#111827"),
                "outline" => ("transparent", "#111827"),
                "success" => ("#dcfce7", "#166534"),
                "warning" => ("#fef9c3", "#854d0e"),
                "destructive" => ("#fee2e2", "#991b1b"),
                _ => ("#111827", "#ffffff"),
            };
            set_decl(declarations, "background", background);
            set_decl(declarations, "color", color);
        }
        NodeType::Alert => {
            let (border, background) = match ctx.text_prop("variant").unwrap_or("info") {
                "success" => ("#bbf7d0", "#f0fdf4"),
                "warning" => ("#fde68a", "#fffbeb"),
                "error" => ("#fecaca", "#fef2f2"),
                _ => ("#bfdbfe", "#eff6ff"),
            };
            set_decl(declarations, "border", format!("1px solid {}", border));
            set_decl(declarations, "background", background);
        }
        _ => {}
    }

    // Free-form overrides any type may carry.
    if let Some(color) = ctx.text_prop("color") {
        set_decl(declarations, "color", color);
    }
    if let Some(background) = ctx.text_prop("background") {
        set_decl(declarations, "background", background);
    }
    if let Some(align) = ctx.text_prop("align") {
        set_decl(declarations, "text-align", align);
    }
    for dimension in ["width", "height"] {
        if let Some(value) = ctx.node.prop(dimension) {
            let value = match value.as_number() {
                Some(px) => format!("{}px", sprout_core::format_number(px)),
                None => value.to_string(),
            };
            set_decl(declarations, dimension, value);
        }
    }
}

fn heading_size(level: f64) -> &'static str {
    match (level as i64).clamp(1, 6) {
        1 => "2.5rem",
        2 => "2rem",
        3 => "1.5rem",
        4 => "1.25rem",
        5 => "1.125rem",
        _ => "1rem",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_decl_replaces_in_place() {
        let mut declarations = vec![
            ("padding".to_string(), "8px".to_string()),
            ("color".to_string(), "red".to_string()),
        ];
        set_decl(&mut declarations, "padding", "4px");
        set_decl(&mut declarations, "margin", "0");
        assert_eq!(style_value(&declarations), "padding: 4px; color: red; margin: 0");
    }

    #[test]
    fn test_heading_size_clamps() {
        assert_eq!(heading_size(1.0), "2.5rem");
        assert_eq!(heading_size(0.0), "2.5rem");
        assert_eq!(heading_size(12.0), "1rem");
    }
}
