//! Code generator: walks a UI tree under one profile and writes source text.

use log::{debug, warn};
use sprout_core::{
    ContentShape, Node, NodeId, NodeTypeDescriptor, NodeTypeRegistry, PropValue, RenderError,
    UiTree,
};

use crate::emit::{generic_fallback, EmitContext, Emission, Imports};
use crate::profiles::{ProfileRegistry, RenderProfile};
use crate::syntax::{escape_text, format_attrs};

/// Indentation added per tree depth.
pub const INDENT: &str = "  ";

/// Renders trees against a node type registry and a profile registry.
///
/// Rendering never mutates the tree: the same tree and profile always
/// produce the same text.
pub struct CodeGenerator<'a> {
    types: &'a NodeTypeRegistry,
    profiles: &'a ProfileRegistry,
}

impl<'a> CodeGenerator<'a> {
    pub fn new(types: &'a NodeTypeRegistry, profiles: &'a ProfileRegistry) -> Self {
        Self { types, profiles }
    }

    /// Render every root of `tree` under `profile_id`.
    pub fn render(&self, tree: &UiTree, profile_id: &str) -> Result<String, RenderError> {
        let profile = self.profiles.get_profile(profile_id)?;
        let mut walker = Walker::new(self.types, profile);
        for root in tree.roots() {
            walker.walk(tree, root.as_str())?;
        }
        Ok(walker.finish())
    }

    /// Render a single node and its descendants, as if it were a root.
    pub fn render_subtree(
        &self,
        tree: &UiTree,
        id: &str,
        profile_id: &str,
    ) -> Result<String, RenderError> {
        let profile = self.profiles.get_profile(profile_id)?;
        if !tree.contains(id) {
            return Err(RenderError::NodeNotFound { id: id.to_string() });
        }
        let mut walker = Walker::new(self.types, profile);
        walker.walk(tree, id)?;
        Ok(walker.finish())
    }
}

/// Pending work in a render pass.
enum Step<'t> {
    Open(&'t str, usize),
    Close(String),
}

/// State for one render pass.
struct Walker<'a> {
    types: &'a NodeTypeRegistry,
    profile: &'a RenderProfile,
    lines: Vec<String>,
    imports: Imports,
}

impl<'a> Walker<'a> {
    fn new(types: &'a NodeTypeRegistry, profile: &'a RenderProfile) -> Self {
        Self {
            types,
            profile,
            lines: Vec::new(),
            imports: Imports::new(),
        }
    }

    fn finish(self) -> String {
        let body = self.lines.join("\n");
        let preamble = self.profile.preamble(&self.imports);
        if preamble.is_empty() {
            body
        } else if body.is_empty() {
            preamble.join("\n")
        } else {
            format!("{}\n\n{}", preamble.join("\n"), body)
        }
    }

    /// Resolve the emission for a node. The flag is set when the generic
    /// fallback was used.
    fn emit(&self, node: &Node, descriptor: &NodeTypeDescriptor) -> (Emission, bool) {
        let emitter = self.profile.emitter(node.node_type());
        let strategy = descriptor.strategy(self.profile.id());
        match (emitter, strategy) {
            (Some(emit), Some(strategy)) => {
                let emission = emit(&EmitContext {
                    node,
                    descriptor,
                    strategy,
                    syntax: self.profile.syntax(),
                });
                (emission, false)
            }
            _ => {
                debug!(
                    "No {} rendering for {}, using generic fallback",
                    self.profile.id(),
                    node.node_type()
                );
                (generic_fallback(node, descriptor), true)
            }
        }
    }

    fn text(&self, text: &str) -> String {
        escape_text(self.profile.syntax(), text)
    }

    /// Render the subtree rooted at `root`, depth first with an explicit stack.
    fn walk<'t>(&mut self, tree: &'t UiTree, root: &'t str) -> Result<(), RenderError> {
        let mut pending = vec![Step::Open(root, 0)];
        while let Some(step) = pending.pop() {
            match step {
                Step::Close(line) => self.lines.push(line),
                Step::Open(id, depth) => {
                    if let Some((children, close)) = self.open(tree, id, depth)? {
                        pending.push(Step::Close(close));
                        pending.extend(
                            children
                                .iter()
                                .rev()
                                .map(|child| Step::Open(child.as_str(), depth + 1)),
                        );
                    }
                }
            }
        }
        Ok(())
    }

    /// Write the lines of a node that precede its children.
    ///
    /// Returns the children to render and the closing line when the node
    /// stays open, or `None` when it was written on a single line.
    fn open<'t>(
        &mut self,
        tree: &'t UiTree,
        id: &str,
        depth: usize,
    ) -> Result<Option<(&'t [NodeId], String)>, RenderError> {
        let node = tree
            .find(id)
            .ok_or_else(|| RenderError::NodeNotFound { id: id.to_string() })?;
        let descriptor = self
            .types
            .lookup(node.node_type())
            .map_err(|_| RenderError::UnknownType {
                name: node.node_type().as_str().to_string(),
            })?;

        let (mut emission, fallback) = self.emit(node, descriptor);
        if let Some(import) = emission.import.take() {
            self.imports.entry(import.module).or_default().insert(import.name);
        }

        let indent = INDENT.repeat(depth);
        let inner = INDENT.repeat(depth + 1);
        let attrs = format_attrs(self.profile.syntax(), &emission.attrs);
        let tag = emission.tag;
        let open = format!("{}<{}{}>", indent, tag, attrs);
        let close = format!("{}</{}>", indent, tag);
        let text = node.text().map(|t| self.text(t)).unwrap_or_default();

        match descriptor.shape() {
            ContentShape::SelfClosing => {
                if node.has_children() {
                    warn!(
                        "{} ({}) renders self-closing; dropping {} children",
                        node.id(),
                        node.node_type(),
                        node.children().len()
                    );
                }
                self.lines.push(format!("{}<{}{} />", indent, tag, attrs));
                return Ok(None);
            }
            ContentShape::Items { prop, item_tag } => {
                let items = node.prop(prop).and_then(PropValue::as_list).unwrap_or_default();
                let lead = if fallback { text } else { String::new() };
                if items.is_empty() && lead.is_empty() && !node.has_children() {
                    self.lines.push(format!("{}{}", open, close.trim_start()));
                    return Ok(None);
                }
                self.lines.push(open);
                if !lead.is_empty() {
                    self.lines.push(format!("{}{}", inner, lead));
                }
                for item in items {
                    let line =
                        format!("{}<{}>{}</{}>", inner, item_tag, self.text(item), item_tag);
                    self.lines.push(line);
                }
            }
            ContentShape::Table { prop } => {
                let (headers, rows) = node
                    .prop(prop)
                    .and_then(PropValue::as_table)
                    .unwrap_or_default();
                let lead = if fallback { text } else { String::new() };
                let empty = headers.is_empty() && rows.is_empty();
                if empty && lead.is_empty() && !node.has_children() {
                    self.lines.push(format!("{}{}", open, close.trim_start()));
                    return Ok(None);
                }
                self.lines.push(open);
                if !lead.is_empty() {
                    self.lines.push(format!("{}{}", inner, lead));
                }
                let row_indent = INDENT.repeat(depth + 2);
                if !headers.is_empty() {
                    let header = format!("{}{}", row_indent, self.row("th", headers));
                    self.lines.push(format!("{}<thead>", inner));
                    self.lines.push(header);
                    self.lines.push(format!("{}</thead>", inner));
                }
                if !rows.is_empty() {
                    self.lines.push(format!("{}<tbody>", inner));
                    for row in rows {
                        let line = format!("{}{}", row_indent, self.row("td", row));
                        self.lines.push(line);
                    }
                    self.lines.push(format!("{}</tbody>", inner));
                }
            }
            ContentShape::Wrapper => {
                if !node.has_children() {
                    self.lines.push(format!("{}{}{}", open, text, close.trim_start()));
                    return Ok(None);
                }
                self.lines.push(open);
                if !text.is_empty() {
                    self.lines.push(format!("{}{}", inner, text));
                }
            }
        }

        Ok(Some((node.children(), close)))
    }

    fn row(&self, cell_tag: &str, cells: &[String]) -> String {
        let cells: String = cells
            .iter()
            .map(|cell| format!("<{}>{}</{}>", cell_tag, self.text(cell), cell_tag))
            .collect();
        format!("<tr>{}</tr>", cells)
    }
}
