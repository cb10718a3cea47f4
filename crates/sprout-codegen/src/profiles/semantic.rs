//! `semantic`: plain markup, no styling at all.

use sprout_core::{profile_ids::SEMANTIC, NodeType};

use super::RenderProfile;
use crate::emit::{element_tag, semantic_attrs, EmitContext, Emission};
use crate::syntax::Syntax;

pub fn profile() -> RenderProfile {
    RenderProfile::new(SEMANTIC, Syntax::Html).with_emitters(&NodeType::ALL, emit)
}

fn emit(ctx: &EmitContext<'_>) -> Emission {
    Emission::new(element_tag(ctx.node, ctx.descriptor)).with_attrs(semantic_attrs(ctx.node))
}
