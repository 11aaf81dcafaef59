use tower_lsp::lsp_types::{Hover, HoverContents, MarkupContent, MarkupKind};

use crate::i18n::Messages;
use crate::ide::{IdeRange, lsp::ide_range_to_lsp};

use super::HoverInfo;

/// Render hover content as Markdown with the catalog's labels.
pub fn render_markdown(
    info: &HoverInfo,
    messages: &Messages,
) -> String {
    let mut md = format!("**{}: {}**\n\n{}", info.title, info.name, info.body);

    if let Some(definition) = &info.definition {
        md.push_str(&format!("\n\n**{}**: `{definition}`", messages.hover.definition_label));
    }
    if let Some(source) = &info.source {
        md.push_str(&format!("\n\n**{}**: {source}", messages.hover.source_label));
    }

    md
}

pub fn to_lsp_hover(
    info: &HoverInfo,
    messages: &Messages,
    range: Option<IdeRange>,
) -> Hover {
    Hover {
        contents: HoverContents::Markup(MarkupContent {
            kind: MarkupKind::Markdown,
            value: render_markdown(info, messages),
        }),
        range: range.map(ide_range_to_lsp),
    }
}

#[cfg(test)]
#[path = "../../tests/src/hover/markdown_tests.rs"]
mod tests;
