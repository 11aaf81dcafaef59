use tower_lsp::lsp_types::TextEdit;

use crate::{config::FormattingSettings, document::Document, formatting::format_text, ide::lsp::ide_range_to_lsp};

/// One whole-document replacement, or `None` when formatting is disabled or
/// the text is already canonical.
pub(crate) fn format_document(
    document: &Document,
    formatting_settings: &FormattingSettings,
) -> Option<TextEdit> {
    if !formatting_settings.enable {
        return None;
    }

    let formatted = format_text(&document.text)?;
    Some(TextEdit {
        range: ide_range_to_lsp(document.full_range()),
        new_text: formatted,
    })
}

#[cfg(test)]
#[path = "../../tests/src/server/formatting_tests.rs"]
mod tests;
