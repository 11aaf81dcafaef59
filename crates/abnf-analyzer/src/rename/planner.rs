use tower_lsp::lsp_types::TextEdit;

use crate::ide::{IdeRange, lsp::ide_range_to_lsp};
use crate::symbols::RuleReference;
use crate::text_pos::LineIndex;

/// One replacement, expressed against the pre-rename text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameEdit {
    pub range: IdeRange,
    pub new_text: String,
}

impl RenameEdit {
    pub fn to_lsp(&self) -> TextEdit {
        TextEdit {
            range: ide_range_to_lsp(self.range),
            new_text: self.new_text.clone(),
        }
    }
}

/// Turn the occurrences of a rule into non-overlapping replacements.
///
/// References are ordered by start position and accepted greedily: a
/// candidate that touches or overlaps an already accepted range is dropped.
/// Whether an accepted range is bracketed is decided by re-reading `text`,
/// not from the scan-time tag. The edits do not depend on each other and can
/// be applied in any order as one batch.
pub fn plan_edits(
    text: &str,
    references: &[RuleReference],
    new_name: &str,
) -> Vec<RenameEdit> {
    let index = LineIndex::new(text);

    let mut candidates: Vec<IdeRange> = references.iter().map(|reference| reference.location.range).collect();
    candidates.sort_by_key(|range| range.start);

    let mut accepted: Vec<IdeRange> = Vec::with_capacity(candidates.len());
    let mut edits = Vec::with_capacity(candidates.len());

    for range in candidates {
        if accepted.iter().any(|taken| range.touches(taken)) {
            continue;
        }

        let bracketed =
            index.slice(text, range).is_some_and(|current| current.starts_with('<') && current.ends_with('>'));
        let new_text = if bracketed {
            format!("<{new_name}>")
        } else {
            new_name.to_string()
        };

        accepted.push(range);
        edits.push(RenameEdit {
            range,
            new_text,
        });
    }

    edits
}

/// Apply `edits` to `text` as one batch. Ranges refer to the original text, so
/// the order of `edits` does not matter. Edits whose range cannot be resolved
/// are skipped.
pub fn apply_edits(
    text: &str,
    edits: &[RenameEdit],
) -> String {
    let index = LineIndex::new(text);
    let mut spans: Vec<(usize, usize, &str)> = edits
        .iter()
        .filter_map(|edit| {
            let start = index.offset_of(text, edit.range.start)?;
            let end = index.offset_of(text, edit.range.end)?;
            Some((start, end, edit.new_text.as_str()))
        })
        .collect();
    spans.sort_by_key(|&(start, _, _)| start);

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0usize;
    for (start, end, replacement) in spans {
        if start < cursor {
            continue;
        }
        out.push_str(&text[cursor..start]);
        out.push_str(replacement);
        cursor = end;
    }
    out.push_str(&text[cursor..]);
    out
}

#[cfg(test)]
#[path = "../../tests/src/rename/planner_tests.rs"]
mod tests;
