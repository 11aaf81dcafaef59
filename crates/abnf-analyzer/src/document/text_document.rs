use tower_lsp::lsp_types::{TextDocumentContentChangeEvent, Url};

use crate::ide::{IdePosition, IdeRange, lsp::lsp_range_to_ide};
use crate::symbols::is_rule_name_char;
use crate::text_pos::LineIndex;

// ── Document ────────────────────────────────────────────────────────────────

/// Snapshot of a single open ABNF document.
#[derive(Debug, Clone)]
pub struct Document {
    pub uri: Url,
    /// Full source text (always kept up-to-date).
    pub text: String,
    /// Document version as reported by the client.
    pub version: i32,
    /// Rebuilt on every mutation.
    line_index: LineIndex,
}

impl Document {
    pub fn new(
        uri: Url,
        text: String,
        version: i32,
    ) -> Self {
        let line_index = LineIndex::new(&text);
        Self {
            uri,
            text,
            version,
            line_index,
        }
    }

    // ── queries ─────────────────────────────────────────────────────────

    pub fn line_count(&self) -> usize {
        self.line_index.line_count()
    }

    /// Text of a 0-based line without its line terminator.
    pub fn line_text(
        &self,
        line: usize,
    ) -> Option<&str> {
        let (start, end) = self.line_index.line_span(&self.text, line)?;
        Some(self.text[start..end].trim_end_matches('\n').trim_end_matches('\r'))
    }

    pub fn offset_of(
        &self,
        position: IdePosition,
    ) -> Option<usize> {
        self.line_index.offset_of(&self.text, position)
    }

    pub fn position_of(
        &self,
        offset: usize,
    ) -> IdePosition {
        self.line_index.position_of(&self.text, offset)
    }

    /// Range spanning the whole text, from the origin to the last character.
    pub fn full_range(&self) -> IdeRange {
        self.line_index.range_of(&self.text, 0, self.text.len())
    }

    /// The rule-name-shaped word under `position`, with its range.
    ///
    /// A word is a maximal run of ASCII letters, digits and `-`. A cursor
    /// sitting right after the last character still selects the word.
    pub fn word_at(
        &self,
        position: IdePosition,
    ) -> Option<(String, IdeRange)> {
        let line_text = self.line_text(position.line as usize)?;
        let chars: Vec<char> = line_text.chars().collect();

        // Translate the UTF-16 character offset to a char index in the line.
        let mut char_idx = chars.len();
        let mut utf16_count = 0u32;
        for (i, ch) in chars.iter().enumerate() {
            if utf16_count >= position.character {
                char_idx = i;
                break;
            }
            utf16_count += ch.len_utf16() as u32;
        }

        let on_word = chars.get(char_idx).is_some_and(|&c| is_rule_name_char(c));
        if !on_word {
            if char_idx > 0 && is_rule_name_char(chars[char_idx - 1]) {
                char_idx -= 1;
            } else {
                return None;
            }
        }

        let mut start = char_idx;
        while start > 0 && is_rule_name_char(chars[start - 1]) {
            start -= 1;
        }

        let mut end = char_idx;
        while end + 1 < chars.len() && is_rule_name_char(chars[end + 1]) {
            end += 1;
        }

        let word: String = chars[start..=end].iter().collect();
        let start_utf16: u32 = chars[..start].iter().map(|c| c.len_utf16() as u32).sum();
        let end_utf16: u32 = chars[..=end].iter().map(|c| c.len_utf16() as u32).sum();

        let range = IdeRange::new(
            IdePosition::new(position.line, start_utf16),
            IdePosition::new(position.line, end_utf16),
        );
        Some((word, range))
    }

    // ── mutations ───────────────────────────────────────────────────────

    /// Replace the full content and record the new version.
    pub fn set_content(
        &mut self,
        text: String,
        version: i32,
    ) {
        self.text = text;
        self.version = version;
        self.line_index = LineIndex::new(&self.text);
    }

    /// Apply incremental or full-content changes in order, then record the
    /// new version. A change whose range cannot be resolved is ignored.
    pub fn apply_changes(
        &mut self,
        changes: Vec<TextDocumentContentChangeEvent>,
        version: i32,
    ) {
        for change in changes {
            match change.range {
                Some(range) => {
                    let range = lsp_range_to_ide(range);
                    if let (Some(start), Some(end)) = (self.offset_of(range.start), self.offset_of(range.end))
                        && start <= end
                    {
                        self.text.replace_range(start..end, &change.text);
                    }
                },
                None => self.text = change.text,
            }
            self.line_index = LineIndex::new(&self.text);
        }
        self.version = version;
    }
}

#[cfg(test)]
#[path = "../../tests/src/document/text_document_tests.rs"]
mod tests;
