use crate::ide::navigation::{IdePosition, IdeRange};

/// Maps between byte offsets into a text snapshot and UTF-16 line/character
/// positions (the coordinate space LSP clients use).
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Byte offset of the start of each line.
    line_starts: Vec<usize>,
}

impl LineIndex {
    pub fn new(text: &str) -> Self {
        let mut line_starts = vec![0usize];
        for (i, byte) in text.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(i + 1);
            }
        }
        Self {
            line_starts,
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Byte range of a 0-based line, including its trailing newline if any.
    pub fn line_span(
        &self,
        text: &str,
        line: usize,
    ) -> Option<(usize, usize)> {
        let start = *self.line_starts.get(line)?;
        let end = self.line_starts.get(line + 1).copied().unwrap_or(text.len());
        Some((start, end))
    }

    /// Convert a byte offset to a position. Offsets past the end clamp to the end.
    pub fn position_of(
        &self,
        text: &str,
        offset: usize,
    ) -> IdePosition {
        let offset = floor_char_boundary(text, offset.min(text.len()));
        let line = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(ins) => ins.saturating_sub(1),
        };
        let line_start = self.line_starts[line];
        IdePosition::new(line as u32, utf16_len(&text[line_start..offset]))
    }

    /// Convert a position to a byte offset. Characters past the line end clamp
    /// to the line end; lines past the document end yield `None`.
    pub fn offset_of(
        &self,
        text: &str,
        position: IdePosition,
    ) -> Option<usize> {
        let (line_start, line_end) = self.line_span(text, position.line as usize)?;
        let line_text = &text[line_start..line_end];

        let mut utf16_offset = 0u32;
        let mut byte_offset = line_start;
        for ch in line_text.chars() {
            if utf16_offset >= position.character || ch == '\n' {
                break;
            }
            utf16_offset += ch.len_utf16() as u32;
            byte_offset += ch.len_utf8();
        }
        Some(byte_offset)
    }

    pub fn range_of(
        &self,
        text: &str,
        start: usize,
        end: usize,
    ) -> IdeRange {
        IdeRange::new(self.position_of(text, start), self.position_of(text, end))
    }

    /// Resolve a range back to the substring it covers.
    pub fn slice<'a>(
        &self,
        text: &'a str,
        range: IdeRange,
    ) -> Option<&'a str> {
        let start = self.offset_of(text, range.start)?;
        let end = self.offset_of(text, range.end)?;
        text.get(start..end)
    }
}

/// Number of UTF-16 code units in `s`.
pub fn utf16_len(s: &str) -> u32 {
    s.chars().map(|c| c.len_utf16() as u32).sum()
}

fn floor_char_boundary(
    text: &str,
    mut offset: usize,
) -> usize {
    while offset > 0 && !text.is_char_boundary(offset) {
        offset -= 1;
    }
    offset
}

#[cfg(test)]
#[path = "../tests/src/text_pos_tests.rs"]
mod tests;
