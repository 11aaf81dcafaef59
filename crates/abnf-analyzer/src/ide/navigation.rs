use tower_lsp::lsp_types::Url;

/// Zero-based line and UTF-16 character offset. Ordered by line, then character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct IdePosition {
    pub line: u32,
    pub character: u32,
}

impl IdePosition {
    pub const fn new(
        line: u32,
        character: u32,
    ) -> Self {
        Self {
            line,
            character,
        }
    }
}

/// Half-open range between two positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IdeRange {
    pub start: IdePosition,
    pub end: IdePosition,
}

impl IdeRange {
    pub const fn new(
        start: IdePosition,
        end: IdePosition,
    ) -> Self {
        Self {
            start,
            end,
        }
    }

    /// Touching ranges count as overlapping: `a.start <= b.end && a.end >= b.start`.
    pub fn touches(
        &self,
        other: &IdeRange,
    ) -> bool {
        self.start <= other.end && self.end >= other.start
    }
}

/// A range inside one document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct IdeLocation {
    pub uri: Url,
    pub range: IdeRange,
}

impl IdeLocation {
    pub fn new(
        uri: Url,
        range: IdeRange,
    ) -> Self {
        Self {
            uri,
            range,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    Single(IdeLocation),
    Multiple(Vec<IdeLocation>),
}

impl NavigationTarget {
    pub fn from_locations(locations: Vec<IdeLocation>) -> Option<Self> {
        match locations.len() {
            0 => None,
            1 => locations.into_iter().next().map(Self::Single),
            _ => Some(Self::Multiple(locations)),
        }
    }
}
