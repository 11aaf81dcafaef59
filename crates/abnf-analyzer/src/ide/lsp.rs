use tower_lsp::lsp_types::{GotoDefinitionResponse, Location, Position, Range};

use crate::ide::navigation::{IdeLocation, IdePosition, IdeRange, NavigationTarget};

pub fn lsp_position_to_ide(position: Position) -> IdePosition {
    IdePosition::new(position.line, position.character)
}

pub fn ide_position_to_lsp(position: IdePosition) -> Position {
    Position::new(position.line, position.character)
}

pub fn lsp_range_to_ide(range: Range) -> IdeRange {
    IdeRange::new(lsp_position_to_ide(range.start), lsp_position_to_ide(range.end))
}

pub fn ide_range_to_lsp(range: IdeRange) -> Range {
    Range::new(ide_position_to_lsp(range.start), ide_position_to_lsp(range.end))
}

pub fn ide_location_to_lsp(location: IdeLocation) -> Location {
    Location {
        uri: location.uri,
        range: ide_range_to_lsp(location.range),
    }
}

pub fn navigation_target_to_lsp(target: NavigationTarget) -> GotoDefinitionResponse {
    match target {
        NavigationTarget::Single(location) => GotoDefinitionResponse::Scalar(ide_location_to_lsp(location)),
        NavigationTarget::Multiple(locations) => {
            GotoDefinitionResponse::Array(locations.into_iter().map(ide_location_to_lsp).collect())
        },
    }
}
