//! Textual rendering of placement sequences for terminal inspection.

use forage_core::{BoardDimensions, GridCoord, Placement, TileKind};

/// Renders placements into a character grid covering the padded rectangle.
///
/// Placements are applied in emission order, so later layers overwrite
/// earlier ones the same way a scene-graph host would stack them. Rows are
/// printed with the highest y coordinate first.
pub(crate) fn render_board(dimensions: BoardDimensions, placements: &[Placement]) -> String {
    let width = dimensions.columns() as usize + 2;
    let height = dimensions.rows() as usize + 2;
    let mut grid = vec![vec![' '; width]; height];

    for placement in placements {
        if let Some((column, row)) = cell_index(dimensions, placement.cell()) {
            grid[row][column] = glyph(placement.kind());
        }
    }

    let mut lines = Vec::with_capacity(height);
    for row in grid.iter().rev() {
        lines.push(row.iter().collect::<String>());
    }
    lines.join("\n")
}

/// Maps a cell to its grid slot, shifting the padded ring onto index zero.
fn cell_index(dimensions: BoardDimensions, cell: GridCoord) -> Option<(usize, usize)> {
    let column = usize::try_from(cell.x() + 1).ok()?;
    let row = usize::try_from(cell.y() + 1).ok()?;
    let width = dimensions.columns() as usize + 2;
    let height = dimensions.rows() as usize + 2;
    if column >= width || row >= height {
        return None;
    }
    Some((column, row))
}

const fn glyph(kind: TileKind) -> char {
    match kind {
        TileKind::Floor => '.',
        TileKind::OuterWall => '#',
        TileKind::Wall => 'o',
        TileKind::Food => '*',
        TileKind::Enemy => 'e',
        TileKind::Exit => 'X',
    }
}

#[cfg(test)]
mod tests {
    use super::render_board;
    use forage_core::{BoardDimensions, GridCoord, Placement, TileKind};

    #[test]
    fn later_placements_overwrite_earlier_layers() {
        let dimensions = BoardDimensions::new(3, 3);
        let placements = vec![
            Placement::new(GridCoord::new(2, 2), TileKind::Floor, 0),
            Placement::new(GridCoord::new(2, 2), TileKind::Food, 0),
            Placement::new(GridCoord::new(2, 2), TileKind::Exit, 0),
        ];

        let rendered = render_board(dimensions, &placements);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 5);
        // y = 2 is the second line from the top; x = 2 is the fourth column.
        assert_eq!(lines[1].chars().nth(3), Some('X'));
    }

    #[test]
    fn rendered_grid_spans_padded_rectangle() {
        let dimensions = BoardDimensions::new(4, 3);
        let placements = vec![
            Placement::new(GridCoord::new(-1, -1), TileKind::OuterWall, 0),
            Placement::new(GridCoord::new(4, 3), TileKind::OuterWall, 0),
        ];

        let rendered = render_board(dimensions, &placements);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|line| line.chars().count() == 6));
        // Bottom-left and top-right padded corners carry the wall glyph.
        assert_eq!(lines[4].chars().next(), Some('#'));
        assert_eq!(lines[0].chars().last(), Some('#'));
    }

    #[test]
    fn out_of_rectangle_placements_are_ignored() {
        let dimensions = BoardDimensions::new(3, 3);
        let placements = vec![Placement::new(GridCoord::new(9, 9), TileKind::Wall, 0)];

        let rendered = render_board(dimensions, &placements);
        assert!(rendered.chars().all(|glyph| glyph == ' ' || glyph == '\n'));
    }
}
