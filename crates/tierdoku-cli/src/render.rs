//! Console rendering of boards.

use std::fmt::Write as _;

use tierdoku_core::{Board, Position};

/// Renders a board as a bordered grid with a light checkerboard pattern
/// marking the 3×3 boxes.
#[must_use]
pub fn grid(board: &Board) -> String {
    const RULE: &str = "-------------------------------------";
    let mut out = String::new();
    out.push_str(RULE);
    out.push('\n');
    for row in 0..9 {
        for col in 0..9 {
            let cell = match board.get(Position::new(row, col)) {
                Some(digit) => digit.to_char(),
                None => ' ',
            };
            // Alternate box shading for readability.
            let band = |i: u8| (3..6).contains(&i);
            if band(row) == band(col) {
                let _ = write!(out, "|-{cell}-");
            } else {
                let _ = write!(out, "| {cell} ");
            }
        }
        out.push_str("|\n");
        out.push_str(RULE);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_shape() {
        let board: Board =
            "534678912672195348198342567859761423426853791713924856961537284287419635345286179"
                .parse()
                .unwrap();
        let rendered = grid(&board);
        let lines: Vec<&str> = rendered.lines().collect();
        // 9 cell rows interleaved with 10 rules.
        assert_eq!(lines.len(), 19);
        assert!(lines.iter().all(|line| line.len() == 37));
        // Corner box cells are shaded, center-band cells in the same row
        // are not.
        assert!(lines[1].starts_with("|-5-|-3-|-4-| 6 "));
    }

    #[test]
    fn test_empty_cells_render_blank() {
        let rendered = grid(&Board::EMPTY);
        assert!(rendered.contains("|- -"));
        assert!(!rendered.chars().any(|c| c.is_ascii_digit()));
    }
}
