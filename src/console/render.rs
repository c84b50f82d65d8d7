//! Text rendering of the board.

use tictactoe_core::{Board, Cell, Mark};

const RULE: &str = "-------------";

/// Renders the board as a boxed grid, one line per row:
///
/// ```text
/// -------------
/// | X | O |   |
/// -------------
/// |   | X |   |
/// -------------
/// |   |   | O |
/// -------------
/// ```
pub fn render_board(board: &Board) -> String {
    let mut result = String::with_capacity(7 * (RULE.len() + 1));
    result.push_str(RULE);
    result.push('\n');

    for row in board.cells().chunks(3) {
        result.push('|');
        for cell in row {
            let symbol = match cell {
                Cell::Empty => ' ',
                Cell::Occupied(Mark::X) => 'X',
                Cell::Occupied(Mark::O) => 'O',
            };
            result.push(' ');
            result.push(symbol);
            result.push_str(" |");
        }
        result.push('\n');
        result.push_str(RULE);
        result.push('\n');
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_board() {
        let expected = "\
-------------
|   |   |   |
-------------
|   |   |   |
-------------
|   |   |   |
-------------
";
        assert_eq!(render_board(&Board::new()), expected);
    }

    #[test]
    fn test_render_marks() {
        let board: Board = "XO./.X./..O".parse().unwrap();
        let expected = "\
-------------
| X | O |   |
-------------
|   | X |   |
-------------
|   |   | O |
-------------
";
        assert_eq!(render_board(&board), expected);
    }
}
