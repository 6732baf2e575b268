//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use tracing::instrument;

/// The eight winning lines: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` for the first line in [`LINES`] holding three of
/// that player's marks, `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.square(a);
        if sq != Square::Empty && sq == board.square(b) && sq == board.square(c) {
            sq.player()
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(player: Player, positions: &[Position]) -> Board {
        positions
            .iter()
            .fold(Board::new(), |board, &pos| board.with_mark(pos, player))
    }

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_wins_for_both_players() {
        for line in LINES {
            for player in [Player::X, Player::O] {
                let board = board_with(player, &line);
                assert_eq!(check_winner(&board), Some(player), "line {:?}", line);
            }
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(Player::X, &[Position::TopLeft, Position::TopCenter])
            .with_mark(Position::TopRight, Player::O);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(Player::X, &[Position::TopLeft, Position::Center]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_first_listed_line_wins() {
        // Two complete rows cannot arise in play; the top row is listed first.
        let board = board_with(
            Player::O,
            &[Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
        );
        let board = [Position::TopLeft, Position::TopCenter, Position::TopRight]
            .iter()
            .fold(board, |b, &p| b.with_mark(p, Player::X));
        assert_eq!(check_winner(&board), Some(Player::X));
    }
}
