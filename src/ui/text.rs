//! Plain-text rendering for non-interactive front ends.

use crate::game::{Cell, GameEngine, GameStatus};

/// One line per row (`.` empty, `X` player 1, `O` player 2) followed by the
/// 1-based column numbers. Columns are two characters wide so boards with
/// ten or more columns stay aligned.
pub fn render_board(engine: &GameEngine) -> String {
    let mut out = String::new();
    for row in 0..engine.height() {
        let cells: Vec<String> = (0..engine.width())
            .map(|col| {
                let symbol = match engine.cell(row, col) {
                    Some(Cell::Occupied(player)) => player.symbol(),
                    _ => '.',
                };
                format!("{symbol:>2}")
            })
            .collect();
        push_line(&mut out, &cells);
    }
    let numbers: Vec<String> = (1..=engine.width()).map(|n| format!("{n:>2}")).collect();
    push_line(&mut out, &numbers);
    out
}

fn push_line(out: &mut String, cells: &[String]) {
    out.push_str(cells.join(" ").trim_start());
    out.push('\n');
}

pub fn status_line(engine: &GameEngine) -> String {
    match engine.status() {
        GameStatus::InProgress => format!("{} to move", engine.current_player()),
        GameStatus::Win(player) => format!("{player} wins!"),
        GameStatus::Tie => "Tie!".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_empty_board() {
        let engine = GameEngine::new(3, 2).unwrap();
        assert_eq!(render_board(&engine), ".  .  .\n.  .  .\n1  2  3\n");
    }

    #[test]
    fn test_render_pieces() {
        let mut engine = GameEngine::new(3, 2).unwrap();
        engine.drop_piece(0).unwrap();
        engine.drop_piece(0).unwrap();
        engine.drop_piece(2).unwrap();
        assert_eq!(render_board(&engine), "O  .  .\nX  .  X\n1  2  3\n");
    }

    #[test]
    fn test_wide_board_numbers_align() {
        let engine = GameEngine::new(11, 1).unwrap();
        let text = render_board(&engine);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0].len(), lines[1].len());
        assert!(lines[1].ends_with("10 11"));
    }

    #[test]
    fn test_status_line() {
        let mut engine = GameEngine::default();
        assert_eq!(status_line(&engine), "Player 1 to move");
        for col in [0, 1, 0, 1, 0, 1, 0] {
            engine.drop_piece(col).unwrap();
        }
        assert_eq!(status_line(&engine), "Player 1 wins!");
    }
}
