use crate::game::{Cell, GameEngine, Player};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

pub fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

/// Board lines: column numbers, framed grid and the selector arrow.
/// Pieces on the winning line are drawn reversed.
pub fn board_lines(engine: &GameEngine, selected_column: usize) -> Vec<Line<'static>> {
    let width = engine.width();
    let winning = engine.winning_line();
    let mut lines = Vec::with_capacity(engine.height() + 4);

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..width {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    let rule = "═".repeat(3 * width + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..engine.height() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..width {
            let span = match engine.cell(row, col) {
                Some(Cell::Occupied(player)) => {
                    let mut style = Style::default().fg(player_color(player));
                    if winning.is_some_and(|line| line.contains(&(row, col))) {
                        style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
                    }
                    Span::styled(" ● ", style)
                }
                _ => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
            };
            row_spans.push(span);
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..width {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_frame_matches_board_width() {
        let engine = GameEngine::new(4, 3).unwrap();
        let lines = board_lines(&engine, 0);

        // numbers, top border, 3 rows, bottom border, indicator
        assert_eq!(lines.len(), 7);
        assert_eq!(line_text(&lines[1]), format!("  ╔{}╗", "═".repeat(13)));
        assert_eq!(line_text(&lines[2]), "  ║ .  .  .  .  ║");
    }

    #[test]
    fn test_winning_pieces_highlighted() {
        let mut engine = GameEngine::default();
        for col in [0, 0, 1, 1, 2, 2, 3] {
            engine.drop_piece(col).unwrap();
        }
        let lines = board_lines(&engine, 3);
        let bottom = &lines[2 + 5];

        // spans[0] is the left frame
        let reversed = |i: usize| {
            bottom.spans[i + 1]
                .style
                .add_modifier
                .contains(Modifier::REVERSED)
        };
        assert!((0..4).all(reversed));
        assert!(!reversed(4));
    }
}
