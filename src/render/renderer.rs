use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use crate::game::{Cell, Phase, Snapshot};
use crate::metrics::GameMetrics;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, snapshot: &Snapshot<'_>, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(snapshot, metrics);
        frame.render_widget(stats, chunks[0]);

        let body_area = chunks[1];
        match snapshot.phase {
            Phase::Playing => {
                let (width, height) = grid_frame_size(snapshot);
                if width > body_area.width || height > body_area.height {
                    frame.render_widget(self.render_too_small(width, height), body_area);
                } else {
                    let area = centered(body_area, width, height);
                    frame.render_widget(self.render_grid(snapshot), area);
                }
            }
            Phase::Start => {
                frame.render_widget(self.render_start_screen(), panel_area(body_area));
            }
            Phase::GameOver => {
                let panel = self.render_game_over(snapshot, metrics);
                frame.render_widget(panel, panel_area(body_area));
            }
        }

        let controls = self.render_controls(snapshot.phase);
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(&self, snapshot: &Snapshot<'_>) -> Paragraph<'_> {
        let width = snapshot.grid.width() as usize;
        let mut rows = vec![vec![CellKind::Empty; width]; snapshot.grid.height() as usize];

        let mut mark = |cell: Cell, kind: CellKind| {
            if let Some(slot) = rows
                .get_mut(cell.y as usize)
                .and_then(|row| row.get_mut(cell.x as usize))
            {
                *slot = kind;
            }
        };
        mark(snapshot.food, CellKind::Food);
        // Tail first so the head wins if the two ever share a cell
        for (i, &cell) in snapshot.snake.iter().enumerate().rev() {
            mark(cell, if i == 0 { CellKind::Head } else { CellKind::Body });
        }

        let lines: Vec<Line> = rows
            .into_iter()
            .map(|row| Line::from(row.into_iter().map(CellKind::span).collect::<Vec<_>>()))
            .collect();

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White))
                .title(" Snake "),
        )
    }

    fn render_too_small(&self, width: u16, height: u16) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Terminal too small",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )),
            Line::from(format!("The playfield needs {width}x{height} cells")),
            Line::from("Enlarge the window or pick a smaller --width/--height"),
        ];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
    }

    fn render_stats(&self, snapshot: &Snapshot<'_>, metrics: &GameMetrics) -> Paragraph<'_> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default().fg(Color::White);

        let text = vec![Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(snapshot.score.to_string(), value.add_modifier(Modifier::BOLD)),
            Span::raw("    "),
            Span::styled("High Score: ", label),
            Span::styled(snapshot.high_score.to_string(), value),
            Span::raw("    "),
            Span::styled("Length: ", label),
            Span::styled(snapshot.snake.len().to_string(), value),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(metrics.format_time(), value),
            Span::raw("    "),
            Span::styled("Games: ", label),
            Span::styled(metrics.games_played.to_string(), value),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_start_screen(&self) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "SNAKE",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from("Use the arrow keys or WASD to move"),
            Line::from("The edges wrap around; only your own body is deadly"),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "SPACE",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to start", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        )
    }

    fn render_game_over(&self, snapshot: &Snapshot<'_>, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                "GAME OVER",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Final Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    snapshot.score.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled("High Score: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    snapshot.high_score.to_string(),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(vec![
                Span::styled("Survived: ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    format!("{} ({} moves)", metrics.format_time(), snapshot.ticks),
                    Style::default().fg(Color::White),
                ),
            ]),
            Line::from(""),
            Line::from(vec![
                Span::styled("Press ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "SPACE",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to play again or ", Style::default().fg(Color::Gray)),
                Span::styled(
                    "ESC",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" to quit", Style::default().fg(Color::Gray)),
            ]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn render_controls(&self, phase: Phase) -> Paragraph<'_> {
        let mut spans = vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
        ];
        if phase != Phase::Playing {
            spans.push(Span::styled("SPACE", Style::default().fg(Color::Green)));
            spans.push(Span::raw(" to play | "));
        }
        spans.push(Span::styled("ESC", Style::default().fg(Color::Red)));
        spans.push(Span::raw(" to quit"));

        Paragraph::new(vec![Line::from(spans)]).alignment(Alignment::Center)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellKind {
    Empty,
    Food,
    Body,
    Head,
}

impl CellKind {
    /// Two columns per cell keep the playfield roughly square
    fn span(self) -> Span<'static> {
        match self {
            CellKind::Head => Span::styled(
                "■ ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            CellKind::Body => Span::styled("□ ", Style::default().fg(Color::Green)),
            CellKind::Food => Span::styled(
                "O ",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
            CellKind::Empty => Span::styled(". ", Style::default().fg(Color::DarkGray)),
        }
    }
}

/// Terminal columns and rows taken by the bordered playfield
fn grid_frame_size(snapshot: &Snapshot<'_>) -> (u16, u16) {
    let width = (snapshot.grid.width() as u64 * 2 + 2).min(u16::MAX as u64) as u16;
    let height = (snapshot.grid.height() as u64 + 2).min(u16::MAX as u64) as u16;
    (width, height)
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Middle 80% of the width, for the text panels
fn panel_area(area: Rect) -> Rect {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(10),
            Constraint::Percentage(80),
            Constraint::Percentage(10),
        ])
        .split(area)[1]
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{GameConfig, GameSession, Intent};
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(session: &GameSession, metrics: &GameMetrics) -> String {
        draw_sized(session, metrics, 100, 24)
    }

    fn draw_sized(session: &GameSession, metrics: &GameMetrics, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let renderer = Renderer::new();
        terminal
            .draw(|frame| renderer.render(frame, &session.snapshot(), metrics))
            .unwrap();

        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn session() -> GameSession {
        GameSession::new(&GameConfig::small(), StdRng::seed_from_u64(5)).unwrap()
    }

    #[test]
    fn test_start_screen() {
        let screen = draw(&session(), &GameMetrics::new());
        assert!(screen.contains("SNAKE"));
        assert!(screen.contains("to start"));
    }

    #[test]
    fn test_playing_screen_shows_snake_and_food() {
        let mut session = session();
        session.handle_intent(Intent::Start).unwrap();

        let screen = draw(&session, &GameMetrics::new());
        assert!(screen.contains("Snake"));
        assert!(screen.contains('■'));
        assert!(screen.contains('O'));
        assert!(screen.contains("High Score: 0"));
    }

    #[test]
    fn test_playing_grid_has_exact_size() {
        let mut session = session();
        session.handle_intent(Intent::Start).unwrap();

        let screen = draw(&session, &GameMetrics::new());
        let empty = screen.matches('.').count();
        // 10x10 grid: one head and one food, the rest empty
        assert_eq!(empty, 98);
        assert_eq!(screen.matches('■').count(), 1);
    }

    #[test]
    fn test_small_terminal_reports_required_size() {
        let config = GameConfig::default();
        let mut session = GameSession::new(&config, StdRng::seed_from_u64(5)).unwrap();
        session.handle_intent(Intent::Start).unwrap();

        let screen = draw_sized(&session, &GameMetrics::new(), 80, 24);
        assert!(screen.contains("Terminal too small"));
        assert!(screen.contains("82x32"));
        assert!(!screen.contains('■'));
    }

    #[test]
    fn test_default_grid_fits_large_terminal() {
        let config = GameConfig::default();
        let mut session = GameSession::new(&config, StdRng::seed_from_u64(5)).unwrap();
        session.handle_intent(Intent::Start).unwrap();

        let screen = draw_sized(&session, &GameMetrics::new(), 120, 40);
        assert!(!screen.contains("Terminal too small"));
        assert!(screen.contains('■'));
    }
}
