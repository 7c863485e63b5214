//! Top-level UI layout — seek bar panel with hints and a status bar.

pub mod status_bar;
pub mod widgets;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::DemoState;
use crate::theme;
use widgets::slider::SeekBarWidget;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &DemoState) {
    // Split: main area + 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(f.area());

    draw_panel(f, chunks[0], app);
    status_bar::render(f, chunks[1], app);
}

fn draw_panel(f: &mut Frame, area: Rect, app: &DemoState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(true))
        .title(" Interest rate ")
        .title_style(theme::panel_title(true))
        .style(Style::default().bg(app.theme.background));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(4), Constraint::Min(0)])
        .split(inner);

    let hints = Line::from(vec![Span::styled(
        "[h/l]step [PgUp/PgDn]x10 [Home/End]ends [r]reset [Tab]focus [q]quit",
        theme::muted(),
    )]);
    f.render_widget(Paragraph::new(hints), rows[0]);

    let view = app.view();
    let slider = SeekBarWidget::new(&view)
        .theme(app.theme)
        .focused(app.focused)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::panel_border(app.focused)),
        );
    f.render_widget(slider, centered_rect(80, rows[1]));
}

/// Horizontally center a rect taking `percent_x` of the width.
pub fn centered_rect(percent_x: u16, area: Rect) -> Rect {
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(area)[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use crate::app::default_attributes;

    #[test]
    fn draws_labels_on_screen() {
        let app = DemoState::new(&default_attributes());
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();

        let buf = terminal.backend().buffer();
        let screen: String = (0..buf.area.height)
            .flat_map(|y| (0..buf.area.width).map(move |x| (x, y)))
            .map(|(x, y)| buf[(x, y)].symbol().to_string())
            .collect();
        assert!(screen.contains("10.25%"));
        assert!(screen.contains("(prime rate)"));
        assert!(screen.contains("Interest rate"));
    }

    #[test]
    fn panel_uses_theme_background() {
        let app = DemoState::new(&default_attributes());
        let mut terminal = Terminal::new(TestBackend::new(60, 10)).unwrap();
        terminal.draw(|f| draw(f, &app)).unwrap();

        let buf = terminal.backend().buffer();
        assert_eq!(buf[(1, 1)].bg, app.theme.background);
    }

    #[test]
    fn centered_rect_is_narrower() {
        let area = Rect::new(0, 0, 100, 4);
        let r = centered_rect(80, area);
        assert_eq!(r.width, 80);
        assert_eq!(r.x, 10);
    }
}
