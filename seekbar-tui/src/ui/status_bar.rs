//! Bottom status bar — value readout and the last status message.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::{DemoState, StatusLevel, PRIME_RATE};
use crate::theme::{self, Theme};

pub fn render(f: &mut Frame, area: Rect, app: &DemoState) {
    let bar = &app.seek_bar;
    let value = bar.value();
    let palette = Theme::default();

    let mut spans: Vec<Span> = vec![
        Span::styled(" value ", theme::muted()),
        Span::styled(
            format!("{value}"),
            ratatui::style::Style::default().fg(palette.delta_color(value, PRIME_RATE)),
        ),
        Span::styled(
            format!("  position {}/{}", bar.progress(), bar.track_max()),
            theme::muted(),
        ),
    ];

    if let Some((msg, level)) = &app.status_message {
        spans.push(Span::raw(" | "));
        let style = match level {
            StatusLevel::Info => theme::accent(),
            StatusLevel::Warning => theme::warning(),
        };
        spans.push(Span::styled(msg.as_str(), style));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
