//! Labeled horizontal slider widget.
//!
//! Draws a [`SeekBarView`] collected from a `SeekBar` through its
//! `DisplaySink` seam:
//!
//! ```text
//! 10.25%                 10.25% (prime rate)
//! [━━━━━━━━━━━━━●──────────────────────────]
//! ```

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::{Block, Widget};

use seekbar_core::{DisplaySink, LabelSide, SeekBar};

use crate::theme::Theme;

const FILLED: &str = "━";
const EMPTY: &str = "─";
const THUMB: &str = "●";

/// Snapshot of what a seek bar displays.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeekBarView {
    pub left: String,
    pub right: String,
    pub position: u32,
    pub max: u32,
}

impl SeekBarView {
    pub fn of(bar: &SeekBar) -> Self {
        let mut view = Self::default();
        bar.present(&mut view);
        view
    }
}

impl DisplaySink for SeekBarView {
    fn show_label(&mut self, side: LabelSide, text: &str) {
        match side {
            LabelSide::Left => self.left = text.to_string(),
            LabelSide::Right => self.right = text.to_string(),
        }
    }

    fn show_track(&mut self, position: u32, max: u32) {
        self.position = position;
        self.max = max;
    }
}

/// Ratatui widget for a [`SeekBarView`].
pub struct SeekBarWidget<'a> {
    view: &'a SeekBarView,
    block: Option<Block<'a>>,
    focused: bool,
    theme: Theme,
}

impl<'a> SeekBarWidget<'a> {
    pub fn new(view: &'a SeekBarView) -> Self {
        Self {
            view,
            block: None,
            focused: false,
            theme: Theme::default(),
        }
    }

    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

impl Widget for SeekBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let inner = match self.block {
            Some(block) => {
                let inner = block.inner(area);
                block.render(area, buf);
                inner
            }
            None => area,
        };
        if inner.height == 0 || inner.width == 0 {
            return;
        }
        buf.set_style(inner, Style::default().bg(self.theme.background));

        // One line: track only. Two or more: labels above the track.
        let track_y = if inner.height >= 2 {
            let label_row = Rect { height: 1, ..inner };
            let style = self.theme.label();
            Line::styled(self.view.left.as_str(), style)
                .alignment(Alignment::Left)
                .render(label_row, buf);
            let left_width =
                u16::try_from(Line::raw(self.view.left.as_str()).width()).unwrap_or(u16::MAX);
            if left_width < label_row.width {
                let right_row = Rect {
                    x: label_row.x + left_width,
                    width: label_row.width - left_width,
                    ..label_row
                };
                Line::styled(self.view.right.as_str(), style)
                    .alignment(Alignment::Right)
                    .render(right_row, buf);
            }
            inner.y + 1
        } else {
            inner.y
        };

        render_track(
            self.view,
            Rect { y: track_y, height: 1, ..inner },
            buf,
            &self.theme,
            self.focused,
        );
    }
}

fn render_track(view: &SeekBarView, row: Rect, buf: &mut Buffer, theme: &Theme, focused: bool) {
    if row.width < 3 {
        return;
    }
    let cells = (row.width - 2) as usize;
    let thumb = thumb_index(view.position, view.max, cells);
    let muted = theme.track_empty();

    buf.set_string(row.x, row.y, "[", muted);
    for i in 0..cells {
        let x = row.x + 1 + i as u16;
        let (symbol, style) = match i.cmp(&thumb) {
            std::cmp::Ordering::Less => (FILLED, theme.track_filled(focused)),
            std::cmp::Ordering::Equal => (THUMB, theme.thumb(focused)),
            std::cmp::Ordering::Greater => (EMPTY, muted),
        };
        buf.set_string(x, row.y, symbol, style);
    }
    buf.set_string(row.x + row.width - 1, row.y, "]", muted);
}

/// Cell index of the thumb on a track of `cells` cells.
pub fn thumb_index(position: u32, max: u32, cells: usize) -> usize {
    if cells == 0 || max == 0 {
        return 0;
    }
    let frac = (f64::from(position) / f64::from(max)).clamp(0.0, 1.0);
    (frac * (cells - 1) as f64).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Borders;
    use seekbar_core::{RangeMapper, SeekBar};

    fn row(buf: &Buffer, y: u16) -> String {
        (buf.area.x..buf.area.x + buf.area.width)
            .map(|x| buf[(x, y)].symbol())
            .collect()
    }

    fn bar() -> SeekBar {
        let mut bar = SeekBar::with_range(RangeMapper::new(0.0, 10.0, 1.0, 5.0), None, None);
        bar.set_left_label_template(Some("%s%%"));
        bar.set_right_label_text("right");
        bar
    }

    #[test]
    fn view_collects_from_display_sink() {
        let view = SeekBarView::of(&bar());
        assert_eq!(
            view,
            SeekBarView {
                left: "5.0%".into(),
                right: "right".into(),
                position: 5,
                max: 10,
            }
        );
    }

    #[test]
    fn thumb_index_spans_track() {
        assert_eq!(thumb_index(0, 10, 11), 0);
        assert_eq!(thumb_index(5, 10, 11), 5);
        assert_eq!(thumb_index(10, 10, 11), 10);
        assert_eq!(thumb_index(3, 0, 11), 0);
        assert_eq!(thumb_index(30, 10, 11), 10);
    }

    #[test]
    fn renders_labels_and_track() {
        let view = SeekBarView::of(&bar());
        let area = Rect::new(0, 0, 13, 2);
        let mut buf = Buffer::empty(area);
        SeekBarWidget::new(&view).render(area, &mut buf);

        assert_eq!(row(&buf, 0), "5.0%    right");
        assert_eq!(row(&buf, 1), "[━━━━━●─────]");
    }

    #[test]
    fn single_line_shows_track_only() {
        let view = SeekBarView::of(&bar());
        let area = Rect::new(0, 0, 13, 1);
        let mut buf = Buffer::empty(area);
        SeekBarWidget::new(&view).render(area, &mut buf);

        assert_eq!(row(&buf, 0), "[━━━━━●─────]");
    }

    #[test]
    fn renders_inside_block() {
        let view = SeekBarView::of(&bar());
        let area = Rect::new(0, 0, 15, 4);
        let mut buf = Buffer::empty(area);
        SeekBarWidget::new(&view)
            .block(Block::default().borders(Borders::ALL))
            .focused(true)
            .render(area, &mut buf);

        assert_eq!(row(&buf, 1), "│5.0%    right│");
        assert_eq!(row(&buf, 2), "│[━━━━━●─────]│");
    }

    #[test]
    fn tiny_area_does_not_panic() {
        let view = SeekBarView::of(&bar());
        let area = Rect::new(0, 0, 2, 1);
        let mut buf = Buffer::empty(area);
        SeekBarWidget::new(&view).render(area, &mut buf);
        assert_eq!(row(&buf, 0), "  ");
    }

    #[test]
    fn theme_background_fills_inner_area() {
        let view = SeekBarView::of(&bar());
        let area = Rect::new(0, 0, 13, 2);
        let mut buf = Buffer::empty(area);
        let theme = Theme {
            background: ratatui::style::Color::Rgb(1, 2, 3),
            ..Theme::default()
        };
        SeekBarWidget::new(&view).theme(theme).render(area, &mut buf);
        assert_eq!(buf[(0, 0)].bg, theme.background);
        assert_eq!(buf[(12, 1)].bg, theme.background);
    }

    #[test]
    fn overlong_left_label_hides_right_label() {
        let mut seek_bar = bar();
        seek_bar.set_left_label_text("x".repeat(70_000));
        let view = SeekBarView::of(&seek_bar);
        let area = Rect::new(0, 0, 13, 2);
        let mut buf = Buffer::empty(area);
        SeekBarWidget::new(&view).render(area, &mut buf);
        assert_eq!(row(&buf, 0), "x".repeat(13));
        assert_eq!(row(&buf, 1), "[━━━━━●─────]");
    }

    #[test]
    fn focused_thumb_uses_accent() {
        let view = SeekBarView::of(&bar());
        let area = Rect::new(0, 0, 13, 1);
        let mut buf = Buffer::empty(area);
        let theme = Theme::default();
        SeekBarWidget::new(&view).focused(true).render(area, &mut buf);
        assert_eq!(buf[(6, 0)].fg, theme.accent);
    }
}
