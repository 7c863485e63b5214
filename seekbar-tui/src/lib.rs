//! SeekBar TUI — ratatui host for the seek bar control.
//!
//! - a reusable [`ui::widgets::slider::SeekBarWidget`]
//! - the interest-rate demo screen ([`app::DemoState`])

pub mod app;
pub mod input;
pub mod theme;
pub mod ui;

pub use app::DemoState;
pub use theme::Theme;
pub use ui::widgets::slider::{SeekBarView, SeekBarWidget};
