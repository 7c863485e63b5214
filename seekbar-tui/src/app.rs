//! Demo screen state — single-owner, main-thread only.
//!
//! A seek bar over an interest rate whose right label reports the distance
//! to the prime rate.

use seekbar_core::{
    Attribute, AttributeSource, LabelSide, LabelTemplate, Labels, ProgressChange, SeekBar,
    SeekBarAttributes, ValueFormat,
};

use crate::theme::Theme;
use crate::ui::widgets::slider::SeekBarView;

/// Reference rate the right label is measured against.
pub const PRIME_RATE: f32 = 10.25;

const PRIME_LABEL: &str = "10.25% (prime rate)";
const BELOW_PRIME: &str = "%s%% (prime - %.2f%%)";
const ABOVE_PRIME: &str = "%s%% (prime + %.2f%%)";
const RATE_FORMAT: ValueFormat = ValueFormat::Trimmed { max_decimals: 2 };

/// Attributes the demo starts from before any file or CLI override.
pub fn default_attributes() -> SeekBarAttributes {
    SeekBarAttributes {
        minimum: Some(5.0),
        maximum: Some(15.0),
        step: Some(0.25),
        start: Some(PRIME_RATE),
        left_label_template: Some("%s%%".into()),
        right_label_template: None,
    }
}

/// Right label text for `rate`.
pub fn prime_rate_label(rate: f32) -> String {
    let diff = rate - PRIME_RATE;
    if diff.abs() < 1e-4 {
        PRIME_LABEL.to_string()
    } else if diff < 0.0 {
        LabelTemplate::parse(BELOW_PRIME)
            .with_format(RATE_FORMAT)
            .render_args(&[rate, -diff])
    } else {
        LabelTemplate::parse(ABOVE_PRIME)
            .with_format(RATE_FORMAT)
            .render_args(&[rate, diff])
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

#[derive(Debug)]
pub struct DemoState {
    pub seek_bar: SeekBar,
    pub running: bool,
    pub focused: bool,
    pub theme: Theme,
    pub status_message: Option<(String, StatusLevel)>,
}

impl DemoState {
    pub fn new(attrs: &SeekBarAttributes) -> Self {
        let mut seek_bar = SeekBar::from_attributes(attrs);

        // The left label follows the rate with at most two decimals unless the
        // configured template is replaced later.
        if let Some(left) = attrs.string(Attribute::LeftLabelTemplate) {
            seek_bar.set_label_template(
                LabelSide::Left,
                LabelTemplate::parse(&left).with_format(RATE_FORMAT),
            );
        }

        // A configured right template takes precedence over the prime-rate text.
        if attrs.right_label_template.is_none() {
            let value = seek_bar.value();
            seek_bar.set_right_label_text(prime_rate_label(value));
            seek_bar.set_progress_observer(|change: ProgressChange, labels: &mut Labels| {
                labels.right.set_text(prime_rate_label(change.value));
            });
        }

        Self {
            seek_bar,
            running: true,
            focused: true,
            theme: Theme::default(),
            status_message: None,
        }
    }

    pub fn view(&self) -> SeekBarView {
        SeekBarView::of(&self.seek_bar)
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}
