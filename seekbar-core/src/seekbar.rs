//! The seek bar control: a [`RangeMapper`], a track position, and a left and
//! right label.
//!
//! Every position change runs in one order: update the position, re-render
//! the labels that follow the value, then notify the observer. An observer
//! therefore always sees the labels for the position it is told about, and may
//! overwrite them.

use std::fmt;

use crate::config::{Attribute, AttributeSource};
use crate::label::{default_text, LabelTemplate};
use crate::range::{
    RangeMapper, DEFAULT_MAXIMUM, DEFAULT_MINIMUM, DEFAULT_START, DEFAULT_STEP,
};

/// Which label slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSide {
    Left,
    Right,
}

/// What a label slot shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelContent {
    /// The value's default string form.
    Value,
    /// A template rendered with the current value.
    Template(LabelTemplate),
    /// Fixed text, left alone by value changes.
    Text,
}

/// One label: its content rule and the text currently displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSlot {
    content: LabelContent,
    text: String,
}

impl LabelSlot {
    fn new(template: Option<LabelTemplate>, value: f32) -> Self {
        let content = template.map_or(LabelContent::Value, LabelContent::Template);
        let mut slot = Self { content, text: String::new() };
        slot.refresh(value);
        slot
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn content(&self) -> &LabelContent {
        &self.content
    }

    pub fn template(&self) -> Option<&LabelTemplate> {
        match &self.content {
            LabelContent::Template(t) => Some(t),
            _ => None,
        }
    }

    /// Show fixed text until a template is set again.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.content = LabelContent::Text;
        self.text = text.into();
    }

    fn set_template(&mut self, template: Option<LabelTemplate>, value: f32) {
        self.content = template.map_or(LabelContent::Value, LabelContent::Template);
        self.refresh(value);
    }

    fn refresh(&mut self, value: f32) {
        match &self.content {
            LabelContent::Value => self.text = default_text(value),
            LabelContent::Template(t) => self.text = t.render(value),
            LabelContent::Text => {}
        }
    }
}

/// The two label slots of a seek bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labels {
    pub left: LabelSlot,
    pub right: LabelSlot,
}

impl Labels {
    pub fn get(&self, side: LabelSide) -> &LabelSlot {
        match side {
            LabelSide::Left => &self.left,
            LabelSide::Right => &self.right,
        }
    }

    pub fn get_mut(&mut self, side: LabelSide) -> &mut LabelSlot {
        match side {
            LabelSide::Left => &mut self.left,
            LabelSide::Right => &mut self.right,
        }
    }

    fn refresh(&mut self, value: f32) {
        self.left.refresh(value);
        self.right.refresh(value);
    }
}

/// A position change delivered to a [`ProgressObserver`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressChange {
    pub position: u32,
    pub previous: u32,
    pub value: f32,
    /// True when the change came from user interaction.
    pub from_user: bool,
}

/// Receives position changes.
pub trait ProgressObserver {
    fn on_progress_changed(&mut self, change: ProgressChange, labels: &mut Labels);
}

impl<F> ProgressObserver for F
where
    F: FnMut(ProgressChange, &mut Labels),
{
    fn on_progress_changed(&mut self, change: ProgressChange, labels: &mut Labels) {
        self(change, labels)
    }
}

/// Accepts rendered label text and the track state.
pub trait DisplaySink {
    fn show_label(&mut self, side: LabelSide, text: &str);
    fn show_track(&mut self, position: u32, max: u32);
}

pub struct SeekBar {
    range: RangeMapper,
    position: u32,
    labels: Labels,
    observer: Option<Box<dyn ProgressObserver>>,
}

impl fmt::Debug for SeekBar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeekBar")
            .field("range", &self.range)
            .field("position", &self.position)
            .field("labels", &self.labels)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

impl Default for SeekBar {
    fn default() -> Self {
        Self::with_range(RangeMapper::default(), None, None)
    }
}

impl SeekBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a seek bar from host attributes. Missing options take their
    /// defaults; out-of-range options are coerced.
    pub fn from_attributes(attrs: &impl AttributeSource) -> Self {
        let range = RangeMapper::new(
            attrs.float(Attribute::Minimum).unwrap_or(DEFAULT_MINIMUM),
            attrs.float(Attribute::Maximum).unwrap_or(DEFAULT_MAXIMUM),
            attrs.float(Attribute::Step).unwrap_or(DEFAULT_STEP),
            attrs.float(Attribute::Start).unwrap_or(DEFAULT_START),
        );
        let left = attrs.string(Attribute::LeftLabelTemplate).map(|s| LabelTemplate::parse(&s));
        let right = attrs.string(Attribute::RightLabelTemplate).map(|s| LabelTemplate::parse(&s));
        Self::with_range(range, left, right)
    }

    /// Build a seek bar over `range` with optional label templates.
    pub fn with_range(
        range: RangeMapper,
        left: Option<LabelTemplate>,
        right: Option<LabelTemplate>,
    ) -> Self {
        let position = range.start_position();
        let value = range.to_value(position);
        tracing::debug!(?range, position, track_max = range.track_max(), "seek bar created");
        Self {
            range,
            position,
            labels: Labels {
                left: LabelSlot::new(left, value),
                right: LabelSlot::new(right, value),
            },
            observer: None,
        }
    }

    pub fn range(&self) -> &RangeMapper {
        &self.range
    }

    pub fn minimum(&self) -> f32 {
        self.range.minimum()
    }

    pub fn maximum(&self) -> f32 {
        self.range.maximum()
    }

    pub fn step(&self) -> f32 {
        self.range.step()
    }

    pub fn start(&self) -> f32 {
        self.range.start()
    }

    pub fn set_minimum(&mut self, minimum: f32) {
        self.range.set_minimum(minimum);
        self.range_changed();
    }

    pub fn set_maximum(&mut self, maximum: f32) {
        self.range.set_maximum(maximum);
        self.range_changed();
    }

    pub fn set_step(&mut self, step: f32) {
        self.range.set_step(step);
        self.range_changed();
    }

    /// Set the start value (clamped). The current position is not moved;
    /// use [`SeekBar::reset`] for that.
    pub fn set_start(&mut self, start: f32) {
        self.range.set_start(start);
    }

    pub fn track_max(&self) -> u32 {
        self.range.track_max()
    }

    pub fn progress(&self) -> u32 {
        self.position
    }

    pub fn value(&self) -> f32 {
        self.range.to_value(self.position)
    }

    /// Move to `position` (clamped onto the track) as a programmatic change.
    pub fn set_progress(&mut self, position: u32) {
        self.move_to(position, false);
    }

    /// Move to the position nearest `value` as a programmatic change.
    pub fn set_value(&mut self, value: f32) {
        let position = self.range.to_position(value);
        self.move_to(position, false);
    }

    /// Move by `delta` positions as a user change.
    pub fn step_by(&mut self, delta: i64) {
        let target = i64::from(self.position)
            .saturating_add(delta)
            .clamp(0, i64::from(self.track_max()));
        self.move_to(target as u32, true);
    }

    /// Jump to `position` as a user change.
    pub fn seek(&mut self, position: u32) {
        self.move_to(position, true);
    }

    /// Return to the start value's position.
    pub fn reset(&mut self) {
        let position = self.range.start_position();
        self.move_to(position, true);
    }

    pub fn labels(&self) -> &Labels {
        &self.labels
    }

    pub fn left_label_text(&self) -> &str {
        self.labels.left.text()
    }

    pub fn right_label_text(&self) -> &str {
        self.labels.right.text()
    }

    pub fn set_left_label_text(&mut self, text: impl Into<String>) {
        self.labels.left.set_text(text);
    }

    pub fn set_right_label_text(&mut self, text: impl Into<String>) {
        self.labels.right.set_text(text);
    }

    /// Render the left label from `template`; `None` shows the plain value.
    pub fn set_left_label_template(&mut self, template: Option<&str>) {
        let value = self.value();
        self.labels.left.set_template(template.map(LabelTemplate::parse), value);
    }

    /// Render the right label from `template`; `None` shows the plain value.
    pub fn set_right_label_template(&mut self, template: Option<&str>) {
        let value = self.value();
        self.labels.right.set_template(template.map(LabelTemplate::parse), value);
    }

    /// Use an already-built template (e.g. one with a custom value format).
    pub fn set_label_template(&mut self, side: LabelSide, template: LabelTemplate) {
        let value = self.value();
        self.labels.get_mut(side).set_template(Some(template), value);
    }

    /// Register the position-change observer, replacing any previous one.
    pub fn set_progress_observer(&mut self, observer: impl ProgressObserver + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn clear_progress_observer(&mut self) {
        self.observer = None;
    }

    pub fn has_progress_observer(&self) -> bool {
        self.observer.is_some()
    }

    /// Push the current labels and track state to `sink`.
    pub fn present(&self, sink: &mut impl DisplaySink) {
        sink.show_label(LabelSide::Left, self.labels.left.text());
        sink.show_label(LabelSide::Right, self.labels.right.text());
        sink.show_track(self.position, self.track_max());
    }

    fn move_to(&mut self, position: u32, from_user: bool) {
        let position = position.min(self.track_max());
        if position == self.position {
            return;
        }
        let previous = self.position;
        self.position = position;
        let value = self.value();
        self.labels.refresh(value);

        let change = ProgressChange { position, previous, value, from_user };
        if let Some(observer) = self.observer.as_mut() {
            tracing::trace!(?change, "notifying progress observer");
            observer.on_progress_changed(change, &mut self.labels);
        }
    }

    /// Keep the position on the track after a range change. A shrinking
    /// track pulls the position in as a programmatic change.
    fn range_changed(&mut self) {
        let max = self.track_max();
        if self.position > max {
            self.move_to(max, false);
        } else {
            let value = self.value();
            self.labels.refresh(value);
        }
    }
}
