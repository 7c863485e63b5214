//! Range mapping between integer track positions and real values.
//!
//! A track has `track_max() + 1` positions. Position `p` represents the value
//! `p * step + minimum`; a value maps back to the nearest position.
//!
//! Nothing in here fails. Out-of-range configuration is coerced:
//! - `step` is floored at [`MIN_STEP`]
//! - `start` is clamped into `[minimum, maximum]`
//! - non-finite inputs fall back to the field default

/// Smallest step the track accepts.
pub const MIN_STEP: f32 = 0.1;

pub const DEFAULT_MINIMUM: f32 = 0.0;
pub const DEFAULT_MAXIMUM: f32 = 100.0;
pub const DEFAULT_STEP: f32 = MIN_STEP;
pub const DEFAULT_START: f32 = 0.0;

/// Range, step and start value of a seek bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeMapper {
    minimum: f32,
    maximum: f32,
    step: f32,
    start: f32,
}

impl Default for RangeMapper {
    fn default() -> Self {
        Self {
            minimum: DEFAULT_MINIMUM,
            maximum: DEFAULT_MAXIMUM,
            step: DEFAULT_STEP,
            start: DEFAULT_START,
        }
    }
}

impl RangeMapper {
    /// Build a mapper, coercing every field the same way the setters do.
    pub fn new(minimum: f32, maximum: f32, step: f32, start: f32) -> Self {
        let mut mapper = Self {
            minimum: finite_or(minimum, DEFAULT_MINIMUM),
            maximum: finite_or(maximum, DEFAULT_MAXIMUM),
            step: floor_step(step),
            start: DEFAULT_START,
        };
        mapper.set_start(start);
        mapper
    }

    pub fn minimum(&self) -> f32 {
        self.minimum
    }

    pub fn maximum(&self) -> f32 {
        self.maximum
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    pub fn start(&self) -> f32 {
        self.start
    }

    /// Set the lower bound. The start value is re-clamped into the new range.
    pub fn set_minimum(&mut self, minimum: f32) {
        self.minimum = finite_or(minimum, DEFAULT_MINIMUM);
        self.start = self.clamp(self.start);
    }

    /// Set the upper bound. The start value is re-clamped into the new range.
    pub fn set_maximum(&mut self, maximum: f32) {
        self.maximum = finite_or(maximum, DEFAULT_MAXIMUM);
        self.start = self.clamp(self.start);
    }

    /// Set the step, floored at [`MIN_STEP`].
    pub fn set_step(&mut self, step: f32) {
        self.step = floor_step(step);
    }

    /// Set the start value, clamped into `[minimum, maximum]`.
    pub fn set_start(&mut self, start: f32) {
        let clamped = self.clamp(finite_or(start, DEFAULT_START));
        if clamped != start {
            tracing::debug!(requested = start, effective = clamped, "start value clamped");
        }
        self.start = clamped;
    }

    /// Clamp a value into the range.
    ///
    /// The lower bound is applied first, so an inverted range resolves to
    /// `maximum` instead of panicking the way `f32::clamp` would.
    pub fn clamp(&self, value: f32) -> f32 {
        value.max(self.minimum).min(self.maximum)
    }

    /// Highest position on the track: `round((maximum - minimum) / step)`.
    ///
    /// When the span is not a multiple of the step the rounding can land one
    /// step past `maximum`: `0..10` with step 4 ends at position 3, value 12.
    pub fn track_max(&self) -> u32 {
        let span = (f64::from(self.maximum) - f64::from(self.minimum)) / f64::from(self.step);
        if span <= 0.0 {
            return 0;
        }
        span.round().min(f64::from(u32::MAX)) as u32
    }

    /// Value represented by `position`: `position * step + minimum`.
    ///
    /// Not clamped to `maximum`; see [`RangeMapper::track_max`].
    pub fn to_value(&self, position: u32) -> f32 {
        (f64::from(position) * f64::from(self.step) + f64::from(self.minimum)) as f32
    }

    /// Nearest position for `value`: `round((value - minimum) / step)`,
    /// clamped onto the track.
    pub fn to_position(&self, value: f32) -> u32 {
        let offset = (f64::from(value) - f64::from(self.minimum)) / f64::from(self.step);
        if !offset.is_finite() || offset <= 0.0 {
            return 0;
        }
        (offset.round().min(f64::from(u32::MAX)) as u32).min(self.track_max())
    }

    /// Position of the start value.
    pub fn start_position(&self) -> u32 {
        self.to_position(self.start)
    }
}

fn floor_step(step: f32) -> f32 {
    if !step.is_finite() || step < MIN_STEP {
        tracing::debug!(requested = step, effective = MIN_STEP, "step floored");
        return MIN_STEP;
    }
    step
}

fn finite_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() {
        value
    } else {
        tracing::debug!(requested = value, effective = fallback, "non-finite bound replaced");
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let m = RangeMapper::default();
        assert_eq!(m.minimum(), 0.0);
        assert_eq!(m.maximum(), 100.0);
        assert_eq!(m.step(), 0.1);
        assert_eq!(m.start(), 0.0);
        assert_eq!(m.track_max(), 1000);
    }

    #[test]
    fn track_max_follows_step() {
        let mut m = RangeMapper::new(0.0, 100.0, 1.0, 0.0);
        assert_eq!(m.track_max(), 100);
        m.set_step(2.0);
        assert_eq!(m.track_max(), 50);
    }

    #[test]
    fn track_max_follows_bounds() {
        let mut m = RangeMapper::new(0.0, 100.0, 1.0, 0.0);
        m.set_minimum(50.0);
        assert_eq!(m.track_max(), 50);
        m.set_maximum(60.0);
        assert_eq!(m.track_max(), 10);
    }

    #[test]
    fn uneven_span_rounds_past_maximum() {
        let m = RangeMapper::new(0.0, 10.0, 4.0, 0.0);
        assert_eq!(m.track_max(), 3);
        assert_eq!(m.to_value(m.track_max()), 12.0);
    }

    #[test]
    fn inverted_range_has_empty_track() {
        let m = RangeMapper::new(10.0, 5.0, 1.0, 7.0);
        assert_eq!(m.track_max(), 0);
        assert_eq!(m.start(), 5.0);
    }

    #[test]
    fn start_clamped_to_maximum() {
        let m = RangeMapper::new(0.0, 100.0, 1.0, 120.0);
        assert_eq!(m.start(), 100.0);
    }

    #[test]
    fn start_clamped_to_minimum() {
        let m = RangeMapper::new(6.0, 100.0, 1.0, 0.0);
        assert_eq!(m.start(), 6.0);
    }

    #[test]
    fn start_reclamped_when_range_shrinks() {
        let mut m = RangeMapper::new(0.0, 100.0, 1.0, 80.0);
        m.set_maximum(50.0);
        assert_eq!(m.start(), 50.0);
    }

    #[test]
    fn zero_step_floored() {
        let m = RangeMapper::new(0.0, 100.0, 0.0, 0.0);
        assert_eq!(m.step(), MIN_STEP);
    }

    #[test]
    fn negative_and_nan_step_floored() {
        let mut m = RangeMapper::default();
        m.set_step(-3.0);
        assert_eq!(m.step(), MIN_STEP);
        m.set_step(f32::NAN);
        assert_eq!(m.step(), MIN_STEP);
    }

    #[test]
    fn value_mapping() {
        let m = RangeMapper::new(5.0, 15.0, 0.25, 10.25);
        assert_eq!(m.track_max(), 40);
        assert_eq!(m.to_value(0), 5.0);
        assert_eq!(m.to_value(21), 10.25);
        assert_eq!(m.to_position(10.25), 21);
        assert_eq!(m.start_position(), 21);
    }

    #[test]
    fn decimal_steps_surface_short_values() {
        let m = RangeMapper::default();
        assert_eq!(m.to_value(102), 10.2);
        assert_eq!(format!("{:?}", m.to_value(102)), "10.2");
    }

    #[test]
    fn to_position_clamps_onto_track() {
        let m = RangeMapper::new(0.0, 10.0, 1.0, 0.0);
        assert_eq!(m.to_position(-4.0), 0);
        assert_eq!(m.to_position(40.0), 10);
        assert_eq!(m.to_position(f32::NAN), 0);
    }
}
