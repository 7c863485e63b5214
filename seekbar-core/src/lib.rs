//! SeekBar core — a labeled slider model independent of any UI toolkit.
//!
//! - [`range`]: position ⇄ value mapping with clamped configuration
//! - [`label`]: label templates and value formatting
//! - [`config`]: attribute sources and attribute files
//! - [`seekbar`]: the control itself, its observer and display sink seams

pub mod config;
pub mod label;
pub mod range;
pub mod seekbar;

pub use config::{Attribute, AttributeSource, ConfigError, SeekBarAttributes};
pub use label::{LabelTemplate, ValueFormat};
pub use range::{RangeMapper, MIN_STEP};
pub use seekbar::{
    DisplaySink, LabelContent, LabelSide, LabelSlot, Labels, ProgressChange, ProgressObserver,
    SeekBar,
};
