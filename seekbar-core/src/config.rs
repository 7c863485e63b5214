//! Attribute sources — where a seek bar reads its initial configuration.
//!
//! The host supplies typed values through [`AttributeSource`].
//! [`SeekBarAttributes`] is the file-backed implementation (TOML or JSON).

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Recognized configuration options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Minimum,
    Maximum,
    Start,
    Step,
    LeftLabelTemplate,
    RightLabelTemplate,
}

impl Attribute {
    pub const ALL: [Attribute; 6] = [
        Attribute::Minimum,
        Attribute::Maximum,
        Attribute::Start,
        Attribute::Step,
        Attribute::LeftLabelTemplate,
        Attribute::RightLabelTemplate,
    ];

    /// Key as written in attribute files.
    pub fn key(self) -> &'static str {
        match self {
            Attribute::Minimum => "minimum",
            Attribute::Maximum => "maximum",
            Attribute::Start => "start",
            Attribute::Step => "step",
            Attribute::LeftLabelTemplate => "leftLabelTemplate",
            Attribute::RightLabelTemplate => "rightLabelTemplate",
        }
    }
}

/// Host-provided typed configuration values.
///
/// A missing value (or a value of the wrong kind) is `None`; the seek bar
/// falls back to its default for that option.
pub trait AttributeSource {
    fn float(&self, attr: Attribute) -> Option<f32>;
    fn string(&self, attr: Attribute) -> Option<String>;
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML attributes: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid JSON attributes: {0}")]
    Json(#[from] serde_json::Error),
}

/// Attribute set loaded from a file or built in code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeekBarAttributes {
    pub minimum: Option<f32>,
    pub maximum: Option<f32>,
    pub start: Option<f32>,
    pub step: Option<f32>,
    pub left_label_template: Option<String>,
    pub right_label_template: Option<String>,
}

impl SeekBarAttributes {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Load attributes from a file. `.json` files are read as JSON, anything
    /// else as TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let attrs = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json_str(&content)?,
            _ => Self::from_toml_str(&content)?,
        };
        tracing::debug!(path = %path.display(), ?attrs, "loaded seek bar attributes");
        Ok(attrs)
    }

    /// Overlay `other` on top of `self`: every value set in `other` wins.
    pub fn merge(mut self, other: SeekBarAttributes) -> Self {
        self.minimum = other.minimum.or(self.minimum);
        self.maximum = other.maximum.or(self.maximum);
        self.start = other.start.or(self.start);
        self.step = other.step.or(self.step);
        self.left_label_template = other.left_label_template.or(self.left_label_template);
        self.right_label_template = other.right_label_template.or(self.right_label_template);
        self
    }
}

impl AttributeSource for SeekBarAttributes {
    fn float(&self, attr: Attribute) -> Option<f32> {
        match attr {
            Attribute::Minimum => self.minimum,
            Attribute::Maximum => self.maximum,
            Attribute::Start => self.start,
            Attribute::Step => self.step,
            Attribute::LeftLabelTemplate | Attribute::RightLabelTemplate => None,
        }
    }

    fn string(&self, attr: Attribute) -> Option<String> {
        match attr {
            Attribute::LeftLabelTemplate => self.left_label_template.clone(),
            Attribute::RightLabelTemplate => self.right_label_template.clone(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_toml() {
        let attrs = SeekBarAttributes::from_toml_str(
            r#"
            minimum = 5.0
            maximum = 15.0
            step = 0.25
            start = 10.25
            leftLabelTemplate = "%s%%"
            "#,
        )
        .unwrap();
        assert_eq!(attrs.minimum, Some(5.0));
        assert_eq!(attrs.step, Some(0.25));
        assert_eq!(attrs.left_label_template.as_deref(), Some("%s%%"));
        assert_eq!(attrs.right_label_template, None);
    }

    #[test]
    fn missing_keys_are_none() {
        let attrs = SeekBarAttributes::from_toml_str("").unwrap();
        assert_eq!(attrs, SeekBarAttributes::default());
    }

    #[test]
    fn parses_json() {
        let attrs =
            SeekBarAttributes::from_json_str(r#"{"maximum": 20, "rightLabelTemplate": "%s"}"#)
                .unwrap();
        assert_eq!(attrs.float(Attribute::Maximum), Some(20.0));
        assert_eq!(attrs.string(Attribute::RightLabelTemplate).as_deref(), Some("%s"));
    }

    #[test]
    fn bad_toml_is_an_error() {
        let err = SeekBarAttributes::from_toml_str("minimum = \"low\"").unwrap_err();
        assert!(matches!(err, ConfigError::Toml(_)));
    }

    #[test]
    fn wrong_kind_lookup_is_none() {
        let attrs = SeekBarAttributes {
            minimum: Some(1.0),
            left_label_template: Some("%s".into()),
            ..Default::default()
        };
        assert_eq!(attrs.string(Attribute::Minimum), None);
        assert_eq!(attrs.float(Attribute::LeftLabelTemplate), None);
    }

    #[test]
    fn merge_prefers_overrides() {
        let base = SeekBarAttributes {
            minimum: Some(1.0),
            maximum: Some(10.0),
            ..Default::default()
        };
        let overrides = SeekBarAttributes {
            maximum: Some(20.0),
            step: Some(0.5),
            ..Default::default()
        };
        let merged = base.merge(overrides);
        assert_eq!(merged.minimum, Some(1.0));
        assert_eq!(merged.maximum, Some(20.0));
        assert_eq!(merged.step, Some(0.5));
    }

    #[test]
    fn keys_match_file_names() {
        let keys: Vec<&str> = Attribute::ALL.iter().map(|a| a.key()).collect();
        assert_eq!(
            keys,
            ["minimum", "maximum", "start", "step", "leftLabelTemplate", "rightLabelTemplate"]
        );
    }
}
