#![forbid(unsafe_code)]

//! Menu configuration.

use serde::{Deserialize, Serialize};
use tabfit_core::{DEFAULT_GAP, DEFAULT_RESERVED_SPACE, Error, Result};

/// Default label of the overflow indicator.
pub const DEFAULT_MENU_LABEL: &str = "More";

/// How much width to set aside for the overflow indicator.
///
/// Whatever the policy, nothing is reserved while the whole row fits the
/// container: no indicator will be drawn in that case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservedSpace {
    /// Never reserve anything.
    None,
    /// Reserve a fixed width.
    Fixed(f64),
    /// Reserve the measured width of the widest indicator label
    /// (`"{menu_label} +{item_count}"`).
    Indicator,
}

impl Default for ReservedSpace {
    fn default() -> Self {
        Self::Fixed(DEFAULT_RESERVED_SPACE)
    }
}

/// Configuration for a [`TabMenu`](crate::TabMenu).
///
/// Loadable from JSON; missing fields take their defaults:
///
/// ```
/// use tabfit_menu::{MenuConfig, ReservedSpace};
///
/// let config = MenuConfig::from_json(r#"{"gap": 2, "reserved_space": "indicator"}"#).unwrap();
/// assert_eq!(config.gap, 2.0);
/// assert_eq!(config.reserved_space, ReservedSpace::Indicator);
/// assert_eq!(config.menu_label, "More");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    /// Spacing between adjacent visible items.
    pub gap: f64,
    /// Reserve policy for the overflow indicator.
    pub reserved_space: ReservedSpace,
    /// Label of the overflow indicator, shown as `"{label} +{count}"`.
    pub menu_label: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            gap: DEFAULT_GAP,
            reserved_space: ReservedSpace::default(),
            menu_label: DEFAULT_MENU_LABEL.to_owned(),
        }
    }
}

impl MenuConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    #[must_use]
    pub fn with_reserved_space(mut self, reserved: ReservedSpace) -> Self {
        self.reserved_space = reserved;
        self
    }

    #[must_use]
    pub fn with_menu_label(mut self, label: impl Into<String>) -> Self {
        self.menu_label = label.into();
        self
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Reject negative or non-finite widths.
    pub fn validate(&self) -> Result<()> {
        if !self.gap.is_finite() || self.gap < 0.0 {
            return Err(Error::InvalidConfig(format!(
                "gap must be a nonnegative number, got {}",
                self.gap
            )));
        }
        if let ReservedSpace::Fixed(width) = self.reserved_space
            && (!width.is_finite() || width < 0.0)
        {
            return Err(Error::InvalidConfig(format!(
                "reserved space must be a nonnegative number, got {width}"
            )));
        }
        Ok(())
    }

    /// Indicator text for `count` overflow items.
    #[must_use]
    pub fn indicator_label(&self, count: usize) -> String {
        format!("{} +{count}", self.menu_label)
    }
}
