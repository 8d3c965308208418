#![forbid(unsafe_code)]

//! Tab items.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single labeled, uniquely keyed tab.
///
/// The optional slots are decorative adornments rendered on either side of
/// the label (an icon, a badge). They are inert to the calculator but take up
/// room, so measurers include them in the item width.
///
/// Serialized field names are camelCase (`leftSlot`, `rightSlot`):
///
/// ```
/// use tabfit_core::TabItem;
///
/// let items = TabItem::list_from_json(
///     r#"[{"value":"inbox","label":"Inbox","rightSlot":"12"},{"value":"sent","label":"Sent"}]"#,
/// )
/// .unwrap();
/// assert_eq!(items[0].right_slot(), Some("12"));
/// assert_eq!(items[1].label(), "Sent");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TabItem {
    value: String,
    label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    left_slot: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    right_slot: Option<String>,
}

impl TabItem {
    /// Create a new item with a value key and a display label.
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            left_slot: None,
            right_slot: None,
        }
    }

    /// Set the adornment rendered before the label.
    #[must_use]
    pub fn with_left_slot(mut self, slot: impl Into<String>) -> Self {
        self.left_slot = Some(slot.into());
        self
    }

    /// Set the adornment rendered after the label.
    #[must_use]
    pub fn with_right_slot(mut self, slot: impl Into<String>) -> Self {
        self.right_slot = Some(slot.into());
        self
    }

    /// Unique key of this item.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    #[must_use]
    pub fn left_slot(&self) -> Option<&str> {
        self.left_slot.as_deref()
    }

    #[must_use]
    pub fn right_slot(&self) -> Option<&str> {
        self.right_slot.as_deref()
    }

    /// Parse a JSON array of items and validate it.
    ///
    /// Fails on malformed JSON and on duplicate `value` keys.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        let items: Vec<Self> = serde_json::from_str(json)?;
        validate_items(&items)?;
        Ok(items)
    }
}

/// Check that every item `value` is unique.
pub fn validate_items(items: &[TabItem]) -> Result<()> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        if !seen.insert(item.value()) {
            return Err(Error::DuplicateValue(item.value().to_owned()));
        }
    }
    Ok(())
}
