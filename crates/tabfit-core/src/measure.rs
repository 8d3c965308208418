#![forbid(unsafe_code)]

//! Measurement providers.
//!
//! The calculator needs one width per item, in the same unit as the container
//! width. A [`Measurer`] supplies those widths along with the width of the
//! overflow indicator, so reserved space can be derived from what will
//! actually be drawn.
//!
//! Three providers ship with the crate:
//!
//! - [`CellMeasurer`] - terminal display cells via `unicode-width`
//! - [`FixedMeasurer`] - one width for every item
//! - [`FnMeasurer`] - closure-backed, for hosts with their own font metrics

use unicode_width::UnicodeWidthStr;

use crate::item::TabItem;

/// Supplies rendered widths for items and for the overflow indicator.
///
/// Widths include margins but exclude the gap between items.
pub trait Measurer {
    /// Rendered width of one item.
    fn item_width(&self, item: &TabItem) -> f64;

    /// Rendered width of the overflow indicator showing `label`.
    fn indicator_width(&self, label: &str) -> f64;
}

impl<M: Measurer + ?Sized> Measurer for &M {
    fn item_width(&self, item: &TabItem) -> f64 {
        (**self).item_width(item)
    }

    fn indicator_width(&self, label: &str) -> f64 {
        (**self).indicator_width(label)
    }
}

impl<M: Measurer + ?Sized> Measurer for Box<M> {
    fn item_width(&self, item: &TabItem) -> f64 {
        (**self).item_width(item)
    }

    fn indicator_width(&self, label: &str) -> f64 {
        (**self).indicator_width(label)
    }
}

/// Measure every item in order, one width per item.
#[must_use]
pub fn measure_items<M: Measurer + ?Sized>(measurer: &M, items: &[TabItem]) -> Vec<f64> {
    items.iter().map(|item| measurer.item_width(item)).collect()
}

/// Measures items in terminal display cells.
///
/// An item renders as `[margin][padding][left ][label][ right][padding][margin]`,
/// each slot followed (or preceded) by one separating cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMeasurer {
    padding: u16,
    margin: u16,
}

impl Default for CellMeasurer {
    fn default() -> Self {
        Self {
            padding: 1,
            margin: 0,
        }
    }
}

impl CellMeasurer {
    /// One cell of padding on each side, no margin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Horizontal padding on each side of the content.
    #[must_use]
    pub fn padding(mut self, cells: u16) -> Self {
        self.padding = cells;
        self
    }

    /// Horizontal margin on each side, outside the padding.
    #[must_use]
    pub fn margin(mut self, cells: u16) -> Self {
        self.margin = cells;
        self
    }

    fn chrome(&self) -> usize {
        2 * (self.padding as usize + self.margin as usize)
    }
}

impl Measurer for CellMeasurer {
    fn item_width(&self, item: &TabItem) -> f64 {
        let slots: usize = [item.left_slot(), item.right_slot()]
            .into_iter()
            .flatten()
            .map(|slot| slot.width() + 1)
            .sum();
        (item.label().width() + slots + self.chrome()) as f64
    }

    fn indicator_width(&self, label: &str) -> f64 {
        (label.width() + self.chrome()) as f64
    }
}

/// Gives every item the same width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedMeasurer {
    item: f64,
    indicator: f64,
}

impl FixedMeasurer {
    #[must_use]
    pub const fn new(item: f64, indicator: f64) -> Self {
        Self { item, indicator }
    }
}

impl Measurer for FixedMeasurer {
    fn item_width(&self, _item: &TabItem) -> f64 {
        self.item
    }

    fn indicator_width(&self, _label: &str) -> f64 {
        self.indicator
    }
}

/// Closure-backed measurer.
///
/// ```
/// use tabfit_core::{FnMeasurer, Measurer, TabItem};
///
/// // 7px per character plus 16px of padding
/// let m = FnMeasurer::new(
///     |item: &TabItem| item.label().len() as f64 * 7.0 + 16.0,
///     |label: &str| label.len() as f64 * 7.0 + 16.0,
/// );
/// assert_eq!(m.item_width(&TabItem::new("a", "Docs")), 44.0);
/// ```
#[derive(Clone)]
pub struct FnMeasurer<F, G> {
    item: F,
    indicator: G,
}

impl<F, G> FnMeasurer<F, G>
where
    F: Fn(&TabItem) -> f64,
    G: Fn(&str) -> f64,
{
    #[must_use]
    pub fn new(item: F, indicator: G) -> Self {
        Self { item, indicator }
    }
}

impl<F, G> std::fmt::Debug for FnMeasurer<F, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnMeasurer").finish_non_exhaustive()
    }
}

impl<F, G> Measurer for FnMeasurer<F, G>
where
    F: Fn(&TabItem) -> f64,
    G: Fn(&str) -> f64,
{
    fn item_width(&self, item: &TabItem) -> f64 {
        (self.item)(item)
    }

    fn indicator_width(&self, label: &str) -> f64 {
        (self.indicator)(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_measurer_counts_label_and_padding() {
        let m = CellMeasurer::new();
        assert_eq!(m.item_width(&TabItem::new("a", "Home")), 6.0);
        assert_eq!(m.padding(0).item_width(&TabItem::new("a", "Home")), 4.0);
    }

    #[test]
    fn cell_measurer_counts_slots_with_separator() {
        let m = CellMeasurer::new().padding(0);
        let item = TabItem::new("a", "Inbox").with_left_slot("*").with_right_slot("12");
        // "* Inbox 12"
        assert_eq!(m.item_width(&item), 10.0);
    }

    #[test]
    fn cell_measurer_uses_display_width() {
        let m = CellMeasurer::new().padding(0);
        assert_eq!(m.item_width(&TabItem::new("a", "日本")), 4.0);
        assert_eq!(m.item_width(&TabItem::new("b", "café")), 4.0);
    }

    #[test]
    fn cell_measurer_margin_is_outside_padding() {
        let m = CellMeasurer::new().padding(1).margin(2);
        assert_eq!(m.item_width(&TabItem::new("a", "ab")), 8.0);
        assert_eq!(m.indicator_width("More +3"), 13.0);
    }

    #[test]
    fn fixed_measurer() {
        let m = FixedMeasurer::new(50.0, 96.0);
        assert_eq!(m.item_width(&TabItem::new("a", "anything")), 50.0);
        assert_eq!(m.indicator_width("More +9"), 96.0);
    }

    #[test]
    fn measure_items_preserves_order() {
        let items = vec![
            TabItem::new("a", "a"),
            TabItem::new("b", "bbb"),
            TabItem::new("c", "cc"),
        ];
        let widths = measure_items(&CellMeasurer::new().padding(0), &items);
        assert_eq!(widths, vec![1.0, 3.0, 2.0]);
    }

    #[test]
    fn references_and_boxes_measure() {
        let m = FixedMeasurer::new(3.0, 4.0);
        let boxed: Box<dyn Measurer> = Box::new(m);
        let item = TabItem::new("a", "A");
        assert_eq!((&m).item_width(&item), 3.0);
        assert_eq!(boxed.item_width(&item), 3.0);
        assert_eq!(boxed.indicator_width("More"), 4.0);
    }
}
