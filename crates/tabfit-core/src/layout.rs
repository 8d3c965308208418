#![forbid(unsafe_code)]

//! The overflow calculator.
//!
//! Splits an ordered item list into a *visible* prefix and an *overflow*
//! suffix using a single greedy pass over the measured widths.
//!
//! # Algorithm
//!
//! 1. `used = 0`, `split = N`.
//! 2. For each item `i`: `used += width[i]`, plus `gap` when `i > 0`. The first
//!    item that makes `used > available` becomes the split point.
//! 3. If the scan found no split but the accumulated total still exceeds the
//!    budget, item 0 is checked alone; if it does not fit, everything
//!    overflows.
//! 4. `visible = items[..split]`, `overflow = items[split..]`.
//!
//! # Invariants
//!
//! - **Partition**: `visible ++ overflow == items`, order preserved.
//! - **Prefix**: `visible` is always `items[..k]` for some `k`.
//! - **Fail open**: a missing container or a width count that does not match
//!   the item count shows every item.
//! - **Tie-break**: a row that exactly fills the budget fits.
//! - **Monotone**: more available width never hides more items.
//!
//! The step 3 correction only ever re-examines item 0. It is kept as a
//! boundary guard, not as an exhaustive re-fit.

/// Default spacing between adjacent visible items.
pub const DEFAULT_GAP: f64 = 8.0;

/// Default width reserved for the overflow indicator.
pub const DEFAULT_RESERVED_SPACE: f64 = 96.0;

/// Inputs to a layout pass other than the items and their widths.
///
/// `available_width = container_width - reserved_space`. A `None` container
/// means the host has not laid it out yet (or lost it).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitParams {
    /// Spacing inserted between adjacent visible items (not before the first).
    pub gap: f64,
    /// Current container width, if the container is available.
    pub container_width: Option<f64>,
    /// Width subtracted up front for the overflow indicator.
    pub reserved_space: f64,
}

impl Default for FitParams {
    fn default() -> Self {
        Self {
            gap: DEFAULT_GAP,
            container_width: None,
            reserved_space: DEFAULT_RESERVED_SPACE,
        }
    }
}

impl FitParams {
    /// Default parameters: gap 8, reserved space 96, no container.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    #[must_use]
    pub fn container_width(mut self, width: Option<f64>) -> Self {
        self.container_width = width;
        self
    }

    #[must_use]
    pub fn reserved_space(mut self, reserved: f64) -> Self {
        self.reserved_space = reserved;
        self
    }

    /// Width budget for visible items, or `None` without a container.
    ///
    /// May be negative when the reserved space exceeds the container.
    #[must_use]
    pub fn available_width(&self) -> Option<f64> {
        self.container_width.map(|w| w - self.reserved_space)
    }
}

/// Owned result of a layout pass: where the item list splits.
///
/// Hosts cache this instead of the borrowed [`OverflowLayout`] so the item
/// list can stay owned elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Split {
    index: usize,
    len: usize,
}

impl Split {
    /// Every item visible, nothing in overflow.
    #[must_use]
    pub const fn all_visible(len: usize) -> Self {
        Self { index: len, len }
    }

    /// First overflow index (equals [`len`](Self::len) when nothing overflows).
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Number of items the split was computed for.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub const fn visible_count(&self) -> usize {
        self.index
    }

    #[must_use]
    pub const fn overflow_count(&self) -> usize {
        self.len - self.index
    }

    #[must_use]
    pub const fn has_overflow(&self) -> bool {
        self.index < self.len
    }

    /// Whether the item at `index` lands in the overflow set.
    #[must_use]
    pub const fn is_overflow(&self, index: usize) -> bool {
        index >= self.index && index < self.len
    }

    /// Partition `items` at this split.
    ///
    /// The index is clamped to `items.len()` so a stale split never panics.
    #[must_use]
    pub fn apply<'a, T>(&self, items: &'a [T]) -> OverflowLayout<'a, T> {
        let (visible, overflow) = items.split_at(self.index.min(items.len()));
        OverflowLayout { visible, overflow }
    }
}

/// Borrowed partition of an item list into visible and overflow sets.
#[derive(Debug, PartialEq, Eq)]
pub struct OverflowLayout<'a, T> {
    visible: &'a [T],
    overflow: &'a [T],
}

impl<T> Clone for OverflowLayout<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for OverflowLayout<'_, T> {}

impl<'a, T> OverflowLayout<'a, T> {
    /// Items rendered directly, in original order.
    #[must_use]
    pub fn visible(&self) -> &'a [T] {
        self.visible
    }

    /// Items relegated to the overflow menu, in original order.
    #[must_use]
    pub fn overflow(&self) -> &'a [T] {
        self.overflow
    }

    /// Boundary position between the two sets.
    #[must_use]
    pub fn split_index(&self) -> usize {
        self.visible.len()
    }

    #[must_use]
    pub fn has_overflow(&self) -> bool {
        !self.overflow.is_empty()
    }

    /// Iterate over all items, visible first, tagging overflow membership.
    pub fn iter(self) -> impl Iterator<Item = (&'a T, bool)> + 'a {
        let visible = self.visible.iter().map(|item| (item, false));
        let overflow = self.overflow.iter().map(|item| (item, true));
        visible.chain(overflow)
    }

    /// Clone both sets into owned vectors.
    #[must_use]
    pub fn to_vecs(&self) -> (Vec<T>, Vec<T>)
    where
        T: Clone,
    {
        (self.visible.to_vec(), self.overflow.to_vec())
    }
}

/// A NaN width (an unmeasured item) counts as zero.
#[inline]
fn nan_to_zero(width: f64) -> f64 {
    if width.is_nan() { 0.0 } else { width }
}

/// Total row width of all items including the gaps between them.
#[must_use]
pub fn total_width(widths: &[f64], gap: f64) -> f64 {
    let gap = nan_to_zero(gap);
    widths
        .iter()
        .enumerate()
        .map(|(i, &w)| nan_to_zero(w) + if i > 0 { gap } else { 0.0 })
        .sum()
}

/// Greedy prefix scan over `widths` against a known `available` width.
///
/// Returns the first overflow index, or `widths.len()` when everything fits.
/// This is the raw scan with no degenerate-input guard; most callers want
/// [`compute_layout`] or [`compute_split`].
#[must_use]
pub fn split_index(widths: &[f64], gap: f64, available: f64) -> usize {
    let gap = nan_to_zero(gap);
    let len = widths.len();
    let mut used = 0.0;
    let mut split = len;

    for (i, &width) in widths.iter().enumerate() {
        used += nan_to_zero(width) + if i > 0 { gap } else { 0.0 };
        if used > available {
            split = i;
            break;
        }
    }

    if split == len
        && used > available
        && widths
            .first()
            .is_some_and(|&first| nan_to_zero(first) > available)
    {
        split = 0;
    }

    split
}

/// Compute where `item_count` items split, given their widths.
///
/// Fails open (everything visible) when the container is unavailable or the
/// width count does not match the item count.
#[must_use]
pub fn compute_split(widths: &[f64], item_count: usize, params: &FitParams) -> Split {
    let Some(available) = params.available_width() else {
        crate::debug!(items = item_count, "container unavailable; showing all items");
        return Split::all_visible(item_count);
    };
    if widths.len() != item_count {
        crate::warn!(
            items = item_count,
            widths = widths.len(),
            "width count does not match item count; showing all items"
        );
        return Split::all_visible(item_count);
    }

    let index = split_index(widths, params.gap, available);
    crate::trace!(
        message = "tabfit.compute_layout",
        items = item_count,
        available,
        split = index
    );
    Split {
        index,
        len: item_count,
    }
}

/// Partition `items` into visible and overflow sets.
///
/// `widths[i]` is the rendered width of `items[i]` (margins included, gap
/// excluded). See the [module docs](self) for the algorithm.
#[must_use]
pub fn compute_layout<'a, T>(
    items: &'a [T],
    widths: &[f64],
    params: &FitParams,
) -> OverflowLayout<'a, T> {
    compute_split(widths, items.len(), params).apply(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(gap: f64, available: f64) -> FitParams {
        FitParams::new()
            .gap(gap)
            .reserved_space(0.0)
            .container_width(Some(available))
    }

    #[test]
    fn exact_fit_is_visible() {
        let items = ["a", "b", "c"];
        let layout = compute_layout(&items, &[50.0, 50.0, 50.0], &params(0.0, 100.0));
        assert_eq!(layout.visible(), &["a", "b"]);
        assert_eq!(layout.overflow(), &["c"]);

        let two = ["a", "b"];
        let layout = compute_layout(&two, &[50.0, 50.0], &params(0.0, 100.0));
        assert_eq!(layout.visible().len(), 2);
        assert!(layout.overflow().is_empty());
    }

    #[test]
    fn one_unit_short_overflows() {
        let items = ["a", "b", "c"];
        let layout = compute_layout(&items, &[50.0, 50.0, 50.0], &params(0.0, 99.0));
        assert_eq!(layout.visible(), &["a"]);
        assert_eq!(layout.overflow(), &["b", "c"]);
    }

    #[test]
    fn single_oversized_item_overflows() {
        let items = ["wide"];
        let layout = compute_layout(&items, &[500.0], &params(0.0, 100.0));
        assert!(layout.visible().is_empty());
        assert_eq!(layout.overflow(), &["wide"]);
    }

    #[test]
    fn gap_is_counted_between_items() {
        let items = ["a", "b", "c"];
        let layout = compute_layout(&items, &[40.0, 40.0, 40.0], &params(10.0, 100.0));
        assert_eq!(layout.visible(), &["a", "b"]);
        assert_eq!(layout.overflow(), &["c"]);
    }

    #[test]
    fn gap_not_counted_before_first_item() {
        assert_eq!(split_index(&[100.0], 50.0, 100.0), 1);
    }

    #[test]
    fn zero_items() {
        let items: [&str; 0] = [];
        for available in [-10.0, 0.0, 100.0] {
            let layout = compute_layout(&items, &[], &params(8.0, available));
            assert!(layout.visible().is_empty());
            assert!(layout.overflow().is_empty());
        }
    }

    #[test]
    fn mismatched_widths_fail_open() {
        let items = ["a", "b", "c"];
        let layout = compute_layout(&items, &[500.0, 500.0], &params(0.0, 10.0));
        assert_eq!(layout.visible(), &items);
        assert!(layout.overflow().is_empty());
    }

    #[test]
    fn surplus_widths_fail_open() {
        let items = ["a", "b"];
        let layout = compute_layout(&items, &[500.0, 500.0, 500.0], &params(0.0, 10.0));
        assert_eq!(layout.visible(), &items);
        assert!(layout.overflow().is_empty());

        let none: [&str; 0] = [];
        let layout = compute_layout(&none, &[10.0], &params(0.0, 5.0));
        assert!(layout.visible().is_empty());
        assert!(layout.overflow().is_empty());
        assert_eq!(layout.split_index(), 0);
    }

    #[test]
    fn missing_container_fails_open() {
        let items = ["a", "b"];
        let p = FitParams::new().container_width(None);
        let layout = compute_layout(&items, &[500.0, 500.0], &p);
        assert_eq!(layout.visible(), &items);
        assert!(!layout.has_overflow());
    }

    #[test]
    fn reserved_space_shrinks_budget() {
        let items = ["a", "b", "c"];
        let p = FitParams::new()
            .gap(0.0)
            .reserved_space(50.0)
            .container_width(Some(150.0));
        assert_eq!(p.available_width(), Some(100.0));
        let layout = compute_layout(&items, &[50.0, 50.0, 50.0], &p);
        assert_eq!(layout.split_index(), 2);
    }

    #[test]
    fn negative_budget_overflows_everything() {
        let p = FitParams::new()
            .reserved_space(96.0)
            .container_width(Some(40.0));
        let items = ["a", "b"];
        let layout = compute_layout(&items, &[0.0, 0.0], &p);
        assert!(layout.visible().is_empty());
        assert_eq!(layout.overflow(), &items);
    }

    #[test]
    fn later_items_overflow_even_if_small() {
        // the 1-wide item after the split would fit on its own, but order wins
        assert_eq!(split_index(&[60.0, 60.0, 1.0], 0.0, 100.0), 1);
    }

    #[test]
    fn nan_width_counts_as_zero() {
        assert_eq!(split_index(&[f64::NAN, 100.0], 0.0, 100.0), 2);
        assert_eq!(total_width(&[f64::NAN, 10.0], 5.0), 15.0);
    }

    #[test]
    fn total_width_includes_gaps() {
        assert_eq!(total_width(&[], 8.0), 0.0);
        assert_eq!(total_width(&[40.0], 8.0), 40.0);
        assert_eq!(total_width(&[40.0, 40.0, 40.0], 10.0), 140.0);
    }

    #[test]
    fn idempotent() {
        let items = ["a", "b", "c", "d"];
        let widths = [30.0, 25.0, 60.0, 10.0];
        let p = params(8.0, 90.0);
        assert_eq!(
            compute_layout(&items, &widths, &p),
            compute_layout(&items, &widths, &p)
        );
    }

    #[test]
    fn split_accessors() {
        let split = Split {
            index: 2,
            len: 5,
        };
        assert_eq!(split.visible_count(), 2);
        assert_eq!(split.overflow_count(), 3);
        assert!(split.has_overflow());
        assert!(!split.is_overflow(1));
        assert!(split.is_overflow(2));
        assert!(!split.is_overflow(5));

        let all = Split::all_visible(3);
        assert!(!all.has_overflow());
        assert_eq!(all.overflow_count(), 0);
        assert!(Split::all_visible(0).is_empty());
    }

    #[test]
    fn stale_split_is_clamped() {
        let split = Split::all_visible(10);
        let items = [1, 2, 3];
        let layout = split.apply(&items);
        assert_eq!(layout.visible(), &items);
        assert!(layout.overflow().is_empty());
    }

    #[test]
    fn iter_tags_overflow_membership() {
        let items = ["a", "b", "c"];
        let layout = compute_layout(&items, &[50.0, 50.0, 50.0], &params(0.0, 60.0));
        let tagged: Vec<_> = layout.iter().map(|(s, o)| (*s, o)).collect();
        assert_eq!(tagged, vec![("a", false), ("b", true), ("c", true)]);
        let (visible, overflow) = layout.to_vecs();
        assert_eq!(visible, vec!["a"]);
        assert_eq!(overflow, vec!["b", "c"]);
    }

    #[test]
    fn default_params() {
        let p = FitParams::default();
        assert_eq!(p.gap, DEFAULT_GAP);
        assert_eq!(p.reserved_space, DEFAULT_RESERVED_SPACE);
        assert_eq!(p.available_width(), None);
    }
}
