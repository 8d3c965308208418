#![forbid(unsafe_code)]

//! Owning state for one responsive tab menu.
//!
//! [`TabMenu`] runs the host side of the measure / observe / recompute loop
//! around the pure calculator in `tabfit-core`:
//!
//! 1. **Measure**: widths come from a [`Measurer`] and are cached. They are
//!    refreshed only when the items or the configuration change.
//! 2. **Observe**: the host forwards container size changes as
//!    [`MenuEvent::ContainerResized`]. Bursts are coalesced until the next
//!    [`MenuEvent::Tick`].
//! 3. **Recompute**: [`TabMenu::recompute`] is the single entry point that
//!    calls the calculator and caches the resulting [`Split`].
//!
//! Selection lives alongside the split but never triggers a recompute.
//!
//! ```
//! use tabfit_core::{CellMeasurer, TabItem};
//! use tabfit_menu::{MenuConfig, MenuEvent, ReservedSpace, TabMenu};
//!
//! let items = vec![
//!     TabItem::new("home", "Home"),
//!     TabItem::new("docs", "Docs"),
//!     TabItem::new("blog", "Blog"),
//! ];
//! let config = MenuConfig::new()
//!     .with_gap(1.0)
//!     .with_reserved_space(ReservedSpace::Indicator);
//! let mut menu = TabMenu::new(items, config, CellMeasurer::new()).unwrap();
//!
//! // Before any layout the menu fails open.
//! assert_eq!(menu.visible().len(), 3);
//!
//! menu.update(MenuEvent::ContainerResized(19.0));
//! menu.update(MenuEvent::Tick);
//! assert_eq!(menu.visible().len(), 1);
//! assert_eq!(menu.indicator_label().as_deref(), Some("More +2"));
//! ```

use std::fmt;

use tabfit_core::{
    FitParams, Measurer, Result, Split, TabItem, compute_split, measure_items, total_width,
    validate_items,
};

use crate::coalescer::ResizeCoalescer;
use crate::config::{MenuConfig, ReservedSpace};

/// Events a host delivers to a [`TabMenu`].
#[derive(Debug, Clone, PartialEq)]
pub enum MenuEvent {
    /// The container reported a new width. Applied on the next `Tick`.
    ContainerResized(f64),
    /// The container is gone (unmounted, hidden). Shows every item.
    ContainerLost,
    /// Frame boundary: apply any coalesced resize.
    Tick,
    /// The user picked the item with this value.
    Select(String),
}

type ChangeHandler = Box<dyn FnMut(&str)>;

/// Host-side state for a responsive tab menu.
pub struct TabMenu<M: Measurer> {
    items: Vec<TabItem>,
    widths: Vec<f64>,
    indicator_width: f64,
    config: MenuConfig,
    measurer: M,
    container_width: Option<f64>,
    split: Split,
    active: Option<String>,
    resize: ResizeCoalescer,
    on_change: Option<ChangeHandler>,
}

impl<M: Measurer + fmt::Debug> fmt::Debug for TabMenu<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TabMenu")
            .field("items", &self.items)
            .field("widths", &self.widths)
            .field("indicator_width", &self.indicator_width)
            .field("config", &self.config)
            .field("measurer", &self.measurer)
            .field("container_width", &self.container_width)
            .field("split", &self.split)
            .field("active", &self.active)
            .field("resize", &self.resize)
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

impl<M: Measurer> TabMenu<M> {
    /// Create a menu and measure its items.
    ///
    /// The container is unknown until the first resize, so every item starts
    /// visible. Fails on duplicate item values or an invalid configuration.
    pub fn new(items: Vec<TabItem>, config: MenuConfig, measurer: M) -> Result<Self> {
        validate_items(&items)?;
        config.validate()?;
        let mut menu = Self {
            split: Split::all_visible(items.len()),
            items,
            widths: Vec::new(),
            indicator_width: 0.0,
            config,
            measurer,
            container_width: None,
            active: None,
            resize: ResizeCoalescer::new(),
            on_change: None,
        };
        menu.measure();
        Ok(menu)
    }

    /// Set the initially active value.
    #[must_use]
    pub fn with_active(mut self, value: impl Into<String>) -> Self {
        self.active = Some(value.into());
        self
    }

    /// Register the selection sink, called with the new value whenever the
    /// user selects a different item.
    #[must_use]
    pub fn on_change(mut self, handler: impl FnMut(&str) + 'static) -> Self {
        self.on_change = Some(Box::new(handler));
        self
    }

    // --- Accessors ------------------------------------------------------

    #[must_use]
    pub fn items(&self) -> &[TabItem] {
        &self.items
    }

    /// Cached item widths, one per item.
    #[must_use]
    pub fn widths(&self) -> &[f64] {
        &self.widths
    }

    #[must_use]
    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    #[must_use]
    pub fn measurer(&self) -> &M {
        &self.measurer
    }

    #[must_use]
    pub fn container_width(&self) -> Option<f64> {
        self.container_width
    }

    /// The cached split from the last recompute.
    #[must_use]
    pub fn split(&self) -> Split {
        self.split
    }

    /// Items shown directly.
    #[must_use]
    pub fn visible(&self) -> &[TabItem] {
        self.split.apply(&self.items).visible()
    }

    /// Items collapsed into the overflow menu.
    #[must_use]
    pub fn overflow(&self) -> &[TabItem] {
        self.split.apply(&self.items).overflow()
    }

    #[must_use]
    pub fn has_overflow(&self) -> bool {
        self.split.has_overflow()
    }

    /// Text for the overflow indicator, or `None` when nothing overflows.
    #[must_use]
    pub fn indicator_label(&self) -> Option<String> {
        self.has_overflow()
            .then(|| self.config.indicator_label(self.split.overflow_count()))
    }

    /// Width the reserve policy would set aside for the indicator.
    #[must_use]
    pub fn indicator_width(&self) -> f64 {
        self.indicator_width
    }

    // --- Items and configuration ---------------------------------------

    /// Replace the whole item list.
    ///
    /// Items are re-measured and the cached split is reset before the
    /// recompute, so nothing from the old list leaks into the new layout. The
    /// active value survives if an item with that value still exists;
    /// otherwise the first item becomes active. On error nothing changes.
    pub fn replace_items(&mut self, items: Vec<TabItem>) -> Result<()> {
        validate_items(&items)?;

        self.split = Split::all_visible(items.len());
        self.items = items;
        self.measure();

        let keep = self
            .active
            .as_deref()
            .is_some_and(|active| self.position(active).is_some());
        if !keep {
            self.active = self.items.first().map(|item| item.value().to_owned());
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "tabmenu.replace_items",
            items = self.items.len(),
            active = ?self.active
        );

        self.recompute();
        Ok(())
    }

    /// Replace the configuration, re-measure, and recompute.
    pub fn set_config(&mut self, config: MenuConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        self.measure();
        self.recompute();
        Ok(())
    }

    /// Re-run every measurement (fonts or theme changed) and recompute the
    /// split against the new widths. Returns `true` when the split changed.
    pub fn remeasure(&mut self) -> bool {
        self.measure();
        self.recompute()
    }

    fn measure(&mut self) {
        self.widths = measure_items(&self.measurer, &self.items);
        let widest = self.config.indicator_label(self.items.len());
        self.indicator_width = self.measurer.indicator_width(&widest);
    }

    // --- Layout ---------------------------------------------------------

    /// Handle a host event. Returns `true` when the visible/overflow split or
    /// the active selection changed.
    pub fn update(&mut self, event: MenuEvent) -> bool {
        match event {
            MenuEvent::ContainerResized(width) => {
                self.resize.push(width);
                false
            }
            MenuEvent::ContainerLost => {
                self.resize.clear();
                self.container_width = None;
                self.recompute()
            }
            MenuEvent::Tick => match self.resize.flush() {
                Some(width) => self.set_container_width(width),
                None => false,
            },
            MenuEvent::Select(value) => self.select(&value),
        }
    }

    /// Apply a container width immediately, bypassing the coalescer.
    pub fn set_container_width(&mut self, width: f64) -> bool {
        self.container_width = Some(width);
        self.recompute()
    }

    /// Recompute the split from the cached widths and the current container.
    ///
    /// Returns `true` if the split changed.
    pub fn recompute(&mut self) -> bool {
        #[cfg(feature = "tracing")]
        let span = tracing::debug_span!(
            "tabmenu.recompute",
            items = self.items.len(),
            container = ?self.container_width,
            split = tracing::field::Empty,
        )
        .entered();

        let params = FitParams::new()
            .gap(self.config.gap)
            .container_width(self.container_width)
            .reserved_space(self.reserved_space());
        let split = compute_split(&self.widths, self.items.len(), &params);

        #[cfg(feature = "tracing")]
        span.record("split", split.index());

        let changed = split != self.split;
        self.split = split;
        changed
    }

    /// Reserve for the current container.
    ///
    /// Zero when the whole row fits the container: no indicator will render.
    fn reserved_space(&self) -> f64 {
        let Some(container) = self.container_width else {
            return 0.0;
        };
        if total_width(&self.widths, self.config.gap) <= container {
            return 0.0;
        }
        match self.config.reserved_space {
            ReservedSpace::None => 0.0,
            ReservedSpace::Fixed(width) => width,
            ReservedSpace::Indicator => self.indicator_width,
        }
    }

    // --- Selection ------------------------------------------------------

    #[must_use]
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    #[must_use]
    pub fn is_active(&self, value: &str) -> bool {
        self.active.as_deref() == Some(value)
    }

    /// Whether the active item currently sits in the overflow menu.
    ///
    /// Hosts use this to highlight the indicator itself.
    #[must_use]
    pub fn active_in_overflow(&self) -> bool {
        self.active
            .as_deref()
            .and_then(|active| self.position(active))
            .is_some_and(|idx| self.split.is_overflow(idx))
    }

    /// User selection. Notifies the selection sink when the active value
    /// changes. Unknown values are ignored.
    pub fn select(&mut self, value: &str) -> bool {
        if self.is_active(value) || self.position(value).is_none() {
            return false;
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "tabmenu.select",
            from = ?self.active,
            to = value
        );

        self.active = Some(value.to_owned());
        if let Some(handler) = self.on_change.as_mut() {
            handler(value);
        }
        true
    }

    /// Programmatic selection: updates the active value without notifying
    /// the selection sink.
    pub fn set_active(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.is_active(&value) {
            return false;
        }
        self.active = Some(value);
        true
    }

    /// Select the item after the active one. Stops at the last item.
    pub fn select_next(&mut self) -> bool {
        let next = match self.active_position() {
            Some(idx) => idx + 1,
            None => 0,
        };
        self.select_index(next)
    }

    /// Select the item before the active one. Stops at the first item and
    /// does nothing while no item is active.
    pub fn select_previous(&mut self) -> bool {
        match self.active_position() {
            Some(0) => false,
            Some(idx) => self.select_index(idx - 1),
            None => false,
        }
    }

    fn select_index(&mut self, idx: usize) -> bool {
        let Some(value) = self.items.get(idx).map(|item| item.value().to_owned()) else {
            return false;
        };
        self.select(&value)
    }

    fn active_position(&self) -> Option<usize> {
        self.active.as_deref().and_then(|active| self.position(active))
    }

    fn position(&self, value: &str) -> Option<usize> {
        self.items.iter().position(|item| item.value() == value)
    }
}
