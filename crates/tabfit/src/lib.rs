#![forbid(unsafe_code)]

//! tabfit public facade crate.
//!
//! Re-exports the overflow calculator from `tabfit-core` and the host-side
//! menu state from `tabfit-menu`, plus a prelude for day-to-day use.
//!
//! ```
//! use tabfit::prelude::*;
//!
//! let items = TabItem::list_from_json(
//!     r#"[{"value":"a","label":"Alpha"},{"value":"b","label":"Beta"},{"value":"c","label":"Gamma"}]"#,
//! )?;
//! let config = MenuConfig::new().with_gap(1.0).with_reserved_space(ReservedSpace::None);
//! let mut menu = TabMenu::new(items, config, CellMeasurer::new())?;
//!
//! menu.set_container_width(14.0);
//! let labels: Vec<_> = menu.visible().iter().map(TabItem::label).collect();
//! assert_eq!(labels, ["Alpha", "Beta"]);
//! assert_eq!(menu.indicator_label().as_deref(), Some("More +1"));
//! # Ok::<(), tabfit::Error>(())
//! ```

// --- Core re-exports -------------------------------------------------------

pub use tabfit_core::{
    CellMeasurer, DEFAULT_GAP, DEFAULT_RESERVED_SPACE, Error, FitParams, FixedMeasurer,
    FnMeasurer, Measurer, OverflowLayout, Result, Split, TabItem, compute_layout, compute_split,
    measure_items, split_index, total_width, validate_items,
};

// --- Menu re-exports -------------------------------------------------------

pub use tabfit_menu::{
    DEFAULT_MENU_LABEL, MenuConfig, MenuEvent, ReservedSpace, ResizeCoalescer, TabMenu,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        CellMeasurer, Error, FitParams, Measurer, MenuConfig, MenuEvent, ReservedSpace, Result,
        TabItem, TabMenu, compute_layout,
    };

    pub use crate::{core, menu};
}

pub use tabfit_core as core;
pub use tabfit_menu as menu;
