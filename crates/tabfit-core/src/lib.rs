#![forbid(unsafe_code)]

//! Core: tab items, the overflow calculator, and measurement providers.
//!
//! The calculator answers one question: given an ordered list of items and
//! their rendered widths, which prefix fits in the container and which suffix
//! has to collapse into the overflow ("More") menu?
//!
//! ```
//! use tabfit_core::{FitParams, compute_layout};
//!
//! let items = ["Home", "Docs", "Blog", "About"];
//! let widths = [40.0, 40.0, 40.0, 40.0];
//! let params = FitParams::new()
//!     .gap(10.0)
//!     .reserved_space(0.0)
//!     .container_width(Some(100.0));
//!
//! let layout = compute_layout(&items, &widths, &params);
//! assert_eq!(layout.visible(), &["Home", "Docs"]);
//! assert_eq!(layout.overflow(), &["Blog", "About"]);
//! ```
//!
//! Everything here is pure. Hosts own the measuring, the resize observation
//! and the rendering; see the `tabfit-menu` crate for a ready-made host state.

pub mod error;
pub mod item;
pub mod layout;
pub mod logging;
pub mod measure;

pub use error::{Error, Result};
pub use item::{TabItem, validate_items};
pub use layout::{
    DEFAULT_GAP, DEFAULT_RESERVED_SPACE, FitParams, OverflowLayout, Split, compute_layout,
    compute_split, split_index, total_width,
};
pub use measure::{CellMeasurer, FixedMeasurer, FnMeasurer, Measurer, measure_items};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, trace, warn};
