#![forbid(unsafe_code)]

//! Host-side state for responsive tab menus.
//!
//! - [`TabMenu`] - owns items, cached widths, the current split and the
//!   active selection
//! - [`MenuConfig`] - gap, reserve policy and indicator label
//! - [`ResizeCoalescer`] - latest-wins coalescing of container resizes

pub mod coalescer;
pub mod config;
pub mod menu;

pub use coalescer::ResizeCoalescer;
pub use config::{DEFAULT_MENU_LABEL, MenuConfig, ReservedSpace};
pub use menu::{MenuEvent, TabMenu};
