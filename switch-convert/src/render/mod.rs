//! Target-dialect writers.

pub mod aruba;
pub mod hp;

pub use aruba::render_aruba6100;
pub use hp::{render_hp_procurve, COMPATIBILITY_BANNER};
