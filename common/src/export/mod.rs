//! Export core modules shared by every front-end.

#[cfg(feature = "excel")]
pub mod excel_core;
