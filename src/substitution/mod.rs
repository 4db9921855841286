//! Substitution tables and their resolution.
//!
//! This module builds the key/value table a template is instantiated with:
//! - [`SubstitutionTable`] - insertion-ordered string mapping with the
//!   sequential replacement rule
//! - [`configure_template`] - layers manifest defaults, user config
//!   overrides, interactive answers, and the computed keys into a
//!   [`ConfiguredTemplate`]

pub mod configure;
pub mod table;

pub use configure::{
    configure_template, ConfiguredTemplate, CURRENT_DAY_KEY, CURRENT_MONTH_KEY, CURRENT_YEAR_KEY,
};
pub use table::SubstitutionTable;
