//! Styles module
//!
//! Nav styles are data: each one is a set of markup templates for the
//! static nav, the JS nav container and the combo nav. Six are built in
//! (`default`, `bootstrap`, `bulma`, `foundation`, `materialize`,
//! `semantic`); more can be registered from YAML.

mod builtin;
mod registry;
mod types;

pub use registry::{
    get_builtin, is_builtin, list_builtin, list_builtin_info, resolve, StyleInfo, StyleRegistry,
    BUILTIN_STYLES,
};
pub use types::{ComboStyle, Control, ItemFragment, NavStyle, Style};
