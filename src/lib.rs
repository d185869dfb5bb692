//! Status labels for items with an in-flight git operation.
//!
//! The core is [`presentation::item_operation_to_string`], a total mapping from an
//! [`ItemOperation`] to the matching phrase in a [`TranslationSet`].

pub mod cli;
pub mod constants;
pub mod git;
pub mod i18n;
pub mod operation;
pub mod presentation;
pub mod ui;

pub use i18n::TranslationSet;
pub use operation::ItemOperation;
pub use presentation::{
    ItemRow, item_operation_to_string, loader_elapsed, raw_item_operation_to_string, render_row,
    spinner_frame,
};
