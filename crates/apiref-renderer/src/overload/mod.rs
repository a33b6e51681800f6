//! Overload tables for API reference pages.
//!
//! Each overload of a function or constructor is shown as one table row:
//! a number label that doubles as a link target (`#overload1`), the
//! declaration as a code block, and an optional "since C++17" badge.
//!
//! - [`OverloadDescriptor`] holds the input for one row.
//! - [`OverloadRenderer`] turns descriptors into row and table HTML.
//! - [`OverloadDirective`], [`OverloadsDirective`], [`OverloadListDirective`]
//!   and [`SinceDirective`] expose the renderer to markdown authors.

mod directive;
mod model;
mod row;
mod theme;

pub use directive::{OverloadDirective, OverloadListDirective, OverloadsDirective, SinceDirective};
pub use model::{
    ANCHOR_PREFIX, OverloadDescriptor, OverloadNumber, StandardVersion, anchor_for, badge_text,
    duplicate_numbers,
};
pub use row::{OverloadRenderer, OverloadRow, TABLE_CLOSE, TABLE_OPEN};
pub use theme::OverloadTheme;
