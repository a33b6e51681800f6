//! Markdown renderer for C++ API reference pages.
//!
//! This crate renders reference pages whose main feature is the overload
//! table: one row per overload with a linkable number, the declaration as a
//! code block and an optional "since C++NN" badge.
//!
//! # Architecture
//!
//! - [`overload`]: the row model and [`OverloadRenderer`]
//! - [`directive`]: `CommonMark` directive framework the page syntax is built on
//! - [`PageRenderer`]: directives + pulldown-cmark for a whole page
//!
//! Code and heading markup go through the [`CodePresenter`] and
//! [`HeadingPresenter`] traits, so a site can plug in a syntax highlighter
//! without touching the row layout.
//!
//! # Example
//!
//! ```
//! use apiref_renderer::overload::{OverloadDescriptor, OverloadRenderer};
//!
//! let renderer = OverloadRenderer::default();
//! let table = renderer.render_table(&[
//!     OverloadDescriptor::new(1u32, "constexpr basic_fixed_string() noexcept;"),
//!     OverloadDescriptor::new(2u32, "constexpr basic_fixed_string(const value_type (&array)[M]) noexcept;")
//!         .with_standard("17"),
//! ]);
//! assert!(table.contains(r##"href="#overload2""##));
//! ```

mod button;
pub mod directive;
mod html;
pub mod overload;
mod page;

pub use button::LinkButtonDirective;
pub use html::{AnchoredHeading, CodePresenter, HeadingPresenter, HtmlCodeBlock, escape_html};
pub use overload::OverloadRenderer;
pub use page::{PageRenderer, PageRendererConfig, RenderError, RenderResult, parser_options};
