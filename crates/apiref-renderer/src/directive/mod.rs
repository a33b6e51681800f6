//! Pluggable directives API for CommonMark directive syntax.
//!
//! Authors place overload rows, tables and badges in markdown with generic
//! directives (inline `:name`, leaf `::name`, and container `:::name`).
//!
//! # Architecture
//!
//! Processing happens in two phases:
//!
//! 1. **Preprocessing** ([`DirectiveProcessor::process`]): directive syntax is
//!    replaced by HTML, or by intermediate elements, that pulldown-cmark
//!    passes through unchanged.
//!
//! 2. **Post-processing** ([`DirectiveProcessor::post_process`]): handlers
//!    register [`Replacements`] that turn intermediate elements into final
//!    HTML in a single pass.
//!
//! # Directive Types
//!
//! - **Inline** ([`InlineDirective`]): `:name[content]{attrs}` - inline elements
//! - **Leaf** ([`LeafDirective`]): `::name[content]{attrs}` - self-contained blocks
//! - **Container** ([`ContainerDirective`]): `:::name` ... `:::` - wrapping blocks
//!
//! # Example
//!
//! ```
//! use apiref_renderer::directive::DirectiveProcessor;
//! use apiref_renderer::overload::{OverloadDirective, OverloadsDirective};
//!
//! let mut processor = DirectiveProcessor::new()
//!     .with_leaf(OverloadDirective::default())
//!     .with_container(OverloadsDirective::default());
//!
//! let mut html = processor.process(":::overloads\n::overload[void swap(basic_fixed_string& other);]{num=1}\n:::");
//! processor.post_process(&mut html);
//! assert!(html.contains(r#"id="overload1""#));
//! ```

mod args;
mod container;
mod context;
mod fence;
mod inline;
mod leaf;
mod output;
mod parser;
mod processor;
mod replacements;

pub use args::DirectiveArgs;
pub use container::ContainerDirective;
pub use context::DirectiveContext;
pub use inline::InlineDirective;
pub use leaf::LeafDirective;
pub use output::DirectiveOutput;
pub use processor::{DirectiveProcessor, DirectiveProcessorConfig, ReadFileFn};
pub use replacements::Replacements;
