//! Line breaking and vertical flow of content across pages.
//!
//! This module provides the building blocks the [`Renderer`](crate::Renderer)
//! is made of. They can also be used on their own:
//!
//! - [`tokenize`](crate::layout::tokenize) splits a line into break-point tokens,
//!   one per ideograph, one per whitespace character, one per run of other characters
//! - [`wrap_text`](crate::layout::wrap_text) packs those tokens greedily into
//!   lines that fit a maximum width, splitting over-wide tokens between characters
//! - [`PageCursor`](crate::layout::PageCursor) tracks the vertical position on
//!   the current page and breaks to a new page when content would overflow
//! - [`scale_image`](crate::layout::scale_image) fits an image to the content
//!   width and a share of the page height
//!
//! # Example
//!
//! ```
//! use page_flow::{DrawCommand, FontId, MonospaceMeasure, Pt, TextStyle};
//! use page_flow::layout::{wrap_text, Margins, PageCursor};
//!
//! let style = TextStyle::new(FontId(0), Pt(10.0));
//! let lines = wrap_text("ABC日本語DEF", Pt(40.0), style, &MonospaceMeasure::default())
//!     .expect("monospace measurement never fails");
//! assert_eq!(lines, ["ABC日本", "語DEF"]);
//!
//! let mut cursor = PageCursor::new((Pt(200.0), Pt(100.0)), Margins::all(Pt(10.0)), 1.35);
//! let mut commands: Vec<DrawCommand> = Vec::new();
//! for line in &lines {
//!     cursor.emit_line(line, cursor.left(), style, &mut commands);
//! }
//! assert_eq!(cursor.pages(), 1);
//! ```

mod cursor;
mod margins;
mod scale;
mod tokenize;
mod wrap;

pub use cursor::*;
pub use margins::*;
pub use scale::*;
pub use tokenize::*;
pub use wrap::*;
