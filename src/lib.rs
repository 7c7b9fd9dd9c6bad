//! Lays structured document content out onto fixed-size pages.
//!
//! Content arrives as [ContentBlock]s (headings, paragraphs, quotes,
//! preformatted text, images), grouped into [Section]s of a
//! [SourceDocument]. The [Renderer] wraps text with script-aware line
//! breaking (ideographic scripts break between any two characters, other
//! scripts at whitespace), scales images to the page, flows everything down
//! the page and breaks to a new page before anything would overflow. The
//! result is a stream of drawing commands sent to a [PageSink], such as a
//! `Vec<DrawCommand>` or a [PagedDocument].
//!
//! Text measurement and image lookup are supplied by the caller through the
//! [TextMeasure] and [ImageResolver] traits.
//!
//! # Example
//!
//! ```
//! use page_flow::*;
//!
//! let config = LayoutConfig::default();
//! let measure = MonospaceMeasure::default();
//! let renderer = Renderer::new(&config, &measure, &NoImages, FontId(0))
//!     .expect("default configuration is valid");
//!
//! let document = SourceDocument::new(vec![Section::new(vec![
//!     ContentBlock::paragraph("吾輩は猫である。名前はまだ無い。"),
//! ])
//! .title("第一章")])
//! .title("吾輩は猫である");
//!
//! let mut pages = PagedDocument::new(config.page_size);
//! let summary = renderer.render(&document, &mut pages).expect("can lay out");
//! assert_eq!(summary.pages, 1);
//! assert_eq!(pages.len(), 1);
//! ```

mod block;
pub use block::*;

mod command;
pub use command::*;

mod config;
pub use config::*;

mod document;
pub use document::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

mod image;
pub use self::image::*;

/// Line breaking, page flow and image scaling
pub mod layout;

mod measure;
pub use measure::*;

mod page;
pub use page::*;

pub mod pagesize;

mod rect;
pub use rect::*;

mod render;
pub use render::*;

pub mod script;

mod units;
pub use units::*;
