use crate::image::PixelBuffer;

/// Where an image block's pixels come from
#[derive(Debug, Clone, PartialEq)]
pub enum ImageSource {
    /// Already decoded by the caller
    Embedded(PixelBuffer),
    /// A reference (such as an `<img src>`) looked up through an
    /// [ImageResolver](crate::ImageResolver) at render time
    Reference(String),
}

/// One unit of extracted document content. Blocks are read-only inputs to
/// the renderer.
#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    /// A heading; `level` 1 is the most prominent
    Heading { level: u8, text: String },
    /// Running text. Line breaks inside the text are treated as spaces
    Paragraph(String),
    /// A block quote, laid out like a paragraph but indented
    Quote(String),
    /// Text whose line breaks are kept
    Preformatted(String),
    Image(ImageSource),
}

impl ContentBlock {
    pub fn heading<S: ToString>(level: u8, text: S) -> ContentBlock {
        ContentBlock::Heading {
            level,
            text: text.to_string(),
        }
    }

    pub fn paragraph<S: ToString>(text: S) -> ContentBlock {
        ContentBlock::Paragraph(text.to_string())
    }

    pub fn quote<S: ToString>(text: S) -> ContentBlock {
        ContentBlock::Quote(text.to_string())
    }

    pub fn preformatted<S: ToString>(text: S) -> ContentBlock {
        ContentBlock::Preformatted(text.to_string())
    }

    pub fn image_ref<S: ToString>(src: S) -> ContentBlock {
        ContentBlock::Image(ImageSource::Reference(src.to_string()))
    }

    pub fn image(buffer: PixelBuffer) -> ContentBlock {
        ContentBlock::Image(ImageSource::Embedded(buffer))
    }
}

/// A section of a document (a chapter, or one spine item of an ebook)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Section {
    /// Drawn as a level-1 heading before the blocks
    pub title: Option<String>,
    /// The section's path inside its container; image references are
    /// resolved relative to it
    pub href: Option<String>,
    pub blocks: Vec<ContentBlock>,
}

impl Section {
    pub fn new(blocks: Vec<ContentBlock>) -> Section {
        Section {
            blocks,
            ..Section::default()
        }
    }

    pub fn title<S: ToString>(mut self, title: S) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn href<S: ToString>(mut self, href: S) -> Self {
        self.href = Some(href.to_string());
        self
    }
}

/// Everything extracted from a source document, in reading order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceDocument {
    /// Drawn at the very start, larger than any heading
    pub title: Option<String>,
    pub sections: Vec<Section>,
}

impl SourceDocument {
    pub fn new(sections: Vec<Section>) -> SourceDocument {
        SourceDocument {
            title: None,
            sections,
        }
    }

    pub fn title<S: ToString>(mut self, title: S) -> Self {
        self.title = Some(title.to_string());
        self
    }
}
