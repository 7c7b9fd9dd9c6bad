use crate::block::{ContentBlock, ImageSource, Section, SourceDocument};
use crate::command::PageSink;
use crate::config::LayoutConfig;
use crate::error::LayoutError;
use crate::image::{ImageResolver, PixelBuffer, Resolved};
use crate::layout::{scale_image, wrap_text, PageCursor};
use crate::measure::{FontId, TextMeasure, TextStyle};
use crate::units::Pt;

/// Counts of what a render produced
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderSummary {
    /// Pages opened on the sink
    pub pages: usize,
    /// Non-empty lines of text drawn
    pub lines: usize,
    /// Images drawn
    pub images: usize,
    /// Image blocks that could not be resolved or placed
    pub skipped_images: usize,
}

/// Lays documents out onto pages.
///
/// A renderer only borrows its configuration and collaborators, so one
/// renderer can lay out any number of documents; every call to
/// [Renderer::render] gets a fresh [PageCursor] and writes to its own sink.
pub struct Renderer<'a, M: ?Sized, R: ?Sized> {
    config: &'a LayoutConfig,
    measure: &'a M,
    resolver: &'a R,
    font: FontId,
}

impl<'a, M, R> Renderer<'a, M, R>
where
    M: TextMeasure + ?Sized,
    R: ImageResolver + ?Sized,
{
    /// Create a renderer setting all text in `font`. Fails if the configuration
    /// is unusable, before anything is laid out
    pub fn new(
        config: &'a LayoutConfig,
        measure: &'a M,
        resolver: &'a R,
        font: FontId,
    ) -> Result<Self, LayoutError> {
        config.validate()?;
        Ok(Renderer {
            config,
            measure,
            resolver,
            font,
        })
    }

    pub fn config(&self) -> &LayoutConfig {
        self.config
    }

    /// Lay out a whole document: its title, then every section with its own
    /// title, blocks and trailing gap
    pub fn render<S: PageSink + ?Sized>(
        &self,
        document: &SourceDocument,
        sink: &mut S,
    ) -> Result<RenderSummary, LayoutError> {
        let mut pass = RenderPass::new(self, sink);
        if let Some(title) = &document.title {
            pass.text(title, self.config.title_size, Pt(0.0))?;
            pass.cursor.skip(self.config.title_gap);
        }
        for section in &document.sections {
            pass.section(section)?;
        }
        Ok(pass.finish())
    }

    /// Lay out a bare list of blocks, as a single untitled section without
    /// the trailing section gap
    pub fn render_blocks<S: PageSink + ?Sized>(
        &self,
        blocks: &[ContentBlock],
        sink: &mut S,
    ) -> Result<RenderSummary, LayoutError> {
        let mut pass = RenderPass::new(self, sink);
        for block in blocks {
            pass.block(block, None)?;
        }
        Ok(pass.finish())
    }
}

/// The state of one render: the cursor, the sink and the running summary
struct RenderPass<'r, 'a, M: ?Sized, R: ?Sized, S: ?Sized> {
    renderer: &'r Renderer<'a, M, R>,
    cursor: PageCursor,
    sink: &'r mut S,
    summary: RenderSummary,
}

impl<'r, 'a, M, R, S> RenderPass<'r, 'a, M, R, S>
where
    M: TextMeasure + ?Sized,
    R: ImageResolver + ?Sized,
    S: PageSink + ?Sized,
{
    fn new(renderer: &'r Renderer<'a, M, R>, sink: &'r mut S) -> Self {
        let config = renderer.config;
        RenderPass {
            renderer,
            cursor: PageCursor::new(config.page_size, config.margins, config.line_spacing),
            sink,
            summary: RenderSummary::default(),
        }
    }

    fn config(&self) -> &'a LayoutConfig {
        self.renderer.config
    }

    fn section(&mut self, section: &Section) -> Result<(), LayoutError> {
        log::debug!(
            "section {:?}: {} blocks, starting on page {} at {}",
            section.href.as_deref().or(section.title.as_deref()).unwrap_or("<untitled>"),
            section.blocks.len(),
            self.cursor.pages().max(1),
            self.cursor.offset()
        );
        if let Some(title) = &section.title {
            self.heading(1, title)?;
        }
        for block in &section.blocks {
            self.block(block, section.href.as_deref())?;
        }

        let config = self.config();
        self.cursor.skip(config.section_gap);
        self.cursor.break_if_below(config.section_min_room);
        Ok(())
    }

    fn block(&mut self, block: &ContentBlock, href: Option<&str>) -> Result<(), LayoutError> {
        let config = self.config();
        match block {
            ContentBlock::Heading { level, text } => self.heading(*level, &join_fragments(text)),
            ContentBlock::Paragraph(text) => {
                self.text(&join_fragments(text), config.body_size, Pt(0.0))
            }
            ContentBlock::Quote(text) => {
                self.text(&join_fragments(text), config.body_size, config.quote_indent)
            }
            ContentBlock::Preformatted(text) => self.text(text, config.body_size, Pt(0.0)),
            ContentBlock::Image(ImageSource::Embedded(buffer)) => {
                self.image(buffer);
                Ok(())
            }
            ContentBlock::Image(ImageSource::Reference(src)) => {
                match self.renderer.resolver.resolve(src, href) {
                    Resolved::Found(buffer) => self.image(&buffer),
                    Resolved::NotFound => {
                        log::warn!("skipping unresolved image {src:?}");
                        self.summary.skipped_images += 1;
                    }
                }
                Ok(())
            }
        }
    }

    fn heading(&mut self, level: u8, text: &str) -> Result<(), LayoutError> {
        if text.trim().is_empty() {
            return Ok(());
        }
        let config = self.config();
        self.text(text, config.heading_size(level), Pt(0.0))?;
        self.cursor.skip(config.heading_gap);
        Ok(())
    }

    /// Wrap `text` at `size` to the content width less `indent` and emit every
    /// line. Text that is empty or only whitespace emits nothing
    fn text(&mut self, text: &str, size: Pt, indent: Pt) -> Result<(), LayoutError> {
        if text.trim().is_empty() {
            return Ok(());
        }
        let config = self.config();
        let style = TextStyle::new(self.renderer.font, size);
        let x = self.cursor.left() + indent;
        let max_width = config.content_width() - indent;

        let lines = wrap_text(text, max_width, style, self.renderer.measure)?;
        for line in &lines {
            self.cursor.emit_line(line, x, style, &mut *self.sink);
            if !line.is_empty() {
                self.summary.lines += 1;
            }
        }
        Ok(())
    }

    fn image(&mut self, buffer: &PixelBuffer) {
        let config = self.config();
        let scale = scale_image(
            (buffer.width(), buffer.height()),
            config.content_width(),
            config.page_size.1,
            config.image_max_height_fraction,
            config.allow_upscale,
        );
        match scale {
            Some(scale) => {
                self.cursor.emit_image(buffer, self.cursor.left(), scale, &mut *self.sink);
                self.summary.images += 1;
            }
            None => {
                log::warn!(
                    "skipping empty {}x{} image",
                    buffer.width(),
                    buffer.height()
                );
                self.summary.skipped_images += 1;
            }
        }
    }

    fn finish(self) -> RenderSummary {
        let summary = RenderSummary {
            pages: self.cursor.pages(),
            ..self.summary
        };
        log::debug!(
            "rendered {} lines and {} images onto {} pages ({} images skipped)",
            summary.lines,
            summary.images,
            summary.pages,
            summary.skipped_images
        );
        summary
    }
}

/// Join the lines of running text with single spaces, dropping blank lines
fn join_fragments(text: &str) -> String {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
