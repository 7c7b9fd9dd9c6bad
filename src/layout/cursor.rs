use super::margins::Margins;
use super::scale::ImageScale;
use crate::command::PageSink;
use crate::image::PixelBuffer;
use crate::measure::TextStyle;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::units::Pt;

/// Tracks the vertical position of the content flowing down a sequence of
/// pages, breaking to a new page whenever the next item would cross the
/// bottom margin.
///
/// Positions use PDF coordinates: the offset is measured up from the bottom
/// edge of the page, starts at `height - margins.top` and only ever decreases,
/// except on a page break where it resets to the top again.
///
/// Pages are opened lazily: `start_page` reaches the sink right before the
/// first drawing on a page. A render that draws nothing emits nothing, and a
/// break requested after the last drawing never produces a blank page.
#[derive(Debug, Clone)]
pub struct PageCursor {
    page_size: PageSize,
    margins: Margins,
    line_spacing: f32,
    offset: Pt,
    pages: usize,
    page_open: bool,
}

impl PageCursor {
    pub fn new(page_size: PageSize, margins: Margins, line_spacing: f32) -> PageCursor {
        PageCursor {
            page_size,
            margins,
            line_spacing,
            offset: page_size.1 - margins.top,
            pages: 0,
            page_open: false,
        }
    }

    /// Current vertical position, measured up from the bottom edge
    pub fn offset(&self) -> Pt {
        self.offset
    }

    /// Where the offset starts on every page
    pub fn top(&self) -> Pt {
        self.page_size.1 - self.margins.top
    }

    /// The x-coordinate content starts at
    pub fn left(&self) -> Pt {
        self.margins.left
    }

    /// How far the cursor can still move down before crossing the bottom margin
    pub fn remaining(&self) -> Pt {
        self.offset - self.margins.bottom
    }

    /// Number of pages opened so far
    pub fn pages(&self) -> usize {
        self.pages
    }

    /// Vertical space taken by one line of text at the given size
    pub fn leading(&self, size: Pt) -> Pt {
        size * self.line_spacing
    }

    /// Make sure `needed` points fit above the bottom margin, moving to a new
    /// page if they don't. A page with nothing drawn on it is never left
    /// behind: an item taller than a whole page is drawn on it and overflows
    pub fn ensure_room(&mut self, needed: Pt) {
        if self.offset - needed >= self.margins.bottom {
            return;
        }
        if self.page_open {
            log::debug!(
                "page {} full at offset {}, breaking before {} of content",
                self.pages,
                self.offset,
                needed
            );
            self.page_open = false;
        }
        self.offset = self.top();
    }

    /// Break to a new page if less than `min_room` is left above the bottom margin
    pub fn break_if_below(&mut self, min_room: Pt) {
        if self.offset < self.margins.bottom + min_room {
            if self.page_open {
                log::debug!("only {} left on page {}, breaking", self.remaining(), self.pages);
            }
            self.page_open = false;
            self.offset = self.top();
        }
    }

    /// Move down by a fixed gap without drawing anything
    pub fn skip(&mut self, gap: Pt) {
        self.offset -= gap;
    }

    /// Lay out one line of text at `x`: make room for its leading, draw it with
    /// its baseline at the bottom of that room and move below it. Empty lines
    /// take up room but draw nothing
    pub fn emit_line<S: PageSink + ?Sized>(
        &mut self,
        line: &str,
        x: Pt,
        style: TextStyle,
        sink: &mut S,
    ) {
        let leading = self.leading(style.size);
        self.ensure_room(leading);
        if !line.is_empty() {
            self.open_page(sink);
            sink.draw_text(x, self.offset - leading, line, style.font, style.size);
        }
        self.offset -= leading;
    }

    /// Place an image at `x` with its top edge at the current offset, breaking
    /// first if its scaled height doesn't fit
    pub fn emit_image<S: PageSink + ?Sized>(
        &mut self,
        image: &PixelBuffer,
        x: Pt,
        scale: ImageScale,
        sink: &mut S,
    ) {
        self.ensure_room(scale.height);
        self.open_page(sink);
        let position = Rect::from_origin_size(x, self.offset - scale.height, scale.width, scale.height);
        sink.draw_image(position, image);
        self.offset -= scale.height;
    }

    fn open_page<S: PageSink + ?Sized>(&mut self, sink: &mut S) {
        if !self.page_open {
            sink.start_page();
            self.pages += 1;
            self.page_open = true;
        }
    }
}
