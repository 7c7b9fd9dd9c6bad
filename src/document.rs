use crate::command::PageSink;
use crate::image::PixelBuffer;
use crate::measure::FontId;
use crate::page::{ImageLayout, Page, SpanFont, SpanLayout};
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::units::Pt;
use id_arena::{Arena, Id};

/// Collects the output of a render into pages, ready for a PDF writer or a
/// rasterizer to consume. Images are stored once in an arena and referred
/// to from the pages by id.
pub struct PagedDocument {
    pub page_size: PageSize,
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
    pub images: Arena<PixelBuffer>,
}

impl PagedDocument {
    pub fn new(page_size: PageSize) -> PagedDocument {
        PagedDocument {
            page_size,
            pages: Arena::new(),
            page_order: Vec::new(),
            images: Arena::new(),
        }
    }

    /// Number of pages
    pub fn len(&self) -> usize {
        self.page_order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.page_order.is_empty()
    }

    /// Get a page by its 0-based position in the document
    pub fn page(&self, page_index: usize) -> Option<&Page> {
        self.page_order
            .get(page_index)
            .and_then(|id| self.pages.get(*id))
    }

    /// Iterate over the pages in document order
    pub fn iter(&self) -> impl Iterator<Item = &Page> {
        self.page_order.iter().filter_map(|id| self.pages.get(*id))
    }

    fn current_page(&mut self) -> &mut Page {
        let id = match self.page_order.last() {
            Some(id) => *id,
            None => {
                let id = self.pages.alloc(Page::new(self.page_size));
                self.page_order.push(id);
                id
            }
        };
        &mut self.pages[id]
    }
}

impl PageSink for PagedDocument {
    fn start_page(&mut self) {
        let id = self.pages.alloc(Page::new(self.page_size));
        self.page_order.push(id);
    }

    fn draw_text(&mut self, x: Pt, y: Pt, text: &str, font: FontId, size: Pt) {
        self.current_page().add_span(SpanLayout {
            text: text.to_string(),
            font: SpanFont { id: font, size },
            coords: (x, y),
        });
    }

    fn draw_image(&mut self, position: Rect, image: &PixelBuffer) {
        let image_id = self.images.alloc(image.clone());
        self.current_page()
            .add_image(ImageLayout { image_id, position });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pagesize;

    #[test]
    fn draws_land_on_the_latest_page() {
        let mut doc = PagedDocument::new(pagesize::A5);
        doc.start_page();
        doc.draw_text(Pt(0.0), Pt(10.0), "first", FontId(0), Pt(12.0));
        doc.start_page();
        doc.draw_text(Pt(0.0), Pt(10.0), "second", FontId(0), Pt(12.0));
        doc.draw_image(
            Rect::from_origin_size(Pt(0.0), Pt(0.0), Pt(4.0), Pt(2.0)),
            &PixelBuffer::from(image::RgbImage::new(2, 1)),
        );

        assert_eq!(doc.len(), 2);
        assert_eq!(doc.page(0).unwrap().text_lines(), ["first"]);
        let second = doc.page(1).unwrap();
        assert_eq!(second.text_lines(), ["second"]);
        let placed = second.images().next().unwrap();
        assert_eq!(doc.images[placed.image_id].width(), 2);
        assert_eq!(second.media_box.x2, pagesize::A5.0);
    }

    #[test]
    fn drawing_without_a_page_opens_one() {
        let mut doc = PagedDocument::new(pagesize::A5);
        doc.draw_text(Pt(0.0), Pt(10.0), "orphan", FontId(0), Pt(12.0));
        assert_eq!(doc.len(), 1);
        assert!(doc.page(1).is_none());
    }
}
