use crate::image::PixelBuffer;
use crate::measure::FontId;
use crate::rect::Rect;
use crate::units::Pt;

/// Receives the output of a render, in order. Coordinates are PDF-style:
/// origin at the bottom-left of the page, y growing upwards, text positioned
/// by its baseline.
pub trait PageSink {
    /// Open a new page; every following draw lands on it
    fn start_page(&mut self);

    fn draw_text(&mut self, x: Pt, y: Pt, text: &str, font: FontId, size: Pt);

    /// Draw `image` scaled into `position`
    fn draw_image(&mut self, position: Rect, image: &PixelBuffer);
}

/// A single drawing command, as recorded by `Vec<DrawCommand>`
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    StartPage,
    Text {
        x: Pt,
        y: Pt,
        text: String,
        font: FontId,
        size: Pt,
    },
    Image {
        position: Rect,
        image: PixelBuffer,
    },
}

impl PageSink for Vec<DrawCommand> {
    fn start_page(&mut self) {
        self.push(DrawCommand::StartPage);
    }

    fn draw_text(&mut self, x: Pt, y: Pt, text: &str, font: FontId, size: Pt) {
        self.push(DrawCommand::Text {
            x,
            y,
            text: text.to_string(),
            font,
            size,
        });
    }

    fn draw_image(&mut self, position: Rect, image: &PixelBuffer) {
        self.push(DrawCommand::Image {
            position,
            image: image.clone(),
        });
    }
}

impl<S: PageSink + ?Sized> PageSink for &mut S {
    fn start_page(&mut self) {
        (**self).start_page()
    }

    fn draw_text(&mut self, x: Pt, y: Pt, text: &str, font: FontId, size: Pt) {
        (**self).draw_text(x, y, text, font, size)
    }

    fn draw_image(&mut self, position: Rect, image: &PixelBuffer) {
        (**self).draw_image(position, image)
    }
}
