use crate::error::LayoutError;
use crate::layout::Margins;
use crate::pagesize::{self, PageSize};
use crate::units::Pt;

/// Every tunable constant of a render. The defaults lay out a borderless A4
/// page with large type, suited to reading CJK text on a tablet.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    pub page_size: PageSize,
    pub margins: Margins,
    /// Leading as a multiple of the font size
    pub line_spacing: f32,
    pub body_size: Pt,
    /// Sizes for heading levels 1, 2 and 3; deeper levels use the last one
    pub heading_sizes: [Pt; 3],
    pub title_size: Pt,
    /// Extra left indent for block quotes
    pub quote_indent: Pt,
    /// Largest share of the page height an image may take
    pub image_max_height_fraction: f32,
    /// When false, images are never scaled above their intrinsic size
    pub allow_upscale: bool,
    /// Space left below the last line of a heading
    pub heading_gap: Pt,
    /// Space left below the document title
    pub title_gap: Pt,
    /// Space left after each section
    pub section_gap: Pt,
    /// After a section, start a new page if less than this much room is left
    pub section_min_room: Pt,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            page_size: pagesize::A4,
            margins: Margins::empty(),
            line_spacing: 1.35,
            body_size: Pt(20.0),
            heading_sizes: [Pt(20.0), Pt(20.0), Pt(20.0)],
            title_size: Pt(26.0),
            quote_indent: Pt(0.0),
            image_max_height_fraction: 0.98,
            allow_upscale: true,
            heading_gap: Pt(4.0),
            title_gap: Pt(12.0),
            section_gap: Pt(4.0),
            section_min_room: Pt(20.0),
        }
    }
}

impl LayoutConfig {
    pub fn new() -> LayoutConfig {
        LayoutConfig::default()
    }

    pub fn page_size(&mut self, page_size: PageSize) -> &mut Self {
        self.page_size = page_size;
        self
    }

    pub fn margins(&mut self, margins: Margins) -> &mut Self {
        self.margins = margins;
        self
    }

    pub fn line_spacing(&mut self, line_spacing: f32) -> &mut Self {
        self.line_spacing = line_spacing;
        self
    }

    pub fn body_size(&mut self, size: Pt) -> &mut Self {
        self.body_size = size;
        self
    }

    pub fn heading_sizes(&mut self, sizes: [Pt; 3]) -> &mut Self {
        self.heading_sizes = sizes;
        self
    }

    pub fn title_size(&mut self, size: Pt) -> &mut Self {
        self.title_size = size;
        self
    }

    pub fn quote_indent(&mut self, indent: Pt) -> &mut Self {
        self.quote_indent = indent;
        self
    }

    pub fn image_max_height_fraction(&mut self, fraction: f32) -> &mut Self {
        self.image_max_height_fraction = fraction;
        self
    }

    pub fn allow_upscale(&mut self, allow: bool) -> &mut Self {
        self.allow_upscale = allow;
        self
    }

    pub fn heading_gap(&mut self, gap: Pt) -> &mut Self {
        self.heading_gap = gap;
        self
    }

    pub fn title_gap(&mut self, gap: Pt) -> &mut Self {
        self.title_gap = gap;
        self
    }

    pub fn section_gap(&mut self, gap: Pt) -> &mut Self {
        self.section_gap = gap;
        self
    }

    pub fn section_min_room(&mut self, room: Pt) -> &mut Self {
        self.section_min_room = room;
        self
    }

    /// Font size for a heading level; level 0 is treated like level 1
    pub fn heading_size(&self, level: u8) -> Pt {
        let index = usize::from(level.clamp(1, 3)) - 1;
        self.heading_sizes[index]
    }

    /// Width available to text between the left and right margins
    pub fn content_width(&self) -> Pt {
        self.page_size.0 - self.margins.left - self.margins.right
    }

    /// Height available between the top and bottom margins
    pub fn content_height(&self) -> Pt {
        self.page_size.1 - self.margins.top - self.margins.bottom
    }

    /// Check the configuration can be laid out at all. Called before any
    /// layout starts so that bad values never surface mid-document
    pub fn validate(&self) -> Result<(), LayoutError> {
        if !self.page_size.0.is_positive() || !self.page_size.1.is_positive() {
            return Err(LayoutError::InvalidConfig("page size must be positive"));
        }
        if !self.margins.is_valid() {
            return Err(LayoutError::InvalidConfig(
                "margins must be finite and not negative",
            ));
        }
        if !self.content_width().is_positive() {
            return Err(LayoutError::InvalidConfig(
                "left and right margins leave no room for content",
            ));
        }
        if !self.content_height().is_positive() {
            return Err(LayoutError::InvalidConfig(
                "top and bottom margins leave no room for content",
            ));
        }
        if !(self.line_spacing.is_finite() && self.line_spacing > 0.0) {
            return Err(LayoutError::InvalidConfig("line spacing must be positive"));
        }
        let sizes = [self.body_size, self.title_size]
            .into_iter()
            .chain(self.heading_sizes);
        if !sizes.into_iter().all(Pt::is_positive) {
            return Err(LayoutError::InvalidConfig("font sizes must be positive"));
        }
        let fraction = self.image_max_height_fraction;
        if !(fraction.is_finite() && fraction > 0.0 && fraction <= 1.0) {
            return Err(LayoutError::InvalidConfig(
                "image height fraction must be within (0, 1]",
            ));
        }
        let spacings = [
            self.quote_indent,
            self.heading_gap,
            self.title_gap,
            self.section_gap,
            self.section_min_room,
        ];
        if !spacings.iter().all(|s| s.0.is_finite() && s.0 >= 0.0) {
            return Err(LayoutError::InvalidConfig(
                "indents and gaps must be finite and not negative",
            ));
        }
        if !(self.content_width() - self.quote_indent).is_positive() {
            return Err(LayoutError::InvalidConfig(
                "quote indent leaves no room for content",
            ));
        }
        Ok(())
    }
}
