use crate::units::Pt;

/// The size an image is drawn at
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ImageScale {
    pub scale: f32,
    pub width: Pt,
    pub height: Pt,
}

/// Scale an image of `intrinsic` pixel size (one pixel is drawn as one point at
/// scale 1.0) so that it is no wider than `max_width` and no taller than
/// `max_height_fraction` of `page_height`, keeping its aspect ratio.
///
/// The image is enlarged when both limits allow it, unless `allow_upscale`
/// is false, in which case the scale is capped at 1.0. Returns [None] for an
/// image with a zero dimension, which cannot be placed.
pub fn scale_image(
    intrinsic: (u32, u32),
    max_width: Pt,
    page_height: Pt,
    max_height_fraction: f32,
    allow_upscale: bool,
) -> Option<ImageScale> {
    let (width, height) = intrinsic;
    if width == 0 || height == 0 {
        return None;
    }
    let (width, height) = (width as f32, height as f32);

    let by_width = max_width.0 / width;
    let by_height = (page_height.0 * max_height_fraction) / height;
    let mut scale = by_width.min(by_height);
    if !allow_upscale {
        scale = scale.min(1.0);
    }

    Some(ImageScale {
        scale,
        width: Pt(width * scale),
        height: Pt(height * scale),
    })
}
