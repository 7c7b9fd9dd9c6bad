use crate::error::LayoutError;
use image::{DynamicImage, RgbImage};
use std::collections::HashMap;

/// A decoded raster image, ready to be placed on a page. Always RGB8; the
/// alpha channel of decoded images is dropped.
#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    pixels: RgbImage,
}

impl PixelBuffer {
    /// Decode an encoded image (PNG, JPEG, GIF, ...) from memory
    pub fn decode(data: &[u8]) -> Result<PixelBuffer, LayoutError> {
        let format = image::guess_format(data)?;
        let image = image::load_from_memory_with_format(data, format)?;
        Ok(PixelBuffer::from_image(image))
    }

    pub fn from_image(image: DynamicImage) -> PixelBuffer {
        PixelBuffer {
            pixels: image.to_rgb8(),
        }
    }

    /// Intrinsic width in pixels
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Intrinsic height in pixels
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbImage {
        &self.pixels
    }
}

impl From<RgbImage> for PixelBuffer {
    fn from(pixels: RgbImage) -> Self {
        PixelBuffer { pixels }
    }
}

/// Outcome of looking up an image reference
#[derive(Debug)]
pub enum Resolved {
    Found(PixelBuffer),
    NotFound,
}

/// Turns the image references found in a document into pixel data. Supplied
/// by whatever extracted the content blocks.
pub trait ImageResolver {
    /// Resolve `src`, as written in the document. `relative_to` is the path of
    /// the section the reference appears in, if known.
    fn resolve(&self, src: &str, relative_to: Option<&str>) -> Resolved;
}

/// A resolver that never finds anything; for documents without images
#[derive(Debug, Default, Clone, Copy)]
pub struct NoImages;

impl ImageResolver for NoImages {
    fn resolve(&self, _src: &str, _relative_to: Option<&str>) -> Resolved {
        Resolved::NotFound
    }
}

/// Encoded images held in memory, keyed by their path inside the document
/// container (e.g. `OEBPS/images/cover.jpg`). Images are decoded on every
/// lookup, so nothing decoded outlives the block it is drawn for.
#[derive(Debug, Default, Clone)]
pub struct InMemoryImages {
    images: HashMap<String, Vec<u8>>,
}

impl InMemoryImages {
    pub fn new() -> InMemoryImages {
        InMemoryImages::default()
    }

    pub fn insert<S: ToString>(&mut self, path: S, data: Vec<u8>) -> &mut Self {
        self.images.insert(path.to_string(), data);
        self
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    fn lookup(&self, src: &str, relative_to: Option<&str>) -> Option<&[u8]> {
        if let Some(data) = self.images.get(src) {
            return Some(data);
        }
        let base = relative_to?;
        let dir = base.rsplit_once('/').map(|(dir, _)| dir).unwrap_or("");
        let joined = normalize_path(&format!("{dir}/{src}"));
        self.images.get(&joined).map(Vec::as_slice)
    }
}

impl ImageResolver for InMemoryImages {
    fn resolve(&self, src: &str, relative_to: Option<&str>) -> Resolved {
        let Some(data) = self.lookup(src, relative_to) else {
            return Resolved::NotFound;
        };
        match PixelBuffer::decode(data) {
            Ok(buffer) => Resolved::Found(buffer),
            Err(e) => {
                log::warn!("image {src:?} could not be decoded: {e}");
                Resolved::NotFound
            }
        }
    }
}

/// Collapse `.` and `..` segments and backslashes in a container path
fn normalize_path(path: &str) -> String {
    let path = path.replace('\\', "/");
    let mut parts: Vec<&str> = Vec::new();
    for part in path.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            part => parts.push(part),
        }
    }
    parts.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageOutputFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 128]));
        let mut out = Cursor::new(Vec::new());
        DynamicImage::ImageRgba8(img)
            .write_to(&mut out, ImageOutputFormat::Png)
            .expect("can encode png");
        out.into_inner()
    }

    #[test]
    fn decodes_to_rgb() {
        let buffer = PixelBuffer::decode(&png(4, 3)).unwrap();
        assert_eq!((buffer.width(), buffer.height()), (4, 3));
        assert_eq!(buffer.pixels().get_pixel(0, 0).0, [10, 20, 30]);
    }

    #[test]
    fn undecodable_bytes_are_an_error() {
        assert!(matches!(
            PixelBuffer::decode(b"not an image"),
            Err(LayoutError::Image(_))
        ));
    }

    #[test]
    fn normalizes_relative_paths() {
        assert_eq!(normalize_path("OEBPS/text/../images/a.png"), "OEBPS/images/a.png");
        assert_eq!(normalize_path("./a/./b\\c.png"), "a/b/c.png");
        assert_eq!(normalize_path("/images/x.png"), "images/x.png");
    }

    #[test]
    fn resolves_direct_then_relative() {
        let mut images = InMemoryImages::new();
        images
            .insert("cover.png", png(2, 2))
            .insert("OEBPS/images/fig.png", png(3, 1));

        assert!(matches!(images.resolve("cover.png", None), Resolved::Found(_)));
        match images.resolve("../images/fig.png", Some("OEBPS/text/ch1.xhtml")) {
            Resolved::Found(buffer) => assert_eq!(buffer.width(), 3),
            Resolved::NotFound => panic!("relative reference should resolve"),
        }
        assert!(matches!(
            images.resolve("../images/fig.png", None),
            Resolved::NotFound
        ));
        assert!(matches!(images.resolve("missing.png", Some("a.xhtml")), Resolved::NotFound));
    }

    #[test]
    fn corrupt_images_are_not_found() {
        let mut images = InMemoryImages::new();
        images.insert("broken.png", b"\x89PNG garbage".to_vec());
        assert!(matches!(images.resolve("broken.png", None), Resolved::NotFound));
        assert!(matches!(NoImages.resolve("broken.png", None), Resolved::NotFound));
    }
}
