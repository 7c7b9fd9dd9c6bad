use page_flow::layout::Margins;
use page_flow::pagesize;
use page_flow::*;

fn main() {
    // pass a .ttf/.otf path to measure with a real font instead of fixed widths
    let font_path = std::env::args().nth(1);

    let mut config = LayoutConfig::new();
    config
        .page_size(pagesize::A6)
        .margins(Margins::all(In(0.25)))
        .body_size(Pt(12.0))
        .heading_sizes([Pt(16.0), Pt(14.0), Pt(12.0)])
        .title_size(Pt(20.0));

    let document = SourceDocument::new(vec![
        Section::new(vec![
            ContentBlock::paragraph("吾輩は猫である。名前はまだ無い。どこで生れたかとんと見当がつかぬ。"),
            ContentBlock::quote(lipsum::lipsum(40)),
            ContentBlock::image(PixelBuffer::from(image::RgbImage::from_pixel(
                320,
                120,
                image::Rgb([200, 80, 40]),
            ))),
        ])
        .title("第一章"),
        Section::new(vec![
            ContentBlock::heading(2, "Mixed scripts"),
            ContentBlock::paragraph(format!("{} 日本語のテキスト {}", lipsum::lipsum(30), lipsum::lipsum(30))),
            ContentBlock::preformatted("fn main() {\n    println!(\"hello\");\n}"),
        ])
        .title("Chapter Two"),
    ])
    .title("Page Flow");

    let mut pages = PagedDocument::new(config.page_size);
    let summary = match font_path {
        Some(path) => {
            let bytes = std::fs::read(&path).expect("can read font file");
            let mut fonts = FontBook::new();
            let font = fonts.add_font_bytes(bytes).expect("can load font");
            let renderer =
                Renderer::new(&config, &fonts, &NoImages, font).expect("valid configuration");
            renderer.render(&document, &mut pages)
        }
        None => {
            let measure = MonospaceMeasure::default();
            let renderer = Renderer::new(&config, &measure, &NoImages, FontId(0))
                .expect("valid configuration");
            renderer.render(&document, &mut pages)
        }
    }
    .expect("can lay out document");

    for (i, page) in pages.iter().enumerate() {
        println!("--- page {} ---", i + 1);
        for contents in page.contents.iter() {
            match contents {
                PageContents::Text(span) => {
                    println!("{:>8} {:>8}  {}", span.coords.0, span.coords.1, span.text)
                }
                PageContents::Image(image) => println!(
                    "{:>8} {:>8}  [image {} x {}]",
                    image.position.x1,
                    image.position.y1,
                    image.position.width(),
                    image.position.height()
                ),
            }
        }
    }
    println!(
        "{} pages, {} lines, {} images ({} skipped)",
        summary.pages, summary.lines, summary.images, summary.skipped_images
    );
}
