use page_flow::layout::Margins;
use page_flow::*;

// 200x100 page with 10pt margins and 10pt text at 1.0 line spacing: lines
// are 10pt apart, eight fit on a page, and a line holds 36 narrow characters
fn small_pages() -> LayoutConfig {
    LayoutConfig::new()
        .page_size((Pt(200.0), Pt(100.0)))
        .margins(Margins::all(Pt(10.0)))
        .line_spacing(1.0)
        .body_size(Pt(10.0))
        .heading_sizes([Pt(10.0); 3])
        .title_size(Pt(10.0))
        .heading_gap(Pt(0.0))
        .title_gap(Pt(0.0))
        .section_gap(Pt(0.0))
        .section_min_room(Pt(0.0))
        .clone()
}

fn page_breaks(commands: &[DrawCommand]) -> Vec<usize> {
    commands
        .iter()
        .enumerate()
        .filter(|(_, c)| matches!(c, DrawCommand::StartPage))
        .map(|(i, _)| i)
        .collect()
}

#[test]
fn paragraph_breaks_once_at_the_first_line_that_does_not_fit() {
    let config = small_pages();
    let measure = MonospaceMeasure::default();
    let renderer = Renderer::new(&config, &measure, &NoImages, FontId(0)).unwrap();

    // seven 4-character words per 36-character line, ten lines in total
    let words: Vec<String> = (0..70).map(|i| format!("w{i:03}")).collect();
    let blocks = [
        ContentBlock::preformatted("a\nb\nc\nd\ne"),
        ContentBlock::paragraph(words.join(" ")),
    ];

    let mut commands: Vec<DrawCommand> = Vec::new();
    let summary = renderer.render_blocks(&blocks, &mut commands).unwrap();
    assert_eq!(summary.pages, 2);
    assert_eq!(summary.lines, 15);

    let breaks = page_breaks(&commands);
    assert_eq!(breaks.len(), 2);
    assert_eq!(breaks[0], 0);
    // five preformatted lines and three paragraph lines fill the first page
    assert_eq!(breaks[1], 9);
    match &commands[10] {
        DrawCommand::Text { text, y, .. } => {
            assert_eq!(text, "w021 w022 w023 w024 w025 w026 w027");
            assert_eq!(*y, Pt(80.0));
        }
        other => panic!("expected the fourth paragraph line, got {other:?}"),
    }
    match &commands[8] {
        DrawCommand::Text { text, y, .. } => {
            assert_eq!(text, "w014 w015 w016 w017 w018 w019 w020");
            assert_eq!(*y, Pt(10.0));
        }
        other => panic!("expected the third paragraph line, got {other:?}"),
    }
}

#[test]
fn every_block_produces_output() {
    let config = small_pages();
    let measure = MonospaceMeasure::default();
    let renderer = Renderer::new(&config, &measure, &NoImages, FontId(0)).unwrap();

    let blocks = vec![
        ContentBlock::heading(1, "Heading"),
        ContentBlock::paragraph("Paragraph"),
        ContentBlock::quote("Quote"),
        ContentBlock::preformatted("Pre\nformatted"),
        ContentBlock::image(PixelBuffer::from(image::RgbImage::new(8, 4))),
        ContentBlock::paragraph("語"),
    ];
    for block in blocks {
        let mut commands: Vec<DrawCommand> = Vec::new();
        renderer
            .render_blocks(std::slice::from_ref(&block), &mut commands)
            .unwrap();
        assert!(
            commands.iter().any(|c| !matches!(c, DrawCommand::StartPage)),
            "{block:?} produced nothing"
        );
    }
}

#[test]
fn narrow_pages_still_draw_wide_characters() {
    // 12pt of content width, narrower than one 20pt ideograph
    let mut config = small_pages();
    config
        .page_size((Pt(32.0), Pt(100.0)))
        .body_size(Pt(20.0));
    let measure = MonospaceMeasure::default();
    let renderer = Renderer::new(&config, &measure, &NoImages, FontId(0)).unwrap();

    let mut commands: Vec<DrawCommand> = Vec::new();
    renderer
        .render_blocks(&[ContentBlock::paragraph("語")], &mut commands)
        .unwrap();
    assert!(matches!(&commands[1], DrawCommand::Text { text, .. } if text == "語"));
}

#[test]
fn wide_images_are_scaled_to_the_content_width() {
    let mut config = LayoutConfig::new();
    config
        .page_size((Pt(500.0), Pt(800.0)))
        .margins(Margins::empty())
        .image_max_height_fraction(0.98);
    let measure = MonospaceMeasure::default();
    let renderer = Renderer::new(&config, &measure, &NoImages, FontId(0)).unwrap();

    let image = PixelBuffer::from(image::RgbImage::new(2000, 1000));
    let mut commands: Vec<DrawCommand> = Vec::new();
    let summary = renderer
        .render_blocks(&[ContentBlock::image(image)], &mut commands)
        .unwrap();
    assert_eq!(summary.images, 1);
    match &commands[1] {
        DrawCommand::Image { position, image } => {
            assert_eq!(position.width(), Pt(500.0));
            assert_eq!(position.height(), Pt(250.0));
            assert_eq!(position.x1, Pt(0.0));
            assert_eq!(position.y2, Pt(800.0));
            assert_eq!(image.width(), 2000);
        }
        other => panic!("expected an image, got {other:?}"),
    }
}

#[test]
fn images_that_do_not_fit_move_to_the_next_page() {
    let config = small_pages();
    let measure = MonospaceMeasure::default();
    let renderer = Renderer::new(&config, &measure, &NoImages, FontId(0)).unwrap();

    // 180x45 once scaled to the content width
    let blocks = [
        ContentBlock::preformatted("1\n2\n3\n4"),
        ContentBlock::image(PixelBuffer::from(image::RgbImage::new(40, 10))),
    ];
    let mut commands: Vec<DrawCommand> = Vec::new();
    renderer.render_blocks(&blocks, &mut commands).unwrap();

    assert_eq!(page_breaks(&commands), [0, 5]);
    match &commands[6] {
        DrawCommand::Image { position, .. } => {
            assert_eq!(position.width(), Pt(180.0));
            assert_eq!(position.y2, Pt(90.0));
            assert_eq!(position.y1, Pt(45.0));
        }
        other => panic!("expected an image, got {other:?}"),
    }
}

#[test]
fn cursor_never_moves_up_within_a_page() {
    let config = small_pages();
    let measure = MonospaceMeasure::default();
    let renderer = Renderer::new(&config, &measure, &NoImages, FontId(0)).unwrap();

    let blocks = [
        ContentBlock::paragraph(lipsum::lipsum(300)),
        ContentBlock::image(PixelBuffer::from(image::RgbImage::new(30, 10))),
        ContentBlock::paragraph("吾輩は猫である。名前はまだ無い。どこで生れたかとんと見当がつかぬ。".repeat(6)),
    ];
    let mut commands: Vec<DrawCommand> = Vec::new();
    let summary = renderer.render_blocks(&blocks, &mut commands).unwrap();
    assert!(summary.pages > 3);

    let mut last_bottom: Option<Pt> = None;
    for command in &commands {
        let (top, bottom) = match command {
            DrawCommand::StartPage => {
                last_bottom = None;
                continue;
            }
            DrawCommand::Text { y, size, .. } => (*y + *size, *y),
            DrawCommand::Image { position, .. } => (position.y2, position.y1),
        };
        assert!(bottom >= Pt(10.0), "{command:?} crosses the bottom margin");
        assert!(top <= Pt(90.0), "{command:?} crosses the top margin");
        if let Some(previous) = last_bottom {
            assert!(top <= previous, "{command:?} moved back up the page");
        }
        last_bottom = Some(bottom);
    }
}

#[test]
fn renders_through_a_trait_object() {
    let config = small_pages();
    let measure = MonospaceMeasure::default();
    let renderer = Renderer::new(&config, &measure, &NoImages, FontId(0)).unwrap();

    let mut commands: Vec<DrawCommand> = Vec::new();
    let sink: &mut dyn PageSink = &mut commands;
    renderer
        .render_blocks(&[ContentBlock::paragraph("dyn")], sink)
        .unwrap();
    assert_eq!(commands.len(), 2);
}
