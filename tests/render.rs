use canvas_demo::canvas::TextSpec;
use canvas_demo::{CanvasSpec, PixelFormat, Rgb, create_image, render_scene};

const WHITE: Rgb = Rgb::new(255, 255, 255);

#[test]
fn demo_canvas_is_300_square_rgb() {
    let raster = create_image().unwrap();
    assert_eq!((raster.width(), raster.height()), (300, 300));
    assert_eq!(raster.format(), PixelFormat::Rgb24);
    assert_eq!(raster.format().bits_per_pixel(), 24);
}

#[test]
fn corners_keep_the_background() {
    let mut raster = create_image().unwrap();
    assert_eq!(raster.pixel(0, 0).unwrap(), Some(WHITE));
    assert_eq!(raster.pixel(299, 299).unwrap(), Some(WHITE));
}

#[test]
fn ink_appears_near_the_text_origin() {
    let mut raster = create_image().unwrap();
    let pixels = raster.pixels().unwrap();

    let inked = (10..40u32)
        .flat_map(|y| (10..160u32).map(move |x| (x, y)))
        .any(|(x, y)| pixels[(y * 300 + x) as usize] != WHITE);
    assert!(inked, "expected text pixels near (10, 10)");
}

#[test]
fn nothing_is_drawn_above_or_left_of_the_origin() {
    let mut raster = create_image().unwrap();
    let pixels = raster.pixels().unwrap();

    let top_band_clean = pixels[..300 * 5].iter().all(|p| *p == WHITE);
    let left_band_clean = (0..300usize)
        .all(|y| pixels[y * 300..y * 300 + 5].iter().all(|p| *p == WHITE));
    assert!(top_band_clean);
    assert!(left_band_clean);
}

#[test]
fn repeated_calls_are_independent_and_identical() {
    let mut first = create_image().unwrap();
    let mut second = create_image().unwrap();
    assert_eq!(first.pixels().unwrap(), second.pixels().unwrap());

    // Drawing on one raster must not affect the other.
    first
        .draw(|ctx| {
            ctx.set_source_rgb(1.0, 0.0, 0.0);
            ctx.rectangle(250.0, 250.0, 10.0, 10.0);
            ctx.fill()
        })
        .unwrap();
    assert_eq!(first.pixel(255, 255).unwrap(), Some(Rgb::new(255, 0, 0)));
    assert_eq!(second.pixel(255, 255).unwrap(), Some(WHITE));
}

#[test]
fn text_color_comes_from_the_scene() {
    let spec = CanvasSpec {
        text: TextSpec {
            color: canvas_demo::draw::RED,
            size: 24.0,
            ..TextSpec::default()
        },
        ..CanvasSpec::default()
    };
    let mut raster = render_scene(&spec).unwrap();
    let pixels = raster.pixels().unwrap();

    assert!(pixels.iter().any(|p| p.r > 200 && p.g < 60 && p.b < 60));
    assert!(!pixels.iter().any(|p| *p == Rgb::new(0, 0, 0)));
}

#[test]
fn png_export_decodes_to_the_same_size() {
    let raster = create_image().unwrap();
    let png = raster.to_png().unwrap();

    let surface = cairo::ImageSurface::create_from_png(&mut png.as_slice()).unwrap();
    assert_eq!(surface.width(), 300);
    assert_eq!(surface.height(), 300);
}
