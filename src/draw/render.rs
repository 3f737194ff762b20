//! Cairo-based drawing primitives.
//!
//! These functions operate on a borrowed [`cairo::Context`] and never keep it
//! around, so the surface behind the context can be read back once the
//! context is dropped.

use super::color::Color;
use super::font::FontDescriptor;

/// Fills the whole target surface with a solid color.
///
/// Uses the `Source` operator so the previous content is replaced rather
/// than blended, which keeps the result independent of whatever the surface
/// was initialized with.
pub fn fill_background(ctx: &cairo::Context, color: Color) -> Result<(), cairo::Error> {
    ctx.save()?;
    ctx.set_operator(cairo::Operator::Source);
    color.apply(ctx);
    let painted = ctx.paint();
    ctx.restore()?;
    painted
}

/// Renders a single run of text with Pango.
///
/// `(x, y)` is the top-left corner of the text's logical box, the same
/// anchor an image library's "draw text at" call uses. No wrapping, scaling
/// or alignment is applied; the layout is whatever Pango produces for the
/// font description.
///
/// # Arguments
/// * `ctx` - Cairo drawing context to render to
/// * `x` - Left edge of the text box in pixels
/// * `y` - Top edge of the text box in pixels
/// * `text` - Text content to render
/// * `color` - Ink color
/// * `size` - Font size in points
/// * `font` - Font family, weight and style
///
/// # Returns
/// The logical size of the rendered text in pixels as `(width, height)`.
pub fn render_text(
    ctx: &cairo::Context,
    x: i32,
    y: i32,
    text: &str,
    color: Color,
    size: f64,
    font: &FontDescriptor,
) -> Result<(i32, i32), cairo::Error> {
    ctx.save()?;

    // Grayscale AA: subpixel rendering would tint the glyph edges on an
    // opaque RGB target.
    ctx.set_antialias(cairo::Antialias::Gray);

    let layout = pangocairo::functions::create_layout(ctx);
    let font_desc = pango::FontDescription::from_string(&font.to_pango_string(size));
    layout.set_font_description(Some(&font_desc));
    layout.set_text(text);

    let (width, height) = layout.pixel_size();
    log::debug!(
        "Rendering {:?} at ({}, {}) with font '{}' ({}x{} px)",
        text,
        x,
        y,
        font.to_pango_string(size),
        width,
        height
    );

    color.apply(ctx);
    ctx.move_to(x as f64, y as f64);
    pangocairo::functions::show_layout(ctx, &layout);

    ctx.restore()?;
    ctx.status()?;

    Ok((width, height))
}
