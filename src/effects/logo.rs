use crate::assets::ingest::DecodedLogo;
use crate::effects::blend::{BlendMode, Rgba8, blend_pixel, over};
use crate::foundation::core::{
    LogoScale, PLACEMENT_RANGE, PixelBuffer, Placement, Point, Rect,
};
use crate::foundation::math::smoothstep;

/// Logo width in canvas pixels per unit of scale, before the floor and cap.
const LOGO_BASE_PX: f64 = 200.0;

/// Smallest rendered logo width in canvas pixels.
const LOGO_MIN_PX: f64 = 80.0;

/// Rendered logo width never exceeds this fraction of the canvas width.
const LOGO_MAX_FRAC: f64 = 0.4;

const PANEL_PADDING_PX: f64 = 10.0;
const PANEL_RADIUS_PX: f64 = 8.0;
const PANEL_COLOR: Rgba8 = [255, 255, 255, 184];

const SHADOW_OFFSET: (f64, f64) = (3.0, 4.0);
const SHADOW_COLOR: Rgba8 = [0, 0, 0, 89];
const SHADOW_FEATHER_PX: f64 = 6.0;

const LOGO_OPACITY: f32 = 0.85;
const EMBOSS_OPACITY: f32 = 0.20;
const EMBOSS_OFFSET_PX: f64 = 1.0;

/// Map a normalized placement to the canvas-space logo center.
///
/// The vertical axis is inverted: positive placement `y` moves the logo up,
/// toward lower pixel rows.
pub(crate) fn logo_anchor_px(placement: Placement, width: u32, height: u32) -> Point {
    let span = 2.0 * PLACEMENT_RANGE;
    Point::new(
        ((placement.x + PLACEMENT_RANGE) / span) * f64::from(width),
        ((PLACEMENT_RANGE - placement.y) / span) * f64::from(height),
    )
}

/// Rendered logo width in canvas pixels for a given scale.
pub(crate) fn logo_pixel_width(scale: LogoScale, canvas_width: u32) -> f64 {
    (scale.value() * LOGO_BASE_PX)
        .max(LOGO_MIN_PX)
        .min(LOGO_MAX_FRAC * f64::from(canvas_width))
}

/// Composite the logo onto the fabric bitmap.
///
/// Fixed layer recipe: soft drop shadow, semi-transparent rounded backing
/// panel (logo box plus 10 px padding), the logo at multiply 85 %, then the
/// same logo offset by one pixel at overlay 20 % for an embossed edge.
pub(crate) fn composite_logo(
    buf: &mut PixelBuffer,
    logo: &DecodedLogo,
    placement: Placement,
    scale: LogoScale,
) {
    if logo.width == 0 || logo.height == 0 {
        return;
    }

    let anchor = logo_anchor_px(placement, buf.width(), buf.height());
    let logo_w = logo_pixel_width(scale, buf.width());
    let logo_h = logo_w * logo.aspect();
    let logo_rect = Rect::new(
        anchor.x - logo_w / 2.0,
        anchor.y - logo_h / 2.0,
        anchor.x + logo_w / 2.0,
        anchor.y + logo_h / 2.0,
    );
    let panel_rect = logo_rect.inflate(PANEL_PADDING_PX, PANEL_PADDING_PX);

    let shadow_rect = Rect::new(
        panel_rect.x0 + SHADOW_OFFSET.0,
        panel_rect.y0 + SHADOW_OFFSET.1,
        panel_rect.x1 + SHADOW_OFFSET.0,
        panel_rect.y1 + SHADOW_OFFSET.1,
    );
    fill_rounded_rect(buf, shadow_rect, PANEL_RADIUS_PX, SHADOW_COLOR, SHADOW_FEATHER_PX);
    fill_rounded_rect(buf, panel_rect, PANEL_RADIUS_PX, PANEL_COLOR, 1.0);

    draw_logo_pass(buf, logo, logo_rect, BlendMode::Multiply, LOGO_OPACITY);

    let emboss_rect = Rect::new(
        logo_rect.x0 + EMBOSS_OFFSET_PX,
        logo_rect.y0 + EMBOSS_OFFSET_PX,
        logo_rect.x1 + EMBOSS_OFFSET_PX,
        logo_rect.y1 + EMBOSS_OFFSET_PX,
    );
    draw_logo_pass(buf, logo, emboss_rect, BlendMode::Overlay, EMBOSS_OPACITY);
}

/// Signed distance from `(x, y)` to a rounded rectangle's edge; negative
/// inside.
fn rounded_rect_dist(rect: Rect, radius: f64, x: f64, y: f64) -> f64 {
    let radius = radius.min(rect.width() / 2.0).min(rect.height() / 2.0);
    let cx = (rect.x0 + rect.x1) / 2.0;
    let cy = (rect.y0 + rect.y1) / 2.0;
    let half_w = rect.width() / 2.0 - radius;
    let half_h = rect.height() / 2.0 - radius;

    let qx = ((x - cx).abs() - half_w).max(0.0);
    let qy = ((y - cy).abs() - half_h).max(0.0);
    let outside = (qx * qx + qy * qy).sqrt();
    let inside = ((x - cx).abs() - half_w).max((y - cy).abs() - half_h).min(0.0);
    outside + inside - radius
}

fn fill_rounded_rect(buf: &mut PixelBuffer, rect: Rect, radius: f64, color: Rgba8, feather: f64) {
    let feather = feather.max(0.5);
    let x0 = (rect.x0 - feather).floor().max(0.0) as u32;
    let y0 = (rect.y0 - feather).floor().max(0.0) as u32;
    let x1 = ((rect.x1 + feather).ceil() as i64).clamp(0, i64::from(buf.width())) as u32;
    let y1 = ((rect.y1 + feather).ceil() as i64).clamp(0, i64::from(buf.height())) as u32;

    for y in y0..y1 {
        for x in x0..x1 {
            let d = rounded_rect_dist(rect, radius, f64::from(x) + 0.5, f64::from(y) + 0.5);
            let coverage = 1.0 - smoothstep(0.0, feather, d);
            if coverage <= 0.0 {
                continue;
            }
            let dst = buf.pixel(x, y);
            let out = over(dst, color, coverage as f32);
            buf.put_pixel(x, y, out);
        }
    }
}

fn draw_logo_pass(
    buf: &mut PixelBuffer,
    logo: &DecodedLogo,
    dst: Rect,
    mode: BlendMode,
    opacity: f32,
) {
    if dst.width() <= 0.0 || dst.height() <= 0.0 {
        return;
    }
    let x0 = dst.x0.floor().max(0.0) as u32;
    let y0 = dst.y0.floor().max(0.0) as u32;
    let x1 = (dst.x1.ceil() as i64).clamp(0, i64::from(buf.width())) as u32;
    let y1 = (dst.y1.ceil() as i64).clamp(0, i64::from(buf.height())) as u32;

    for y in y0..y1 {
        for x in x0..x1 {
            let u = (f64::from(x) + 0.5 - dst.x0) / dst.width() * f64::from(logo.width) - 0.5;
            let v = (f64::from(y) + 0.5 - dst.y0) / dst.height() * f64::from(logo.height) - 0.5;
            let src = sample_bilinear(logo, u, v);
            if src[3] == 0 {
                continue;
            }
            let out = blend_pixel(buf.pixel(x, y), src, mode, opacity);
            buf.put_pixel(x, y, out);
        }
    }
}

/// Bilinear sample in source pixel coordinates, edges clamped.
fn sample_bilinear(logo: &DecodedLogo, u: f64, v: f64) -> Rgba8 {
    let max_x = logo.width - 1;
    let max_y = logo.height - 1;

    let fx = u.clamp(0.0, f64::from(max_x));
    let fy = v.clamp(0.0, f64::from(max_y));
    let x0 = fx.floor() as u32;
    let y0 = fy.floor() as u32;
    let x1 = (x0 + 1).min(max_x);
    let y1 = (y0 + 1).min(max_y);
    let tx = fx - f64::from(x0);
    let ty = fy - f64::from(y0);

    let p00 = logo.sample(x0, y0);
    let p10 = logo.sample(x1, y0);
    let p01 = logo.sample(x0, y1);
    let p11 = logo.sample(x1, y1);

    let mut out = [0u8; 4];
    for i in 0..4 {
        let top = f64::from(p00[i]) + (f64::from(p10[i]) - f64::from(p00[i])) * tx;
        let bot = f64::from(p01[i]) + (f64::from(p11[i]) - f64::from(p01[i])) * tx;
        out[i] = (top + (bot - top) * ty).round().clamp(0.0, 255.0) as u8;
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/effects/logo.rs"]
mod tests;
