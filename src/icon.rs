use image::{Rgba, RgbaImage};

/// Edge length of the master artwork canvas, in pixels.
pub const ART_SIZE: u32 = 32;

const DISC_FILL: Rgba<u8> = Rgba([26, 26, 26, 255]);
const TRIANGLE_FILL: Rgba<u8> = Rgba([255, 255, 255, 255]);
const SPROCKET_FILL: Rgba<u8> = Rgba([136, 136, 136, 255]);

// Film-strip sprocket holes, one 2x2 block per anchor (four per edge).
const SPROCKETS: [(u32, u32); 8] = [
    (4, 6),
    (4, 10),
    (4, 20),
    (4, 24),
    (26, 6),
    (26, 10),
    (26, 20),
    (26, 24),
];

// Generate the play-button favicon artwork (dark disc + white triangle + film strip)
pub fn render_favicon() -> RgbaImage {
    let w = ART_SIZE;
    let h = ART_SIZE;
    let mut img = RgbaImage::new(w, h);
    let cx = (w as f32) * 0.5;
    let cy = (h as f32) * 0.5;
    let radius = (w.min(h) as f32) * 0.5;

    // Play triangle points
    let p1 = (12.0, 8.0);
    let p2 = (12.0, 24.0);
    let p3 = (24.0, 16.0);

    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let px = x as f32 + 0.5;
        let py = y as f32 + 0.5;

        // Background: disc inscribed in the canvas, transparent outside
        let dx = px - cx;
        let dy = py - cy;
        if (dx * dx + dy * dy).sqrt() <= radius {
            *pixel = DISC_FILL;
        }

        // Overlay: white play triangle (barycentric point-in-triangle)
        if point_in_triangle(px, py, p1, p2, p3) {
            *pixel = TRIANGLE_FILL;
        }
    }

    // Sprocket holes go on last and overwrite the disc
    for &(x, y) in &SPROCKETS {
        fill_square(&mut img, x, y, 2, SPROCKET_FILL);
    }

    img
}

fn fill_square(img: &mut RgbaImage, x0: u32, y0: u32, edge: u32, color: Rgba<u8>) {
    for y in y0..(y0 + edge).min(img.height()) {
        for x in x0..(x0 + edge).min(img.width()) {
            img.put_pixel(x, y, color);
        }
    }
}

#[inline]
fn cross(ax: f32, ay: f32, bx: f32, by: f32) -> f32 {
    ax * by - ay * bx
}

fn point_in_triangle(px: f32, py: f32, p1: (f32, f32), p2: (f32, f32), p3: (f32, f32)) -> bool {
    let (x1, y1) = p1;
    let (x2, y2) = p2;
    let (x3, y3) = p3;
    let c1 = cross(x2 - x1, y2 - y1, px - x1, py - y1);
    let c2 = cross(x3 - x2, y3 - y2, px - x2, py - y2);
    let c3 = cross(x1 - x3, y1 - y3, px - x3, py - y3);
    let has_neg = (c1 < 0.0) || (c2 < 0.0) || (c3 < 0.0);
    let has_pos = (c1 > 0.0) || (c2 > 0.0) || (c3 > 0.0);
    !(has_neg && has_pos)
}
