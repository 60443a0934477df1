//! # Canvas - Software Rasterizer
//!
//! A plain RGB24 pixel buffer with the handful of primitives the geometry
//! renderer needs: Bresenham lines, stepped circle outlines, scanline polygon
//! fills, and alpha blending. World coordinates live in the [-2, 2] square
//! and are mapped through a [`Viewport`] that preserves aspect ratio.

use serde::Serialize;

use crate::error::DesignError;

/// An RGB color. Parsed from `#rrggbb` strings wherever the catalogs store
/// hex palettes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` hex string.
    pub fn from_hex(hex: &str) -> Result<Self, DesignError> {
        let digits = hex
            .strip_prefix('#')
            .filter(|d| d.len() == 6)
            .ok_or_else(|| DesignError::InvalidHexColor(hex.to_string()))?;
        let parse = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| DesignError::InvalidHexColor(hex.to_string()))
        };
        Ok(Self {
            r: parse(0..2)?,
            g: parse(2..4)?,
            b: parse(4..6)?,
        })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

// Named colors the renderer uses, matching the plotting library's palette
// the original drawings were authored against.
pub const GOLD: Rgb = Rgb::new(255, 215, 0);
pub const SILVER: Rgb = Rgb::new(192, 192, 192);
pub const WHITE: Rgb = Rgb::new(255, 255, 255);
pub const BLACK: Rgb = Rgb::new(0, 0, 0);
pub const RED: Rgb = Rgb::new(255, 0, 0);
pub const CRIMSON: Rgb = Rgb::new(220, 20, 60);
pub const PURPLE: Rgb = Rgb::new(128, 0, 128);

/// An owned RGB24 raster. Row-major, three bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Raster {
    /// Allocate a raster filled with a background color.
    pub fn new(width: u32, height: u32, background: Rgb) -> Self {
        let mut data = Vec::with_capacity((width * height * 3) as usize);
        for _ in 0..width * height {
            data.extend_from_slice(&[background.r, background.g, background.b]);
        }
        Self {
            width,
            height,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGB24 bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Set a pixel if it is within bounds.
    pub fn put(&mut self, x: i64, y: i64, color: Rgb) {
        if x >= 0 && y >= 0 && x < self.width as i64 && y < self.height as i64 {
            let idx = ((y as u32 * self.width + x as u32) * 3) as usize;
            self.data[idx] = color.r;
            self.data[idx + 1] = color.g;
            self.data[idx + 2] = color.b;
        }
    }

    /// Blend a pixel toward `color` by `alpha` (0.0 keeps the old value).
    pub fn put_blend(&mut self, x: i64, y: i64, color: Rgb, alpha: f64) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let idx = ((y as u32 * self.width + x as u32) * 3) as usize;
        let mix = |old: u8, new: u8| -> u8 {
            (old as f64 * (1.0 - alpha) + new as f64 * alpha).round() as u8
        };
        self.data[idx] = mix(self.data[idx], color.r);
        self.data[idx + 1] = mix(self.data[idx + 1], color.g);
        self.data[idx + 2] = mix(self.data[idx + 2], color.b);
    }

    pub fn get(&self, x: i64, y: i64) -> Option<Rgb> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        let idx = ((y as u32 * self.width + x as u32) * 3) as usize;
        Some(Rgb::new(self.data[idx], self.data[idx + 1], self.data[idx + 2]))
    }

    /// Bresenham line.
    pub fn line(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: Rgb, alpha: f64) {
        let (mut x0, mut y0) = (x0, y0);
        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        loop {
            if alpha >= 1.0 {
                self.put(x0, y0, color);
            } else {
                self.put_blend(x0, y0, color, alpha);
            }
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }

    /// Thick line: a 1px Bresenham line plus perpendicular padding.
    pub fn thick_line(&mut self, x0: i64, y0: i64, x1: i64, y1: i64, color: Rgb, width: u32, alpha: f64) {
        if width <= 1 {
            self.line(x0, y0, x1, y1, color, alpha);
            return;
        }
        let half = (width / 2) as i64;
        let steep = (y1 - y0).abs() > (x1 - x0).abs();
        for off in -half..=half {
            if steep {
                self.line(x0 + off, y0, x1 + off, y1, color, alpha);
            } else {
                self.line(x0, y0 + off, x1, y1 + off, color, alpha);
            }
        }
    }
}

/// Maps world coordinates in the [-2, 2] square onto pixels, preserving
/// aspect by centering the square inside the raster (the plotting library
/// the original used kept a square axes box inside non-square figures).
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    scale: f64,
    cx: f64,
    cy: f64,
}

/// Half-extent of the world square the renderer draws into.
pub const WORLD_EXTENT: f64 = 2.0;

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        let side = width.min(height) as f64;
        Self {
            scale: side / (2.0 * WORLD_EXTENT),
            cx: width as f64 / 2.0,
            cy: height as f64 / 2.0,
        }
    }

    /// World point to pixel coordinates. World y points up; pixel y down.
    pub fn to_pixel(&self, x: f64, y: f64) -> (i64, i64) {
        (
            (self.cx + x * self.scale).round() as i64,
            (self.cy - y * self.scale).round() as i64,
        )
    }

    /// A world-space length in pixels.
    pub fn scale_len(&self, len: f64) -> f64 {
        len * self.scale
    }

    /// Pixel stroke width for a nominal line weight, scaled so weights read
    /// the same at any raster size.
    pub fn stroke(&self, weight: f64) -> u32 {
        ((weight * self.scale / 200.0).round() as u32).max(1)
    }
}

/// World-space drawing helpers layered over [`Raster`] + [`Viewport`].
pub struct Painter<'a> {
    pub raster: &'a mut Raster,
    pub vp: Viewport,
}

impl<'a> Painter<'a> {
    pub fn new(raster: &'a mut Raster, vp: Viewport) -> Self {
        Self { raster, vp }
    }

    /// Circle outline by connecting points around the circumference,
    /// thickened by stepping the radius in half-pixel increments.
    pub fn circle(&mut self, cx: f64, cy: f64, radius: f64, color: Rgb, weight: f64, alpha: f64) {
        let stroke = self.vp.stroke(weight) as i64;
        let r_px = self.vp.scale_len(radius);
        for step in 0..=(stroke * 2) {
            let r = r_px + (step - stroke) as f64 * 0.5;
            self.circle_px(cx, cy, r, color, alpha, false);
        }
    }

    /// Dashed circle outline (used for gate rings).
    pub fn dashed_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Rgb, weight: f64, alpha: f64) {
        let stroke = self.vp.stroke(weight) as i64;
        let r_px = self.vp.scale_len(radius);
        for step in 0..=(stroke * 2) {
            let r = r_px + (step - stroke) as f64 * 0.5;
            self.circle_px(cx, cy, r, color, alpha, true);
        }
    }

    fn circle_px(&mut self, cx: f64, cy: f64, r_px: f64, color: Rgb, alpha: f64, dashed: bool) {
        if r_px <= 0.0 {
            return;
        }
        let steps = ((2.0 * std::f64::consts::PI * r_px).ceil() as usize).max(16);
        let (pcx, pcy) = self.vp.to_pixel(cx, cy);
        let mut prev: Option<(i64, i64)> = None;
        for i in 0..=steps {
            let theta = 2.0 * std::f64::consts::PI * i as f64 / steps as f64;
            let x = pcx + (r_px * theta.cos()).round() as i64;
            let y = pcy + (r_px * theta.sin()).round() as i64;
            // 12 dashes around the ring when dashed
            let on = !dashed || (i * 24 / steps) % 2 == 0;
            if let Some((px, py)) = prev {
                if on {
                    self.raster.line(px, py, x, y, color, alpha);
                }
            }
            prev = Some((x, y));
        }
    }

    /// Filled disc via row scanning.
    pub fn fill_circle(&mut self, cx: f64, cy: f64, radius: f64, color: Rgb, alpha: f64) {
        let (pcx, pcy) = self.vp.to_pixel(cx, cy);
        let r = self.vp.scale_len(radius);
        let r_i = r.ceil() as i64;
        for dy in -r_i..=r_i {
            let span = (r * r - (dy * dy) as f64).max(0.0).sqrt();
            let half = span.round() as i64;
            for dx in -half..=half {
                if alpha >= 1.0 {
                    self.raster.put(pcx + dx, pcy + dy, color);
                } else {
                    self.raster.put_blend(pcx + dx, pcy + dy, color, alpha);
                }
            }
        }
    }

    /// Straight segment between world points.
    pub fn segment(&mut self, a: (f64, f64), b: (f64, f64), color: Rgb, weight: f64, alpha: f64) {
        let (x0, y0) = self.vp.to_pixel(a.0, a.1);
        let (x1, y1) = self.vp.to_pixel(b.0, b.1);
        self.raster
            .thick_line(x0, y0, x1, y1, color, self.vp.stroke(weight), alpha);
    }

    /// Closed polygon outline.
    pub fn polygon(&mut self, points: &[(f64, f64)], color: Rgb, weight: f64, alpha: f64) {
        for i in 0..points.len() {
            let j = (i + 1) % points.len();
            self.segment(points[i], points[j], color, weight, alpha);
        }
    }

    /// Even-odd scanline polygon fill.
    pub fn fill_polygon(&mut self, points: &[(f64, f64)], color: Rgb, alpha: f64) {
        if points.len() < 3 {
            return;
        }
        let px: Vec<(f64, f64)> = points
            .iter()
            .map(|&(x, y)| {
                let (a, b) = self.vp.to_pixel(x, y);
                (a as f64, b as f64)
            })
            .collect();
        let y_min = px.iter().map(|p| p.1).fold(f64::INFINITY, f64::min).floor() as i64;
        let y_max = px.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max).ceil() as i64;
        for y in y_min..=y_max {
            let yf = y as f64 + 0.5;
            let mut xs: Vec<f64> = Vec::new();
            for i in 0..px.len() {
                let (x0, y0) = px[i];
                let (x1, y1) = px[(i + 1) % px.len()];
                if (y0 <= yf && y1 > yf) || (y1 <= yf && y0 > yf) {
                    xs.push(x0 + (yf - y0) / (y1 - y0) * (x1 - x0));
                }
            }
            xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
            for pair in xs.chunks(2) {
                if let [start, end] = pair {
                    for x in start.round() as i64..=end.round() as i64 {
                        if alpha >= 1.0 {
                            self.raster.put(x, y, color);
                        } else {
                            self.raster.put_blend(x, y, color, alpha);
                        }
                    }
                }
            }
        }
    }

    /// Polyline through world points.
    pub fn polyline(&mut self, points: &[(f64, f64)], color: Rgb, weight: f64, alpha: f64) {
        for pair in points.windows(2) {
            self.segment(pair[0], pair[1], color, weight, alpha);
        }
    }

    /// Axis-aligned rectangle outline centered on (cx, cy).
    pub fn rect(&mut self, cx: f64, cy: f64, w: f64, h: f64, color: Rgb, weight: f64, alpha: f64) {
        let (hw, hh) = (w / 2.0, h / 2.0);
        self.polygon(
            &[
                (cx - hw, cy - hh),
                (cx + hw, cy - hh),
                (cx + hw, cy + hh),
                (cx - hw, cy + hh),
            ],
            color,
            weight,
            alpha,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parse_roundtrip() {
        let c = Rgb::from_hex("#daa520").unwrap();
        assert_eq!(c, Rgb::new(0xda, 0xa5, 0x20));
        assert_eq!(c.to_hex(), "#daa520");
    }

    #[test]
    fn test_hex_parse_rejects_garbage() {
        assert!(Rgb::from_hex("daa520").is_err());
        assert!(Rgb::from_hex("#daa5").is_err());
        assert!(Rgb::from_hex("#zzzzzz").is_err());
    }

    #[test]
    fn test_raster_shape_and_background() {
        let r = Raster::new(20, 10, WHITE);
        assert_eq!(r.data().len(), 20 * 10 * 3);
        assert_eq!(r.get(0, 0), Some(WHITE));
        assert_eq!(r.get(19, 9), Some(WHITE));
        assert_eq!(r.get(20, 0), None);
    }

    #[test]
    fn test_put_is_bounds_checked() {
        let mut r = Raster::new(4, 4, BLACK);
        r.put(-1, 0, GOLD);
        r.put(0, 99, GOLD);
        assert!(r.data().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_line_endpoints_painted() {
        let mut r = Raster::new(10, 10, BLACK);
        r.line(0, 0, 9, 9, GOLD, 1.0);
        assert_eq!(r.get(0, 0), Some(GOLD));
        assert_eq!(r.get(9, 9), Some(GOLD));
        assert_eq!(r.get(5, 5), Some(GOLD));
    }

    #[test]
    fn test_viewport_centers_world_origin() {
        let vp = Viewport::new(100, 100);
        assert_eq!(vp.to_pixel(0.0, 0.0), (50, 50));
        // world y up maps to pixel y down
        let (_, top) = vp.to_pixel(0.0, 2.0);
        assert!(top < 50);
    }

    #[test]
    fn test_viewport_preserves_aspect() {
        let vp = Viewport::new(200, 100);
        // the world square must fit the short side
        let (x0, _) = vp.to_pixel(-2.0, 0.0);
        let (x1, _) = vp.to_pixel(2.0, 0.0);
        assert_eq!((x1 - x0) as u32, 100);
    }

    #[test]
    fn test_fill_polygon_paints_interior() {
        let mut r = Raster::new(40, 40, BLACK);
        let vp = Viewport::new(40, 40);
        let mut p = Painter::new(&mut r, vp);
        p.fill_polygon(&[(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)], GOLD, 1.0);
        assert_eq!(r.get(20, 20), Some(GOLD));
        assert_eq!(r.get(1, 1), Some(BLACK));
    }

    #[test]
    fn test_blend_moves_halfway() {
        let mut r = Raster::new(2, 2, BLACK);
        r.put_blend(0, 0, WHITE, 0.5);
        let c = r.get(0, 0).unwrap();
        assert!(c.r > 120 && c.r < 135);
    }
}
