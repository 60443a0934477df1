//! # Geometry Renderer
//!
//! Rasterizes sacred geometry presets into RGB buffers. Each [`GeometryKind`]
//! has a draw routine working in the [-2, 2] world square on a white
//! background. Kinds without a drawing routine produce a background-only
//! raster and a warning, so every registered preset still yields a raster of
//! the requested size.

use std::collections::HashMap;

use tracing::warn;

use crate::design::canvas::{
    Painter, Raster, Rgb, Viewport, BLACK, CRIMSON, GOLD, PURPLE, RED, SILVER, WHITE,
};
use crate::design::geometry::{GeometryKind, SacredGeometry};
use crate::error::DesignError;

/// Render a registered geometry preset at `(width, height)`.
pub fn generate_sacred_geometry(
    geometries: &HashMap<&'static str, SacredGeometry>,
    name: &str,
    size: (u32, u32),
) -> Result<Raster, DesignError> {
    let geometry = geometries
        .get(name)
        .ok_or_else(|| DesignError::UnknownGeometry(name.to_string()))?;
    let (width, height) = size;
    let mut raster = Raster::new(width, height, WHITE);
    let mut painter = Painter::new(&mut raster, Viewport::new(width, height));

    match geometry.kind {
        GeometryKind::CirclePattern { circles, radius, .. } => {
            draw_circle_pattern(&mut painter, circles, radius)
        }
        GeometryKind::SpiralPattern { ratio, turns } => {
            draw_golden_spiral(&mut painter, ratio, turns)
        }
        GeometryKind::TriangularMandala { upward, downward } => {
            draw_sri_yantra(&mut painter, upward, downward)
        }
        GeometryKind::TetrahedronStar { scale } => draw_merkaba(&mut painter, scale),
        GeometryKind::LensPattern { radius, separation } => {
            draw_vesica_piscis(&mut painter, radius, separation)
        }
        GeometryKind::ReversedTree { .. } => draw_achad_tree(&mut painter),
        GeometryKind::AbyssCrossing { gate_points } => {
            draw_oath_abyss_sigil(&mut painter, gate_points)
        }
        GeometryKind::CubicLetters { mother, double, single } => {
            draw_qblh_cube(&mut painter, mother, double, single)
        }
        GeometryKind::PolyhedricPattern { .. } | GeometryKind::SphericalNetwork { .. } => {
            warn!(geometry = geometry.name, "no drawing routine for geometry kind");
        }
    }
    Ok(raster)
}

/// Rings of overlapping circles. 19 circles draws the Flower of Life
/// (1 + 6 + 12); 7 the Seed of Life (1 + 6).
fn draw_circle_pattern(p: &mut Painter, circles: u32, radius: f64) {
    p.circle(0.0, 0.0, radius, GOLD, 2.0, 1.0);
    for i in 0..6 {
        let angle = i as f64 * std::f64::consts::PI / 3.0;
        p.circle(radius * angle.cos(), radius * angle.sin(), radius, GOLD, 2.0, 1.0);
    }
    if circles > 7 {
        for i in 0..12 {
            let angle = i as f64 * std::f64::consts::PI / 6.0;
            p.circle(
                2.0 * radius * angle.cos(),
                2.0 * radius * angle.sin(),
                radius,
                GOLD,
                1.5,
                1.0,
            );
        }
    }
}

/// Logarithmic spiral normalized to fill the frame, plus nested golden
/// rectangles.
fn draw_golden_spiral(p: &mut Painter, ratio: f64, turns: u32) {
    let steps = 1000;
    let theta_max = turns as f64 * 2.0 * std::f64::consts::PI;
    let growth = ratio.ln() / (2.0 * std::f64::consts::PI);
    let max_r = (theta_max * growth).exp();

    let mut points = Vec::with_capacity(steps);
    for i in 0..steps {
        let theta = theta_max * i as f64 / (steps - 1) as f64;
        let r = (theta * growth).exp() / max_r * 1.8;
        points.push((r * theta.cos(), r * theta.sin()));
    }
    p.polyline(&points, GOLD, 3.0, 1.0);

    for i in 0..5 {
        let width = 1.0 / ratio.powi(i);
        let height = width / ratio;
        p.rect(0.0, 0.0, width, height, GOLD, 1.0, 0.7);
    }
}

/// Interlocking triangles inside ringed circles and a bounding frame.
fn draw_sri_yantra(p: &mut Painter, upward: u32, downward: u32) {
    p.rect(0.0, 0.0, 3.6, 3.6, GOLD, 2.0, 1.0);
    for radius in [1.6, 1.4, 1.2] {
        p.circle(0.0, 0.0, radius, GOLD, 1.0, 0.7);
    }
    for i in 0..upward {
        let scale = 1.0 - i as f64 * 0.2;
        p.polygon(&triangle_points(0.0, 0.0, scale, true), GOLD, 2.0, 1.0);
    }
    for i in 0..downward {
        let scale = 1.1 - i as f64 * 0.18;
        p.polygon(&triangle_points(0.0, 0.0, scale, false), SILVER, 2.0, 1.0);
    }
}

/// Star tetrahedron: translucent filled triangles plus a white center point.
fn draw_merkaba(p: &mut Painter, scale: f64) {
    let up = triangle_points(0.0, 0.0, scale, true);
    p.fill_polygon(&up, GOLD, 0.3);
    p.polygon(&up, GOLD, 3.0, 1.0);

    let down = triangle_points(0.0, 0.0, scale, false);
    p.fill_polygon(&down, SILVER, 0.3);
    p.polygon(&down, SILVER, 3.0, 1.0);

    p.fill_circle(0.0, 0.0, 0.1, WHITE, 1.0);
}

/// Two circles overlapping in a translucent lens.
fn draw_vesica_piscis(p: &mut Painter, radius: f64, separation: f64) {
    let offset = separation / 2.0;
    p.circle(-offset, 0.0, radius, GOLD, 3.0, 1.0);
    p.circle(offset, 0.0, radius, GOLD, 3.0, 1.0);

    // fill the lens: points inside both circles
    let steps = 200;
    for i in 0..=steps {
        let x = -offset + separation * i as f64 / steps as f64;
        let reach = (radius * radius - (x + offset) * (x + offset))
            .min(radius * radius - (x - offset) * (x - offset))
            .max(0.0)
            .sqrt();
        let (px, y0) = p.vp.to_pixel(x, reach);
        let (_, y1) = p.vp.to_pixel(x, -reach);
        for y in y0..=y1 {
            p.raster.put_blend(px, y, GOLD, 0.3);
        }
    }
}

/// Sephiroth layout for the reversed tree: Malkuth at the top, Kether at
/// the bottom, per Achad's arrangement.
const SEPHIROTH: [(u8, f64, f64); 10] = [
    (10, 0.0, 1.8),
    (9, 0.0, 1.2),
    (8, -0.6, 0.6),
    (7, 0.6, 0.6),
    (6, 0.0, 0.3),
    (5, -0.6, -0.3),
    (4, 0.6, -0.3),
    (3, -0.6, -1.0),
    (2, 0.6, -1.0),
    (1, 0.0, -1.6),
];

const TREE_PATHS: [(u8, u8); 22] = [
    (1, 2), (1, 3), (1, 6),
    (2, 3), (2, 4), (2, 6),
    (3, 5), (3, 6),
    (4, 5), (4, 6), (4, 7),
    (5, 6), (5, 8),
    (6, 7), (6, 8), (6, 9),
    (7, 8), (7, 9), (7, 10),
    (8, 9), (8, 10),
    (9, 10),
];

fn sephirah_pos(n: u8) -> (f64, f64) {
    SEPHIROTH
        .iter()
        .find(|(num, _, _)| *num == n)
        .map(|&(_, x, y)| (x, y))
        .unwrap_or((0.0, 0.0))
}

fn draw_achad_tree(p: &mut Painter) {
    for &(a, b) in &TREE_PATHS {
        p.segment(sephirah_pos(a), sephirah_pos(b), SILVER, 1.0, 0.6);
    }
    for &(num, x, y) in &SEPHIROTH {
        // Kether stays gold even at the bottom
        let color = if num == 1 { GOLD } else { SILVER };
        // Tiphareth slightly larger
        let size = if num == 6 { 0.15 } else { 0.12 };
        p.fill_circle(x, y, size, color, 0.8);
        p.circle(x, y, size, WHITE, 2.0, 1.0);
    }
    // the Maat current, running downward through the whole tree
    p.segment((0.0, 2.0), (0.0, -1.8), PURPLE, 2.0, 0.5);
    p.segment((0.0, -1.8), (-0.08, -1.65), PURPLE, 2.0, 0.5);
    p.segment((0.0, -1.8), (0.08, -1.65), PURPLE, 2.0, 0.5);
}

/// Daath seal, Choronzon triangles, and the seven-pointed Babalon gate.
fn draw_oath_abyss_sigil(p: &mut Painter, gate_points: u32) {
    p.fill_circle(0.0, 0.0, 0.3, BLACK, 1.0);
    p.circle(0.0, 0.0, 0.3, RED, 3.0, 1.0);

    for i in 0..3 {
        let angle = i as f64 * 2.0 * std::f64::consts::PI / 3.0;
        let (x, y) = (0.8 * angle.cos(), 0.8 * angle.sin());
        let upward = i % 2 != 0;
        p.polygon(&triangle_points(x, y, 0.4, upward), RED, 2.0, 0.7);
    }

    p.dashed_circle(0.0, 0.0, 1.5, CRIMSON, 3.0, 1.0);
    for i in 0..gate_points {
        let angle = i as f64 * 2.0 * std::f64::consts::PI / gate_points as f64;
        let (x, y) = (1.5 * angle.cos(), 1.5 * angle.sin());
        p.segment((0.0, 0.0), (x, y), CRIMSON, 1.0, 0.4);
        p.fill_circle(x, y, 0.08, CRIMSON, 0.8);
    }
}

/// Cube of space: front and receding back square with connecting edges,
/// letter stations drawn as markers.
fn draw_qblh_cube(p: &mut Painter, mother: u32, double: u32, single: u32) {
    let s = 1.2;
    let front = [(-s, -s), (s, -s), (s, s), (-s, s)];
    let back: Vec<(f64, f64)> = front
        .iter()
        .map(|&(x, y)| (x * 0.5, y * 0.5 + 0.6))
        .collect();

    for i in 0..4 {
        let j = (i + 1) % 4;
        p.segment(front[i], front[j], SILVER, 2.0, 1.0);
        p.segment(back[i], back[j], SILVER, 1.5, 0.7);
        p.segment(front[i], back[i], SILVER, 1.5, 0.7);
    }

    // mother letters on the axes
    let axes = [(0.0, 0.0), (0.0, -s - 0.3), (s + 0.3, 0.0)];
    for &(x, y) in axes.iter().take(mother as usize) {
        p.fill_circle(x, y, 0.08, GOLD, 1.0);
    }
    // double letters on the faces
    let faces = [
        (0.0, s * 0.7),
        (0.0, -s * 0.7),
        (s * 0.7, 0.0),
        (-s * 0.7, 0.0),
        (0.5, 0.5),
        (-0.5, 0.5),
        (0.0, 0.3),
    ];
    for &(x, y) in faces.iter().take(double as usize) {
        p.fill_circle(x, y, 0.06, SILVER, 0.8);
    }
    // single letters on vertices and midpoints of the connecting edges
    let mut stations: Vec<(f64, f64)> = front.to_vec();
    stations.extend(back.iter());
    for i in 0..4 {
        stations.push((
            (front[i].0 + back[i].0) / 2.0,
            (front[i].1 + back[i].1) / 2.0,
        ));
    }
    for &(x, y) in stations.iter().take(single as usize) {
        p.fill_circle(x, y, 0.04, Rgb::new(120, 120, 120), 0.7);
    }
}

/// Equilateral triangle points around a center, pointing up or down.
fn triangle_points(x: f64, y: f64, scale: f64, upward: bool) -> Vec<(f64, f64)> {
    let height = scale * 3.0_f64.sqrt() / 2.0;
    if upward {
        vec![
            (x, y + height * 2.0 / 3.0),
            (x - scale / 2.0, y - height / 3.0),
            (x + scale / 2.0, y - height / 3.0),
        ]
    } else {
        vec![
            (x, y - height * 2.0 / 3.0),
            (x - scale / 2.0, y + height / 3.0),
            (x + scale / 2.0, y + height / 3.0),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::geometry::sacred_geometries;

    #[test]
    fn test_unknown_geometry_errors() {
        let geos = sacred_geometries();
        let err = generate_sacred_geometry(&geos, "missing", (10, 10)).unwrap_err();
        assert!(matches!(err, DesignError::UnknownGeometry(_)));
    }

    #[test]
    fn test_every_preset_renders_requested_shape() {
        let geos = sacred_geometries();
        for name in geos.keys() {
            let raster = generate_sacred_geometry(&geos, name, (64, 48)).unwrap();
            assert_eq!(raster.width(), 64, "preset {name}");
            assert_eq!(raster.height(), 48, "preset {name}");
            assert_eq!(raster.data().len(), 64 * 48 * 3, "preset {name}");
        }
    }

    #[test]
    fn test_rendering_is_deterministic() {
        let geos = sacred_geometries();
        let a = generate_sacred_geometry(&geos, "flower_of_life", (120, 120)).unwrap();
        let b = generate_sacred_geometry(&geos, "flower_of_life", (120, 120)).unwrap();
        assert_eq!(a.data(), b.data());
    }

    #[test]
    fn test_flower_of_life_paints_gold() {
        let geos = sacred_geometries();
        let raster = generate_sacred_geometry(&geos, "flower_of_life", (200, 200)).unwrap();
        let gold_pixels = raster
            .data()
            .chunks(3)
            .filter(|px| px == &[255, 215, 0])
            .count();
        assert!(gold_pixels > 100, "expected gold strokes, found {gold_pixels}");
    }

    #[test]
    fn test_renderless_kinds_stay_blank() {
        let geos = sacred_geometries();
        let raster = generate_sacred_geometry(&geos, "metatrons_cube", (32, 32)).unwrap();
        assert!(raster.data().iter().all(|&b| b == 255));
    }

    #[test]
    fn test_tree_paths_count_is_twenty_two() {
        assert_eq!(TREE_PATHS.len(), 22);
    }

    #[test]
    fn test_triangle_points_mirror() {
        let up = triangle_points(0.0, 0.0, 1.0, true);
        let down = triangle_points(0.0, 0.0, 1.0, false);
        assert!((up[0].1 + down[0].1).abs() < 1e-12);
    }
}
