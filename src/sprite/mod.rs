//! Procedural sprite generation
//!
//! Every drawable in the game is a `Sprite`: a fixed-size canvas plus a
//! list of `Shape` instructions in sprite-local coordinates. One
//! interpreter (`Sprite::draw_at`) maps the instructions onto macroquad
//! primitives, so new artwork is new data rather than new drawing code,
//! and tests can assert on the instruction lists without a window.
//!
//! Sprites are immutable once built and shared through the
//! reference-counted `SpriteCache`, keyed by entity kind / model / color.

pub mod cars;
pub mod props;

use std::collections::HashMap;
use std::rc::Rc;

use macroquad::prelude::*;
use ::rand::Rng;

use crate::config::CarModel;
use crate::theme::CAR_COLORS;

/// A single drawing instruction, positioned relative to the sprite origin.
///
/// Ellipses and arcs use pygame-style bounding boxes (top-left + size);
/// circles use center + radius.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// Filled axis-aligned rectangle
    Rect { x: f32, y: f32, w: f32, h: f32, color: Color },
    /// Rectangle outline
    RectLines { x: f32, y: f32, w: f32, h: f32, thickness: f32, color: Color },
    /// Filled ellipse inside the given bounding box
    Ellipse { x: f32, y: f32, w: f32, h: f32, color: Color },
    /// Filled circle
    Circle { x: f32, y: f32, r: f32, color: Color },
    /// Circle outline
    CircleLines { x: f32, y: f32, r: f32, thickness: f32, color: Color },
    /// Straight stroke between two points
    Line { x1: f32, y1: f32, x2: f32, y2: f32, thickness: f32, color: Color },
    /// Filled convex polygon (fan-triangulated from the first vertex)
    Polygon { points: Vec<(f32, f32)>, color: Color },
    /// Elliptical arc inside a bounding box; angles in degrees,
    /// counter-clockwise with 0 at the right (pygame convention)
    Arc {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        start_deg: f32,
        end_deg: f32,
        thickness: f32,
        color: Color,
    },
}

/// An immutable renderable image: fixed bounds plus its shape list.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub width: f32,
    pub height: f32,
    pub shapes: Vec<Shape>,
}

/// Segments used to approximate curved fills and strokes
const CURVE_SEGMENTS: usize = 24;

impl Sprite {
    pub fn new(width: f32, height: f32, shapes: Vec<Shape>) -> Self {
        Self { width, height, shapes }
    }

    /// Interpret the instruction list at a screen offset.
    pub fn draw_at(&self, ox: f32, oy: f32) {
        for shape in &self.shapes {
            match shape {
                Shape::Rect { x, y, w, h, color } => {
                    draw_rectangle(ox + x, oy + y, *w, *h, *color);
                }
                Shape::RectLines { x, y, w, h, thickness, color } => {
                    draw_rectangle_lines(ox + x, oy + y, *w, *h, *thickness, *color);
                }
                Shape::Ellipse { x, y, w, h, color } => {
                    fill_ellipse(ox + x + w * 0.5, oy + y + h * 0.5, w * 0.5, h * 0.5, *color);
                }
                Shape::Circle { x, y, r, color } => {
                    draw_circle(ox + x, oy + y, *r, *color);
                }
                Shape::CircleLines { x, y, r, thickness, color } => {
                    draw_circle_lines(ox + x, oy + y, *r, *thickness, *color);
                }
                Shape::Line { x1, y1, x2, y2, thickness, color } => {
                    draw_line(ox + x1, oy + y1, ox + x2, oy + y2, *thickness, *color);
                }
                Shape::Polygon { points, color } => {
                    fill_polygon(ox, oy, points, *color);
                }
                Shape::Arc { x, y, w, h, start_deg, end_deg, thickness, color } => {
                    stroke_arc(
                        ox + x + w * 0.5,
                        oy + y + h * 0.5,
                        w * 0.5,
                        h * 0.5,
                        *start_deg,
                        *end_deg,
                        *thickness,
                        *color,
                    );
                }
            }
        }
    }
}

/// Triangle-fan ellipse fill centered at (cx, cy) with half-axes rx, ry.
fn fill_ellipse(cx: f32, cy: f32, rx: f32, ry: f32, color: Color) {
    let step = std::f32::consts::TAU / CURVE_SEGMENTS as f32;
    let center = vec2(cx, cy);
    for i in 0..CURVE_SEGMENTS {
        let a0 = step * i as f32;
        let a1 = step * (i + 1) as f32;
        let p0 = vec2(cx + rx * a0.cos(), cy + ry * a0.sin());
        let p1 = vec2(cx + rx * a1.cos(), cy + ry * a1.sin());
        draw_triangle(center, p0, p1, color);
    }
}

/// Fan-triangulate a convex polygon from its first vertex.
fn fill_polygon(ox: f32, oy: f32, points: &[(f32, f32)], color: Color) {
    if points.len() < 3 {
        return;
    }
    let anchor = vec2(ox + points[0].0, oy + points[0].1);
    for pair in points[1..].windows(2) {
        let p0 = vec2(ox + pair[0].0, oy + pair[0].1);
        let p1 = vec2(ox + pair[1].0, oy + pair[1].1);
        draw_triangle(anchor, p0, p1, color);
    }
}

/// Stroke an elliptical arc as short line segments. Angles follow the
/// pygame convention: degrees, counter-clockwise, 0 at the right. The
/// y-axis flip converts from math space to screen space.
#[allow(clippy::too_many_arguments)]
fn stroke_arc(
    cx: f32,
    cy: f32,
    rx: f32,
    ry: f32,
    start_deg: f32,
    end_deg: f32,
    thickness: f32,
    color: Color,
) {
    let start = start_deg.to_radians();
    let end = end_deg.to_radians();
    let step = (end - start) / CURVE_SEGMENTS as f32;
    for i in 0..CURVE_SEGMENTS {
        let a0 = start + step * i as f32;
        let a1 = start + step * (i + 1) as f32;
        draw_line(
            cx + rx * a0.cos(),
            cy - ry * a0.sin(),
            cx + rx * a1.cos(),
            cy - ry * a1.sin(),
            thickness,
            color,
        );
    }
}

// =============================================================================
// Sprite cache
// =============================================================================

/// Key identifying one built sprite configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKey {
    /// Car body, keyed by model and palette index
    Car { model: CarModel, color: usize },
    Pedestrian,
    CargoBox,
    Tree,
    House,
    Rocket,
}

/// Shared, build-once store of sprites. Randomized cosmetic detail
/// (tree foliage, rocket flames) is rolled when the entry is first built
/// and then reused for the rest of the session.
#[derive(Default)]
pub struct SpriteCache {
    sprites: HashMap<SpriteKey, Rc<Sprite>>,
}

impl SpriteCache {
    pub fn new() -> Self {
        Self { sprites: HashMap::new() }
    }

    /// Fetch a sprite, building it on first use.
    pub fn get(&mut self, key: SpriteKey, rng: &mut impl Rng) -> Rc<Sprite> {
        self.sprites
            .entry(key)
            .or_insert_with(|| Rc::new(build(key, rng)))
            .clone()
    }

    /// Number of built entries (for tests)
    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

fn build(key: SpriteKey, rng: &mut impl Rng) -> Sprite {
    match key {
        SpriteKey::Car { model, color } => cars::car(model, CAR_COLORS[color]),
        SpriteKey::Pedestrian => props::pedestrian(),
        SpriteKey::CargoBox => props::cargo_box(),
        SpriteKey::Tree => props::tree(rng),
        SpriteKey::House => props::house(),
        SpriteKey::Rocket => props::rocket(rng),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::rand::rngs::StdRng;
    use ::rand::SeedableRng;

    #[test]
    fn cache_builds_each_key_once() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut cache = SpriteCache::new();

        assert!(cache.is_empty());
        let a = cache.get(SpriteKey::Tree, &mut rng);
        let b = cache.get(SpriteKey::Tree, &mut rng);
        // Same Rc, not a rebuilt sprite (random foliage would differ).
        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(cache.len(), 1);

        cache.get(SpriteKey::Pedestrian, &mut rng);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn car_entries_are_keyed_by_model_and_color() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut cache = SpriteCache::new();
        cache.get(SpriteKey::Car { model: CarModel::Bmw, color: 0 }, &mut rng);
        cache.get(SpriteKey::Car { model: CarModel::Bmw, color: 1 }, &mut rng);
        cache.get(SpriteKey::Car { model: CarModel::Zhiguli, color: 0 }, &mut rng);
        assert_eq!(cache.len(), 3);
    }
}
