//! Pedestrian, cargo box and roadside decoration sprites
//!
//! Fixed geometries except for the tree foliage speckles and the rocket
//! flame particles, which roll their placement from the injected rng when
//! the sprite is first built.

use macroquad::prelude::Color;
use ::rand::Rng;

use super::{Shape, Sprite};
use crate::config::{
    BOX_HEIGHT, BOX_WIDTH, HOUSE_HEIGHT, HOUSE_WIDTH, PERSON_HEIGHT, PERSON_WIDTH, ROCKET_HEIGHT,
    ROCKET_WIDTH, TREE_HEIGHT, TREE_WIDTH,
};
use crate::theme::{
    BLACK, BLUE, BROWN, DARK_GREEN, FOLIAGE, GRAY, LIGHT_BLUE, ORANGE, RED, SKIN, WHITE, YELLOW,
};

/// Foliage speckles rolled onto each tree crown
pub const TREE_SPECKLES: usize = 10;

/// Flame particles rolled under each rocket
pub const ROCKET_FLAME_PARTICLES: usize = 5;

pub fn pedestrian() -> Sprite {
    let w = PERSON_WIDTH;
    let shapes = vec![
        // Head and face
        Shape::Circle { x: w / 2.0, y: 10.0, r: 8.0, color: SKIN },
        Shape::Circle { x: w / 2.0 - 3.0, y: 8.0, r: 1.0, color: BLACK },
        Shape::Circle { x: w / 2.0 + 3.0, y: 8.0, r: 1.0, color: BLACK },
        Shape::Arc {
            x: w / 2.0 - 4.0,
            y: 10.0,
            w: 8.0,
            h: 5.0,
            start_deg: 180.0,
            end_deg: 360.0,
            thickness: 1.0,
            color: BLACK,
        },
        // Torso, legs, arms
        Shape::Rect { x: 10.0, y: 18.0, w: w - 20.0, h: 20.0, color: BLUE },
        Shape::Rect { x: 8.0, y: 38.0, w: 5.0, h: 12.0, color: BLACK },
        Shape::Rect { x: w - 13.0, y: 38.0, w: 5.0, h: 12.0, color: BLACK },
        Shape::Rect { x: 5.0, y: 25.0, w: 5.0, h: 10.0, color: SKIN },
        Shape::Rect { x: w - 10.0, y: 25.0, w: 5.0, h: 10.0, color: SKIN },
    ];
    Sprite::new(w, PERSON_HEIGHT, shapes)
}

pub fn cargo_box() -> Sprite {
    let w = BOX_WIDTH;
    let h = BOX_HEIGHT;
    let shadow = Color::new(0.784, 0.392, 0.0, 0.392); // 200, 100, 0, alpha 100
    let shapes = vec![
        Shape::Rect { x: 0.0, y: 0.0, w, h, color: ORANGE },
        Shape::Rect { x: 2.0, y: 2.0, w: w - 4.0, h: h - 4.0, color: shadow },
        // Strapping: border plus both diagonals
        Shape::RectLines { x: 0.0, y: 0.0, w, h, thickness: 2.0, color: BROWN },
        Shape::Line { x1: 0.0, y1: 0.0, x2: w, y2: h, thickness: 2.0, color: BROWN },
        Shape::Line { x1: w, y1: 0.0, x2: 0.0, y2: h, thickness: 2.0, color: BROWN },
        // Shipping label
        Shape::Rect { x: w / 2.0 - 9.0, y: h / 2.0 - 4.0, w: 18.0, h: 8.0, color: WHITE },
    ];
    Sprite::new(w, h, shapes)
}

pub fn tree(rng: &mut impl Rng) -> Sprite {
    let mut shapes = vec![
        Shape::Rect { x: 25.0, y: 50.0, w: 10.0, h: 50.0, color: BROWN },
        Shape::Circle { x: 30.0, y: 40.0, r: 25.0, color: DARK_GREEN },
    ];
    for _ in 0..TREE_SPECKLES {
        shapes.push(Shape::Circle {
            x: rng.gen_range(10..=50) as f32,
            y: rng.gen_range(20..=60) as f32,
            r: rng.gen_range(3..=8) as f32,
            color: FOLIAGE,
        });
    }
    Sprite::new(TREE_WIDTH, TREE_HEIGHT, shapes)
}

pub fn house() -> Sprite {
    let w = HOUSE_WIDTH;
    let tile = Color::new(0.392, 0.196, 0.0, 1.0); // 100, 50, 0
    let mut shapes = vec![
        // Walls and roof
        Shape::Rect { x: 0.0, y: 30.0, w, h: 50.0, color: RED },
        Shape::Polygon { points: vec![(0.0, 30.0), (w / 2.0, 0.0), (w, 30.0)], color: BROWN },
    ];
    // Tiled eave line
    let mut x = 0.0;
    while x < w {
        shapes.push(Shape::Line { x1: x, y1: 30.0, x2: x + 4.0, y2: 25.0, thickness: 2.0, color: tile });
        shapes.push(Shape::Line { x1: x + 4.0, y1: 25.0, x2: x + 8.0, y2: 30.0, thickness: 2.0, color: tile });
        x += 8.0;
    }
    // Window with cross frame
    shapes.push(Shape::Rect { x: 20.0, y: 45.0, w: 20.0, h: 20.0, color: LIGHT_BLUE });
    shapes.push(Shape::RectLines { x: 20.0, y: 45.0, w: 20.0, h: 20.0, thickness: 2.0, color: GRAY });
    shapes.push(Shape::Line { x1: 30.0, y1: 45.0, x2: 30.0, y2: 65.0, thickness: 2.0, color: GRAY });
    shapes.push(Shape::Line { x1: 20.0, y1: 55.0, x2: 40.0, y2: 55.0, thickness: 2.0, color: GRAY });
    // Door and knob
    shapes.push(Shape::Rect { x: 50.0, y: 45.0, w: 20.0, h: 35.0, color: BROWN });
    shapes.push(Shape::Circle { x: 65.0, y: 62.0, r: 2.0, color: BLACK });
    Sprite::new(w, HOUSE_HEIGHT, shapes)
}

pub fn rocket(rng: &mut impl Rng) -> Sprite {
    let hull = Color::new(0.588, 0.588, 0.588, 1.0); // 150, 150, 150
    let hull_detail = Color::new(0.392, 0.392, 0.392, 1.0); // 100, 100, 100
    let nose = Color::new(0.784, 0.0, 0.0, 1.0); // 200, 0, 0
    let glass = Color::new(0.392, 0.784, 1.0, 1.0); // 100, 200, 255
    let mut shapes = vec![
        // Nose cone, hull and panel line
        Shape::Polygon { points: vec![(10.0, 15.0), (30.0, 15.0), (20.0, 0.0)], color: nose },
        Shape::Rect { x: 10.0, y: 15.0, w: 20.0, h: 45.0, color: hull },
        Shape::Rect { x: 15.0, y: 22.0, w: 10.0, h: 31.0, color: hull_detail },
        // Porthole
        Shape::Circle { x: 20.0, y: 32.0, r: 5.0, color: LIGHT_BLUE },
        Shape::Circle { x: 20.0, y: 32.0, r: 3.0, color: glass },
        // Exhaust flame, outer and inner
        Shape::Polygon { points: vec![(10.0, 60.0), (30.0, 60.0), (20.0, 80.0)], color: ORANGE },
        Shape::Polygon { points: vec![(12.0, 60.0), (28.0, 60.0), (20.0, 75.0)], color: RED },
    ];
    for _ in 0..ROCKET_FLAME_PARTICLES {
        shapes.push(Shape::Circle {
            x: rng.gen_range(12..=28) as f32,
            y: rng.gen_range(65..=78) as f32,
            r: rng.gen_range(1..=3) as f32,
            color: YELLOW,
        });
    }
    Sprite::new(ROCKET_WIDTH, ROCKET_HEIGHT, shapes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ::rand::rngs::StdRng;
    use ::rand::SeedableRng;

    #[test]
    fn pedestrian_and_box_are_fixed_geometry() {
        assert_eq!(pedestrian(), pedestrian());
        assert_eq!(cargo_box(), cargo_box());
        assert_eq!(pedestrian().width, PERSON_WIDTH);
        assert_eq!(cargo_box().height, BOX_HEIGHT);
    }

    #[test]
    fn tree_speckles_stay_on_the_crown() {
        let mut rng = StdRng::seed_from_u64(42);
        let sprite = tree(&mut rng);
        // Trunk + crown + speckles
        assert_eq!(sprite.shapes.len(), 2 + TREE_SPECKLES);
        for shape in &sprite.shapes[2..] {
            match shape {
                Shape::Circle { x, y, r, color } => {
                    assert!((10.0..=50.0).contains(x));
                    assert!((20.0..=60.0).contains(y));
                    assert!((3.0..=8.0).contains(r));
                    assert_eq!(*color, FOLIAGE);
                }
                other => panic!("speckle should be a circle, got {other:?}"),
            }
        }
    }

    #[test]
    fn tree_detail_varies_with_seed_but_not_shape_count() {
        let a = tree(&mut StdRng::seed_from_u64(1));
        let b = tree(&mut StdRng::seed_from_u64(2));
        assert_eq!(a.shapes.len(), b.shapes.len());
        assert_ne!(a.shapes, b.shapes);
        // The fixed part is identical regardless of seed.
        assert_eq!(a.shapes[..2], b.shapes[..2]);
    }

    #[test]
    fn rocket_flame_particles_sit_in_the_exhaust() {
        let mut rng = StdRng::seed_from_u64(9);
        let sprite = rocket(&mut rng);
        let particles = &sprite.shapes[sprite.shapes.len() - ROCKET_FLAME_PARTICLES..];
        for shape in particles {
            match shape {
                Shape::Circle { x, y, .. } => {
                    assert!((12.0..=28.0).contains(x));
                    assert!((65.0..=78.0).contains(y));
                }
                other => panic!("flame particle should be a circle, got {other:?}"),
            }
        }
    }

    #[test]
    fn house_fits_its_canvas() {
        let sprite = house();
        assert_eq!((sprite.width, sprite.height), (HOUSE_WIDTH, HOUSE_HEIGHT));
        for shape in &sprite.shapes {
            if let Shape::Rect { x, y, w, h, .. } = shape {
                assert!(*x >= 0.0 && x + w <= HOUSE_WIDTH);
                assert!(*y >= 0.0 && y + h <= HOUSE_HEIGHT);
            }
        }
    }
}
