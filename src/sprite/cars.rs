//! The four car bodies as shape-instruction lists
//!
//! Each model is a hand-specified geometry: body panels, glass, lights,
//! wheels and one distinguishing emblem or grille. All cars get the same
//! semi-transparent highlight overlay on top.

use macroquad::prelude::Color;

use super::{Shape, Sprite};
use crate::config::{CarModel, CAR_HEIGHT, CAR_WIDTH};
use crate::theme::{
    BLACK, BLUE, CAR_HIGHLIGHT, DARK_GRAY, GLASS, GRILLE_DARK, GRILLE_LIGHT, RED, SILVER, WHEEL,
    WHEEL_RIM, WHITE, YELLOW,
};

const W: f32 = CAR_WIDTH;
const H: f32 = CAR_HEIGHT;

/// Build the sprite for a car model in the given body color.
pub fn car(model: CarModel, body: Color) -> Sprite {
    let mut shapes = match model {
        CarModel::Mercedes => mercedes(body),
        CarModel::Bmw => bmw(body),
        CarModel::Lamborghini => lamborghini(body),
        CarModel::Zhiguli => zhiguli(body),
    };
    // Uniform gloss highlight over the right half of the roof
    shapes.push(Shape::Ellipse {
        x: W / 2.0,
        y: 10.0,
        w: W / 2.0,
        h: 20.0,
        color: CAR_HIGHLIGHT,
    });
    Sprite::new(W, H, shapes)
}

/// Four elliptical wheels with rims, given per-corner bounding boxes.
fn wheels(boxes: [(f32, f32, f32, f32); 4], rim_inset: f32) -> Vec<Shape> {
    let mut shapes = Vec::with_capacity(8);
    for (x, y, w, h) in boxes {
        shapes.push(Shape::Ellipse { x, y, w, h, color: WHEEL });
    }
    for (x, y, w, h) in boxes {
        shapes.push(Shape::Ellipse {
            x: x + rim_inset,
            y: y + rim_inset,
            w: w - rim_inset * 2.0,
            h: h - rim_inset * 2.0,
            color: WHEEL_RIM,
        });
    }
    shapes
}

fn mercedes(body: Color) -> Vec<Shape> {
    let mut s = vec![
        // Body, hood and trunk
        Shape::Rect { x: 5.0, y: 15.0, w: W - 10.0, h: H - 30.0, color: body },
        Shape::Rect { x: 0.0, y: 5.0, w: W, h: 10.0, color: body },
        Shape::Rect { x: 0.0, y: H - 25.0, w: W, h: 10.0, color: body },
        // Windshield and side glass
        Shape::Rect { x: 10.0, y: 20.0, w: W - 20.0, h: 15.0, color: GLASS },
        Shape::Rect { x: 5.0, y: 35.0, w: 10.0, h: 30.0, color: GLASS },
        Shape::Rect { x: W - 15.0, y: 35.0, w: 10.0, h: 30.0, color: GLASS },
        // Headlights and taillights
        Shape::Ellipse { x: 5.0, y: 5.0, w: 12.0, h: 8.0, color: YELLOW },
        Shape::Ellipse { x: W - 17.0, y: 5.0, w: 12.0, h: 8.0, color: YELLOW },
        Shape::Ellipse { x: 5.0, y: H - 15.0, w: 12.0, h: 8.0, color: RED },
        Shape::Ellipse { x: W - 17.0, y: H - 15.0, w: 12.0, h: 8.0, color: RED },
    ];
    s.extend(wheels(
        [
            (8.0, 8.0, 16.0, 16.0),
            (W - 24.0, 8.0, 16.0, 16.0),
            (8.0, H - 24.0, 16.0, 16.0),
            (W - 24.0, H - 24.0, 16.0, 16.0),
        ],
        2.0,
    ));
    // Three-pointed-star stand-in: two concentric ring strokes
    s.push(Shape::CircleLines { x: W / 2.0, y: H / 2.0, r: 8.0, thickness: 2.0, color: SILVER });
    s.push(Shape::CircleLines { x: W / 2.0, y: H / 2.0, r: 5.0, thickness: 1.0, color: SILVER });
    s
}

fn bmw(body: Color) -> Vec<Shape> {
    let mut s = vec![
        // Sport body
        Shape::Rect { x: 3.0, y: 10.0, w: W - 6.0, h: H - 25.0, color: body },
        // Glass
        Shape::Rect { x: 8.0, y: 15.0, w: W - 16.0, h: 12.0, color: GLASS },
        Shape::Rect { x: 5.0, y: 27.0, w: 8.0, h: 25.0, color: GLASS },
        Shape::Rect { x: W - 13.0, y: 27.0, w: 8.0, h: 25.0, color: GLASS },
        // Lights
        Shape::Ellipse { x: 5.0, y: 8.0, w: 10.0, h: 7.0, color: YELLOW },
        Shape::Ellipse { x: W - 15.0, y: 8.0, w: 10.0, h: 7.0, color: YELLOW },
        Shape::Ellipse { x: 8.0, y: H - 18.0, w: 10.0, h: 7.0, color: RED },
        Shape::Ellipse { x: W - 18.0, y: H - 18.0, w: 10.0, h: 7.0, color: RED },
        // Kidney grille with slats
        Shape::Rect { x: W / 2.0 - 10.0, y: 5.0, w: 20.0, h: 8.0, color: GRILLE_DARK },
    ];
    for i in 0..4 {
        let x = W / 2.0 - 8.0 + i as f32 * 5.0;
        s.push(Shape::Line { x1: x, y1: 5.0, x2: x, y2: 13.0, thickness: 1.0, color: GRILLE_LIGHT });
    }
    s.extend(wheels(
        [
            (10.0, 10.0, 14.0, 14.0),
            (W - 24.0, 10.0, 14.0, 14.0),
            (10.0, H - 24.0, 14.0, 14.0),
            (W - 24.0, H - 24.0, 14.0, 14.0),
        ],
        2.0,
    ));
    // Roundel: blue disc, white core, four quadrant arcs
    s.push(Shape::Circle { x: W / 2.0, y: H / 2.0, r: 10.0, color: BLUE });
    s.push(Shape::Circle { x: W / 2.0, y: H / 2.0, r: 8.0, color: WHITE });
    for i in 0..4 {
        let start = i as f32 * 90.0;
        s.push(Shape::Arc {
            x: W / 2.0 - 8.0,
            y: H / 2.0 - 8.0,
            w: 16.0,
            h: 16.0,
            start_deg: start,
            end_deg: start + 45.0,
            thickness: 3.0,
            color: BLUE,
        });
    }
    s
}

fn lamborghini(body: Color) -> Vec<Shape> {
    let mut s = vec![
        // Low wedge body
        Shape::Rect { x: 0.0, y: 20.0, w: W, h: H - 30.0, color: body },
        // Raked windshield
        Shape::Polygon {
            points: vec![(10.0, 25.0), (W - 10.0, 25.0), (W - 5.0, 35.0), (5.0, 35.0)],
            color: GLASS,
        },
        Shape::Rect { x: 8.0, y: 35.0, w: 10.0, h: 15.0, color: GLASS },
        Shape::Rect { x: W - 18.0, y: 35.0, w: 10.0, h: 15.0, color: GLASS },
        // Pop-up headlights sit at the nose (bottom of the sprite)
        Shape::Ellipse { x: 5.0, y: H - 20.0, w: 12.0, h: 8.0, color: YELLOW },
        Shape::Ellipse { x: W - 17.0, y: H - 20.0, w: 12.0, h: 8.0, color: YELLOW },
        // Exhaust
        Shape::Rect { x: W / 2.0 - 5.0, y: H - 10.0, w: 10.0, h: 5.0, color: DARK_GRAY },
    ];
    s.extend(wheels(
        [
            (8.0, 15.0, 14.0, 12.0),
            (W - 22.0, 15.0, 14.0, 12.0),
            (8.0, H - 27.0, 14.0, 12.0),
            (W - 22.0, H - 27.0, 14.0, 12.0),
        ],
        2.0,
    ));
    // Character lines and central air intake
    s.push(Shape::Line { x1: 15.0, y1: 25.0, x2: 30.0, y2: 35.0, thickness: 2.0, color: BLACK });
    s.push(Shape::Line {
        x1: W - 15.0,
        y1: 25.0,
        x2: W - 30.0,
        y2: 35.0,
        thickness: 2.0,
        color: BLACK,
    });
    s.push(Shape::Rect { x: W / 2.0 - 15.0, y: 40.0, w: 30.0, h: 5.0, color: GRILLE_DARK });
    s
}

fn zhiguli(body: Color) -> Vec<Shape> {
    let mut s = vec![
        // Boxy body, no rounding anywhere
        Shape::Rect { x: 0.0, y: 15.0, w: W, h: H - 25.0, color: body },
        Shape::Rect { x: 5.0, y: 20.0, w: W - 10.0, h: 15.0, color: GLASS },
        Shape::Rect { x: 3.0, y: 35.0, w: 6.0, h: 20.0, color: GLASS },
        Shape::Rect { x: W - 9.0, y: 35.0, w: 6.0, h: 20.0, color: GLASS },
        // Rectangular lights
        Shape::Rect { x: 5.0, y: H - 20.0, w: 10.0, h: 5.0, color: YELLOW },
        Shape::Rect { x: W - 15.0, y: H - 20.0, w: 10.0, h: 5.0, color: YELLOW },
        Shape::Rect { x: 8.0, y: 5.0, w: 8.0, h: 5.0, color: RED },
        Shape::Rect { x: W - 16.0, y: 5.0, w: 8.0, h: 5.0, color: RED },
    ];
    // Square wheels to match the body
    for (x, y) in [
        (8.0, 10.0),
        (W - 22.0, 10.0),
        (8.0, H - 20.0),
        (W - 22.0, H - 20.0),
    ] {
        s.push(Shape::Rect { x, y, w: 14.0, h: 10.0, color: WHEEL });
        s.push(Shape::Rect { x: x + 2.0, y: y + 2.0, w: 10.0, h: 6.0, color: WHEEL_RIM });
    }
    // Classic slatted grille
    s.push(Shape::Rect { x: W / 2.0 - 15.0, y: H - 25.0, w: 30.0, h: 5.0, color: GRILLE_DARK });
    for i in 0..5 {
        let x = W / 2.0 - 15.0 + i as f32 * 6.0;
        s.push(Shape::Line {
            x1: x,
            y1: H - 25.0,
            x2: x,
            y2: H - 20.0,
            thickness: 1.0,
            color: GRILLE_LIGHT,
        });
    }
    // Door handles
    s.push(Shape::Rect { x: 20.0, y: 40.0, w: 5.0, h: 2.0, color: BLACK });
    s.push(Shape::Rect { x: W - 25.0, y: 40.0, w: 5.0, h: 2.0, color: BLACK });
    s
}
