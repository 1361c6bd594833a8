//! Moving entities: the player car plus everything that falls down the screen
//!
//! Entities are plain data with their own update step and bounding box.
//! Sprites are shared handles from the cache; entities never mutate them.

use std::rc::Rc;

use ::rand::Rng;

use crate::config::{
    BOX_HEIGHT, BOX_SPEED, BOX_WIDTH, CAR_HEIGHT, CAR_WIDTH, CAR_Y, DECORATION_SPEED,
    HOUSE_HEIGHT, HOUSE_WIDTH, INITIAL_CAR_SPEED, MAX_SPEED, PERSON_HEIGHT, PERSON_SPEED,
    PERSON_WIDTH, ROAD_LEFT, ROAD_RIGHT, ROCKET_HEIGHT, ROCKET_WIDTH, SCREEN_HEIGHT,
    SCREEN_WIDTH, SPEED_INCREMENT, TREE_HEIGHT, TREE_WIDTH, VERGE_MARGIN,
};
use crate::geom::Rect;
use crate::sprite::{Sprite, SpriteKey};

// =============================================================================
// Car
// =============================================================================

/// The player car. Moves laterally only, pinned to a near-bottom row.
pub struct Car {
    pub x: f32,
    pub y: f32,
    /// Forward speed; drives steering distance and road scroll rate
    pub speed: f32,
    sprite: Rc<Sprite>,
}

impl Car {
    /// Rightmost x the car may occupy
    pub const MAX_X: f32 = ROAD_RIGHT - CAR_WIDTH;

    pub fn new(sprite: Rc<Sprite>) -> Self {
        Self {
            x: SCREEN_WIDTH / 2.0 - CAR_WIDTH / 2.0,
            y: CAR_Y,
            speed: INITIAL_CAR_SPEED,
            sprite,
        }
    }

    pub fn steer_left(&mut self) {
        self.x = (self.x - self.speed).max(ROAD_LEFT);
    }

    pub fn steer_right(&mut self) {
        self.x = (self.x + self.speed).min(Self::MAX_X);
    }

    /// Level-up reward: nudge the speed cap, clamped at [`MAX_SPEED`].
    pub fn raise_speed(&mut self) {
        self.speed = (self.speed + SPEED_INCREMENT).min(MAX_SPEED);
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, CAR_WIDTH, CAR_HEIGHT)
    }

    pub fn draw(&self) {
        self.sprite.draw_at(self.x, self.y);
    }
}

// =============================================================================
// Pedestrian
// =============================================================================

/// A pedestrian falling through the road area. Once hit it stops
/// colliding and rendering but stays in the list until off-screen.
pub struct Pedestrian {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    hit: bool,
    sprite: Rc<Sprite>,
}

impl Pedestrian {
    pub fn spawn(rng: &mut impl Rng, sprite: Rc<Sprite>) -> Self {
        let max_x = (ROAD_RIGHT - PERSON_WIDTH) as i32;
        Self {
            x: rng.gen_range(ROAD_LEFT as i32..=max_x) as f32,
            y: -PERSON_HEIGHT,
            speed: rng.gen_range(PERSON_SPEED) as f32,
            hit: false,
            sprite,
        }
    }

    pub fn update(&mut self) {
        self.y += self.speed;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, PERSON_WIDTH, PERSON_HEIGHT)
    }

    /// Strict AABB test against the car; always false once hit.
    pub fn collides_with(&self, car: &Car) -> bool {
        !self.hit && self.rect().overlaps(&car.rect())
    }

    /// Latch the hit flag. Never reverts.
    pub fn mark_hit(&mut self) {
        self.hit = true;
    }

    pub fn is_hit(&self) -> bool {
        self.hit
    }

    pub fn is_off_screen(&self) -> bool {
        self.y > SCREEN_HEIGHT
    }

    pub fn draw(&self) {
        if !self.hit {
            self.sprite.draw_at(self.x, self.y);
        }
    }
}

// =============================================================================
// Cargo crate
// =============================================================================

/// A collectable box; driving over it scores points.
pub struct Crate {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    sprite: Rc<Sprite>,
}

impl Crate {
    pub fn spawn(rng: &mut impl Rng, sprite: Rc<Sprite>) -> Self {
        let max_x = (ROAD_RIGHT - BOX_WIDTH) as i32;
        Self {
            x: rng.gen_range(ROAD_LEFT as i32..=max_x) as f32,
            y: -BOX_HEIGHT,
            speed: rng.gen_range(BOX_SPEED) as f32,
            sprite,
        }
    }

    pub fn update(&mut self) {
        self.y += self.speed;
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, BOX_WIDTH, BOX_HEIGHT)
    }

    pub fn collides_with(&self, car: &Car) -> bool {
        self.rect().overlaps(&car.rect())
    }

    pub fn is_off_screen(&self) -> bool {
        self.y > SCREEN_HEIGHT
    }

    pub fn draw(&self) {
        self.sprite.draw_at(self.x, self.y);
    }
}

// =============================================================================
// Decorations
// =============================================================================

/// Which roadside strip a decoration occupies
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoadSide {
    Left,
    Right,
}

/// Cosmetic scenery kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecorKind {
    Tree,
    House,
    Rocket,
}

impl DecorKind {
    pub const ALL: [DecorKind; 3] = [DecorKind::Tree, DecorKind::House, DecorKind::Rocket];

    pub fn size(&self) -> (f32, f32) {
        match self {
            DecorKind::Tree => (TREE_WIDTH, TREE_HEIGHT),
            DecorKind::House => (HOUSE_WIDTH, HOUSE_HEIGHT),
            DecorKind::Rocket => (ROCKET_WIDTH, ROCKET_HEIGHT),
        }
    }

    pub fn sprite_key(&self) -> SpriteKey {
        match self {
            DecorKind::Tree => SpriteKey::Tree,
            DecorKind::House => SpriteKey::House,
            DecorKind::Rocket => SpriteKey::Rocket,
        }
    }
}

/// Purely cosmetic roadside scenery; never part of collision.
pub struct Decoration {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub kind: DecorKind,
    pub side: RoadSide,
    sprite: Rc<Sprite>,
}

impl Decoration {
    /// Spawn in the off-road strip on the given side, keeping a margin
    /// from both the road edge and the screen edge.
    pub fn spawn(kind: DecorKind, side: RoadSide, rng: &mut impl Rng, sprite: Rc<Sprite>) -> Self {
        let (w, h) = kind.size();
        let x = match side {
            RoadSide::Left => {
                let max_x = (ROAD_LEFT - w - VERGE_MARGIN) as i32;
                rng.gen_range(VERGE_MARGIN as i32..=max_x) as f32
            }
            RoadSide::Right => {
                let min_x = (ROAD_RIGHT + VERGE_MARGIN) as i32;
                let max_x = (SCREEN_WIDTH - w - VERGE_MARGIN) as i32;
                rng.gen_range(min_x..=max_x) as f32
            }
        };
        Self {
            x,
            y: -h,
            speed: rng.gen_range(DECORATION_SPEED) as f32,
            kind,
            side,
            sprite,
        }
    }

    pub fn update(&mut self) {
        self.y += self.speed;
    }

    pub fn is_off_screen(&self) -> bool {
        self.y > SCREEN_HEIGHT
    }

    pub fn draw(&self) {
        self.sprite.draw_at(self.x, self.y);
    }
}
