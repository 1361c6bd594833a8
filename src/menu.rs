//! Pre-run selection menu: car model, body color, time of day
//!
//! A two-state machine (browsing until confirmed). Model and color are
//! cyclic selectors, time of day is direct-select; everything else is a
//! no-op. Confirming emits the `Config` record the session is built from.

use std::rc::Rc;

use macroquad::prelude::*;
use ::rand::Rng;

use crate::config::{CarModel, Config, TimeOfDay, CAR_HEIGHT, CAR_WIDTH, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::sprite::{Sprite, SpriteCache, SpriteKey};
use crate::theme::{BLACK, CAR_COLORS, GREEN, LIGHT_BLUE, WHITE};

/// Discrete menu inputs, already translated from raw key events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    PrevModel,
    NextModel,
    PrevColor,
    NextColor,
    SetTime(TimeOfDay),
    Confirm,
}

/// The selection state. Indices are cyclic; nothing is final until
/// `Confirm` emits a `Config`.
pub struct SelectionMenu {
    model_index: usize,
    color_index: usize,
    time_index: usize,
    /// One preview per model; only the selected one is recolored on change
    previews: Vec<Rc<Sprite>>,
}

impl SelectionMenu {
    pub fn new(cache: &mut SpriteCache, rng: &mut impl Rng) -> Self {
        let previews = CarModel::ALL
            .iter()
            .map(|&model| {
                cache.get(SpriteKey::Car { model, color: model.default_color_index() }, rng)
            })
            .collect();
        Self { model_index: 0, color_index: 0, time_index: 0, previews }
    }

    pub fn model_index(&self) -> usize {
        self.model_index
    }

    pub fn color_index(&self) -> usize {
        self.color_index
    }

    pub fn time_index(&self) -> usize {
        self.time_index
    }

    /// Apply one input. Returns the confirmed configuration once the
    /// player hits confirm; all other events keep browsing.
    pub fn handle_input(
        &mut self,
        event: MenuEvent,
        cache: &mut SpriteCache,
        rng: &mut impl Rng,
    ) -> Option<Config> {
        match event {
            MenuEvent::PrevModel => {
                self.model_index = (self.model_index + CarModel::COUNT - 1) % CarModel::COUNT;
                self.refresh_preview(cache, rng);
            }
            MenuEvent::NextModel => {
                self.model_index = (self.model_index + 1) % CarModel::COUNT;
                self.refresh_preview(cache, rng);
            }
            MenuEvent::PrevColor => {
                self.color_index = (self.color_index + CAR_COLORS.len() - 1) % CAR_COLORS.len();
                self.refresh_preview(cache, rng);
            }
            MenuEvent::NextColor => {
                self.color_index = (self.color_index + 1) % CAR_COLORS.len();
                self.refresh_preview(cache, rng);
            }
            MenuEvent::SetTime(time) => {
                self.time_index = time as usize;
            }
            MenuEvent::Confirm => {
                return Some(Config {
                    car_model: self.model_index,
                    car_color: self.color_index,
                    time_of_day: self.time_index,
                });
            }
        }
        None
    }

    /// Rebuild only the selected model's preview in the chosen color.
    fn refresh_preview(&mut self, cache: &mut SpriteCache, rng: &mut impl Rng) {
        let model = CarModel::ALL[self.model_index];
        self.previews[self.model_index] =
            cache.get(SpriteKey::Car { model, color: self.color_index }, rng);
    }

    pub fn render(&self) {
        clear_background(LIGHT_BLUE);

        let title = "CHOOSE YOUR CAR";
        let size = measure_text(title, None, 48, 1.0);
        draw_text(title, SCREEN_WIDTH / 2.0 - size.width / 2.0, 60.0, 48.0, BLACK);

        // Car previews in a row, selection framed in green
        let spacing = SCREEN_WIDTH / (CarModel::COUNT as f32 + 1.0);
        for (i, preview) in self.previews.iter().enumerate() {
            let x = spacing * (i as f32 + 1.0) - CAR_WIDTH / 2.0;
            let y = SCREEN_HEIGHT / 2.0 - CAR_HEIGHT / 2.0 - 30.0;
            if i == self.model_index {
                draw_rectangle_lines(x - 10.0, y - 10.0, CAR_WIDTH + 20.0, CAR_HEIGHT + 20.0, 3.0, GREEN);
            }
            preview.draw_at(x, y);

            let label = CarModel::ALL[i].label();
            let label_size = measure_text(label, None, 24, 1.0);
            draw_text(
                label,
                x + CAR_WIDTH / 2.0 - label_size.width / 2.0,
                y + CAR_HEIGHT + 30.0,
                24.0,
                BLACK,
            );
        }

        // Color swatch row
        let swatch = 30.0;
        let swatch_gap = 40.0;
        let row_w = CAR_COLORS.len() as f32 * swatch_gap;
        for (i, color) in CAR_COLORS.iter().enumerate() {
            let x = SCREEN_WIDTH / 2.0 - row_w / 2.0 + i as f32 * swatch_gap;
            let y = SCREEN_HEIGHT / 2.0 + 120.0;
            draw_rectangle(x, y, swatch, swatch, *color);
            if i == self.color_index {
                draw_rectangle_lines(x - 2.0, y - 2.0, swatch + 4.0, swatch + 4.0, 2.0, WHITE);
            }
        }

        // Time-of-day row
        for (i, time) in TimeOfDay::ALL.iter().enumerate() {
            let x = SCREEN_WIDTH / 2.0 - 150.0 + i as f32 * 100.0;
            let y = SCREEN_HEIGHT / 2.0 + 200.0;
            let color = if i == self.time_index { GREEN } else { BLACK };
            draw_text(time.label(), x, y, 24.0, color);
            if i == self.time_index {
                let size = measure_text(time.label(), None, 24, 1.0);
                draw_rectangle_lines(x - 5.0, y - 22.0, size.width + 10.0, 30.0, 2.0, GREEN);
            }
        }

        for (i, line) in [
            "Left/Right: car   Up/Down: color   1-3: time of day",
            "Enter: start",
        ]
        .iter()
        .enumerate()
        {
            let size = measure_text(line, None, 20, 1.0);
            draw_text(
                line,
                SCREEN_WIDTH / 2.0 - size.width / 2.0,
                SCREEN_HEIGHT - 70.0 + i as f32 * 30.0,
                20.0,
                BLACK,
            );
        }
    }
}
