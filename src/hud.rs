//! Score readout and the terminal-state banners

use macroquad::prelude::*;

use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::session::GameSession;
use crate::theme::{GREEN, RED, WHITE};

pub fn draw(session: &GameSession) {
    draw_text(
        &format!("Score: {} / {}", session.score(), session.target()),
        10.0,
        30.0,
        30.0,
        WHITE,
    );
    draw_text(&format!("Level: {}", session.level()), 10.0, 60.0, 30.0, WHITE);

    if session.is_game_over() {
        banner("GAME OVER", RED);
    } else if session.is_win() {
        banner("YOU WIN!", GREEN);
    }
}

fn banner(text: &str, color: Color) {
    // Dim the playfield, then center the verdict and the restart hint
    draw_rectangle(0.0, 0.0, SCREEN_WIDTH, SCREEN_HEIGHT, Color::new(0.0, 0.0, 0.0, 0.5));

    let size = measure_text(text, None, 72, 1.0);
    draw_text(
        text,
        SCREEN_WIDTH / 2.0 - size.width / 2.0,
        SCREEN_HEIGHT / 2.0,
        72.0,
        color,
    );

    let hint = "Enter: back to menu";
    let hint_size = measure_text(hint, None, 24, 1.0);
    draw_text(
        hint,
        SCREEN_WIDTH / 2.0 - hint_size.width / 2.0,
        SCREEN_HEIGHT / 2.0 + 50.0,
        24.0,
        WHITE,
    );
}
