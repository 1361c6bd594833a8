//! City Rush: a single-screen arcade driving game
//!
//! Steer a hand-drawn car down a scrolling road, dodge pedestrians,
//! collect cargo boxes to clear per-level score targets. Every visual is
//! generated at runtime from primitive-shape instruction lists; nothing
//! is loaded from disk.

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod config;
mod entity;
mod geom;
mod hud;
mod menu;
mod road;
mod session;
mod sprite;
mod theme;

use macroquad::prelude::*;

use app::{App, Screen};
use config::{TimeOfDay, SCREEN_HEIGHT, SCREEN_WIDTH};
use menu::MenuEvent;
use session::SteerInput;

fn window_conf() -> Conf {
    Conf {
        window_title: format!("City Rush v{}", VERSION),
        window_width: SCREEN_WIDTH as i32,
        window_height: SCREEN_HEIGHT as i32,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

/// Translate this frame's key presses into discrete menu events,
/// preserving press order within the fixed check sequence.
fn gather_menu_events() -> Vec<MenuEvent> {
    let mut events = Vec::new();
    if is_key_pressed(KeyCode::Left) {
        events.push(MenuEvent::PrevModel);
    }
    if is_key_pressed(KeyCode::Right) {
        events.push(MenuEvent::NextModel);
    }
    if is_key_pressed(KeyCode::Up) {
        events.push(MenuEvent::PrevColor);
    }
    if is_key_pressed(KeyCode::Down) {
        events.push(MenuEvent::NextColor);
    }
    if is_key_pressed(KeyCode::Key1) {
        events.push(MenuEvent::SetTime(TimeOfDay::Day));
    }
    if is_key_pressed(KeyCode::Key2) {
        events.push(MenuEvent::SetTime(TimeOfDay::Night));
    }
    if is_key_pressed(KeyCode::Key3) {
        events.push(MenuEvent::SetTime(TimeOfDay::Sunset));
    }
    if is_key_pressed(KeyCode::Enter) {
        events.push(MenuEvent::Confirm);
    }
    events
}

/// Sample the held steering keys (arrows or A/D).
fn steer_input() -> SteerInput {
    SteerInput {
        left: is_key_down(KeyCode::Left) || is_key_down(KeyCode::A),
        right: is_key_down(KeyCode::Right) || is_key_down(KeyCode::D),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    println!("City Rush v{VERSION}");
    let mut app = App::new();

    loop {
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        // Decide the frame's work before touching app mutably.
        let session_terminal = match &app.screen {
            Screen::Selection(_) => None,
            Screen::Driving(session) => Some(session.is_terminal()),
        };

        match session_terminal {
            None => {
                for event in gather_menu_events() {
                    app.menu_event(event);
                }
            }
            Some(false) => {
                app.frame(steer_input());
            }
            Some(true) => {
                if is_key_pressed(KeyCode::Enter) || is_key_pressed(KeyCode::R) {
                    app.back_to_menu();
                }
            }
        }

        app.render();
        next_frame().await;
    }
}
