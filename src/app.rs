//! Top-level application state
//!
//! Two screens, one live at a time: the selection menu and a driving
//! session. The menu's confirmed configuration constructs the session;
//! when a terminal session is dismissed we rebuild a fresh menu.
//! The sprite cache and rng live here and are shared across screens.

use ::rand::rngs::ThreadRng;

use crate::menu::{MenuEvent, SelectionMenu};
use crate::session::{GameSession, SteerInput};
use crate::sprite::SpriteCache;

/// Which screen owns the frame
pub enum Screen {
    Selection(SelectionMenu),
    Driving(GameSession),
}

pub struct App {
    pub screen: Screen,
    cache: SpriteCache,
    rng: ThreadRng,
}

impl App {
    pub fn new() -> Self {
        let mut cache = SpriteCache::new();
        let mut rng = rand::thread_rng();
        let menu = SelectionMenu::new(&mut cache, &mut rng);
        Self { screen: Screen::Selection(menu), cache, rng }
    }

    /// Feed one discrete event to the menu; a confirmed configuration
    /// starts a session.
    pub fn menu_event(&mut self, event: MenuEvent) {
        if let Screen::Selection(menu) = &mut self.screen {
            if let Some(config) = menu.handle_input(event, &mut self.cache, &mut self.rng) {
                match GameSession::new(&config, &mut self.cache, &mut self.rng) {
                    Ok(session) => self.screen = Screen::Driving(session),
                    // The menu only emits in-range indices, so this is a
                    // contract violation worth shouting about.
                    Err(err) => println!("rejected menu configuration: {err}"),
                }
            }
        }
    }

    /// Run one simulation frame of the active session.
    pub fn frame(&mut self, input: SteerInput) {
        if let Screen::Driving(session) = &mut self.screen {
            session.handle_input(input);
            session.tick(&mut self.rng);
        }
    }

    /// Dismiss a finished session and return to a fresh menu.
    pub fn back_to_menu(&mut self) {
        let menu = SelectionMenu::new(&mut self.cache, &mut self.rng);
        self.screen = Screen::Selection(menu);
    }

    pub fn render(&self) {
        match &self.screen {
            Screen::Selection(menu) => menu.render(),
            Screen::Driving(session) => session.render(),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
