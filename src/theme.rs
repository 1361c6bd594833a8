//! Game palette - shared colors for sprites, backdrops and HUD
//!
//! Centralized color definitions so sprite builders, backdrop recipes and
//! menu drawing all pull from one table.

use macroquad::prelude::Color;

// =============================================================================
// Base colors
// =============================================================================

pub const BLACK: Color = Color::new(0.0, 0.0, 0.0, 1.0);
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);
pub const RED: Color = Color::new(1.0, 0.0, 0.0, 1.0);

/// Signal green (menu highlight, win banner)
pub const GREEN: Color = Color::new(0.0, 0.784, 0.0, 1.0); // 0, 200, 0

/// Road asphalt
pub const GRAY: Color = Color::new(0.392, 0.392, 0.392, 1.0); // 100, 100, 100

pub const BROWN: Color = Color::new(0.545, 0.271, 0.075, 1.0); // 139, 69, 19
pub const BLUE: Color = Color::new(0.0, 0.471, 1.0, 1.0); // 0, 120, 255
pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0, 1.0);
pub const DARK_GREEN: Color = Color::new(0.0, 0.392, 0.0, 1.0); // 0, 100, 0

/// Day sky
pub const LIGHT_BLUE: Color = Color::new(0.529, 0.808, 0.922, 1.0); // 135, 206, 235

pub const ORANGE: Color = Color::new(1.0, 0.647, 0.0, 1.0); // 255, 165, 0
pub const SILVER: Color = Color::new(0.753, 0.753, 0.753, 1.0); // 192, 192, 192
pub const PURPLE: Color = Color::new(0.502, 0.0, 0.502, 1.0); // 128, 0, 128
pub const DARK_GRAY: Color = Color::new(0.196, 0.196, 0.196, 1.0); // 50, 50, 50

// =============================================================================
// Night sky
// =============================================================================

/// Night sky fill
pub const NIGHT_BLUE: Color = Color::new(0.098, 0.098, 0.439, 1.0); // 25, 25, 112

/// Moon disc
pub const MOON_LIGHT: Color = Color::new(0.863, 0.863, 0.863, 1.0); // 220, 220, 220

/// Star base tint (brightness scales this toward white)
pub const STAR_COLOR: Color = Color::new(1.0, 1.0, 0.784, 1.0); // 255, 255, 200

// =============================================================================
// Sunset sky
// =============================================================================

/// Sunset sky fill
pub const SUNSET_SKY: Color = Color::new(0.992, 0.549, 0.235, 1.0); // 253, 140, 60

/// Lower horizon band
pub const SUNSET_BAND_LOW: Color = Color::new(0.945, 0.353, 0.133, 1.0); // 241, 90, 34

/// Upper horizon band
pub const SUNSET_BAND_HIGH: Color = Color::new(0.988, 0.690, 0.271, 1.0); // 252, 176, 69

/// Low sun disc at dusk
pub const SUNSET_SUN: Color = Color::new(0.902, 0.224, 0.153, 1.0); // 230, 57, 39

// =============================================================================
// Sprite detail colors
// =============================================================================

/// Semi-transparent car glass
pub const GLASS: Color = Color::new(0.706, 0.902, 1.0, 0.784); // 180, 230, 255, 200

/// Tire rubber
pub const WHEEL: Color = Color::new(0.078, 0.078, 0.078, 1.0); // 20, 20, 20

/// Wheel rim
pub const WHEEL_RIM: Color = Color::new(0.392, 0.392, 0.392, 1.0); // 100, 100, 100

/// Pedestrian skin tone
pub const SKIN: Color = Color::new(1.0, 0.784, 0.588, 1.0); // 255, 200, 150

/// Grille / air-intake slats
pub const GRILLE_DARK: Color = Color::new(0.157, 0.157, 0.157, 1.0); // 40, 40, 40
pub const GRILLE_LIGHT: Color = Color::new(0.235, 0.235, 0.235, 1.0); // 60, 60, 60

/// Foliage speckle on trees
pub const FOLIAGE: Color = Color::new(0.0, 0.471, 0.0, 1.0); // 0, 120, 0

/// Uniform highlight overlay applied to every car sprite
pub const CAR_HIGHLIGHT: Color = Color::new(1.0, 1.0, 1.0, 0.118); // alpha 30

// =============================================================================
// Selectable car body colors (menu color row, in display order)
// =============================================================================

pub const CAR_COLORS: [Color; 8] = [RED, BLUE, GREEN, YELLOW, PURPLE, SILVER, BLACK, ORANGE];
