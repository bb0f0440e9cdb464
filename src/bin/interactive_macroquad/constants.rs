use macroquad::prelude::Color;

pub const WINDOW_WIDTH: i32 = 1000;
pub const WINDOW_HEIGHT: i32 = 600;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";

// Longer frames (window drag, breakpoint) are truncated before reaching the model.
pub const MAX_FRAME_DT_S: f32 = 0.10;

pub const LAUNCHER_BARREL_LENGTH: f32 = 40.0;
pub const LAUNCHER_BARREL_THICKNESS: f32 = 6.0;
pub const LAUNCHER_HUB_RADIUS: f32 = 8.0;
pub const PROJECTILE_RADIUS: f32 = 6.0;
pub const TRAIL_DOTS: usize = 5;
pub const TRAIL_SPACING_S: f32 = 0.02;

pub const HUD_FONT_SIZE: u16 = 20;
pub const HUD_LINE_HEIGHT: f32 = 20.0;

pub const BACKGROUND: Color = Color::new(1.0, 1.0, 1.0, 1.0);
pub const INK: Color = Color::new(0.078, 0.078, 0.078, 1.0);
pub const GROUND: Color = Color::new(0.196, 0.784, 0.275, 1.0);
pub const PROJECTILE: Color = Color::new(0.863, 0.235, 0.235, 1.0);
pub const TRAIL: Color = Color::new(0.784, 0.471, 0.471, 1.0);
pub const HUB: Color = Color::new(0.784, 0.784, 0.784, 1.0);
pub const PAUSED_BANNER: Color = Color::new(0.235, 0.549, 0.863, 1.0);
