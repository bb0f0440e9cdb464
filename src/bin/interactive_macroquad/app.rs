use macroquad::prelude::*;
use tracing::{info, warn};

use crate::constants::{BACKGROUND, MSAA_SAMPLES, UI_FONT_PATH, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::controls::{draw_control_panel, hotkey_actions};
use crate::gameplay::{apply_actions, apply_keyboard_adjustments, step_live_projectiles};
use crate::hud::draw_hud;
use crate::render::{draw_ground, draw_launcher, draw_paused_banner, draw_projectiles};
use crate::state::AppRuntime;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Projectile Physics Simulator".to_string(),
        window_width: WINDOW_WIDTH,
        window_height: WINDOW_HEIGHT,
        window_resizable: false,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

pub(crate) async fn run() {
    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            warn!(path = UI_FONT_PATH, %err, "font load failed, using default font");
            None
        }
    };

    let mut state = AppRuntime::new();
    info!(
        width = state.field.playfield().width,
        ground_y = state.field.playfield().ground_y,
        "simulator started"
    );

    loop {
        let frame_dt = get_frame_time();
        let screen_w = screen_width();
        let screen_h = screen_height();

        let actions = hotkey_actions().merge(draw_control_panel(&mut state));
        if apply_actions(&mut state, actions) {
            break;
        }

        apply_keyboard_adjustments(&mut state, frame_dt);
        step_live_projectiles(&mut state, frame_dt);

        clear_background(BACKGROUND);
        draw_ground(state.field.playfield());
        draw_launcher(state.field.playfield(), state.aim.angle_deg);
        draw_projectiles(state.field.projectiles());
        draw_hud(&state, screen_w, screen_h, ui_font.as_ref());
        if state.paused {
            draw_paused_banner(screen_w, ui_font.as_ref());
        }

        next_frame().await;
    }
}
