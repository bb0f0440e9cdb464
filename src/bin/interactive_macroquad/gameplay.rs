use tracing::{debug, info};

use crate::constants::MAX_FRAME_DT_S;
use crate::controls::{FrameActions, held_aim_input};
use crate::state::AppRuntime;

/// Applies discrete actions. Returns `true` when the app should exit.
pub(crate) fn apply_actions(state: &mut AppRuntime, actions: FrameActions) -> bool {
    if actions.quit {
        info!(shots_fired = state.shots_fired, "quit requested");
        return true;
    }

    if actions.fire {
        let shot = state.field.spawn(&state.aim);
        state.shots_fired += 1;
        state.status_line = format!("Fired shot #{}", state.shots_fired);
        info!(
            angle_deg = state.aim.angle_deg,
            speed_mps = state.aim.speed_mps,
            wind_mps = state.aim.wind_mps,
            vx = shot.vx,
            vy = shot.vy,
            live = state.field.len(),
            "projectile fired"
        );
    }

    if actions.reset {
        let cleared = state.field.len();
        state.field.reset();
        state.status_line = "Reset".to_string();
        info!(cleared, "simulation reset");
    }

    if actions.toggle_pause {
        state.paused = !state.paused;
        state.status_line = if state.paused {
            "Paused".to_string()
        } else {
            "Resumed".to_string()
        };
        info!(paused = state.paused, "pause toggled");
    }

    if actions.toggle_panel {
        state.show_panel = !state.show_panel;
    }

    false
}

pub(crate) fn apply_keyboard_adjustments(state: &mut AppRuntime, frame_dt: f32) {
    state.aim.adjust(held_aim_input(), frame_dt as f64);
}

pub(crate) fn step_live_projectiles(state: &mut AppRuntime, frame_dt: f32) {
    if state.paused {
        return;
    }

    let dt = frame_dt.clamp(0.0, MAX_FRAME_DT_S) as f64;
    let tally = state.field.step(dt, state.aim.drag_coef);
    if tally.total() > 0 {
        debug!(
            settled = tally.settled,
            off_screen = tally.off_screen,
            timed_out = tally.timed_out,
            live = state.field.len(),
            "projectiles removed"
        );
    }
}
