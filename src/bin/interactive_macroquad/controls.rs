use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};

use projectile_sim::core::aim::{
    AimInput, MAX_ANGLE_DEG, MAX_DRAG, MAX_SPEED_MPS, MIN_ANGLE_DEG, MIN_DRAG, MIN_SPEED_MPS,
};

use crate::state::AppRuntime;

const WIND_SLIDER_LIMIT_MPS: f32 = 50.0;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) fire: bool,
    pub(crate) reset: bool,
    pub(crate) toggle_pause: bool,
    pub(crate) toggle_panel: bool,
    pub(crate) quit: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            fire: self.fire || other.fire,
            reset: self.reset || other.reset,
            toggle_pause: self.toggle_pause || other.toggle_pause,
            toggle_panel: self.toggle_panel || other.toggle_panel,
            quit: self.quit || other.quit,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        fire: is_key_pressed(KeyCode::Space),
        reset: is_key_pressed(KeyCode::R),
        toggle_pause: is_key_pressed(KeyCode::P),
        toggle_panel: is_key_pressed(KeyCode::H),
        quit: is_key_pressed(KeyCode::Escape),
    }
}

pub(crate) fn held_aim_input() -> AimInput {
    AimInput {
        angle_down: is_key_down(KeyCode::Left),
        angle_up: is_key_down(KeyCode::Right),
        speed_up: is_key_down(KeyCode::Up),
        speed_down: is_key_down(KeyCode::Down),
        wind_left: is_key_down(KeyCode::A),
        wind_right: is_key_down(KeyCode::D),
        drag_down: is_key_down(KeyCode::W),
        drag_up: is_key_down(KeyCode::S),
    }
}

/// What the aim value was after the panel last ran. The macroquad slider
/// re-parses and clamps its value whenever the formatted number differs from the
/// previous frame, which also happens when the keyboard moved the aim. Output is
/// only taken as a user edit when nothing else touched the value in between.
#[derive(Default, Clone, Copy, Debug)]
pub(crate) struct SliderMemory {
    last_value: Option<f64>,
}

impl SliderMemory {
    pub(crate) fn user_edit(&self, value: f64, emitted: f32) -> Option<f64> {
        let untouched = self.last_value == Some(value);
        (untouched && emitted != value as f32).then_some(emitted as f64)
    }

    pub(crate) fn remember(&mut self, value: f64) {
        self.last_value = Some(value);
    }
}

#[derive(Default, Clone, Copy, Debug)]
pub(crate) struct PanelMemory {
    pub(crate) angle: SliderMemory,
    pub(crate) speed: SliderMemory,
    pub(crate) wind: SliderMemory,
    pub(crate) drag: SliderMemory,
}

fn slider_f64(
    ui: &mut macroquad::ui::Ui,
    id: u64,
    label: &str,
    range: std::ops::Range<f32>,
    value: f64,
    memory: &SliderMemory,
) -> Option<f64> {
    let mut current = value as f32;
    ui.slider(id, label, range, &mut current);
    memory.user_edit(value, current)
}

pub(crate) fn draw_control_panel(state: &mut AppRuntime) -> FrameActions {
    let mut actions = FrameActions::default();
    if !state.show_panel {
        return actions;
    }

    let aim = &mut state.aim;
    let memory = &mut state.panel_memory;
    let paused = state.paused;
    let live = state.field.len();
    widgets::Window::new(hash!(), vec2(690.0, 70.0), vec2(300.0, 230.0))
        .label("Launch Controls (H hides)")
        .ui(&mut *root_ui(), |ui| {
            if let Some(angle) = slider_f64(
                ui,
                hash!(),
                "Angle (deg)",
                MIN_ANGLE_DEG as f32..MAX_ANGLE_DEG as f32,
                aim.angle_deg,
                &memory.angle,
            ) {
                aim.set_angle(angle);
            }
            memory.angle.remember(aim.angle_deg);

            if let Some(speed) = slider_f64(
                ui,
                hash!(),
                "Speed (m/s)",
                MIN_SPEED_MPS as f32..MAX_SPEED_MPS as f32,
                aim.speed_mps,
                &memory.speed,
            ) {
                aim.set_speed(speed);
            }
            memory.speed.remember(aim.speed_mps);

            if let Some(wind) = slider_f64(
                ui,
                hash!(),
                "Wind (m/s)",
                -WIND_SLIDER_LIMIT_MPS..WIND_SLIDER_LIMIT_MPS,
                aim.wind_mps,
                &memory.wind,
            ) {
                aim.set_wind(wind);
            }
            memory.wind.remember(aim.wind_mps);

            if let Some(drag) = slider_f64(
                ui,
                hash!(),
                "Drag coef",
                MIN_DRAG as f32..MAX_DRAG as f32,
                aim.drag_coef,
                &memory.drag,
            ) {
                aim.set_drag(drag);
            }
            memory.drag.remember(aim.drag_coef);

            ui.separator();
            if ui.button(None, "Fire (Space)") {
                actions.fire = true;
            }
            if ui.button(None, "Reset (R)") {
                actions.reset = true;
            }
            if ui.button(None, if paused { "Resume (P)" } else { "Pause (P)" }) {
                actions.toggle_pause = true;
            }
            ui.label(None, &format!("Live projectiles: {live}"));
        });

    actions
}
