use macroquad::prelude::*;

use projectile_sim::core::ballistics::{RangeEstimate, range_estimate};

use crate::constants::{HUD_FONT_SIZE, HUD_LINE_HEIGHT, INK};
use crate::render::draw_ui_text;
use crate::state::AppRuntime;

pub(crate) fn draw_hud(state: &AppRuntime, screen_w: f32, screen_h: f32, font: Option<&Font>) {
    draw_aim_readout(state, font);
    draw_summary(state, screen_w, font);
    draw_wind_indicator(state, screen_w, screen_h, font);
}

fn draw_aim_readout(state: &AppRuntime, font: Option<&Font>) {
    let aim = state.aim;
    let lines = [
        format!("Angle: {:.1} deg (Left/Right keys)", aim.angle_deg),
        format!("Speed: {:.1} m/s (Up/Down keys)", aim.speed_mps),
        format!("Wind: {:.1} m/s (A/D keys)", aim.wind_mps),
        format!("Drag coef: {:.3} (W/S keys)", aim.drag_coef),
    ];
    // Text baselines, so the first line sits one line height down.
    for (idx, line) in lines.iter().enumerate() {
        draw_ui_text(
            line,
            10.0,
            10.0 + HUD_LINE_HEIGHT * (idx as f32 + 1.0),
            HUD_FONT_SIZE,
            INK,
            font,
        );
    }
    draw_ui_text(
        "Space: launch projectile    R: reset    P: pause    Esc: quit",
        10.0,
        10.0 + HUD_LINE_HEIGHT * 5.5,
        HUD_FONT_SIZE,
        INK,
        font,
    );
    draw_ui_text(
        &state.status_line,
        10.0,
        10.0 + HUD_LINE_HEIGHT * 6.5,
        HUD_FONT_SIZE,
        DARKGRAY,
        font,
    );
}

fn draw_summary(state: &AppRuntime, screen_w: f32, font: Option<&Font>) {
    draw_ui_text(
        &format!("Projectiles: {}", state.field.len()),
        screen_w - 160.0,
        10.0 + HUD_LINE_HEIGHT,
        HUD_FONT_SIZE,
        INK,
        font,
    );

    let gravity = state.field.tuning().gravity_mps2;
    let (text, x) = match range_estimate(&state.aim, gravity) {
        RangeEstimate::Ideal(range_m) => (
            format!("Ideal range (no drag): {range_m:.1} m"),
            screen_w - 260.0,
        ),
        RangeEstimate::DragActive => (
            "(Drag active: simulation estimate only)".to_string(),
            screen_w - 300.0,
        ),
    };
    draw_ui_text(
        &text,
        x,
        10.0 + HUD_LINE_HEIGHT * 2.0,
        HUD_FONT_SIZE,
        INK,
        font,
    );
}

fn draw_wind_indicator(state: &AppRuntime, screen_w: f32, screen_h: f32, font: Option<&Font>) {
    let wind = state.aim.wind_mps as f32;
    let x = screen_w - 160.0;
    let y = screen_h - 30.0;
    draw_ui_text(
        &format!("Wind: {wind:.1} m/s"),
        x,
        y + HUD_LINE_HEIGHT * 0.5,
        HUD_FONT_SIZE,
        INK,
        font,
    );

    // Arrow length follows wind strength, capped to stay on screen.
    let len = (wind * 3.0).clamp(-60.0, 60.0);
    if len.abs() > 1.0 {
        let arrow_y = y - 8.0;
        let start = x + 70.0 - len * 0.5;
        let end = x + 70.0 + len * 0.5;
        let head = 6.0 * len.signum();
        draw_line(start, arrow_y, end, arrow_y, 2.0, INK);
        draw_triangle(
            vec2(end + head, arrow_y),
            vec2(end - head, arrow_y - 5.0),
            vec2(end - head, arrow_y + 5.0),
            INK,
        );
    }
}
