use macroquad::prelude::*;

use projectile_sim::core::motion::{Playfield, Projectile};

use crate::constants::{
    GROUND, HUB, INK, LAUNCHER_BARREL_LENGTH, LAUNCHER_BARREL_THICKNESS, LAUNCHER_HUB_RADIUS,
    PAUSED_BANNER, PROJECTILE, PROJECTILE_RADIUS, TRAIL, TRAIL_DOTS, TRAIL_SPACING_S,
};

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

pub(crate) fn draw_ground(playfield: &Playfield) {
    let ground_y = playfield.ground_y as f32;
    draw_rectangle(
        0.0,
        ground_y,
        playfield.width as f32,
        (playfield.height - playfield.ground_y).max(0.0) as f32,
        GROUND,
    );
}

pub(crate) fn draw_launcher(playfield: &Playfield, angle_deg: f64) {
    let (x, y) = (
        playfield.launch_origin.0 as f32,
        playfield.launch_origin.1 as f32,
    );
    let theta = -(angle_deg as f32).to_radians();
    let end_x = x + LAUNCHER_BARREL_LENGTH * theta.cos();
    let end_y = y + LAUNCHER_BARREL_LENGTH * theta.sin();
    draw_line(x, y, end_x, end_y, LAUNCHER_BARREL_THICKNESS, INK);
    draw_circle(x, y, LAUNCHER_HUB_RADIUS, HUB);
}

/// Body plus a few fading dots stepped back along the current velocity.
pub(crate) fn draw_projectiles(projectiles: &[Projectile]) {
    for p in projectiles {
        let (px, py) = (p.x as f32, p.y as f32);
        draw_circle(px, py, PROJECTILE_RADIUS, PROJECTILE);

        if p.elapsed_s > 0.0 {
            let (vx, vy) = (p.vx as f32, p.vy as f32);
            for t in 1..=TRAIL_DOTS {
                let back = t as f32 * TRAIL_SPACING_S;
                let radius = (4.0 - t as f32).max(1.0);
                draw_circle(px - vx * back, py - vy * back, radius, TRAIL);
            }
        }
    }
}

pub(crate) fn draw_paused_banner(screen_w: f32, font: Option<&Font>) {
    let label = "PAUSED (P to resume)";
    let size = measure_text(label, font, 28, 1.0);
    draw_ui_text(
        label,
        (screen_w - size.width) * 0.5,
        140.0,
        28,
        PAUSED_BANNER,
        font,
    );
}
