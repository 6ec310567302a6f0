/*
 * Renderer Module
 *
 * This module replays the frame recorded by the school onto the nannou
 * window and draws the optional debug overlay.
 *
 * The simulation works in viewport pixels (origin top-left, y down);
 * nannou puts the origin at the window center with y up, so every point
 * is flipped and every rotation negated on the way out.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::bounds::Viewport;
use crate::canvas::{smooth_outline, Color, DrawCall};
use crate::debug::DebugInfo;

// Samples per quadratic curve when flattening smooth shapes
const CURVE_STEPS: usize = 8;

pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(to_rgb(model.background));

    let viewport = model.school.viewport();

    for call in model.frame.calls() {
        match call {
            DrawCall::Circle { center, radius, color } => {
                draw.ellipse()
                    .xy(to_screen(*center, viewport))
                    .radius(*radius)
                    .color(to_rgb(*color));
            }
            DrawCall::Ellipse {
                center,
                radius_x,
                radius_y,
                rotation,
                color,
            } => {
                draw.ellipse()
                    .xy(to_screen(*center, viewport))
                    .w_h(radius_x * 2.0, radius_y * 2.0)
                    .rotate(-rotation)
                    .color(to_rgb(*color));
            }
            DrawCall::SmoothPolygon { points, color } => {
                let outline = smooth_outline(points, CURVE_STEPS);
                draw.polygon()
                    .color(to_rgb(*color))
                    .points(outline.into_iter().map(|p| to_screen(p, viewport)));
            }
        }
    }

    if model.show_debug {
        draw_debug_info(&draw, &model.debug_info, app.window_rect());
    }

    if let Err(e) = draw.to_frame(app, &frame) {
        log::error!("Failed to render frame: {:?}", e);
    }
}

fn to_screen(p: ::glam::Vec2, viewport: Viewport) -> Point2 {
    pt2(p.x - viewport.width / 2.0, viewport.height / 2.0 - p.y)
}

fn to_rgb(color: Color) -> Rgb<u8> {
    let (r, g, b) = color.rgb();
    rgb(r, g, b)
}

// Draw debug information in the top-left corner
fn draw_debug_info(draw: &Draw, debug_info: &DebugInfo, window_rect: Rect) {
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 200.0;
    let lines = debug_info.lines();
    let panel_height = line_height * lines.len() as f32 + margin;

    draw.rect()
        .x_y(window_rect.left() + panel_width / 2.0, window_rect.top() - panel_height / 2.0)
        .w_h(panel_width, panel_height)
        .color(rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = window_rect.left() + margin;
    let text_y = window_rect.top() - margin;

    for (i, text) in lines.iter().enumerate() {
        draw.text(text)
            .x_y(text_x + 70.0, text_y - i as f32 * line_height)
            .color(WHITE)
            .font_size(14);
    }
}
