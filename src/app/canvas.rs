use super::MeterApp;
use crate::scene::{self, DrawCmd, SCENE_HEIGHT};
use crate::sequence::RAIL_WIDTH;
use egui::{Pos2, Rect, Sense, Shape, Stroke, pos2, vec2};

/// Degrees of arc per flattened polyline step.
const ARC_STEP_DEG: f32 = 4.0;

impl MeterApp {
    pub(crate) fn ui_canvas(&mut self, ui: &mut egui::Ui) {
        let scale = (ui.available_width() / RAIL_WIDTH).clamp(1.0, self.config.max_scale_factor());
        let desired = vec2(RAIL_WIDTH * scale, SCENE_HEIGHT * scale);
        let (response, painter) = ui.allocate_painter(desired, Sense::click());
        let rect = response.rect;

        // Pointer positions are snapped to whole model pixels so that the
        // exact-boundary classifications stay reachable at any zoom.
        let to_model = |pos: Pos2| {
            pos2(
                ((pos.x - rect.min.x) / scale).round().clamp(0.0, RAIL_WIDTH),
                ((pos.y - rect.min.y) / scale).round().clamp(0.0, SCENE_HEIGHT),
            )
        };

        if response.clicked()
            && let Some(pos) = response.interact_pointer_pos()
        {
            self.controller.on_click(to_model(pos));
        } else if let Some(pos) = response.hover_pos() {
            let model = to_model(pos);
            if self.last_move != Some(model) {
                self.last_move = Some(model);
                self.controller.on_move(model);
            }
        }

        let scene = scene::build_scene(self.controller.sequence(), self.controller.state());
        let rail_stroke = self.config.rail.stroke();
        let figure_stroke = self.config.diagram.stroke();
        for cmd in &scene.rail {
            paint_cmd(&painter, rect, scale, cmd, rail_stroke);
        }
        for cmd in &scene.figures {
            paint_cmd(&painter, rect, scale, cmd, figure_stroke);
        }
    }
}

fn paint_cmd(painter: &egui::Painter, rect: Rect, scale: f32, cmd: &DrawCmd, stroke: Stroke) {
    let to_screen = |p: Pos2| rect.min + p.to_vec2() * scale;
    match cmd {
        DrawCmd::Line { from, to } => {
            painter.line_segment([to_screen(*from), to_screen(*to)], stroke);
        }
        DrawCmd::Arc {
            x,
            y,
            w,
            h,
            start_deg,
            sweep_deg,
        } => {
            let points: Vec<Pos2> = flatten_arc(*x, *y, *w, *h, *start_deg, *sweep_deg)
                .into_iter()
                .map(to_screen)
                .collect();
            painter.add(Shape::line(points, stroke));
        }
        DrawCmd::FilledRect { x, y, w, h } => {
            let min = to_screen(pos2(*x, *y));
            painter.rect_filled(
                Rect::from_min_size(min, vec2(w * scale, h * scale)),
                0.0,
                stroke.color,
            );
        }
        DrawCmd::Text { s, pos } => {
            painter.text(
                to_screen(*pos),
                egui::Align2::LEFT_BOTTOM,
                s,
                egui::FontId::proportional(12.0 * scale),
                stroke.color,
            );
        }
    }
}

/// Flatten an elliptical arc into a polyline. `x`/`y` name the top-left
/// of the bounding box; angles run counter-clockwise from three o'clock,
/// so the sweeps below the rail live in negative degrees.
fn flatten_arc(x: f32, y: f32, w: f32, h: f32, start_deg: f32, sweep_deg: f32) -> Vec<Pos2> {
    let (cx, cy) = (x + w / 2.0, y + h / 2.0);
    let (rx, ry) = (w / 2.0, h / 2.0);
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let steps = ((sweep_deg.abs() / ARC_STEP_DEG).ceil() as usize).max(2);
    (0..=steps)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let frac = i as f32 / steps as f32;
            let rad = sweep_deg.mul_add(frac, start_deg).to_radians();
            pos2(rx.mul_add(rad.cos(), cx), ry.mul_add(-rad.sin(), cy))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flattened_arc_endpoints_match_the_angle_convention() {
        // Lower half of a circle of radius 10 centered at (10, 10).
        let points = flatten_arc(0.0, 0.0, 20.0, 20.0, 0.0, -180.0);
        let first = points[0];
        let last = points[points.len() - 1];
        assert!((first.x - 20.0).abs() < 1e-4 && (first.y - 10.0).abs() < 1e-4);
        assert!(last.x.abs() < 1e-4 && (last.y - 10.0).abs() < 1e-4);
        // Midpoint dips below the center, not above.
        let mid = points[points.len() / 2];
        assert!(mid.y > 10.0);
    }

    #[test]
    fn flattened_arc_always_has_at_least_a_segment() {
        assert!(flatten_arc(0.0, 0.0, 10.0, 10.0, 0.0, 1.0).len() >= 3);
    }
}
