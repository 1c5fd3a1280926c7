//! Translation from the stored points and derived state to an ordered list
//! of drawing primitives. No classification happens here; every decision
//! was already made by the controller.

use crate::controller::DerivedState;
use crate::sequence::{EventSequence, SLOT_COUNT};
use egui::{Pos2, pos2};

/// Tick subdivisions per Lim along the rail.
const TICK_INTERVAL: usize = 5;

const RAIL_Y: f32 = 10.0;
const LABEL_Y: f32 = 25.0;
const EVENT_Y: f32 = 50.0;
const ARC1_Y: f32 = 55.0;
const ARC2_Y: f32 = 80.0;
const ARC_H: f32 = 15.0;
const TEMPO_Y: f32 = 110.0;
const ACCENT_Y: f32 = 45.0;

/// Total drawn height of the diagram in model pixels.
pub const SCENE_HEIGHT: f32 = 130.0;

/// A drawing-surface primitive. Arc angles follow the AWT convention:
/// 0 degrees at three o'clock, positive angles toward screen-up, so the
/// arcs that bulge below the rail live in negative angles.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Line {
        from: Pos2,
        to: Pos2,
    },
    Arc {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        start_deg: f32,
        sweep_deg: f32,
    },
    FilledRect {
        x: f32,
        y: f32,
        w: f32,
        h: f32,
    },
    Text {
        s: String,
        pos: Pos2,
    },
}

/// Primitives split by stroke: the static rail underneath, the performed
/// figures on top.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    pub rail: Vec<DrawCmd>,
    pub figures: Vec<DrawCmd>,
}

fn line(out: &mut Vec<DrawCmd>, x1: f32, y1: f32, x2: f32, y2: f32) {
    out.push(DrawCmd::Line {
        from: pos2(x1, y1),
        to: pos2(x2, y2),
    });
}

fn half_arc(out: &mut Vec<DrawCmd>, x: f32, y: f32, w: f32) {
    out.push(DrawCmd::Arc {
        x,
        y,
        w,
        h: ARC_H,
        start_deg: 0.0,
        sweep_deg: -180.0,
    });
}

fn quarter_arc(out: &mut Vec<DrawCmd>, x: f32, y: f32, w: f32, h: f32) {
    out.push(DrawCmd::Arc {
        x,
        y,
        w,
        h,
        start_deg: -90.0,
        sweep_deg: -90.0,
    });
}

/// The projected duration: nine 10-degree segments marching through the
/// lower half of the ellipse, from three o'clock round to nine.
fn dashed_projection(out: &mut Vec<DrawCmd>, start: f32, length: f32, y: f32) {
    for i in (0..17).step_by(2) {
        out.push(DrawCmd::Arc {
            x: start,
            y,
            w: length,
            h: ARC_H,
            start_deg: -10.0 * i as f32,
            sweep_deg: 10.0,
        });
    }
}

/// The trailing half of the dashed projection, used where the alternate
/// interpretation shows a denied first projection.
fn dashed_projection_tail(out: &mut Vec<DrawCmd>, start: f32, length: f32, y: f32) {
    for i in (8..17).step_by(2) {
        out.push(DrawCmd::Arc {
            x: start,
            y,
            w: length,
            h: ARC_H,
            start_deg: -10.0 * i as f32,
            sweep_deg: 10.0,
        });
    }
}

fn arrowhead(out: &mut Vec<DrawCmd>, x: f32, y: f32) {
    line(out, x, y, x - 5.0, y + 5.0);
    line(out, x, y, x + 5.0, y + 5.0);
    line(out, x - 5.0, y + 5.0, x + 5.0, y + 5.0);
}

/// Hiatus double bar just past the projected limit.
fn rail_tracks(out: &mut Vec<DrawCmd>, x: f32, y: f32) {
    line(out, x - 5.0, y - 5.0, x - 5.0, y + 5.0);
    line(out, x - 8.0, y - 5.0, x - 8.0, y + 5.0);
}

/// Curved arrow pointing at the unconditioned new beginning.
fn curved_arrow(out: &mut Vec<DrawCmd>, x: f32) {
    quarter_arc(out, x, 60.0, 30.0, ARC_H);
    line(out, x + 10.0, 70.0, x + 15.0, 75.0);
    line(out, x + 10.0, 80.0, x + 15.0, 75.0);
}

/// X through the first dashed projection, centered at 1.5 times `anchor`.
fn cross_mark(out: &mut Vec<DrawCmd>, anchor: f32) {
    let halfway = 1.5 * anchor;
    line(out, halfway - 10.0, 65.0, halfway + 10.0, 75.0);
    line(out, halfway - 10.0, 75.0, halfway + 10.0, 65.0);
}

fn accent(out: &mut Vec<DrawCmd>, center: f32, height: f32) {
    line(out, center - 2.0, height - 2.0, center + 2.0, height);
    line(out, center - 2.0, height + 2.0, center + 2.0, height);
}

/// Hypothetical parenthesized event at the projected boundary.
fn short_parenthesis(out: &mut Vec<DrawCmd>, center: f32) {
    out.push(DrawCmd::Text {
        s: "(".to_owned(),
        pos: pos2(center, 60.0),
    });
    line(out, center + 2.0, 55.0, center + 30.0, 55.0);
    out.push(DrawCmd::Text {
        s: ")".to_owned(),
        pos: pos2(center + 32.0, 60.0),
    });
}

fn text(out: &mut Vec<DrawCmd>, s: &str, x: f32, y: f32) {
    out.push(DrawCmd::Text {
        s: s.to_owned(),
        pos: pos2(x, y),
    });
}

fn rail(out: &mut Vec<DrawCmd>, unit: f32) {
    line(out, 0.0, RAIL_Y, 3.0 * unit, RAIL_Y);
    let sub = unit / TICK_INTERVAL as f32;
    for n in 0..3 * TICK_INTERVAL {
        let x = n as f32 * sub;
        line(out, x, RAIL_Y - 2.0, x, RAIL_Y + 2.0);
    }
    for k in 0..4 {
        let x = k as f32 * unit;
        line(out, x, RAIL_Y - 5.0, x, RAIL_Y + 5.0);
        match k {
            0 => text(out, "0", x + 3.0, LABEL_Y),
            1 => text(out, "Lim", x - 10.0, LABEL_Y),
            2 => text(out, "2*Lim", x - 20.0, LABEL_Y),
            _ => text(out, "3*Lim", x - 35.0, LABEL_Y),
        }
    }
}

/// Growing arcs while a projective potential is accumulating. The first
/// arc is anchored at the origin, the second at the second sound's onset;
/// both reach out to the live pointer, never shrinking back past the
/// duration already performed.
fn growing_arcs(out: &mut Vec<DrawCmd>, seq: &EventSequence, state: &DerivedState) {
    let Some(end) = state.pending_arc_end.map(|p| p.x) else {
        return;
    };
    if state.arcing1 {
        let offset1 = if state.in_event1 {
            state.provisional
        } else {
            seq.point_at(1)
        };
        if let Some(offset1) = offset1 {
            let w = if offset1.x <= end { 2.0 * end } else { 2.0 * offset1.x };
            quarter_arc(out, 0.0, ARC1_Y, w, ARC_H);
        }
    } else if state.arcing2
        && let Some(start) = seq.point_at(2).map(|p| p.x)
    {
        if state.in_event2 {
            if state.provisional.is_some() {
                quarter_arc(out, start, ARC2_Y, 2.0 * (end - start), ARC_H);
            }
        } else if let Some(offset2) = seq.point_at(3).map(|p| p.x) {
            let w = if offset2 <= end {
                2.0 * (end - start)
            } else {
                2.0 * (offset2 - start)
            };
            quarter_arc(out, start, ARC2_Y, w, ARC_H);
        }
    }
}

/// Realized projections: once a sound, a pause, and the next onset exist,
/// the interonset duration gets a solid arc with an arrowhead and a dashed
/// projection of equal length extending into the future.
fn projection_pairs(out: &mut Vec<DrawCmd>, seq: &EventSequence, state: &DerivedState) {
    for m in [0, 2] {
        let (Some(p1), Some(_), Some(p3)) = (
            seq.point_at(m),
            seq.point_at(m + 1),
            seq.point_at(m + 2),
        ) else {
            continue;
        };
        let (x_start, x_end) = (p1.x, p3.x);
        if m == 0 {
            half_arc(out, x_start, ARC1_Y, x_end - x_start);
            arrowhead(out, x_end, ARC1_Y);
            if state.dashed_arc_redraw {
                if let Some(third_onset) = seq.point_at(4).map(|p| p.x) {
                    // The projection is stretched (or squeezed) out to the
                    // third onset, and the tempo shift is named.
                    let label = if third_onset > 2.0 * x_end { "rall." } else { "accel." };
                    text(out, label, third_onset - 20.0, TEMPO_Y);
                    dashed_projection(out, x_end, third_onset - x_end, ARC1_Y);
                }
            } else {
                dashed_projection(out, x_end, x_end - x_start, ARC1_Y);
            }
        } else {
            half_arc(out, x_start, ARC2_Y, x_end - x_start);
            arrowhead(out, x_end, ARC2_Y);
            dashed_projection(out, x_end, x_end - x_start, ARC2_Y);
        }
    }
}

/// The alternate interpretation: the second onset is an unequivocal new
/// beginning, denying the first projection (X through its dashed remnant)
/// in favor of one large projective potential.
fn alternate_view(out: &mut Vec<DrawCmd>, seq: &EventSequence) {
    let (Some(p0), Some(p2), Some(p4)) =
        (seq.point_at(0), seq.point_at(2), seq.point_at(4))
    else {
        return;
    };
    let (x_start, x_end1, x_end2) = (p0.x, p2.x, p4.x);
    half_arc(out, x_start, ARC1_Y, x_end1 - x_start);
    arrowhead(out, x_end1, ARC1_Y);
    dashed_projection_tail(out, x_end1, x_end2 - x_end1, ARC1_Y);
    cross_mark(out, (x_end1 + x_end2) / 3.0);
    accent(out, x_end2, ACCENT_Y);
    half_arc(out, x_start, ARC2_Y, x_end2 - x_start);
    arrowhead(out, x_end2, ARC2_Y);
    dashed_projection(out, x_end2, x_end2 - x_start, ARC2_Y);
}

/// Build the full primitive list for the current state. Pure and
/// idempotent; called on every repaint.
pub fn build_scene(seq: &EventSequence, state: &DerivedState) -> Scene {
    let unit = seq.unit_length();
    let mut scene = Scene::default();

    rail(&mut scene.rail, unit);
    let out = &mut scene.figures;

    for i in 0..SLOT_COUNT {
        if let Some(p) = seq.point_at(i) {
            out.push(DrawCmd::FilledRect {
                x: p.x - 1.0,
                y: EVENT_Y,
                w: 2.0,
                h: 2.0,
            });
        }
    }

    // Drag segments while a sound is being performed.
    if state.in_event1
        && seq.point_at(1).is_none()
        && let (Some(onset), Some(prov)) = (seq.point_at(0), state.provisional)
    {
        line(out, onset.x, EVENT_Y, prov.x, EVENT_Y);
    }
    if state.in_event2
        && seq.point_at(3).is_none()
        && let (Some(onset), Some(prov)) = (seq.point_at(2), state.provisional)
    {
        line(out, onset.x, EVENT_Y, prov.x, EVENT_Y);
    }

    // Completed sounds.
    for m in [0, 2, 4] {
        if let (Some(start), Some(end)) = (seq.point_at(m), seq.point_at(m + 1)) {
            line(out, start.x, EVENT_Y, end.x, EVENT_Y);
        }
    }

    if state.alternate_view {
        alternate_view(out, seq);
        return scene;
    }

    growing_arcs(out, seq, state);

    if state.rail_tracks
        && let (Some(second_onset), Some(third_onset)) = (seq.point_at(2), seq.point_at(4))
    {
        rail_tracks(out, second_onset.x + unit, EVENT_Y);
        curved_arrow(out, third_onset.x);
    }

    if let Some(anchor) = state.cross_mark {
        cross_mark(out, anchor);
    }

    if state.short_parenthesis
        && let Some(second_onset) = seq.point_at(2)
    {
        short_parenthesis(out, 2.0 * second_onset.x);
    }

    projection_pairs(out, seq, state);

    scene
}
