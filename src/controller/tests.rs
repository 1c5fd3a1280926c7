use super::*;
use crate::sequence::SLOT_COUNT;
use egui::pos2;

const Y: f32 = 50.0;

fn click(ctrl: &mut ProjectionController, x: f32) {
    ctrl.on_click(pos2(x, Y));
}

fn hover(ctrl: &mut ProjectionController, x: f32) {
    ctrl.on_move(pos2(x, Y));
}

fn controller_after(clicks: &[f32]) -> ProjectionController {
    let mut ctrl = ProjectionController::default();
    for &x in clicks {
        click(&mut ctrl, x);
    }
    ctrl
}

#[test]
fn fresh_controller_shows_the_introduction() {
    let ctrl = ProjectionController::default();
    assert_eq!(ctrl.sequence().phase(), Phase::Empty);
    assert_eq!(ctrl.state().message, Message::Intro);
    assert!(!ctrl.state().finished);
}

#[test]
fn first_click_starts_sound1_at_the_origin() {
    let ctrl = controller_after(&[64.0]);
    assert_eq!(ctrl.sequence().phase(), Phase::Sound1Started);
    assert_eq!(ctrl.sequence().point_at(0).map(|p| p.x), Some(0.0));
    assert!(ctrl.state().arcing1);
    assert!(ctrl.state().in_event1);
    assert_eq!(ctrl.state().message, Message::Sound1Starts);
}

#[test]
fn walkthrough_to_the_second_sound() {
    let mut ctrl = ProjectionController::default();
    click(&mut ctrl, 0.0);
    hover(&mut ctrl, 50.0);
    assert_eq!(ctrl.state().message, Message::Sound1Continues);
    assert!(ctrl.state().arcing1);

    click(&mut ctrl, 50.0);
    assert_eq!(ctrl.state().message, Message::Sound1Ends);
    assert!(!ctrl.state().in_event1);

    click(&mut ctrl, 90.0);
    assert_eq!(ctrl.sequence().phase(), Phase::Sound2Started);
    assert!(ctrl.state().arcing2);
    assert!(ctrl.state().in_event2);
    assert_eq!(ctrl.state().message, Message::Sound2Starts);
}

#[test]
fn sound1_moves_reclassify_against_lim() {
    let mut ctrl = controller_after(&[0.0]);
    hover(&mut ctrl, 0.0);
    assert_eq!(ctrl.state().message, Message::Sound1Starts);
    hover(&mut ctrl, 120.0);
    assert_eq!(ctrl.state().message, Message::Sound1Continues);
    hover(&mut ctrl, 140.0);
    assert_eq!(ctrl.state().message, Message::Sound1ContinuesTooLong);
    assert!(!ctrl.state().arcing1);
    hover(&mut ctrl, 120.0);
    assert!(ctrl.state().arcing1);
    assert_eq!(ctrl.state().pending_arc_end, Some(pos2(120.0, Y)));
}

#[test]
fn sound1_ending_past_lim_is_a_dead_end() {
    let ctrl = controller_after(&[0.0, 140.0]);
    assert_eq!(ctrl.state().message, Message::Sound1EndsTooLong);
    assert!(ctrl.state().finished);
}

#[test]
fn pause1_moves_track_the_first_arc() {
    let mut ctrl = controller_after(&[0.0, 50.0]);
    hover(&mut ctrl, 40.0);
    assert_eq!(ctrl.state().message, Message::Pause1Negative);
    hover(&mut ctrl, 100.0);
    assert_eq!(ctrl.state().message, Message::Pause1);
    hover(&mut ctrl, 200.0);
    // Past Lim the arc dies and the message band is left as it was.
    assert!(!ctrl.state().arcing1);
    assert_eq!(ctrl.state().message, Message::Pause1);
}

#[test]
fn second_onset_past_lim_is_a_dead_end() {
    let ctrl = controller_after(&[0.0, 50.0, 190.0]);
    assert_eq!(ctrl.state().message, Message::Sound2StartsTooLong);
    assert!(ctrl.state().finished);
}

#[test]
fn sound2_moves_place_and_clear_the_cross_mark() {
    let mut ctrl = controller_after(&[0.0, 50.0, 90.0]);
    hover(&mut ctrl, 200.0);
    assert_eq!(ctrl.state().message, Message::Sound2ContinuesWithoutProjection);
    assert_eq!(ctrl.state().cross_mark, Some(90.0));
    assert!(ctrl.state().arcing2);

    hover(&mut ctrl, 100.0);
    assert_eq!(ctrl.state().message, Message::Sound2Continues);
    assert_eq!(ctrl.state().cross_mark, None);

    hover(&mut ctrl, 300.0);
    assert_eq!(ctrl.state().message, Message::Sound2ContinuesTooLong);
    assert!(!ctrl.state().arcing2);
}

#[test]
fn sound2_provisional_offset_requires_nonnegative_duration() {
    let mut ctrl = controller_after(&[0.0, 50.0, 90.0]);
    hover(&mut ctrl, 70.0);
    assert_eq!(ctrl.state().provisional, None);
    hover(&mut ctrl, 95.0);
    assert_eq!(ctrl.state().provisional, Some(pos2(95.0, Y)));
}

#[test]
fn sound2_ending_far_past_lim_is_a_dead_end() {
    let ctrl = controller_after(&[0.0, 50.0, 90.0, 400.0]);
    assert_eq!(ctrl.state().message, Message::Sound2EndsTooLong);
    assert!(ctrl.state().finished);
}

#[test]
fn sound2_ending_beyond_its_projection_is_a_dead_end() {
    // b = 90: (180, 223) is past the projected doubling but within Lim.
    let ctrl = controller_after(&[0.0, 50.0, 90.0, 200.0]);
    assert_eq!(ctrl.state().message, Message::Sound2EndsWithoutProjection);
    assert!(ctrl.state().finished);
}

#[test]
fn sound2_ending_exactly_at_lim_past_its_onset_is_a_dead_end() {
    // b = 90: an end at 223 sits right on the Lim bound, past 2b.
    let ctrl = controller_after(&[0.0, 50.0, 90.0, 223.0]);
    assert_eq!(ctrl.state().message, Message::Sound2EndsWithoutProjection);
    assert!(ctrl.state().finished);
}

#[test]
fn third_sound_far_beyond_projection_is_a_hiatus() {
    // w = 90, so the Lim bound for the third onset is 223.
    let ctrl = controller_after(&[0.0, 50.0, 90.0, 150.0, 400.0]);
    assert_eq!(ctrl.state().message, Message::Sound3StartsTooLate);
    assert!(ctrl.state().rail_tracks);
    assert!(ctrl.state().finished);
    // The one click produced both third-sound slots.
    assert_eq!(ctrl.sequence().point_at(4).map(|p| p.x), Some(400.0));
    assert_eq!(ctrl.sequence().point_at(5).map(|p| p.x), Some(420.0));
}

#[test]
fn third_sound_slightly_early_is_an_acceleration() {
    // w = 90: [157.5, 180) anticipates the projected boundary.
    let ctrl = controller_after(&[0.0, 50.0, 90.0, 150.0, 160.0]);
    assert_eq!(ctrl.state().message, Message::Sound3StartsAccel);
    assert!(ctrl.state().dashed_arc_redraw);
    assert!(ctrl.state().finished);
    assert_eq!(ctrl.sequence().point_at(5).map(|p| p.x), Some(175.0));
}

#[test]
fn third_sound_exactly_as_projected() {
    let ctrl = controller_after(&[0.0, 50.0, 90.0, 150.0, 180.0]);
    assert_eq!(ctrl.state().message, Message::Sound3StartsExactly);
    assert!(ctrl.state().finished);
    assert_eq!(ctrl.sequence().point_at(5).map(|p| p.x), Some(200.0));
}

#[test]
fn third_sound_slightly_late_is_a_deceleration() {
    // w = 90: (180, 225) cut off by the Lim band at 223 checked first.
    let ctrl = controller_after(&[0.0, 50.0, 90.0, 150.0, 200.0]);
    assert_eq!(ctrl.state().message, Message::Sound3SlightlyLate);
    assert!(ctrl.state().dashed_arc_redraw);
    assert!(ctrl.state().finished);
}

#[test]
fn third_sound_late_enough_for_a_new_projection() {
    // w = 80 leaves room between 2.5w = 200 and w + Lim = 213.
    let ctrl = controller_after(&[0.0, 50.0, 80.0, 120.0, 205.0]);
    assert_eq!(ctrl.state().message, Message::Sound3NewProjection);
    assert!(!ctrl.state().dashed_arc_redraw);
    assert!(ctrl.state().finished);
}

#[test]
fn third_sound_exactly_at_the_new_projection_boundary() {
    // w = 80: the 2.5w boundary itself belongs to the new-projection band.
    let ctrl = controller_after(&[0.0, 50.0, 80.0, 120.0, 200.0]);
    assert_eq!(ctrl.state().message, Message::Sound3NewProjection);
    assert!(ctrl.state().finished);
}

#[test]
fn realized_band_offers_the_alternate_interpretation() {
    // w = 90: [150, 157.5) realizes the projection early.
    let mut ctrl = controller_after(&[0.0, 50.0, 90.0, 150.0, 155.0]);
    assert_eq!(ctrl.state().message, Message::Sound3StartsRealized);
    assert!(ctrl.state().click_to_alternate);
    assert!(ctrl.state().short_parenthesis);
    assert!(ctrl.state().finished);

    // Any click anywhere now switches views instead of placing a point.
    click(&mut ctrl, 10.0);
    assert!(ctrl.state().alternate_view);
    assert!(!ctrl.state().click_to_alternate);
    assert_eq!(ctrl.state().message, Message::Sound3AltInterpretation);
    assert!(ctrl.state().finished);
    assert_eq!(ctrl.sequence().phase(), Phase::Sound3Ended);
}

#[test]
fn anticipated_offset_colliding_with_the_onset_rolls_back() {
    // w = 90: clicking at 178 selects the acceleration band, but the
    // pinned offset 175 would sit left of the onset.
    let mut ctrl = controller_after(&[0.0, 50.0, 90.0, 150.0]);
    click(&mut ctrl, 178.0);
    assert_eq!(ctrl.sequence().phase(), Phase::Sound2Ended);
    assert_eq!(ctrl.state().message, Message::Sound2Ends);
    assert_eq!(ctrl.displayed_instruction(), ORDERING_NOTICE);
    assert!(!ctrl.state().finished);
    assert!(!ctrl.state().dashed_arc_redraw);
}

#[test]
fn clicks_after_finishing_change_nothing() {
    let mut ctrl = controller_after(&[0.0, 50.0, 90.0, 150.0, 400.0]);
    let before = ctrl.state().clone();
    click(&mut ctrl, 250.0);
    hover(&mut ctrl, 250.0);
    assert_eq!(*ctrl.state(), before);
    assert_eq!(ctrl.sequence().phase(), Phase::Sound3Ended);
}

#[test]
fn ordering_violation_leaves_slots_untouched_and_raises_the_notice() {
    let mut ctrl = controller_after(&[0.0, 50.0]);
    click(&mut ctrl, 30.0);
    assert_eq!(ctrl.sequence().phase(), Phase::Sound1Ended);
    assert_eq!(ctrl.sequence().point_at(1).map(|p| p.x), Some(50.0));
    assert_eq!(ctrl.sequence().point_at(2), None);
    assert_eq!(ctrl.state().message, Message::Pause1);
    assert!(ctrl.state().arcing1);
    assert_eq!(ctrl.displayed_instruction(), ORDERING_NOTICE);
    assert_eq!(ctrl.displayed_commentary(), Message::Pause1.commentary());
}

#[test]
fn notice_clears_on_the_next_classified_input() {
    let mut ctrl = controller_after(&[0.0, 50.0]);
    click(&mut ctrl, 30.0);
    assert!(ctrl.notice().is_some());
    hover(&mut ctrl, 100.0);
    assert!(ctrl.notice().is_none());
    assert_eq!(ctrl.displayed_instruction(), Message::Pause1.instruction());
}

#[test]
fn violation_while_defining_sound1_reenters_it() {
    let mut ctrl = controller_after(&[0.0]);
    click(&mut ctrl, -5.0);
    assert_eq!(ctrl.sequence().phase(), Phase::Sound1Started);
    assert_eq!(ctrl.state().message, Message::Sound1Continues);
    assert!(ctrl.state().in_event1);
    assert!(ctrl.state().arcing1);
    assert_eq!(ctrl.displayed_instruction(), ORDERING_NOTICE);
}

#[test]
fn step_back_then_the_same_click_reproduces_the_state() {
    let mut ctrl = controller_after(&[0.0, 50.0, 90.0, 150.0]);
    let before = ctrl.state().clone();
    assert!(ctrl.step_back());
    assert_eq!(ctrl.sequence().phase(), Phase::Sound2Started);
    assert_eq!(ctrl.state().message, Message::Sound2Continues);
    assert!(ctrl.state().in_event2);
    click(&mut ctrl, 150.0);
    assert_eq!(*ctrl.state(), before);
}

#[test]
fn step_back_from_full_removes_the_whole_third_sound() {
    let mut ctrl = controller_after(&[0.0, 50.0, 90.0, 150.0, 400.0]);
    assert!(ctrl.step_back());
    assert_eq!(ctrl.sequence().phase(), Phase::Sound2Ended);
    assert_eq!(ctrl.state().message, Message::Sound2Ends);
    assert!(!ctrl.state().finished);
    assert!(!ctrl.state().rail_tracks);
    assert!(ctrl.state().arcing2);
}

#[test]
fn step_back_clears_a_dead_end() {
    let mut ctrl = controller_after(&[0.0, 50.0, 190.0]);
    assert!(ctrl.state().finished);
    assert!(ctrl.step_back());
    assert!(!ctrl.state().finished);
    assert_eq!(ctrl.state().message, Message::Pause1);
}

#[test]
fn step_back_walks_all_the_way_to_the_introduction() {
    let mut ctrl = controller_after(&[0.0, 50.0, 90.0]);
    assert!(ctrl.step_back());
    assert_eq!(ctrl.state().message, Message::Pause1);
    assert!(ctrl.step_back());
    assert_eq!(ctrl.state().message, Message::Sound1Continues);
    assert!(ctrl.step_back());
    assert_eq!(ctrl.state().message, Message::Intro);
    assert_eq!(ctrl.sequence().phase(), Phase::Empty);
    assert!(!ctrl.step_back());
}

#[test]
fn restart_returns_to_the_defaults() {
    let mut ctrl = controller_after(&[0.0, 50.0, 90.0, 150.0, 400.0]);
    ctrl.restart();
    assert_eq!(ctrl.sequence().phase(), Phase::Empty);
    assert_eq!(*ctrl.state(), DerivedState::default());
    assert!((0..SLOT_COUNT).all(|i| ctrl.sequence().point_at(i).is_none()));
}

#[test]
fn slot_x_values_stay_strictly_increasing_under_arbitrary_clicks() {
    let mut ctrl = ProjectionController::default();
    for &x in &[30.0, 10.0, 80.0, 80.0, 120.0, 90.0, 160.0, 300.0] {
        click(&mut ctrl, x);
        let xs: Vec<f32> = (0..SLOT_COUNT)
            .filter_map(|i| ctrl.sequence().point_at(i).map(|p| p.x))
            .collect();
        assert!(xs.windows(2).all(|w| w[0] < w[1]), "{xs:?}");
    }
}
