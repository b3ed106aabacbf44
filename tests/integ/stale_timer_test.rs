use crate::{elapse, general_questions, recorded_time, started};

use timed_quiz::timer::ManualCountdown;
use timed_quiz::{
    Difficulty, SessionPhase, TimeTaken, TimerEvent, TimerEventKind, TimerOutcome,
};

#[test]
fn late_expiry_from_previous_question_is_ignored() {
    let mut ctrl = started(general_questions(3), 10);
    let first_generation = ctrl.generation();
    elapse(&mut ctrl, 2);
    ctrl.go_to_next().unwrap();
    ctrl.select_option(3).unwrap();
    elapse(&mut ctrl, 1);

    let outcome = ctrl
        .on_timer_event(ManualCountdown::fire_expiry(first_generation))
        .unwrap();

    assert_eq!(outcome, TimerOutcome::Ignored);
    let view = ctrl.view().unwrap();
    assert_eq!(view.position, 1, "Stale expiry must not advance");
    assert_eq!(view.selected_option_index, Some(3));
    assert_eq!(view.seconds_remaining, 9);
    assert_eq!(recorded_time(&ctrl, 1), TimeTaken::Seconds(2));
    assert_eq!(recorded_time(&ctrl, 2), TimeTaken::NotRecorded);
}

#[test]
fn late_tick_from_previous_question_is_ignored() {
    let mut ctrl = started(general_questions(2), 10);
    let first_generation = ctrl.generation();
    ctrl.go_to_next().unwrap();

    let outcome = ctrl
        .on_timer_event(TimerEvent {
            generation: first_generation,
            kind: TimerEventKind::Tick {
                seconds_remaining: 1,
            },
        })
        .unwrap();

    assert_eq!(outcome, TimerOutcome::Ignored);
    assert_eq!(ctrl.view().unwrap().seconds_remaining, 10);
}

#[test]
fn expiry_after_submit_is_ignored() {
    let mut ctrl = started(general_questions(2), 10);
    let generation = ctrl.generation();
    ctrl.submit().unwrap();
    let summary = ctrl.summary().cloned();

    let outcome = ctrl
        .on_timer_event(ManualCountdown::fire_expiry(generation))
        .unwrap();

    assert_eq!(outcome, TimerOutcome::Ignored);
    assert_eq!(ctrl.phase(), SessionPhase::Completed);
    assert_eq!(ctrl.summary().cloned(), summary);
}

#[test]
fn expiry_from_before_restart_does_not_touch_new_session() {
    let mut ctrl = started(general_questions(2), 10);
    let old_generation = ctrl.generation();
    ctrl.restart();
    ctrl.start_session("general", Difficulty::Easy).unwrap();

    let outcome = ctrl
        .on_timer_event(ManualCountdown::fire_expiry(old_generation))
        .unwrap();

    assert_eq!(outcome, TimerOutcome::Ignored);
    assert_eq!(ctrl.view().unwrap().position, 0);
    assert!(ctrl.session().unwrap().answers().is_empty());
}

#[test]
fn each_countdown_start_gets_a_new_generation() {
    let mut ctrl = started(general_questions(3), 10);
    ctrl.go_to_next().unwrap();
    ctrl.go_to_next().unwrap();
    ctrl.go_to_previous().unwrap();

    let generations: Vec<u64> = ctrl.timer().starts().iter().map(|(g, _)| *g).collect();
    assert_eq!(generations, vec![1, 2, 3, 4]);
    assert_eq!(ctrl.generation(), 4);
}
