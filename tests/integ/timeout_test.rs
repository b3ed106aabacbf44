use crate::{elapse, general_questions, recorded_time, started};

use timed_quiz::{Selection, SessionPhase, TimeTaken, TimerOutcome};

#[test]
fn ticks_update_remaining_seconds() {
    let mut ctrl = started(general_questions(2), 3);

    let outcomes = elapse(&mut ctrl, 2);

    assert_eq!(
        outcomes,
        vec![
            TimerOutcome::Ticked {
                seconds_remaining: 2
            },
            TimerOutcome::Ticked {
                seconds_remaining: 1
            },
        ]
    );
    assert_eq!(ctrl.view().unwrap().seconds_remaining, 1);
}

#[test]
fn expiry_advances_to_next_question() {
    let mut ctrl = started(general_questions(3), 2);
    ctrl.select_option(1).unwrap();

    let outcomes = elapse(&mut ctrl, 2);

    assert_eq!(
        outcomes.last(),
        Some(&TimerOutcome::Advanced { position: 1 })
    );
    let view = ctrl.view().unwrap();
    assert_eq!(view.position, 1);
    assert_eq!(view.seconds_remaining, 2);
    assert_eq!(recorded_time(&ctrl, 1), TimeTaken::Seconds(2));
    assert_eq!(
        ctrl.session().unwrap().answer_for(1).unwrap().selected_option_index,
        Selection::Option(1),
        "Selection made before the timeout is kept"
    );
    assert_eq!(ctrl.timer().active(), Some((2, 2)));
}

#[test]
fn timeouts_complete_an_unanswered_session() {
    let mut ctrl = started(general_questions(2), 1);

    let first = elapse(&mut ctrl, 1);
    assert_eq!(
        first,
        vec![
            TimerOutcome::Ticked {
                seconds_remaining: 0
            },
            TimerOutcome::Advanced { position: 1 },
        ]
    );
    assert_eq!(ctrl.phase(), SessionPhase::InProgress);

    let second = elapse(&mut ctrl, 1);
    assert_eq!(second.last(), Some(&TimerOutcome::Completed));

    assert_eq!(ctrl.phase(), SessionPhase::Completed);
    let answers = ctrl.finalized_answers();
    assert_eq!(answers.len(), 2);
    for answer in answers {
        assert_eq!(answer.selected_option_index, Selection::Unanswered);
        assert_eq!(answer.time_taken_seconds, TimeTaken::Seconds(1));
    }

    let summary = ctrl.summary().unwrap();
    assert_eq!(summary.correct_count, 0);
    assert_eq!(summary.wrong_count, 2);
    assert_eq!(summary.percent_score, 0);
    assert_eq!(ctrl.timer().active(), None);
}

#[test]
fn expiry_on_last_question_records_exact_limit() {
    let mut ctrl = started(general_questions(1), 4);
    ctrl.select_option(1).unwrap();

    elapse(&mut ctrl, 4);

    let summary = ctrl.summary().unwrap();
    assert_eq!(summary.details[0].time_taken_seconds, 4);
    assert!(summary.details[0].correct);
    assert_eq!(summary.percent_score, 100);
}

#[test]
fn no_events_after_timeout_completion() {
    let mut ctrl = started(general_questions(1), 1);
    elapse(&mut ctrl, 1);
    assert_eq!(ctrl.phase(), SessionPhase::Completed);

    let later = elapse(&mut ctrl, 5);

    assert!(later.is_empty(), "Countdown should be inert after expiry");
}
