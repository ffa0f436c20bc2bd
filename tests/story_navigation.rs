//! Acceptance scenarios for story playback.
//!
//! Walks the controller through whole viewing sessions the way the event
//! loop would: manual taps, swipes translated to operations, auto-advance
//! ticks, and the one-shot exit signal.

use std::time::Duration;

use rewind::model::{Panel, Story};
use rewind::state::{ExitReason, Phase, StoryController};

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn year_in_review() -> Story {
    Story::new(vec![
        Panel::Titled {
            title: "Your 2025".to_string(),
            subtitle: Some("a year in words".to_string()),
            background: Some("dusk".to_string()),
        },
        Panel::Stat {
            value: "312".to_string(),
            label: "entries written".to_string(),
            background: None,
        },
        Panel::Note {
            body: "rained all day, wrote anyway".to_string(),
            date: chrono::NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
        },
        Panel::Transition {
            heading: Some("Summer".to_string()),
        },
        Panel::Text {
            body: "see you next year".to_string(),
            background: None,
        },
    ])
}

// ===== Scenario: watch a whole story hands-off =====

#[test]
fn uninterrupted_story_plays_every_panel_then_exits() {
    let mut controller = StoryController::new(year_in_review(), ms(5000));
    controller.start();

    let mut visited = vec![];
    for _ in 0..5 {
        match controller.phase() {
            Phase::Viewing(i) => visited.push(i),
            other => panic!("expected viewing phase, got {other:?}"),
        }
        // Let the panel's full duration elapse in event-loop sized ticks.
        for _ in 0..100 {
            controller.tick(ms(50));
        }
    }

    assert_eq!(visited, vec![0, 1, 2, 3, 4]);
    assert_eq!(controller.take_exit(), Some(ExitReason::EndOfStory));
    assert_eq!(controller.take_exit(), None, "exit signal fires once");
}

// ===== Scenario: manual walkthrough =====

#[test]
fn tap_right_through_three_panels_then_exit() {
    let story = Story::new(vec![
        Panel::Text {
            body: "one".into(),
            background: None,
        },
        Panel::Text {
            body: "two".into(),
            background: None,
        },
        Panel::Text {
            body: "three".into(),
            background: None,
        },
    ]);
    let mut controller = StoryController::new(story, ms(5000));
    controller.start();

    controller.next_panel();
    controller.next_panel();
    assert_eq!(controller.phase(), Phase::Viewing(2));
    assert!(controller.cursor().is_last_panel());

    controller.next_panel();
    assert_eq!(controller.phase(), Phase::Exited);
    assert_eq!(controller.take_exit(), Some(ExitReason::EndOfStory));
}

#[test]
fn back_and_forth_keeps_position_consistent() {
    let mut controller = StoryController::new(year_in_review(), ms(5000));
    controller.start();

    controller.next_panel();
    controller.next_panel();
    controller.prev_panel();
    assert_eq!(controller.phase(), Phase::Viewing(1));

    controller.prev_panel();
    controller.prev_panel(); // at first: stays put
    assert_eq!(controller.phase(), Phase::Viewing(0));

    controller.first_panel();
    assert_eq!(controller.phase(), Phase::Viewing(0));
}

// ===== Scenario: mixing taps with the countdown =====

#[test]
fn tapping_just_before_expiry_advances_exactly_one_panel() {
    let mut controller = StoryController::new(year_in_review(), ms(5000));
    controller.start();

    controller.tick(ms(4999));
    controller.next_panel(); // user beats the timer
    assert_eq!(controller.phase(), Phase::Viewing(1));

    // The stale countdown must not fire on the fresh panel.
    controller.tick(ms(50));
    assert_eq!(controller.phase(), Phase::Viewing(1));

    // The fresh panel still auto-advances after its own full duration.
    for _ in 0..100 {
        controller.tick(ms(50));
    }
    assert_eq!(controller.phase(), Phase::Viewing(2));
}

#[test]
fn going_back_replays_the_panel_with_fresh_progress() {
    let mut controller = StoryController::new(year_in_review(), ms(5000));
    controller.start();
    controller.next_panel();

    controller.tick(ms(3000));
    assert!(controller.progress() > 0.5);

    controller.prev_panel();
    assert_eq!(controller.phase(), Phase::Viewing(0));
    assert_eq!(controller.progress(), 0.0);
}

// ===== Scenario: empty story =====

#[test]
fn empty_story_exits_before_any_panel_is_shown() {
    let mut controller = StoryController::new(Story::new(vec![]), ms(5000));
    assert_eq!(controller.phase(), Phase::Idle);

    controller.start();
    assert_eq!(controller.phase(), Phase::Exited);
    assert_eq!(controller.take_exit(), Some(ExitReason::EmptyStory));
}

// ===== Scenario: user closes mid-story =====

#[test]
fn close_mid_story_wins_over_later_operations() {
    let mut controller = StoryController::new(year_in_review(), ms(5000));
    controller.start();
    controller.next_panel();

    controller.close();
    assert_eq!(controller.exit_reason(), Some(ExitReason::Closed));

    // Anything after the close is inert.
    controller.next_panel();
    controller.tick(ms(60_000));
    assert_eq!(controller.exit_reason(), Some(ExitReason::Closed));
    assert_eq!(controller.take_exit(), Some(ExitReason::Closed));
    assert_eq!(controller.take_exit(), None);
}
