// Host-side tests for the listen state machine and typewriter.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod voiceover {
    include!("../src/voiceover.rs");
}

use constants::*;
use voiceover::*;

#[test]
fn pressing_listen_starts_playback_once() {
    let mut state = ListenState::new();
    assert_eq!(state.playback(), Playback::Idle);

    let generation = state.press();
    assert_eq!(generation, Some(1));
    assert_eq!(state.playback(), Playback::Playing);
    assert_eq!(state.label(), LISTEN_LABEL_ACTIVE);

    // Activation while playing is a no-op: no new generation, label unchanged
    assert_eq!(state.press(), None);
    assert_eq!(state.label(), LISTEN_LABEL_ACTIVE);
}

#[test]
fn finish_resets_playback_and_allows_replay() {
    let mut state = ListenState::new();
    let generation = state.press().unwrap();

    assert!(state.finish(generation));
    assert_eq!(state.playback(), Playback::Idle);
    assert_eq!(state.label(), LISTEN_LABEL_REPLAY);

    let second = state.press().unwrap();
    assert_eq!(second, generation + 1);
}

#[test]
fn stale_generation_cannot_finish_playback() {
    let mut state = ListenState::new();
    let first = state.press().unwrap();
    assert!(state.finish(first));

    let second = state.press().unwrap();
    // A timer from the first activation fires late: ignored
    assert!(!state.finish(first));
    assert_eq!(state.playback(), Playback::Playing);

    assert!(state.finish(second));
    assert_eq!(state.playback(), Playback::Idle);
}

#[test]
fn finish_when_idle_is_ignored() {
    let mut state = ListenState::new();
    assert!(!state.finish(0));
    assert!(!state.finish(1));
    assert_eq!(state.playback(), Playback::Idle);
}

#[test]
fn typewriter_reveals_every_character_in_order() {
    let text = "We are connected.";
    let mut tw = Typewriter::new(text);
    let mut out = String::new();
    while let Some(c) = tw.advance() {
        out.push(c);
    }
    assert_eq!(out, text);
    assert!(tw.is_done());
    assert_eq!(tw.revealed(), text.chars().count());
    // Exhausted: further advances yield nothing
    assert_eq!(tw.advance(), None);
}

#[test]
fn typewriter_tracks_progress() {
    let mut tw = Typewriter::new("abc");
    assert!(!tw.is_done());
    assert_eq!(tw.revealed(), 0);
    assert_eq!(tw.advance(), Some('a'));
    assert_eq!(tw.revealed(), 1);
    assert_eq!(tw.advance(), Some('b'));
    assert_eq!(tw.advance(), Some('c'));
    assert!(tw.is_done());
}

#[test]
fn script_is_nonempty_prose() {
    assert!(VOICEOVER_SCRIPT.chars().count() > 100);
    assert!(VOICEOVER_SCRIPT.starts_with("I am not a machine."));
}
