// Host-side tests for the character-scramble effect.

use rand::rngs::StdRng;
use rand::SeedableRng;
use sunshine_core::constants::SCRAMBLE_GLYPHS;
use sunshine_core::*;

fn run_to_end(scramble: &mut Scramble, rng: &mut StdRng) -> Vec<ScrambleFrame> {
    let mut frames = Vec::new();
    for _ in 0..10_000 {
        let frame = scramble.tick(rng);
        let done = frame.done;
        frames.push(frame);
        if done {
            break;
        }
    }
    frames
}

#[test]
fn final_frame_is_exact_original() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut s = Scramble::new("Hello Sunshine", SCRAMBLE_GLYPHS, 3);
    let frames = run_to_end(&mut s, &mut rng);
    let last = frames.last().unwrap();
    assert!(last.done);
    assert_eq!(last.text, "Hello Sunshine");
    assert!(frames[..frames.len() - 1].iter().all(|f| !f.done));
}

#[test]
fn finishes_after_three_ticks_per_char() {
    let mut rng = StdRng::seed_from_u64(1);
    let text = "abcd";
    let mut s = Scramble::new(text, SCRAMBLE_GLYPHS, 3);
    let frames = run_to_end(&mut s, &mut rng);
    assert_eq!(frames.len(), text.len() * 3);
}

#[test]
fn char_locks_once_tick_exceeds_three_times_index() {
    let mut rng = StdRng::seed_from_u64(99);
    let text = "sunshine every day";
    let chars: Vec<char> = text.chars().collect();
    let mut s = Scramble::new(text, SCRAMBLE_GLYPHS, 3);
    let frames = run_to_end(&mut s, &mut rng);

    for (tick, frame) in frames.iter().enumerate() {
        if frame.done {
            continue;
        }
        let shown: Vec<char> = frame.text.chars().collect();
        assert_eq!(shown.len(), chars.len());
        for (i, &c) in shown.iter().enumerate() {
            if tick > 3 * i {
                assert_eq!(c, chars[i], "char {i} not locked at tick {tick}");
                assert!(s.is_locked(i, tick as u32));
            } else if chars[i] != ' ' {
                assert!(!s.is_locked(i, tick as u32));
                assert!(SCRAMBLE_GLYPHS.contains(c), "unexpected glyph {c:?}");
            }
        }
    }
}

#[test]
fn spaces_are_never_randomized() {
    let mut rng = StdRng::seed_from_u64(3);
    let text = "a b  c   d";
    let mut s = Scramble::new(text, SCRAMBLE_GLYPHS, 3);
    for frame in run_to_end(&mut s, &mut rng) {
        for (shown, orig) in frame.text.chars().zip(text.chars()) {
            if orig == ' ' {
                assert_eq!(shown, ' ');
            }
        }
    }
}

#[test]
fn resolution_moves_left_to_right() {
    let mut rng = StdRng::seed_from_u64(11);
    let text = "timeline";
    let mut s = Scramble::new(text, SCRAMBLE_GLYPHS, 3);
    let mut locked_prev = 0usize;
    for tick in 0..(text.len() as u32 * 3) {
        let locked = (0..text.len()).filter(|&i| s.is_locked(i, tick)).count();
        assert!(locked >= locked_prev);
        // Locked characters always form a prefix.
        assert!((0..locked).all(|i| s.is_locked(i, tick)));
        locked_prev = locked;
    }
    let frames = run_to_end(&mut s, &mut rng);
    assert_eq!(frames.last().unwrap().text, text);
}

#[test]
fn empty_text_is_done_immediately() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut s = Scramble::new("", SCRAMBLE_GLYPHS, 3);
    let frame = s.tick(&mut rng);
    assert!(frame.done);
    assert_eq!(frame.text, "");
}

#[test]
fn multibyte_text_resolves_exactly() {
    let mut rng = StdRng::seed_from_u64(5);
    let text = "Soleil \u{2600} d\u{e9}j\u{e0}";
    let mut s = Scramble::new(text, SCRAMBLE_GLYPHS, 3);
    let frames = run_to_end(&mut s, &mut rng);
    assert_eq!(frames.last().unwrap().text, text);
    assert_eq!(frames.len(), text.chars().count() * 3);
}
