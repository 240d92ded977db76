#![no_main]

use guessatron::game::{Difficulty, GameState, parse_guess};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(guess) = parse_guess(s) {
            assert!((1..=100).contains(&guess));
        }

        let mut game = GameState::with_secret(Difficulty::Expert, 50);
        for line in s.lines() {
            let before = game.attempts_left();
            if game.submit_guess(line).is_err() {
                assert_eq!(game.attempts_left(), before);
            }
        }
    }
});
