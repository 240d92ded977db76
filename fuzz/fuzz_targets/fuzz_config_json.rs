#![no_main]

use guessatron::config::AppConfig;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(config) = serde_json::from_str::<AppConfig>(s) {
            // Brightness from any config must land in the slider range
            let brightness = config.initial_settings().brightness.value();
            assert!((0.5..=1.5).contains(&brightness));
        }
    }
});
