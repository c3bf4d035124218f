#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        if let Ok(config) = toml::from_str::<webship::Config>(content) {
            // Layout and archive root derivation must not panic on any input
            let _ = config.remote.layout();
            let _ = config.archive_root();
        }
    }
});
