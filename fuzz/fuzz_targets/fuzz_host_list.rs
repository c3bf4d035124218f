#![no_main]

use libfuzzer_sys::fuzz_target;
use webship::Host;

fuzz_target!(|data: &[u8]| {
    if let Ok(raw) = std::str::from_utf8(data) {
        if let Ok(hosts) = Host::parse_list(raw) {
            for host in hosts {
                // Accepted hosts can never be mistaken for an ssh option
                assert!(!host.as_str().starts_with('-'));
                assert!(!host.as_str().chars().any(char::is_whitespace));
            }
        }
    }
});
