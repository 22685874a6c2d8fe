#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing and validating a config file should never panic
        let _ = cosmo::config::load_str(content, std::path::Path::new("cosmo.toml"));
    }
});
