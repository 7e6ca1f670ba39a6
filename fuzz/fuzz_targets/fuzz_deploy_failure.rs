#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(payload) = std::str::from_utf8(data) {
        // Arbitrary CLI output must never panic the parser
        if let Ok(diagnostics) = codepointe::parse_deploy_failure(payload) {
            let _ = codepointe::domain::group_by_file(diagnostics);
        }
    }
});
