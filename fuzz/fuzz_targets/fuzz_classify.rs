#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(path) = std::str::from_utf8(data) {
        let classification = codepointe::classify(path);
        let _ = classification.bundle();

        let mut scheduler = codepointe::DebounceScheduler::with_default_delay("/fuzz");
        let now = std::time::Instant::now();
        scheduler.stage(path, &classification, now);
        let _ = scheduler.flush_now();
    }
});
