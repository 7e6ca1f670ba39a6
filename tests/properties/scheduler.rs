//! Property tests for the debounce scheduler.

use std::collections::BTreeSet;
use std::time::{Duration, Instant};

use proptest::prelude::*;

use codepointe::application::DebounceScheduler;
use codepointe::{DeployBatch, Flush};

fn class_path() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{0,6}".prop_map(|name| format!("src/classes/{name}.cls"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: saves inside one window flush once, as their deduplicated union.
    #[test]
    fn property_one_flush_per_window(
        paths in proptest::collection::vec(class_path(), 1..20),
        gaps in proptest::collection::vec(0u64..100, 20),
    ) {
        let mut s = DebounceScheduler::new("/work/app", Duration::from_millis(100));
        let mut now = Instant::now();

        for (path, gap) in paths.iter().zip(&gaps) {
            prop_assert!(s.poll(now).is_none());
            s.on_change(path, now);
            now += Duration::from_millis(*gap);
        }

        let deadline = s.deadline().unwrap();
        let flush = s.poll(deadline).unwrap();
        prop_assert!(s.poll(deadline + Duration::from_secs(1)).is_none());

        let expected: BTreeSet<&str> = paths.iter().map(String::as_str).collect();
        let staged: BTreeSet<&str> = flush.batch().files().collect();
        prop_assert_eq!(staged, expected);
        prop_assert!(matches!(flush, Flush::Deploy(_)));
    }

    /// PROPERTY: staging a file is idempotent.
    #[test]
    fn property_add_file_idempotent(path in class_path(), repeats in 1usize..5) {
        let mut batch = DeployBatch::new("/work/app");
        for _ in 0..repeats {
            batch.add_file(path.clone());
        }
        prop_assert_eq!(batch.file_count(), 1);
        prop_assert_eq!(batch.joined_files(), path);
    }
}
