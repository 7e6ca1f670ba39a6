//! Property tests for path classification.

use proptest::prelude::*;

use codepointe::domain::classifier::{DEPLOYABLE_SUFFIXES, FULL_COMPILE_SUFFIXES};
use codepointe::{classify, FileKind};

fn relative_dir() -> impl Strategy<Value = String> {
    let segment = proptest::string::string_regex("[A-Za-z0-9_-]{1,12}").unwrap();
    proptest::collection::vec(segment, 0..=3).prop_map(|segments| {
        segments
            .into_iter()
            .map(|s| format!("{s}/"))
            .collect::<String>()
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: classification never panics on arbitrary input.
    #[test]
    fn property_classify_never_panics(s in "(?s).{0,256}") {
        let _ = classify(&s);
    }

    /// PROPERTY: any path ending in a deployable suffix is deployable.
    #[test]
    fn property_deployable_suffix_wins(
        dir in relative_dir(),
        stem in "[A-Za-z0-9_]{1,16}",
        index in 0..DEPLOYABLE_SUFFIXES.len(),
    ) {
        let path = format!("{dir}{stem}{}", DEPLOYABLE_SUFFIXES[index]);
        let c = classify(&path);
        prop_assert_eq!(c.kind, FileKind::Deployable);
        prop_assert!(!c.full_compile);
    }

    /// PROPERTY: full-compile suffixes always set the flag.
    #[test]
    fn property_full_compile_suffix_flags(
        dir in relative_dir(),
        stem in "[A-Za-z0-9_]{1,16}",
        index in 0..FULL_COMPILE_SUFFIXES.len(),
    ) {
        let path = format!("{dir}{stem}{}", FULL_COMPILE_SUFFIXES[index]);
        let c = classify(&path);
        prop_assert!(c.full_compile);
        prop_assert!(c.is_relevant());
    }

    /// PROPERTY: files under a bundle directory name that bundle.
    #[test]
    fn property_bundle_member_names_bundle(
        bundle in "[A-Za-z0-9_]{1,16}",
        inner in relative_dir(),
        file in "[a-z]{1,8}\\.(js|css|png|html)",
    ) {
        let path = format!("resource-bundles/{bundle}.resource/{inner}{file}");
        let c = classify(&path);
        let expected = format!("{bundle}.resource");
        prop_assert_eq!(c.bundle(), Some(expected.as_str()));
    }
}
