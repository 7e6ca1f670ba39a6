//! Property tests for deploy failure payload translation.

use proptest::prelude::*;

use codepointe::domain::diagnostics::strip_position_suffix;
use codepointe::parse_deploy_failure;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: arbitrary CLI output never panics the parser.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,512}") {
        let _ = parse_deploy_failure(&s);
    }

    /// PROPERTY: 1-based positions map to 0-based, messages lose the suffix.
    #[test]
    fn property_positions_are_zero_based(
        line in 1u32..10_000,
        column in 1u32..500,
        message in "[A-Za-z][A-Za-z ]{0,40}[A-Za-z]",
    ) {
        let payload = serde_json::json!({
            "status": 1,
            "result": [{
                "filePath": "classes/Foo.cls",
                "lineNumber": line.to_string(),
                "columnNumber": column.to_string(),
                "error": format!("{message} ({line}:{column})"),
            }]
        })
        .to_string();

        let diagnostics = parse_deploy_failure(&payload).unwrap();
        prop_assert_eq!(diagnostics.len(), 1);
        prop_assert_eq!(diagnostics[0].line, line - 1);
        prop_assert_eq!(diagnostics[0].column, column - 1);
        prop_assert_eq!(&diagnostics[0].message, &message);
    }

    /// PROPERTY: stripping removes at most one trailing suffix and is a prefix.
    #[test]
    fn property_strip_is_prefix(s in "(?s).{0,128}") {
        let stripped = strip_position_suffix(&s);
        prop_assert!(s.starts_with(stripped));
    }
}
