//! File classification
//!
//! Decides what a saved file means for the next deploy: a metadata file that
//! deploys as-is, a member of a static resource bundle that has to be zipped
//! first, or nothing at all.

use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Metadata suffixes `force:source:deploy` accepts file by file.
pub const DEPLOYABLE_SUFFIXES: &[&str] = &[
    ".page",
    ".component",
    ".cls",
    ".trigger",
    ".layout",
    ".resource",
    ".remoteSite",
    ".labels",
    ".app",
    ".dashboard",
    ".workflow",
    ".email",
    ".profile",
    ".scf",
    ".queue",
    ".reportType",
    ".report",
    ".weblink",
    ".tab",
    ".letter",
    ".role",
    ".homePageComponent",
    ".homePageLayout",
    ".objectTranslation",
    ".flow",
    ".datacategorygroup",
    ".snapshot",
    ".site",
    ".sharingRules",
    ".settings",
    ".callCenter",
    ".community",
    ".authProvider",
    ".customApplicationComponent",
    ".quickAction",
    ".approvalProcess",
    ".apxc",
    ".apxt",
];

/// Suffixes the deploy CLI mishandles in partial mode. Seeing one of these
/// turns the whole cycle into a project compile.
pub const FULL_COMPILE_SUFFIXES: &[&str] = &[".object", ".permissionset"];

/// First `<name>.resource` segment of a path
fn bundle_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\w*\.resource").expect("bundle pattern is a valid regex"))
}

/// What kind of file a path is
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FileKind {
    /// Metadata file deployed by path
    Deployable,
    /// File inside `resource-bundles/<bundle>/`
    BundleMember { bundle: String },
    /// Not something the deploy cares about
    Ignored,
}

/// Result of classifying a project-relative path
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Classification {
    #[serde(flatten)]
    pub kind: FileKind,
    /// The cycle containing this file must compile the whole project
    pub full_compile: bool,
}

impl Classification {
    /// Whether this event should touch the scheduler at all
    pub fn is_relevant(&self) -> bool {
        self.full_compile || self.kind != FileKind::Ignored
    }

    /// Bundle name for bundle members
    pub fn bundle(&self) -> Option<&str> {
        match &self.kind {
            FileKind::BundleMember { bundle } => Some(bundle),
            _ => None,
        }
    }
}

/// Classify a path relative to the project root.
///
/// Suffix matching is exact and case-sensitive. Deployable suffixes win over
/// the bundle pattern, so `src/staticresources/Logo.resource` is deployable
/// while `resource-bundles/Logo.resource/img/a.png` is a bundle member.
pub fn classify(relative_path: &str) -> Classification {
    let full_compile = FULL_COMPILE_SUFFIXES
        .iter()
        .any(|suffix| relative_path.ends_with(suffix));

    let kind = if DEPLOYABLE_SUFFIXES
        .iter()
        .any(|suffix| relative_path.ends_with(suffix))
    {
        FileKind::Deployable
    } else if let Some(found) = bundle_pattern().find(relative_path) {
        FileKind::BundleMember {
            bundle: found.as_str().to_string(),
        }
    } else {
        FileKind::Ignored
    };

    Classification { kind, full_compile }
}
