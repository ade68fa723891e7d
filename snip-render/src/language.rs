//! Language tag resolution from file paths
//!
//! Maps (file path, caller-supplied default tag) to the effective language
//! tag used in snippet output. Detection is driven by a small ordered table
//! of rules; the first rule whose predicate matches wins, and when none
//! matches the default tag passes through unchanged.
//!
//! This is deliberately not a language-detection engine. The table only
//! covers file names whose host-assigned language id is a poor fence label
//! (Android gradle scripts, Dockerfiles, compose manifests). Everything else
//! trusts the caller.

/// Path facts a [`Rule`] predicate can observe.
///
/// Derived once per `resolve` call. Both `/` and `\` are honored as
/// separators so paths from either convention behave identically.
pub struct PathFacts<'a> {
    /// The full path as given, absolute or relative.
    pub full_path: &'a str,
    /// The base file name (the part after the last separator).
    pub file_name: &'a str,
    /// The dot-suffix of the base file name, without the dot. `None` for
    /// names with no dot or with nothing before it ("Dockerfile", ".env").
    pub extension: Option<&'a str>,
}

impl<'a> PathFacts<'a> {
    fn from_path(full_path: &'a str) -> Self {
        let file_name = full_path
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(full_path);
        let extension = file_name
            .rsplit_once('.')
            .filter(|(stem, ext)| !stem.is_empty() && !ext.is_empty())
            .map(|(_, ext)| ext);
        PathFacts {
            full_path,
            file_name,
            extension,
        }
    }

    /// Whether the path contains `segment` as a whole path component.
    pub fn has_segment(&self, segment: &str) -> bool {
        self.full_path
            .split(['/', '\\'])
            .any(|part| part == segment)
    }
}

/// A single detection rule: a named predicate and the tag it yields.
pub struct Rule {
    /// Short identifier, used when listing the table.
    pub name: &'static str,
    /// The language tag this rule resolves to.
    pub tag: &'static str,
    matches: fn(&PathFacts<'_>) -> bool,
}

/// The detection table, evaluated top to bottom.
///
/// Order matters: more specific rules come first, and new rules are appended
/// after the existing ones they could shadow, never reordered. Keeping this
/// a literal table (rather than nested conditionals) keeps the
/// first-match-wins behavior obvious and lets each rule be tested on its own.
pub static RULES: &[Rule] = &[
    Rule {
        name: "android-gradle",
        tag: "groovy",
        matches: |facts| facts.has_segment("android") && facts.file_name == "build.gradle",
    },
    Rule {
        name: "dockerfile",
        tag: "dockerfile",
        matches: |facts| facts.file_name == "Dockerfile",
    },
    Rule {
        name: "docker-compose",
        tag: "docker-compose",
        matches: |facts| {
            matches!(facts.extension, Some("yml") | Some("yaml"))
                && facts.file_name.contains("docker-compose")
        },
    },
];

/// Resolve the effective language tag for a path.
///
/// Total: never fails, never mutates, and an unmatched path is not an error,
/// the caller's `default_tag` simply passes through. Matching is
/// case-sensitive.
pub fn resolve(full_path: &str, default_tag: &str) -> String {
    let facts = PathFacts::from_path(full_path);
    for rule in RULES {
        if (rule.matches)(&facts) {
            return rule.tag.to_string();
        }
    }
    default_tag.to_string()
}
