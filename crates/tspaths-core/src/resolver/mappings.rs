//! Compiles a `paths` table into ordered matchers.
//!
//! Each key becomes an anchored pattern in which every `*` captures a
//! non-empty run of characters. Templates are anchored to the base directory
//! up front, so a match only has to substitute captures.

use crate::error::{Error, Result};
use crate::options::PathsMap;
use regex_lite::{Captures, Regex};
use serde::Serialize;
use tspaths_util::path::resolve;
use tspaths_util::Platform;

/// Wildcard marker shared by key patterns and templates.
pub const WILDCARD: char = '*';

/// One compiled `paths` entry.
#[derive(Debug, Clone)]
pub struct PathMapping {
    key: String,
    pattern: Regex,
    paths: Vec<String>,
}

/// Plain-data view of a [`PathMapping`], for display and JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingSummary {
    pub key: String,
    pub pattern: String,
    pub paths: Vec<String>,
}

impl PathMapping {
    /// Compile one entry. `templates` are resolved against `base_dir`.
    pub fn compile(
        key: &str,
        templates: &[String],
        base_dir: &str,
        platform: Platform,
    ) -> Result<Self> {
        let pattern = compile_pattern(key).map_err(|source| Error::InvalidPattern {
            key: key.to_string(),
            source,
        })?;

        let paths = templates
            .iter()
            .map(|template| resolve(base_dir, template, platform))
            .collect();

        Ok(Self {
            key: key.to_string(),
            pattern,
            paths,
        })
    }

    /// The key as declared.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    /// Templates, already anchored to the base directory.
    #[must_use]
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Match `id` against the whole pattern.
    #[must_use]
    pub fn captures<'h>(&self, id: &'h str) -> Option<Captures<'h>> {
        self.pattern.captures(id)
    }

    /// First non-empty substitution of this entry's templates for `id`.
    ///
    /// `None` if the pattern does not match, or if it matches and every
    /// template substitutes to an empty string.
    #[must_use]
    pub fn apply(&self, id: &str) -> Option<String> {
        let caps = self.captures(id)?;
        self.paths
            .iter()
            .map(|template| substitute(template, &caps))
            .find(|mapped| !mapped.is_empty())
    }

    #[must_use]
    pub fn summary(&self) -> MappingSummary {
        MappingSummary {
            key: self.key.clone(),
            pattern: self.pattern.as_str().to_string(),
            paths: self.paths.clone(),
        }
    }
}

/// Compile every entry of `paths`, keeping declaration order.
///
/// Order matters: the first entry whose pattern matches wins.
pub fn resolve_path_mappings(
    paths: &PathsMap,
    base_dir: &str,
    platform: Platform,
) -> Result<Vec<PathMapping>> {
    paths
        .iter()
        .map(|(key, templates)| PathMapping::compile(key, templates, base_dir, platform))
        .collect()
}

/// `^literal(.+)literal$`, with every literal run escaped.
fn compile_pattern(key: &str) -> std::result::Result<Regex, regex_lite::Error> {
    let mut source = String::with_capacity(key.len() + 8);
    source.push('^');
    for (i, literal) in key.split(WILDCARD).enumerate() {
        if i > 0 {
            source.push_str("(.+)");
        }
        source.push_str(&regex_lite::escape(literal));
    }
    source.push('$');
    Regex::new(&source)
}

/// Replace the n-th `*` in `template` with capture `min(n, captures)`.
///
/// Once a template has more wildcards than the pattern captured, every extra
/// wildcard reuses the last capture. A pattern without wildcards has only
/// group 0, so its templates receive the whole specifier.
pub(crate) fn substitute(template: &str, caps: &Captures<'_>) -> String {
    let last = caps.len() - 1;
    let mut out = String::with_capacity(template.len());

    for (occurrence, piece) in template.split(WILDCARD).enumerate() {
        if occurrence > 0 {
            let group = occurrence.min(last);
            out.push_str(caps.get(group).map_or("", |m| m.as_str()));
        }
        out.push_str(piece);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(entries: &[(&str, &[&str])]) -> PathsMap {
        entries
            .iter()
            .map(|(key, templates)| {
                (
                    (*key).to_string(),
                    templates.iter().map(|t| (*t).to_string()).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn test_compiles_in_declaration_order() {
        let paths = table(&[("z/*", &["z/*"]), ("a/*", &["a/*"]), ("@app", &["app.ts"])]);
        let mappings = resolve_path_mappings(&paths, "/project", Platform::Posix).unwrap();

        let keys: Vec<&str> = mappings.iter().map(PathMapping::key).collect();
        assert_eq!(keys, ["z/*", "a/*", "@app"]);
    }

    #[test]
    fn test_templates_anchored_to_base_dir() {
        let paths = table(&[("@/*", &["./src/*", "/abs/*"])]);
        let mappings = resolve_path_mappings(&paths, "/project", Platform::Posix).unwrap();

        assert_eq!(mappings[0].paths(), ["/project/src/*", "/abs/*"]);
    }

    #[test]
    fn test_pattern_is_anchored_and_escaped() {
        let mapping =
            PathMapping::compile("~lib.v1/*", &[], "/project", Platform::Posix).unwrap();

        assert!(mapping.captures("~lib.v1/x").is_some());
        // `.` is literal, not "any character".
        assert!(mapping.captures("~libXv1/x").is_none());
        // Whole-specifier match only.
        assert!(mapping.captures("pre/~lib.v1/x").is_none());
        // `*` needs at least one character.
        assert!(mapping.captures("~lib.v1/").is_none());
    }

    #[test]
    fn test_regex_syntax_in_keys_is_literal() {
        let cases = [
            ("@/(*", "@/(x", "@/x"),
            ("[*", "[x", "x"),
            ("a{2,1}*", "a{2,1}x", "aax"),
            ("\\*", "\\x", "x"),
        ];
        for (key, hit, miss) in cases {
            let mapping = PathMapping::compile(key, &[], "/project", Platform::Posix)
                .unwrap_or_else(|e| panic!("{key} failed to compile: {e}"));
            assert!(mapping.captures(hit).is_some(), "{key} should match {hit}");
            assert!(mapping.captures(miss).is_none(), "{key} should not match {miss}");
        }
    }

    #[test]
    fn test_wildcard_reuses_last_capture() {
        let mapping = PathMapping::compile(
            "lib/*",
            &["dist/*/*.js".to_string()],
            "/project",
            Platform::Posix,
        )
        .unwrap();

        assert_eq!(
            mapping.apply("lib/foo").as_deref(),
            Some("/project/dist/foo/foo.js")
        );
    }

    #[test]
    fn test_multiple_captures_fill_in_order() {
        let mapping = PathMapping::compile(
            "*/pkg/*",
            &["packages/*/src/*/*".to_string()],
            "/repo",
            Platform::Posix,
        )
        .unwrap();

        assert_eq!(
            mapping.apply("scope/pkg/button").as_deref(),
            Some("/repo/packages/scope/src/button/button")
        );
    }

    #[test]
    fn test_exact_key_substitutes_whole_specifier() {
        let mapping =
            PathMapping::compile("jquery", &["vendor/*.js".to_string()], "/p", Platform::Posix)
                .unwrap();

        assert_eq!(mapping.apply("jquery").as_deref(), Some("/p/vendor/jquery.js"));
        assert!(mapping.apply("jquery-ui").is_none());
    }

    #[test]
    fn test_empty_template_list_never_yields() {
        let mapping = PathMapping::compile("@/*", &[], "/p", Platform::Posix).unwrap();

        assert!(mapping.captures("@/x").is_some());
        assert!(mapping.apply("@/x").is_none());
    }

    #[test]
    fn test_summary() {
        let mapping =
            PathMapping::compile("@/*", &["src/*".to_string()], "/p", Platform::Posix).unwrap();
        let summary = mapping.summary();

        assert_eq!(summary.key, "@/*");
        assert_eq!(summary.pattern, "^@/(.+)$");
        assert_eq!(summary.paths, ["/p/src/*"]);
    }

    #[test]
    fn test_windows_base_dir() {
        let paths = table(&[("@/*", &[r"src\*"])]);
        let mappings =
            resolve_path_mappings(&paths, r"C:\project", Platform::Windows).unwrap();

        assert_eq!(
            mappings[0].apply("@/a").as_deref(),
            Some("C:/project/src/a")
        );
    }
}
