//! Filepath: src/core/parser.rs
//! Directive parser for `.dork` files.
//!
//! Line handling, in order:
//! - trim; drop blanks and `#` comment lines
//! - strip an inline `# comment` (outside quotes, after whitespace)
//! - `@engine`, `@var`, `@include` directives update parser state
//! - anything else is a query: substitute variables, emit a record
//!
//! Notes
//! - Engine state is per file and starts at the default engine.
//! - Variables and the include set are shared by the whole parse tree.
//! - Revisiting a canonical path is a silent no-op, which breaks cycles.

use std::collections::HashSet;
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use tracing::{debug, instrument, trace, warn};

use crate::core::engines::{self, DEFAULT_ENGINE};
use crate::core::vars::{self, Variables};

/// `@var NAME = value`
static VAR_DIRECTIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^@var\s+([A-Za-z0-9_]+)\s*=\s*(.+)").expect("valid @var regex")
});

/// One resolved query line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryRecord {
    /// Query text after variable substitution
    pub query: String,
    /// Engine id in effect for this line
    pub engine: String,
    /// 1-based line number in `file`
    pub line: usize,
    /// Basename of the source file
    pub file: String,
    /// Source text before substitution (comment already stripped)
    pub original: String,
}

/// Fatal parse failures
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Recoverable problems; the parse carries on after each one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    UnknownEngine {
        file: String,
        line: usize,
        engine: String,
        /// Engine that stays in effect
        current: String,
    },
    UndefinedVariables {
        file: String,
        line: usize,
        names: Vec<String>,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::UnknownEngine { file, line, engine, current } => {
                write!(f, "{file}:{line}: Unknown engine '{engine}', keeping {current}")
            }
            Warning::UndefinedVariables { file, line, names } => {
                write!(f, "{file}:{line}: Undefined variable(s): {}", names.join(", "))
            }
        }
    }
}

/// State for one top-level parse and every file it includes.
///
/// Build a fresh parser per top-level file; nothing is shared between
/// parser values.
#[derive(Debug, Default)]
pub struct DorkParser {
    variables: Variables,
    visited: HashSet<PathBuf>,
    warnings: Vec<Warning>,
}

impl DorkParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the variable table with caller overrides
    pub fn with_overrides(overrides: Variables) -> Self {
        Self {
            variables: overrides,
            ..Self::default()
        }
    }

    pub fn variables(&self) -> &Variables {
        &self.variables
    }

    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Parse `path` and everything it includes into one ordered list
    pub fn parse(&mut self, path: impl AsRef<Path>) -> Result<Vec<QueryRecord>, ParseError> {
        self.parse_file(path.as_ref())
    }

    #[instrument(level = "debug", skip(self, path), fields(path = %path.display()))]
    fn parse_file(&mut self, path: &Path) -> Result<Vec<QueryRecord>, ParseError> {
        let canonical =
            dunce::canonicalize(path).map_err(|_| ParseError::FileNotFound(path.to_path_buf()))?;

        if !self.visited.insert(canonical.clone()) {
            debug!("already visited, skipping");
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&canonical).map_err(|source| ParseError::Read {
            path: canonical.clone(),
            source,
        })?;

        let file_name = canonical
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| canonical.display().to_string());
        let base_dir = canonical.parent().map(Path::to_path_buf).unwrap_or_default();

        let mut queries = Vec::new();
        let mut current_engine = DEFAULT_ENGINE.to_string();

        for (idx, raw) in content.lines().enumerate() {
            let line_num = idx + 1;
            let trimmed = raw.trim();

            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            let line = strip_inline_comment(trimmed);
            if line.is_empty() {
                continue;
            }

            if line.starts_with("@engine") {
                self.engine_directive(line, &file_name, line_num, &mut current_engine);
                continue;
            }

            if line.starts_with("@var") {
                self.var_directive(line);
                continue;
            }

            if line.starts_with("@include") {
                if let Some(target) = include_target(line, &base_dir) {
                    trace!(target = %target.display(), "include");
                    let included = self.parse_file(&target)?;
                    queries.extend(included);
                }
                continue;
            }

            queries.push(self.query_record(line, &current_engine, &file_name, line_num));
        }

        debug!(count = queries.len(), "parsed");
        Ok(queries)
    }

    fn engine_directive(
        &mut self,
        line: &str,
        file_name: &str,
        line_num: usize,
        current_engine: &mut String,
    ) {
        let Some(arg) = directive_argument(line) else {
            return;
        };

        let engine = arg.to_lowercase();
        if engines::is_known(&engine) {
            trace!(%engine, "engine switched");
            *current_engine = engine;
        } else {
            self.warn(Warning::UnknownEngine {
                file: file_name.to_string(),
                line: line_num,
                engine,
                current: current_engine.clone(),
            });
        }
    }

    fn var_directive(&mut self, line: &str) {
        match VAR_DIRECTIVE.captures(line) {
            Some(caps) => {
                let name = &caps[1];
                let value = caps[2].trim();
                if !self.variables.define(name, value) {
                    trace!(name, "variable already set, keeping existing value");
                }
            }
            None => debug!(line, "ignoring malformed @var"),
        }
    }

    fn query_record(
        &mut self,
        line: &str,
        engine: &str,
        file_name: &str,
        line_num: usize,
    ) -> QueryRecord {
        let query = self.variables.substitute(line);

        let names = vars::unresolved(&query);
        if !names.is_empty() {
            self.warn(Warning::UndefinedVariables {
                file: file_name.to_string(),
                line: line_num,
                names,
            });
        }

        QueryRecord {
            query,
            engine: engine.to_string(),
            line: line_num,
            file: file_name.to_string(),
            original: line.to_string(),
        }
    }

    fn warn(&mut self, warning: Warning) {
        warn!("{warning}");
        self.warnings.push(warning);
    }
}

/// Parse `path` with `overrides` taking precedence over in-file `@var`
pub fn parse_file(
    path: impl AsRef<Path>,
    overrides: Variables,
) -> Result<Vec<QueryRecord>, ParseError> {
    DorkParser::with_overrides(overrides).parse(path)
}

/// Cut a trailing `# comment`.
///
/// A `#` starts a comment only outside single/double quotes and only at the
/// start of the text or right after whitespace. Trailing whitespace before
/// the comment is dropped.
pub fn strip_inline_comment(text: &str) -> &str {
    let mut in_single = false;
    let mut in_double = false;
    let mut prev: Option<char> = None;

    for (i, ch) in text.char_indices() {
        match ch {
            '\'' if !in_double => in_single = !in_single,
            '"' if !in_single => in_double = !in_double,
            '#' if !in_single && !in_double => {
                if prev.is_none_or(char::is_whitespace) {
                    return text[..i].trim_end();
                }
            }
            _ => {}
        }
        prev = Some(ch);
    }

    text
}

/// Text after the directive keyword, if any
fn directive_argument(line: &str) -> Option<&str> {
    let (_, rest) = line.split_once(char::is_whitespace)?;
    let rest = rest.trim();
    (!rest.is_empty()).then_some(rest)
}

/// Resolve an `@include` argument against the including file's directory
fn include_target(line: &str, base_dir: &Path) -> Option<PathBuf> {
    let arg = directive_argument(line)?
        .trim_matches('"')
        .trim_matches('\'');
    if arg.is_empty() {
        return None;
    }

    let expanded = shellexpand::tilde(arg);
    let path = Path::new(expanded.as_ref());
    if path.is_absolute() {
        Some(path.to_path_buf())
    } else {
        Some(base_dir.join(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_comment_after_whitespace_is_removed() {
        assert_eq!(strip_inline_comment("site:x.com   # note"), "site:x.com");
        assert_eq!(strip_inline_comment("# whole line"), "");
    }

    #[test]
    fn hash_inside_quotes_or_glued_is_literal() {
        assert_eq!(strip_inline_comment(r#"site:x "a#b""#), r#"site:x "a#b""#);
        assert_eq!(strip_inline_comment("'x # y' z"), "'x # y' z");
        assert_eq!(strip_inline_comment("c#sharp tips"), "c#sharp tips");
        assert_eq!(strip_inline_comment(r#""quoted" # gone"#), r#""quoted""#);
    }

    #[test]
    fn apostrophe_inside_double_quotes_does_not_open_single() {
        assert_eq!(strip_inline_comment(r#""don't" # c"#), r#""don't""#);
    }

    #[test]
    fn tab_before_hash_counts_as_whitespace() {
        assert_eq!(strip_inline_comment("query\t# c"), "query");
    }

    #[test]
    fn directive_argument_requires_text() {
        assert_eq!(directive_argument("@engine   bing "), Some("bing"));
        assert_eq!(directive_argument("@engine"), None);
        assert_eq!(directive_argument("@engine   "), None);
    }

    #[test]
    fn include_target_strips_quotes_and_joins_relative() {
        let base = Path::new("/tmp/dorks");
        assert_eq!(
            include_target("@include \"common/base.dork\"", base),
            Some(PathBuf::from("/tmp/dorks/common/base.dork"))
        );
        assert_eq!(
            include_target("@include 'x.dork'", base),
            Some(PathBuf::from("/tmp/dorks/x.dork"))
        );
        assert_eq!(include_target("@include \"\"", base), None);
    }

    #[cfg(unix)]
    #[test]
    fn include_target_keeps_absolute_paths() {
        assert_eq!(
            include_target("@include /etc/x.dork", Path::new("/tmp")),
            Some(PathBuf::from("/etc/x.dork"))
        );
    }

    #[test]
    fn warnings_render_with_location() {
        let w = Warning::UndefinedVariables {
            file: "a.dork".into(),
            line: 3,
            names: vec!["X".into(), "Y".into()],
        };
        assert_eq!(w.to_string(), "a.dork:3: Undefined variable(s): X, Y");

        let w = Warning::UnknownEngine {
            file: "a.dork".into(),
            line: 1,
            engine: "foo".into(),
            current: "bing".into(),
        };
        assert_eq!(w.to_string(), "a.dork:1: Unknown engine 'foo', keeping bing");
    }

    #[test]
    fn missing_file_is_an_error() {
        let err = DorkParser::new().parse("/definitely/not/here.dork").unwrap_err();
        assert!(matches!(err, ParseError::FileNotFound(_)));
    }
}
