//! Compiled positional message patterns.
//!
//! # Invariants
//!
//! 1. **Compile once**: placeholder scanning happens in [`Pattern::compile`];
//!    [`Pattern::fill`] is a single pass over pre-parsed segments and never
//!    re-reads the source text.
//!
//! 2. **Fill never fails**: a placeholder index with no supplied parameter is
//!    rendered back as `{n}`; substitution is not recursive, so parameter
//!    values containing braces are emitted verbatim.
//!
//! 3. **Source is retained**: the original template text is kept for tier
//!    transfer, so a pattern can be re-compiled elsewhere byte-for-byte.
//!
//! # Failure Modes
//!
//! | Input | Behavior |
//! |-------|----------|
//! | `{2}` with one param | placeholder left as `{2}` |
//! | `{name}` (non-numeric) | literal text |
//! | `{0` (unclosed) | literal text |
//! | `{}` | literal text |

use std::fmt;

/// One pre-parsed piece of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(usize),
}

/// A compiled template string with positional `{0}`-style placeholders,
/// associated with exactly one message entry and either the default slot or
/// one specific locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    segments: Vec<Segment>,
}

impl Pattern {
    /// Compile a template, splitting it into literal and placeholder
    /// segments. Malformed placeholders become literal text; compilation
    /// itself cannot fail.
    #[must_use]
    pub fn compile(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut chars = source.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch != '{' {
                literal.push(ch);
                continue;
            }

            let mut token = String::new();
            let mut found_close = false;
            for c in chars.by_ref() {
                if c == '}' {
                    found_close = true;
                    break;
                }
                token.push(c);
            }

            match token.parse::<usize>() {
                Ok(index) if found_close => {
                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Param(index));
                }
                _ => {
                    // Non-numeric token, empty braces, or unclosed brace:
                    // keep the raw text.
                    literal.push('{');
                    literal.push_str(&token);
                    if found_close {
                        literal.push('}');
                    }
                }
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self {
            source: source.to_string(),
            segments,
        }
    }

    /// The original template text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Highest placeholder index plus one, i.e. how many parameters the
    /// pattern can consume.
    #[must_use]
    pub fn param_count(&self) -> usize {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Param(i) => Some(i + 1),
                Segment::Literal(_) => None,
            })
            .max()
            .unwrap_or(0)
    }

    /// Substitute `params` positionally. Missing parameters leave their
    /// placeholder as-is; surplus parameters are ignored.
    #[must_use]
    pub fn fill(&self, params: &[&str]) -> String {
        let mut out = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Param(index) => match params.get(*index) {
                    Some(value) => out.push_str(value),
                    None => {
                        out.push('{');
                        out.push_str(&index.to_string());
                        out.push('}');
                    }
                },
            }
        }
        out
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_single_param() {
        let pattern = Pattern::compile("Value {0} is invalid");
        assert_eq!(pattern.fill(&["7"]), "Value 7 is invalid");
    }

    #[test]
    fn fill_repeated_and_reordered_params() {
        let pattern = Pattern::compile("{1} before {0}, {0} again");
        assert_eq!(pattern.fill(&["a", "b"]), "b before a, a again");
    }

    #[test]
    fn fill_missing_param_leaves_placeholder() {
        let pattern = Pattern::compile("Value {0} exceeds {1}");
        assert_eq!(pattern.fill(&["7"]), "Value 7 exceeds {1}");
    }

    #[test]
    fn fill_surplus_params_ignored() {
        let pattern = Pattern::compile("plain");
        assert_eq!(pattern.fill(&["a", "b"]), "plain");
    }

    #[test]
    fn non_numeric_token_is_literal() {
        let pattern = Pattern::compile("Hello {name}");
        assert_eq!(pattern.fill(&["x"]), "Hello {name}");
    }

    #[test]
    fn unclosed_brace_is_literal() {
        let pattern = Pattern::compile("Hello {0");
        assert_eq!(pattern.fill(&["x"]), "Hello {0");
    }

    #[test]
    fn empty_braces_are_literal() {
        let pattern = Pattern::compile("Hello {}");
        assert_eq!(pattern.fill(&["x"]), "Hello {}");
    }

    #[test]
    fn substitution_is_not_recursive() {
        let pattern = Pattern::compile("{0}");
        assert_eq!(pattern.fill(&["{1}"]), "{1}");
    }

    #[test]
    fn param_count_reports_highest_index() {
        assert_eq!(Pattern::compile("no params").param_count(), 0);
        assert_eq!(Pattern::compile("{0} and {2}").param_count(), 3);
    }

    #[test]
    fn source_is_retained_verbatim() {
        let source = "Value {0} is invalid ({weird}";
        assert_eq!(Pattern::compile(source).source(), source);
    }
}
