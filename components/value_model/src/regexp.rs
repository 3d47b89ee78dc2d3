//! Regular-expression values
//!
//! A regexp value keeps its original source pattern and a validated,
//! canonically ordered flag string. The pair (source, flags) is the
//! comparison key used by the equality engine; match-progress state is
//! deliberately not part of the value.

use regex::{Regex, RegexBuilder};
use std::fmt;

use crate::error::ErrorObject;

/// A compiled regular expression with its source pattern and flags.
///
/// Flags are validated on construction (duplicate or unknown flags are
/// rejected) and stored in a canonical sorted order, so `"gim"` and
/// `"img"` produce the same flag string.
///
/// # Examples
///
/// ```
/// use value_model::RegExpValue;
///
/// let a = RegExpValue::new("a+", "gim").unwrap();
/// let b = RegExpValue::new("a+", "img").unwrap();
/// assert_eq!(a.flags(), b.flags());
/// assert!(RegExpValue::new("a", "gg").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct RegExpValue {
    /// Compiled matcher
    regex: Regex,
    /// Original source pattern
    source_pattern: String,
    /// Flags string (canonical sorted order)
    flags_str: String,
}

impl RegExpValue {
    /// Create a new regexp value from a pattern and a flag string.
    pub fn new(pattern: &str, flags: &str) -> Result<Self, ErrorObject> {
        let (sorted_flags, flag_i, flag_m, flag_s) = Self::parse_flags(flags)?;
        let regex = Self::build_regex(pattern, flag_i, flag_m, flag_s)?;

        Ok(RegExpValue {
            regex,
            source_pattern: pattern.to_string(),
            flags_str: sorted_flags,
        })
    }

    fn parse_flags(flags: &str) -> Result<(String, bool, bool, bool), ErrorObject> {
        let mut g = false;
        let mut i = false;
        let mut m = false;
        let mut s = false;
        let mut u = false;
        let mut y = false;

        for ch in flags.chars() {
            let seen = match ch {
                'g' => std::mem::replace(&mut g, true),
                'i' => std::mem::replace(&mut i, true),
                'm' => std::mem::replace(&mut m, true),
                's' => std::mem::replace(&mut s, true),
                'u' => std::mem::replace(&mut u, true),
                'y' => std::mem::replace(&mut y, true),
                _ => {
                    return Err(ErrorObject::syntax_error(format!("Invalid flag: '{}'", ch)));
                }
            };
            if seen {
                return Err(ErrorObject::syntax_error(format!(
                    "Invalid flags: duplicate '{}'",
                    ch
                )));
            }
        }

        // Canonical sorted order
        let mut sorted = String::new();
        if g {
            sorted.push('g');
        }
        if i {
            sorted.push('i');
        }
        if m {
            sorted.push('m');
        }
        if s {
            sorted.push('s');
        }
        if u {
            sorted.push('u');
        }
        if y {
            sorted.push('y');
        }

        Ok((sorted, i, m, s))
    }

    fn build_regex(
        pattern: &str,
        ignore_case: bool,
        multi_line: bool,
        dot_all: bool,
    ) -> Result<Regex, ErrorObject> {
        RegexBuilder::new(pattern)
            .case_insensitive(ignore_case)
            .multi_line(multi_line)
            .dot_matches_new_line(dot_all)
            .build()
            .map_err(|e| ErrorObject::syntax_error(format!("Invalid regular expression: {}", e)))
    }

    /// Get the original source pattern.
    pub fn source(&self) -> &str {
        &self.source_pattern
    }

    /// Get the canonical flag string.
    pub fn flags(&self) -> &str {
        &self.flags_str
    }

    /// Test whether the pattern matches anywhere in `text`.
    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

impl fmt::Display for RegExpValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.source_pattern, self.flags_str)
    }
}
