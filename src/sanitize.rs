use crate::error::SearchError;
use crate::query::QueryLimits;
use lazy_static::lazy_static;
use regex::Regex;

/// Hard cap applied by [`sanitize`], in characters.
pub const MAX_SANITIZED_CHARS: usize = 500;

lazy_static! {
    static ref MARKUP_CHARS: Regex = Regex::new(r#"[<>'"]"#).unwrap();
}

/// Normalise raw user text: markup quotes and brackets removed, whitespace
/// runs collapsed to one space, trimmed, at most 500 characters.
pub fn sanitize(raw: &str) -> String {
    let stripped = MARKUP_CHARS.replace_all(raw, "");
    let collapsed = stripped.split_whitespace().collect::<Vec<_>>().join(" ");

    match collapsed.char_indices().nth(MAX_SANITIZED_CHARS) {
        Some((cut, _)) => collapsed[..cut].trim_end().to_string(),
        None => collapsed,
    }
}

/// [`sanitize`] for input that may be absent.
pub fn sanitize_opt(raw: Option<&str>) -> String {
    raw.map(sanitize).unwrap_or_default()
}

/// Validate against the default limits, returning the sanitized query.
pub fn validate(raw: &str) -> Result<String, SearchError> {
    validate_with(raw, &QueryLimits::default())
}

pub fn validate_with(raw: &str, limits: &QueryLimits) -> Result<String, SearchError> {
    let sanitized = sanitize(raw);
    let len = sanitized.chars().count();

    if len == 0 {
        return Err(SearchError::EmptyQuery);
    }
    if len < limits.min_query_chars {
        return Err(SearchError::TooShort {
            min: limits.min_query_chars,
        });
    }
    if len > limits.max_query_chars {
        return Err(SearchError::TooLong {
            max: limits.max_query_chars,
        });
    }
    Ok(sanitized)
}

/// Outcome of validating a query, for callers that want a flat record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub valid: bool,
    pub error: Option<SearchError>,
}

impl Validation {
    pub fn of(raw: &str) -> Self {
        match validate(raw) {
            Ok(_) => Self {
                valid: true,
                error: None,
            },
            Err(err) => Self {
                valid: false,
                error: Some(err),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn strips_markup_and_collapses_whitespace() {
        assert_eq!(
            sanitize("  <Breaking\t\tBad>   \"S01\"  "),
            "Breaking Bad S01"
        );
        assert_eq!(sanitize("it's\n\nfine"), "its fine");
    }

    #[test]
    fn strip_before_trim_leaves_no_edge_space() {
        assert_eq!(sanitize("< a >"), "a");
    }

    #[test]
    fn absent_input_is_empty() {
        assert_eq!(sanitize_opt(None), "");
        assert_eq!(sanitize_opt(Some(" ab ")), "ab");
    }

    #[test]
    fn truncates_to_cap_on_char_boundary() {
        let raw = "é".repeat(MAX_SANITIZED_CHARS + 20);
        let out = sanitize(&raw);
        assert_eq!(out.chars().count(), MAX_SANITIZED_CHARS);
    }

    #[test]
    fn truncation_does_not_leave_trailing_space() {
        let raw = format!("{} tail", "a".repeat(MAX_SANITIZED_CHARS - 1));
        let out = sanitize(&raw);
        assert!(!out.ends_with(' '));
        assert_eq!(sanitize(&out), out);
    }

    #[test]
    fn validation_boundaries() {
        assert_eq!(validate(""), Err(SearchError::EmptyQuery));
        assert_eq!(validate("   \"\" "), Err(SearchError::EmptyQuery));
        assert_eq!(validate("a"), Err(SearchError::TooShort { min: 2 }));
        assert_eq!(validate("ab"), Ok("ab".to_string()));
    }

    #[test]
    fn tighter_configured_limit_reports_too_long() {
        let limits = QueryLimits {
            max_query_chars: 10,
            ..QueryLimits::default()
        };
        assert_eq!(
            validate_with("a much longer query", &limits),
            Err(SearchError::TooLong { max: 10 })
        );
    }

    #[test]
    fn validation_record() {
        let record = Validation::of("x");
        assert!(!record.valid);
        assert_eq!(record.error, Some(SearchError::TooShort { min: 2 }));
        assert!(Validation::of("xy").valid);
    }

    proptest! {
        #[test]
        fn sanitize_is_idempotent(raw in ".{0,700}") {
            let once = sanitize(&raw);
            prop_assert_eq!(sanitize(&once), once);
        }

        #[test]
        fn sanitize_output_is_clean(raw in "[ a-z<>'\"\t\n]{0,800}") {
            let out = sanitize(&raw);
            prop_assert!(!out.contains(['<', '>', '\'', '"']));
            prop_assert!(out.chars().count() <= MAX_SANITIZED_CHARS);
            prop_assert!(!out.contains("  "));
            prop_assert_eq!(out.trim(), out.as_str());
        }
    }
}
