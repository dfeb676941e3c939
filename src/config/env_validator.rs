//! Environment variable validation with helpful warnings
//!
//! Invalid values are logged and ignored so a stray variable never
//! aborts a deploy on its own.

/// Validator for environment variable values
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    expected: &'a str,
}

impl<'a> EnvVarValidator<'a> {
    /// Create a new validator; `expected` describes valid input for the warning
    pub fn new(var_name: &'a str, expected: &'a str) -> Self {
        Self { var_name, expected }
    }

    /// Parse a value, returning `None` (with a logged warning) if invalid
    pub fn parse<T, F>(&self, value: &str, parser: F) -> Option<T>
    where
        F: Fn(&str) -> Option<T>,
    {
        let parsed = parser(value.trim());
        if parsed.is_none() {
            tracing::warn!(
                "ignoring invalid {} value '{}', expected {}",
                self.var_name,
                value,
                self.expected
            );
        }
        parsed
    }
}

/// Levenshtein distance for typo suggestions
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    if a_bytes.is_empty() {
        return b_bytes.len();
    }
    if b_bytes.is_empty() {
        return a_bytes.len();
    }

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}

/// Closest candidate within two edits, if any
pub fn closest<'a>(input: &str, candidates: &[&'a str]) -> Option<&'a str> {
    let input = input.to_lowercase();
    candidates
        .iter()
        .map(|c| (*c, levenshtein(&input, c)))
        .filter(|(_, dist)| *dist <= 2)
        .min_by_key(|(_, dist)| *dist)
        .map(|(c, _)| c)
}
