use std::fmt;

/// Errors that occur when constructing or validating generator options.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CoreError {
    /// A custom tag entry was empty or contained a character that cannot
    /// appear in a Go struct tag key.
    InvalidCustomTag(String),
    /// A pointer mode string did not name a known mode.
    UnknownPointerMode(String),
    /// A JSON column policy string did not name a known policy.
    UnknownJsonColumnPolicy(String),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidCustomTag(s) => {
                write!(
                    f,
                    "invalid custom tag '{s}': must be a non-empty key without whitespace, quotes, colons or backticks"
                )
            }
            Self::UnknownPointerMode(s) => {
                write!(f, "unknown pointer mode '{s}': expected none, all or time")
            }
            Self::UnknownJsonColumnPolicy(s) => {
                write!(f, "unknown json column policy '{s}': expected string or skip")
            }
        }
    }
}

impl std::error::Error for CoreError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_messages() {
        let cases = vec![
            (
                CoreError::InvalidCustomTag("a b".into()),
                "invalid custom tag 'a b'",
            ),
            (
                CoreError::UnknownPointerMode("some".into()),
                "unknown pointer mode 'some'",
            ),
            (
                CoreError::UnknownJsonColumnPolicy("drop".into()),
                "unknown json column policy 'drop'",
            ),
        ];

        for (error, expected_prefix) in cases {
            let msg = error.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error display for {error:?} = '{msg}', expected to start with '{expected_prefix}'"
            );
        }
    }

    #[test]
    fn error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(CoreError::InvalidCustomTag(String::new()));
        assert!(err.to_string().contains("invalid custom tag"));
    }
}
