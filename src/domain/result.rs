//! Result type alias for tweet-audit

use super::errors::AuditError;

/// Result type alias for tweet-audit operations
///
/// # Examples
///
/// ```
/// use tweet_audit::domain::result::Result;
/// use tweet_audit::domain::errors::AuditError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(AuditError::Configuration("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, AuditError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_with_question_mark() -> Result<()> {
        fn inner() -> Result<usize> {
            Ok(42)
        }

        let value = inner()?;
        assert_eq!(value, 42);
        Ok(())
    }
}
