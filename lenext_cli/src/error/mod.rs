use colored::*;
use std::error::Error as StdError;
use std::fmt;
use std::io;

/// CLI-specific error type with semantic exit codes
#[derive(Debug)]
pub struct CliError {
    /// The main error message
    message: String,

    /// Error category for exit code determination
    category: ErrorCategory,

    /// Additional context information
    context: Vec<(String, String)>,

    /// Suggestions for recovery
    pub suggestions: Vec<String>,

    /// Source error if any
    source: Option<Box<dyn StdError + Send + Sync>>,
}

/// Error categories that map to exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ErrorCategory {
    General,
    Misuse,
    Filesystem,
}

/// Semantic exit codes for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    Success = 0,
    GeneralError = 1,
    Misuse = 2,
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// Extension trait for adding context to errors
pub trait ErrorContext {
    fn with_context(self, key: &str, value: &str) -> Self;
    fn with_suggestion(self, suggestion: &str) -> Self;
}

impl CliError {
    /// Create a general error
    pub fn general(message: &str) -> Self {
        Self {
            message: message.to_string(),
            category: ErrorCategory::General,
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    /// Create a command misuse error
    pub fn misuse(message: &str) -> Self {
        Self {
            message: message.to_string(),
            category: ErrorCategory::Misuse,
            context: Vec::new(),
            suggestions: vec!["Run 'lenext --help' for usage information".to_string()],
            source: None,
        }
    }

    /// Create a filesystem error
    pub fn filesystem(message: &str) -> Self {
        Self {
            message: message.to_string(),
            category: ErrorCategory::Filesystem,
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    /// Create an error from an IO error
    pub fn from_io_error(error: io::Error, path: &str) -> Self {
        let message = format!("IO error on '{path}': {error}");
        let mut cli_error = match error.kind() {
            io::ErrorKind::NotFound => Self::filesystem(&message)
                .with_suggestion("Check that the output directory exists"),
            io::ErrorKind::PermissionDenied => {
                Self::filesystem(&message).with_suggestion("Check file permissions")
            }
            _ => Self::general(&message),
        };

        cli_error.source = Some(Box::new(error));
        cli_error
            .context
            .push(("path".to_string(), path.to_string()));
        cli_error
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self.category {
            ErrorCategory::General | ErrorCategory::Filesystem => ExitCode::GeneralError,
            ErrorCategory::Misuse => ExitCode::Misuse,
        }
    }

    /// Format the error for user display
    pub fn format_for_user(&self, debug: bool) -> String {
        let mut output = String::new();

        let prefix = match self.category {
            ErrorCategory::General => "Error".red(),
            ErrorCategory::Misuse => "Usage Error".yellow(),
            ErrorCategory::Filesystem => "File Error".red(),
        };

        output.push_str(&format!("{}: {}\n", prefix, self.message));

        if !self.context.is_empty() {
            output.push_str("\nContext:\n");
            for (key, value) in &self.context {
                output.push_str(&format!("  {}: {}\n", key.bold(), value));
            }
        }

        // Error chain in debug mode
        if debug && let Some(source) = &self.source {
            output.push_str("\nCaused by:\n");
            let mut current: Option<&dyn StdError> = Some(source.as_ref());
            let mut level = 1;

            while let Some(err) = current {
                output.push_str(&format!("  {level}: {err}\n"));
                current = err.source();
                level += 1;
            }
        }

        if !self.suggestions.is_empty() {
            output.push_str("\nSuggestions:\n");
            for suggestion in &self.suggestions {
                output.push_str(&format!("  - {suggestion}\n"));
            }
        }

        output
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            match self.category {
                ErrorCategory::General => "Error",
                ErrorCategory::Misuse => "Usage Error",
                ErrorCategory::Filesystem => "File Error",
            },
            self.message
        )?;

        for (key, value) in &self.context {
            write!(f, " ({key}: {value})")?;
        }

        Ok(())
    }
}

impl StdError for CliError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

impl ErrorContext for CliError {
    fn with_context(mut self, key: &str, value: &str) -> Self {
        self.context.push((key.to_string(), value.to_string()));
        self
    }

    fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestions.push(suggestion.to_string());
        self
    }
}

/// Convert anyhow errors to CLI errors
impl From<anyhow::Error> for CliError {
    fn from(error: anyhow::Error) -> Self {
        Self::general(&format!("{error:#}"))
    }
}

/// Malformed MACs and key lengths are caller mistakes
impl From<lenext_core::Error> for CliError {
    fn from(error: lenext_core::Error) -> Self {
        let lenext_core::Error::InputFormat(input) = &error;
        let suggestion = if input.is_digest_error() {
            "--mac must be the 32-character hex MD5 digest of secret || message"
        } else {
            "--keylen must be between 0 and the padded length of --msg"
        };

        let mut cli_error = Self::misuse(&error.to_string()).with_suggestion(suggestion);
        cli_error.source = Some(Box::new(error));
        cli_error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lenext_core::InputFormatError;

    #[test]
    fn test_exit_codes() {
        assert_eq!(CliError::general("x").exit_code(), ExitCode::GeneralError);
        assert_eq!(CliError::misuse("x").exit_code(), ExitCode::Misuse);
        assert_eq!(
            CliError::filesystem("x").exit_code(),
            ExitCode::GeneralError
        );
        assert_eq!(ExitCode::Success as i32, 0);
        assert_eq!(ExitCode::Misuse as i32, 2);
    }

    #[test]
    fn test_core_error_is_misuse() {
        let error: CliError =
            lenext_core::Error::from(InputFormatError::invalid_digest_length(5)).into();

        assert_eq!(error.exit_code(), ExitCode::Misuse);
        assert!(error.to_string().contains("Invalid digest length"));
        assert!(error.suggestions.iter().any(|s| s.contains("--mac")));
        assert!(error.source().is_some());
    }

    #[test]
    fn test_secret_length_error_suggests_keylen() {
        let error: CliError =
            lenext_core::Error::from(InputFormatError::negative_secret_length(-2)).into();
        assert!(error.suggestions.iter().any(|s| s.contains("--keylen")));
    }

    #[test]
    fn test_io_error_mapping() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "missing");
        let error = CliError::from_io_error(io_error, "/no/such/dir/out.bin");

        assert_eq!(error.exit_code(), ExitCode::GeneralError);
        assert!(error.suggestions.iter().any(|s| s.contains("output directory")));
        assert!(error.to_string().contains("/no/such/dir/out.bin"));
        assert!(error.format_for_user(true).contains("Caused by"));
    }

    #[test]
    fn test_format_for_user_lists_suggestions() {
        let error = CliError::general("boom").with_suggestion("try again");
        let output = error.format_for_user(false);
        assert!(output.contains("boom"));
        assert!(output.contains("try again"));
    }
}
