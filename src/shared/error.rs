use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every requested package was walked and printed
    Success = 0,
    /// Invalid command-line arguments (clap parsing errors, no packages given)
    InvalidArguments = 2,
    /// Application error (config file, output file, HTTP client setup, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for the license walk.
///
/// Per-node failures are absorbed by the walker, so most of these only ever
/// reach the user through the progress reporter. The CLI surfaces the file
/// and configuration variants.
#[derive(Debug, Error)]
pub enum WalkerError {
    #[error("Invalid package identifier: '{identifier}'\nReason: {reason}")]
    InvalidPackageIdentifier { identifier: String, reason: String },

    #[error("Package not found in registry: {identifier}")]
    PackageNotFound { identifier: String },

    #[error("Registry request failed for {identifier}\nDetails: {details}")]
    RegistryError { identifier: String, details: String },

    #[error("Unrecognized repository URL: {url}")]
    UnrecognizedRepositoryUrl { url: String },

    /// The content-API URL handed out by the repository host does not have
    /// the `/repos/{owner}/{project}/contents/{path}?ref={ref}` shape.
    #[error("Malformed repository content URL: {url}\nReason: {reason}")]
    MalformedContentUrl { url: String, reason: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Invalid config: {message}\n\n💡 Hint: {hint}")]
    ConfigError { message: String, hint: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ApplicationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::InvalidArguments),
            "Invalid Arguments (2)"
        );
        assert_eq!(
            format!("{}", ExitCode::ApplicationError),
            "Application Error (3)"
        );
    }

    #[test]
    fn test_invalid_package_identifier_display() {
        let error = WalkerError::InvalidPackageIdentifier {
            identifier: "@scope".to_string(),
            reason: "Scoped name is missing '/'".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid package identifier"));
        assert!(display.contains("@scope"));
        assert!(display.contains("missing '/'"));
    }

    #[test]
    fn test_malformed_content_url_display() {
        let error = WalkerError::MalformedContentUrl {
            url: "https://example.com/nope".to_string(),
            reason: "missing /repos/ segment".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Malformed repository content URL"));
        assert!(display.contains("https://example.com/nope"));
        assert!(display.contains("missing /repos/ segment"));
    }

    #[test]
    fn test_malformed_content_url_distinct_from_not_found() {
        let malformed: anyhow::Error = WalkerError::MalformedContentUrl {
            url: "x".to_string(),
            reason: "y".to_string(),
        }
        .into();
        let not_found: anyhow::Error = WalkerError::PackageNotFound {
            identifier: "x".to_string(),
        }
        .into();

        assert!(matches!(
            malformed.downcast_ref::<WalkerError>(),
            Some(WalkerError::MalformedContentUrl { .. })
        ));
        assert!(!matches!(
            not_found.downcast_ref::<WalkerError>(),
            Some(WalkerError::MalformedContentUrl { .. })
        ));
    }

    #[test]
    fn test_file_write_error_display() {
        let error = WalkerError::FileWriteError {
            path: PathBuf::from("/test/licenses.txt"),
            details: "Permission denied".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Failed to write to file"));
        assert!(display.contains("/test/licenses.txt"));
        assert!(display.contains("Permission denied"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_config_error_display() {
        let error = WalkerError::ConfigError {
            message: "max_concurrent_requests must be greater than 0".to_string(),
            hint: "Remove the field to allow unbounded requests".to_string(),
        };
        let display = format!("{}", error);
        assert!(display.contains("Invalid config"));
        assert!(display.contains("greater than 0"));
        assert!(display.contains("Remove the field"));
    }
}
