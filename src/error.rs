use std::path::Path;

/// Broad classification of what went wrong.
///
/// Callers match on the kind (e.g. the validator treats `NotFound` as a
/// reportable outcome); the exit code is derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Io,
    Parse,
    MissingColumn,
    Serialize,
}

impl ErrorKind {
    pub fn exit_code(self) -> u8 {
        match self {
            ErrorKind::NotFound | ErrorKind::Io | ErrorKind::Parse | ErrorKind::MissingColumn => 2,
            ErrorKind::Serialize => 4,
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    kind: ErrorKind,
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            exit_code: kind.exit_code(),
            message: message.into(),
        }
    }

    /// Build an error with an explicit exit code (e.g. a failed validation).
    pub fn with_exit_code(kind: ErrorKind, exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            kind,
            exit_code,
            message: message.into(),
        }
    }

    /// Map an `open`/`create` failure, keeping "file not found" distinct.
    pub fn open(path: &Path, action: &str, err: std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            Self::new(
                ErrorKind::NotFound,
                format!("File not found: '{}'", path.display()),
            )
        } else {
            Self::new(
                ErrorKind::Io,
                format!("Failed to {action} '{}': {err}", path.display()),
            )
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_maps_not_found() {
        let err = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let app = AppError::open(Path::new("missing.csv"), "open CSV", err);
        assert_eq!(app.kind(), ErrorKind::NotFound);
        assert_eq!(app.exit_code(), 2);
        assert!(app.message().contains("missing.csv"));
    }

    #[test]
    fn open_maps_other_io_errors() {
        let err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        let app = AppError::open(Path::new("locked.json"), "create catalog", err);
        assert_eq!(app.kind(), ErrorKind::Io);
        assert!(app.message().starts_with("Failed to create catalog"));
    }
}
