use thiserror::Error;

#[derive(Error, Debug)]
pub enum FixtureError {
    #[error("Arithmetic overflow in {op}({input})")]
    Overflow { op: String, input: String },

    #[error("Missing input '{field}' for {op}")]
    MissingInput { op: String, field: String },

    #[error("{op} does not take '{field}' (got {value})")]
    UnexpectedInput { op: String, field: String, value: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl FixtureError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FixtureError::MissingInput { .. }
            | FixtureError::UnexpectedInput { .. }
            | FixtureError::ValidationError { .. }
            | FixtureError::ConfigError { .. } => ErrorSeverity::High,
            FixtureError::Overflow { .. } => ErrorSeverity::Medium,
            FixtureError::IoError(_) | FixtureError::SerializationError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    /// Process exit code for the CLI.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FixtureError::Overflow { op, input } => {
                format!("{op}({input}) does not fit in a 32-bit integer")
            }
            FixtureError::MissingInput { op, field } => {
                format!("{op} needs a value for '{field}'")
            }
            FixtureError::UnexpectedInput { op, field, .. } => {
                format!("{op} has no '{field}' operand")
            }
            FixtureError::ValidationError { message } => format!("Invalid request: {message}"),
            FixtureError::ConfigError { message } => format!("Bad configuration: {message}"),
            FixtureError::IoError(e) => format!("Could not read or write a file: {e}"),
            FixtureError::SerializationError(e) => format!("Could not render output: {e}"),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            FixtureError::Overflow { .. } => "Use smaller operands or run with --mode wrapping",
            FixtureError::MissingInput { .. } => "Pass -a/-b for m1 and m2, or -x for m0",
            FixtureError::UnexpectedInput { .. } => {
                "Drop the extra operand: m0 takes -x, m1 and m2 take -a and -b"
            }
            FixtureError::ValidationError { .. } => {
                "Check the operation and receiver combination; see --help"
            }
            FixtureError::ConfigError { .. } => {
                "Check the TOML syntax and that every ${VAR} is set in the environment"
            }
            FixtureError::IoError(_) => "Check that the file exists and is readable",
            FixtureError::SerializationError(_) => "Retry with --format text",
        }
    }
}

pub type Result<T> = std::result::Result<T, FixtureError>;
