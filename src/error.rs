//! Application error type.
//!
//! Every failure aborts the run. The error records which pipeline stage failed
//! so a data problem (load) can be told apart from a computation problem
//! (returns, AR(1), trend, beta).

/// What went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The input path does not exist.
    FileNotFound,
    /// Schema mismatch or a non-numeric / non-date field.
    ParseError,
    /// Not enough points for the requested computation.
    InsufficientData,
    /// A zero denominator or a non-finite intermediate value.
    NumericDegeneracy,
    /// Paired series of different lengths.
    LengthMismatch,
    /// Output failure (terminal or chart files).
    Io,
}

/// Which pipeline stage raised the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Load,
    Returns,
    Ar1,
    Trend,
    Beta,
    Output,
}

impl Stage {
    pub fn label(self) -> &'static str {
        match self {
            Stage::Load => "load",
            Stage::Returns => "return computation",
            Stage::Ar1 => "AR(1)",
            Stage::Trend => "trend",
            Stage::Beta => "beta",
            Stage::Output => "output",
        }
    }
}

#[derive(Clone)]
pub struct AppError {
    kind: ErrorKind,
    stage: Stage,
    message: String,
}

impl AppError {
    pub fn new(kind: ErrorKind, stage: Stage, message: impl Into<String>) -> Self {
        Self {
            kind,
            stage,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// Process exit code: 2 = input/output, 3 = not enough data, 4 = numeric.
    pub fn exit_code(&self) -> u8 {
        match self.kind {
            ErrorKind::FileNotFound | ErrorKind::ParseError | ErrorKind::Io => 2,
            ErrorKind::InsufficientData | ErrorKind::LengthMismatch => 3,
            ErrorKind::NumericDegeneracy => 4,
        }
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.stage.label(), self.message)
    }
}

impl std::fmt::Debug for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppError")
            .field("kind", &self.kind)
            .field("stage", &self.stage)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failing_stage() {
        let err = AppError::new(ErrorKind::NumericDegeneracy, Stage::Ar1, "lagged returns have zero variance");
        assert_eq!(err.to_string(), "AR(1) failed: lagged returns have zero variance");
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn exit_codes_separate_data_from_computation() {
        let missing = AppError::new(ErrorKind::FileNotFound, Stage::Load, "x");
        let short = AppError::new(ErrorKind::InsufficientData, Stage::Returns, "x");
        assert_eq!(missing.exit_code(), 2);
        assert_eq!(short.exit_code(), 3);
    }
}
