/// Exit code for invalid user input (CLI values, model parameters, masses).
pub const EXIT_INVALID_INPUT: u8 = 2;
/// Exit code for numerical failures.
pub const EXIT_NUMERIC: u8 = 3;
/// Exit code for plotting backend / image write failures.
pub const EXIT_PLOT: u8 = 4;

#[derive(Clone)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(EXIT_INVALID_INPUT, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
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
            .field("exit_code", &self.exit_code)
            .field("message", &self.message)
            .finish()
    }
}

impl std::error::Error for AppError {}

/// Failures of the strain relation itself.
///
/// A sweep is rejected as a whole: the first offending element is reported
/// and no partial series is returned.
#[derive(Debug, Clone, PartialEq)]
pub enum StrainError {
    /// A mass is zero, negative, or not finite.
    InvalidMass { index: usize, value: f64 },
    /// A model parameter is outside its physical domain.
    InvalidParam { name: &'static str, value: f64 },
    /// The relation produced a non-finite strain (overflow at extreme masses).
    NonFiniteStrain { index: usize, mass: f64 },
}

impl StrainError {
    pub fn exit_code(&self) -> u8 {
        match self {
            StrainError::InvalidMass { .. } | StrainError::InvalidParam { .. } => EXIT_INVALID_INPUT,
            StrainError::NonFiniteStrain { .. } => EXIT_NUMERIC,
        }
    }
}

impl std::fmt::Display for StrainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrainError::InvalidMass { index, value } => write!(
                f,
                "Invalid input: PBH mass at index {index} must be finite and > 0 (got {value})."
            ),
            StrainError::InvalidParam { name, value } => {
                write!(f, "Invalid input: model parameter `{name}` out of range (got {value}).")
            }
            StrainError::NonFiniteStrain { index, mass } => write!(
                f,
                "Non-finite strain at index {index} (mass {mass:e} g)."
            ),
        }
    }
}

impl std::error::Error for StrainError {}

impl From<StrainError> for AppError {
    fn from(err: StrainError) -> Self {
        AppError::new(err.exit_code(), err.to_string())
    }
}
