use thiserror::Error;

/// Unified error type for `chamberwall` operations.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SizingError {
    /// Raised when a solver is constructed without a step size.
    #[error("solver step size must be provided")]
    MissingStepSize,

    /// Raised when a solver is constructed with a step size of zero.
    #[error("solver step size must be non-zero")]
    ZeroStepSize,

    /// Raised when a required input has not been provided to a builder.
    #[error("{component} must be provided before building the solver")]
    MissingComponent { component: &'static str },

    /// Raised when a numeric input is NaN or infinite.
    #[error("parameter `{name}` must be finite, found {value}")]
    NonFiniteParameter {
        /// Name of the offending input.
        name: &'static str,
        /// The value that was supplied.
        value: f64,
    },

    /// Raised when the inner and outer radius coincide.
    #[error("degenerate vessel: zero wall thickness (inner radius {inner_radius}, outer radius {outer_radius})")]
    DegenerateVessel {
        inner_radius: f64,
        outer_radius: f64,
    },

    /// Raised when stresses are requested at the cylinder axis.
    #[error("stress evaluation radius must be non-zero")]
    ZeroEvaluationRadius,

    /// Raised when the search walks the wall thickness down to zero or below.
    #[error("wall thickness became non-positive during the search ({thickness})")]
    NonPositiveThickness { thickness: f64 },

    /// Raised when the step search never crosses the allowable strength.
    #[error(
        "thickness search did not cross the strength limit after {iterations} iterations; last thickness {thickness}"
    )]
    SearchDidNotTerminate {
        /// Number of steps taken before the cap fired.
        iterations: usize,
        /// Trial thickness when the search was abandoned.
        thickness: f64,
    },
}

/// Coarse classification of [`SizingError`] values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Invalid solver input, reported at construction time.
    Configuration,
    /// Degenerate geometry encountered while evaluating stresses.
    Domain,
    /// The search was stopped by the iteration cap.
    Search,
}

impl SizingError {
    /// Helper to report a degenerate (zero-thickness) vessel.
    pub fn degenerate(inner_radius: f64, outer_radius: f64) -> Self {
        Self::DegenerateVessel {
            inner_radius,
            outer_radius,
        }
    }

    /// Helper for rejecting NaN and infinite inputs.
    pub fn non_finite(name: &'static str, value: f64) -> Self {
        Self::NonFiniteParameter { name, value }
    }

    /// Helper for bubbling up missing component errors from builders.
    pub fn missing_component(component: &'static str) -> Self {
        Self::MissingComponent { component }
    }

    /// Returns which class of failure this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingStepSize
            | Self::ZeroStepSize
            | Self::MissingComponent { .. }
            | Self::NonFiniteParameter { .. } => ErrorKind::Configuration,
            Self::DegenerateVessel { .. }
            | Self::ZeroEvaluationRadius
            | Self::NonPositiveThickness { .. } => ErrorKind::Domain,
            Self::SearchDidNotTerminate { .. } => ErrorKind::Search,
        }
    }
}

/// Type alias for results returned by this crate.
pub type Result<T> = std::result::Result<T, SizingError>;
