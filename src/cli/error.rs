//! CLI-level errors (wraps infrastructure errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;
use crate::infrastructure::InfraError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Infra(#[from] InfraError),
}

impl From<ApplicationError> for CliError {
    fn from(e: ApplicationError) -> Self {
        CliError::Infra(InfraError::Application(e))
    }
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Infra(e) => match e {
                InfraError::Io { .. } => crate::exitcode::IOERR,
                InfraError::Application(app) => match app {
                    ApplicationError::Domain(DomainError::InvalidArgument(_))
                    | ApplicationError::Blueprint { .. } => crate::exitcode::DATAERR,
                    ApplicationError::Domain(DomainError::Sink(_))
                    | ApplicationError::OperationFailed { .. } => crate::exitcode::IOERR,
                    ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(
        ApplicationError::Domain(DomainError::InvalidArgument("label".into())).into(),
        crate::exitcode::DATAERR
    )]
    #[case(
        ApplicationError::Config { message: "broken".into() }.into(),
        crate::exitcode::CONFIG
    )]
    #[case(
        InfraError::io("pause", std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed")).into(),
        crate::exitcode::IOERR
    )]
    fn given_error_when_mapping_then_returns_sysexits_code(
        #[case] error: CliError,
        #[case] expected: i32,
    ) {
        assert_eq!(error.exit_code(), expected);
    }
}
