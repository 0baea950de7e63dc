use api::ApiError;
use api::validation::FieldErrors;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("not logged in; run `delfos login` first")]
    NotLoggedIn,
    #[error("{kind} {id} not found")]
    NotFound { kind: &'static str, id: String },
    #[error("invalid input: {0}")]
    Invalid(String),
    #[error("query failed: {0}")]
    Query(String),
    #[error("query cancelled")]
    Cancelled,
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
}

impl CliError {
    /// Flatten form validation errors into one message, `field: reason` per
    /// entry.
    pub fn from_fields(errors: &FieldErrors) -> Self {
        let joined = errors.iter().map(|(field, message)| format!("{field}: {message}")).collect::<Vec<_>>().join("; ");
        Self::Invalid(joined)
    }
}
