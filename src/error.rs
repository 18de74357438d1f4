/// Boxed cause preserved behind [`Error`] for chain-of-custody inspection.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// What went wrong, independent of which operation produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display, strum_macros::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// No registry collaborator is configured.
    RegistryUnavailable,
    /// The registry has no entry for the requested chain id.
    NotFound,
    /// The probed endpoint is unreachable or malformed.
    EndpointInvalid,
    /// The probed endpoint serves a different chain than requested.
    ChainIdMismatch,
    /// Wrapped unexpected cause.
    Generic,
}

/// Uniform error value for registry and probe operations: the operation that
/// failed, a message, and an optional underlying cause.
#[derive(thiserror::Error, Debug)]
#[error("{}", render(.message, .cause))]
pub struct Error {
    kind: ErrorKind,
    operation: &'static str,
    message: String,
    #[source]
    cause: Option<BoxError>,
}

fn render(message: &str, cause: &Option<BoxError>) -> String {
    match (message.is_empty(), cause) {
        (false, Some(cause)) => format!("{message}: {cause}"),
        (false, None) => message.to_string(),
        (true, Some(cause)) => cause.to_string(),
        (true, None) => "network operation error".to_string(),
    }
}

impl Error {
    pub fn new(kind: ErrorKind, operation: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind,
            operation,
            message: message.into(),
            cause: None,
        }
    }

    /// Attach the underlying cause.
    pub fn with_cause(mut self, cause: impl Into<BoxError>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    pub fn registry_unavailable(operation: &'static str) -> Self {
        Self::new(
            ErrorKind::RegistryUnavailable,
            operation,
            "chain registry client is not configured",
        )
    }

    pub fn not_found(operation: &'static str, chain_id: u64) -> Self {
        Self::new(
            ErrorKind::NotFound,
            operation,
            format!("chain id {chain_id} has no registry entry"),
        )
    }

    pub fn endpoint_invalid(operation: &'static str, url: &str) -> Self {
        Self::new(
            ErrorKind::EndpointInvalid,
            operation,
            format!("rpc endpoint {url} is unreachable or malformed"),
        )
    }

    pub fn chain_id_mismatch(operation: &'static str, requested: u64, reported: u64) -> Self {
        Self::new(
            ErrorKind::ChainIdMismatch,
            operation,
            format!("rpc endpoint reports chain id {reported}, expected {requested}"),
        )
    }

    pub fn generic(operation: &'static str, cause: impl Into<BoxError>) -> Self {
        Self::new(ErrorKind::Generic, operation, "").with_cause(cause)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Name of the operation that produced this error.
    pub fn operation(&self) -> &'static str {
        self.operation
    }
}
