//! Conversions from external infrastructure errors into domain errors.

use geekbot_domain::GeekbotError;
use reqwest::Error as HttpError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub GeekbotError);

impl From<InfraError> for GeekbotError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<GeekbotError> for InfraError {
    fn from(value: GeekbotError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoGeekbotError {
    fn into_geekbot(self) -> GeekbotError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → GeekbotError */
/* -------------------------------------------------------------------------- */

impl IntoGeekbotError for HttpError {
    fn into_geekbot(self) -> GeekbotError {
        if self.is_timeout() {
            return GeekbotError::Transport(format!("HTTP request timed out: {self}"));
        }

        #[cfg(not(target_arch = "wasm32"))]
        if self.is_connect() {
            return GeekbotError::Transport(format!("HTTP connection failure: {self}"));
        }

        if let Some(status) = self.status() {
            let code = status.as_u16();
            let message =
                format!("HTTP {} {}", code, status.canonical_reason().unwrap_or("unknown status"));
            return GeekbotError::from_status(code, message);
        }

        if self.is_builder() {
            return GeekbotError::Config(format!("invalid HTTP request: {self}"));
        }

        if self.is_decode() {
            return GeekbotError::Decode(self.to_string());
        }

        GeekbotError::Transport(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        InfraError(value.into_geekbot())
    }
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → GeekbotError */
/* -------------------------------------------------------------------------- */

impl IntoGeekbotError for std::io::Error {
    fn into_geekbot(self) -> GeekbotError {
        GeekbotError::Config(format!("I/O failure: {self}"))
    }
}

impl From<std::io::Error> for InfraError {
    fn from(value: std::io::Error) -> Self {
        InfraError(value.into_geekbot())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
