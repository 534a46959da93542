//! Mapping of Manta HTTP failures onto [`AppError`].

use serde::Deserialize;

use mantagw_core::error::{AppError, ErrorKind};

/// JSON error body returned by the Manta API.
#[derive(Debug, Deserialize)]
struct MantaErrorBody {
    code: String,
    #[serde(default)]
    message: String,
}

/// Convert a non-success response into an [`AppError`].
///
/// The message is `"<code>: <message>"` from the JSON body when present,
/// otherwise a generic description naming the status and path.
pub(crate) fn from_response(status: u16, path: &str, body: &[u8]) -> AppError {
    let parsed = serde_json::from_slice::<MantaErrorBody>(body).ok();

    let kind = match (status, parsed.as_ref().map(|b| b.code.as_str())) {
        (_, Some("DirectoryNotEmpty")) => ErrorKind::Conflict,
        (404, _) => ErrorKind::NotFound,
        (401, _) => ErrorKind::Authentication,
        (403, _) => ErrorKind::Authorization,
        (409, _) => ErrorKind::Conflict,
        (400, _) | (412, _) => ErrorKind::Validation,
        (503, _) => ErrorKind::ServiceUnavailable,
        _ => ErrorKind::ExternalService,
    };

    let message = match parsed {
        Some(body) if body.message.is_empty() => body.code,
        Some(body) => format!("{}: {}", body.code, body.message),
        None => format!("HTTP {status} for {path}"),
    };

    AppError::new(kind, message)
}

/// Wrap a transport-level failure.
pub(crate) fn from_transport(path: &str, err: reqwest::Error) -> AppError {
    AppError::with_source(
        ErrorKind::ExternalService,
        format!("Request for {path} failed: {err}"),
        err,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_with_body() {
        let body = br#"{"code":"ResourceNotFound","message":"/acct/stor/nope was not found"}"#;
        let err = from_response(404, "/stor/nope", body);
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(err.message, "ResourceNotFound: /acct/stor/nope was not found");
    }

    #[test]
    fn test_directory_not_empty_is_conflict() {
        let body = br#"{"code":"DirectoryNotEmpty","message":"/acct/stor/b is not empty"}"#;
        let err = from_response(400, "/stor/b", body);
        assert_eq!(err.kind, ErrorKind::Conflict);
    }

    #[test]
    fn test_status_mapping_without_body() {
        assert_eq!(from_response(401, "/p", b"").kind, ErrorKind::Authentication);
        assert_eq!(from_response(403, "/p", b"").kind, ErrorKind::Authorization);
        assert_eq!(from_response(503, "/p", b"").kind, ErrorKind::ServiceUnavailable);
        assert_eq!(from_response(500, "/p", b"oops").kind, ErrorKind::ExternalService);
        assert_eq!(from_response(500, "/p", b"oops").message, "HTTP 500 for /p");
    }
}
