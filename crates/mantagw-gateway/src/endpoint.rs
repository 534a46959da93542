//! Gateway endpoint argument parsing.

use url::Url;

use mantagw_core::error::AppError;
use mantagw_core::result::AppResult;

/// Parse a gateway endpoint argument into `(host, secure)`.
///
/// An argument without a scheme is treated as `https://<arg>`. Only
/// `http` and `https` are accepted. The returned host keeps a port
/// whenever the argument spells one out, including the scheme default.
pub fn parse_gateway_endpoint(arg: &str) -> AppResult<(String, bool)> {
    let with_scheme = if arg.contains("://") {
        arg.to_string()
    } else {
        format!("https://{arg}")
    };

    let url = Url::parse(&with_scheme)
        .map_err(|e| AppError::configuration(format!("Invalid gateway endpoint '{arg}': {e}")))?;

    let secure = match url.scheme() {
        "http" => false,
        "https" => true,
        other => {
            return Err(AppError::configuration(format!(
                "Unrecognized scheme {other}"
            )));
        }
    };

    let host = url
        .host_str()
        .ok_or_else(|| AppError::configuration(format!("Gateway endpoint '{arg}' has no host")))?;

    // `Url` drops a port equal to the scheme default; keep it if written.
    let port = match url.port() {
        None if has_explicit_port(&with_scheme) => url.port_or_known_default(),
        port => port,
    };
    let host = match port {
        Some(port) => format!("{host}:{port}"),
        None => host.to_string(),
    };

    Ok((host, secure))
}

/// Whether the authority of `url` ends in `:<digits>`.
fn has_explicit_port(url: &str) -> bool {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host_port = authority.rsplit('@').next().unwrap_or_default();
    match host_port.rsplit_once(':') {
        Some((host, port)) => {
            !port.is_empty()
                && port.bytes().all(|b| b.is_ascii_digit())
                && (!host.starts_with('[') || host.ends_with(']'))
        }
        None => false,
    }
}

/// Build the client endpoint URL for a parsed `(host, secure)` pair.
pub fn endpoint_url(host: &str, secure: bool) -> String {
    let scheme = if secure { "https" } else { "http" };
    format!("{scheme}://{host}")
}
