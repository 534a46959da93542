//! Manta storage client over HTTP.

use std::sync::Arc;

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use futures::StreamExt;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use reqwest::header::{CONTENT_LENGTH, CONTENT_TYPE, DATE, ETAG, HeaderMap, LAST_MODIFIED};
use reqwest::{Method, RequestBuilder, Response, Url};
use tracing::debug;

use mantagw_core::error::AppError;
use mantagw_core::result::AppResult;
use mantagw_core::traits::directory::{
    DirectoryEntry, DirectoryStore, PutObjectRequest, RemoteObject,
};

use super::auth::{Signer, authorization_header};
use super::error;

/// Characters left unescaped in a path segment.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Entries requested per directory listing page.
const LIST_PAGE_LIMIT: usize = 1000;

/// Content type that marks a PUT as a directory creation.
const DIRECTORY_PUT_CONTENT_TYPE: &str = "application/json; type=directory";

/// Connection settings for a [`MantaClient`].
#[derive(Debug, Clone)]
pub struct MantaClientConfig {
    /// Service endpoint, e.g. `https://us-east.manta.joyent.com`.
    pub manta_url: String,
    /// Account that owns the namespace.
    pub account_name: String,
    /// Request signers; the first one signs every request.
    pub signers: Vec<Arc<dyn Signer>>,
}

/// Directory store backed by a remote Manta service.
#[derive(Debug, Clone)]
pub struct MantaClient {
    http: reqwest::Client,
    manta_url: String,
    account: String,
    signer: Arc<dyn Signer>,
}

impl MantaClient {
    /// Create a client from `config`, sending requests through `http`.
    pub fn new(config: MantaClientConfig, http: reqwest::Client) -> AppResult<Self> {
        Url::parse(&config.manta_url).map_err(|e| {
            AppError::configuration(format!("Invalid Manta URL '{}': {e}", config.manta_url))
        })?;

        if config.account_name.is_empty() {
            return Err(AppError::configuration("Manta account name is empty"));
        }

        let signer = config
            .signers
            .into_iter()
            .next()
            .ok_or_else(|| AppError::configuration("No request signers configured"))?;

        tracing::info!(
            manta_url = %config.manta_url,
            account = %config.account_name,
            key_id = signer.key_id(),
            "Initialized Manta client"
        );

        Ok(Self {
            http,
            manta_url: config.manta_url.trim_end_matches('/').to_string(),
            account: config.account_name,
            signer,
        })
    }

    /// Absolute URL for an account-relative path such as `/stor/a b`.
    fn url_for(&self, path: &str) -> String {
        let encoded: Vec<String> = path
            .trim_start_matches('/')
            .split('/')
            .map(|segment| utf8_percent_encode(segment, PATH_SEGMENT).to_string())
            .collect();
        format!(
            "{}/{}/{}",
            self.manta_url,
            utf8_percent_encode(&self.account, PATH_SEGMENT),
            encoded.join("/")
        )
    }

    /// Start a signed request.
    fn request(&self, method: Method, url: &str) -> AppResult<RequestBuilder> {
        let date = Utc::now().format("%a, %d %b %Y %H:%M:%S GMT").to_string();
        let authorization = authorization_header(self.signer.as_ref(), &self.account, &date)?;

        Ok(self
            .http
            .request(method, url)
            .header(DATE, date)
            .header("Authorization", authorization))
    }

    /// Send a request and turn non-success statuses into errors.
    async fn send(&self, request: RequestBuilder, path: &str) -> AppResult<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| error::from_transport(path, e))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.bytes().await.unwrap_or_default();
        Err(error::from_response(status.as_u16(), path, &body))
    }
}

#[async_trait]
impl DirectoryStore for MantaClient {
    fn provider_type(&self) -> &str {
        "manta"
    }

    async fn put_directory(&self, path: &str) -> AppResult<()> {
        debug!(path, "PutDirectory");
        let request = self
            .request(Method::PUT, &self.url_for(path))?
            .header(CONTENT_TYPE, DIRECTORY_PUT_CONTENT_TYPE);
        self.send(request, path).await?;
        Ok(())
    }

    async fn list_directory(&self, path: &str) -> AppResult<Vec<DirectoryEntry>> {
        debug!(path, "ListDirectory");
        let base = self.url_for(path);
        let mut entries: Vec<DirectoryEntry> = Vec::new();
        let mut marker: Option<String> = None;

        loop {
            let url = match &marker {
                Some(m) => format!(
                    "{base}?limit={LIST_PAGE_LIMIT}&marker={}",
                    utf8_percent_encode(m, PATH_SEGMENT)
                ),
                None => format!("{base}?limit={LIST_PAGE_LIMIT}"),
            };

            let response = self.send(self.request(Method::GET, &url)?, path).await?;
            let body = response
                .bytes()
                .await
                .map_err(|e| error::from_transport(path, e))?;

            let mut page = parse_listing(&body)?;
            let full_page = page.len() >= LIST_PAGE_LIMIT;

            // The marker entry is repeated at the head of the next page.
            if marker.is_some() && page.first().map(|e| &e.name) == marker.as_ref() {
                page.remove(0);
            }

            marker = page.last().map(|e| e.name.clone());
            entries.extend(page);

            if !full_page || marker.is_none() {
                break;
            }
        }

        Ok(entries)
    }

    async fn delete_directory(&self, path: &str) -> AppResult<()> {
        debug!(path, "DeleteDirectory");
        let request = self.request(Method::DELETE, &self.url_for(path))?;
        self.send(request, path).await?;
        Ok(())
    }

    async fn get_object(&self, path: &str) -> AppResult<RemoteObject> {
        debug!(path, "GetObject");
        let request = self.request(Method::GET, &self.url_for(path))?;
        let response = self.send(request, path).await?;

        let headers = response.headers();
        let content_type = header_str(headers, CONTENT_TYPE.as_str())
            .unwrap_or("application/octet-stream")
            .to_string();
        let content_length = header_str(headers, CONTENT_LENGTH.as_str())
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(0);
        let last_modified = header_str(headers, LAST_MODIFIED.as_str())
            .and_then(|v| DateTime::parse_from_rfc2822(v).ok())
            .map(|t| t.with_timezone(&Utc));
        let etag = header_str(headers, ETAG.as_str()).map(|v| v.trim_matches('"').to_string());
        let content_md5 = header_str(headers, "content-md5").map(str::to_string);

        let body = response
            .bytes_stream()
            .map(|chunk| chunk.map_err(std::io::Error::other));

        Ok(RemoteObject {
            content_type,
            content_length,
            last_modified,
            etag,
            content_md5,
            body: Box::pin(body),
        })
    }

    async fn put_object(&self, request: PutObjectRequest) -> AppResult<()> {
        debug!(
            path = %request.path,
            bytes = request.content_length,
            "PutObject"
        );
        let mut builder = self
            .request(Method::PUT, &self.url_for(&request.path))?
            .header(CONTENT_LENGTH, request.content_length);
        if let Some(content_type) = &request.content_type {
            builder = builder.header(CONTENT_TYPE, content_type.as_str());
        }
        let builder = builder.body(request.body);
        self.send(builder, &request.path).await?;
        Ok(())
    }

    async fn delete_object(&self, path: &str) -> AppResult<()> {
        debug!(path, "DeleteObject");
        let request = self.request(Method::DELETE, &self.url_for(path))?;
        self.send(request, path).await?;
        Ok(())
    }
}

/// Parse a newline-delimited JSON directory listing.
fn parse_listing(body: &Bytes) -> AppResult<Vec<DirectoryEntry>> {
    let text = std::str::from_utf8(body)
        .map_err(|e| AppError::external_service(format!("Listing is not UTF-8: {e}")))?;

    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| serde_json::from_str::<DirectoryEntry>(line).map_err(AppError::from))
        .collect()
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}
