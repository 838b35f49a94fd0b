//! HTTP client for the message service.
//!
//! Two operations against the configured base URL, both carrying the
//! static `Authorization` header: poll the current message, and post an
//! empty-JSON read receipt. Poll spacing is the scheduler's job, not
//! this module's.

use core::fmt;

use defmt::info;
use embassy_net::Stack;
use embassy_net::dns::DnsSocket;
use embassy_net::tcp::client::{TcpClient, TcpClientState};
use reqwless::client::{HttpClient, TlsConfig, TlsVerify};
use reqwless::headers::ContentType;
use reqwless::request::{Method, RequestBuilder};

use crate::config::{API_AUTH_TOKEN, API_MESSAGES_URL, API_READ_URL};

/// Response buffer shared by both operations.
pub const RESPONSE_BUFFER_SIZE: usize = 4096;

/// TLS record buffers (16 KB records plus header room).
const TLS_BUFFER_SIZE: usize = 16_640;

/// What went wrong talking to the service. Distinct causes collapse into
/// one display string via `Display`; the status code is the only detail
/// the user ever sees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
pub enum ApiError {
    /// The request could not be built, sent, or answered.
    Connection,
    /// The service answered with a non-200 status.
    Status(u16),
    /// The response body could not be read or was not valid UTF-8.
    Body,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Connection => f.write_str("Connection error"),
            ApiError::Status(code) => write!(f, "API error: {code}"),
            ApiError::Body => f.write_str("Bad response body"),
        }
    }
}

/// Fetch the current message. 200 yields the body text; anything else is
/// an error for the caller to record.
pub async fn poll_messages<'a>(
    stack: Stack<'static>,
    seed: u64,
    rx_buf: &'a mut [u8],
) -> Result<&'a str, ApiError> {
    let client_state = TcpClientState::<1, 4096, 4096>::new();
    let tcp_client = TcpClient::new(stack, &client_state);
    let dns_client = DnsSocket::new(stack);

    let mut tls_rx = [0u8; TLS_BUFFER_SIZE];
    let mut tls_tx = [0u8; TLS_BUFFER_SIZE];
    let tls_config = TlsConfig::new(seed, &mut tls_rx, &mut tls_tx, TlsVerify::None);
    let mut client = HttpClient::new_with_tls(&tcp_client, &dns_client, tls_config);

    let auth_header = [("Authorization", API_AUTH_TOKEN)];
    let mut request = client
        .request(Method::GET, API_MESSAGES_URL)
        .await
        .map_err(|_| ApiError::Connection)?
        .headers(&auth_header);

    let response = request.send(rx_buf).await.map_err(|_| ApiError::Connection)?;
    let status = response.status.0;
    info!("Message poll status: {}", status);
    if status != 200 {
        return Err(ApiError::Status(status));
    }

    let body = response
        .body()
        .read_to_end()
        .await
        .map_err(|_| ApiError::Body)?;
    core::str::from_utf8(body).map_err(|_| ApiError::Body)
}

/// Tell the service the current message was acknowledged. The body is an
/// empty JSON object; only the status code matters.
pub async fn send_read_receipt(
    stack: Stack<'static>,
    seed: u64,
    rx_buf: &mut [u8],
) -> Result<(), ApiError> {
    let client_state = TcpClientState::<1, 4096, 4096>::new();
    let tcp_client = TcpClient::new(stack, &client_state);
    let dns_client = DnsSocket::new(stack);

    let mut tls_rx = [0u8; TLS_BUFFER_SIZE];
    let mut tls_tx = [0u8; TLS_BUFFER_SIZE];
    let tls_config = TlsConfig::new(seed, &mut tls_rx, &mut tls_tx, TlsVerify::None);
    let mut client = HttpClient::new_with_tls(&tcp_client, &dns_client, tls_config);

    let auth_header = [("Authorization", API_AUTH_TOKEN)];
    let mut request = client
        .request(Method::POST, API_READ_URL)
        .await
        .map_err(|_| ApiError::Connection)?
        .headers(&auth_header)
        .content_type(ContentType::ApplicationJson)
        .body(b"{}".as_slice());

    let response = request.send(rx_buf).await.map_err(|_| ApiError::Connection)?;
    let status = response.status.0;
    info!("Read receipt status: {}", status);
    if status != 200 {
        return Err(ApiError::Status(status));
    }
    Ok(())
}
