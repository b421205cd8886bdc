//! Derivation of the [`Header`] fingerprint from an inbound request.

use crate::error::{FraudError, Result};
use crate::fingerprint::header::{Header, RequestMetadata};
use crate::fingerprint::request::InboundRequest;
use crate::fingerprint::truncation::{truncate, truncate_optional, ApiField};

/// Header carrying the client ID when sessions are tracked by header.
pub const CLIENT_ID_HEADER: &str = "x-datadome-clientid";

/// Cookie carrying the client ID otherwise.
pub const CLIENT_ID_COOKIE: &str = "datadome";

/// Build the fingerprint for `request`, letting `metadata` override any field.
///
/// Fails only when the peer address must be derived and cannot be parsed.
pub fn build_header<R>(request: &R, metadata: &RequestMetadata) -> Result<Header>
where
    R: InboundRequest + ?Sized,
{
    let proto = metadata
        .protocol
        .clone()
        .unwrap_or_else(|| protocol(request).to_string());

    let addr = match &metadata.addr {
        Some(addr) => addr.clone(),
        None => peer_ip(request)?,
    };

    let host = request.host();
    let port = metadata
        .port
        .unwrap_or_else(|| host_port(&host).unwrap_or(if proto == "https" { 443 } else { 80 }));

    Ok(Header {
        accept: field(&metadata.accept, &request.header("accept"), ApiField::Accept),
        accept_charset: field(
            &metadata.accept_charset,
            &request.header("accept-charset"),
            ApiField::AcceptCharset,
        ),
        accept_encoding: field(
            &metadata.accept_encoding,
            &request.header("accept-encoding"),
            ApiField::AcceptEncoding,
        ),
        accept_language: field(
            &metadata.accept_language,
            &request.header("accept-language"),
            ApiField::AcceptLanguage,
        ),
        addr,
        client_id: field(&metadata.client_id, &client_id(request), ApiField::ClientId),
        connection: field(&metadata.connection, &request.header("connection"), ApiField::Connection),
        content_type: field(
            &metadata.content_type,
            &request.header("content-type"),
            ApiField::ContentType,
        ),
        from: field(&metadata.from, &request.header("from"), ApiField::From),
        host: field(&metadata.host, &host, ApiField::Host),
        method: metadata
            .method
            .clone()
            .unwrap_or_else(|| request.method().as_str().to_string()),
        referer: field(&metadata.referer, &request.header("referer"), ApiField::Referer),
        request: field(&metadata.request, &request_path(request), ApiField::Request),
        origin: field(&metadata.origin, &request.header("origin"), ApiField::Origin),
        port,
        protocol: proto,
        sec_ch_ua: hint(&metadata.sec_ch_ua, &request.header("sec-ch-ua"), ApiField::SecChUa),
        sec_ch_ua_mobile: hint(
            &metadata.sec_ch_ua_mobile,
            &request.header("sec-ch-ua-mobile"),
            ApiField::SecChUaMobile,
        ),
        sec_ch_ua_platform: hint(
            &metadata.sec_ch_ua_platform,
            &request.header("sec-ch-ua-platform"),
            ApiField::SecChUaPlatform,
        ),
        sec_ch_ua_arch: hint(
            &metadata.sec_ch_ua_arch,
            &request.header("sec-ch-ua-arch"),
            ApiField::SecChUaArch,
        ),
        sec_ch_ua_full_version_list: hint(
            &metadata.sec_ch_ua_full_version_list,
            &request.header("sec-ch-ua-full-version-list"),
            ApiField::SecChUaFullVersionList,
        ),
        sec_ch_ua_model: hint(
            &metadata.sec_ch_ua_model,
            &request.header("sec-ch-ua-model"),
            ApiField::SecChUaModel,
        ),
        sec_ch_device_memory: hint(
            &metadata.sec_ch_device_memory,
            &request.header("sec-ch-device-memory"),
            ApiField::SecChDeviceMemory,
        ),
        server_hostname: field(&metadata.server_hostname, &host, ApiField::ServerHostname),
        user_agent: field(&metadata.user_agent, &request.header("user-agent"), ApiField::UserAgent),
        x_forwarded_for_ip: field(
            &metadata.x_forwarded_for_ip,
            &request.header("x-forwarded-for"),
            ApiField::XForwardedForIp,
        ),
        x_real_ip: field(&metadata.x_real_ip, &request.header("x-real-ip"), ApiField::XRealIp),
    })
}

fn field(value: &Option<String>, derived: &str, api: ApiField) -> String {
    truncate(api, value.as_deref().unwrap_or(derived))
}

fn hint(value: &Option<String>, derived: &str, api: ApiField) -> Option<String> {
    truncate_optional(api, value.as_deref().unwrap_or(derived))
}

/// `x-forwarded-proto` when it says http or https, else the TLS state.
pub fn protocol<R: InboundRequest + ?Sized>(request: &R) -> &'static str {
    let forwarded = request.header("x-forwarded-proto");
    if forwarded.eq_ignore_ascii_case("https") {
        "https"
    } else if forwarded.eq_ignore_ascii_case("http") {
        "http"
    } else if request.is_tls() {
        "https"
    } else {
        "http"
    }
}

/// Client ID from the session header, then the cookie, else "".
pub fn client_id<R: InboundRequest + ?Sized>(request: &R) -> String {
    let from_header = request.header(CLIENT_ID_HEADER);
    if !from_header.is_empty() {
        return from_header.into_owned();
    }
    request.cookie(CLIENT_ID_COOKIE).unwrap_or_default()
}

/// Path plus `?query` when a query string is present.
pub fn request_path<R: InboundRequest + ?Sized>(request: &R) -> String {
    let uri = request.uri();
    match uri.query() {
        Some(query) if !query.is_empty() => format!("{}?{}", uri.path(), query),
        _ => uri.path().to_string(),
    }
}

/// IP part of the peer address.
pub fn peer_ip<R: InboundRequest + ?Sized>(request: &R) -> Result<String> {
    let remote = request
        .remote_addr()
        .ok_or_else(|| FraudError::IpExtraction("missing remote address".to_string()))?;
    split_host_port(&remote)
        .map(|(host, _)| host.to_string())
        .map_err(FraudError::IpExtraction)
}

/// Port of a `host:port` Host value; `None` when absent, not a number or
/// above 65535.
pub fn host_port(host: &str) -> Option<u16> {
    if host.is_empty() {
        return None;
    }
    split_host_port(host).ok()?.1.parse().ok()
}

/// Split `host:port` or `[v6]:port`.
pub fn split_host_port(addr: &str) -> std::result::Result<(&str, &str), String> {
    let missing_port = || format!("address {}: missing port in address", addr);

    if let Some(rest) = addr.strip_prefix('[') {
        let end = rest
            .find(']')
            .ok_or_else(|| format!("address {}: missing ']' in address", addr))?;
        let host = &rest[..end];
        let port = rest[end + 1..].strip_prefix(':').ok_or_else(missing_port)?;
        if port.contains(':') || port.contains(']') {
            return Err(format!("address {}: too many colons in address", addr));
        }
        return Ok((host, port));
    }

    let idx = addr.rfind(':').ok_or_else(missing_port)?;
    let (host, port) = (&addr[..idx], &addr[idx + 1..]);
    if host.contains(':') {
        return Err(format!("address {}: too many colons in address", addr));
    }
    if host.contains('[') || host.contains(']') || port.contains(']') {
        return Err(format!("address {}: unexpected bracket in address", addr));
    }
    Ok((host, port))
}
