//! Per-field length bounds applied to every string in the fingerprint.
//!
//! A positive limit keeps the first N characters, a negative limit keeps the
//! last N. Only `x-forwarded-for` uses a negative limit so the hops closest
//! to the server survive.

use std::str::FromStr;

/// Fingerprint fields that carry a truncation bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiField {
    Accept,
    AcceptCharset,
    AcceptEncoding,
    AcceptLanguage,
    ClientId,
    Connection,
    ContentType,
    From,
    Host,
    Origin,
    Referer,
    Request,
    SecChDeviceMemory,
    SecChUa,
    SecChUaArch,
    SecChUaFullVersionList,
    SecChUaMobile,
    SecChUaModel,
    SecChUaPlatform,
    ServerHostname,
    UserAgent,
    XForwardedForIp,
    XRealIp,
}

impl ApiField {
    /// Maximum length for this field. Negative means keep the suffix.
    pub fn limit(self) -> i32 {
        match self {
            ApiField::SecChDeviceMemory | ApiField::SecChUaMobile => 8,
            ApiField::SecChUaArch => 16,
            ApiField::SecChUaPlatform => 32,
            ApiField::ContentType => 64,
            ApiField::ClientId
            | ApiField::AcceptCharset
            | ApiField::AcceptEncoding
            | ApiField::Connection
            | ApiField::From
            | ApiField::SecChUa
            | ApiField::SecChUaModel
            | ApiField::XRealIp => 128,
            ApiField::AcceptLanguage | ApiField::SecChUaFullVersionList => 256,
            ApiField::Origin | ApiField::ServerHostname | ApiField::Accept | ApiField::Host => 512,
            ApiField::XForwardedForIp => -512,
            ApiField::UserAgent => 768,
            ApiField::Referer => 1024,
            ApiField::Request => 2048,
        }
    }

    /// Wire name of the field in the `header` object.
    pub fn as_str(self) -> &'static str {
        match self {
            ApiField::Accept => "accept",
            ApiField::AcceptCharset => "acceptCharset",
            ApiField::AcceptEncoding => "acceptEncoding",
            ApiField::AcceptLanguage => "acceptLanguage",
            ApiField::ClientId => "clientID",
            ApiField::Connection => "connection",
            ApiField::ContentType => "contentType",
            ApiField::From => "from",
            ApiField::Host => "host",
            ApiField::Origin => "origin",
            ApiField::Referer => "referer",
            ApiField::Request => "request",
            ApiField::SecChDeviceMemory => "secCHDeviceMemory",
            ApiField::SecChUa => "secCHUA",
            ApiField::SecChUaArch => "secCHUAArch",
            ApiField::SecChUaFullVersionList => "secCHUAFullVersionList",
            ApiField::SecChUaMobile => "secCHUAMobile",
            ApiField::SecChUaModel => "secCHUAModel",
            ApiField::SecChUaPlatform => "secCHUAPlatform",
            ApiField::ServerHostname => "serverHostname",
            ApiField::UserAgent => "userAgent",
            ApiField::XForwardedForIp => "xForwardedForIP",
            ApiField::XRealIp => "xRealIP",
        }
    }

    /// Every field with a truncation limit.
    pub const ALL: [ApiField; 23] = [
        ApiField::Accept,
        ApiField::AcceptCharset,
        ApiField::AcceptEncoding,
        ApiField::AcceptLanguage,
        ApiField::ClientId,
        ApiField::Connection,
        ApiField::ContentType,
        ApiField::From,
        ApiField::Host,
        ApiField::Origin,
        ApiField::Referer,
        ApiField::Request,
        ApiField::SecChDeviceMemory,
        ApiField::SecChUa,
        ApiField::SecChUaArch,
        ApiField::SecChUaFullVersionList,
        ApiField::SecChUaMobile,
        ApiField::SecChUaModel,
        ApiField::SecChUaPlatform,
        ApiField::ServerHostname,
        ApiField::UserAgent,
        ApiField::XForwardedForIp,
        ApiField::XRealIp,
    ];
}

impl FromStr for ApiField {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ApiField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or(())
    }
}

/// Limit for a field given by wire name; 0 (no bound) when unknown.
pub fn limit_for(name: &str) -> i32 {
    name.parse::<ApiField>().map(ApiField::limit).unwrap_or(0)
}

/// Truncate by wire name. Unknown names leave the value untouched.
pub fn truncate_named(name: &str, value: &str) -> String {
    match name.parse::<ApiField>() {
        Ok(field) => truncate(field, value),
        Err(()) => value.to_string(),
    }
}

/// Bound `value` to the field's limit, counted in characters.
pub fn truncate(field: ApiField, value: &str) -> String {
    if value.is_empty() {
        return String::new();
    }

    let limit = field.limit();
    let max = limit.unsigned_abs() as usize;
    let len = value.chars().count();
    if limit == 0 || len <= max {
        return value.to_string();
    }

    if limit > 0 {
        value.chars().take(max).collect()
    } else {
        value.chars().skip(len - max).collect()
    }
}

/// Absent for empty input, otherwise the truncated value.
pub fn truncate_optional(field: ApiField, value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(truncate(field, value))
    }
}
