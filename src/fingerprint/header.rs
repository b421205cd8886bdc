//! Fingerprint types sent in the `header` object of every payload.

use serde::{Deserialize, Serialize};

/// Snapshot of the inbound request, bounded per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub accept: String,
    pub accept_charset: String,
    pub accept_encoding: String,
    pub accept_language: String,
    pub addr: String,
    #[serde(rename = "clientID")]
    pub client_id: String,
    pub connection: String,
    pub content_type: String,
    pub from: String,
    pub host: String,
    pub method: String,
    pub referer: String,
    pub request: String,
    pub origin: String,
    /// Port from the `Host` header, else 443/80 by protocol. A `Host` port
    /// that does not fit in a `u16` (e.g. `:70000`) counts as absent.
    pub port: u16,
    pub protocol: String,
    #[serde(rename = "secCHUA", skip_serializing_if = "Option::is_none")]
    pub sec_ch_ua: Option<String>,
    #[serde(rename = "secCHUAMobile", skip_serializing_if = "Option::is_none")]
    pub sec_ch_ua_mobile: Option<String>,
    #[serde(rename = "secCHUAPlatform", skip_serializing_if = "Option::is_none")]
    pub sec_ch_ua_platform: Option<String>,
    #[serde(rename = "secCHUAArch", skip_serializing_if = "Option::is_none")]
    pub sec_ch_ua_arch: Option<String>,
    #[serde(rename = "secCHUAFullVersionList", skip_serializing_if = "Option::is_none")]
    pub sec_ch_ua_full_version_list: Option<String>,
    #[serde(rename = "secCHUAModel", skip_serializing_if = "Option::is_none")]
    pub sec_ch_ua_model: Option<String>,
    #[serde(rename = "secCHDeviceMemory", skip_serializing_if = "Option::is_none")]
    pub sec_ch_device_memory: Option<String>,
    pub server_hostname: String,
    pub user_agent: String,
    #[serde(rename = "xForwardedForIP")]
    pub x_forwarded_for_ip: String,
    #[serde(rename = "xRealIP")]
    pub x_real_ip: String,
}

/// Caller-supplied overrides, one slot per [`Header`] field.
///
/// A `Some` slot replaces the value derived from the request; `None` keeps it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RequestMetadata {
    pub accept: Option<String>,
    pub accept_charset: Option<String>,
    pub accept_encoding: Option<String>,
    pub accept_language: Option<String>,
    pub addr: Option<String>,
    #[serde(rename = "clientID")]
    pub client_id: Option<String>,
    pub connection: Option<String>,
    pub content_type: Option<String>,
    pub from: Option<String>,
    pub host: Option<String>,
    pub method: Option<String>,
    pub referer: Option<String>,
    pub request: Option<String>,
    pub origin: Option<String>,
    pub port: Option<u16>,
    pub protocol: Option<String>,
    #[serde(rename = "secCHUA")]
    pub sec_ch_ua: Option<String>,
    #[serde(rename = "secCHUAMobile")]
    pub sec_ch_ua_mobile: Option<String>,
    #[serde(rename = "secCHUAPlatform")]
    pub sec_ch_ua_platform: Option<String>,
    #[serde(rename = "secCHUAArch")]
    pub sec_ch_ua_arch: Option<String>,
    #[serde(rename = "secCHUAFullVersionList")]
    pub sec_ch_ua_full_version_list: Option<String>,
    #[serde(rename = "secCHUAModel")]
    pub sec_ch_ua_model: Option<String>,
    #[serde(rename = "secCHDeviceMemory")]
    pub sec_ch_device_memory: Option<String>,
    pub server_hostname: Option<String>,
    pub user_agent: Option<String>,
    #[serde(rename = "xForwardedForIP")]
    pub x_forwarded_for_ip: Option<String>,
    #[serde(rename = "xRealIP")]
    pub x_real_ip: Option<String>,
}
