//! Optional enrichment data attached to events.

use serde::{Deserialize, Serialize};

/// Postal address of a user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip_code: Option<String>,
}

/// Identity record. Only `id` is mandatory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_urls: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture_urls: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl User {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// Session the event happened in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuthenticationMode {
    Biometric,
    Mail,
    Mfa,
    Otp,
    Password,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuthenticationType {
    Account,
    Social,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuthenticationSocialProvider {
    Amazon,
    Apple,
    Facebook,
    Github,
    Google,
    Linkedin,
    Microsoft,
    Twitter,
    Yahoo,
    Other,
}

/// How the user authenticated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Authentication {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<AuthenticationMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub social_provider: Option<AuthenticationSocialProvider>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<AuthenticationType>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_absent_fields_are_omitted() {
        let json = serde_json::to_value(User::new("123456")).unwrap();
        assert_eq!(json, json!({ "id": "123456" }));

        let json = serde_json::to_value(Session::default()).unwrap();
        assert_eq!(json, json!({}));
    }

    #[test]
    fn test_full_user_serialization() {
        let user = User {
            id: "u1".into(),
            address: Some(Address {
                city: Some("Paris".into()),
                country_code: Some("FR".into()),
                zip_code: Some("75001".into()),
                ..Address::default()
            }),
            display_name: Some("Ada".into()),
            external_urls: Some(vec!["https://example.com/ada".into()]),
            first_name: Some("Ada".into()),
            ..User::default()
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["address"]["countryCode"], "FR");
        assert_eq!(json["address"]["zipCode"], "75001");
        assert!(json["address"].get("line1").is_none());
        assert_eq!(json["displayName"], "Ada");
        assert_eq!(json["externalUrls"][0], "https://example.com/ada");
        assert_eq!(json["firstName"], "Ada");
    }

    #[test]
    fn test_authentication_wire_names() {
        let auth = Authentication {
            mode: Some(AuthenticationMode::Password),
            social_provider: Some(AuthenticationSocialProvider::Google),
            kind: Some(AuthenticationType::Social),
        };
        assert_eq!(
            serde_json::to_value(&auth).unwrap(),
            json!({ "mode": "password", "socialProvider": "google", "type": "social" })
        );
        assert_eq!(
            serde_json::to_value(AuthenticationMode::Other).unwrap(),
            json!("other")
        );
    }
}
