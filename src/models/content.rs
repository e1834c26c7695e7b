//! QR content types and their fixed field sets.
//!
//! Each [`ContentType`] owns a fixed set of named string fields. [`QrContent`]
//! is the tagged union carrying those fields; it is what the payload builder
//! consumes.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of data encoded into a QR code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    /// Web address
    #[default]
    Url,
    /// Free-form text
    Text,
    /// WiFi network credentials
    Wifi,
    /// Contact card
    VCard,
    /// Pre-filled email
    Email,
    /// Phone number
    Phone,
    /// Pre-filled text message
    Sms,
}

impl ContentType {
    /// All content types, in menu order.
    pub const ALL: [Self; 7] = [
        Self::Url,
        Self::Text,
        Self::Wifi,
        Self::VCard,
        Self::Email,
        Self::Phone,
        Self::Sms,
    ];

    /// Lowercase identifier used on the command line.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Url => "url",
            Self::Text => "text",
            Self::Wifi => "wifi",
            Self::VCard => "vcard",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::Sms => "sms",
        }
    }

    /// Field names accepted by this content type.
    #[must_use]
    pub const fn field_names(self) -> &'static [&'static str] {
        match self {
            Self::Url => &["url"],
            Self::Text => &["text"],
            Self::Wifi => &["ssid", "password", "encryption"],
            Self::VCard => &["first-name", "last-name", "phone", "email", "company"],
            Self::Email => &["address", "subject", "body"],
            Self::Phone => &["number"],
            Self::Sms => &["phone", "message"],
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ContentType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let lowered = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == lowered)
            .ok_or_else(|| {
                let names: Vec<&str> = Self::ALL.iter().map(|kind| kind.name()).collect();
                anyhow::anyhow!(
                    "Unknown content type '{}'. Expected one of: {}",
                    s.trim(),
                    names.join(", ")
                )
            })
    }
}

/// WiFi authentication mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum WifiEncryption {
    /// WPA or WPA2 personal
    #[default]
    WpaWpa2,
    /// Legacy WEP
    Wep,
    /// Open network
    None,
}

impl WifiEncryption {
    /// Labels offered to the user, in menu order.
    pub const LABELS: [&'static str; 3] = ["WPA/WPA2", "WEP", "None"];

    /// Maps a user-facing label to an encryption mode.
    ///
    /// Unrecognized labels fall back to WPA/WPA2.
    ///
    /// # Examples
    ///
    /// ```
    /// use qrsmith::models::WifiEncryption;
    ///
    /// assert_eq!(WifiEncryption::from_label("WEP"), WifiEncryption::Wep);
    /// assert_eq!(WifiEncryption::from_label("None"), WifiEncryption::None);
    /// assert_eq!(WifiEncryption::from_label("WPA3"), WifiEncryption::WpaWpa2);
    /// ```
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "wep" => Self::Wep,
            "none" | "nopass" | "open" => Self::None,
            _ => Self::WpaWpa2,
        }
    }

    /// User-facing label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::WpaWpa2 => "WPA/WPA2",
            Self::Wep => "WEP",
            Self::None => "None",
        }
    }

    /// Token written into the `T:` slot of a WiFi payload.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::WpaWpa2 => "WPA",
            Self::Wep => "WEP",
            Self::None => "nopass",
        }
    }
}

impl FromStr for WifiEncryption {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::from_label(s))
    }
}

/// Structured QR content, one variant per [`ContentType`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QrContent {
    /// Web address
    Url {
        /// Address, encoded verbatim
        url: String,
    },
    /// Free-form text
    Text {
        /// Text, encoded verbatim
        text: String,
    },
    /// WiFi network credentials
    Wifi {
        /// Network name
        ssid: String,
        /// Passphrase, may be empty
        password: String,
        /// Authentication mode
        encryption: WifiEncryption,
    },
    /// Contact card
    VCard {
        /// Given name
        first_name: String,
        /// Family name
        last_name: String,
        /// Phone number
        phone: String,
        /// Email address
        email: String,
        /// Organization
        company: String,
    },
    /// Pre-filled email
    Email {
        /// Recipient
        address: String,
        /// Optional subject
        subject: String,
        /// Optional body
        body: String,
    },
    /// Phone number
    Phone {
        /// Number, encoded verbatim
        number: String,
    },
    /// Pre-filled text message
    Sms {
        /// Recipient number
        phone: String,
        /// Optional message
        message: String,
    },
}

impl QrContent {
    /// The content type of this variant.
    #[must_use]
    pub const fn content_type(&self) -> ContentType {
        match self {
            Self::Url { .. } => ContentType::Url,
            Self::Text { .. } => ContentType::Text,
            Self::Wifi { .. } => ContentType::Wifi,
            Self::VCard { .. } => ContentType::VCard,
            Self::Email { .. } => ContentType::Email,
            Self::Phone { .. } => ContentType::Phone,
            Self::Sms { .. } => ContentType::Sms,
        }
    }

    /// Builds content of the given type from loosely collected field values.
    ///
    /// Fields left unset become empty strings, which the payload builder
    /// replaces with example defaults where a value is required.
    ///
    /// # Errors
    ///
    /// Returns an error if a field is set that does not belong to `kind`.
    pub fn from_fields(kind: ContentType, fields: &ContentFields) -> Result<Self> {
        let stray: Vec<&str> = fields
            .set_field_names()
            .into_iter()
            .filter(|name| !kind.field_names().contains(name))
            .collect();

        if !stray.is_empty() {
            anyhow::bail!(
                "Field(s) {} not supported for content type '{}'. Supported: {}",
                stray
                    .iter()
                    .map(|name| format!("--{name}"))
                    .collect::<Vec<_>>()
                    .join(", "),
                kind,
                kind.field_names()
                    .iter()
                    .map(|name| format!("--{name}"))
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }

        let take = |value: &Option<String>| value.clone().unwrap_or_default();

        Ok(match kind {
            ContentType::Url => Self::Url {
                url: take(&fields.url),
            },
            ContentType::Text => Self::Text {
                text: take(&fields.text),
            },
            ContentType::Wifi => Self::Wifi {
                ssid: take(&fields.ssid),
                password: take(&fields.password),
                encryption: fields
                    .encryption
                    .as_deref()
                    .map(WifiEncryption::from_label)
                    .unwrap_or_default(),
            },
            ContentType::VCard => Self::VCard {
                first_name: take(&fields.first_name),
                last_name: take(&fields.last_name),
                phone: take(&fields.phone),
                email: take(&fields.email),
                company: take(&fields.company),
            },
            ContentType::Email => Self::Email {
                address: take(&fields.address),
                subject: take(&fields.subject),
                body: take(&fields.body),
            },
            ContentType::Phone => Self::Phone {
                number: take(&fields.number),
            },
            ContentType::Sms => Self::Sms {
                phone: take(&fields.phone),
                message: take(&fields.message),
            },
        })
    }
}

/// Loosely collected form field values, as gathered by a front end.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentFields {
    /// `url`
    pub url: Option<String>,
    /// `text`
    pub text: Option<String>,
    /// `ssid`
    pub ssid: Option<String>,
    /// `password`
    pub password: Option<String>,
    /// `encryption` label
    pub encryption: Option<String>,
    /// `first-name`
    pub first_name: Option<String>,
    /// `last-name`
    pub last_name: Option<String>,
    /// `phone` (vCard and SMS)
    pub phone: Option<String>,
    /// `email`
    pub email: Option<String>,
    /// `company`
    pub company: Option<String>,
    /// `address`
    pub address: Option<String>,
    /// `subject`
    pub subject: Option<String>,
    /// `body`
    pub body: Option<String>,
    /// `number`
    pub number: Option<String>,
    /// `message`
    pub message: Option<String>,
}

impl ContentFields {
    /// Names of the fields that carry a value.
    fn set_field_names(&self) -> Vec<&'static str> {
        [
            ("url", &self.url),
            ("text", &self.text),
            ("ssid", &self.ssid),
            ("password", &self.password),
            ("encryption", &self.encryption),
            ("first-name", &self.first_name),
            ("last-name", &self.last_name),
            ("phone", &self.phone),
            ("email", &self.email),
            ("company", &self.company),
            ("address", &self.address),
            ("subject", &self.subject),
            ("body", &self.body),
            ("number", &self.number),
            ("message", &self.message),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_some())
        .map(|(name, _)| name)
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_parse() {
        assert_eq!("url".parse::<ContentType>().unwrap(), ContentType::Url);
        assert_eq!("WiFi".parse::<ContentType>().unwrap(), ContentType::Wifi);
        assert_eq!(" vcard ".parse::<ContentType>().unwrap(), ContentType::VCard);
        assert_eq!("SMS".parse::<ContentType>().unwrap(), ContentType::Sms);

        let err = "fax".parse::<ContentType>().unwrap_err();
        assert!(err.to_string().contains("Unknown content type 'fax'"));
    }

    #[test]
    fn test_content_type_display_roundtrip() {
        for kind in ContentType::ALL {
            assert_eq!(kind.to_string().parse::<ContentType>().unwrap(), kind);
        }
    }

    #[test]
    fn test_encryption_labels() {
        assert_eq!(WifiEncryption::from_label("WPA/WPA2"), WifiEncryption::WpaWpa2);
        assert_eq!(WifiEncryption::from_label("wep"), WifiEncryption::Wep);
        assert_eq!(WifiEncryption::from_label("nopass"), WifiEncryption::None);
        assert_eq!(WifiEncryption::from_label(""), WifiEncryption::WpaWpa2);

        for label in WifiEncryption::LABELS {
            assert_eq!(WifiEncryption::from_label(label).label(), label);
        }
    }

    #[test]
    fn test_encryption_tokens() {
        assert_eq!(WifiEncryption::WpaWpa2.token(), "WPA");
        assert_eq!(WifiEncryption::Wep.token(), "WEP");
        assert_eq!(WifiEncryption::None.token(), "nopass");
    }

    #[test]
    fn test_from_fields_wifi() {
        let fields = ContentFields {
            ssid: Some("Home".to_string()),
            encryption: Some("WEP".to_string()),
            ..ContentFields::default()
        };

        let content = QrContent::from_fields(ContentType::Wifi, &fields).unwrap();
        assert_eq!(
            content,
            QrContent::Wifi {
                ssid: "Home".to_string(),
                password: String::new(),
                encryption: WifiEncryption::Wep,
            }
        );
        assert_eq!(content.content_type(), ContentType::Wifi);
    }

    #[test]
    fn test_from_fields_rejects_stray_fields() {
        let fields = ContentFields {
            url: Some("https://example.com".to_string()),
            ssid: Some("Home".to_string()),
            ..ContentFields::default()
        };

        let err = QrContent::from_fields(ContentType::Url, &fields).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("--ssid"));
        assert!(message.contains("'url'"));
    }

    #[test]
    fn test_phone_field_shared_by_vcard_and_sms() {
        let fields = ContentFields {
            phone: Some("+1".to_string()),
            ..ContentFields::default()
        };

        assert!(QrContent::from_fields(ContentType::VCard, &fields).is_ok());
        assert!(QrContent::from_fields(ContentType::Sms, &fields).is_ok());
        assert!(QrContent::from_fields(ContentType::Phone, &fields).is_err());
    }
}
