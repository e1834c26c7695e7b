//! Payload builder: structured QR content to one encodable string.
//!
//! The builder is a pure function and never fails. Required fields left
//! blank are replaced with example defaults; optional fields left blank are
//! omitted. Values are written verbatim, without escaping or
//! percent-encoding.

use crate::models::QrContent;

/// Fallback for a blank URL.
pub const DEFAULT_URL: &str = "https://example.com";
/// Fallback for blank text.
pub const DEFAULT_TEXT: &str = "Hello from qrsmith!";
/// Fallback for a blank phone number (phone, SMS).
pub const DEFAULT_PHONE: &str = "+15555550123";
/// Fallback for a blank WiFi network name.
pub const DEFAULT_SSID: &str = "MyNetwork";
/// Fallback for a blank email recipient.
pub const DEFAULT_EMAIL: &str = "hello@example.com";
/// Fallback given name when a vCard has no name at all.
pub const DEFAULT_FIRST_NAME: &str = "Jane";
/// Fallback family name when a vCard has no name at all.
pub const DEFAULT_LAST_NAME: &str = "Doe";

/// Returns `value` unless it is blank, in which case `fallback`.
fn or_default<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.trim().is_empty() {
        fallback
    } else {
        value
    }
}

/// Builds the QR payload string for `content`.
///
/// # Examples
///
/// ```
/// use qrsmith::models::{QrContent, WifiEncryption};
/// use qrsmith::services::build_payload;
///
/// let wifi = QrContent::Wifi {
///     ssid: "Home".to_string(),
///     password: "pass123".to_string(),
///     encryption: WifiEncryption::Wep,
/// };
/// assert_eq!(build_payload(&wifi), "WIFI:T:WEP;S:Home;P:pass123;;");
/// ```
#[must_use]
pub fn build_payload(content: &QrContent) -> String {
    match content {
        QrContent::Url { url } => or_default(url, DEFAULT_URL).to_string(),
        QrContent::Text { text } => or_default(text, DEFAULT_TEXT).to_string(),
        QrContent::Phone { number } => or_default(number, DEFAULT_PHONE).to_string(),
        QrContent::Wifi {
            ssid,
            password,
            encryption,
        } => format!(
            "WIFI:T:{};S:{};P:{};;",
            encryption.token(),
            or_default(ssid, DEFAULT_SSID),
            password
        ),
        QrContent::Email {
            address,
            subject,
            body,
        } => {
            let mut uri = format!("mailto:{}", or_default(address, DEFAULT_EMAIL));
            let params: Vec<String> = [("subject", subject), ("body", body)]
                .into_iter()
                .filter(|(_, value)| !value.is_empty())
                .map(|(key, value)| format!("{key}={value}"))
                .collect();
            if !params.is_empty() {
                uri.push('?');
                uri.push_str(&params.join("&"));
            }
            uri
        }
        QrContent::Sms { phone, message } => {
            let phone = or_default(phone, DEFAULT_PHONE);
            if message.is_empty() {
                format!("sms:{phone}")
            } else {
                format!("sms:{phone}?body={message}")
            }
        }
        QrContent::VCard {
            first_name,
            last_name,
            phone,
            email,
            company,
        } => build_vcard(first_name, last_name, phone, email, company),
    }
}

/// vCard 3.0, one property per line.
fn build_vcard(first: &str, last: &str, phone: &str, email: &str, company: &str) -> String {
    let (first, last) = if first.trim().is_empty() && last.trim().is_empty() {
        (DEFAULT_FIRST_NAME, DEFAULT_LAST_NAME)
    } else {
        (first, last)
    };

    let mut lines = vec![
        "BEGIN:VCARD".to_string(),
        "VERSION:3.0".to_string(),
        format!("N:{last};{first}"),
        format!("FN:{}", format!("{first} {last}").trim()),
    ];
    for (property, value) in [("ORG", company), ("TEL", phone), ("EMAIL", email)] {
        if !value.is_empty() {
            lines.push(format!("{property}:{value}"));
        }
    }
    lines.push("END:VCARD".to_string());

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WifiEncryption;

    fn email(address: &str, subject: &str, body: &str) -> QrContent {
        QrContent::Email {
            address: address.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        }
    }

    fn sms(phone: &str, message: &str) -> QrContent {
        QrContent::Sms {
            phone: phone.to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_url_text_phone_verbatim() {
        let url = QrContent::Url {
            url: "https://rust-lang.org/?a=1&b=2".to_string(),
        };
        assert_eq!(build_payload(&url), "https://rust-lang.org/?a=1&b=2");

        let text = QrContent::Text {
            text: "  spaced out  ".to_string(),
        };
        assert_eq!(build_payload(&text), "  spaced out  ");

        let phone = QrContent::Phone {
            number: "+201234".to_string(),
        };
        assert_eq!(build_payload(&phone), "+201234");
    }

    #[test]
    fn test_blank_required_fields_fall_back() {
        let url = QrContent::Url {
            url: "   ".to_string(),
        };
        assert_eq!(build_payload(&url), DEFAULT_URL);

        let text = QrContent::Text {
            text: String::new(),
        };
        assert_eq!(build_payload(&text), DEFAULT_TEXT);

        let phone = QrContent::Phone {
            number: String::new(),
        };
        assert_eq!(build_payload(&phone), DEFAULT_PHONE);

        assert_eq!(build_payload(&email("", "", "")), "mailto:hello@example.com");
        assert_eq!(build_payload(&sms("", "")), "sms:+15555550123");
    }

    #[test]
    fn test_wifi_formats() {
        let wep = QrContent::Wifi {
            ssid: "Home".to_string(),
            password: "pass123".to_string(),
            encryption: WifiEncryption::Wep,
        };
        assert_eq!(build_payload(&wep), "WIFI:T:WEP;S:Home;P:pass123;;");

        let wpa = QrContent::Wifi {
            ssid: "Office".to_string(),
            password: "s3cret".to_string(),
            encryption: WifiEncryption::from_label("WPA/WPA2"),
        };
        assert_eq!(build_payload(&wpa), "WIFI:T:WPA;S:Office;P:s3cret;;");

        let open = QrContent::Wifi {
            ssid: "Cafe".to_string(),
            password: String::new(),
            encryption: WifiEncryption::from_label("None"),
        };
        assert_eq!(build_payload(&open), "WIFI:T:nopass;S:Cafe;P:;;");

        let unmapped = QrContent::Wifi {
            ssid: "Lab".to_string(),
            password: "x".to_string(),
            encryption: WifiEncryption::from_label("WPA3-Enterprise"),
        };
        assert_eq!(build_payload(&unmapped), "WIFI:T:WPA;S:Lab;P:x;;");
    }

    #[test]
    fn test_wifi_special_characters_not_escaped() {
        let wifi = QrContent::Wifi {
            ssid: "a;b".to_string(),
            password: "c,d".to_string(),
            encryption: WifiEncryption::WpaWpa2,
        };
        assert_eq!(build_payload(&wifi), "WIFI:T:WPA;S:a;b;P:c,d;;");
    }

    #[test]
    fn test_email_formats() {
        assert_eq!(
            build_payload(&email("a@b.com", "Hi", "Bye")),
            "mailto:a@b.com?subject=Hi&body=Bye"
        );
        assert_eq!(
            build_payload(&email("a@b.com", "Hi", "")),
            "mailto:a@b.com?subject=Hi"
        );
        assert_eq!(
            build_payload(&email("a@b.com", "", "Bye")),
            "mailto:a@b.com?body=Bye"
        );
        assert_eq!(build_payload(&email("a@b.com", "", "")), "mailto:a@b.com");
    }

    #[test]
    fn test_email_not_percent_encoded() {
        assert_eq!(
            build_payload(&email("a@b.com", "Hello there", "x&y")),
            "mailto:a@b.com?subject=Hello there&body=x&y"
        );
    }

    #[test]
    fn test_sms_formats() {
        assert_eq!(build_payload(&sms("+123", "")), "sms:+123");
        assert_eq!(build_payload(&sms("+123", "On my way")), "sms:+123?body=On my way");
    }

    #[test]
    fn test_vcard_format() {
        let card = QrContent::VCard {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            phone: "+44123".to_string(),
            email: "ada@example.com".to_string(),
            company: "Analytical Engines".to_string(),
        };
        assert_eq!(
            build_payload(&card),
            "BEGIN:VCARD\nVERSION:3.0\nN:Lovelace;Ada\nFN:Ada Lovelace\n\
             ORG:Analytical Engines\nTEL:+44123\nEMAIL:ada@example.com\nEND:VCARD"
        );
    }

    #[test]
    fn test_vcard_omits_empty_optional_lines() {
        let card = QrContent::VCard {
            first_name: "Ada".to_string(),
            last_name: String::new(),
            phone: String::new(),
            email: String::new(),
            company: String::new(),
        };
        assert_eq!(
            build_payload(&card),
            "BEGIN:VCARD\nVERSION:3.0\nN:;Ada\nFN:Ada\nEND:VCARD"
        );
    }

    #[test]
    fn test_vcard_default_name() {
        let card = QrContent::VCard {
            first_name: String::new(),
            last_name: " ".to_string(),
            phone: String::new(),
            email: String::new(),
            company: String::new(),
        };
        assert!(build_payload(&card).contains("FN:Jane Doe"));
    }

    #[test]
    fn test_idempotent() {
        let content = email("a@b.com", "Hi", "Bye");
        assert_eq!(build_payload(&content), build_payload(&content));
    }
}
