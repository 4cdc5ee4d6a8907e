//! Per-kind report sections
//!
//! Each function appends the lines for one content kind, after the `Type:` header.
//! Optional fields are emitted only when present.

use super::utils::{capitalize, format_float};
use super::Report;
use crate::types::{
    BitcoinPayment, EmailContent, GeoLocation, SmsContent, TextSummary, UrlContent, VCard,
    WifiConfig,
};

/// Shown in place of a WiFi password; the secret itself is never retained
const PASSWORD_MASK: &str = "*****";
const NO_PASSWORD: &str = "(none)";

pub fn url(report: &mut Report, url: &UrlContent) {
    report.push(format!("Scheme: {}", url.scheme));
    report.push(format!("Domain: {}", url.domain));
    report.push(format!("Path: {}", url.path));
    if !url.query.is_empty() {
        report.push(format!("Query: {}", url.query));
    }
    if !url.fragment.is_empty() {
        report.push(format!("Fragment: {}", url.fragment));
    }
}

pub fn wifi(report: &mut Report, wifi: &WifiConfig) {
    report.push(format!("SSID: {}", wifi.ssid));
    report.push(format!(
        "Password: {}",
        if wifi.has_password {
            PASSWORD_MASK
        } else {
            NO_PASSWORD
        }
    ));
    report.push(format!("Encryption: {}", wifi.encryption));
    report.push(format!("Hidden: {}", if wifi.hidden { "Yes" } else { "No" }));
}

pub fn vcard(report: &mut Report, card: &VCard) {
    if let Some(version) = &card.version {
        report.push(format!("Version: {}", version));
    }
    if let Some(full_name) = &card.full_name {
        report.push(format!("Full Name: {}", full_name));
    }
    if let Some(name) = &card.structured_name {
        report.push(format!("Name Structure: {}", name.display_parts().join(", ")));
    }
    if let Some(title) = &card.title {
        report.push(format!("Title: {}", title));
    }
    if let Some(organization) = &card.organization {
        report.push(format!("Organization: {}", organization));
    }
    if let Some(phone) = &card.phone {
        report.push(format!(
            "Phone{}: {}",
            type_suffix(&phone.type_label()),
            phone.value
        ));
    }
    if let Some(email) = &card.email {
        report.push(format!(
            "Email{}: {}",
            type_suffix(&email.type_label()),
            email.value
        ));
    }
    if let Some(address) = &card.address {
        report.push(format!(
            "Address{}: {}",
            type_suffix(&address.type_label()),
            address.display_parts().join(", ")
        ));
    }
    if let Some(url) = &card.url {
        report.push(format!("URL: {}", url));
    }
    if let Some(note) = &card.note {
        report.push(format!("Note: {}", note));
    }
}

fn type_suffix(label: &str) -> String {
    if label.is_empty() {
        String::new()
    } else {
        format!(" ({})", label)
    }
}

pub fn bitcoin(report: &mut Report, payment: &BitcoinPayment) {
    report.push(format!("Address: {}", payment.address));
    for (key, value) in payment.parameters.iter() {
        report.push(format!("{}: {}", capitalize(key), value));
    }
}

pub fn json(report: &mut Report, value: &serde_json::Value) {
    // Serialising a Value cannot fail
    let pretty = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
    report.push(pretty);
}

pub fn email(report: &mut Report, email: &EmailContent) {
    report.push(format!("Address: {}", email.address));
    for (key, value) in email.parameters.iter() {
        match key {
            "body" => {
                report.push("Body:");
                report.push(value.replace("%0A", "\n"));
            }
            "subject" => report.push(format!("Subject: {}", value)),
            "cc" => report.push(format!("CC: {}", value)),
            "bcc" => report.push(format!("BCC: {}", value)),
            "to" => report.push(format!("To: {}", value)),
            _ => report.push(format!("{}: {}", capitalize(key), value)),
        }
    }
}

pub fn sms(report: &mut Report, sms: &SmsContent) {
    report.push(format!("Number: {}", sms.number));
    if let Some(message) = &sms.message {
        report.push(format!("Message: {}", message));
    }
}

pub fn geo(report: &mut Report, location: &GeoLocation) {
    let latitude = format_float(location.latitude);
    let longitude = format_float(location.longitude);

    report.push(format!("Latitude: {}", latitude));
    report.push(format!("Longitude: {}", longitude));
    if let Some(altitude) = location.altitude {
        report.push(format!("Altitude: {} meters", format_float(altitude)));
    }
    for (key, value) in location.parameters.iter() {
        report.push(format!("{}: {}", capitalize(key), value));
    }
    report.push("");
    report.push("Google Maps Link:");
    report.push(format!(
        "https://www.google.com/maps?q={},{}",
        latitude, longitude
    ));
}

pub fn text(report: &mut Report, summary: &TextSummary) {
    report.push(format!("Length: {} characters", summary.length));
    report.push("Preview:");
    report.push(summary.preview.clone());
}
