//! Platform share actions.
//!
//! Each platform is a fixed URL template plus one browser navigation,
//! except Instagram, which has no share intent and gets a clipboard
//! write with a confirmation alert instead. No navigation is awaited.

use std::str::FromStr;

use namegen_core::ShareMessage;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShareError {
    #[error("could not open browser: {0}")]
    Browser(#[from] std::io::Error),

    #[error("clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SharePlatform {
    WhatsApp,
    Facebook,
    Email,
    Instagram,
    X,
}

impl SharePlatform {
    pub const ALL: [SharePlatform; 5] = [
        Self::WhatsApp,
        Self::Facebook,
        Self::Email,
        Self::Instagram,
        Self::X,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::WhatsApp => "WhatsApp",
            Self::Facebook => "Facebook",
            Self::Email => "Email",
            Self::Instagram => "Instagram",
            Self::X => "X",
        }
    }
}

impl FromStr for SharePlatform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "whatsapp" => Ok(Self::WhatsApp),
            "facebook" => Ok(Self::Facebook),
            "email" => Ok(Self::Email),
            "instagram" => Ok(Self::Instagram),
            "x" | "twitter" => Ok(Self::X),
            other => Err(format!("unknown platform: {other}")),
        }
    }
}

/// The side effects a share action may perform. The system
/// implementation talks to the browser, clipboard and dialog layer;
/// tests substitute a mock and assert on calls.
#[cfg_attr(test, mockall::automock)]
pub trait ShareGateway {
    fn open_url(&self, url: &str) -> Result<(), ShareError>;
    fn write_clipboard(&self, text: &str) -> Result<(), ShareError>;
    fn alert(&self, title: &str, message: &str);
}

/// Gateway backed by the host system: `webbrowser` for navigation,
/// `arboard` for the clipboard, `rfd` for blocking dialogs. In headless
/// mode dialogs degrade to terminal output.
pub struct SystemShare {
    headless: bool,
}

impl SystemShare {
    pub fn new(headless: bool) -> Self {
        Self { headless }
    }
}

impl ShareGateway for SystemShare {
    fn open_url(&self, url: &str) -> Result<(), ShareError> {
        log::info!("opening {url}");
        webbrowser::open(url)?;
        Ok(())
    }

    fn write_clipboard(&self, text: &str) -> Result<(), ShareError> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text.to_string())?;
        Ok(())
    }

    fn alert(&self, title: &str, message: &str) {
        if self.headless {
            println!("{title}: {message}");
            log::info!("{title}: {message}");
            return;
        }
        rfd::MessageDialog::new()
            .set_title(title)
            .set_description(message)
            .set_level(rfd::MessageLevel::Info)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
    }
}

fn encode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

// mail clients do not apply form decoding, so '+' must stay a percent escape
fn mailto_encode(value: &str) -> String {
    encode(value).replace('+', "%20")
}

pub fn whatsapp_url(message: &ShareMessage) -> String {
    format!("https://wa.me/?text={}", encode(&message.inline()))
}

pub fn facebook_url(message: &ShareMessage) -> String {
    format!(
        "https://www.facebook.com/sharer/sharer.php?u={}&quote={}",
        encode(&message.url),
        encode(&message.text)
    )
}

pub fn mailto_url(message: &ShareMessage) -> String {
    format!(
        "mailto:?subject={}&body={}",
        mailto_encode("My Wu-Tang Clan Name"),
        mailto_encode(&message.paragraph())
    )
}

pub fn tweet_url(message: &ShareMessage) -> String {
    format!(
        "https://twitter.com/intent/tweet?text={}",
        encode(&message.inline())
    )
}

/// Perform one share action for an already-generated name.
pub fn share(
    platform: SharePlatform,
    message: &ShareMessage,
    gateway: &dyn ShareGateway,
) -> Result<(), ShareError> {
    match platform {
        SharePlatform::WhatsApp => gateway.open_url(&whatsapp_url(message)),
        SharePlatform::Facebook => gateway.open_url(&facebook_url(message)),
        SharePlatform::Email => gateway.open_url(&mailto_url(message)),
        SharePlatform::Instagram => {
            // no direct share intent exists; copy and tell the user
            gateway.write_clipboard(&message.paragraph())?;
            gateway.alert(
                "Share on Instagram",
                "Text copied! You can now paste it in your Instagram story or post.",
            );
            Ok(())
        }
        SharePlatform::X => gateway.open_url(&tweet_url(message)),
    }
}
