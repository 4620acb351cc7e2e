//! Input validation for webhook URLs and message cards.
//!
//! All checks are pure and run before any network activity. The
//! combined entry point [`input`] checks the URL first so a malformed
//! destination is reported before the card is even looked at.

use crate::card::MessageCard;
use crate::error::ValidationError;

/// Known webhook URL prefixes for submitting messages to Microsoft Teams.
///
/// The pair is fixed and compared case-sensitively; destinations on any
/// other host are rejected even when well-formed.
pub const WEBHOOK_URL_OFFICE_COM_PREFIX: &str = "https://outlook.office.com";
/// See [`WEBHOOK_URL_OFFICE_COM_PREFIX`].
pub const WEBHOOK_URL_OFFICE365_PREFIX: &str = "https://outlook.office365.com";

/// Validates a card and its destination together.
///
/// Runs [`webhook_url`] first and short-circuits, so an invalid
/// destination is reported without touching the card.
///
/// # Errors
///
/// Returns the first [`ValidationError`] encountered.
pub fn input(card: &MessageCard, url: &str) -> Result<(), ValidationError> {
    webhook_url(url)?;
    message_card(card)?;
    Ok(())
}

/// Validates that `url` is a usable Teams webhook destination.
///
/// A plain prefix comparison against the two known prefixes, with no
/// normalization; anything may follow a matching prefix. When neither
/// prefix matches, the URL is parsed so the error can distinguish a
/// syntactically broken destination from a well-formed one pointing at
/// the wrong host.
///
/// # Errors
///
/// [`ValidationError::UrlParse`] when `url` cannot be parsed at all,
/// [`ValidationError::UrlPrefix`] when it parses but its scheme and
/// host are not a known prefix.
pub fn webhook_url(url: &str) -> Result<(), ValidationError> {
    if url.starts_with(WEBHOOK_URL_OFFICE_COM_PREFIX)
        || url.starts_with(WEBHOOK_URL_OFFICE365_PREFIX)
    {
        return Ok(());
    }

    let parsed = url::Url::parse(url).map_err(|source| ValidationError::UrlParse {
        url: url.to_owned(),
        source,
    })?;

    Err(ValidationError::UrlPrefix {
        got: format!(
            "{}://{}",
            parsed.scheme(),
            parsed.host_str().unwrap_or_default()
        ),
    })
}

/// Validates the structural requirements of a [`MessageCard`].
///
/// The only rule the webhook service enforces up front: at least one of
/// the card's text and summary fields must be non-empty. Title, theme
/// and sections are not checked here.
///
/// # Errors
///
/// [`ValidationError::MissingText`] when both fields are empty.
pub fn message_card(card: &MessageCard) -> Result<(), ValidationError> {
    if card.text.is_empty() && card.summary.is_empty() {
        return Err(ValidationError::MissingText);
    }

    Ok(())
}
