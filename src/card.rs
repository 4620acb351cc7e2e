//! Message card payload types.
//!
//! A [`MessageCard`] is the legacy "actionable message card" format
//! accepted by Teams incoming webhooks. The card is a passive record:
//! the client serializes it once per send and never mutates it. Empty
//! optional fields are omitted from the wire body.

use serde::{Deserialize, Serialize};

/// Value of the `@type` field every card must carry.
pub const CARD_TYPE: &str = "MessageCard";

/// Value of the `@context` field every card must carry.
pub const CARD_CONTEXT: &str = "https://schema.org/extensions";

/// A notification message posted to a Teams webhook.
///
/// At least one of [`text`](Self::text) or [`summary`](Self::summary)
/// must be non-empty or the webhook service rejects the card with
/// `400 Bad Request`; [`crate::validate::message_card`] enforces this
/// before any network activity.
///
/// # Example
///
/// ```
/// use teams_webhook::MessageCard;
///
/// let card = MessageCard::new()
///     .with_title("Deploy finished")
///     .with_text("api-server v1.4.2 is live")
///     .with_theme_color("2eb886");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageCard {
    /// Card type discriminator, always [`CARD_TYPE`].
    #[serde(rename = "@type")]
    pub card_type: String,
    /// Schema context, always [`CARD_CONTEXT`].
    #[serde(rename = "@context")]
    pub context: String,
    /// Title rendered above the card body.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Main body text, renders Markdown.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    /// Plain-text summary shown in toast notifications.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub summary: String,
    /// Accent color as an RGB hex string without the leading `#`.
    #[serde(
        rename = "themeColor",
        default,
        skip_serializing_if = "String::is_empty"
    )]
    pub theme_color: String,
    /// Rich sections rendered below the body text.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub sections: Vec<Section>,
}

impl MessageCard {
    /// Creates an empty card with the `@type` and `@context` fields set.
    #[must_use]
    pub fn new() -> Self {
        Self {
            card_type: CARD_TYPE.to_owned(),
            context: CARD_CONTEXT.to_owned(),
            title: String::new(),
            text: String::new(),
            summary: String::new(),
            theme_color: String::new(),
            sections: Vec::new(),
        }
    }

    /// Sets the card title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the main body text.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Sets the toast summary.
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    /// Sets the accent color (RGB hex, no leading `#`).
    #[must_use]
    pub fn with_theme_color(mut self, color: impl Into<String>) -> Self {
        self.theme_color = color.into();
        self
    }

    /// Appends a section to the card.
    #[must_use]
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }
}

impl Default for MessageCard {
    fn default() -> Self {
        Self::new()
    }
}

/// A rich section within a [`MessageCard`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    /// Section headline, typically the actor or event.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub activity_title: String,
    /// Secondary line under the headline.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub activity_subtitle: String,
    /// URL of an image shown beside the headline.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub activity_image: String,
    /// Free-form section body.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    /// Name/value pairs rendered as a two-column table.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub facts: Vec<Fact>,
    /// Whether text fields in this section render Markdown.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub markdown: bool,
}

impl Section {
    /// Creates an empty section.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the section headline.
    #[must_use]
    pub fn with_activity_title(mut self, title: impl Into<String>) -> Self {
        self.activity_title = title.into();
        self
    }

    /// Sets the secondary line under the headline.
    #[must_use]
    pub fn with_activity_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.activity_subtitle = subtitle.into();
        self
    }

    /// Appends a name/value fact.
    #[must_use]
    pub fn with_fact(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.facts.push(Fact {
            name: name.into(),
            value: value.into(),
        });
        self
    }
}

/// A name/value pair inside a [`Section`] fact table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Fact {
    pub name: String,
    pub value: String,
}
