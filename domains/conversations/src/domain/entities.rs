//! Domain entities for Conversations domain
//!
//! Read-only mirrors of the conversation rows owned by the remote backend.
//! Nothing here creates or persists conversations; the types only describe
//! the snapshot a client receives.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Conversation kind
///
/// Values the client does not know about are kept verbatim in
/// `Unrecognized` so a newer backend cannot make a whole snapshot unreadable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ConversationKind {
    Direct,
    Group,
    CourseChannel,
    Unrecognized(String),
}

impl ConversationKind {
    /// Canonical wire spelling
    pub fn as_str(&self) -> &str {
        match self {
            ConversationKind::Direct => "direct",
            ConversationKind::Group => "group",
            ConversationKind::CourseChannel => "course-channel",
            ConversationKind::Unrecognized(raw) => raw,
        }
    }

    /// Label shown when a conversation of this kind has nothing better
    pub fn fallback_name(&self) -> &'static str {
        match self {
            ConversationKind::Direct => crate::domain::naming::DIRECT_MESSAGE_FALLBACK,
            ConversationKind::Group => crate::domain::naming::GROUP_CHAT_FALLBACK,
            ConversationKind::CourseChannel => crate::domain::naming::COURSE_CHANNEL_FALLBACK,
            ConversationKind::Unrecognized(_) => crate::domain::naming::UNRECOGNIZED_FALLBACK,
        }
    }

    pub fn is_recognized(&self) -> bool {
        !matches!(self, ConversationKind::Unrecognized(_))
    }
}

impl From<String> for ConversationKind {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "direct" => ConversationKind::Direct,
            "group" => ConversationKind::Group,
            "course-channel" | "course_channel" | "course" => ConversationKind::CourseChannel,
            _ => ConversationKind::Unrecognized(raw),
        }
    }
}

impl From<&str> for ConversationKind {
    fn from(raw: &str) -> Self {
        ConversationKind::from(raw.to_string())
    }
}

impl From<ConversationKind> for String {
    fn from(kind: ConversationKind) -> Self {
        match kind {
            ConversationKind::Unrecognized(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for ConversationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Public profile embedded in a member row
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default, alias = "display_name")]
    pub display_name: Option<String>,
    #[serde(default, alias = "avatar_url")]
    pub avatar_url: Option<String>,
}

/// Conversation participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    #[serde(alias = "user_id")]
    pub user_id: String,
    #[serde(default, alias = "profiles")]
    pub profile: Option<Profile>,
}

impl Member {
    pub fn new(user_id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Member {
            user_id: user_id.into(),
            profile: Some(Profile {
                display_name: Some(display_name.into()),
                avatar_url: None,
            }),
        }
    }

    /// Attach an avatar URL, creating an empty profile if needed
    pub fn with_avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.profile.get_or_insert_with(Profile::default).avatar_url = Some(avatar_url.into());
        self
    }

    /// Display name, if the profile carries a non-empty one
    pub fn display_name(&self) -> Option<&str> {
        self.profile
            .as_ref()
            .and_then(|p| p.display_name.as_deref())
            .filter(|name| !name.is_empty())
    }

    /// Avatar URL, if the profile carries a non-empty one
    pub fn avatar_url(&self) -> Option<&str> {
        self.profile
            .as_ref()
            .and_then(|p| p.avatar_url.as_deref())
            .filter(|url| !url.is_empty())
    }
}

/// Conversation entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub id: String,
    #[serde(alias = "type")]
    pub kind: ConversationKind,
    #[serde(default, alias = "name")]
    pub label: Option<String>,
    #[serde(default, alias = "course_reference", alias = "course_id")]
    pub course_reference: Option<String>,
    #[serde(default, alias = "last_activity_at", alias = "last_message_at")]
    pub last_activity_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        alias = "chat_members",
        deserialize_with = "null_as_empty"
    )]
    pub members: Vec<Member>,
}

impl Conversation {
    /// Create a conversation with no label, course or members
    pub fn new(id: impl Into<String>, kind: ConversationKind) -> Self {
        Conversation {
            id: id.into(),
            kind,
            label: None,
            course_reference: None,
            last_activity_at: None,
            members: Vec::new(),
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_course_reference(mut self, course_reference: impl Into<String>) -> Self {
        self.course_reference = Some(course_reference.into());
        self
    }

    pub fn with_last_activity_at(mut self, at: DateTime<Utc>) -> Self {
        self.last_activity_at = Some(at);
        self
    }

    pub fn with_members(mut self, members: Vec<Member>) -> Self {
        self.members = members;
        self
    }

    /// First member, in list order, who is not the viewer
    ///
    /// Only meaningful for direct conversations, where it is the other
    /// participant. Later non-viewer members are never considered.
    pub fn counterpart(&self, viewer_id: &str) -> Option<&Member> {
        self.members.iter().find(|m| m.user_id != viewer_id)
    }
}

/// Treat an explicit JSON `null` list the same as a missing one
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
