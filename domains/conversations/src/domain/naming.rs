//! Display-name resolution for conversations
//!
//! Names are resolved per viewer: a direct conversation is labelled with the
//! other participant's name, so the same row reads differently for each side.
//! Resolution never fails. Missing or empty data degrades to a fixed
//! fallback label for the conversation kind.

use super::entities::{Conversation, ConversationKind, Member};

/// Fallback for a direct conversation with no usable counterpart name
pub const DIRECT_MESSAGE_FALLBACK: &str = "Direct Message";

/// Fallback for an unlabelled group conversation
pub const GROUP_CHAT_FALLBACK: &str = "Group Chat";

/// Fallback for an unlabelled course channel
pub const COURSE_CHANNEL_FALLBACK: &str = "Course Channel";

/// Fallback for kinds this client does not recognize
pub const UNRECOGNIZED_FALLBACK: &str = "Conversation";

/// `None` and `""` are both absent
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Resolve the label `viewer_id` should see for `conversation`, borrowing
/// from the conversation where possible.
///
/// - course channels and groups use their label, else the kind fallback
/// - direct conversations use the display name of the first member (in list
///   order) whose id differs from the viewer; if that member has no name, or
///   there is no such member, the result is [`DIRECT_MESSAGE_FALLBACK`]
/// - unrecognized kinds behave like labelled conversations with
///   [`UNRECOGNIZED_FALLBACK`]
pub fn display_name<'a>(conversation: &'a Conversation, viewer_id: &str) -> &'a str {
    match &conversation.kind {
        ConversationKind::CourseChannel
        | ConversationKind::Group
        | ConversationKind::Unrecognized(_) => non_empty(conversation.label.as_deref())
            .unwrap_or_else(|| conversation.kind.fallback_name()),
        // Only the first non-viewer member is consulted, even when it has no name.
        ConversationKind::Direct => conversation
            .counterpart(viewer_id)
            .and_then(Member::display_name)
            .unwrap_or(DIRECT_MESSAGE_FALLBACK),
    }
}

/// Owned variant of [`display_name`]
pub fn resolve_display_name(conversation: &Conversation, viewer_id: &str) -> String {
    display_name(conversation, viewer_id).to_string()
}

impl Conversation {
    /// Label this conversation shows to `viewer_id`
    pub fn display_name_for(&self, viewer_id: &str) -> &str {
        display_name(self, viewer_id)
    }
}
