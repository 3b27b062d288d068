//! Conversation list projection
//!
//! Turns a snapshot into the rows a conversation list renders for one viewer.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cmp::Ordering;

use super::entities::{Conversation, ConversationKind};
use super::naming::display_name;

/// One rendered row of a conversation list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationLabel {
    pub id: String,
    pub kind: ConversationKind,
    pub display_name: String,
    /// Counterpart avatar, direct conversations only
    pub avatar_url: Option<String>,
    pub course_reference: Option<String>,
    pub last_activity_at: Option<DateTime<Utc>>,
}

impl ConversationLabel {
    pub fn for_viewer(conversation: &Conversation, viewer_id: &str) -> Self {
        let avatar_url = match conversation.kind {
            ConversationKind::Direct => conversation
                .counterpart(viewer_id)
                .and_then(|m| m.avatar_url())
                .map(str::to_string),
            _ => None,
        };

        ConversationLabel {
            id: conversation.id.clone(),
            kind: conversation.kind.clone(),
            display_name: display_name(conversation, viewer_id).to_string(),
            avatar_url,
            course_reference: conversation.course_reference.clone(),
            last_activity_at: conversation.last_activity_at,
        }
    }
}

/// Most recent first; rows without activity go last
fn by_recency(a: &Option<DateTime<Utc>>, b: &Option<DateTime<Utc>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Label every conversation for `viewer_id`, most recently active first.
///
/// Ties (including conversations with no activity) keep snapshot order.
pub fn label_conversations(conversations: &[Conversation], viewer_id: &str) -> Vec<ConversationLabel> {
    let mut labels: Vec<ConversationLabel> = conversations
        .iter()
        .map(|c| ConversationLabel::for_viewer(c, viewer_id))
        .collect();
    labels.sort_by(|a, b| by_recency(&a.last_activity_at, &b.last_activity_at));
    labels
}
