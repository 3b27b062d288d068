//! Conversations domain: chat snapshots, members, display names

pub mod domain;
pub mod snapshot;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{Conversation, ConversationKind, Member, Profile};
pub use domain::listing::{label_conversations, ConversationLabel};
pub use domain::naming::{
    display_name, resolve_display_name, COURSE_CHANNEL_FALLBACK, DIRECT_MESSAGE_FALLBACK,
    GROUP_CHAT_FALLBACK, UNRECOGNIZED_FALLBACK,
};

// Re-export snapshot decoding
pub use snapshot::{decode_snapshot, decode_snapshot_value};
