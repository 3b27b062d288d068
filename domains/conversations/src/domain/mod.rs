//! Domain layer for Conversations

pub mod entities;
pub mod listing;
pub mod naming;
