pub mod chat;
pub mod resource_kind;
pub mod toggle;
