pub mod charts;
pub mod chat;
pub mod rating;
pub mod toggle;
