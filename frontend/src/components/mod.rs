pub mod chat;
pub mod launcher;
