//! Message handling - Mediated chat between users

pub mod chat_room;

pub use chat_room::ChatRoom;
