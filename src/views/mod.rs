pub mod chat;
pub mod docs;

pub use chat::ChatView;
pub use docs::DocumentsView;
