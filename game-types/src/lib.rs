pub mod game;
pub mod messages;
pub mod user;
pub mod errors;
pub mod stroke;
pub mod word;

pub type SessionId = uuid::Uuid;
pub type RoundId = uuid::Uuid;
pub type PlayerId = uuid::Uuid;

// Re-export all types
pub use game::*;
pub use messages::*;
pub use user::*;
pub use errors::*;
pub use stroke::*;
pub use word::*;
