pub mod session;
pub mod stroke_recorder;
pub mod word_provider;
pub mod game_events;

// Re-export main components
pub use session::*;
pub use stroke_recorder::*;
pub use word_provider::*;
pub use game_events::*;
