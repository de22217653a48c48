use game_types::{Player, Round, SessionId};

#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    SessionCreated {
        session_id: SessionId,
        player: Player,
    },
    RoundStarted {
        session_id: SessionId,
        round: Round,
    },
    RoundEnded {
        session_id: SessionId,
        round: Round,
        score: u32,
    },
    SessionReset {
        session_id: SessionId,
    },
}

impl GameEvent {
    pub fn session_id(&self) -> SessionId {
        match self {
            GameEvent::SessionCreated { session_id, .. } => *session_id,
            GameEvent::RoundStarted { session_id, .. } => *session_id,
            GameEvent::RoundEnded { session_id, .. } => *session_id,
            GameEvent::SessionReset { session_id } => *session_id,
        }
    }
}

/// Event handler trait for processing game events
pub trait GameEventHandler: Send {
    fn handle_event(&mut self, event: GameEvent);
}

/// Simple event bus for distributing game events
pub struct GameEventBus {
    handlers: Vec<Box<dyn GameEventHandler>>,
}

impl GameEventBus {
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    pub fn add_handler(&mut self, handler: Box<dyn GameEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    pub fn publish(&mut self, event: GameEvent) {
        for handler in &mut self.handlers {
            handler.handle_event(event.clone());
        }
    }
}

impl Default for GameEventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for GameEventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameEventBus")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
