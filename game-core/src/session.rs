use crate::{GameEvent, GameEventBus, GameEventHandler};
use game_types::{GamePhase, GameSettings, Player, Round, Session, SettingsOverride};
use tracing::{debug, info, warn};
use uuid::Uuid;

fn now() -> String {
    chrono::Utc::now().to_rfc3339()
}

/// Owns the single live session: the player, their score and the rounds
/// played. Absent session/round conditions surface as `None`.
#[derive(Debug, Default)]
pub struct GameService {
    current_session: Option<Session>,
    event_bus: GameEventBus,
}

impl GameService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_handler(&mut self, handler: Box<dyn GameEventHandler>) {
        self.event_bus.add_handler(handler);
    }

    /// Start a fresh session, discarding any previous one
    pub fn create_session(&mut self, player_name: &str, overrides: SettingsOverride) -> &Session {
        if let Some(previous) = &self.current_session {
            debug!("Replacing session {}", previous.id);
        }

        let session = Session {
            id: Uuid::new_v4(),
            player: Player::new(player_name),
            rounds: Vec::new(),
            current_round_id: None,
            current_phase: GamePhase::Setup,
            settings: overrides.apply(GameSettings::default()),
            created_at: now(),
        };

        info!(
            "Created session {} for {} ({}s rounds, {} points per drawing)",
            session.id,
            session.player.name,
            session.settings.round_duration,
            session.settings.points_per_drawing
        );

        self.event_bus.publish(GameEvent::SessionCreated {
            session_id: session.id,
            player: session.player.clone(),
        });

        self.current_session.insert(session)
    }

    pub fn current_session(&self) -> Option<&Session> {
        self.current_session.as_ref()
    }

    pub fn current_round(&self) -> Option<&Round> {
        self.current_session.as_ref()?.current_round()
    }

    pub fn current_drawer(&self) -> Option<&Player> {
        self.current_session.as_ref().map(|session| &session.player)
    }

    /// Begin a round for `word`. A round that is still open is left as is:
    /// never completed and without an end time.
    pub fn start_new_round(&mut self, word: &str) -> Option<Round> {
        let Some(session) = self.current_session.as_mut() else {
            warn!("Cannot start a round without an active session");
            return None;
        };

        if let Some(open) = session.current_round_id {
            debug!("Round {} abandoned by a new round", open);
        }

        let round = Round {
            id: Uuid::new_v4(),
            word: word.to_string(),
            start_time: now(),
            end_time: None,
            completed: false,
        };

        session.rounds.push(round.clone());
        session.current_round_id = Some(round.id);
        session.current_phase = GamePhase::Drawing;

        info!(
            "Session {} started round {} ({} rounds)",
            session.id,
            round.id,
            session.rounds.len()
        );

        self.event_bus.publish(GameEvent::RoundStarted {
            session_id: session.id,
            round: round.clone(),
        });

        Some(round)
    }

    /// Close the current round, awarding points when it was completed
    pub fn end_current_round(&mut self, completed: bool) -> Option<Round> {
        let Some(session) = self.current_session.as_mut() else {
            warn!("Cannot end a round without an active session");
            return None;
        };

        let Some(round_id) = session.current_round_id else {
            warn!("Session {} has no active round to end", session.id);
            return None;
        };

        let Some(round) = session.rounds.iter_mut().find(|r| r.id == round_id) else {
            warn!("Session {} points at missing round {}", session.id, round_id);
            return None;
        };

        round.end_time = Some(now());
        round.completed = completed;
        let round = round.clone();

        if completed {
            let points = session.settings.points_per_drawing;
            match session.player.score.checked_add(points) {
                Some(score) => session.player.score = score,
                None => {
                    warn!("Score for session {} capped at {}", session.id, u32::MAX);
                    session.player.score = u32::MAX;
                }
            }
        }
        session.current_round_id = None;
        session.current_phase = GamePhase::TimeUp;

        info!(
            "Session {} ended round {} (completed: {}, score: {})",
            session.id, round.id, completed, session.player.score
        );

        self.event_bus.publish(GameEvent::RoundEnded {
            session_id: session.id,
            round: round.clone(),
            score: session.player.score,
        });

        Some(round)
    }

    pub fn reset_game(&mut self) {
        if let Some(session) = self.current_session.take() {
            info!("Reset session {}", session.id);
            self.event_bus.publish(GameEvent::SessionReset {
                session_id: session.id,
            });
        }
    }
}
