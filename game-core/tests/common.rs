#![allow(dead_code)]

use game_core::{GameEvent, GameEventHandler, GameService, StrokeRecorder, WordProvider};
use game_types::{Point, PointerEvent, SettingsOverride};
use std::sync::{Arc, Mutex};

/// Creates a test WordProvider with a known set of words
pub fn create_test_provider() -> WordProvider {
    let word_list = "easy:cat\neasy:dog\neasy:sun\nmedium:guitar\nmedium:rainbow";
    WordProvider::from_word_list(word_list).unwrap()
}

/// Default game settings: 20 second rounds, 5 points per drawing
pub fn standard_settings() -> SettingsOverride {
    SettingsOverride {
        round_duration: Some(20),
        points_per_drawing: Some(5),
    }
}

/// Creates a service with a live session for "You"
pub fn create_service_with_session() -> GameService {
    let mut service = GameService::new();
    service.create_session("You", standard_settings());
    service
}

/// Feeds a whole pointer sequence to the recorder
pub fn draw(recorder: &mut StrokeRecorder, events: &[PointerEvent]) {
    for event in events {
        recorder.handle(*event);
    }
}

pub fn press(x: f32, y: f32) -> PointerEvent {
    PointerEvent::Press(Point::new(x, y))
}

pub fn move_to(x: f32, y: f32) -> PointerEvent {
    PointerEvent::Move(Point::new(x, y))
}

/// Event collector for testing event emissions
#[derive(Clone)]
pub struct EventCollector {
    events: Arc<Mutex<Vec<GameEvent>>>,
}

impl EventCollector {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_events(&self) -> Vec<GameEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn event_count(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn has_event_type(&self, check_fn: impl Fn(&GameEvent) -> bool) -> bool {
        self.events.lock().unwrap().iter().any(check_fn)
    }
}

impl GameEventHandler for EventCollector {
    fn handle_event(&mut self, event: GameEvent) {
        self.events.lock().unwrap().push(event);
    }
}
