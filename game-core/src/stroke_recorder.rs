use game_types::{Point, PointerEvent, Stroke, StrokeStyle};
use tracing::debug;

/// Strokes with fewer points than this are dropped on release
const MIN_STROKE_POINTS: usize = 2;

/// Turns a pointer gesture stream into completed vector strokes.
///
/// Completed strokes are append-only; the only way to remove them is
/// [`StrokeRecorder::clear`], which drops everything at once.
#[derive(Debug, Clone)]
pub struct StrokeRecorder {
    enabled: bool,
    style: StrokeStyle,
    strokes: Vec<Stroke>,
    current: Option<Stroke>,
}

impl StrokeRecorder {
    pub fn new() -> Self {
        Self::with_style(StrokeStyle::default())
    }

    pub fn with_style(style: StrokeStyle) -> Self {
        Self {
            enabled: true,
            style,
            strokes: Vec::new(),
            current: None,
        }
    }

    pub fn handle(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Press(point) => self.press(point),
            PointerEvent::Move(point) => self.move_to(point),
            PointerEvent::Release | PointerEvent::Cancel => self.release(),
        }
    }

    pub fn press(&mut self, point: Point) {
        if !self.enabled {
            return;
        }
        // A press without a release for the previous gesture keeps what was drawn
        self.finish_current();
        self.current = Some(Stroke::starting_at(point));
    }

    pub fn move_to(&mut self, point: Point) {
        if !self.enabled {
            return;
        }
        if let Some(stroke) = self.current.as_mut() {
            stroke.push(point);
        }
    }

    pub fn release(&mut self) {
        if !self.enabled {
            return;
        }
        self.finish_current();
    }

    pub fn clear(&mut self) {
        self.strokes.clear();
        self.current = None;
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    pub fn current_stroke(&self) -> Option<&Stroke> {
        self.current.as_ref()
    }

    /// Path data for every completed stroke, followed by the one in progress
    pub fn path_data(&self) -> Vec<String> {
        self.strokes
            .iter()
            .chain(self.current.iter())
            .map(Stroke::to_path_data)
            .filter(|path| !path.is_empty())
            .collect()
    }

    fn finish_current(&mut self) {
        if let Some(stroke) = self.current.take() {
            if stroke.len() >= MIN_STROKE_POINTS {
                self.strokes.push(stroke);
            } else {
                debug!("Dropping degenerate stroke with {} point(s)", stroke.len());
            }
        }
    }
}

impl Default for StrokeRecorder {
    fn default() -> Self {
        Self::new()
    }
}
