use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Raw pointer input as delivered by the touch surface
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PointerEvent {
    Press(Point),
    Move(Point),
    Release,
    /// The gesture was interrupted by the system
    Cancel,
}

/// A connected polyline drawn in a single gesture
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Stroke {
    pub points: Vec<Point>,
}

impl Stroke {
    pub fn starting_at(point: Point) -> Self {
        Self {
            points: vec![point],
        }
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// SVG path data: `M` to the first point, `L` to every following one.
    pub fn to_path_data(&self) -> String {
        self.points
            .iter()
            .enumerate()
            .map(|(i, point)| {
                let command = if i == 0 { "M" } else { "L" };
                format!("{}{},{}", command, point.x, point.y)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Fixed rendering attributes of the canvas ink
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct StrokeStyle {
    pub color: String,
    pub width: f32,
    pub line_cap: String,
    pub line_join: String,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: "#000".to_string(),
            width: 3.0,
            line_cap: "round".to_string(),
            line_join: "round".to_string(),
        }
    }
}
