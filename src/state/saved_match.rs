use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Color, MatchSetup, Marker, StatsSnapshot};

/// Durable form of a [`Marker`], with the color stored as `#RRGGBBAA`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredMarker {
    pub id: Uuid,
    pub x: f64,
    pub y: f64,
    pub color: String,
    /// The marker label (historically a player number)
    pub number: String,
    pub is_directional: bool,
    pub end_x: Option<f64>,
    pub end_y: Option<f64>,
}

impl StoredMarker {
    /// Rebuild a display marker. Unreadable colors come back as black.
    pub fn to_marker(&self) -> Marker {
        Marker {
            id: self.id,
            x: self.x,
            y: self.y,
            color: Color::decode_or_default(&self.color),
            label: self.number.clone(),
            is_directional: self.is_directional,
            end_x: self.end_x,
            end_y: self.end_y,
        }
    }
}

impl From<&Marker> for StoredMarker {
    fn from(marker: &Marker) -> Self {
        Self {
            id: marker.id,
            x: marker.x,
            y: marker.y,
            color: marker.color.encode(),
            number: marker.label.clone(),
            is_directional: marker.is_directional,
            end_x: marker.end_x,
            end_y: marker.end_y,
        }
    }
}

/// A completed match as kept in the history archive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedMatch {
    /// Unique identifier
    pub id: Uuid,
    /// Teams, date, and pitch (stored inline alongside the other fields)
    #[serde(flatten)]
    pub setup: MatchSetup,
    /// Stats computed when the match was saved
    pub stats: StatsSnapshot,
    /// Markers in placement order
    pub markers: Vec<StoredMarker>,
}

impl SavedMatch {
    /// Snapshot a match. The markers are copied, so later edits to the live
    /// session do not leak into the saved record.
    pub fn new(setup: MatchSetup, markers: &[Marker], stats: StatsSnapshot) -> Self {
        Self {
            id: Uuid::new_v4(),
            setup,
            stats,
            markers: markers.iter().map(StoredMarker::from).collect(),
        }
    }

    /// "Team One vs Team Two"
    pub fn title(&self) -> String {
        format!("{} vs {}", self.setup.team_one_name, self.setup.team_two_name)
    }

    pub fn display_markers(&self) -> Vec<Marker> {
        self.markers.iter().map(StoredMarker::to_marker).collect()
    }
}
