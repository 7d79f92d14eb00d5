use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kind of pitch a match is played on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum PitchType {
    #[default]
    #[serde(rename = "GAA Pitch")]
    Gaa,
    #[serde(rename = "Soccer Pitch")]
    Soccer,
}

impl PitchType {
    pub const ALL: [PitchType; 2] = [PitchType::Gaa, PitchType::Soccer];

    /// User-facing name, also the persisted value.
    pub fn label(self) -> &'static str {
        match self {
            PitchType::Gaa => "GAA Pitch",
            PitchType::Soccer => "Soccer Pitch",
        }
    }

    /// Name of the pitch diagram image asset.
    pub fn image_name(self) -> &'static str {
        match self {
            PitchType::Gaa => "GAA_pitch_image",
            PitchType::Soccer => "Soccer_pitch_image",
        }
    }
}

/// Match details entered before annotation starts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSetup {
    pub team_one_name: String,
    pub team_two_name: String,
    pub game_date: DateTime<Utc>,
    pub pitch_type: PitchType,
}

impl MatchSetup {
    pub fn new(
        team_one_name: impl Into<String>,
        team_two_name: impl Into<String>,
        game_date: DateTime<Utc>,
        pitch_type: PitchType,
    ) -> Self {
        Self {
            team_one_name: team_one_name.into(),
            team_two_name: team_two_name.into(),
            game_date,
            pitch_type,
        }
    }
}
