use crate::utils::error::Result;
use crate::utils::validation::{validate_not_nan, validate_range};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const MIN_STABILITY: f64 = 0.0;
pub const MAX_STABILITY: f64 = 100.0;
pub const MIN_DANGER_LEVEL: i64 = 1;
pub const MAX_DANGER_LEVEL: i64 = 10;

/// Stability score, saturated to `[0, 100]` on every write.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Stability(f64);

impl Stability {
    /// NaN has no meaningful clamp and is rejected; everything else saturates.
    pub fn new(value: f64) -> Result<Self> {
        validate_not_nan("stability", value)?;
        Ok(Self::saturating(value))
    }

    fn saturating(value: f64) -> Self {
        Self(value.clamp(MIN_STABILITY, MAX_STABILITY))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn decreased_by(self, amount: f64) -> Self {
        Self::saturating(self.0 - amount)
    }

    pub fn increased_by(self, amount: f64) -> Self {
        Self::saturating(self.0 + amount)
    }

    pub fn is_exhausted(self) -> bool {
        self.0 <= MIN_STABILITY
    }
}

impl fmt::Display for Stability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

/// Severity rating in `[1, 10]`. Out-of-range values are rejected, never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct DangerLevel(u8);

impl DangerLevel {
    pub fn new(value: i64) -> Result<Self> {
        validate_range("danger_level", value, MIN_DANGER_LEVEL, MAX_DANGER_LEVEL)?;
        Ok(Self(value as u8))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for DangerLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ObjectKind {
    DataPacket,
    DarkMatter,
    AntiMatter,
}

impl ObjectKind {
    pub const ALL: [ObjectKind; 3] = [
        ObjectKind::DataPacket,
        ObjectKind::DarkMatter,
        ObjectKind::AntiMatter,
    ];

    /// Stability lost per analysis.
    pub fn analysis_cost(self) -> f64 {
        match self {
            ObjectKind::DataPacket => 5.0,
            ObjectKind::DarkMatter => 15.0,
            ObjectKind::AntiMatter => 25.0,
        }
    }

    pub fn is_coolable(self) -> bool {
        !matches!(self, ObjectKind::DataPacket)
    }

    pub fn name(self) -> &'static str {
        match self {
            ObjectKind::DataPacket => "DataPacket",
            ObjectKind::DarkMatter => "DarkMatter",
            ObjectKind::AntiMatter => "AntiMatter",
        }
    }
}

impl fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Point-in-time view of one object, for rendering.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusSnapshot {
    pub id: String,
    pub stability: Stability,
    pub danger_level: DangerLevel,
    pub kind: ObjectKind,
}

impl fmt::Display for StatusSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ID: {} | Stability: {} | Danger: {} | Type: {}",
            self.id, self.stability, self.danger_level, self.kind
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum StatusFormat {
    #[default]
    Text,
    Json,
}

impl StatusFormat {
    pub fn render(self, snapshot: &StatusSnapshot) -> Result<String> {
        match self {
            StatusFormat::Text => Ok(snapshot.to_string()),
            StatusFormat::Json => Ok(serde_json::to_string(snapshot)?),
        }
    }
}
