use crate::domain::model::{DangerLevel, ObjectKind, Stability, StatusSnapshot};
use crate::utils::error::{DepotError, Result};
use crate::utils::validation::validate_non_empty_string;
use std::fmt;

/// Stability restored by one emergency cooling.
pub const COOLING_BOOST: f64 = 50.0;

/// Fields shared by every object variant.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectCore {
    id: String,
    stability: Stability,
    danger_level: DangerLevel,
}

impl ObjectCore {
    pub fn new(id: impl Into<String>, stability: f64, danger_level: i64) -> Result<Self> {
        let id = id.into();
        validate_non_empty_string("id", &id)?;

        Ok(Self {
            id,
            stability: Stability::new(stability)?,
            danger_level: DangerLevel::new(danger_level)?,
        })
    }

    /// Drains the kind's analysis cost, then checks for collapse. The drain
    /// is kept even when the check fails; `report` travels with the collapse.
    fn run_analysis(&mut self, kind: ObjectKind, report: &str) -> Result<String> {
        let before = self.stability;
        self.stability = before.decreased_by(kind.analysis_cost());
        tracing::debug!(
            "Analyzed {} ({}): stability {} -> {}",
            self.id,
            kind,
            before,
            self.stability
        );

        if self.stability.is_exhausted() {
            tracing::error!("💥 Quantum collapse of {} ({})", self.id, kind);
            return Err(DepotError::CollapseError {
                id: self.id.clone(),
                report: report.to_string(),
            });
        }
        Ok(report.to_string())
    }

    fn run_cooling(&mut self) {
        let before = self.stability;
        self.stability = before.increased_by(COOLING_BOOST);
        tracing::debug!(
            "Cooled {}: stability {} -> {}",
            self.id,
            before,
            self.stability
        );
    }
}

/// A stored quantum object. Variants differ in analysis cost and in whether
/// they expose the [`Coolable`] capability.
pub trait QuantumObject: fmt::Debug {
    fn core(&self) -> &ObjectCore;

    fn kind(&self) -> ObjectKind;

    /// Runs one analysis pass and returns its report line.
    ///
    /// Fails with [`DepotError::CollapseError`] once stability reaches zero.
    fn analyze(&mut self) -> Result<String>;

    /// `Some` only for variants implementing [`Coolable`].
    fn as_coolable_mut(&mut self) -> Option<&mut dyn Coolable> {
        None
    }

    fn id(&self) -> &str {
        &self.core().id
    }

    fn stability(&self) -> Stability {
        self.core().stability
    }

    fn danger_level(&self) -> DangerLevel {
        self.core().danger_level
    }

    fn snapshot(&self) -> StatusSnapshot {
        StatusSnapshot {
            id: self.id().to_string(),
            stability: self.stability(),
            danger_level: self.danger_level(),
            kind: self.kind(),
        }
    }

    fn describe_status(&self) -> String {
        self.snapshot().to_string()
    }
}

/// Emergency cooling capability.
pub trait Coolable: QuantumObject {
    fn cool(&mut self);
}

#[derive(Debug, Clone, PartialEq)]
pub struct DataPacket {
    core: ObjectCore,
}

impl DataPacket {
    pub fn new(id: impl Into<String>, stability: f64, danger_level: i64) -> Result<Self> {
        Ok(Self {
            core: ObjectCore::new(id, stability, danger_level)?,
        })
    }
}

impl QuantumObject for DataPacket {
    fn core(&self) -> &ObjectCore {
        &self.core
    }

    fn kind(&self) -> ObjectKind {
        ObjectKind::DataPacket
    }

    fn analyze(&mut self) -> Result<String> {
        self.core.run_analysis(self.kind(), "Data contents read.")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DarkMatter {
    core: ObjectCore,
}

impl DarkMatter {
    pub fn new(id: impl Into<String>, stability: f64, danger_level: i64) -> Result<Self> {
        Ok(Self {
            core: ObjectCore::new(id, stability, danger_level)?,
        })
    }
}

impl QuantumObject for DarkMatter {
    fn core(&self) -> &ObjectCore {
        &self.core
    }

    fn kind(&self) -> ObjectKind {
        ObjectKind::DarkMatter
    }

    fn analyze(&mut self) -> Result<String> {
        self.core.run_analysis(self.kind(), "Analyzing dark matter...")
    }

    fn as_coolable_mut(&mut self) -> Option<&mut dyn Coolable> {
        Some(self)
    }
}

impl Coolable for DarkMatter {
    fn cool(&mut self) {
        self.core.run_cooling();
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AntiMatter {
    core: ObjectCore,
}

impl AntiMatter {
    pub fn new(id: impl Into<String>, stability: f64, danger_level: i64) -> Result<Self> {
        Ok(Self {
            core: ObjectCore::new(id, stability, danger_level)?,
        })
    }
}

impl QuantumObject for AntiMatter {
    fn core(&self) -> &ObjectCore {
        &self.core
    }

    fn kind(&self) -> ObjectKind {
        ObjectKind::AntiMatter
    }

    fn analyze(&mut self) -> Result<String> {
        self.core.run_analysis(self.kind(), "THE FABRIC OF THE UNIVERSE IS TREMBLING...")
    }

    fn as_coolable_mut(&mut self) -> Option<&mut dyn Coolable> {
        Some(self)
    }
}

impl Coolable for AntiMatter {
    fn cool(&mut self) {
        self.core.run_cooling();
    }
}

/// Builds a boxed object of the given kind.
pub fn build_object(
    kind: ObjectKind,
    id: impl Into<String>,
    stability: f64,
    danger_level: i64,
) -> Result<Box<dyn QuantumObject>> {
    let object: Box<dyn QuantumObject> = match kind {
        ObjectKind::DataPacket => Box::new(DataPacket::new(id, stability, danger_level)?),
        ObjectKind::DarkMatter => Box::new(DarkMatter::new(id, stability, danger_level)?),
        ObjectKind::AntiMatter => Box::new(AntiMatter::new(id, stability, danger_level)?),
    };
    Ok(object)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_validates_danger_level() {
        assert!(matches!(
            DataPacket::new("QN-0001", 80.0, 0),
            Err(DepotError::ValidationError { .. })
        ));
        assert!(matches!(
            AntiMatter::new("QN-0001", 80.0, 11),
            Err(DepotError::ValidationError { .. })
        ));
        let packet = DarkMatter::new("QN-0001", 80.0, 10).unwrap();
        assert_eq!(packet.danger_level().value(), 10);
    }

    #[test]
    fn test_construction_rejects_blank_id() {
        assert!(matches!(
            DataPacket::new("  ", 80.0, 3),
            Err(DepotError::ValidationError { .. })
        ));
    }

    #[test]
    fn test_construction_clamps_stability() {
        assert_eq!(DataPacket::new("a", 250.0, 3).unwrap().stability().value(), 100.0);
        assert_eq!(DataPacket::new("b", -1.0, 3).unwrap().stability().value(), 0.0);
    }

    #[test]
    fn test_data_packet_collapses_from_five() {
        let mut packet = DataPacket::new("QN-0005", 5.0, 2).unwrap();
        let err = packet.analyze().unwrap_err();

        assert!(matches!(
            err,
            DepotError::CollapseError { ref id, ref report }
                if id == "QN-0005" && report == "Data contents read."
        ));
        assert_eq!(packet.stability().value(), 0.0);
    }

    #[test]
    fn test_anti_matter_analysis_costs_twenty_five() {
        let mut anti = AntiMatter::new("QN-0100", 100.0, 9).unwrap();
        let report = anti.analyze().unwrap();

        assert_eq!(anti.stability().value(), 75.0);
        assert_eq!(report, "THE FABRIC OF THE UNIVERSE IS TREMBLING...");
    }

    #[test]
    fn test_dark_matter_analysis_costs_fifteen() {
        let mut dark = DarkMatter::new("QN-0200", 40.0, 5).unwrap();
        dark.analyze().unwrap();
        assert_eq!(dark.stability().value(), 25.0);
    }

    #[test]
    fn test_overshoot_collapse_saturates_at_zero() {
        let mut anti = AntiMatter::new("QN-0300", 10.0, 5).unwrap();
        assert!(anti.analyze().is_err());
        assert_eq!(anti.stability().value(), 0.0);
    }

    #[test]
    fn test_cooling_clamps_at_hundred() {
        let mut dark = DarkMatter::new("QN-0090", 90.0, 1).unwrap();
        dark.cool();
        assert_eq!(dark.stability().value(), 100.0);

        let mut anti = AntiMatter::new("QN-0020", 20.0, 1).unwrap();
        anti.cool();
        assert_eq!(anti.stability().value(), 70.0);
    }

    #[test]
    fn test_coolable_capability_per_variant() {
        let mut packet: Box<dyn QuantumObject> =
            Box::new(DataPacket::new("p", 50.0, 1).unwrap());
        let mut dark: Box<dyn QuantumObject> = Box::new(DarkMatter::new("d", 50.0, 1).unwrap());

        assert!(packet.as_coolable_mut().is_none());

        dark.as_coolable_mut().unwrap().cool();
        assert_eq!(dark.stability().value(), 100.0);
    }

    #[test]
    fn test_describe_status_format() {
        let packet = DataPacket::new("QN-0042", 66.66, 7).unwrap();
        assert_eq!(
            packet.describe_status(),
            "ID: QN-0042 | Stability: 66.7 | Danger: 7 | Type: DataPacket"
        );
    }

    #[test]
    fn test_build_object_matches_kind() {
        for kind in ObjectKind::ALL {
            let object = build_object(kind, "QN-1234", 70.0, 3).unwrap();
            assert_eq!(object.kind(), kind);
            assert_eq!(object.as_ref().id(), "QN-1234");
        }
    }
}
