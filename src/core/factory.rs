use crate::core::inventory::Inventory;
use crate::domain::model::{ObjectKind, MAX_DANGER_LEVEL, MIN_DANGER_LEVEL};
use crate::domain::objects::{build_object, QuantumObject};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{DepotError, Result};
use crate::utils::validation::{
    validate_not_nan, validate_non_empty_string, validate_range, Validate,
};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Id draws before giving up on finding a free identifier.
const MAX_ID_ATTEMPTS: usize = 64;

#[derive(Debug, Clone, PartialEq)]
pub struct FactorySettings {
    pub id_prefix: String,
    pub min_stability: f64,
    pub max_stability: f64,
    pub seed: Option<u64>,
}

impl Default for FactorySettings {
    fn default() -> Self {
        Self {
            id_prefix: "QN-".to_string(),
            min_stability: 60.0,
            max_stability: 100.0,
            seed: None,
        }
    }
}

impl FactorySettings {
    pub fn from_provider<C: ConfigProvider + ?Sized>(config: &C) -> Self {
        Self {
            id_prefix: config.id_prefix().to_string(),
            min_stability: config.min_stability(),
            max_stability: config.max_stability(),
            seed: config.seed(),
        }
    }
}

impl Validate for FactorySettings {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("factory.id_prefix", &self.id_prefix)?;
        validate_not_nan("factory.min_stability", self.min_stability)?;
        validate_not_nan("factory.max_stability", self.max_stability)?;
        validate_range("factory.min_stability", self.min_stability, 0.0, 100.0)?;
        validate_range(
            "factory.max_stability",
            self.max_stability,
            self.min_stability,
            100.0,
        )?;
        Ok(())
    }
}

/// Random object generator. The entropy source is injected; use a seeded
/// `ChaCha8Rng` for reproducible runs.
pub struct ObjectFactory<R: Rng = ChaCha8Rng> {
    rng: R,
    settings: FactorySettings,
}

impl ObjectFactory<ChaCha8Rng> {
    /// Seeded from `settings.seed`, or from OS entropy when unset.
    pub fn seeded(settings: FactorySettings) -> Result<Self> {
        let rng = match settings.seed {
            Some(seed) => {
                tracing::debug!("Object factory seeded with {}", seed);
                ChaCha8Rng::seed_from_u64(seed)
            }
            None => ChaCha8Rng::from_entropy(),
        };
        Self::new(rng, settings)
    }
}

impl<R: Rng> ObjectFactory<R> {
    /// Rejects settings whose stability range cannot be sampled.
    pub fn new(rng: R, settings: FactorySettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { rng, settings })
    }

    pub fn settings(&self) -> &FactorySettings {
        &self.settings
    }

    /// Uniform kind, `<prefix>NNNN` id, stability in the configured range,
    /// danger level in `[1, 10]`.
    pub fn generate_random(&mut self) -> Result<Box<dyn QuantumObject>> {
        let id = self.next_id();
        self.generate_with_id(id)
    }

    /// Like [`generate_random`](Self::generate_random), redrawing the id until
    /// it is free in `inventory`.
    pub fn generate_unique(&mut self, inventory: &Inventory) -> Result<Box<dyn QuantumObject>> {
        for attempt in 1..=MAX_ID_ATTEMPTS {
            let id = self.next_id();
            if !inventory.contains(&id) {
                return self.generate_with_id(id);
            }
            tracing::debug!("Id {} already taken (attempt {})", id, attempt);
        }

        Err(DepotError::ProcessingError {
            message: format!(
                "No free identifier found after {} attempts",
                MAX_ID_ATTEMPTS
            ),
        })
    }

    fn generate_with_id(&mut self, id: String) -> Result<Box<dyn QuantumObject>> {
        let kind = *ObjectKind::ALL
            .choose(&mut self.rng)
            .unwrap_or(&ObjectKind::DataPacket);
        let stability = self
            .rng
            .gen_range(self.settings.min_stability..=self.settings.max_stability);
        let danger_level = self.rng.gen_range(MIN_DANGER_LEVEL..=MAX_DANGER_LEVEL);

        build_object(kind, id, stability, danger_level)
    }

    fn next_id(&mut self) -> String {
        format!(
            "{}{:04}",
            self.settings.id_prefix,
            self.rng.gen_range(0..10_000u32)
        )
    }
}
