use crate::error::PlanError;

/// Construction options for a [`LootPlan`](crate::LootPlan).
///
/// `seed` fixes the generator; `step` discards that many draws before the
/// first roll. A step only means something together with a seed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlanConfig {
    pub seed: Option<u64>,
    pub step: Option<u64>,
}

impl PlanConfig {
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn step(mut self, step: u64) -> Self {
        self.step = Some(step);
        self
    }

    /// # Errors
    /// [`PlanError::InvalidArgument`] if a step is given without a seed.
    pub fn validate(&self) -> Result<(), PlanError> {
        if self.step.is_some() && self.seed.is_none() {
            return Err(PlanError::InvalidArgument("step requires a seed"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_without_seed_is_rejected() {
        let cfg = PlanConfig::default().step(3);
        assert!(matches!(cfg.validate(), Err(PlanError::InvalidArgument(_))));
    }

    #[test]
    fn builder_sets_fields() {
        let cfg = PlanConfig::default().seed(1).step(3);
        assert_eq!(cfg, PlanConfig { seed: Some(1), step: Some(3) });
        assert!(cfg.validate().is_ok());
        assert!(PlanConfig::default().validate().is_ok());
    }
}
