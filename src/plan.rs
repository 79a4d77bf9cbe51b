//! Weighted single-item loot plan.
//!
//! Items live in a name -> weight map. Draws and odds read a copy of that
//! map sorted by ascending weight, rebuilt lazily after any edit. A roll
//! draws one real `r` in `[0, total)` and walks the sorted list, rarest
//! first, until the running total of `weight * luck` passes `r`.

use std::collections::HashMap;

use rand_pcg::Pcg64;

use crate::config::PlanConfig;
use crate::error::PlanError;
use crate::rng::PlanRng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PlanState {
    Mutable,
    Locked,
}

/// A loot table that rolls exactly one item per draw.
///
/// The generator `R` is owned by the plan. Two plans built with the same
/// seed and step and fed the same calls produce the same rolls.
#[derive(Debug, Clone)]
pub struct LootPlan<R = Pcg64> {
    items: HashMap<String, f64>,
    sorted: Vec<(String, f64)>,
    total_weight: f64,
    stale: bool,
    state: PlanState,
    rng: R,
}

impl LootPlan<Pcg64> {
    /// Unseeded plan.
    pub fn new() -> Self {
        Self::with_rng(Pcg64::from_seed_option(None))
    }

    /// Reproducible plan: seeded generator advanced `step` draws.
    pub fn seeded(seed: u64, step: Option<u64>) -> Self {
        let mut rng = Pcg64::from_seed_option(Some(seed));
        rng.discard(step.unwrap_or(0));
        log::debug!("seeded loot plan: seed={seed} step={step:?}");
        Self::with_rng(rng)
    }

    /// Plan from optional seed and step.
    ///
    /// # Errors
    /// [`PlanError::InvalidArgument`] if `step` is given without `seed`.
    pub fn from_options(seed: Option<u64>, step: Option<u64>) -> Result<Self, PlanError> {
        Self::with_config(PlanConfig { seed, step })
    }

    /// # Errors
    /// See [`PlanConfig::validate`].
    pub fn with_config(config: PlanConfig) -> Result<Self, PlanError> {
        Self::with_generator(config)
    }
}

impl Default for LootPlan<Pcg64> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: PlanRng> LootPlan<R> {
    /// Plan backed by any [`PlanRng`], e.g. `LootPlan::<StdRng>::with_generator(..)`.
    ///
    /// # Errors
    /// See [`PlanConfig::validate`].
    pub fn with_generator(config: PlanConfig) -> Result<Self, PlanError> {
        config.validate()?;
        let mut rng = R::from_seed_option(config.seed);
        rng.discard(config.step.unwrap_or(0));
        log::debug!(
            "new loot plan: seed={:?} step={:?}",
            config.seed,
            config.step
        );
        Ok(Self::with_rng(rng))
    }

    fn with_rng(rng: R) -> Self {
        Self {
            items: HashMap::new(),
            sorted: Vec::new(),
            total_weight: 0.0,
            stale: false,
            state: PlanState::Mutable,
            rng,
        }
    }

    fn ensure_mutable(&self) -> Result<(), PlanError> {
        match self.state {
            PlanState::Mutable => Ok(()),
            PlanState::Locked => Err(PlanError::Locked),
        }
    }

    /// Insert `name` or overwrite its weight.
    ///
    /// # Errors
    /// * [`PlanError::Locked`] after [`teardown`](Self::teardown).
    /// * [`PlanError::InvalidName`] for an empty name.
    /// * [`PlanError::InvalidWeight`] for a negative or non-finite weight.
    pub fn add(&mut self, name: impl Into<String>, weight: f64) -> Result<(), PlanError> {
        self.ensure_mutable()?;
        let name = name.into();
        if name.is_empty() {
            return Err(PlanError::InvalidName);
        }
        check_weight(&name, weight)?;
        self.items.insert(name, weight);
        self.stale = true;
        Ok(())
    }

    /// Remove `name`. Absent names are ignored.
    pub fn remove(&mut self, name: &str) -> Result<(), PlanError> {
        self.ensure_mutable()?;
        if self.items.remove(name).is_some() {
            self.stale = true;
        }
        Ok(())
    }

    /// Set the weight of an existing item.
    ///
    /// # Errors
    /// * [`PlanError::Locked`] after [`teardown`](Self::teardown).
    /// * [`PlanError::UnknownItem`] if `name` is not in the plan.
    /// * [`PlanError::InvalidWeight`] for a negative or non-finite weight.
    pub fn change_weight(&mut self, name: &str, weight: f64) -> Result<(), PlanError> {
        self.ensure_mutable()?;
        let Some(slot) = self.items.get_mut(name) else {
            return Err(PlanError::UnknownItem(name.to_owned()));
        };
        check_weight(name, weight)?;
        *slot = weight;
        self.stale = true;
        Ok(())
    }

    /// `change_weight(name, weight + delta)`.
    pub fn increase_weight(&mut self, name: &str, delta: f64) -> Result<(), PlanError> {
        self.ensure_mutable()?;
        let current = self.get_weight(name)?;
        self.change_weight(name, current + delta)
    }

    /// `change_weight(name, weight - delta)`. Going below zero is an error, not a clamp.
    pub fn decrease_weight(&mut self, name: &str, delta: f64) -> Result<(), PlanError> {
        self.ensure_mutable()?;
        let current = self.get_weight(name)?;
        self.change_weight(name, current - delta)
    }

    // Batch forms apply the single operation in iteration order and stop at
    // the first error. Entries before it stay applied, entries after it are
    // skipped.

    /// [`add`](Self::add) every `(name, weight)` pair.
    ///
    /// # Errors
    /// The first error from [`add`](Self::add).
    pub fn batch_add<I, K>(&mut self, batch: I) -> Result<(), PlanError>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<String>,
    {
        for (name, weight) in batch {
            self.add(name, weight)?;
        }
        Ok(())
    }

    /// [`remove`](Self::remove) every name.
    ///
    /// # Errors
    /// [`PlanError::Locked`] after [`teardown`](Self::teardown).
    pub fn batch_remove<I, K>(&mut self, batch: I) -> Result<(), PlanError>
    where
        I: IntoIterator<Item = K>,
        K: AsRef<str>,
    {
        for name in batch {
            self.remove(name.as_ref())?;
        }
        Ok(())
    }

    /// [`change_weight`](Self::change_weight) for every `(name, weight)` pair.
    ///
    /// # Errors
    /// The first error from [`change_weight`](Self::change_weight).
    pub fn batch_change_weight<I, K>(&mut self, batch: I) -> Result<(), PlanError>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        for (name, weight) in batch {
            self.change_weight(name.as_ref(), weight)?;
        }
        Ok(())
    }

    /// [`increase_weight`](Self::increase_weight) for every `(name, delta)` pair.
    ///
    /// # Errors
    /// The first error from [`increase_weight`](Self::increase_weight).
    pub fn batch_increase_weight<I, K>(&mut self, batch: I) -> Result<(), PlanError>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        for (name, delta) in batch {
            self.increase_weight(name.as_ref(), delta)?;
        }
        Ok(())
    }

    /// [`decrease_weight`](Self::decrease_weight) for every `(name, delta)` pair.
    ///
    /// # Errors
    /// The first error from [`decrease_weight`](Self::decrease_weight).
    pub fn batch_decrease_weight<I, K>(&mut self, batch: I) -> Result<(), PlanError>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: AsRef<str>,
    {
        for (name, delta) in batch {
            self.decrease_weight(name.as_ref(), delta)?;
        }
        Ok(())
    }

    fn rebuild_if_stale(&mut self) {
        if !self.stale {
            return;
        }
        self.sorted.clear();
        self.sorted
            .extend(self.items.iter().map(|(name, &weight)| (name.clone(), weight)));
        // name breaks ties so the order never depends on map iteration
        self.sorted
            .sort_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)));
        self.total_weight = self.sorted.iter().map(|(_, w)| w).sum();
        self.stale = false;
        log::trace!(
            "rebuilt loot list: items={} total_weight={}",
            self.sorted.len(),
            self.total_weight
        );
    }

    /// Total weight, usable as a draw range.
    fn drawable_total(&self) -> Result<f64, PlanError> {
        if !self.total_weight.is_finite() {
            return Err(PlanError::WeightOverflow);
        }
        if self.total_weight <= 0.0 {
            return Err(PlanError::EmptyPlan);
        }
        Ok(self.total_weight)
    }

    /// Current weight of `name`.
    pub fn get_weight(&self, name: &str) -> Result<f64, PlanError> {
        self.items
            .get(name)
            .copied()
            .ok_or_else(|| PlanError::UnknownItem(name.to_owned()))
    }

    /// Percentage chance (0..=100) of rolling `name` with the default luck.
    ///
    /// This is `weight / total_weight * 100`, the exact split [`roll`](Self::roll)
    /// uses, so it is the figure to disclose to players. Dividing first keeps
    /// the result in `0..=100` for weights near `f64::MAX`.
    ///
    /// # Errors
    /// * [`PlanError::UnknownItem`] if `name` is not in the plan.
    /// * [`PlanError::EmptyPlan`] if every weight is zero.
    /// * [`PlanError::WeightOverflow`] if the weights sum past `f64::MAX`.
    pub fn get_chance(&mut self, name: &str) -> Result<f64, PlanError> {
        let weight = self.get_weight(name)?;
        self.rebuild_if_stale();
        let total = self.drawable_total()?;
        Ok(percent(weight, total))
    }

    /// Every item with its percentage chance, rarest first.
    pub fn chances(&mut self) -> Result<Vec<(&str, f64)>, PlanError> {
        self.rebuild_if_stale();
        let total = self.drawable_total()?;
        Ok(self
            .sorted
            .iter()
            .map(|(name, weight)| (name.as_str(), percent(*weight, total)))
            .collect())
    }

    /// Sum of all weights.
    pub fn total_weight(&mut self) -> f64 {
        self.rebuild_if_stale();
        self.total_weight
    }

    /// `(name, weight)` pairs sorted by ascending weight, then name.
    pub fn entries(&mut self) -> &[(String, f64)] {
        self.rebuild_if_stale();
        &self.sorted
    }

    /// Number of items, zero-weight ones included.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the plan holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Whether `name` is in the plan.
    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    /// Roll one item with luck 1 (the plain weighted distribution).
    pub fn roll(&mut self) -> Result<&str, PlanError> {
        self.roll_with_luck(1.0)
    }

    /// Owned variant of [`roll`](Self::roll).
    pub fn roll_owned(&mut self) -> Result<String, PlanError> {
        self.roll().map(str::to_owned)
    }

    /// Roll one item, scaling every item's range by `luck`.
    ///
    /// The draw stays in `[0, total_weight)` while each range is multiplied,
    /// so `luck > 1` favours the rarer items checked first and `luck < 1`
    /// pushes wins toward the most common item, which is also the fallback
    /// when no range is reached. Consumes exactly one draw from the generator.
    ///
    /// # Errors
    /// * [`PlanError::EmptyPlan`] with no items or only zero weights.
    /// * [`PlanError::InvalidArgument`] if `luck` is negative or not finite.
    /// * [`PlanError::WeightOverflow`] if the weights sum past `f64::MAX`.
    pub fn roll_with_luck(&mut self, luck: f64) -> Result<&str, PlanError> {
        if self.items.is_empty() {
            return Err(PlanError::EmptyPlan);
        }
        if !luck.is_finite() || luck < 0.0 {
            return Err(PlanError::InvalidArgument(
                "luck must be a finite, non-negative number",
            ));
        }
        self.rebuild_if_stale();
        let total = self.drawable_total()?;
        let r = self.rng.next_number(total);
        let idx = winning_index(&self.sorted, r, luck);
        let name = self.sorted[idx].0.as_str();
        log::trace!("rolled {name:?}: r={r} luck={luck}");
        Ok(name)
    }

    /// Lock the plan. Edits fail afterwards; queries and rolls keep working.
    pub fn teardown(&mut self) {
        self.state = PlanState::Locked;
        log::debug!("loot plan locked with {} items", self.items.len());
    }

    /// Whether [`teardown`](Self::teardown) has been called.
    pub fn is_locked(&self) -> bool {
        self.state == PlanState::Locked
    }
}

fn check_weight(name: &str, weight: f64) -> Result<(), PlanError> {
    if !weight.is_finite() || weight < 0.0 {
        return Err(PlanError::InvalidWeight {
            name: name.to_owned(),
            value: weight,
        });
    }
    Ok(())
}

#[inline]
fn percent(weight: f64, total: f64) -> f64 {
    weight / total * 100.0
}

/// First entry whose running `weight * luck` total exceeds `r`; the last
/// entry if rounding (or a small luck) leaves none.
fn winning_index(entries: &[(String, f64)], r: f64, luck: f64) -> usize {
    let mut acc = 0.0;
    for (i, (_, weight)) in entries.iter().enumerate() {
        acc += weight * luck;
        if acc > r {
            return i;
        }
    }
    if luck < 1.0 {
        log::trace!("roll r={r} passed every range (luck={luck}); using the last entry");
    } else {
        log::warn!("roll r={r} passed every range (luck={luck}); using the last entry");
    }
    entries.len() - 1
}
