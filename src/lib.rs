//! # lootplan
//!
//! Weighted single-item loot rolls with odds you can show to players.
//!
//! A [`LootPlan`] keeps a set of named items with non-negative weights. The
//! chance of an item is `weight / total_weight`, and [`LootPlan::get_chance`]
//! reports exactly the percentage [`LootPlan::roll`] draws with, so the
//! numbers can be disclosed before a player pays for a roll.
//!
//! Plans own their generator. Give one a seed (and optionally a step, the
//! number of draws to discard up front) and every plan built the same way
//! rolls the same sequence for the same calls.
//!
//! ## Quick start
//!
//! ```rust
//! use lootplan::LootPlan;
//!
//! # fn main() -> Result<(), lootplan::PlanError> {
//! let mut gems = LootPlan::new();
//! gems.batch_add([
//!     ("Diamond", 1.0),
//!     ("Jade", 25.0),
//!     ("Phosphophyllite", 50.0),
//! ])?;
//!
//! println!("Diamond: {:.3}%", gems.get_chance("Diamond")?);
//! let gem = gems.roll()?;
//! println!("you got: {gem}");
//! # Ok(()) }
//! ```
//!
//! ## Reproducible rolls
//!
//! ```rust
//! use lootplan::LootPlan;
//!
//! let batch = [("Diamond", 0.5), ("Jade", 3.0), ("Phosphophyllite", 10.0)];
//! let mut a = LootPlan::seeded(1, Some(3));
//! let mut b = LootPlan::seeded(1, Some(3));
//! a.batch_add(batch).unwrap();
//! b.batch_add(batch).unwrap();
//! assert_eq!(a.roll_owned().unwrap(), b.roll_owned().unwrap());
//! ```
//!
//! ## Enum tables
//!
//! ```rust,ignore
//! use lootplan::WeightedLoot;
//!
//! #[derive(Copy, Clone, Debug, PartialEq, WeightedLoot)]
//! enum Ore {
//!     #[weight(0.01)] Diamond,
//!     #[weight(2)]    Gold,
//!     #[weight(10)]   Iron,
//!     #[weight(100)]  Stone,
//! }
//!
//! let mut plan = Ore::plan()?;
//! let ore: Ore = Ore::roll(&mut plan, 1.0)?;
//! ```
//!
//! ## Gotchas
//! * Weights must be **non-negative** and finite; a plan whose weights are
//!   all zero cannot be rolled and reports no odds.
//! * Zero-weight items stay listed but never win.
//! * The plan is not synchronised. Share it across threads behind a lock.
//! * Add a "Nothing" item if an empty-handed result should be possible.

mod config;
mod error;
mod plan;
mod rng;

pub use config::PlanConfig;
pub use error::PlanError;
pub use plan::LootPlan;
pub use rng::PlanRng;

/// Derive macro imported from `lootplan_macros`.
/// See the crate-level example for usage.
pub use lootplan_macros::WeightedLoot;

/// Trait implemented by the `WeightedLoot` derive macro.
///
/// Each variant, its loot name and its weight are exposed via
/// [`WeightedLoot::ENTRIES`], which is enough to build a plan and to map a
/// rolled name back to a variant.
pub trait WeightedLoot: Copy + 'static {
    /// All `(variant, name, weight)` triples in declaration order.
    const ENTRIES: &'static [(Self, &'static str, f64)];

    /// Unseeded plan holding every variant.
    ///
    /// # Errors
    /// See [`LootPlan::batch_add`].
    fn plan() -> Result<LootPlan, PlanError> {
        let mut plan = LootPlan::new();
        plan.batch_add(Self::ENTRIES.iter().map(|&(_, name, weight)| (name, weight)))?;
        Ok(plan)
    }

    /// Reproducible plan holding every variant.
    fn seeded_plan(seed: u64, step: Option<u64>) -> Result<LootPlan, PlanError> {
        let mut plan = LootPlan::seeded(seed, step);
        plan.batch_add(Self::ENTRIES.iter().map(|&(_, name, weight)| (name, weight)))?;
        Ok(plan)
    }

    fn from_loot_name(name: &str) -> Option<Self> {
        Self::ENTRIES
            .iter()
            .find(|(_, n, _)| *n == name)
            .map(|&(variant, _, _)| variant)
    }

    /// Roll `plan` and map the result back to a variant.
    ///
    /// # Errors
    /// Whatever [`LootPlan::roll_with_luck`] returns, or
    /// [`PlanError::UnknownItem`] if the plan holds loot that is not a variant.
    fn roll<R: PlanRng>(plan: &mut LootPlan<R>, luck: f64) -> Result<Self, PlanError> {
        let name = plan.roll_with_luck(luck)?;
        Self::from_loot_name(name).ok_or_else(|| PlanError::UnknownItem(name.to_owned()))
    }
}
