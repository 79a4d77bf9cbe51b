use thiserror::Error;

/// Everything that can go wrong when editing or drawing from a [`LootPlan`](crate::LootPlan).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlanError {
    #[error("loot name must not be empty")]
    InvalidName,
    #[error("invalid weight for {name:?}: {value}")]
    InvalidWeight { name: String, value: f64 },
    #[error("no loot named {0:?} in the plan")]
    UnknownItem(String),
    #[error("plan has no loot that can be rolled")]
    EmptyPlan,
    #[error("plan is locked and can no longer be changed")]
    Locked,
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    #[error("sum of weights is not finite")]
    WeightOverflow,
}
