use lootplan::{LootPlan, PlanConfig};
use std::collections::HashMap;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut plan = LootPlan::with_config(PlanConfig::default().seed(1).step(3))?;
    plan.batch_add([
        ("Diamond", 0.01),
        ("Gold", 2.0),
        ("Iron", 10.0),
        ("Stone", 100.0),
        ("Nothing", 50.0),
    ])?;

    // What a player should see before paying for a roll.
    println!("Odds:");
    for (name, chance) in plan.chances()? {
        println!("{chance:>9.4}% {name}");
    }

    let mut hist: HashMap<String, u64> = HashMap::default();
    for _ in 0..200_000 {
        *hist.entry(plan.roll_owned()?).or_default() += 1;
    }

    let mut values: Vec<(String, u64)> = hist.into_iter().collect();
    values.sort_by(|(_, ca), (_, cb)| cb.cmp(ca));

    println!("\n200000 rolls:");
    for (name, count) in values {
        println!("{count: >7} {name}");
    }

    plan.teardown();
    if let Err(err) = plan.add("Ruby", 1.0) {
        println!("\nafter teardown: {err}");
    }

    Ok(())
}
