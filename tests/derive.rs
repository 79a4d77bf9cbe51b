use lootplan::{PlanError, WeightedLoot};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, WeightedLoot)]
enum Ore {
    #[weight(0.01)]
    Diamond,
    #[weight(2)]
    Gold,
    #[weight(10)]
    Iron,
    #[weight(100)]
    Stone,
}

#[derive(Copy, Clone, Debug, PartialEq, WeightedLoot)]
enum Rarity {
    #[weight(1/1000)]
    Mythic,
    #[weight(1/100)]
    Legendary,
    #[weight(20/100)]
    Uncommon,
    #[weight(1 - (1/1000 + 1/100 + 20/100))]
    Common,
}

#[test]
fn entries_follow_declaration() {
    assert_eq!(
        Ore::ENTRIES,
        &[
            (Ore::Diamond, "Diamond", 0.01),
            (Ore::Gold, "Gold", 2.0),
            (Ore::Iron, "Iron", 10.0),
            (Ore::Stone, "Stone", 100.0),
        ]
    );
}

#[test]
fn integer_ratios_use_float_division() {
    assert_eq!(Rarity::ENTRIES[0].2, 0.001);
    assert_eq!(Rarity::ENTRIES[1].2, 0.01);
    let total: f64 = Rarity::ENTRIES.iter().map(|e| e.2).sum();
    assert!((total - 1.0).abs() < 1e-12);
}

#[test]
fn plan_discloses_declared_odds() {
    let mut plan = Ore::plan().unwrap();
    assert_eq!(plan.len(), 4);
    let iron = plan.get_chance("Iron").unwrap();
    assert!((iron - 1000.0 / 112.01).abs() < 1e-9);
}

#[test]
fn seeded_enum_rolls_replay() {
    let mut a = Ore::seeded_plan(1, Some(3)).unwrap();
    let mut b = Ore::seeded_plan(1, Some(3)).unwrap();
    for _ in 0..20 {
        let x: Ore = Ore::roll(&mut a, 1.0).unwrap();
        let y: Ore = Ore::roll(&mut b, 1.0).unwrap();
        assert_eq!(x, y);
    }
}

#[test]
fn name_lookup() {
    assert_eq!(Ore::from_loot_name("Gold"), Some(Ore::Gold));
    assert_eq!(Ore::from_loot_name("Mithril"), None);
}

#[test]
fn foreign_loot_is_reported() {
    let mut plan = Ore::seeded_plan(2, None).unwrap();
    plan.batch_remove(["Diamond", "Gold", "Iron", "Stone"]).unwrap();
    plan.add("Mithril", 1.0).unwrap();
    assert_eq!(
        Ore::roll(&mut plan, 1.0),
        Err(PlanError::UnknownItem("Mithril".into()))
    );
}
