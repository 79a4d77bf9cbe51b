use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use lootplan::LootPlan;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

fn gen_pairs(n: usize) -> Vec<(String, f64)> {
    let mut rng = Pcg32::seed_from_u64(777);
    (0..n)
        .map(|i| (format!("item{i}"), 0.1 + rng.random::<f64>()))
        .collect()
}

fn bench_plan_rebuild(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_rebuild");
    for &n in &[2usize, 8, 64, 256, 1024] {
        let pairs = gen_pairs(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("batch_add_then_total_n={n}"), |b| {
            b.iter_batched_ref(
                || LootPlan::seeded(1, None),
                |plan| {
                    plan.batch_add(black_box(pairs.clone())).unwrap();
                    black_box(plan.total_weight())
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_plan_roll(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_roll");
    const DRAWS_PER_ITER: usize = 1024;

    for &n in &[2usize, 8, 64, 256, 1024] {
        let mut plan = LootPlan::seeded(999, None);
        plan.batch_add(gen_pairs(n)).unwrap();
        group.throughput(Throughput::Elements(DRAWS_PER_ITER as u64));

        group.bench_function(format!("roll_n={n}"), |b| {
            b.iter(|| {
                let mut s = 0usize;
                for _ in 0..DRAWS_PER_ITER {
                    s ^= plan.roll().unwrap().len();
                }
                black_box(s)
            });
        });

        group.bench_function(format!("roll_lucky_n={n}"), |b| {
            b.iter(|| {
                let mut s = 0usize;
                for _ in 0..DRAWS_PER_ITER {
                    s ^= plan.roll_with_luck(1.5).unwrap().len();
                }
                black_box(s)
            });
        });
    }
    group.finish();
}

criterion_group!(lootplan_benches, bench_plan_rebuild, bench_plan_roll);
criterion_main!(lootplan_benches);
