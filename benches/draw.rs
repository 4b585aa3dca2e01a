use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use gachatables::{Catalog, DrawEngine, PlayerState, ProbabilityTable, RaritySampler, resolve};
use gachatables::{Rarity, stats::Statistics};
use rand::SeedableRng;
use rand_pcg::Pcg32;

const DRAWS_PER_ITER: usize = 1024;

fn bench_rarity_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("rarity_sample");
    group.throughput(Throughput::Elements(DRAWS_PER_ITER as u64));

    let table = ProbabilityTable::default();
    group.bench_function("table", |b| {
        b.iter_batched_ref(
            || Pcg32::seed_from_u64(999),
            |rng| {
                let mut s = 0u8;
                for _ in 0..DRAWS_PER_ITER {
                    s ^= table.sample(rng).tier();
                }
                black_box(s)
            },
            BatchSize::SmallInput,
        );
    });

    let sampler = RaritySampler::default();
    group.bench_function("with_pity", |b| {
        b.iter_batched_ref(
            || (Pcg32::seed_from_u64(1001), 0u32),
            |(rng, pity)| {
                let mut s = 0u8;
                for _ in 0..DRAWS_PER_ITER {
                    s ^= sampler.sample(pity, rng).rarity.tier();
                }
                black_box(s)
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let catalog = Catalog::builtin().unwrap();
    let mut group = c.benchmark_group("resolve");
    group.throughput(Throughput::Elements(DRAWS_PER_ITER as u64));
    group.bench_function("rare", |b| {
        b.iter_batched_ref(
            || Pcg32::seed_from_u64(7),
            |rng| {
                let mut n = 0usize;
                for _ in 0..DRAWS_PER_ITER {
                    n += resolve(&catalog, Rarity::Rare, rng).map_or(0, |i| i.id.len());
                }
                black_box(n)
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_draw(c: &mut Criterion) {
    let catalog = Catalog::builtin().unwrap();
    let engine = DrawEngine::default();
    let mut group = c.benchmark_group("draw");
    group.throughput(Throughput::Elements(DRAWS_PER_ITER as u64));
    group.bench_function("draw_many", |b| {
        b.iter_batched(
            || (PlayerState::new(DRAWS_PER_ITER as u32), Pcg32::seed_from_u64(31)),
            |(mut state, mut rng)| {
                let results = engine.draw_many(&catalog, &mut state, DRAWS_PER_ITER, &mut rng);
                black_box((results.len(), state.currency))
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_statistics(c: &mut Criterion) {
    let catalog = Catalog::builtin().unwrap();
    let engine = DrawEngine::default();
    let mut group = c.benchmark_group("statistics");
    for &n in &[60usize, 1_000, 10_000] {
        let mut state = PlayerState::new(n as u32);
        let mut rng = Pcg32::seed_from_u64(5);
        engine.draw_many(&catalog, &mut state, n, &mut rng);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("compute_history={n}"), |b| {
            b.iter(|| black_box(Statistics::compute(&catalog, black_box(&state), 100).total_value));
        });
    }
    group.finish();
}

criterion_group!(
    draw,
    bench_rarity_sample,
    bench_resolve,
    bench_draw,
    bench_statistics
);
criterion_main!(draw);
