use gachatables::{Rarity, RaritySampler, WeightedEnum};

fn main() {
    let sampler = RaritySampler::default();
    let mut hist = [0u64; Rarity::COUNT];
    let mut pity = 0u32;
    let mut forced = 0u64;

    let mut rng = rand::rng();
    const DRAWS: u64 = 2_000_000;
    for _ in 0..DRAWS {
        let roll = sampler.sample(&mut pity, &mut rng);
        hist[roll.rarity.index()] += 1;
        if roll.pity {
            forced += 1;
        }
    }

    println!("{:<10} {:>8} {:>8} {:>8}", "rarity", "count", "actual", "table");
    for (rarity, percent) in Rarity::ENTRIES {
        let count = hist[rarity.index()];
        let actual = count as f64 / DRAWS as f64 * 100.0;
        println!("{rarity:<10} {count:>8} {actual:>7.3}% {percent:>7.3}%");
    }
    println!("\n{forced} mythics forced by pity");
}
