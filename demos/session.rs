use gachatables::{GachaError, Session};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=gachatables=debug shows every draw
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let seed = std::env::args()
        .nth(1)
        .map(|s| s.parse::<u64>())
        .transpose()?
        .unwrap_or(2024);
    let mut session = Session::seeded(seed)?;

    println!("10-pull:");
    for result in session.draw_ten() {
        let tag = if result.is_duplicate { " (dup)" } else { "" };
        println!(
            "  {:<10} {} {}{tag} +{}",
            result.item.rarity,
            result.item.icon,
            result.item.name,
            result.currency_gained
        );
    }

    loop {
        match session.draw_once() {
            Ok(_) => {}
            Err(GachaError::Exhausted) => break,
            Err(err) => return Err(err.into()),
        }
    }
    let bonus = session.redeem_code("主任真帅")?;
    println!("\nredeemed code: +{} spins", bonus.bonus_spins);
    session.draw_many(100);

    // spend currency on the cheapest missing items
    let mut wanted: Vec<(String, u32)> = session
        .shop()
        .into_iter()
        .filter(|row| !row.owned)
        .map(|row| (row.item.id.clone(), row.price))
        .collect();
    wanted.sort_by_key(|(_, price)| *price);
    for (id, _) in wanted {
        if !session.redeem(&id) {
            break;
        }
        println!("bought {id}");
    }

    let stats = session.statistics();
    println!("\nspins:      {}", stats.total_spins);
    println!("value:      {} (avg {})", stats.total_value, stats.average_value);
    println!("mythics:    {}", stats.mythics_obtained);
    println!(
        "collection: {}/{}",
        stats.collection.owned, stats.collection.total
    );
    println!("rating:     {}", stats.rating.label());
    println!("best draws:");
    for ranked in &stats.top {
        println!(
            "  {:>4}  {} {}",
            ranked.value, ranked.draw.item.rarity, ranked.draw.item.name
        );
    }
    println!("currency left: {}", session.currency());

    Ok(())
}
