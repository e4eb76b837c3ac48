use blocky::config::{GameConfig, DEFAULT_CONFIG_PATH};
use blocky::selfplay::run_selfplay;

fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = GameConfig::load_or_default(&path);

    println!("=== Blocky Self-Play ===");
    println!(
        "{} games, depth {}, {} turns, {} random + {:?} smart",
        config.num_games,
        config.max_depth,
        config.max_turns,
        config.random_players,
        config.smart_difficulties
    );

    let stats = run_selfplay(&config)?;

    println!("\n--- Results (seed {}) ---", stats.seed);
    for (seat, name) in stats.players.iter().enumerate() {
        let wins = stats.wins[seat];
        println!(
            "{}: {} wins ({:.1}%)",
            name,
            wins,
            wins as f64 / stats.total_games.max(1) as f64 * 100.0
        );
    }
    println!("Draws: {}", stats.draws);
    println!("Avg Winning Score: {:.1}", stats.avg_winning_score);
    println!("Avg Time: {:.1}ms\n", stats.avg_time_ms);

    println!("{}", serde_json::to_string_pretty(&stats)?);
    Ok(())
}
