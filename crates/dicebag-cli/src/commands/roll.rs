use colored::Colorize;

use dicebag_core::{DiceService, EngineConfig, MemoryStore, NotationMode};

pub fn run(
    notation: &str,
    times: u32,
    lenient: bool,
    seed: Option<u64>,
    json: bool,
) -> Result<(), String> {
    let mode = if lenient {
        NotationMode::Lenient
    } else {
        NotationMode::Strict
    };
    let config = super::seeded(EngineConfig::default().with_notation_mode(mode), seed);
    let mut rng = config.rng();
    let mut service: DiceService = DiceService::new(MemoryStore::new(), config);

    for _ in 0..times.max(1) {
        service
            .roll_notation(notation, &mut rng)
            .map_err(|e| e.to_string())?;
    }

    let rolls = service.history();
    let stats = service.statistics();

    if json {
        let out = serde_json::json!({ "rolls": rolls, "statistics": stats });
        let text = serde_json::to_string_pretty(&out)
            .map_err(|e| format!("cannot encode output: {e}"))?;
        println!("{text}");
        return Ok(());
    }

    for roll in &rolls {
        println!("  {roll}");
    }

    if rolls.len() > 1 {
        println!();
        println!(
            "  {} {}",
            "Statistics".bold(),
            format!("({} rolls)", rolls.len()).dimmed()
        );
        super::print_dice_statistics(&stats);
    }

    Ok(())
}
