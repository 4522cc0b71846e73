use colored::Colorize;

use dicebag_core::{EngineConfig, Selection, SelectionItem, SelectorService};

/// Arguments of the `pick` command.
pub struct PickArgs<'a> {
    pub items: &'a [String],
    pub weights: &'a [u32],
    pub weighted: bool,
    pub title: &'a str,
    pub times: u32,
    pub seed: Option<u64>,
    pub json: bool,
}

pub fn run(args: &PickArgs<'_>) -> Result<(), String> {
    let selection = build_selection(args.items, args.weights, args.title)?;
    let weighted = args.weighted || !args.weights.is_empty();

    let config = super::seeded(EngineConfig::default(), args.seed);
    let mut rng = config.rng();
    let mut service: SelectorService = SelectorService::default();
    let selection = service.save(selection);

    for _ in 0..args.times.max(1) {
        let picked = if weighted {
            service.perform_weighted(selection.id(), &mut rng)
        } else {
            service.perform(selection.id(), &mut rng)
        };
        picked.map_err(|e| e.to_string())?;
    }

    let results = service.results();
    let stats = service.statistics();

    if args.json {
        let out = serde_json::json!({ "results": results, "statistics": stats });
        let text = serde_json::to_string_pretty(&out)
            .map_err(|e| format!("cannot encode output: {e}"))?;
        println!("{text}");
        return Ok(());
    }

    let mode = if weighted { "weighted" } else { "uniform" };
    println!(
        "  {} {}",
        selection.title().bold(),
        format!("({} items, {mode})", selection.item_count()).dimmed()
    );
    for result in &results {
        println!(
            "  rolled {} -> {}",
            result.dice_roll(),
            result.selected_item().text()
        );
    }

    if results.len() > 1 {
        println!();
        super::print_selection_statistics(&stats);
    }

    Ok(())
}

fn build_selection(items: &[String], weights: &[u32], title: &str) -> Result<Selection, String> {
    if weights.is_empty() {
        return Selection::from_texts(items, title).map_err(|e| e.to_string());
    }
    if weights.len() != items.len() {
        return Err(format!(
            "expected {} weights, one per item, got {}",
            items.len(),
            weights.len()
        ));
    }
    let weighted = items
        .iter()
        .zip(weights)
        .enumerate()
        .map(|(i, (text, &weight))| SelectionItem::new(format!("item_{i}"), text.trim(), weight))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| e.to_string())?;
    Selection::new(weighted, title).map_err(|e| e.to_string())
}
