pub mod demo;
pub mod pick;
pub mod roll;

use std::collections::BTreeMap;
use std::fmt::Display;

use comfy_table::{ContentArrangement, Table};

use dicebag_core::{DiceStatistics, EngineConfig, SelectionStatistics};

/// Apply an optional seed to a configuration.
fn seeded(config: EngineConfig, seed: Option<u64>) -> EngineConfig {
    match seed {
        Some(seed) => config.with_seed(seed),
        None => config,
    }
}

/// Summary table for dice statistics.
fn dice_summary_table(stats: &DiceStatistics) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Metric", "Value"]);
    table.add_row(vec!["Rolls".to_string(), stats.total_rolls.to_string()]);
    table.add_row(vec![
        "Average".to_string(),
        format!("{:.2}", stats.average_result),
    ]);
    table.add_row(vec!["Min".to_string(), stats.min_result.to_string()]);
    table.add_row(vec!["Max".to_string(), stats.max_result.to_string()]);
    table.add_row(vec![
        "Most common".to_string(),
        stats.most_common_result.to_string(),
    ]);
    table
}

/// Frequency table with a proportional bar per row.
fn distribution_table<K: Display>(header: &str, counts: &BTreeMap<K, usize>) -> Table {
    let peak = counts.values().copied().max().unwrap_or(0).max(1);

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![header, "Count", ""]);
    for (key, &count) in counts {
        let bar = "█".repeat(count * 20 / peak);
        table.add_row(vec![key.to_string(), count.to_string(), bar]);
    }
    table
}

/// Print both dice tables.
fn print_dice_statistics(stats: &DiceStatistics) {
    println!("{}", dice_summary_table(stats));
    println!("{}", distribution_table("Value", &stats.result_distribution));
}

/// Print the pick frequency table.
fn print_selection_statistics(stats: &SelectionStatistics) {
    println!("{}", distribution_table("Item", &stats.most_used_items));
    if let Some(item) = &stats.most_common_item {
        println!("  Most common: {item}");
    }
}
