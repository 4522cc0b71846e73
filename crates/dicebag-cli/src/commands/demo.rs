use colored::Colorize;

use dicebag_core::selection::DEFAULT_TEXT_TITLE;
use dicebag_core::{
    DiceService, EngineConfig, NotationMode, Priority, SelectorService, StandardDie, Todo,
};

pub fn run(seed: u64) -> Result<(), String> {
    let config = EngineConfig::default()
        .with_seed(seed)
        .with_notation_mode(NotationMode::Lenient);
    let mut rng = config.rng();

    println!("  {} {}", "Dicebag demo".bold(), format!("(seed={seed})").dimmed());
    println!("  {}", "=".repeat(50));

    let todos = sample_todos();
    show_todos(&todos);

    let mut dice: DiceService = DiceService::new(Default::default(), config.clone());
    println!();
    println!("  {}", "Dice".bold().underline());
    for die in [StandardDie::D6, StandardDie::D20] {
        let roll = dice
            .roll_standard(die, 1, 0, &mut rng)
            .map_err(|e| e.to_string())?;
        println!("    {roll}");
    }
    for notation in ["2d6+3", "3d8", "d20-2"] {
        let roll = dice
            .roll_notation(notation, &mut rng)
            .map_err(|e| e.to_string())?;
        println!("    {roll}");
    }
    let batch = [
        StandardDie::D4.dice(2).map_err(|e| e.to_string())?,
        StandardDie::D12.dice(1).map_err(|e| e.to_string())?,
    ];
    for roll in dice.roll_many(&batch, 1, &mut rng) {
        println!("    {roll}");
    }
    let random = dice.roll_random_standard(&mut rng);
    println!("    {random} {}", "(random die)".dimmed());
    println!("    {} rolls recorded", dice.history().len());
    super::print_dice_statistics(&dice.statistics());

    let mut selector: SelectorService =
        SelectorService::new(Default::default(), Default::default(), config);
    println!();
    println!("  {}", "Random picks".bold().underline());
    let lunch = selector
        .create_from_texts(&["Ramen", "Curry", "Salad", "Burger"], DEFAULT_TEXT_TITLE)
        .map_err(|e| e.to_string())?;
    let texts: Vec<&str> = lunch.items().iter().map(|i| i.text()).collect();
    println!("    {}: {}", lunch.title(), texts.join(", "));
    let result = selector
        .perform(lunch.id(), &mut rng)
        .map_err(|e| e.to_string())?;
    println!(
        "    rolled {} -> {}",
        result.dice_roll(),
        result.selected_item().text().green()
    );

    match selector.create_from_category("work", &todos, None) {
        Ok(work) => {
            let result = selector
                .perform_weighted(work.id(), &mut rng)
                .map_err(|e| e.to_string())?;
            println!("    {}: {}", work.title(), result.selected_item().text().green());
        }
        Err(e) => println!("    {}", e.to_string().dimmed()),
    }

    match selector.quick_select(&todos, &mut rng) {
        Ok(result) => println!(
            "    {}: {}",
            result.selection().title(),
            result.selected_item().text().green()
        ),
        Err(_) => println!("    {}", "no open todos to pick from".dimmed()),
    }

    let stats = selector.statistics();
    println!("    {} picks recorded", stats.total_selections);

    println!("  {}", "=".repeat(50));
    println!("  {}", "Done.".bold());
    Ok(())
}

fn sample_todos() -> Vec<Todo> {
    vec![
        Todo::new("Write quarterly report")
            .with_category("work")
            .with_priority(Priority::High),
        Todo::new("Review pull requests").with_category("work"),
        Todo::new("Plan team offsite")
            .with_category("work")
            .with_priority(Priority::Low),
        Todo::new("Buy groceries").with_category("home"),
        Todo::new("Water the plants").with_category("home").completed(),
        Todo::new("Book dentist appointment")
            .with_category("health")
            .with_priority(Priority::High),
    ]
}

fn show_todos(todos: &[Todo]) {
    println!();
    println!("  {}", "Todos".bold().underline());
    for todo in todos {
        let mark = if todo.is_completed { "[x]" } else { "[ ]" };
        println!(
            "    {mark} {} {}",
            todo.title,
            format!("[{}] ({})", todo.priority, todo.category).dimmed()
        );
    }

    let mut categories: Vec<&str> = todos.iter().map(|t| t.category.as_str()).collect();
    categories.sort_unstable();
    categories.dedup();
    println!("    categories: {}", categories.join(", "));
}
