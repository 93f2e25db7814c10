pub mod encounter;
pub mod roll;
pub mod table;
pub mod tables;
pub mod treasure;

use std::path::Path;

use colored::Colorize;

use hw_core::InMemoryRepository;
use hw_encounter::{EncounterResult, RolledTreasure};

/// Load every data file found in `dir`.
fn load_data(dir: &Path) -> Result<InMemoryRepository, String> {
    if !dir.is_dir() {
        return Err(format!("data directory not found: {}", dir.display()));
    }
    InMemoryRepository::load_dir(dir).map_err(|e| e.to_string())
}

/// Use the given seed, or draw and announce a fresh one.
fn resolve_seed(seed: Option<u64>, quiet: bool) -> u64 {
    match seed {
        Some(seed) => seed,
        None => {
            let seed = rand::random::<u64>();
            let line = format!("Seed: {seed}");
            if quiet {
                eprintln!("  {line}");
            } else {
                println!("  {}", line.dimmed());
            }
            seed
        }
    }
}

fn print_result(result: &EncounterResult) {
    match result {
        EncounterResult::Creature {
            creature,
            count,
            name,
            is_lair,
            treasure,
            possessions,
        } => {
            let lair = if *is_lair {
                format!(" {}", "(in lair)".yellow())
            } else {
                String::new()
            };
            println!("  {} x {}{lair}", count, name.bold());
            println!(
                "  {}",
                format!(
                    "Level {} | AC {} | HD {} | Morale {} | XP {} | {}",
                    creature.level,
                    creature.armour_class,
                    creature.hit_dice,
                    creature.morale,
                    creature.xp,
                    creature.alignment
                )
                .dimmed()
            );
            println!("  Attacks: {}", creature.attacks);
            if let Some(possessions) = possessions {
                println!("  Possessions: {possessions}");
            }
            if let Some(treasure) = treasure {
                println!();
                print_treasure(treasure);
            }
        }
        EncounterResult::Text { name, description } => {
            println!("  {}", name.bold());
            if description != name {
                println!("  {description}");
            }
        }
    }
}

fn print_treasure(treasure: &RolledTreasure) {
    println!("  {}", "Treasure".bold().underline());
    if treasure.is_empty() {
        println!("  {}", "(nothing)".dimmed());
        return;
    }

    let coins = &treasure.coins;
    for (amount, unit) in [
        (coins.copper, "cp"),
        (coins.silver, "sp"),
        (coins.gold, "gp"),
        (coins.pellucidium, "pp"),
    ] {
        if amount > 0 {
            println!("  {amount} {unit}");
        }
    }
    for gem in &treasure.gems {
        println!("  {} ({}, {} gp)", gem.name.cyan(), gem.category, gem.value);
    }
    for art in &treasure.art_objects {
        println!("  {} ({} gp)", art.to_string().cyan(), art.value);
    }
    for item in &treasure.magic_items {
        println!("  {} [{}]", item.name.magenta(), item.category.dimmed());
    }
    println!(
        "  {} {} gp",
        "Total value:".bold(),
        format_gp(treasure.total_value())
    );
}

/// Render a gold-piece value without trailing zeros.
fn format_gp(value: f64) -> String {
    let text = format!("{value:.2}");
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
