use std::path::Path;

use colored::Colorize;

use hw_encounter::{TreasureGenerator, parse_treasure_code};
use hw_mechanics::SeededRandom;

pub fn run(dir: &Path, code: &str, seed: Option<u64>) -> Result<(), String> {
    let Some(spec) = parse_treasure_code(code).map_err(|e| e.to_string())? else {
        println!("  {}", "No treasure.".dimmed());
        return Ok(());
    };

    let repo = super::load_data(dir)?;
    let hoards = TreasureGenerator::from_repository(&repo).map_err(|e| e.to_string())?;
    let mut rng = SeededRandom::new(super::resolve_seed(seed, false));

    println!("  {} {}", "Hoard".bold(), spec.to_string().dimmed());
    if spec.codes.is_empty() {
        println!("  {}", "(no tier codes to roll)".dimmed());
    } else {
        println!();
        super::print_treasure(&hoards.roll_hoard(&spec, &mut rng));
    }
    if !spec.extras.is_empty() {
        println!();
        println!("  Possessions: {}", spec.extras.join("; "));
    }
    Ok(())
}
