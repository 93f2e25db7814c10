use colored::Colorize;

use hw_mechanics::{DiceRoll, SeededRandom};

pub fn run(notation: &str, times: u32, seed: Option<u64>) -> Result<(), String> {
    let dice = notation.parse::<DiceRoll>().map_err(|e| e.to_string())?;
    let seed = super::resolve_seed(seed, false);
    let mut rng = SeededRandom::new(seed);

    println!(
        "  {} {}",
        dice.to_string().bold(),
        format!("(range {}-{})", dice.min(), dice.max()).dimmed()
    );
    for _ in 0..times.max(1) {
        let result = dice.roll_detailed(&mut rng);
        println!("  {} {}", "→".dimmed(), result.to_string().green());
    }
    Ok(())
}
