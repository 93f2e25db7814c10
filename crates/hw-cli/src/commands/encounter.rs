use std::path::Path;

use colored::Colorize;

use hw_core::{GenerationContext, Terrain, TimeOfDay};
use hw_encounter::{Encounter, EncounterGenerator, GeneratorConfig, TreasureGenerator};

/// Flags of the `encounter` command.
pub struct Options {
    pub region: String,
    pub night: bool,
    pub off_road: bool,
    pub camping: bool,
    pub seed: Option<u64>,
    pub max_depth: usize,
    pub json: bool,
}

pub fn run(dir: &Path, opts: Options) -> Result<(), String> {
    let repo = super::load_data(dir)?;
    let hoards = if repo.has_treasure_tables() {
        Some(TreasureGenerator::from_repository(&repo).map_err(|e| e.to_string())?)
    } else {
        tracing::warn!("no treasure tables loaded; lairs will have no hoard");
        None
    };

    let context = GenerationContext::new(opts.region)
        .with_time_of_day(if opts.night {
            TimeOfDay::Night
        } else {
            TimeOfDay::Day
        })
        .with_terrain(if opts.off_road {
            Terrain::OffRoad
        } else {
            Terrain::Road
        })
        .with_camping(opts.camping);

    let seed = super::resolve_seed(opts.seed, opts.json);
    let config = GeneratorConfig::default()
        .with_seed(seed)
        .with_max_depth(opts.max_depth);
    let mut rng = config.random();

    let mut generator = EncounterGenerator::new(&repo, &repo).with_config(config);
    if let Some(hoards) = &hoards {
        generator = generator.with_treasure(hoards);
    }

    let encounter = generator
        .generate_encounter(&context, &mut rng)
        .map_err(|e| e.to_string())?;

    if opts.json {
        let json = serde_json::to_string_pretty(&encounter).map_err(|e| e.to_string())?;
        println!("{json}");
        return Ok(());
    }

    println!(
        "  {} {}",
        "Encounter".bold(),
        format!("({})", context.encounter_table()).dimmed()
    );
    println!();
    match &encounter {
        Encounter::Creature(c) => {
            let lair = if c.is_lair {
                format!(" {}", "(in lair)".yellow())
            } else {
                String::new()
            };
            println!("  {}{lair}", c.summary.bold());
            if let Some(activity) = &c.activity {
                println!("  Activity: {activity}");
            }
            if let Some(reaction) = &c.reaction {
                println!("  Reaction: {reaction}");
            }
            println!("  Distance: {} ft", c.distance_feet);
            println!("  Surprise: {}", c.surprise);
            if let Some(possessions) = &c.possessions {
                println!("  Possessions: {possessions}");
            }
            if let Some(treasure) = &c.treasure {
                println!();
                super::print_treasure(treasure);
            }
        }
        Encounter::Structure { name, activity } => {
            println!("  {}", name.bold());
            if activity != name {
                println!("  {activity}");
            }
        }
    }
    Ok(())
}
