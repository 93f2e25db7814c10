use std::path::Path;

use hw_core::GenerationContext;
use hw_encounter::{EncounterGenerator, GeneratorConfig, TreasureGenerator};

pub fn run(dir: &Path, name: &str, region: Option<&str>, seed: Option<u64>) -> Result<(), String> {
    let repo = super::load_data(dir)?;
    let hoards = if repo.has_treasure_tables() {
        Some(TreasureGenerator::from_repository(&repo).map_err(|e| e.to_string())?)
    } else {
        None
    };

    let context = region.map(GenerationContext::new);
    let config = GeneratorConfig::default().with_seed(super::resolve_seed(seed, false));
    let mut rng = config.random();

    let mut generator = EncounterGenerator::new(&repo, &repo).with_config(config);
    if let Some(hoards) = &hoards {
        generator = generator.with_treasure(hoards);
    }

    let result = generator
        .generate(name, context.as_ref(), &mut rng)
        .map_err(|e| e.to_string())?;
    super::print_result(&result);
    Ok(())
}
