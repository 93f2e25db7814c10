use std::path::Path;

use comfy_table::{ContentArrangement, Table};

use hw_core::TableRepository;

pub fn run(dir: &Path) -> Result<(), String> {
    let repo = super::load_data(dir)?;
    let tables = repo.list_tables().map_err(|e| e.to_string())?;

    if tables.is_empty() {
        println!("  No tables found.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Die", "Entries"]);

    for t in &tables {
        table.add_row(vec![t.name.clone(), t.die.clone(), t.entries.len().to_string()]);
    }

    println!("{table}");
    println!();
    println!(
        "  {} tables, {} creatures",
        tables.len(),
        repo.creature_count()
    );

    Ok(())
}
