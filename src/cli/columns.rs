use std::path::PathBuf;

use anyhow::Result;

use annocheck::check::{CheckParams, ClassScope, LibraryMode};
use annocheck::table::Delimiter;

use super::check::load_table;

/// Report which columns each mode needs and whether the table has them
pub fn run(table: PathBuf, delimiter: Option<Delimiter>) -> Result<()> {
    let features = load_table(&table, delimiter)?;

    println!("Feature table: {}", table.display());
    println!("Rows: {}, columns: {}", features.len(), features.headers().len());

    let mut ready = Vec::new();
    for library_mode in [LibraryMode::Regular, LibraryMode::Analogue] {
        for class_scope in [ClassScope::All, ClassScope::PerLevel] {
            let params = CheckParams {
                library_mode,
                class_scope,
                ..Default::default()
            };
            let missing: Vec<String> = params
                .required_columns()
                .into_iter()
                .filter(|c| !features.has_column(c))
                .collect();

            println!();
            println!("{} mode, {} classes:", library_mode, class_scope);
            if missing.is_empty() {
                println!("  all required columns present");
                ready.push(format!("{}/{}", library_mode, class_scope));
            } else {
                for column in &missing {
                    println!("  missing: {}", column);
                }
            }
        }
    }

    println!();
    if ready.is_empty() {
        println!("No mode can run on this table");
    } else {
        println!("Runnable: {}", ready.join(", "));
    }
    Ok(())
}
