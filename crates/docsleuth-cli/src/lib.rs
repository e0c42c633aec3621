/// DocSleuth CLI — terminal frontend.
///
/// This crate contains all presentation code: argument parsing, command
/// dispatch, table rendering, and CSV export. Business logic lives in
/// `docsleuth-core`.
pub mod args;
pub mod commands;
pub mod export;
pub mod render;

use anyhow::Result;
use args::{Cli, Commands};
use docsleuth_core::catalog::{JsonCatalogStore, ManagedCatalog};
use docsleuth_core::classify::ClassifyOptions;

/// Run the parsed command line to completion.
///
/// The catalog is opened up front for every command: `scan` reads it,
/// the editing commands mutate it, and a missing catalog file is seeded
/// with the built-in defaults either way.
pub fn run(cli: Cli) -> Result<()> {
    let store = JsonCatalogStore::new(&cli.catalog);
    let mut managed = ManagedCatalog::open(Box::new(store));

    match cli.command {
        Commands::Scan {
            path,
            no_name_match,
            no_content_match,
            recognised,
            csv,
        } => {
            let options = ClassifyOptions {
                match_names: !no_name_match,
                match_content: !no_content_match,
            };
            commands::scan::run(&path, managed.catalog().clone(), options, recognised, csv)
        }
        Commands::Types => commands::catalog::types(&managed),
        Commands::Show { id } => commands::catalog::show(&managed, &id),
        Commands::AddTag { id, tag, area } => {
            commands::catalog::add_tag(&mut managed, &id, &tag, area.into())
        }
        Commands::RemoveTag { id, tag, area } => {
            commands::catalog::remove_tag(&mut managed, &id, &tag, area.into())
        }
        Commands::SetMask { id, mask } => commands::catalog::set_mask(&mut managed, &id, &mask),
    }
}
