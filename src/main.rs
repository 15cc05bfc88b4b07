mod cli;
mod observability;
mod ui;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands};
use menu_core::{
    CatalogConfig, CatalogError, MenuCatalog, MenuItemDraft, MenuItemId, create_event_store,
};
use observability::init_logging;
use std::path::Path;
use tracing::{info, warn};

fn load_config(path: Option<&Path>) -> anyhow::Result<CatalogConfig> {
    match path {
        Some(path) => CatalogConfig::from_file(path)
            .with_context(|| format!("loading configuration from {}", path.display())),
        None => Ok(CatalogConfig::default()),
    }
}

/// Message shown next to a rejected form, naming the field when there is one.
fn describe_rejection(err: &CatalogError) -> String {
    match err.field() {
        Some(field) => format!("{field}: {err}"),
        None => err.to_string(),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Test { config_file }) = &cli.command {
        let config = load_config(Some(config_file.as_path()))?;
        println!("Configuration OK: {:?}", config);
        return Ok(());
    }

    let config = load_config(cli.config.as_deref())?;
    init_logging(&config.log);
    info!("Starting chef-menu with {:?} ids", config.id_strategy);

    let (mut events, sender) = create_event_store();
    let mut catalog = MenuCatalog::from_config(&config)?.with_events(sender);

    for fields in cli.add.chunks(4) {
        let [name, description, course, price] = fields else {
            continue;
        };
        if let Err(err) = catalog.add(&MenuItemDraft::new(
            name.as_str(),
            description.as_str(),
            course.as_str(),
            price.as_str(),
        )) {
            eprintln!("Error: {}", describe_rejection(&err));
        }
    }

    for id in &cli.remove {
        if !catalog.remove(&MenuItemId::from(id.as_str())) {
            warn!("No dish with id {} to remove", id);
        }
    }

    events.collect_pending();
    for event in events.events() {
        println!("{}", event.confirmation());
    }

    let currency = config.currency_symbol.as_str();
    print!(
        "{}",
        ui::render_menu(&catalog.filter_by_course(&cli.course), currency)
    );
    println!();
    print!("{}", ui::render_summary(&catalog.summary(), currency));

    Ok(())
}
