use anyhow::{Context, Result};
use git_item_status::cli::Cli;
use git_item_status::{
    ItemOperation, ItemRow, TranslationSet, error, git, info, loader_elapsed, render_row, status,
    warning,
};
use std::collections::HashMap;
use std::time::SystemTime;

fn main() {
    if let Err(e) = run() {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse_args();

    if cli.no_color {
        colored::control::set_override(false);
    }

    let tr = TranslationSet::load_or_default(cli.translations.as_deref())?;
    let branches = git::local_branches(&cli.path)?;

    // later assignments for the same branch win
    let mut operations: HashMap<String, ItemOperation> = HashMap::new();
    for (name, op) in cli.operations()? {
        if !branches.contains(&name) {
            warning!("no local branch named {}", name);
            continue;
        }
        operations.insert(name, op);
    }

    let rows: Vec<ItemRow> = branches
        .iter()
        .map(|name| {
            let op = operations.get(name).copied().unwrap_or_default();
            ItemRow::new(name, op, &tr)
        })
        .collect();

    if cli.json {
        let json = serde_json::to_string_pretty(&rows).context("failed to serialise rows")?;
        info!(json);
        return Ok(());
    }

    if rows.is_empty() {
        status!("no branches yet");
        return Ok(());
    }

    let elapsed = loader_elapsed(SystemTime::now());
    for row in &rows {
        info!(render_row(&row.name, row.operation, &tr, elapsed));
    }

    Ok(())
}
