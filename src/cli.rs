use crate::operation::ItemOperation;
use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// git-item-status: list local branches with the status of any in-flight operation
#[derive(Parser, Debug)]
#[command(
    name = "git-item-status",
    about,
    long_about = None,
    disable_version_flag = true
)]
pub struct Cli {
    /// in-flight operations as branch=operation (pushing, pulling, fast-forwarding, deleting)
    #[arg(value_name = "ASSIGNMENTS")]
    pub assignments: Vec<String>,

    /// json file with translated status phrases
    #[arg(long, value_name = "FILE")]
    pub translations: Option<PathBuf>,

    /// print rows as json
    #[arg(long)]
    pub json: bool,

    /// disable coloured output
    #[arg(long)]
    pub no_color: bool,

    /// run as if started in this directory
    #[arg(short = 'C', value_name = "PATH", default_value = ".")]
    pub path: PathBuf,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn operations(&self) -> Result<Vec<(String, ItemOperation)>> {
        self.assignments
            .iter()
            .map(|assignment| parse_assignment(assignment))
            .collect()
    }
}

/// parse "branch=operation"; the branch name is everything before the last '='
pub fn parse_assignment(assignment: &str) -> Result<(String, ItemOperation)> {
    let (name, op) = assignment
        .rsplit_once('=')
        .with_context(|| format!("expected branch=operation, got: {assignment}"))?;
    if name.is_empty() {
        bail!("missing branch name in: {assignment}");
    }
    let op = op
        .parse::<ItemOperation>()
        .with_context(|| format!("invalid assignment: {assignment}"))?;
    Ok((name.to_string(), op))
}
