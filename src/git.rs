use anyhow::{Context, Result};
use git2::{BranchType, Repository};
use std::path::Path;

/// local branch names, sorted
/// a repository without commits has no branches yet
pub fn local_branches(path: &Path) -> Result<Vec<String>> {
    let repo = Repository::discover(path)
        .with_context(|| format!("not in a git repository: {}", path.display()))?;

    let branches = repo
        .branches(Some(BranchType::Local))
        .context("failed to list branches")?;

    let mut names = Vec::new();
    for branch in branches {
        let (branch, _) = branch.context("failed to read branch")?;
        // skip names that aren't valid utf-8
        if let Some(name) = branch.name().context("failed to read branch name")? {
            names.push(name.to_string());
        }
    }
    names.sort();

    Ok(names)
}
