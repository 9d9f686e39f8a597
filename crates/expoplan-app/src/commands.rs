//! Subcommand bodies, kept free of argument parsing so they can be tested.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use expoplan_core::storage::Storage;
use expoplan_core::{BoothStatus, Canvas, Plan};

/// Read and parse a plan file.
pub fn read_plan(path: &Path) -> Result<Plan> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    let plan = Plan::import(&bytes).with_context(|| format!("failed to import {}", path.display()))?;
    log::info!("Loaded {} ({} booths)", path.display(), plan.booths.len());
    Ok(plan)
}

/// Human-readable overview of a plan.
pub fn summarize(plan: &Plan) -> String {
    let mut out = format!("Booths: {}\n", plan.booths.len());
    for status in BoothStatus::ALL {
        let count = plan.booths.iter().filter(|b| b.status == status).count();
        out.push_str(&format!("  {}: {count}\n", status.label()));
    }
    out.push_str(&format!("Companies: {}\n", plan.companies.len()));
    for company in plan.companies.iter() {
        let booths = plan
            .booths
            .iter()
            .filter(|b| b.company_id.as_ref().is_some_and(|r| r.id() == company.id()))
            .count();
        out.push_str(&format!("  {} ({booths} booths)\n", company.name));
    }
    let orphans = plan.orphaned_booths().count();
    if orphans > 0 {
        out.push_str(&format!("Booths with a deleted company: {orphans}\n"));
    }
    out
}

/// Info text of every booth, in paint order.
pub fn booth_summaries(plan: Plan) -> Vec<String> {
    let canvas = Canvas::with_plan(plan);
    canvas
        .plan
        .booths
        .iter()
        .filter_map(|booth| canvas.booth_summary(booth.id()))
        .collect()
}

/// Stored plan ids.
pub async fn list(storage: &dyn Storage) -> Result<Vec<String>> {
    storage.list().await.context("failed to list stored plans")
}

/// Import a plan file into storage. Returns the id it was stored under.
pub async fn store(storage: &dyn Storage, file: &Path, id: Option<String>) -> Result<String> {
    let plan = read_plan(file)?;
    let id = match id.or_else(|| file.file_stem()?.to_str().map(str::to_string)) {
        Some(id) if !id.trim().is_empty() => id,
        _ => bail!("cannot derive a plan id from {}; pass --id", file.display()),
    };
    storage
        .save(&id, &plan)
        .await
        .with_context(|| format!("failed to store plan {id}"))?;
    Ok(id)
}

/// Write a stored plan to `out` as exported JSON.
pub async fn fetch(storage: &dyn Storage, id: &str, out: &Path) -> Result<()> {
    let plan = storage
        .load(id)
        .await
        .with_context(|| format!("failed to load plan {id}"))?;
    let bytes = plan.export()?;
    fs::write(out, bytes).with_context(|| format!("failed to write {}", out.display()))?;
    Ok(())
}

/// Delete a stored plan.
pub async fn delete(storage: &dyn Storage, id: &str) -> Result<()> {
    if !storage.exists(id).await? {
        bail!("no stored plan named {id}");
    }
    storage
        .delete(id)
        .await
        .with_context(|| format!("failed to delete plan {id}"))
}
