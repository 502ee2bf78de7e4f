use std::collections::BTreeSet;
use std::path::PathBuf;

use orderly_core::config::AppConfig;
use orderly_core::{ItemCategory, RulesetDoc, SetType};

use super::CommandResult;

/// Parse the document and report shape coverage. Unknown format keys are
/// legal (the renderer never consults them) but worth surfacing here.
pub fn run(config: &AppConfig, path: Option<PathBuf>) -> CommandResult {
    let path = path.unwrap_or_else(|| config.ruleset.path.clone());
    let doc = match RulesetDoc::from_file(&path) {
        Ok(doc) => doc,
        Err(error) => return CommandResult::failure(format!("ruleset invalid: {error}"), 2),
    };

    let covered_sets: Vec<&str> = SetType::ALL
        .iter()
        .filter(|set_type| doc.order_formats.set.contains_key(set_type.as_key()))
        .map(SetType::as_key)
        .collect();
    let missing_sets: Vec<&str> = SetType::ALL
        .iter()
        .filter(|set_type| !doc.order_formats.set.contains_key(set_type.as_key()))
        .map(SetType::as_key)
        .collect();

    let covered_singles: Vec<&str> = ItemCategory::ALL
        .iter()
        .filter(|category| doc.order_formats.single.contains_key(category.as_key()))
        .map(ItemCategory::as_key)
        .collect();
    let missing_singles: Vec<&str> = ItemCategory::ALL
        .iter()
        .filter(|category| !doc.order_formats.single.contains_key(category.as_key()))
        .map(ItemCategory::as_key)
        .collect();

    let unknown_keys: BTreeSet<&str> = doc
        .order_formats
        .set
        .keys()
        .filter(|key| SetType::from_key(key).is_none())
        .chain(
            doc.order_formats
                .single
                .keys()
                .filter(|key| ItemCategory::from_key(key).is_none()),
        )
        .map(String::as_str)
        .collect();

    let mut lines = vec![format!("ruleset `{}` is valid", path.display())];
    lines.push(format!("  summary_header: {}", doc.summary_header));
    lines.push(format!("  empty_order_message: {}", doc.empty_order_message));
    lines.push(format!("  set formats: {}", join_or_none(&covered_sets)));
    lines.push(format!("  single formats: {}", join_or_none(&covered_singles)));
    if !missing_sets.is_empty() {
        lines.push(format!("  missing set formats: {}", missing_sets.join(", ")));
    }
    if !missing_singles.is_empty() {
        lines.push(format!("  missing single formats: {}", missing_singles.join(", ")));
    }
    if !unknown_keys.is_empty() {
        let unknown: Vec<&str> = unknown_keys.into_iter().collect();
        lines.push(format!("  ignored format keys: {}", unknown.join(", ")));
    }

    CommandResult::success(lines.join("\n"))
}

fn join_or_none(keys: &[&str]) -> String {
    if keys.is_empty() {
        "(none)".to_string()
    } else {
        keys.join(", ")
    }
}
