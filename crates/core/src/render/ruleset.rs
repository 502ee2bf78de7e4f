use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::order::{ItemCategory, SetType};
use crate::render::template::Template;

pub use crate::render::template::LinePredicate;

#[derive(Debug, Error)]
pub enum RulesetError {
    #[error("could not read ruleset file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse ruleset file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: serde_json::Error },
}

/// Where the active ruleset came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RulesetOrigin {
    /// Loaded from the external document at this path.
    File(PathBuf),
    /// Supplied directly by the caller.
    Inline,
    /// Built-in minimal ruleset, explicitly requested.
    Builtin,
    /// Built-in minimal ruleset engaged because the external document failed
    /// to load.
    Fallback { path: PathBuf, reason: String },
}

/// The formatting ruleset as it appears on disk. Every field is optional in
/// the document; missing fields take the built-in values, so `{}` is a valid
/// (if spartan) ruleset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesetDoc {
    pub summary_header: String,
    pub empty_order_message: String,
    pub unknown_order_format: String,
    pub suffix_rules: SuffixRules,
    pub order_formats: OrderFormats,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuffixRules {
    pub quantity: String,
    pub toppings: String,
}

/// Formats keyed by set-type and item-category names. Keys outside the known
/// shapes are tolerated and never consulted.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderFormats {
    pub set: HashMap<String, ShapeFormat>,
    pub single: HashMap<String, ShapeFormat>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeFormat {
    pub header: String,
    #[serde(default)]
    pub items: Vec<ItemLine>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemLine {
    pub template: String,
    #[serde(default, skip_serializing_if = "ItemLineKind::is_plain")]
    pub kind: ItemLineKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<LinePredicate>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemLineKind {
    #[default]
    Plain,
    /// Rendered once per topping id with `{topping_id}` bound in turn.
    Toppings,
}

impl ItemLineKind {
    fn is_plain(&self) -> bool {
        matches!(self, Self::Plain)
    }
}

impl Default for RulesetDoc {
    fn default() -> Self {
        Self {
            summary_header: "=== Order Summary ===".to_string(),
            empty_order_message: "No orders yet.".to_string(),
            unknown_order_format: "{order_number}. (unrecognized order)".to_string(),
            suffix_rules: SuffixRules::default(),
            order_formats: OrderFormats::default(),
        }
    }
}

impl Default for SuffixRules {
    fn default() -> Self {
        Self {
            quantity: " x{quantity}".to_string(),
            toppings: " + toppings {toppings}".to_string(),
        }
    }
}

impl RulesetDoc {
    pub fn from_file(path: &Path) -> Result<Self, RulesetError> {
        let raw = fs::read_to_string(path)
            .map_err(|source| RulesetError::ReadFile { path: path.to_path_buf(), source })?;
        serde_json::from_str(&raw)
            .map_err(|source| RulesetError::ParseFile { path: path.to_path_buf(), source })
    }

    /// The built-in ruleset: generic header and empty-order copy, no shape
    /// formats. Every record renders through the unknown-order line, so a
    /// broken external document degrades the summary without losing orders.
    pub fn fallback() -> Self {
        Self::default()
    }

    pub(crate) fn compile(&self) -> CompiledRuleset {
        let mut set_formats = HashMap::new();
        for (key, shape) in &self.order_formats.set {
            if let Some(set_type) = SetType::from_key(key) {
                set_formats.insert(set_type, compile_shape(shape));
            }
        }

        let mut single_formats = HashMap::new();
        for (key, shape) in &self.order_formats.single {
            if let Some(category) = ItemCategory::from_key(key) {
                single_formats.insert(category, compile_shape(shape));
            }
        }

        CompiledRuleset {
            summary_header: self.summary_header.clone(),
            empty_order_message: self.empty_order_message.clone(),
            unknown_order: Template::parse(&self.unknown_order_format),
            quantity_suffix: Template::parse(&self.suffix_rules.quantity),
            toppings_suffix: Template::parse(&self.suffix_rules.toppings),
            set_formats,
            single_formats,
        }
    }
}

pub(crate) struct CompiledRuleset {
    pub summary_header: String,
    pub empty_order_message: String,
    pub unknown_order: Template,
    pub quantity_suffix: Template,
    pub toppings_suffix: Template,
    pub set_formats: HashMap<SetType, CompiledShape>,
    pub single_formats: HashMap<ItemCategory, CompiledShape>,
}

pub(crate) struct CompiledShape {
    pub header: Template,
    pub lines: Vec<CompiledLine>,
}

pub(crate) enum CompiledLine {
    Plain(Template),
    /// Expanded once per topping id; its presence check makes any attached
    /// condition redundant, so conditions are ignored here.
    PerTopping(Template),
}

fn compile_shape(shape: &ShapeFormat) -> CompiledShape {
    CompiledShape {
        header: Template::parse(&shape.header),
        lines: shape.items.iter().map(compile_line).collect(),
    }
}

fn compile_line(line: &ItemLine) -> CompiledLine {
    let template = Template::parse(&line.template);
    match line.kind {
        ItemLineKind::Toppings => CompiledLine::PerTopping(template),
        ItemLineKind::Plain => match line.condition {
            Some(predicate) => CompiledLine::Plain(Template::guarded(predicate, template)),
            None => CompiledLine::Plain(template),
        },
    }
}
