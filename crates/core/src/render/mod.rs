//! Ruleset-driven order summary rendering.
//!
//! Display copy lives in an external JSON document, compiled once into
//! per-shape line templates. Rendering is best-effort end to end: shapes the
//! document does not cover fall back to a generic line, and a document that
//! fails to load is replaced by a built-in minimal ruleset.

pub mod ruleset;
mod template;

use std::path::Path;

use crate::domain::order::{OrderKind, OrderRecord};

use ruleset::{CompiledLine, CompiledRuleset, CompiledShape, RulesetDoc, RulesetOrigin};
use template::VarScope;

/// Renders order summaries through a compiled ruleset. Construction never
/// fails: a document that cannot be loaded engages the built-in fallback and
/// the origin records why.
pub struct SummaryRenderer {
    ruleset: CompiledRuleset,
    origin: RulesetOrigin,
}

impl SummaryRenderer {
    pub fn new(doc: &RulesetDoc) -> Self {
        Self { ruleset: doc.compile(), origin: RulesetOrigin::Inline }
    }

    pub fn from_file(path: &Path) -> Self {
        match RulesetDoc::from_file(path) {
            Ok(doc) => {
                Self { ruleset: doc.compile(), origin: RulesetOrigin::File(path.to_path_buf()) }
            }
            Err(error) => Self {
                ruleset: RulesetDoc::fallback().compile(),
                origin: RulesetOrigin::Fallback {
                    path: path.to_path_buf(),
                    reason: error.to_string(),
                },
            },
        }
    }

    pub fn fallback() -> Self {
        Self { ruleset: RulesetDoc::fallback().compile(), origin: RulesetOrigin::Builtin }
    }

    pub fn origin(&self) -> &RulesetOrigin {
        &self.origin
    }

    /// Render the full tab. An empty tab returns the configured empty-order
    /// message verbatim; otherwise the header plus one numbered block per
    /// record, in arrival order. Pure with respect to the records: rendering
    /// twice yields the same text.
    pub fn render(&self, records: &[OrderRecord]) -> String {
        if records.is_empty() {
            return self.ruleset.empty_order_message.clone();
        }

        let blocks: Vec<String> = records
            .iter()
            .enumerate()
            .map(|(index, record)| self.render_record(record, index + 1))
            .collect();
        format!("{}\n{}", self.ruleset.summary_header, blocks.join("\n"))
    }

    fn render_record(&self, record: &OrderRecord, order_number: usize) -> String {
        let scope = self.scope_for(record, order_number);
        let Some(shape) = self.shape_for(record) else {
            return self.ruleset.unknown_order.render(&scope);
        };

        let mut lines = vec![shape.header.render(&scope)];
        for line in &shape.lines {
            match line {
                CompiledLine::Plain(template) => {
                    push_unless_blank(&mut lines, template.render(&scope));
                }
                CompiledLine::PerTopping(template) => {
                    let Some(toppings) = &scope.toppings else { continue };
                    for topping_id in toppings {
                        let mut topping_scope = scope.clone();
                        topping_scope.topping_id = Some(*topping_id);
                        push_unless_blank(&mut lines, template.render(&topping_scope));
                    }
                }
            }
        }
        lines.join("\n")
    }

    fn shape_for(&self, record: &OrderRecord) -> Option<&CompiledShape> {
        match &record.kind {
            OrderKind::Single(item) => self.ruleset.single_formats.get(&item.category()),
            _ => record.set_type().and_then(|set_type| self.ruleset.set_formats.get(&set_type)),
        }
    }

    fn scope_for(&self, record: &OrderRecord, order_number: usize) -> VarScope {
        let mut scope =
            VarScope { order_number, quantity: record.quantity, ..VarScope::default() };

        if let Some(burger) = record.burger() {
            scope.burger_id = Some(burger.menu_id.0);
            scope.toppings =
                burger.toppings.as_ref().map(|ids| ids.iter().map(|id| id.0).collect());
        }
        if let Some(chicken) = record.chicken() {
            scope.chicken_id = Some(chicken.menu_id.0);
        }
        if let Some(side) = record.side() {
            scope.side_id = Some(side.menu_id.0);
        }
        if let Some(drink) = record.drink() {
            scope.drink_id = Some(drink.menu_id.0);
        }
        if let Some(sauce) = record.sauce() {
            scope.sauce_id = Some(sauce.menu_id.0);
            scope.sauce_quantity = Some(sauce.quantity);
        }

        // Suffixes resolve against the slot values bound above.
        if scope.quantity > 1 {
            scope.quantity_suffix = self.ruleset.quantity_suffix.render(&scope);
        }
        if scope.toppings.is_some() {
            scope.toppings_suffix = self.ruleset.toppings_suffix.render(&scope);
        }
        scope
    }
}

// Item lines that render to nothing but whitespace are dropped rather than
// left as stray blank lines.
fn push_unless_blank(lines: &mut Vec<String>, rendered: String) {
    if !rendered.trim().is_empty() {
        lines.push(rendered);
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::domain::order::{
        Burger, Chicken, Drink, MenuId, OrderRecord, Sauce, Side, SingleItem,
    };

    use super::ruleset::{RulesetDoc, RulesetOrigin};
    use super::SummaryRenderer;

    fn renderer() -> SummaryRenderer {
        let doc: RulesetDoc = serde_json::from_str(
            r#"{
                "summary_header": "=== Order Summary ===",
                "empty_order_message": "No orders yet.",
                "unknown_order_format": "{order_number}. (unrecognized order)",
                "suffix_rules": { "quantity": " x{quantity}", "toppings": " [{toppings}]" },
                "order_formats": {
                    "set": {
                        "burger_set": {
                            "header": "{order_number}. Burger Set{quantity_suffix}",
                            "items": [
                                { "template": "   - Burger: menu {burger_id}" },
                                { "template": "     + Topping: menu {topping_id}", "kind": "toppings" },
                                { "template": "   - Side: menu {side_id}", "condition": "has_side" },
                                { "template": "   - Drink: menu {drink_id}", "condition": "has_drink" }
                            ]
                        }
                    },
                    "single": {
                        "drink": { "header": "{order_number}. Drink: menu {drink_id}{quantity_suffix}" },
                        "burger": { "header": "{order_number}. Burger: menu {burger_id}{toppings_suffix}" }
                    }
                }
            }"#,
        )
        .expect("test ruleset");
        SummaryRenderer::new(&doc)
    }

    fn burger_set(quantity: u32) -> OrderRecord {
        OrderRecord::burger_set(
            Burger::plain(MenuId(2)),
            Side { menu_id: MenuId(10) },
            Drink { menu_id: MenuId(15) },
            quantity,
        )
    }

    #[test]
    fn empty_tab_renders_the_configured_message_verbatim() {
        assert_eq!(renderer().render(&[]), "No orders yet.");
    }

    #[test]
    fn records_are_numbered_from_one_in_arrival_order() {
        let records = [
            burger_set(1),
            OrderRecord::single(SingleItem::Drink(Drink { menu_id: MenuId(16) }), 1),
        ];

        let summary = renderer().render(&records);
        let lines: Vec<&str> = summary.lines().collect();

        assert_eq!(lines[0], "=== Order Summary ===");
        assert_eq!(lines[1], "1. Burger Set");
        assert!(lines.last().expect("last line").starts_with("2. Drink: menu 16"));
    }

    #[test]
    fn quantity_suffix_appears_only_above_one() {
        let summary = renderer().render(&[burger_set(3)]);

        assert!(summary.contains("1. Burger Set x3"));

        let single = renderer().render(&[burger_set(1)]);
        assert!(single.contains("1. Burger Set\n"));
        assert!(!single.contains("x1"));
    }

    #[test]
    fn each_topping_expands_to_its_own_line() {
        let record = OrderRecord::burger_set(
            Burger::new(MenuId(2), vec![MenuId(3), MenuId(5)]),
            Side { menu_id: MenuId(10) },
            Drink { menu_id: MenuId(15) },
            1,
        );

        let summary = renderer().render(&[record]);
        let topping_lines: Vec<&str> =
            summary.lines().filter(|line| line.contains("+ Topping")).collect();

        assert_eq!(
            topping_lines,
            vec!["     + Topping: menu 3", "     + Topping: menu 5"]
        );
    }

    #[test]
    fn toppings_suffix_renders_on_shapes_that_use_it() {
        let record = OrderRecord::single(
            SingleItem::Burger(Burger::new(MenuId(2), vec![MenuId(3)])),
            1,
        );

        let summary = renderer().render(&[record]);
        assert!(summary.contains("1. Burger: menu 2 [3]"));
    }

    #[test]
    fn conditional_lines_drop_when_their_slot_is_absent() {
        let record = OrderRecord::single(SingleItem::Drink(Drink { menu_id: MenuId(15) }), 2);

        let summary = renderer().render(&[record]);
        assert_eq!(summary, "=== Order Summary ===\n1. Drink: menu 15 x2");
    }

    #[test]
    fn shapes_missing_from_the_ruleset_render_the_unknown_order_line() {
        let record = OrderRecord::single(
            SingleItem::Sauce(Sauce { menu_id: MenuId(40), quantity: 1 }),
            1,
        );

        let summary = renderer().render(&[record]);
        assert_eq!(summary, "=== Order Summary ===\n1. (unrecognized order)");
    }

    #[test]
    fn fallback_renderer_keeps_every_record_visible() {
        let renderer = SummaryRenderer::fallback();
        assert_eq!(renderer.origin(), &RulesetOrigin::Builtin);

        let records = [
            burger_set(1),
            OrderRecord::single(SingleItem::Chicken(Chicken { menu_id: MenuId(31) }), 1),
        ];
        let summary = renderer.render(&records);

        assert!(summary.contains("1. (unrecognized order)"));
        assert!(summary.contains("2. (unrecognized order)"));
    }

    #[test]
    fn rendering_is_pure_and_repeatable() {
        let renderer = renderer();
        let records = [burger_set(2)];

        assert_eq!(renderer.render(&records), renderer.render(&records));
    }

    #[test]
    fn missing_file_engages_the_fallback_and_records_why() {
        let renderer = SummaryRenderer::from_file(Path::new("no/such/ruleset.json"));

        match renderer.origin() {
            RulesetOrigin::Fallback { path, reason } => {
                assert!(path.ends_with("ruleset.json"));
                assert!(reason.contains("could not read"));
            }
            other => panic!("expected fallback origin, got {other:?}"),
        }
        assert_eq!(renderer.render(&[]), "No orders yet.");
    }
}
