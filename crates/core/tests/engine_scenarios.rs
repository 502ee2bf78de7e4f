use std::fs;
use std::path::PathBuf;

use serde_json::json;
use tempfile::NamedTempFile;

use orderly_core::{
    MenuId, OrderKind, OrderSession, RulesetOrigin, SetType, SummaryRenderer, ORDER_MARKER,
};

fn shipped_ruleset_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../config/order_format_rules.json")
}

fn session() -> OrderSession {
    let renderer = SummaryRenderer::from_file(&shipped_ruleset_path());
    assert!(
        matches!(renderer.origin(), RulesetOrigin::File(_)),
        "shipped ruleset should load cleanly, got {:?}",
        renderer.origin()
    );
    OrderSession::new(renderer)
}

#[test]
fn reply_round_trip_appends_one_burger_set_with_house_defaults() {
    let mut session = session();
    let reply = format!("Done! {ORDER_MARKER}\nTYPE: set\nBURGER: 2\nQUANTITY: 1");

    let processed = session.process_reply(&reply);

    assert_eq!(processed.visible, "Done!");
    assert_eq!(processed.report.appended, 1);
    assert!(processed.report.skipped.is_empty());

    let record = &session.orders()[0];
    assert_eq!(record.set_type(), Some(SetType::BurgerSet));
    assert_eq!(record.quantity, 1);
    assert_eq!(record.burger().map(|slot| slot.menu_id), Some(MenuId(2)));
    assert_eq!(record.side().map(|slot| slot.menu_id), Some(MenuId(10)));
    assert_eq!(record.drink().map(|slot| slot.menu_id), Some(MenuId(15)));

    let summary = session.render_summary();
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(
        lines,
        vec![
            "=== Order Summary ===",
            "1. Burger Set",
            "   - Burger: menu 2",
            "   - Side: menu 10",
            "   - Drink: menu 15",
        ]
    );
}

#[test]
fn consecutive_sections_are_numbered_in_arrival_order() {
    let mut session = session();
    let reply = format!(
        "Both added!\n{ORDER_MARKER}\nTYPE: set\nBURGER: 2\n{ORDER_MARKER}\nTYPE: single\nDRINK: 16\nQUANTITY: 2"
    );

    assert_eq!(session.extract_and_append(&reply), 2);

    let summary = session.render_summary();
    assert!(summary.contains("1. Burger Set"));
    assert!(summary.contains("2. Drink: menu 16 x2"));
}

#[test]
fn toppings_expand_under_set_headers_and_suffix_single_headers() {
    let mut session = session();
    let reply = format!(
        "{ORDER_MARKER}\nTYPE: set\nBURGER: 2\nTOPPINGS: 3,x,5,\n{ORDER_MARKER}\nTYPE: single\nBURGER: 2\nTOPPINGS: 3"
    );

    assert_eq!(session.extract_and_append(&reply), 2);

    let summary = session.render_summary();
    assert!(summary.contains("     + Topping: menu 3"));
    assert!(summary.contains("     + Topping: menu 5"));
    assert!(summary.contains("2. Burger: menu 2 + toppings 3"));
}

#[test]
fn chicken_packs_render_their_fixed_sauce_portions() {
    let mut session = session();
    let reply = format!(
        "{ORDER_MARKER}\nTYPE: set\nSET_TYPE: chicken_full_pack\nCHICKEN: 31\n{ORDER_MARKER}\nTYPE: set\nSET_TYPE: chicken_half_pack\nCHICKEN: 31"
    );

    assert_eq!(session.extract_and_append(&reply), 2);

    let summary = session.render_summary();
    assert!(summary.contains("1. Chicken Full Pack"));
    assert!(summary.contains("   - Sauce: menu 40 x2"));
    assert!(summary.contains("2. Chicken Half Pack"));
    assert!(summary.contains("   - Sauce: menu 40 x1"));
}

#[test]
fn malformed_sections_skip_while_siblings_append() {
    let mut session = session();
    let reply = format!(
        "{ORDER_MARKER}\nTYPE: set\nSIDE: 10\n{ORDER_MARKER}\nTYPE: single\nDRINK: 15"
    );

    let report = session.extract(&reply);

    assert_eq!(report.appended, 1);
    assert_eq!(report.skipped.len(), 1);
    assert!(matches!(session.orders()[0].kind, OrderKind::Single(_)));
}

#[test]
fn empty_tab_returns_the_configured_message_exactly() {
    let session = session();

    assert_eq!(session.render_summary(), "You haven't ordered anything yet.");
}

#[test]
fn clear_resets_to_the_empty_message() {
    let mut session = session();
    session.extract_and_append(&format!("{ORDER_MARKER}\nTYPE: single\nDRINK: 15"));
    assert_eq!(session.orders().len(), 1);

    session.clear();

    assert_eq!(session.render_summary(), "You haven't ordered anything yet.");
}

#[test]
fn rendering_the_same_tab_twice_is_identical() {
    let mut session = session();
    session.extract_and_append(&format!(
        "{ORDER_MARKER}\nTYPE: set\nBURGER: 2\nTOPPINGS: 3,5\nQUANTITY: 2"
    ));

    assert_eq!(session.render_summary(), session.render_summary());
}

#[test]
fn corrupt_ruleset_degrades_to_fallback_without_losing_orders() {
    let file = NamedTempFile::new().expect("temp file");
    fs::write(file.path(), "{ this is not json").expect("write");

    let renderer = SummaryRenderer::from_file(file.path());
    assert!(matches!(renderer.origin(), RulesetOrigin::Fallback { .. }));

    let mut session = OrderSession::new(renderer);
    assert_eq!(
        session.extract_and_append(&format!("{ORDER_MARKER}\nTYPE: set\nBURGER: 2")),
        1
    );

    let summary = session.render_summary();
    assert!(summary.contains("1. (unrecognized order)"));
}

#[test]
fn export_mirrors_the_tab_shape() {
    let mut session = session();
    session.extract_and_append(&format!(
        "{ORDER_MARKER}\nTYPE: set\nBURGER: 2\nTOPPINGS: 3,5\n{ORDER_MARKER}\nTYPE: single\nSAUCE: 41"
    ));

    let value: serde_json::Value =
        serde_json::from_str(&session.export_json()).expect("valid export json");

    assert_eq!(
        value,
        json!([
            {
                "order_type": "set",
                "set_type": "burger_set",
                "quantity": 1,
                "burger": { "menu_id": 2, "toppings": [3, 5] },
                "side": { "menu_id": 10 },
                "drink": { "menu_id": 15 }
            },
            {
                "order_type": "single",
                "quantity": 1,
                "sauce": { "menu_id": 41, "quantity": 1 }
            }
        ])
    );
}
