//! Order extraction from captured assistant replies.
//!
//! A reply may embed any number of structured order sections, each opened by
//! the `[ORDER_COMPLETE]` sentinel and holding `KEY: VALUE` lines. The scan
//! splits the reply on the sentinel, parses each section's fields, and
//! composes a typed record per section; malformed sections are reported, not
//! fatal.

pub mod composer;
pub mod fields;

pub use composer::{
    compose, SkipReason, DEFAULT_DRINK_ID, DEFAULT_SAUCE_ID, DEFAULT_SIDE_ID,
};
pub use fields::SectionFields;

use crate::domain::order::OrderRecord;

/// Sentinel the assistant prompt instructs the model to emit ahead of each
/// structured order section.
pub const ORDER_MARKER: &str = "[ORDER_COMPLETE]";

/// The part of a reply meant for the user: everything before the first
/// marker, trimmed. A reply without a marker is returned whole (trimmed).
pub fn visible_reply(reply: &str) -> &str {
    match reply.find(ORDER_MARKER) {
        Some(index) => reply[..index].trim(),
        None => reply.trim(),
    }
}

/// Raw order sections of a reply. Each marker occurrence opens a section that
/// runs to the next marker or the end of the reply; a markerless reply has no
/// sections.
pub fn order_sections(reply: &str) -> impl Iterator<Item = &str> {
    reply.split(ORDER_MARKER).skip(1)
}

/// Compose every section of a reply independently. One malformed section
/// never affects its siblings.
pub fn extract_orders(reply: &str) -> Vec<Result<OrderRecord, SkipReason>> {
    order_sections(reply).map(|section| compose(&SectionFields::parse(section))).collect()
}

#[cfg(test)]
mod tests {
    use crate::domain::order::{MenuId, OrderKind};

    use super::{extract_orders, order_sections, visible_reply, SkipReason, ORDER_MARKER};

    #[test]
    fn visible_reply_strips_from_the_first_marker() {
        let reply = format!("Anything else?  {ORDER_MARKER}\nTYPE: single\nDRINK: 15");

        assert_eq!(visible_reply(&reply), "Anything else?");
    }

    #[test]
    fn markerless_reply_is_returned_whole() {
        assert_eq!(visible_reply("  What would you like today?  "), "What would you like today?");
        assert_eq!(extract_orders("What would you like today?"), Vec::new());
    }

    #[test]
    fn every_marker_occurrence_opens_a_section() {
        let reply = format!(
            "Got it!\n{ORDER_MARKER}\nTYPE: set\nBURGER: 2\n{ORDER_MARKER}\nTYPE: single\nDRINK: 15"
        );

        assert_eq!(order_sections(&reply).count(), 2);

        let records = extract_orders(&reply);
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(Result::is_ok));
    }

    #[test]
    fn malformed_sections_skip_without_touching_siblings() {
        let reply = format!(
            "{ORDER_MARKER}\nTYPE: set\nSIDE: 10\n{ORDER_MARKER}\nTYPE: single\nDRINK: 15"
        );

        let records = extract_orders(&reply);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0], Err(SkipReason::MissingField("BURGER")));

        let record = records[1].as_ref().expect("drink record");
        assert!(matches!(record.kind, OrderKind::Single(_)));
        assert_eq!(record.drink().map(|drink| drink.menu_id), Some(MenuId(15)));
    }

    #[test]
    fn text_on_the_marker_line_belongs_to_the_section() {
        let reply = format!("Sure!{ORDER_MARKER} TYPE: single\nDRINK: 15");

        let records = extract_orders(&reply);
        assert_eq!(records.len(), 1);
        assert!(records[0].is_ok());
    }
}
