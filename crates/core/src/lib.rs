pub mod config;
pub mod domain;
pub mod export;
pub mod extract;
pub mod render;
pub mod session;
pub mod store;

pub use domain::order::{
    Burger, Chicken, Drink, ItemCategory, MenuId, OrderKind, OrderRecord, OrderType, Sauce,
    SetType, Side, SingleItem,
};
pub use export::{export_records, ExportedOrder};
pub use extract::{
    compose, extract_orders, order_sections, visible_reply, SectionFields, SkipReason,
    ORDER_MARKER,
};
pub use render::ruleset::{RulesetDoc, RulesetError, RulesetOrigin};
pub use render::SummaryRenderer;
pub use session::{ExtractionReport, OrderSession, ProcessedReply};
pub use store::OrderStore;
