use serde::Serialize;

use crate::domain::order::{
    Burger, Chicken, Drink, OrderRecord, OrderType, Sauce, SetType, Side,
};

/// Flat projection of one record for machine consumers. Slots a record does
/// not carry are omitted from the serialized form, never emitted as null.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ExportedOrder {
    pub order_type: OrderType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_type: Option<SetType>,
    pub quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub burger: Option<Burger>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chicken: Option<Chicken>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<Side>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drink: Option<Drink>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sauce: Option<Sauce>,
}

impl From<&OrderRecord> for ExportedOrder {
    fn from(record: &OrderRecord) -> Self {
        Self {
            order_type: record.order_type(),
            set_type: record.set_type(),
            quantity: record.quantity,
            burger: record.burger().cloned(),
            chicken: record.chicken().copied(),
            side: record.side().copied(),
            drink: record.drink().copied(),
            sauce: record.sauce().copied(),
        }
    }
}

/// Export a whole tab in arrival order.
pub fn export_records(records: &[OrderRecord]) -> Vec<ExportedOrder> {
    records.iter().map(ExportedOrder::from).collect()
}
