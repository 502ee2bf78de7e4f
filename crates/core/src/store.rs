use crate::domain::order::OrderRecord;

/// Append-only tab of composed orders for one conversation. Arrival order is
/// the rendering order; the only removal is a whole-tab reset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrderStore {
    records: Vec<OrderRecord>,
}

impl OrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: OrderRecord) {
        self.records.push(record);
    }

    pub fn records(&self) -> &[OrderRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::order::{Drink, MenuId, OrderRecord, SingleItem};

    use super::OrderStore;

    fn drink(menu_id: u32) -> OrderRecord {
        OrderRecord::single(SingleItem::Drink(Drink { menu_id: MenuId(menu_id) }), 1)
    }

    #[test]
    fn preserves_append_order() {
        let mut store = OrderStore::new();
        store.append(drink(15));
        store.append(drink(16));

        let ids: Vec<u32> = store
            .records()
            .iter()
            .filter_map(|record| record.drink().map(|slot| slot.menu_id.0))
            .collect();
        assert_eq!(ids, vec![15, 16]);
    }

    #[test]
    fn clear_resets_the_whole_tab() {
        let mut store = OrderStore::new();
        store.append(drink(15));
        assert_eq!(store.len(), 1);

        store.clear();
        assert!(store.is_empty());
    }
}
