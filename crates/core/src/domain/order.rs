use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MenuId(pub u32);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    Set,
    Single,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetType {
    BurgerSet,
    BurgerCombo,
    ChickenFullPack,
    ChickenHalfPack,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCategory {
    Burger,
    Chicken,
    Side,
    Drink,
    Sauce,
}

impl SetType {
    pub const ALL: [SetType; 4] =
        [Self::BurgerSet, Self::BurgerCombo, Self::ChickenFullPack, Self::ChickenHalfPack];

    pub fn as_key(&self) -> &'static str {
        match self {
            Self::BurgerSet => "burger_set",
            Self::BurgerCombo => "burger_combo",
            Self::ChickenFullPack => "chicken_full_pack",
            Self::ChickenHalfPack => "chicken_half_pack",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|set_type| set_type.as_key() == key)
    }
}

impl ItemCategory {
    pub const ALL: [ItemCategory; 5] =
        [Self::Burger, Self::Chicken, Self::Side, Self::Drink, Self::Sauce];

    pub fn as_key(&self) -> &'static str {
        match self {
            Self::Burger => "burger",
            Self::Chicken => "chicken",
            Self::Side => "side",
            Self::Drink => "drink",
            Self::Sauce => "sauce",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.as_key() == key)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Burger {
    pub menu_id: MenuId,
    /// `Some` is never empty: a burger with no valid toppings carries `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub toppings: Option<Vec<MenuId>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chicken {
    pub menu_id: MenuId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Side {
    pub menu_id: MenuId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Drink {
    pub menu_id: MenuId,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sauce {
    pub menu_id: MenuId,
    pub quantity: u32,
}

impl Burger {
    pub fn new(menu_id: MenuId, toppings: Vec<MenuId>) -> Self {
        let toppings = if toppings.is_empty() { None } else { Some(toppings) };
        Self { menu_id, toppings }
    }

    pub fn plain(menu_id: MenuId) -> Self {
        Self { menu_id, toppings: None }
    }
}

/// Sauce portions bundled with chicken packs; fixed by pack size, never user-supplied.
pub const FULL_PACK_SAUCE_COUNT: u32 = 2;
pub const HALF_PACK_SAUCE_COUNT: u32 = 1;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SingleItem {
    Burger(Burger),
    Chicken(Chicken),
    Side(Side),
    Drink(Drink),
    Sauce(Sauce),
}

impl SingleItem {
    pub fn category(&self) -> ItemCategory {
        match self {
            Self::Burger(_) => ItemCategory::Burger,
            Self::Chicken(_) => ItemCategory::Chicken,
            Self::Side(_) => ItemCategory::Side,
            Self::Drink(_) => ItemCategory::Drink,
            Self::Sauce(_) => ItemCategory::Sauce,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OrderKind {
    BurgerSet { burger: Burger, side: Side, drink: Drink },
    BurgerCombo { burger: Burger, drink: Drink },
    ChickenFullPack { chicken: Chicken, sauce: Sauce },
    ChickenHalfPack { chicken: Chicken, sauce: Sauce },
    Single(SingleItem),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OrderRecord {
    pub quantity: u32,
    pub kind: OrderKind,
}

impl OrderRecord {
    pub fn burger_set(burger: Burger, side: Side, drink: Drink, quantity: u32) -> Self {
        Self { quantity: quantity.max(1), kind: OrderKind::BurgerSet { burger, side, drink } }
    }

    pub fn burger_combo(burger: Burger, drink: Drink, quantity: u32) -> Self {
        Self { quantity: quantity.max(1), kind: OrderKind::BurgerCombo { burger, drink } }
    }

    pub fn chicken_full_pack(chicken: Chicken, sauce_id: MenuId, quantity: u32) -> Self {
        let sauce = Sauce { menu_id: sauce_id, quantity: FULL_PACK_SAUCE_COUNT };
        Self { quantity: quantity.max(1), kind: OrderKind::ChickenFullPack { chicken, sauce } }
    }

    pub fn chicken_half_pack(chicken: Chicken, sauce_id: MenuId, quantity: u32) -> Self {
        let sauce = Sauce { menu_id: sauce_id, quantity: HALF_PACK_SAUCE_COUNT };
        Self { quantity: quantity.max(1), kind: OrderKind::ChickenHalfPack { chicken, sauce } }
    }

    pub fn single(item: SingleItem, quantity: u32) -> Self {
        Self { quantity: quantity.max(1), kind: OrderKind::Single(item) }
    }

    pub fn order_type(&self) -> OrderType {
        match self.kind {
            OrderKind::Single(_) => OrderType::Single,
            _ => OrderType::Set,
        }
    }

    pub fn set_type(&self) -> Option<SetType> {
        match self.kind {
            OrderKind::BurgerSet { .. } => Some(SetType::BurgerSet),
            OrderKind::BurgerCombo { .. } => Some(SetType::BurgerCombo),
            OrderKind::ChickenFullPack { .. } => Some(SetType::ChickenFullPack),
            OrderKind::ChickenHalfPack { .. } => Some(SetType::ChickenHalfPack),
            OrderKind::Single(_) => None,
        }
    }

    pub fn category(&self) -> Option<ItemCategory> {
        match &self.kind {
            OrderKind::Single(item) => Some(item.category()),
            _ => None,
        }
    }

    pub fn burger(&self) -> Option<&Burger> {
        match &self.kind {
            OrderKind::BurgerSet { burger, .. } | OrderKind::BurgerCombo { burger, .. } => {
                Some(burger)
            }
            OrderKind::Single(SingleItem::Burger(burger)) => Some(burger),
            _ => None,
        }
    }

    pub fn chicken(&self) -> Option<&Chicken> {
        match &self.kind {
            OrderKind::ChickenFullPack { chicken, .. }
            | OrderKind::ChickenHalfPack { chicken, .. } => Some(chicken),
            OrderKind::Single(SingleItem::Chicken(chicken)) => Some(chicken),
            _ => None,
        }
    }

    pub fn side(&self) -> Option<&Side> {
        match &self.kind {
            OrderKind::BurgerSet { side, .. } => Some(side),
            OrderKind::Single(SingleItem::Side(side)) => Some(side),
            _ => None,
        }
    }

    pub fn drink(&self) -> Option<&Drink> {
        match &self.kind {
            OrderKind::BurgerSet { drink, .. } | OrderKind::BurgerCombo { drink, .. } => {
                Some(drink)
            }
            OrderKind::Single(SingleItem::Drink(drink)) => Some(drink),
            _ => None,
        }
    }

    pub fn sauce(&self) -> Option<&Sauce> {
        match &self.kind {
            OrderKind::ChickenFullPack { sauce, .. } | OrderKind::ChickenHalfPack { sauce, .. } => {
                Some(sauce)
            }
            OrderKind::Single(SingleItem::Sauce(sauce)) => Some(sauce),
            _ => None,
        }
    }
}
