use thiserror::Error;

use crate::domain::order::{Burger, Chicken, Drink, MenuId, OrderRecord, Sauce, Side, SingleItem};
use crate::extract::fields::SectionFields;

pub const KEY_TYPE: &str = "TYPE";
pub const KEY_SET_TYPE: &str = "SET_TYPE";
pub const KEY_QUANTITY: &str = "QUANTITY";
pub const KEY_BURGER: &str = "BURGER";
pub const KEY_TOPPINGS: &str = "TOPPINGS";
pub const KEY_CHICKEN: &str = "CHICKEN";
pub const KEY_SIDE: &str = "SIDE";
pub const KEY_DRINK: &str = "DRINK";
pub const KEY_SAUCE: &str = "SAUCE";

pub const DEFAULT_SIDE_ID: MenuId = MenuId(10);
pub const DEFAULT_DRINK_ID: MenuId = MenuId(15);
pub const DEFAULT_SAUCE_ID: MenuId = MenuId(40);

/// Why one section produced no record. A skip never affects sibling sections.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SkipReason {
    #[error("section carries no `KEY: VALUE` lines")]
    EmptySection,
    #[error("section has no TYPE field")]
    MissingType,
    #[error("unrecognized TYPE `{0}` (expected set|single)")]
    UnrecognizedType(String),
    #[error("unrecognized SET_TYPE `{0}`")]
    UnrecognizedSetType(String),
    #[error("required field {0} is missing")]
    MissingField(&'static str),
    #[error("field {field} holds a non-numeric menu id `{value}`")]
    InvalidMenuId { field: &'static str, value: String },
    #[error("single order names none of BURGER, CHICKEN, SIDE, DRINK, SAUCE")]
    NoSingleItem,
}

/// Compose one typed record from a section's fields.
///
/// QUANTITY is lenient (absent, non-numeric, or below 1 becomes 1). Menu id
/// fields are strict: a present but non-numeric id skips the whole section.
/// Absent optional slots take the configured house defaults.
pub fn compose(fields: &SectionFields) -> Result<OrderRecord, SkipReason> {
    if fields.is_empty() {
        return Err(SkipReason::EmptySection);
    }

    let quantity = parse_quantity(fields.get(KEY_QUANTITY));
    match fields.get(KEY_TYPE) {
        None => Err(SkipReason::MissingType),
        Some("set") => compose_set(fields, quantity),
        Some("single") => compose_single(fields, quantity),
        Some(other) => Err(SkipReason::UnrecognizedType(other.to_string())),
    }
}

fn compose_set(fields: &SectionFields, quantity: u32) -> Result<OrderRecord, SkipReason> {
    match fields.get(KEY_SET_TYPE).unwrap_or("burger_set") {
        "burger_set" => {
            let burger = required_burger(fields)?;
            let side = optional_menu_id(fields, KEY_SIDE)?.unwrap_or(DEFAULT_SIDE_ID);
            let drink = optional_menu_id(fields, KEY_DRINK)?.unwrap_or(DEFAULT_DRINK_ID);
            Ok(OrderRecord::burger_set(
                burger,
                Side { menu_id: side },
                Drink { menu_id: drink },
                quantity,
            ))
        }
        "burger_combo" => {
            let burger = required_burger(fields)?;
            let drink = optional_menu_id(fields, KEY_DRINK)?.unwrap_or(DEFAULT_DRINK_ID);
            Ok(OrderRecord::burger_combo(burger, Drink { menu_id: drink }, quantity))
        }
        "chicken_full_pack" => {
            let chicken = required_chicken(fields)?;
            let sauce = optional_menu_id(fields, KEY_SAUCE)?.unwrap_or(DEFAULT_SAUCE_ID);
            Ok(OrderRecord::chicken_full_pack(chicken, sauce, quantity))
        }
        "chicken_half_pack" => {
            let chicken = required_chicken(fields)?;
            let sauce = optional_menu_id(fields, KEY_SAUCE)?.unwrap_or(DEFAULT_SAUCE_ID);
            Ok(OrderRecord::chicken_half_pack(chicken, sauce, quantity))
        }
        other => Err(SkipReason::UnrecognizedSetType(other.to_string())),
    }
}

fn compose_single(fields: &SectionFields, quantity: u32) -> Result<OrderRecord, SkipReason> {
    // Fixed claim priority when several item fields appear in one section.
    if fields.contains(KEY_BURGER) {
        let burger = required_burger(fields)?;
        return Ok(OrderRecord::single(SingleItem::Burger(burger), quantity));
    }
    if fields.contains(KEY_CHICKEN) {
        let chicken = required_chicken(fields)?;
        return Ok(OrderRecord::single(SingleItem::Chicken(chicken), quantity));
    }
    if fields.contains(KEY_SIDE) {
        let menu_id = required_menu_id(fields, KEY_SIDE)?;
        return Ok(OrderRecord::single(SingleItem::Side(Side { menu_id }), quantity));
    }
    if fields.contains(KEY_DRINK) {
        let menu_id = required_menu_id(fields, KEY_DRINK)?;
        return Ok(OrderRecord::single(SingleItem::Drink(Drink { menu_id }), quantity));
    }
    if fields.contains(KEY_SAUCE) {
        let menu_id = required_menu_id(fields, KEY_SAUCE)?;
        let sauce = Sauce { menu_id, quantity: 1 };
        return Ok(OrderRecord::single(SingleItem::Sauce(sauce), quantity));
    }
    Err(SkipReason::NoSingleItem)
}

fn required_burger(fields: &SectionFields) -> Result<Burger, SkipReason> {
    let menu_id = required_menu_id(fields, KEY_BURGER)?;
    Ok(Burger::new(menu_id, parse_toppings(fields.get(KEY_TOPPINGS))))
}

fn required_chicken(fields: &SectionFields) -> Result<Chicken, SkipReason> {
    Ok(Chicken { menu_id: required_menu_id(fields, KEY_CHICKEN)? })
}

fn required_menu_id(fields: &SectionFields, field: &'static str) -> Result<MenuId, SkipReason> {
    match fields.get(field) {
        None => Err(SkipReason::MissingField(field)),
        Some(raw) => parse_menu_id(field, raw),
    }
}

fn optional_menu_id(
    fields: &SectionFields,
    field: &'static str,
) -> Result<Option<MenuId>, SkipReason> {
    match fields.get(field) {
        None => Ok(None),
        Some(raw) => parse_menu_id(field, raw).map(Some),
    }
}

fn parse_menu_id(field: &'static str, raw: &str) -> Result<MenuId, SkipReason> {
    raw.parse::<u32>().map(MenuId).map_err(|_| SkipReason::InvalidMenuId {
        field,
        value: raw.to_string(),
    })
}

fn parse_quantity(raw: Option<&str>) -> u32 {
    raw.and_then(|value| value.parse::<u32>().ok()).filter(|quantity| *quantity >= 1).unwrap_or(1)
}

// Comma-separated topping ids; tokens that are not positive integers are dropped.
fn parse_toppings(raw: Option<&str>) -> Vec<MenuId> {
    let Some(raw) = raw else {
        return Vec::new();
    };
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty() && token.chars().all(|ch| ch.is_ascii_digit()))
        .filter_map(|token| token.parse::<u32>().ok())
        .filter(|id| *id > 0)
        .map(MenuId)
        .collect()
}
