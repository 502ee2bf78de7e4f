use serde::{Deserialize, Serialize};

/// Conditions a ruleset line may attach; each checks one slot of the record
/// being rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinePredicate {
    HasBurger,
    HasChicken,
    HasSide,
    HasDrink,
    HasSauce,
    HasToppings,
}

/// Placeholders a template may reference. Names outside this set parse to
/// `Unknown` and always render as the empty string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Var {
    OrderNumber,
    Quantity,
    QuantitySuffix,
    BurgerId,
    ChickenId,
    SideId,
    DrinkId,
    SauceId,
    SauceQuantity,
    Toppings,
    ToppingsSuffix,
    ToppingId,
    Unknown(String),
}

impl Var {
    fn from_name(name: &str) -> Self {
        match name {
            "order_number" => Self::OrderNumber,
            "quantity" => Self::Quantity,
            "quantity_suffix" => Self::QuantitySuffix,
            "burger_id" => Self::BurgerId,
            "chicken_id" => Self::ChickenId,
            "side_id" => Self::SideId,
            "drink_id" => Self::DrinkId,
            "sauce_id" => Self::SauceId,
            "sauce_quantity" => Self::SauceQuantity,
            "toppings" => Self::Toppings,
            "toppings_suffix" => Self::ToppingsSuffix,
            "topping_id" => Self::ToppingId,
            other => Self::Unknown(other.to_string()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Node {
    Literal(String),
    Var(Var),
    Guarded { predicate: LinePredicate, nodes: Vec<Node> },
}

/// A parsed `{placeholder}` template. Parsing never fails: an unterminated
/// brace is kept as literal text, there is no escape syntax.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Template {
    nodes: Vec<Node>,
}

impl Template {
    pub(crate) fn parse(source: &str) -> Self {
        let mut nodes = Vec::new();
        let mut literal = String::new();
        let mut chars = source.chars();

        while let Some(ch) = chars.next() {
            if ch != '{' {
                literal.push(ch);
                continue;
            }

            let mut name = String::new();
            let mut closed = false;
            for next in chars.by_ref() {
                if next == '}' {
                    closed = true;
                    break;
                }
                name.push(next);
            }

            if !closed {
                literal.push('{');
                literal.push_str(&name);
                break;
            }

            if !literal.is_empty() {
                nodes.push(Node::Literal(std::mem::take(&mut literal)));
            }
            nodes.push(Node::Var(Var::from_name(&name)));
        }

        if !literal.is_empty() {
            nodes.push(Node::Literal(literal));
        }
        Self { nodes }
    }

    pub(crate) fn guarded(predicate: LinePredicate, inner: Template) -> Self {
        Self { nodes: vec![Node::Guarded { predicate, nodes: inner.nodes }] }
    }

    pub(crate) fn render(&self, scope: &VarScope) -> String {
        let mut output = String::new();
        render_nodes(&self.nodes, scope, &mut output);
        output
    }
}

fn render_nodes(nodes: &[Node], scope: &VarScope, output: &mut String) {
    for node in nodes {
        match node {
            Node::Literal(text) => output.push_str(text),
            Node::Var(var) => {
                if let Some(value) = scope.resolve(var) {
                    output.push_str(&value);
                }
            }
            Node::Guarded { predicate, nodes } => {
                if scope.satisfies(*predicate) {
                    render_nodes(nodes, scope, output);
                }
            }
        }
    }
}

/// Variable values for one record rendering. Unset slots resolve to nothing,
/// which renders as the empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct VarScope {
    pub order_number: usize,
    pub quantity: u32,
    pub quantity_suffix: String,
    pub toppings_suffix: String,
    pub burger_id: Option<u32>,
    pub chicken_id: Option<u32>,
    pub side_id: Option<u32>,
    pub drink_id: Option<u32>,
    pub sauce_id: Option<u32>,
    pub sauce_quantity: Option<u32>,
    pub toppings: Option<Vec<u32>>,
    pub topping_id: Option<u32>,
}

impl VarScope {
    fn resolve(&self, var: &Var) -> Option<String> {
        match var {
            Var::OrderNumber => Some(self.order_number.to_string()),
            Var::Quantity => Some(self.quantity.to_string()),
            Var::QuantitySuffix => Some(self.quantity_suffix.clone()),
            Var::ToppingsSuffix => Some(self.toppings_suffix.clone()),
            Var::BurgerId => self.burger_id.map(|id| id.to_string()),
            Var::ChickenId => self.chicken_id.map(|id| id.to_string()),
            Var::SideId => self.side_id.map(|id| id.to_string()),
            Var::DrinkId => self.drink_id.map(|id| id.to_string()),
            Var::SauceId => self.sauce_id.map(|id| id.to_string()),
            Var::SauceQuantity => self.sauce_quantity.map(|count| count.to_string()),
            Var::Toppings => self.toppings.as_ref().map(|ids| {
                ids.iter().map(u32::to_string).collect::<Vec<_>>().join(",")
            }),
            Var::ToppingId => self.topping_id.map(|id| id.to_string()),
            Var::Unknown(_) => None,
        }
    }

    pub(crate) fn satisfies(&self, predicate: LinePredicate) -> bool {
        match predicate {
            LinePredicate::HasBurger => self.burger_id.is_some(),
            LinePredicate::HasChicken => self.chicken_id.is_some(),
            LinePredicate::HasSide => self.side_id.is_some(),
            LinePredicate::HasDrink => self.drink_id.is_some(),
            LinePredicate::HasSauce => self.sauce_id.is_some(),
            LinePredicate::HasToppings => self.toppings.is_some(),
        }
    }
}
