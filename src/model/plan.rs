//! The action plan produced by the planner and consumed by the executor.
//!
//! On the wire an action is a flat object tagged by `type`:
//!
//! ```json
//! {"actions":[
//!   {"type":"searchProducts","query":"laptop","minRam":12,"cpu":"i5"},
//!   {"type":"addToBasket","productId":2},
//!   {"type":"showBasket"}
//! ]}
//! ```
//!
//! Absent fields are omitted. Tags outside the known set are kept verbatim in
//! [`Action::Unrecognized`] so the caller can see what the model asked for.

use crate::model::ProductId;
use serde::ser::{Serialize, Serializer};

/// Filters for a catalog search. All present filters must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    pub query: Option<String>,
    pub min_ram: Option<u32>,
    pub cpu: Option<String>,
}

/// One step of a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    SearchProducts(SearchQuery),
    /// The id is optional because the model may omit it; such a step is skipped.
    AddToBasket {
        product_id: Option<ProductId>,
    },
    ShowBasket,
    /// Marker for a plan the planner could not derive. Never executed.
    Error,
    Unrecognized(String),
}

impl Action {
    pub const SEARCH_PRODUCTS: &'static str = "searchProducts";
    pub const ADD_TO_BASKET: &'static str = "addToBasket";
    pub const SHOW_BASKET: &'static str = "showBasket";
    pub const ERROR: &'static str = "error";

    /// Builds an action from its tag. Fields are filled in by the caller.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            Self::SEARCH_PRODUCTS => Self::SearchProducts(SearchQuery::default()),
            Self::ADD_TO_BASKET => Self::AddToBasket { product_id: None },
            Self::SHOW_BASKET => Self::ShowBasket,
            Self::ERROR => Self::Error,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            Self::SearchProducts(_) => Self::SEARCH_PRODUCTS,
            Self::AddToBasket { .. } => Self::ADD_TO_BASKET,
            Self::ShowBasket => Self::SHOW_BASKET,
            Self::Error => Self::ERROR,
            Self::Unrecognized(tag) => tag,
        }
    }
}

#[derive(serde::Serialize)]
#[serde(rename_all = "camelCase")]
struct ActionWire<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    query: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    min_ram: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cpu: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    product_id: Option<ProductId>,
}

impl Serialize for Action {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut wire = ActionWire {
            kind: self.tag(),
            query: None,
            min_ram: None,
            cpu: None,
            product_id: None,
        };
        match self {
            Self::SearchProducts(search) => {
                wire.query = search.query.as_deref();
                wire.min_ram = search.min_ram;
                wire.cpu = search.cpu.as_deref();
            }
            Self::AddToBasket { product_id } => wire.product_id = *product_id,
            Self::ShowBasket | Self::Error | Self::Unrecognized(_) => {}
        }
        wire.serialize(serializer)
    }
}

/// An ordered list of actions. Order matters: each step sees the basket as the
/// previous steps left it.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct Plan {
    pub actions: Vec<Action>,
}

impl Plan {
    pub fn new(actions: Vec<Action>) -> Self {
        Self { actions }
    }

    /// The plan returned when the model's output cannot be used: a single
    /// [`Action::Error`] step, which executes to nothing.
    pub fn fallback() -> Self {
        Self::new(vec![Action::Error])
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
