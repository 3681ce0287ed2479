use serde::{Deserialize, Serialize};

/// A provider region as listed by the pricing API.
///
/// `id` is used verbatim (percent-encoded) as a path segment in product queries.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Region {
    pub id: String,
    pub name: String,
}
