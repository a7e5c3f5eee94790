//! Static navigation metadata for the shop menu.

use crate::models::category::AnimalCategory;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use utoipa::ToSchema;

/// One animal section of the menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NavigationEntry {
    /// Animal token used in catalog queries
    #[schema(example = "dog")]
    pub id: String,
    #[schema(example = "강아지")]
    pub label: String,
    pub product_category: Vec<NavigationCategory>,
}

/// A product category inside a section: `label` is the query token, `value`
/// the display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct NavigationCategory {
    #[schema(example = "food")]
    pub label: String,
    #[schema(example = "사료")]
    pub value: String,
}

/// Builds the navigation menu: dog, cat and small-animal sections in that order.
pub fn navigation_data() -> Vec<NavigationEntry> {
    AnimalCategory::iter()
        .map(|animal| NavigationEntry {
            id: animal.to_string(),
            label: animal.label().to_string(),
            product_category: animal
                .product_categories()
                .into_iter()
                .map(|info| NavigationCategory {
                    label: info.token.to_string(),
                    value: info.label.to_string(),
                })
                .collect(),
        })
        .collect()
}
