//! Product entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::Entity;

/// Product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductType {
    Food,
    Beverage,
    Cleaning,
    Hygiene,
    #[default]
    Other,
}

impl ProductType {
    /// All categories, in form display order.
    pub const ALL: [ProductType; 5] = [
        ProductType::Food,
        ProductType::Beverage,
        ProductType::Cleaning,
        ProductType::Hygiene,
        ProductType::Other,
    ];

    /// Label shown in the category selector.
    pub fn label(&self) -> &'static str {
        match self {
            ProductType::Food => "Alimento",
            ProductType::Beverage => "Bebida",
            ProductType::Cleaning => "Limpeza",
            ProductType::Hygiene => "Higiene",
            ProductType::Other => "Outros",
        }
    }
}

/// A product as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    /// Always ≥ 1 for a persisted product
    pub price_in_cents: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo_in_cents: Option<i64>,
    #[serde(default)]
    pub promo_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo_starts_at: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promo_ends_at: Option<NaiveDate>,
    pub stock_quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<NaiveDate>,
}

impl Product {
    /// The price currently charged: the promo price while a promotion is
    /// active, the regular price otherwise.
    pub fn effective_price_in_cents(&self) -> i64 {
        if self.promo_active {
            self.promo_in_cents.unwrap_or(self.price_in_cents)
        } else {
            self.price_in_cents
        }
    }
}

/// A product without its server-assigned id, sent on create/update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    pub price_in_cents: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promo_in_cents: Option<i64>,
    pub promo_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promo_starts_at: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub promo_ends_at: Option<NaiveDate>,
    pub stock_quantity: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<NaiveDate>,
}

impl Entity for Product {
    type Draft = ProductDraft;

    const COLLECTION_PATH: &'static str = "/api/products";
    const LABEL: &'static str = "Produto";

    fn id(&self) -> &str {
        &self.product_id
    }
}
