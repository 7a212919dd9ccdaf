//! Product create/edit form.

use chrono::NaiveDate;

use crate::controller::form::EntityForm;
use crate::error::ValidationError;
use crate::format::{cents_to_reais, parse_reais, reais_to_cents};
use crate::models::{Product, ProductDraft, ProductType};

/// Raw input state for the product form.
///
/// The price and stock fields hold the text as typed; prices are edited in
/// reais and converted to integer cents only on save.
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub product_type: ProductType,
    /// Price in reais, as typed (`"12,50"` or `"12.50"`)
    pub price_input: String,
    pub promo_active: bool,
    /// Promo price in reais, required while `promo_active`
    pub promo_price_input: String,
    pub promo_starts_at: Option<NaiveDate>,
    pub promo_ends_at: Option<NaiveDate>,
    pub stock_input: String,
    pub expires_at: Option<NaiveDate>,
    touched: bool,
}

impl ProductForm {
    fn price_in_cents(&self) -> Option<i64> {
        parse_reais(&self.price_input).map(reais_to_cents)
    }

    fn promo_in_cents(&self) -> Option<i64> {
        parse_reais(&self.promo_price_input).map(reais_to_cents)
    }

    fn stock_quantity(&self) -> Option<u32> {
        self.stock_input.trim().parse().ok()
    }
}

impl EntityForm for ProductForm {
    type Entity = Product;

    fn load(&mut self, product: &Product) {
        self.name = product.name.clone();
        self.description = product.description.clone();
        self.product_type = product.product_type;
        self.price_input = format!("{:.2}", cents_to_reais(product.price_in_cents));
        self.promo_active = product.promo_active;
        self.promo_price_input = product
            .promo_in_cents
            .map(|cents| format!("{:.2}", cents_to_reais(cents)))
            .unwrap_or_default();
        self.promo_starts_at = product.promo_starts_at;
        self.promo_ends_at = product.promo_ends_at;
        self.stock_input = product.stock_quantity.to_string();
        self.expires_at = product.expires_at;
        self.touched = false;
    }

    fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();

        if self.name.trim().is_empty() {
            errors.push(ValidationError::new("name", "Informe o nome do produto"));
        }

        match self.price_in_cents() {
            Some(cents) if cents >= 1 => {}
            Some(_) => errors.push(ValidationError::new("price", "O preço deve ser maior que zero")),
            None => errors.push(ValidationError::new("price", "Informe um preço válido")),
        }

        if self.promo_active {
            match self.promo_in_cents() {
                Some(cents) if cents >= 1 => {}
                Some(_) => errors.push(ValidationError::new(
                    "promoPrice",
                    "O preço promocional deve ser maior que zero",
                )),
                None => errors.push(ValidationError::new(
                    "promoPrice",
                    "Informe um preço promocional válido",
                )),
            }
            if let (Some(starts), Some(ends)) = (self.promo_starts_at, self.promo_ends_at) {
                if ends < starts {
                    errors.push(ValidationError::new(
                        "promoEndsAt",
                        "O fim da promoção deve ser após o início",
                    ));
                }
            }
        }

        if self.stock_quantity().is_none() {
            errors.push(ValidationError::new("stock", "Informe uma quantidade em estoque válida"));
        }

        errors
    }

    fn mark_all_touched(&mut self) {
        self.touched = true;
    }

    fn is_touched(&self) -> bool {
        self.touched
    }

    fn to_draft(&self) -> ProductDraft {
        ProductDraft {
            name: self.name.trim().to_string(),
            description: self.description.trim().to_string(),
            product_type: self.product_type,
            price_in_cents: self.price_in_cents().unwrap_or(0),
            promo_in_cents: if self.promo_active { self.promo_in_cents() } else { None },
            promo_active: self.promo_active,
            promo_starts_at: if self.promo_active { self.promo_starts_at } else { None },
            promo_ends_at: if self.promo_active { self.promo_ends_at } else { None },
            stock_quantity: self.stock_quantity().unwrap_or(0),
            expires_at: self.expires_at,
        }
    }
}
