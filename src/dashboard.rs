//! Dashboard stats-card metrics.
//!
//! Pure derivations over the product collection; no IO here.

use chrono::NaiveDate;

use crate::models::Product;

/// How close to its expiry date a product counts as "expiring soon".
const EXPIRY_WINDOW_DAYS: i64 = 30;

/// The numbers shown on the dashboard stats cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DashboardMetrics {
    pub total_products: usize,
    pub units_in_stock: u64,
    pub active_promotions: usize,
    pub expiring_soon: usize,
}

/// Compute the stats-card metrics for `today`.
pub fn compute_metrics(products: &[Product], today: NaiveDate) -> DashboardMetrics {
    DashboardMetrics {
        total_products: products.len(),
        units_in_stock: products.iter().map(|p| u64::from(p.stock_quantity)).sum(),
        active_promotions: products.iter().filter(|p| promotion_running(p, today)).count(),
        expiring_soon: products
            .iter()
            .filter(|p| {
                p.expires_at
                    .map(|date| {
                        let days = (date - today).num_days();
                        (0..=EXPIRY_WINDOW_DAYS).contains(&days)
                    })
                    .unwrap_or(false)
            })
            .count(),
    }
}

/// Whether a product's promotion is running on `today`: the flag is set and
/// `today` falls inside the optional date window.
pub fn promotion_running(product: &Product, today: NaiveDate) -> bool {
    if !product.promo_active {
        return false;
    }
    if let Some(starts) = product.promo_starts_at {
        if today < starts {
            return false;
        }
    }
    if let Some(ends) = product.promo_ends_at {
        if today > ends {
            return false;
        }
    }
    true
}
