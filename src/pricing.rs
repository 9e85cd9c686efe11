//! Estimated-total computation for a quote's line items.
//!
//! Computed once at creation time and stored on the order; never recomputed
//! when items are read back.

use crate::models::order_items;
use crate::models::orders::CreateOrderItem;

/// Anything with a quantity and an optional unit price.
pub trait Priced {
    fn precio(&self) -> Option<f64>;
    fn unidades(&self) -> i32;
}

impl Priced for CreateOrderItem {
    fn precio(&self) -> Option<f64> {
        self.precio
    }

    fn unidades(&self) -> i32 {
        self.unidades
    }
}

impl Priced for order_items::Model {
    fn precio(&self) -> Option<f64> {
        self.precio
    }

    fn unidades(&self) -> i32 {
        self.unidades
    }
}

/// Σ(precio-or-0 × unidades) over the items.
pub fn subtotal<T: Priced>(items: &[T]) -> f64 {
    items
        .iter()
        .map(|item| item.precio().unwrap_or(0.0) * f64::from(item.unidades()))
        .sum()
}

/// The total stored on the order: `Some(sum)` when the sum is positive,
/// `None` otherwise. A sum of exactly zero collapses to `None`, so "free
/// items" and "unpriced items" are indistinguishable.
pub fn estimated_total<T: Priced>(items: &[T]) -> Option<f64> {
    let total = subtotal(items);
    if total > 0.0 { Some(total) } else { None }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::order_items::Categoria;

    fn item(unidades: i32, precio: Option<f64>) -> CreateOrderItem {
        CreateOrderItem {
            nombre: "Cerveza".to_string(),
            unidades,
            precio,
            categoria: Categoria::Cervezas,
        }
    }

    #[test]
    fn total_is_price_times_quantity() {
        let items = vec![item(24, Some(1.5))];
        assert_eq!(estimated_total(&items), Some(36.0));
    }

    #[test]
    fn unpriced_items_count_as_zero() {
        let items = vec![item(10, None), item(2, Some(5.0))];
        assert_eq!(estimated_total(&items), Some(10.0));
    }

    #[test]
    fn all_unpriced_yields_none() {
        let items = vec![item(24, None), item(3, None)];
        assert_eq!(estimated_total(&items), None);
    }

    #[test]
    fn zero_priced_items_also_yield_none() {
        // Free items are indistinguishable from unpriced ones.
        let items = vec![item(4, Some(0.0))];
        assert_eq!(estimated_total(&items), None);
    }
}
