//! Order detail model
//!
//! An order detail says where a part can be ordered: supplier, the
//! supplier's part number and a list of quantity dependent prices.

use serde::{Deserialize, Serialize};

use super::base::Timestamps;
use super::structural::StructuralElement;

/// Price for a minimum order quantity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Pricedetail {
    pub id: Option<i64>,
    /// Quantity from which on this price applies
    #[serde(default = "default_quantity")]
    pub min_discount_quantity: f64,
    pub price: f64,
    /// Quantity the price refers to (e.g. price per 100 pieces)
    #[serde(default = "default_quantity")]
    pub price_related_quantity: f64,
    /// ISO 4217 code, `None` means the base currency
    pub currency: Option<String>,
}

fn default_quantity() -> f64 {
    1.0
}

impl Pricedetail {
    /// Price for a single unit
    pub fn price_per_unit(&self) -> f64 {
        if self.price_related_quantity <= 0.0 {
            return self.price;
        }
        self.price / self.price_related_quantity
    }
}

/// Order detail entity
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Orderdetail {
    pub id: Option<i64>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
    pub supplier: Option<StructuralElement>,
    #[serde(default)]
    pub supplierpartnr: String,
    #[serde(default)]
    pub supplier_product_url: String,
    #[serde(default)]
    pub obsolete: bool,
    #[serde(default)]
    pub pricedetails: Vec<Pricedetail>,
}

impl Orderdetail {
    /// Supplier name, empty if no supplier is set
    pub fn supplier_name(&self) -> &str {
        self.supplier
            .as_ref()
            .map(|s| s.base.name.as_str())
            .unwrap_or_default()
    }
}

/// Order detail input (the fields the order detail form edits)
///
/// Text fields left empty by the user arrive as `None` and are stored as
/// empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderdetailInput {
    pub supplierpartnr: Option<String>,
    pub supplier: Option<StructuralElement>,
    pub supplier_product_url: Option<String>,
    #[serde(default)]
    pub obsolete: bool,
    #[serde(default)]
    pub pricedetails: Vec<Pricedetail>,
}

impl OrderdetailInput {
    /// Copy the submitted values onto an existing order detail
    ///
    /// Price details replace the existing collection.
    pub fn apply_to(self, detail: &mut Orderdetail) {
        detail.supplierpartnr = self.supplierpartnr.unwrap_or_default();
        detail.supplier = self.supplier;
        detail.supplier_product_url = self.supplier_product_url.unwrap_or_default();
        detail.obsolete = self.obsolete;
        detail.pricedetails = self.pricedetails;
    }

    /// Build a new (unsaved) order detail
    pub fn into_orderdetail(self) -> Orderdetail {
        let mut detail = Orderdetail::default();
        self.apply_to(&mut detail);
        detail
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::structural::StructuralKind;

    fn price(min: f64, price: f64) -> Pricedetail {
        Pricedetail {
            id: None,
            min_discount_quantity: min,
            price,
            price_related_quantity: 1.0,
            currency: None,
        }
    }

    #[test]
    fn test_apply_input_replaces_all_fields() {
        let mut detail = Orderdetail {
            id: Some(3),
            supplierpartnr: "OLD-1".to_string(),
            supplier_product_url: "https://old.example".to_string(),
            pricedetails: vec![price(1.0, 0.5), price(100.0, 0.2)],
            ..Default::default()
        };

        let input = OrderdetailInput {
            supplierpartnr: Some("667-ERJ-3EKF1002V".to_string()),
            supplier: Some(StructuralElement::new(StructuralKind::Supplier, "Mouser")),
            supplier_product_url: None,
            obsolete: true,
            pricedetails: vec![price(10.0, 0.1)],
        };
        input.apply_to(&mut detail);

        assert_eq!(detail.id, Some(3));
        assert_eq!(detail.supplierpartnr, "667-ERJ-3EKF1002V");
        assert_eq!(detail.supplier_name(), "Mouser");
        assert_eq!(detail.supplier_product_url, "");
        assert!(detail.obsolete);
        assert_eq!(detail.pricedetails, vec![price(10.0, 0.1)]);
    }

    #[test]
    fn test_empty_input_uses_empty_strings() {
        let detail = OrderdetailInput::default().into_orderdetail();
        assert_eq!(detail.id, None);
        assert_eq!(detail.supplierpartnr, "");
        assert_eq!(detail.supplier_product_url, "");
        assert_eq!(detail.supplier_name(), "");
        assert!(!detail.obsolete);
    }

    #[test]
    fn test_price_per_unit() {
        let p = Pricedetail {
            price_related_quantity: 100.0,
            ..price(1.0, 5.0)
        };
        assert!((p.price_per_unit() - 0.05).abs() < 1e-9);
        let zero = Pricedetail {
            price_related_quantity: 0.0,
            ..price(1.0, 5.0)
        };
        assert_eq!(zero.price_per_unit(), 5.0);
    }

    #[test]
    fn test_pricedetail_defaults() {
        let p: Pricedetail = serde_json::from_str(r#"{"id": null, "price": 0.3}"#).unwrap();
        assert_eq!(p.min_discount_quantity, 1.0);
        assert_eq!(p.price_related_quantity, 1.0);
        assert_eq!(p.currency, None);
    }
}
