//! Part and part lot models

use serde::{Deserialize, Serialize};

use super::base::{NamedDbElement, NamedElement, Timestamps};
use super::orderdetail::Orderdetail;
use super::structural::StructuralElement;

/// Part entity
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Part {
    #[serde(flatten)]
    pub base: NamedDbElement,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub comment: String,
    pub category: Option<StructuralElement>,
    pub footprint: Option<StructuralElement>,
    pub manufacturer: Option<StructuralElement>,
    /// Manufacturer product number
    #[serde(default)]
    pub manufacturer_product_number: String,
    /// Internal part number
    #[serde(default)]
    pub ipn: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub min_amount: f64,
    /// Measurement unit, `None` means pieces
    pub unit: Option<String>,
    /// Mass in grams
    pub mass: Option<f64>,
    #[serde(default)]
    pub orderdetails: Vec<Orderdetail>,
}

impl Part {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            base: NamedDbElement::new(name),
            ..Default::default()
        }
    }

    /// First order detail that is not obsolete
    pub fn preferred_orderdetail(&self) -> Option<&Orderdetail> {
        self.orderdetails.iter().find(|o| !o.obsolete)
    }
}

impl NamedElement for Part {
    fn name(&self) -> &str {
        &self.base.name
    }

    fn type_label(&self) -> &str {
        "Part"
    }

    fn id(&self) -> Option<i64> {
        self.base.id
    }
}

/// Part lot entity (a stock of one part at one location)
///
/// Lots have no name of their own.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PartLot {
    pub id: Option<i64>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub comment: String,
    #[serde(default)]
    pub amount: f64,
    /// The stored amount is not known
    #[serde(default)]
    pub instock_unknown: bool,
    /// Unix millis
    pub expiration_date: Option<i64>,
    pub storage_location: Option<StructuralElement>,
    pub part: Part,
}

impl PartLot {
    pub fn new(part: Part, amount: f64) -> Self {
        Self {
            part,
            amount,
            ..Default::default()
        }
    }

    /// Whether the lot is expired at `now` (unix millis)
    pub fn is_expired(&self, now: i64) -> bool {
        self.expiration_date.is_some_and(|exp| exp <= now)
    }
}
