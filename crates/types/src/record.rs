//! The billing payloads the engine lays out.
//!
//! Every field is optional on the wire. Accessors apply the defaults
//! (missing or non-finite numbers read as zero) so layout code never has to
//! care whether a value was supplied.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    #[default]
    Invoice,
    Receipt,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PartyInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Vec<String>,
}

impl PartyInfo {
    /// Non-blank lines in display order: name, email, phone, address.
    pub fn lines(&self) -> Vec<String> {
        [&self.name, &self.email, &self.phone]
            .into_iter()
            .filter_map(|v| v.as_deref())
            .chain(self.address.iter().map(String::as_str))
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaymentInfo {
    pub method: Option<String>,
    pub reference: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LineItem {
    pub description: String,
    pub quantity: Option<f64>,
    pub unit_price: Option<f64>,
}

impl LineItem {
    pub fn new(description: impl Into<String>, quantity: f64, unit_price: f64) -> Self {
        Self {
            description: description.into(),
            quantity: Some(quantity),
            unit_price: Some(unit_price),
        }
    }

    pub fn quantity(&self) -> f64 {
        finite_or_zero(self.quantity)
    }

    pub fn unit_price(&self) -> f64 {
        finite_or_zero(self.unit_price)
    }

    /// `quantity * unit_price`, recomputed on every call.
    pub fn amount(&self) -> f64 {
        self.quantity() * self.unit_price()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocumentRecord {
    pub kind: DocumentKind,
    pub number: Option<String>,
    pub date: Option<String>,
    pub currency: Option<String>,
    /// Template the record was saved with, if any.
    pub template_id: Option<String>,
    pub party: PartyInfo,
    pub payment: PaymentInfo,
    pub line_items: Vec<LineItem>,
    pub subtotal: Option<f64>,
    pub tax: Option<f64>,
    pub amount_paid: Option<f64>,
    pub change: Option<f64>,
    pub total: Option<f64>,
    pub notes: Option<String>,
}

impl DocumentRecord {
    pub fn subtotal(&self) -> f64 {
        finite_or_zero(self.subtotal)
    }

    pub fn tax(&self) -> f64 {
        finite_or_zero(self.tax)
    }

    /// The stored total, or `subtotal + tax` when none was supplied.
    pub fn total(&self) -> f64 {
        match self.total {
            Some(t) if t.is_finite() => t,
            _ => self.subtotal() + self.tax(),
        }
    }

    /// Currency code, falling back to `base` when absent or blank.
    pub fn currency_or<'a>(&'a self, base: &'a str) -> &'a str {
        self.currency
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
            .unwrap_or(base)
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref().map(str::trim).filter(|n| !n.is_empty())
    }
}

/// The business issuing the document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IssuerInfo {
    pub company_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub tax_id: Option<String>,
    pub address: Vec<String>,
}

impl IssuerInfo {
    pub fn new(company_name: impl Into<String>) -> Self {
        Self {
            company_name: company_name.into(),
            ..Default::default()
        }
    }

    /// Up to two uppercase initials of the company name.
    pub fn initials(&self) -> String {
        self.company_name
            .split_whitespace()
            .filter_map(|w| w.chars().find(|c| c.is_alphanumeric()))
            .take(2)
            .flat_map(char::to_uppercase)
            .collect()
    }
}

fn finite_or_zero(v: Option<f64>) -> f64 {
    v.filter(|x| x.is_finite()).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_numbers_default_to_zero() {
        let record: DocumentRecord = serde_json::from_str(r#"{"lineItems":[{"description":"x"}]}"#).unwrap();
        assert_eq!(record.subtotal(), 0.0);
        assert_eq!(record.tax(), 0.0);
        assert_eq!(record.total(), 0.0);
        assert_eq!(record.line_items[0].amount(), 0.0);
        assert_eq!(record.kind, DocumentKind::Invoice);
    }

    #[test]
    fn total_falls_back_to_subtotal_plus_tax() {
        let mut record = DocumentRecord {
            subtotal: Some(100.0),
            tax: Some(8.25),
            ..Default::default()
        };
        assert_eq!(record.total(), 108.25);
        record.total = Some(f64::NAN);
        assert_eq!(record.total(), 108.25);
        record.total = Some(99.0);
        assert_eq!(record.total(), 99.0);
    }

    #[test]
    fn blank_currency_uses_base() {
        let mut record = DocumentRecord::default();
        assert_eq!(record.currency_or("USD"), "USD");
        record.currency = Some("  ".into());
        assert_eq!(record.currency_or("USD"), "USD");
        record.currency = Some("EUR".into());
        assert_eq!(record.currency_or("USD"), "EUR");
    }

    #[test]
    fn party_lines_skip_blanks() {
        let party = PartyInfo {
            name: Some("Ada Lovelace".into()),
            email: Some(" ".into()),
            phone: None,
            address: vec!["12 Analytical Way".into(), "".into(), "London".into()],
        };
        assert_eq!(party.lines(), vec!["Ada Lovelace", "12 Analytical Way", "London"]);
        assert!(PartyInfo::default().lines().is_empty());
    }

    #[test]
    fn issuer_initials() {
        assert_eq!(IssuerInfo::new("acme widgets ltd").initials(), "AW");
        assert_eq!(IssuerInfo::new("Solo").initials(), "S");
        assert_eq!(IssuerInfo::new("").initials(), "");
    }
}
