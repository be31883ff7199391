//! Render configuration: currency, captions, date display and page geometry.

use crate::error::FolioError;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, NaiveDate};
use std::fmt::Write;
use folio_layout::LayoutConfig;
use folio_types::DocumentKind;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Captions drawn on the document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Labels {
    pub invoice_title: String,
    pub receipt_title: String,
    pub number: String,
    pub date: String,
    pub bill_to: String,
    pub received_from: String,
    pub payment: String,
    pub payment_method: String,
    pub payment_reference: String,
    pub payment_status: String,
    pub description: String,
    pub quantity: String,
    pub unit_price: String,
    pub amount: String,
    pub subtotal: String,
    pub tax: String,
    pub amount_paid: String,
    pub change: String,
    pub total: String,
    pub notes: String,
    /// Party placeholder on receipts with no customer details.
    pub walk_in_customer: String,
    /// Party placeholder on invoices with no customer details.
    pub no_customer: String,
    pub no_payment: String,
    pub page: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            invoice_title: "INVOICE".into(),
            receipt_title: "RECEIPT".into(),
            number: "No.".into(),
            date: "Date".into(),
            bill_to: "Bill To".into(),
            received_from: "Received From".into(),
            payment: "Payment Details".into(),
            payment_method: "Method".into(),
            payment_reference: "Reference".into(),
            payment_status: "Status".into(),
            description: "Description".into(),
            quantity: "Qty".into(),
            unit_price: "Unit Price".into(),
            amount: "Amount".into(),
            subtotal: "Subtotal".into(),
            tax: "Tax".into(),
            amount_paid: "Amount Paid".into(),
            change: "Change".into(),
            total: "Total".into(),
            notes: "Notes".into(),
            walk_in_customer: "Walk-in Customer".into(),
            no_customer: "No customer details".into(),
            no_payment: "Not specified".into(),
            page: "Page".into(),
        }
    }
}

impl Labels {
    pub fn title(&self, kind: DocumentKind) -> &str {
        match kind {
            DocumentKind::Invoice => &self.invoice_title,
            DocumentKind::Receipt => &self.receipt_title,
        }
    }

    pub fn party_heading(&self, kind: DocumentKind) -> &str {
        match kind {
            DocumentKind::Invoice => &self.bill_to,
            DocumentKind::Receipt => &self.received_from,
        }
    }

    pub fn party_placeholder(&self, kind: DocumentKind) -> &str {
        match kind {
            DocumentKind::Invoice => &self.no_customer,
            DocumentKind::Receipt => &self.walk_in_customer,
        }
    }
}

/// Everything about a render that is not the record or the template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderConfig {
    /// Currency used when a record carries none.
    pub base_currency: String,
    /// Watermark text; drawn only when the template enables watermarks.
    pub watermark: Option<String>,
    /// Line printed in the footer block.
    pub footer_note: Option<String>,
    /// `chrono` format string for record dates. Dates that do not parse are
    /// printed as given.
    pub date_format: String,
    pub labels: Labels,
    pub layout: LayoutConfig,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            base_currency: "USD".into(),
            watermark: None,
            footer_note: Some("Thank you for your business.".into()),
            date_format: "%b %d, %Y".into(),
            labels: Labels::default(),
            layout: LayoutConfig::default(),
        }
    }
}

impl RenderConfig {
    pub fn from_json(json: &str) -> Result<Self, FolioError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FolioError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Reject geometry no page could be laid out on.
    pub fn validate(&self) -> Result<(), FolioError> {
        let l = &self.layout;
        if l.page_width <= 0.0 || l.page_height <= 0.0 {
            return Err(FolioError::Config("page size must be positive".into()));
        }
        if l.margin < 0.0 || l.margin * 2.0 >= l.page_width.min(l.page_height) {
            return Err(FolioError::Config(format!(
                "margin {} does not leave a printable area",
                l.margin
            )));
        }
        if l.body_size <= 0.0 {
            return Err(FolioError::Config("body font size must be positive".into()));
        }
        if StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error)) {
            return Err(FolioError::Config(format!(
                "invalid date format '{}'",
                self.date_format
            )));
        }
        Ok(())
    }

    /// Format an ISO date (`2024-03-01`) or RFC 3339 timestamp for display.
    pub fn display_date(&self, raw: Option<&str>) -> String {
        let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
            return "-".to_string();
        };
        let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|d| d.date_naive()));
        let Some(date) = date else {
            return raw.to_string();
        };
        let mut out = String::new();
        if write!(out, "{}", date.format(&self.date_format)).is_err() {
            log::warn!("Date format '{}' is invalid; printing '{}' as given", self.date_format, raw);
            return raw.to_string();
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_are_reformatted() {
        let config = RenderConfig::default();
        assert_eq!(config.display_date(Some("2024-03-01")), "Mar 01, 2024");
        assert_eq!(config.display_date(Some("2024-03-01T10:00:00Z")), "Mar 01, 2024");
        assert_eq!(config.display_date(Some("first of March")), "first of March");
        assert_eq!(config.display_date(None), "-");
    }

    #[test]
    fn bad_date_format_is_rejected_on_load() {
        let err = RenderConfig::from_json(r#"{"dateFormat": "%Q"}"#).unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
        assert!(RenderConfig::from_json(r#"{"dateFormat": "%d/%m/%Y"}"#).is_ok());
    }

    #[test]
    fn bad_date_format_prints_date_as_given() {
        let config = RenderConfig {
            date_format: "%Q".into(),
            ..RenderConfig::default()
        };
        assert_eq!(config.display_date(Some("2024-03-01")), "2024-03-01");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = RenderConfig::from_json(
            r#"{"baseCurrency": "EUR", "labels": {"total": "Grand Total"}, "layout": {"margin": 20}}"#,
        )
        .unwrap();
        assert_eq!(config.base_currency, "EUR");
        assert_eq!(config.labels.total, "Grand Total");
        assert_eq!(config.labels.subtotal, "Subtotal");
        assert_eq!(config.layout.margin, 20.0);
    }

    #[test]
    fn impossible_margins_are_rejected() {
        let err = RenderConfig::from_json(r#"{"layout": {"margin": 200}}"#).unwrap_err();
        assert!(matches!(err, FolioError::Config(_)));
    }

    #[test]
    fn receipts_use_walk_in_placeholder() {
        let labels = Labels::default();
        assert_eq!(labels.party_placeholder(DocumentKind::Receipt), "Walk-in Customer");
        assert_eq!(labels.title(DocumentKind::Invoice), "INVOICE");
    }
}
