use folio::{DocumentKind, DocumentRecord, IssuerInfo, LineItem, PartyInfo, PaymentInfo};

pub fn issuer() -> IssuerInfo {
    IssuerInfo {
        email: Some("billing@northwind.test".into()),
        phone: Some("+1 555 0100".into()),
        website: Some("northwind.test".into()),
        address: vec!["12 Harbour Road".into(), "Port Town".into()],
        ..IssuerInfo::new("Northwind Supplies")
    }
}

pub fn item_name(i: usize) -> String {
    format!("Item {:02}", i)
}

/// An invoice with `count` single-line items priced 1.00, 2.00, ...
pub fn invoice_with_items(count: usize) -> DocumentRecord {
    let line_items: Vec<LineItem> = (1..=count)
        .map(|i| LineItem::new(item_name(i), 1.0, i as f64))
        .collect();
    let subtotal: f64 = line_items.iter().map(LineItem::amount).sum();
    let tax = (subtotal * 0.1 * 100.0).round() / 100.0;
    DocumentRecord {
        kind: DocumentKind::Invoice,
        number: Some("INV-2024-001".into()),
        date: Some("2024-03-01".into()),
        currency: Some("USD".into()),
        party: PartyInfo {
            name: Some("Contoso Ltd".into()),
            email: Some("ap@contoso.test".into()),
            address: vec!["400 Main Street".into()],
            ..Default::default()
        },
        payment: PaymentInfo {
            method: Some("Bank transfer".into()),
            ..Default::default()
        },
        line_items,
        subtotal: Some(subtotal),
        tax: Some(tax),
        ..Default::default()
    }
}

pub fn receipt() -> DocumentRecord {
    DocumentRecord {
        kind: DocumentKind::Receipt,
        number: Some("R-77".into()),
        line_items: vec![LineItem::new("Coffee beans", 2.0, 7.5)],
        subtotal: Some(15.0),
        tax: Some(1.2),
        amount_paid: Some(20.0),
        change: Some(3.8),
        ..Default::default()
    }
}
