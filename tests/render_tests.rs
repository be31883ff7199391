mod common;

use common::fixtures::*;
use common::{GeneratedPdf, TestResult, a4_recorder, compose_recorded, init_logger, render_pdf};
use folio::templates::{builtin, builtin_templates};
use folio::{CanvasError, FolioError, RenderConfig, RendererBuilder, Rgb, Template, format_money};
use folio_render_core::{DrawCommand, Paint, Primitive};

#[test]
fn test_party_and_payment_boxes_share_height() -> TestResult {
    init_logger();
    let mut record = invoice_with_items(2);
    record.party.phone = Some("+44 20 7946 0000".into());
    record.party.address = vec!["Unit 4".into(), "Dockside".into(), "Leith".into()];
    let (canvas, stats) = compose_recorded(
        a4_recorder(),
        &record,
        &Template::builtin_default(),
        &RenderConfig::default(),
    )?;

    let heights: Vec<f32> = canvas
        .commands()
        .iter()
        .filter_map(|c| match c {
            DrawCommand::RoundedRect {
                rect,
                paint: Paint::FillStroke { .. },
                ..
            } => Some(rect.height),
            _ => None,
        })
        .collect();
    assert_eq!(heights.len(), 2);
    assert_eq!(heights[0], heights[1]);
    assert_eq!(heights[0], stats.party_box_height);
    Ok(())
}

#[test]
fn test_total_row_shows_subtotal_plus_tax() -> TestResult {
    init_logger();
    let record = invoice_with_items(3);
    let (canvas, _) = compose_recorded(
        a4_recorder(),
        &record,
        &Template::builtin_default(),
        &RenderConfig::default(),
    )?;

    let expected = format_money(Some(6.0 + 0.6), "USD");
    assert_eq!(expected, "USD 6.60");
    let (_, _, style) = canvas.find_text(&expected).ok_or("total missing")?;
    assert!(style.font.is_bold());
    assert_eq!(style.color, Rgb::WHITE);
    assert_eq!(canvas.text_count("USD 6.00"), 1, "subtotal row");
    Ok(())
}

#[test]
fn test_receipt_rows_and_placeholders() -> TestResult {
    init_logger();
    let (canvas, _) = compose_recorded(
        a4_recorder(),
        &receipt(),
        &Template::builtin_default(),
        &RenderConfig::default(),
    )?;

    for text in [
        "RECEIPT",
        "Received From",
        "Walk-in Customer",
        "Not specified",
        "Amount Paid",
        "Change",
        "USD 3.80",
        "USD 16.20",
    ] {
        assert_eq!(canvas.text_count(text), 1, "expected '{}' once", text);
    }
    Ok(())
}

#[test]
fn test_unusable_date_format_prints_raw_date() -> TestResult {
    init_logger();
    let config = RenderConfig {
        date_format: "%Q".into(),
        ..RenderConfig::default()
    };
    let (canvas, stats) = compose_recorded(
        a4_recorder(),
        &invoice_with_items(1),
        &Template::builtin_default(),
        &config,
    )?;
    assert_eq!(canvas.text_count("Date: 2024-03-01"), 1);
    assert_eq!(stats.pages, 1);
    Ok(())
}

#[test]
fn test_rounded_boxes_fall_back_to_plain_rects() -> TestResult {
    init_logger();
    let canvas = a4_recorder()
        .without(Primitive::RoundedRect)
        .without(Primitive::RoundRect);
    let (canvas, stats) = compose_recorded(
        canvas,
        &invoice_with_items(3),
        &Template::builtin_default(),
        &RenderConfig::default(),
    )?;

    assert!(canvas.commands().iter().all(|c| !matches!(
        c,
        DrawCommand::RoundedRect { .. } | DrawCommand::RoundRect { .. }
    )));
    let plain_boxes = canvas
        .commands()
        .iter()
        .filter(|c| matches!(c, DrawCommand::Rect { paint: Paint::FillStroke { .. }, .. }))
        .count();
    assert_eq!(plain_boxes, 2);
    assert_eq!(stats.item_rows, 3);
    Ok(())
}

#[test]
fn test_misreported_rounded_rect_uses_next_primitive() -> TestResult {
    init_logger();
    let canvas = a4_recorder().failing(Primitive::RoundedRect);
    let (canvas, _) = compose_recorded(
        canvas,
        &invoice_with_items(1),
        &Template::builtin_default(),
        &RenderConfig::default(),
    )?;

    let commands = canvas.commands();
    assert!(!commands.iter().any(|c| matches!(c, DrawCommand::RoundedRect { .. })));
    assert!(commands.iter().any(|c| matches!(c, DrawCommand::RoundRect { .. })));
    Ok(())
}

#[test]
fn test_canvas_errors_are_propagated() {
    init_logger();
    let creative = builtin("creative").expect("creative is built in");
    let canvas = a4_recorder().failing(Primitive::Triangle);
    let result = compose_recorded(
        canvas,
        &invoice_with_items(1),
        creative,
        &RenderConfig::default(),
    );
    assert!(matches!(
        result,
        Err(FolioError::Canvas(CanvasError::Unsupported("triangle")))
    ));
}

#[test]
fn test_variant_bands_never_move_content() -> TestResult {
    init_logger();
    let record = invoice_with_items(4);
    let config = RenderConfig::default();
    let mut positions = Vec::new();
    for id in ["classic", "corporate", "modern", "creative", "elegant"] {
        let template = builtin(id).ok_or("missing template")?;
        let (canvas, _) = compose_recorded(a4_recorder(), &record, template, &config)?;
        let (_, at, _) = canvas.find_text(&item_name(1)).ok_or("row missing")?;
        positions.push(at);
    }
    assert!(positions.windows(2).all(|w| w[0] == w[1]));
    Ok(())
}

#[test]
fn test_pdf_page_count_matches_layout() -> TestResult {
    init_logger();
    let pdf = render_pdf(&invoice_with_items(40), None)?;
    assert_pdf_page_count!(pdf, 2);
    assert_pdf_has_font!(pdf, "Helvetica");
    assert_pdf_contains_text!(pdf, "Northwind Supplies");

    let single = render_pdf(&invoice_with_items(3), Some("minimal"))?;
    assert_pdf_page_count!(single, 1);
    Ok(())
}

#[test]
fn test_every_builtin_template_renders() -> TestResult {
    init_logger();
    let record = invoice_with_items(6);
    for template in builtin_templates() {
        let pdf = render_pdf(&record, Some(template.id.as_str()))?;
        assert_pdf_page_count!(pdf, 1);
    }
    Ok(())
}

#[test]
fn test_batch_keeps_input_order() -> TestResult {
    init_logger();
    let renderer = RendererBuilder::new().build()?;
    let records: Vec<_> = [1, 30, 2].into_iter().map(invoice_with_items).collect();
    let documents = renderer.render_batch(&records, &issuer());

    assert_eq!(documents.len(), 3);
    let rows: Vec<usize> = documents
        .iter()
        .map(|d| d.as_ref().map(|d| d.stats().item_rows).unwrap_or(0))
        .collect();
    assert_eq!(rows, vec![1, 30, 2]);

    let bytes = documents[1].as_ref().map_err(|e| e.to_string())?.to_bytes()?;
    let pdf = GeneratedPdf::from_bytes(bytes)?;
    assert_pdf_page_count!(pdf, 2);
    Ok(())
}

#[test]
fn test_saved_pdf_reloads() -> TestResult {
    init_logger();
    let dir = tempfile::tempdir()?;
    let renderer = RendererBuilder::new().build()?;
    let record = invoice_with_items(5);
    let path = dir.path().join(folio::suggested_filename(&record));
    renderer.render_pdf(&record, &issuer(), Some("aurora"))?.save(&path)?;

    assert_eq!(path.file_name().and_then(|n| n.to_str()), Some("invoice-inv-2024-001.pdf"));
    let pdf = GeneratedPdf::from_bytes(std::fs::read(&path)?)?;
    assert_pdf_page_count!(pdf, 1);
    Ok(())
}
