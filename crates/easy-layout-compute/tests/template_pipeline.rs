//! End-to-end tests: template text in, rectangles out.

use easy_layout_compute::{
    compute_coordinates, compute_with_options, extract_spans, AbsoluteFallback, AreaSpan, Grid,
    LayoutError, LayoutOptions, Spacing,
};
use easy_layout_parser::parse_template;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

const PAGE: &str = r#"
    header header header
    nav    main   aside
    footer footer footer
"#;

#[test]
fn test_page_template_spans() {
    init_tracing();
    let grid = parse_template(PAGE).expect("Should parse page template");
    let layout = extract_spans(&grid);

    assert_eq!(layout.row_count, 3);
    assert_eq!(layout.column_count, 3);
    assert_eq!(
        layout.get("header"),
        Some(&AreaSpan {
            start_row: 1,
            start_col: 1,
            end_row: 1,
            end_col: 3,
        })
    );
    assert_eq!(layout.get("main"), Some(&AreaSpan::cell(2, 2)));
    let names: Vec<_> = layout.area_names().collect();
    assert_eq!(names, vec!["header", "nav", "main", "aside", "footer"]);
}

#[test]
fn test_page_template_coordinates() {
    init_tracing();
    let grid = parse_template(PAGE).unwrap();
    let options = LayoutOptions::new()
        .with_padding(12.0)
        .with_gap(6.0)
        .with_container(1200.0, 600.0)
        .with_strict(true);

    let coords = compute_with_options(&grid, &options).expect("Should compute coordinates");
    assert_eq!(coords.len(), 5);

    // Horizontal: padding 1%, gap 0.5%, portion (100 - 2 - 1) / 3.
    let portion_h = 97.0 / 3.0;
    let header = &coords["header"];
    assert!((header.left.value() - 1.0).abs() < 1e-9);
    assert!((header.width.value() - (3.0 * portion_h + 1.0)).abs() < 1e-9);

    // Vertical: padding 2%, gap 1%, portion (100 - 4 - 2) / 3.
    let portion_v = 94.0 / 3.0;
    let footer = &coords["footer"];
    assert!((footer.top.value() - (2.0 + 2.0 * portion_v + 2.0)).abs() < 1e-9);
    assert!((footer.bottom() - 98.0).abs() < 1e-9);

    let aside = &coords["aside"];
    assert!((aside.right() - 99.0).abs() < 1e-9);
}

#[test]
fn test_sample_grid_string_output() {
    let grid = parse_template("a b\nc d").unwrap();
    let coords = compute_coordinates(&grid, Spacing::Percent(10.0), Spacing::Percent(10.0), None, None);

    let d = &coords["d"];
    assert_eq!(
        [d.top, d.left, d.width, d.height].map(|p| p.to_string()),
        ["55%", "55%", "35%", "35%"]
    );
}

#[test]
fn test_empty_grid_is_guarded() {
    let grid: Grid = Vec::new();
    let layout = extract_spans(&grid);
    assert_eq!((layout.row_count, layout.column_count), (0, 0));
    assert!(layout.spans.is_empty());

    assert!(compute_coordinates(&grid, 0.0, 0.0, None, None).is_empty());
    assert!(compute_with_options(&grid, &LayoutOptions::default())
        .unwrap()
        .is_empty());
}

#[test]
fn test_strict_rejects_irregular_template() {
    let grid = parse_template("a a\na b").unwrap();
    let strict = LayoutOptions::new().with_strict(true);

    assert!(matches!(
        compute_with_options(&grid, &strict),
        Err(LayoutError::NonRectangularArea { ref name, .. }) if name == "a"
    ));
    // Lenient by default: the span is bounded by first and last occurrence.
    let coords = compute_coordinates(&grid, 0.0, 0.0, None, None);
    assert!((coords["a"].width.value() - 50.0).abs() < 1e-9);
    assert!((coords["a"].height.value() - 100.0).abs() < 1e-9);
}

#[test]
fn test_reject_policy_requires_container() {
    let grid = parse_template("a b").unwrap();
    let options = LayoutOptions::new()
        .with_gap(8.0)
        .with_absolute_fallback(AbsoluteFallback::Reject);

    assert!(matches!(
        compute_with_options(&grid, &options),
        Err(LayoutError::MissingContainerDimension { .. })
    ));
    assert!(compute_with_options(&grid, &options.with_container(800.0, 600.0)).is_ok());
}
