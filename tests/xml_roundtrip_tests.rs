use approx::assert_relative_eq;
use bezier_toy::{
    parse_curve_document, write_curve_document, Argb, ConstrainedReducer, CurveDocument,
    ReducedCurve, ReducerRegistry, UnconstrainedReducer,
};
use glam::DVec2;

#[test]
fn test_xml_roundtrip_preserves_fixture() {
    let registry = ReducerRegistry::with_builtin_reducers();
    let xml_content = include_str!("fixtures/simple_curve.xml");

    let parsed =
        parse_curve_document(xml_content, &registry).expect("Initiales Parsing fehlgeschlagen");
    let written_xml = write_curve_document(&parsed, &registry).expect("XML-Export fehlgeschlagen");
    let reparsed = parse_curve_document(&written_xml, &registry).expect("Re-Parsing fehlgeschlagen");

    assert_eq!(parsed, reparsed);
    assert_eq!(parsed.base_curve.point_count(), 5);
    assert_eq!(parsed.reduced_curve_count(), 2);
    assert_eq!(
        parsed.base_curve.start_point(),
        Some(DVec2::new(120.5, 300.0))
    );
    // {40,25.25} relativ zum Start, Y gespiegelt
    assert_eq!(parsed.base_curve.points[1], DVec2::new(160.5, 274.75));
}

#[test]
fn test_fixture_reducer_parameters() {
    let registry = ReducerRegistry::with_builtin_reducers();
    let parsed = parse_curve_document(include_str!("fixtures/simple_curve.xml"), &registry)
        .expect("Parsing fehlgeschlagen");

    let constrained = &parsed.reduced_curves[0];
    assert!(constrained.reducer.eq_dyn(&ConstrainedReducer::new(1, 2)));
    assert_eq!(constrained.degree, 3);
    assert_eq!(constrained.color, Argb(0xFFE0_301E));

    let unconstrained = &parsed.reduced_curves[1];
    assert!(unconstrained.reducer.eq_dyn(&UnconstrainedReducer));
    assert_eq!(unconstrained.color.a(), 0x80);
}

#[test]
fn test_concrete_scenario_entries_and_reload() {
    let registry = ReducerRegistry::with_builtin_reducers();
    let mut document = CurveDocument::new(Argb(0xFF11_2233));
    document.base_curve.points = vec![
        DVec2::new(10.0, 20.0),
        DVec2::new(15.0, 20.0),
        DVec2::new(10.0, 25.0),
    ];

    let xml = write_curve_document(&document, &registry).expect("XML-Export fehlgeschlagen");
    assert!(xml.contains("<string>{0,0}</string>"));
    assert!(xml.contains("<string>{5,0}</string>"));
    assert!(xml.contains("<string>{0,-5}</string>"));

    let reloaded = parse_curve_document(&xml, &registry).expect("Re-Parsing fehlgeschlagen");
    assert_eq!(reloaded, document);
}

#[test]
fn test_roundtrip_with_fractional_and_negative_coordinates_is_exact() {
    let registry = ReducerRegistry::with_builtin_reducers();
    let mut document = CurveDocument::new(Argb(0x0000_0000));
    document.base_curve.points = vec![
        DVec2::new(-3.125, 0.1),
        DVec2::new(1234.5678, -0.3),
        DVec2::new(0.5, 987654.321),
        DVec2::new(-42.0, -42.0),
    ];
    for degree in [1, 7] {
        document.reduced_curves.push(ReducedCurve::new(
            Box::new(ConstrainedReducer::new(-1, 3)),
            degree,
            Argb::RED,
        ));
    }

    let xml = write_curve_document(&document, &registry).expect("XML-Export fehlgeschlagen");
    let reloaded = parse_curve_document(&xml, &registry).expect("Re-Parsing fehlgeschlagen");

    assert_eq!(reloaded, document);
}

#[test]
fn test_point_finer_than_start_grid_reloads_nearest_value() {
    let registry = ReducerRegistry::with_builtin_reducers();
    let mut document = CurveDocument::new(Argb::BLACK);
    // 1e-7 liegt nicht im Raster von -3.125 + d
    document.base_curve.points = vec![DVec2::new(-3.125, 0.1), DVec2::new(0.0000001, 0.1)];

    let xml = write_curve_document(&document, &registry).expect("XML-Export fehlgeschlagen");
    let reloaded = parse_curve_document(&xml, &registry).expect("Re-Parsing fehlgeschlagen");

    let expected = document.base_curve.points[1];
    let actual = reloaded.base_curve.points[1];
    assert_relative_eq!(expected.x, actual.x, epsilon = 1e-15);
    assert_eq!(expected.y, actual.y);
}
