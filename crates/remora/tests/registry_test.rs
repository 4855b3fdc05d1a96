use remora::{
    ConnectorRegistry, Error, FixedRestrictions, SegmentedRouter, Side, point, registry,
};

fn elbow_restrictions() -> FixedRestrictions {
    FixedRestrictions::new(point(0.0, 0.0), point(100.0, 100.0))
        .with_sides(Side::East, Side::North)
}

#[test]
fn builtin_styles_are_registered() {
    let reg = ConnectorRegistry::with_builtin_styles();
    for style in [
        registry::STRAIGHT,
        registry::ELBOW,
        registry::CURVED,
        registry::SEGMENTED,
    ] {
        assert!(reg.contains(style), "missing builtin style {style:?}");
    }
    assert_eq!(reg.styles().count(), 4);
}

#[test]
fn create_builds_the_requested_strategy() {
    let reg = ConnectorRegistry::with_builtin_styles();
    let mut router = reg.create(registry::ELBOW);
    router.recalculate(&elbow_restrictions());
    // (E, N, z=1) routes as two axis-aligned segments.
    assert_eq!(router.segments().len(), 2);
}

#[test]
fn unknown_style_falls_back_to_straight() {
    let reg = ConnectorRegistry::with_builtin_styles();
    let mut router = reg.create("unknown-style");
    router.recalculate(&elbow_restrictions());
    // Straight routing: one direct segment, sides ignored.
    assert_eq!(router.segments().len(), 1);
    assert_eq!(router.segments()[0].start, point(0.0, 0.0));
    assert_eq!(router.segments()[0].end, point(100.0, 100.0));
}

#[test]
fn try_create_reports_the_unknown_style() {
    let reg = ConnectorRegistry::with_builtin_styles();
    match reg.try_create("no-such-style") {
        Err(Error::UnknownStyle { style }) => assert_eq!(style, "no-such-style"),
        other => panic!("expected UnknownStyle, got {other:?}"),
    }
}

#[test]
fn created_strategies_are_debuggable() {
    let reg = ConnectorRegistry::with_builtin_styles();
    // Boxed strategies must stay debug-formattable for host logging.
    let router = reg.create(registry::ELBOW);
    assert!(format!("{router:?}").contains("ElbowRouter"));
    let fallback = reg.create("unknown-style");
    assert!(format!("{fallback:?}").contains("StraightRouter"));
}

#[test]
fn runtime_registration_of_a_new_style() {
    let mut reg = ConnectorRegistry::with_builtin_styles();
    reg.register("zigzag", || Ok(Box::new(SegmentedRouter::new())));
    assert!(reg.contains("zigzag"));

    let mut router = reg.create("zigzag");
    let restrictions = FixedRestrictions::new(point(0.0, 0.0), point(100.0, 0.0))
        .with_waypoints(vec![point(50.0, 50.0)]);
    router.recalculate(&restrictions);
    assert_eq!(router.segments().len(), 2);
}

#[test]
fn failing_factory_degrades_to_straight() {
    let mut reg = ConnectorRegistry::new();
    reg.register("broken", || {
        Err(Error::Construction {
            style: "broken".to_string(),
            message: "missing native backend".to_string(),
        })
    });

    // create() absorbs the failure.
    let mut router = reg.create("broken");
    router.recalculate(&elbow_restrictions());
    assert_eq!(router.segments().len(), 1);

    // try_create() surfaces it.
    assert!(matches!(
        reg.try_create("broken"),
        Err(Error::Construction { .. })
    ));
}

#[test]
fn register_replaces_an_existing_binding() {
    let mut reg = ConnectorRegistry::with_builtin_styles();
    // Rebind the elbow id to segmented routing.
    reg.register(registry::ELBOW, || Ok(Box::new(SegmentedRouter::new())));

    let mut router = reg.create(registry::ELBOW);
    router.recalculate(&elbow_restrictions());
    // Segmented with no waypoints degenerates to one straight segment,
    // where a real elbow would produce two.
    assert_eq!(router.segments().len(), 1);
    assert_eq!(reg.styles().count(), 4);
}
