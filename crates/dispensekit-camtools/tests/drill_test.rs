use dispensekit_camtools::drill;
use dispensekit_core::Units;

const EPSILON: f64 = 1e-9;

#[test]
fn test_plain_millimeter_coordinates() {
    let parsed = drill::parse("X1.00000Y1.00000\n");
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed.units, Units::MM);
    assert!((parsed.points[0].x - 1.0).abs() < EPSILON);
    assert!((parsed.points[0].y - 1.0).abs() < EPSILON);
}

#[test]
fn test_inch_directive_scales_to_millimeters() {
    let parsed = drill::parse("INCH,TZ\nX1.00000Y1.00000\n");
    assert_eq!(parsed.units, Units::INCH);
    assert!((parsed.points[0].x - 25.4).abs() < EPSILON);
    assert!((parsed.points[0].y - 25.4).abs() < EPSILON);
}

#[test]
fn test_movement_prefixes_are_stripped() {
    let parsed = drill::parse("G00X0.5Y0.25\nG01X0.5Y0.25\n");
    assert_eq!(parsed.len(), 2);
    for point in &parsed.points {
        assert!((point.x - 0.5).abs() < EPSILON);
        assert!((point.y - 0.25).abs() < EPSILON);
    }
}

#[test]
fn test_malformed_line_is_skipped() {
    let parsed = drill::parse("X1.0Y2.0\nXabcYdef\nX3.0Y4.0\n");
    assert_eq!(parsed.len(), 2);
    assert!((parsed.points[0].x - 1.0).abs() < EPSILON);
    assert!((parsed.points[0].y - 2.0).abs() < EPSILON);
    assert!((parsed.points[1].x - 3.0).abs() < EPSILON);
    assert!((parsed.points[1].y - 4.0).abs() < EPSILON);
}

#[test]
fn test_line_without_y_marker_is_skipped() {
    let parsed = drill::parse("X1.0\nX2.0Y3.0\n");
    assert_eq!(parsed.len(), 1);
    assert!((parsed.points[0].x - 2.0).abs() < EPSILON);
}

#[test]
fn test_empty_input_yields_no_points() {
    let parsed = drill::parse("");
    assert!(parsed.is_empty());
    assert_eq!(parsed.units, Units::MM);
}

#[test]
fn test_headers_and_footers_are_ignored() {
    let contents = "G05\n\
                    M48\n\
                    ;TYPE=NONPLATED\n\
                    ;FILE_FORMAT=3:5\n\
                    INCH,TZ\n\
                    FMAT,2\n\
                    T1C000.02500\n\
                    %\n\
                    T001\n\
                    G00X0.57606Y0.28804\n\
                    M15\n\
                    G01X0.57606Y0.35525\n\
                    X0.83669Y0.35525\n\
                    M17\n\
                    M30\n";
    let parsed = drill::parse(contents);
    assert_eq!(parsed.len(), 3);
    assert_eq!(parsed.units, Units::INCH);
    assert!((parsed.points[0].x - 0.57606 * 25.4).abs() < EPSILON);
    assert!((parsed.points[2].y - 0.35525 * 25.4).abs() < EPSILON);
}

#[test]
fn test_unit_directive_applies_from_its_line_onward() {
    // Single-pass behavior: points before a late INCH directive stay unscaled.
    let parsed = drill::parse("X1.0Y1.0\nINCH\nX1.0Y1.0\n");
    assert_eq!(parsed.len(), 2);
    assert!((parsed.points[0].x - 1.0).abs() < EPSILON);
    assert!((parsed.points[1].x - 25.4).abs() < EPSILON);
}

#[test]
fn test_crlf_line_endings_are_tolerated() {
    let parsed = drill::parse("X1.0Y2.0\r\nX3.0Y4.0\r\n");
    assert_eq!(parsed.len(), 2);
    assert!((parsed.points[1].y - 4.0).abs() < EPSILON);
}

#[test]
fn test_negative_coordinates_parse() {
    let parsed = drill::parse("X-1.5Y-0.25\n");
    assert_eq!(parsed.len(), 1);
    assert!((parsed.points[0].x + 1.5).abs() < EPSILON);
    assert!((parsed.points[0].y + 0.25).abs() < EPSILON);
}

#[test]
fn test_extent_tracks_maximum_reach() {
    let parsed = drill::parse("X1.0Y5.0\nX4.0Y2.0\n");
    let extent = parsed.extent();
    assert!((extent.max_x - 4.0).abs() < EPSILON);
    assert!((extent.max_y - 5.0).abs() < EPSILON);
}
