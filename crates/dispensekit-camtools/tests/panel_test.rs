use dispensekit_camtools::panel::{PanelParams, Panelizer};
use dispensekit_core::Point;
use dispensekit_settings::DispenseParameters;

const EPSILON: f64 = 1e-9;

fn assert_points_eq(actual: &[Point], expected: &[(f64, f64)]) {
    assert_eq!(actual.len(), expected.len());
    for (point, (x, y)) in actual.iter().zip(expected) {
        assert!(
            (point.x - x).abs() < EPSILON && (point.y - y).abs() < EPSILON,
            "expected ({x}, {y}), got {point}"
        );
    }
}

#[test]
fn test_replication_is_column_major() {
    let points = vec![Point::new(1.0, 1.0)];
    let params = PanelParams::new(2, 3, 10.0, 20.0);

    let replicated = Panelizer::replicate(&points, &params);

    // All rows of the leftmost column first, then the next column.
    assert_points_eq(
        &replicated,
        &[
            (1.0, 1.0),
            (1.0, 21.0),
            (1.0, 41.0),
            (11.0, 1.0),
            (11.0, 21.0),
            (11.0, 41.0),
        ],
    );
}

#[test]
fn test_zero_count_yields_no_points() {
    let points = vec![Point::new(1.0, 1.0)];
    assert!(Panelizer::replicate(&points, &PanelParams::new(0, 3, 10.0, 20.0)).is_empty());
    assert!(Panelizer::replicate(&points, &PanelParams::new(2, 0, 10.0, 20.0)).is_empty());
}

#[test]
fn test_single_cell_passes_points_through() {
    let points = vec![Point::new(2.5, 7.5), Point::new(0.0, 0.0)];
    let replicated = Panelizer::replicate(&points, &PanelParams::new(1, 1, 100.0, 50.0));
    assert_points_eq(&replicated, &[(2.5, 7.5), (0.0, 0.0)]);
}

#[test]
fn test_points_keep_input_order_within_each_board() {
    let points = vec![Point::new(1.0, 0.0), Point::new(2.0, 0.0)];
    let replicated = Panelizer::replicate(&points, &PanelParams::new(2, 1, 10.0, 10.0));
    assert_points_eq(
        &replicated,
        &[(1.0, 0.0), (2.0, 0.0), (11.0, 0.0), (12.0, 0.0)],
    );
}

#[test]
fn test_coincident_points_replicate_independently() {
    let points = vec![Point::new(3.0, 3.0), Point::new(3.0, 3.0)];
    let replicated = Panelizer::replicate(&points, &PanelParams::new(2, 1, 10.0, 10.0));
    assert_eq!(replicated.len(), 4);
}

#[test]
fn test_empty_selection_yields_no_points() {
    let replicated = Panelizer::replicate(&[], &PanelParams::new(3, 3, 10.0, 10.0));
    assert!(replicated.is_empty());
}

#[test]
fn test_params_helpers() {
    let params = PanelParams::new(2, 3, 10.0, 20.0);
    assert!(params.is_valid());
    assert_eq!(params.total_boards(), 6);
    assert_eq!(params.cell_origin(1, 2), Some((10.0, 40.0)));
    assert_eq!(params.cell_origin(2, 0), None);
    assert_eq!(params.cell_origin(0, 3), None);

    assert!(!PanelParams::new(0, 3, 10.0, 20.0).is_valid());
}

#[test]
fn test_params_from_parameter_record() {
    let params = DispenseParameters {
        pcb_count_width: 4,
        pcb_count_height: 2,
        pcb_outline_width: 80.0,
        pcb_outline_height: 60.0,
        ..Default::default()
    };
    let panel = PanelParams::from_parameters(&params);
    assert_eq!(panel.count_x, 4);
    assert_eq!(panel.count_y, 2);
    assert_eq!(panel.board_width, 80.0);
    assert_eq!(panel.board_height, 60.0);
}
