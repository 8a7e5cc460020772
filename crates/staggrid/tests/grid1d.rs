use staggrid::{Grid1D, GridError, Position};

#[test]
fn counts_constructor_span() {
    let grid = Grid1D::new(1, 1, &[-0.5, 0., 0.5, 1., 1.5]).unwrap();
    assert_eq!(grid.span(), 1.);
}

#[test]
fn counts_constructor_rejects_each_invariant() {
    assert_eq!(Grid1D::new(0, 1, &[]), Err(GridError::SingularGrid));
    assert!(matches!(
        Grid1D::new(1, 1, &[-0.5, 0., 1.5, 1., 1.5]),
        Err(GridError::NonMonotonic { index: 2 })
    ));
    assert!(matches!(
        Grid1D::new(1, 1, &[-0.5, 0., 0.5, 1.]),
        Err(GridError::MissingPositions { .. })
    ));
}

#[test]
fn array_constructor() {
    assert_eq!(Grid1D::from_slice(&[1., 2.]).unwrap().span(), 1.);
    assert_eq!(Grid1D::from_slice(&[1.]), Err(GridError::SingularGrid));
    assert!(matches!(
        Grid1D::from_slice(&[1., 3., 2.]),
        Err(GridError::NonMonotonic { .. })
    ));
}

#[test]
fn both_constructors_agree_on_wall_and_center_positions() {
    let positions = [-0.5, 0., 0.5, 1., 1.5];
    let counted = Grid1D::new(1, 1, &positions).unwrap();
    let raw = Grid1D::from_slice(&positions).unwrap();
    for grid in [&counted, &raw] {
        assert_eq!(grid.at(Position::Walls), vec![0., 1.]);
        assert_eq!(grid.at(Position::Centers), vec![-0.5, 0.5, 1.5]);
    }
    assert_eq!(counted.positions(), raw.positions());
}

#[test]
fn errors_are_std_errors() {
    let err: Box<dyn std::error::Error> = Box::new(GridError::SingularGrid);
    assert!(!err.to_string().is_empty());
}

#[test]
fn grids_are_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Grid1D>();
    assert_send_sync::<GridError>();
}
