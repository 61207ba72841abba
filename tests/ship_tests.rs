use solo_battleship::{Coord, Orientation, Placement};

#[test]
fn test_cells_follow_direction() {
    let h = Placement::new(Coord::new(2, 1), 3, Orientation::Horizontal);
    let cells: Vec<_> = h.cells().flatten().collect();
    assert_eq!(cells, vec![Coord::new(2, 1), Coord::new(2, 2), Coord::new(2, 3)]);

    let v = Placement::new(Coord::new(0, 0), 4, Orientation::Vertical);
    let cells: Vec<_> = v.cells().flatten().collect();
    assert_eq!(
        cells,
        vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(2, 0), Coord::new(3, 0)]
    );
    assert!(v.contains(Coord::new(3, 0)));
    assert!(!v.contains(Coord::new(4, 0)));
}

#[test]
fn test_max_start_ranges_are_not_swapped() {
    // horizontal: any row, columns up to N - length
    assert_eq!(Orientation::Horizontal.max_start(7, 3), Some((6, 4)));
    // vertical: rows up to N - length, any column
    assert_eq!(Orientation::Vertical.max_start(7, 3), Some((4, 6)));
    assert_eq!(Orientation::Horizontal.max_start(7, 7), Some((6, 0)));
    assert_eq!(Orientation::Vertical.max_start(7, 8), None);
    assert_eq!(Orientation::Vertical.max_start(7, 0), None);
}

#[test]
fn test_overflowing_cells_are_none() {
    let p = Placement::new(Coord::new(0, usize::MAX), 2, Orientation::Horizontal);
    let cells: Vec<_> = p.cells().collect();
    assert_eq!(cells, vec![Some(Coord::new(0, usize::MAX)), None]);
}

#[test]
fn test_coord_display_uses_letter_and_one_based_row() {
    assert_eq!(Coord::new(4, 1).to_string(), "B5");
    assert_eq!(Coord::new(0, 0).to_string(), "A1");
    assert_eq!(Coord::from((6, 6)).to_string(), "G7");
}
