use solo_battleship::{Board, BoardError, Cell, Coord, Orientation, Placement, ShotOutcome};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::collections::HashSet;

fn run(row: usize, col: usize, length: usize, orientation: Orientation) -> Placement {
    Placement::new(Coord::new(row, col), length, orientation)
}

#[test]
fn test_new_board_is_empty() {
    let board = Board::new(7);
    assert_eq!(board.size(), 7);
    assert_eq!(board.rows().count(), 7);
    assert!(board.rows().flatten().all(|c| *c == Cell::Empty));
    assert!(board.ships().is_empty());
    assert!(board.all_sunk());
}

#[test]
fn test_can_place_respects_bounds_and_occupancy() {
    let mut board = Board::new(5);
    assert!(board.can_place(run(0, 2, 3, Orientation::Horizontal)));
    assert!(!board.can_place(run(0, 3, 3, Orientation::Horizontal)));
    assert!(board.can_place(run(2, 4, 3, Orientation::Vertical)));
    assert!(!board.can_place(run(3, 4, 3, Orientation::Vertical)));
    assert!(!board.can_place(run(5, 0, 1, Orientation::Horizontal)));
    assert!(!board.can_place(run(0, 0, 0, Orientation::Horizontal)));

    board.place(run(1, 1, 3, Orientation::Horizontal)).unwrap();
    assert!(!board.can_place(run(0, 2, 2, Orientation::Vertical)));
    assert!(board.can_place(run(2, 1, 3, Orientation::Horizontal)));
}

#[test]
fn test_place_marks_run_intact() {
    let mut board = Board::new(5);
    board.place(run(1, 2, 3, Orientation::Vertical)).unwrap();
    for r in 1..4 {
        assert_eq!(board.cell(Coord::new(r, 2)), Some(Cell::ShipIntact));
    }
    assert_eq!(board.cell(Coord::new(0, 2)), Some(Cell::Empty));
    assert_eq!(board.cell(Coord::new(4, 2)), Some(Cell::Empty));
    assert_eq!(board.remaining_ship_cells(), 3);
    assert_eq!(board.ships(), &[run(1, 2, 3, Orientation::Vertical)]);
}

#[test]
fn test_place_without_room_is_invariant_violation() {
    let mut board = Board::new(4);
    board.place(run(0, 0, 2, Orientation::Horizontal)).unwrap();
    let before = board.clone();

    let overlapping = run(0, 1, 2, Orientation::Vertical);
    assert_eq!(
        board.place(overlapping).unwrap_err(),
        BoardError::InvariantViolation(overlapping)
    );
    let off_board = run(3, 3, 2, Orientation::Horizontal);
    assert_eq!(
        board.place(off_board).unwrap_err(),
        BoardError::InvariantViolation(off_board)
    );
    assert_eq!(board, before);
}

#[test]
fn test_resolve_shot_transitions() {
    let mut board = Board::new(4);
    board.place(run(0, 0, 1, Orientation::Horizontal)).unwrap();

    assert_eq!(board.resolve_shot(Coord::new(0, 0)), ShotOutcome::Hit);
    assert_eq!(board.cell(Coord::new(0, 0)), Some(Cell::ShipSunk));
    assert_eq!(board.resolve_shot(Coord::new(2, 3)), ShotOutcome::Miss);
    assert_eq!(board.cell(Coord::new(2, 3)), Some(Cell::Miss));

    assert_eq!(board.resolve_shot(Coord::new(0, 0)), ShotOutcome::AlreadyTargeted);
    assert_eq!(board.resolve_shot(Coord::new(2, 3)), ShotOutcome::AlreadyTargeted);
    assert_eq!(board.cell(Coord::new(0, 0)), Some(Cell::ShipSunk));
    assert_eq!(board.cell(Coord::new(2, 3)), Some(Cell::Miss));
}

#[test]
fn test_out_of_bounds_shot_changes_nothing() {
    let mut board = Board::new(3);
    board.place(run(0, 0, 3, Orientation::Horizontal)).unwrap();
    let before = board.snapshot();
    assert_eq!(board.resolve_shot(Coord::new(3, 0)), ShotOutcome::OutOfBounds);
    assert_eq!(board.resolve_shot(Coord::new(0, 3)), ShotOutcome::OutOfBounds);
    assert_eq!(board.resolve_shot(Coord::new(usize::MAX, 1)), ShotOutcome::OutOfBounds);
    assert_eq!(board.snapshot(), before);
}

#[test]
fn test_all_sunk_after_last_ship_cell() {
    let mut board = Board::new(4);
    board.place(run(0, 0, 2, Orientation::Horizontal)).unwrap();
    board.place(run(3, 3, 1, Orientation::Vertical)).unwrap();

    board.resolve_shot(Coord::new(0, 0));
    assert!(!board.all_sunk());
    board.resolve_shot(Coord::new(0, 1));
    assert!(!board.all_sunk());
    board.resolve_shot(Coord::new(2, 2));
    assert!(!board.all_sunk());
    // single-cell ship is the last intact cell
    board.resolve_shot(Coord::new(3, 3));
    assert!(board.all_sunk());
}

#[test]
fn test_legal_placements_on_three_by_three() {
    let board = Board::new(3);
    let all: HashSet<Placement> = board.legal_placements(2).collect();
    assert_eq!(all.len(), 12);
    assert_eq!(
        all.iter().filter(|p| p.orientation == Orientation::Horizontal).count(),
        6
    );
    assert!(all.contains(&run(2, 1, 2, Orientation::Horizontal)));
    assert!(all.contains(&run(1, 2, 2, Orientation::Vertical)));
    assert!(!all.contains(&run(0, 2, 2, Orientation::Horizontal)));
    assert!(!all.contains(&run(2, 0, 2, Orientation::Vertical)));
}

#[test]
fn test_random_placement_only_draws_legal_runs() {
    let board = Board::new(3);
    let legal: HashSet<Placement> = board.legal_placements(2).collect();
    let mut seen = HashSet::new();
    let mut rng = SmallRng::seed_from_u64(42);
    for _ in 0..2000 {
        let p = board.random_placement(&mut rng, 2).unwrap();
        assert!(legal.contains(&p), "illegal placement {:?}", p);
        seen.insert(p);
    }
    assert_eq!(seen, legal, "every legal run should eventually be drawn");
}

#[test]
fn test_random_placement_avoids_existing_ships() {
    let mut board = Board::new(3);
    board.place(run(1, 0, 3, Orientation::Horizontal)).unwrap();
    let mut rng = SmallRng::seed_from_u64(7);
    for _ in 0..500 {
        let p = board.random_placement(&mut rng, 2).unwrap();
        assert_eq!(p.orientation, Orientation::Horizontal);
        assert_ne!(p.start.row, 1);
    }
}

#[test]
fn test_random_placement_reports_full_board() {
    let mut board = Board::new(2);
    board.place(run(0, 0, 2, Orientation::Horizontal)).unwrap();
    board.place(run(1, 0, 1, Orientation::Horizontal)).unwrap();
    let mut rng = SmallRng::seed_from_u64(1);
    assert_eq!(
        board.random_placement(&mut rng, 2).unwrap_err(),
        BoardError::UnableToPlaceShip { length: 2 }
    );
    assert_eq!(
        board.random_placement(&mut rng, 3).unwrap_err(),
        BoardError::InvalidLength {
            length: 3,
            board_size: 2
        }
    );
}

#[test]
fn test_same_seed_same_placement() {
    let board = Board::new(7);
    let mut rng1 = SmallRng::seed_from_u64(99);
    let mut rng2 = SmallRng::seed_from_u64(99);
    for len in [3, 2, 2, 1] {
        assert_eq!(
            board.random_placement(&mut rng1, len).unwrap(),
            board.random_placement(&mut rng2, len).unwrap()
        );
    }
}

#[test]
fn test_try_new_rejects_overflowing_size() {
    assert_eq!(
        Board::try_new(usize::MAX).unwrap_err(),
        BoardError::TooLarge { size: usize::MAX }
    );
    let board = Board::try_new(4).unwrap();
    assert_eq!(board, Board::new(4));
}
