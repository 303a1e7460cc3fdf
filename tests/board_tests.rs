use seabattle::{Board, BoardError, Cell, Coord, Orientation, Ship, ShotResult};

fn board_with_destroyer() -> Board {
    let mut board = Board::new();
    assert!(board.add(Ship::new(2, Coord::new(0, 0), Orientation::Horizontal)));
    board
}

#[test]
fn test_adjacent_placement_rejected() {
    let mut board = board_with_destroyer();
    assert!(!board.add(Ship::new(1, Coord::new(1, 1), Orientation::Horizontal)));
    assert_eq!(board.ships().len(), 1);
    assert_eq!(board.cell(Coord::new(1, 1)), Some(Cell::Empty));

    // one cell of clearance is enough
    assert!(board.add(Ship::new(1, Coord::new(2, 2), Orientation::Vertical)));
    assert_eq!(board.ships().len(), 2);
}

#[test]
fn test_placement_is_all_or_nothing() {
    let mut board = board_with_destroyer();
    assert!(board.add(Ship::new(1, Coord::new(4, 4), Orientation::Horizontal)));
    let exclusion = board.exclusion();

    // first two cells are free, the last one touches the single at (4, 4)
    let blocked = Ship::new(3, Coord::new(3, 1), Orientation::Horizontal);
    let ship = Ship::new(3, Coord::new(3, 0), Orientation::Vertical);
    assert_eq!(board.try_add(blocked), Err(BoardError::ShipTooClose));
    assert_eq!(board.exclusion(), exclusion);
    for at in blocked.cells() {
        assert_eq!(board.cell(at), Some(Cell::Empty));
    }
    assert!(board.add(ship));
}

#[test]
fn test_out_of_bounds_placement_rejected() {
    let mut board = Board::new();
    let off_edge = Ship::new(2, Coord::new(0, 5), Orientation::Horizontal);
    assert_eq!(board.try_add(off_edge), Err(BoardError::ShipOutOfBounds));
    let off_bottom = Ship::new(3, Coord::new(4, 0), Orientation::Vertical);
    assert_eq!(board.try_add(off_bottom), Err(BoardError::ShipOutOfBounds));
    let bow_off = Ship::new(1, Coord::new(6, 6), Orientation::Vertical);
    assert!(!board.add(bow_off));
    assert!(!board.has_live_ships());
    assert!(board.exclusion().is_empty());
}

#[test]
fn test_exclusion_covers_ship_and_contour() {
    let board = board_with_destroyer();
    let zone: Vec<Coord> = board.exclusion().iter_set_bits().collect();
    assert_eq!(
        zone,
        vec![
            Coord::new(0, 0),
            Coord::new(0, 1),
            Coord::new(0, 2),
            Coord::new(1, 0),
            Coord::new(1, 1),
            Coord::new(1, 2),
        ]
    );
}

#[test]
fn test_hit_then_kill_marks_contour() {
    let mut board = board_with_destroyer();

    assert_eq!(board.shot(Coord::new(0, 0)).unwrap(), ShotResult::Hit);
    assert_eq!(board.ships()[0].health(), 1);
    assert_eq!(board.cell(Coord::new(0, 0)), Some(Cell::Hit));

    assert_eq!(board.shot(Coord::new(0, 1)).unwrap(), ShotResult::Kill);
    assert!(!board.has_live_ships());
    assert_eq!(board.cell(Coord::new(0, 0)), Some(Cell::Sunk));
    assert_eq!(board.cell(Coord::new(0, 1)), Some(Cell::Sunk));
    for (r, c) in [(1, 0), (1, 1), (1, 2), (0, 2)] {
        assert_eq!(board.cell(Coord::new(r, c)), Some(Cell::Buffer));
    }
    assert_eq!(board.cell(Coord::new(2, 2)), Some(Cell::Empty));

    // contour cells count as already shot
    assert_eq!(board.shot(Coord::new(1, 1)).unwrap(), ShotResult::Repeat);
    assert_eq!(board.shot(Coord::new(0, 0)).unwrap(), ShotResult::Repeat);
}

#[test]
fn test_sinking_turns_earlier_misses_into_contour() {
    let mut board = Board::new();
    assert!(board.add(Ship::new(1, Coord::new(3, 3), Orientation::Horizontal)));
    assert_eq!(board.shot(Coord::new(2, 2)).unwrap(), ShotResult::Miss);
    assert_eq!(board.shot(Coord::new(3, 3)).unwrap(), ShotResult::Kill);
    assert_eq!(board.cell(Coord::new(2, 2)), Some(Cell::Buffer));
    assert_eq!(board.cell(Coord::new(4, 4)), Some(Cell::Buffer));
}

#[test]
fn test_repeat_miss_changes_nothing() {
    let mut board = board_with_destroyer();
    assert_eq!(board.shot(Coord::new(5, 5)).unwrap(), ShotResult::Miss);
    let snapshot = board.clone();
    assert_eq!(board.shot(Coord::new(5, 5)).unwrap(), ShotResult::Repeat);
    assert_eq!(board, snapshot);
}

#[test]
fn test_repeat_hit_does_not_damage_again() {
    let mut board = Board::new();
    assert!(board.add(Ship::new(3, Coord::new(2, 1), Orientation::Vertical)));
    assert_eq!(board.shot(Coord::new(3, 1)).unwrap(), ShotResult::Hit);
    assert_eq!(board.shot(Coord::new(3, 1)).unwrap(), ShotResult::Repeat);
    assert_eq!(board.ships()[0].health(), 2);
}

#[test]
fn test_shot_off_board_is_an_error() {
    let mut board = Board::new();
    let at = Coord::new(6, 0);
    assert_eq!(board.shot(at), Err(BoardError::OutOfBounds(at)));
    assert_eq!(board.cell(at), None);
}

#[test]
fn test_concealed_rendering_hides_ships() {
    let mut open = Board::new();
    let mut hidden = Board::new_concealed();
    let ship = Ship::new(2, Coord::new(0, 0), Orientation::Horizontal);
    assert!(open.add(ship));
    assert!(hidden.add(ship));

    let open_text = open.to_string();
    let hidden_text = hidden.to_string();
    assert!(open_text.starts_with("  | 1 | 2 | 3 | 4 | 5 | 6 |"));
    assert!(open_text.contains("1 | ■ | ■ | . | . | . | . |"));
    assert!(!hidden_text.contains('■'));
    assert_eq!(hidden_text, Board::new().to_string());

    // damage is never hidden
    hidden.shot(Coord::new(0, 0)).unwrap();
    assert!(hidden.to_string().contains("1 | X | . |"));

    hidden.set_concealed(false);
    assert!(hidden.to_string().contains("1 | X | ■ |"));
}

#[test]
fn test_board_error_display() {
    assert_eq!(
        BoardError::OutOfBounds(Coord::new(6, 2)).to_string(),
        "Coordinate (7, 3) is off the board"
    );
    assert_eq!(
        BoardError::ShipTooClose.to_string(),
        "Ship placement overlaps or touches another ship"
    );
}
