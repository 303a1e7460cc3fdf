use rand::rngs::SmallRng;
use rand::SeedableRng;
use seabattle::{fill_fleet, random_board, BitBoard, Board, BoardError, Cell, Coord, FLEET, TOTAL_SHIP_CELLS};

type BB = BitBoard<u64, 6>;

fn ship_mask(board: &Board) -> BB {
    BB::from_cells((0..6).flat_map(|r| (0..6).map(move |c| Coord::new(r, c))).filter(|&at| {
        board.cell(at) == Some(Cell::Ship)
    }))
    .unwrap()
}

fn assert_fleet_layout(board: &Board) {
    let ships = board.ships();
    assert_eq!(ships.len(), FLEET.len());
    let mut lengths: Vec<_> = ships.iter().map(|s| s.length()).collect();
    lengths.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(lengths, FLEET.to_vec());
    assert_eq!(ship_mask(board).count_ones(), TOTAL_SHIP_CELLS);

    for (i, a) in ships.iter().enumerate() {
        let a_mask = BB::from_cells(a.cells()).unwrap();
        for b in &ships[i + 1..] {
            let b_mask = BB::from_cells(b.cells()).unwrap();
            assert!(
                (a_mask.dilate() & b_mask).is_empty(),
                "{:?} touches {:?}",
                a,
                b
            );
        }
    }
}

#[test]
fn test_random_board_places_whole_fleet() {
    for seed in 0..200 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let board = random_board(&mut rng, false);
        assert_fleet_layout(&board);
        assert!(!board.is_concealed());
    }
}

#[test]
fn test_random_board_keeps_concealment() {
    let mut rng = SmallRng::seed_from_u64(9);
    let board = random_board(&mut rng, true);
    assert!(board.is_concealed());
    assert!(!board.to_string().contains('■'));
}

#[test]
fn test_fill_fleet_reports_exhausted_budget() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut board = Board::new();
    assert_eq!(
        fill_fleet(&mut board, &mut rng, 0),
        Err(BoardError::UnableToPlaceShip)
    );
    assert!(!board.has_live_ships());

    let mut board = Board::new();
    assert_eq!(
        fill_fleet(&mut board, &mut rng, 3),
        Err(BoardError::UnableToPlaceShip)
    );
    assert!(board.ships().len() <= 3);
}

#[test]
fn test_same_seed_same_layout() {
    let mut rng1 = SmallRng::seed_from_u64(42);
    let mut rng2 = SmallRng::seed_from_u64(42);
    assert_eq!(random_board(&mut rng1, false), random_board(&mut rng2, false));
}
