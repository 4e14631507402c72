use super::*;

#[test]
fn test_side_opponent() {
    assert_eq!(Side::Black.opponent(), Side::White);
    assert_eq!(Side::White.opponent(), Side::Black);
}

#[test]
fn test_coord_new() {
    let pos = Coord::new(2, 5);
    assert_eq!(pos.x, 2);
    assert_eq!(pos.y, 5);
}

#[test]
fn test_coord_conversion() {
    let pos = Coord::new(3, 4);
    assert_eq!(pos.to_index(), 3 + 8 * 4);
    assert_eq!(pos.to_index(), 35);

    let pos2 = Coord::from_index(35);
    assert_eq!(pos2.x, 3);
    assert_eq!(pos2.y, 4);
}

#[test]
fn test_coord_validity() {
    assert!(Coord::is_valid(0, 0));
    assert!(Coord::is_valid(7, 7));
    assert!(!Coord::is_valid(-1, 0));
    assert!(!Coord::is_valid(0, -1));
    assert!(!Coord::is_valid(8, 0));
    assert!(!Coord::is_valid(0, 8));

    assert_eq!(Coord::try_new(7, 0), Some(Coord::new(7, 0)));
    assert_eq!(Coord::try_new(7, 8), None);
    assert!(!Coord { x: 9, y: 0 }.is_on_board());
}

#[test]
fn test_coord_offset() {
    let corner = Coord::new(0, 0);
    assert_eq!(corner.offset(1, 1), Some(Coord::new(1, 1)));
    assert_eq!(corner.offset(-1, 0), None);
    assert_eq!(Coord::new(7, 7).offset(0, 1), None);
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 8);
    assert_eq!(TOTAL_CELLS, 64);
    assert_eq!(DIRECTIONS.len(), 8);
}

#[test]
fn test_corner_indices() {
    assert_eq!(Coord::CORNERS[0].to_index(), 0);
    assert_eq!(Coord::CORNERS[1].to_index(), 56);
    assert_eq!(Coord::CORNERS[2].to_index(), 7);
    assert_eq!(Coord::CORNERS[3].to_index(), 63);
}

#[test]
fn test_move_helpers() {
    assert_eq!(Move::at(2, 3), Move::Place(Coord::new(2, 3)));
    assert_eq!(Move::at(2, 3).coord(), Some(Coord::new(2, 3)));
    assert_eq!(Move::Pass.coord(), None);
    assert!(Move::Pass.is_pass());
    assert_eq!(Move::from(Coord::new(1, 1)), Move::at(1, 1));
    assert_eq!(Move::Pass.to_string(), "pass");
    assert_eq!(Move::at(4, 5).to_string(), "(4, 5)");
}

#[test]
fn test_cell_side() {
    assert_eq!(Cell::Empty.side(), None);
    assert_eq!(Cell::Black.side(), Some(Side::Black));
    assert_eq!(Cell::from(Side::White), Cell::White);
}
