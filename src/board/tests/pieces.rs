//! Rook, knight, bishop, queen and king movement tests.

use crate::board::{initial_board, Board, BoardBuilder, Color, Kind, Square};

fn lone(square: Square, color: Color, kind: Kind) -> Board {
    BoardBuilder::new().piece(square, color, kind).build()
}

#[test]
fn test_rook_slides_along_empty_back_rank() {
    let a1 = Square::at(7, 0);
    let board = lone(a1, Color::White, Kind::Rook);
    assert!(board.is_valid_move(a1, Square::at(7, 7)));
    assert!(board.is_valid_move(a1, Square::at(0, 0)));
}

#[test]
fn test_rook_blocked_by_piece_in_between() {
    let a1 = Square::at(7, 0);
    let board = BoardBuilder::new()
        .piece(a1, Color::White, Kind::Rook)
        .piece(Square::at(7, 4), Color::Black, Kind::Pawn)
        .build();
    assert!(!board.is_valid_move(a1, Square::at(7, 7)));
    assert!(board.is_valid_move(a1, Square::at(7, 3)));
    // the blocker itself can be captured
    assert!(board.is_valid_move(a1, Square::at(7, 4)));
}

#[test]
fn test_rook_rejects_diagonal() {
    let a1 = Square::at(7, 0);
    let board = lone(a1, Color::White, Kind::Rook);
    assert!(!board.is_valid_move(a1, Square::at(6, 1)));
}

#[test]
fn test_knight_l_shapes_from_b1() {
    let board = initial_board();
    let b1 = Square::at(7, 1);
    assert!(board.is_valid_move(b1, Square::at(5, 0)));
    assert!(board.is_valid_move(b1, Square::at(5, 2)));
    assert!(!board.is_valid_move(b1, Square::at(5, 1)));
    // own pawn on d2
    assert!(!board.is_valid_move(b1, Square::at(6, 3)));
}

#[test]
fn test_knight_has_eight_targets_in_center() {
    let d4 = Square::at(4, 3);
    let board = lone(d4, Color::Black, Kind::Knight);
    assert_eq!(board.legal_destinations(d4).len(), 8);
}

#[test]
fn test_bishop_clear_diagonal() {
    let c1 = Square::at(7, 2);
    let board = lone(c1, Color::White, Kind::Bishop);
    assert!(board.is_valid_move(c1, Square::at(5, 0)));
    assert!(board.is_valid_move(c1, Square::at(2, 7)));
    // not on a diagonal of c1
    assert!(!board.is_valid_move(c1, Square::at(1, 6)));
}

#[test]
fn test_bishop_blocked_diagonal() {
    let c1 = Square::at(7, 2);
    let board = BoardBuilder::new()
        .piece(c1, Color::White, Kind::Bishop)
        .piece(Square::at(4, 5), Color::Black, Kind::Knight)
        .build();
    assert!(!board.is_valid_move(c1, Square::at(2, 7)));
    assert!(board.is_valid_move(c1, Square::at(4, 5)));
    assert!(board.is_valid_move(c1, Square::at(5, 0)));
}

#[test]
fn test_bishop_in_starting_position_is_boxed_in() {
    let board = initial_board();
    let c1 = Square::at(7, 2);
    assert!(!board.is_valid_move(c1, Square::at(5, 0)));
    assert!(board.legal_destinations(c1).is_empty());
}

#[test]
fn test_bishop_rejects_straight_lines() {
    let c1 = Square::at(7, 2);
    let board = lone(c1, Color::White, Kind::Bishop);
    assert!(!board.is_valid_move(c1, Square::at(4, 2)));
    assert!(!board.is_valid_move(c1, Square::at(7, 5)));
}

#[test]
fn test_queen_moves_like_rook_or_bishop() {
    let d4 = Square::at(4, 3);
    let board = lone(d4, Color::White, Kind::Queen);
    assert!(board.is_valid_move(d4, Square::at(4, 7)));
    assert!(board.is_valid_move(d4, Square::at(0, 3)));
    assert!(board.is_valid_move(d4, Square::at(1, 6)));
    assert!(board.is_valid_move(d4, Square::at(7, 0)));
    assert!(!board.is_valid_move(d4, Square::at(2, 4)));
    assert_eq!(board.legal_destinations(d4).len(), 27);
}

#[test]
fn test_queen_path_blocking() {
    let d4 = Square::at(4, 3);
    let board = BoardBuilder::new()
        .piece(d4, Color::White, Kind::Queen)
        .piece(Square::at(3, 4), Color::White, Kind::Pawn)
        .piece(Square::at(4, 5), Color::Black, Kind::Pawn)
        .build();
    assert!(!board.is_valid_move(d4, Square::at(2, 5)));
    assert!(!board.is_valid_move(d4, Square::at(3, 4)));
    assert!(board.is_valid_move(d4, Square::at(4, 5)));
    assert!(!board.is_valid_move(d4, Square::at(4, 6)));
}

#[test]
fn test_king_steps_to_all_neighbours() {
    let e1 = Square::at(7, 4);
    let center = Square::at(4, 4);
    let board = lone(center, Color::White, Kind::King);
    for d_row in -1..=1 {
        for d_col in -1..=1 {
            let Some(to) = center.offset(d_row, d_col) else {
                continue;
            };
            assert_eq!(board.is_valid_move(center, to), to != center, "to {to}");
        }
    }

    let home = lone(e1, Color::White, Kind::King);
    assert!(!home.is_valid_move(e1, Square::at(5, 4)));
    assert_eq!(home.legal_destinations(e1).len(), 5);
}

#[test]
fn test_king_blocked_by_own_pieces_in_start_position() {
    let board = initial_board();
    assert!(board.legal_destinations(Square::at(7, 4)).is_empty());
}

#[test]
fn test_king_may_capture_king() {
    let board = BoardBuilder::new()
        .piece(Square::at(4, 4), Color::White, Kind::King)
        .piece(Square::at(3, 4), Color::Black, Kind::King)
        .build();
    assert!(board.is_valid_move(Square::at(4, 4), Square::at(3, 4)));
}

#[test]
fn test_own_color_destination_always_illegal() {
    for kind in Kind::ALL {
        let from = Square::at(4, 3);
        for to in Square::all().filter(|&sq| sq != from) {
            let board = BoardBuilder::new()
                .piece(from, Color::Black, kind)
                .piece(to, Color::Black, Kind::Pawn)
                .build();
            assert!(!board.is_valid_move(from, to), "{kind} {from}{to}");
        }
    }
}

#[test]
fn test_null_move_illegal_for_every_kind() {
    for kind in Kind::ALL {
        let sq = Square::at(3, 3);
        let board = lone(sq, Color::White, kind);
        assert!(!board.is_valid_move(sq, sq), "{kind}");
    }
}

#[test]
fn test_empty_start_has_no_moves() {
    let board = Board::empty();
    assert!(!board.is_valid_move(Square::at(0, 0), Square::at(1, 0)));
    assert!(board.legal_destinations(Square::at(0, 0)).is_empty());
}

#[test]
fn test_twenty_moves_each_from_start() {
    let board = initial_board();
    assert_eq!(board.legal_moves(Color::White).len(), 20);
    assert_eq!(board.legal_moves(Color::Black).len(), 20);
}
