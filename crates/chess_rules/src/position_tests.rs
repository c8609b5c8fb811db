use super::*;

#[test]
fn startpos_basics() {
    let pos = Position::startpos();
    assert_eq!(pos.legal_moves().len(), 20);
    assert!(pos.capture_moves().is_empty());
    assert_eq!(pos.side_to_move(), Color::White);
    assert_eq!(pos.ply(), 0);
    assert!(!pos.is_check());
    assert!(!pos.is_checkmate());
    assert!(!pos.is_stalemate());
}

#[test]
fn ply_counts_both_sides() {
    let pos = Position::from_fen("k7/8/8/8/8/8/8/K7 b - - 0 1").expect("valid fen");
    assert_eq!(pos.ply(), 1);
    let pos = Position::from_fen("k7/8/8/8/8/8/8/K7 w - - 0 5").expect("valid fen");
    assert_eq!(pos.ply(), 8);
}

#[test]
fn make_unmake_restores_the_fingerprint() {
    let mut pos = Position::startpos();
    let start = pos.fingerprint();
    let first = pos.legal_moves()[0];
    pos.make_move(first);
    assert_ne!(pos.fingerprint(), start);
    let reply = pos.legal_moves()[0];
    pos.make_move(reply);
    pos.unmake_move();
    pos.unmake_move();
    assert_eq!(pos.fingerprint(), start);
}

#[test]
fn skip_turn_passes_and_restores() {
    let mut pos = Position::startpos();
    let start = pos.fingerprint();
    assert!(pos.try_skip_turn());
    assert_eq!(pos.side_to_move(), Color::Black);
    assert_ne!(pos.fingerprint(), start);
    pos.undo_skip_turn();
    assert_eq!(pos.fingerprint(), start);
    assert_eq!(pos.side_to_move(), Color::White);
}

#[test]
fn skip_turn_refused_in_check() {
    // Black rook on e2 checks the white king on e1
    let mut pos = Position::from_fen("4k3/8/8/8/8/8/4r3/4K3 w - - 0 1").expect("valid fen");
    assert!(pos.is_check());
    assert!(!pos.try_skip_turn());
}

#[test]
fn capture_flags_match_the_board() {
    // White pawn on e4 can take the d5 pawn
    let pos = Position::from_fen("k7/8/8/3p4/4P3/8/8/K7 w - - 0 1").expect("valid fen");
    let captures = pos.capture_moves();
    assert_eq!(captures.len(), 1);
    assert!(captures[0].is_capture());
    let flagged = pos.legal_moves().iter().filter(|mv| mv.is_capture()).count();
    assert_eq!(flagged, 1);
}

#[test]
fn en_passant_is_a_capture() {
    // Black just pushed e7e5; the f5 pawn may take en passant on e6
    let pos = Position::from_fen("k7/8/8/4pP2/8/8/8/K7 w - e6 0 1").expect("valid fen");
    let captures = pos.capture_moves();
    assert_eq!(captures.len(), 1);
    assert_eq!(captures[0].to_string(), "f5e6");
    assert!(captures[0].is_capture());
}

#[test]
fn quiet_promotions_are_flagged_but_not_captures() {
    let pos = Position::from_fen("k7/6P1/8/8/8/8/8/K7 w - - 0 1").expect("valid fen");
    let promotions: Vec<_> = pos
        .legal_moves()
        .into_iter()
        .filter(|mv| mv.is_promotion())
        .collect();
    assert_eq!(promotions.len(), 4);
    assert!(promotions.iter().all(|mv| !mv.is_capture()));
    assert!(pos.capture_moves().is_empty());
}

#[test]
fn mate_and_stalemate_detection() {
    // Fool's mate: white to move and checkmated
    let pos = Position::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
        .expect("valid fen");
    assert!(pos.is_checkmate());
    assert!(!pos.is_stalemate());

    // Queen-cornered king: black to move and stalemated
    let pos = Position::from_fen("k7/2Q5/8/8/8/8/8/K7 b - - 0 1").expect("valid fen");
    assert!(pos.is_stalemate());
    assert!(!pos.is_checkmate());
}

#[test]
fn invalid_fen_is_an_error() {
    assert!(Position::from_fen("not a position").is_err());
}
