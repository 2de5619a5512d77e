//! End-to-end games driven purely through clicks.

use kibitz_core::{Color, Piece, Square};
use kibitz_engine::{Advice, ClickOutcome, GameStatus, Session};

/// Click `from` then `to`, asserting the move is played.
fn play(session: &mut Session, from: Square, to: Square) -> GameStatus {
    let selected = session.click(from);
    assert!(
        matches!(selected, ClickOutcome::Selected { .. }),
        "selecting {from} gave {selected:?}"
    );
    match session.click(to) {
        ClickOutcome::Moved { status, .. } => status,
        other => panic!("{from}-{to} was not played: {other:?}"),
    }
}

#[test]
fn opening_double_push_hands_turn_to_black() {
    let mut session = Session::with_seed(42);

    assert!(matches!(session.click_coords(6, 4), ClickOutcome::Selected { .. }));
    let outcome = session.click_coords(4, 4);
    assert!(matches!(outcome, ClickOutcome::Moved { status: GameStatus::Normal, .. }));

    assert_eq!(session.turn(), Color::Black);
    assert_eq!(session.position().piece_on(Square::E4), Some(Piece::WHITE_PAWN));
    assert!(session.position().is_empty(Square::E2));

    // White may not move twice in a row.
    assert_eq!(
        session.click(Square::D2),
        ClickOutcome::NotYourTurn { turn: Color::Black }
    );
}

#[test]
fn fools_mate_leaves_white_without_a_saving_move() {
    let mut session = Session::with_seed(42);

    assert_eq!(play(&mut session, Square::F2, Square::F3), GameStatus::Normal);
    assert_eq!(play(&mut session, Square::E7, Square::E5), GameStatus::Normal);
    assert_eq!(play(&mut session, Square::G2, Square::G4), GameStatus::Normal);
    assert_eq!(play(&mut session, Square::D8, Square::H4), GameStatus::Checkmate);

    assert_eq!(session.turn(), Color::White);
    let white = session.position().side(Color::White);
    for sq in white {
        assert_eq!(
            session.click(sq),
            ClickOutcome::NoSavingMove { square: sq },
            "{sq} should not be selectable"
        );
    }
}

#[test]
fn check_then_escape() {
    let mut session = Session::with_seed(3);
    session.load("4k3/8/8/8/8/8/3PP3/r3K3".parse().unwrap(), Color::White);
    assert_eq!(session.status(), GameStatus::Check);

    match session.click(Square::E1) {
        ClickOutcome::Selected { moves, advice, .. } => {
            assert_eq!(advice, Advice::InCheck { king: Square::E1 });
            let dests = moves.destinations();
            assert!(dests.contains(Square::F2));
            assert!(!dests.contains(Square::D1) && !dests.contains(Square::F1));
        }
        other => panic!("expected the king to be selectable, got {other:?}"),
    }

    assert!(matches!(session.click(Square::F2), ClickOutcome::Moved { .. }));
    assert_eq!(session.turn(), Color::Black);
}
