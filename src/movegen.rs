//! Geometric move and attack enumeration. Each piece type owns a fixed
//! delta table and either slides along it (queen, rook, bishop) or takes a
//! single step (king, knight, pawn). Pawns are the exception case
//! throughout: their forward scan never captures, they get a second step
//! from the starting rank, and their captures come from a separate
//! diagonal delta pair.

use crate::board::Board;
use crate::check::king_attacked_after;
use crate::types::{Color, PieceType, Square};

const KING_DELTAS: [(i8, i8); 8] = [
    (1, 0),
    (0, 1),
    (1, 1),
    (1, -1),
    (-1, 0),
    (0, -1),
    (-1, -1),
    (-1, 1),
];

const ROOK_DELTAS: [(i8, i8); 4] = [(1, 0), (0, 1), (-1, 0), (0, -1)];

const BISHOP_DELTAS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, -1), (-1, 1)];

const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (2, 1),
    (2, -1),
    (1, 2),
    (-1, 2),
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (1, -2),
];

const PAWN_PUSH_DELTAS: [(i8, i8); 1] = [(1, 0)];

const PAWN_ATTACK_DELTAS: [(i8, i8); 2] = [(1, 1), (1, -1)];

/// Deltas a piece of this type *moves* along (pawn: the forward push).
pub fn move_deltas(kind: PieceType) -> &'static [(i8, i8)] {
    match kind {
        PieceType::King | PieceType::Queen => &KING_DELTAS,
        PieceType::Rook => &ROOK_DELTAS,
        PieceType::Bishop => &BISHOP_DELTAS,
        PieceType::Knight => &KNIGHT_DELTAS,
        PieceType::Pawn => &PAWN_PUSH_DELTAS,
    }
}

/// Deltas a piece of this type *captures* along. Identical to the move
/// deltas for everything but the pawn.
pub fn attack_deltas(kind: PieceType) -> &'static [(i8, i8)] {
    match kind {
        PieceType::Pawn => &PAWN_ATTACK_DELTAS,
        _ => move_deltas(kind),
    }
}

/// How far a ray may extend: the full board for sliders, one step for
/// everything else.
pub fn slide_limit(kind: PieceType) -> u8 {
    if kind.is_sliding() {
        7
    } else {
        1
    }
}

/// The two disjoint destination sets for one piece: quiet moves and
/// captures. Both are already filtered for self-check.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct MoveSet {
    pub moves: Vec<Square>,
    pub attacks: Vec<Square>,
}

impl MoveSet {
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty() && self.attacks.is_empty()
    }

    pub fn contains(&self, sq: Square) -> bool {
        self.moves.contains(&sq) || self.attacks.contains(&sq)
    }
}

/// Enumerate the legal destinations for the piece on `from`.
///
/// Returns empty sets when the square is empty or holds an opponent
/// piece; that is the caller's "invalid selection" no-op, not an error.
/// Every candidate is vetted through the check oracle, so a move that
/// would leave `turn`'s own king attacked never appears.
pub fn legal_destinations(board: &Board, turn: Color, from: Square) -> MoveSet {
    let mut set = MoveSet::default();
    let piece = match board.piece_at(from) {
        Some(p) if p.color == turn => p,
        _ => return set,
    };

    let direction = if piece.kind == PieceType::Pawn {
        turn.forward()
    } else {
        1
    };
    let max_steps = if piece.kind == PieceType::Pawn {
        if from.row == turn.pawn_start_row() {
            2
        } else {
            1
        }
    } else {
        slide_limit(piece.kind)
    };

    for &(d_row, d_col) in move_deltas(piece.kind) {
        let mut next = from;
        for _ in 0..max_steps {
            next = match next.offset(direction * d_row, direction * d_col) {
                Some(sq) => sq,
                None => break,
            };
            match board.piece_at(next) {
                None => {
                    if !king_attacked_after(board, turn, Some((from, next))) {
                        set.moves.push(next);
                    }
                }
                Some(other) => {
                    // pawns cannot capture forward; their captures are
                    // enumerated separately below
                    if other.color != turn
                        && piece.kind != PieceType::Pawn
                        && !king_attacked_after(board, turn, Some((from, next)))
                    {
                        set.attacks.push(next);
                    }
                    break;
                }
            }
        }
    }

    if piece.kind == PieceType::Pawn {
        for &(d_row, d_col) in &PAWN_ATTACK_DELTAS {
            let target = match from.offset(direction * d_row, direction * d_col) {
                Some(sq) => sq,
                None => continue,
            };
            match board.piece_at(target) {
                Some(other)
                    if other.color != turn
                        && !king_attacked_after(board, turn, Some((from, target))) =>
                {
                    set.attacks.push(target)
                }
                _ => {}
            }
        }
    }

    set
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Piece;

    fn put(board: &mut Board, row: u8, col: u8, color: Color, kind: PieceType) {
        board.set_piece(Square::new(row, col), Some(Piece::new(color, kind)));
    }

    fn kings_only() -> Board {
        let mut board = Board::empty();
        put(&mut board, 7, 4, Color::White, PieceType::King);
        put(&mut board, 0, 4, Color::Black, PieceType::King);
        board
    }

    #[test]
    fn test_empty_or_enemy_square_yields_nothing() {
        let board = Board::new();
        assert!(legal_destinations(&board, Color::White, Square::new(4, 4)).is_empty());
        assert!(legal_destinations(&board, Color::White, Square::new(1, 0)).is_empty());
    }

    #[test]
    fn test_all_destinations_on_board() {
        let board = Board::new();
        for sq in Board::squares() {
            for color in [Color::White, Color::Black] {
                let set = legal_destinations(&board, color, sq);
                for dest in set.moves.iter().chain(set.attacks.iter()) {
                    assert!(dest.row < 8 && dest.col < 8);
                }
            }
        }
    }

    #[test]
    fn test_moves_and_attacks_are_disciplined() {
        // quiet moves land on empty squares, attacks on enemy pieces
        let mut board = kings_only();
        put(&mut board, 4, 4, Color::White, PieceType::Queen);
        put(&mut board, 4, 6, Color::Black, PieceType::Pawn);
        put(&mut board, 2, 4, Color::White, PieceType::Pawn);
        let set = legal_destinations(&board, Color::White, Square::new(4, 4));
        for &m in &set.moves {
            assert_eq!(board.piece_at(m), None);
        }
        for &a in &set.attacks {
            assert_eq!(board.piece_at(a).map(|p| p.color), Some(Color::Black));
        }
        assert!(set.attacks.contains(&Square::new(4, 6)));
        // the friendly pawn blocks the file and is not a target
        assert!(!set.contains(Square::new(2, 4)));
        assert!(set.moves.contains(&Square::new(3, 4)));
        assert!(!set.contains(Square::new(1, 4)));
    }

    #[test]
    fn test_knight_from_corner() {
        let mut board = kings_only();
        put(&mut board, 0, 0, Color::White, PieceType::Knight);
        let set = legal_destinations(&board, Color::White, Square::new(0, 0));
        assert_eq!(set.attacks.len(), 0);
        let mut moves = set.moves.clone();
        moves.sort_by_key(|sq| (sq.row, sq.col));
        assert_eq!(moves, vec![Square::new(1, 2), Square::new(2, 1)]);
    }

    #[test]
    fn test_knight_jumps_over_pieces() {
        let board = Board::new();
        let set = legal_destinations(&board, Color::White, Square::new(7, 1));
        assert!(set.moves.contains(&Square::new(5, 0)));
        assert!(set.moves.contains(&Square::new(5, 2)));
        assert_eq!(set.moves.len(), 2);
    }

    #[test]
    fn test_sliders_blocked_at_start() {
        let board = Board::new();
        for col in [0, 2, 3, 5, 7] {
            assert!(legal_destinations(&board, Color::White, Square::new(7, col)).is_empty());
        }
    }

    #[test]
    fn test_pawn_double_step_from_start() {
        let board = Board::new();
        let set = legal_destinations(&board, Color::White, Square::new(6, 4));
        assert!(set.moves.contains(&Square::new(5, 4)));
        assert!(set.moves.contains(&Square::new(4, 4)));
        assert_eq!(set.moves.len(), 2);
        assert!(set.attacks.is_empty());

        let set = legal_destinations(&board, Color::Black, Square::new(1, 4));
        assert!(set.moves.contains(&Square::new(2, 4)));
        assert!(set.moves.contains(&Square::new(3, 4)));
    }

    #[test]
    fn test_pawn_single_step_off_start_rank() {
        let mut board = kings_only();
        put(&mut board, 4, 4, Color::White, PieceType::Pawn);
        let set = legal_destinations(&board, Color::White, Square::new(4, 4));
        assert_eq!(set.moves, vec![Square::new(3, 4)]);
    }

    #[test]
    fn test_pawn_double_step_blocked() {
        let mut board = kings_only();
        put(&mut board, 6, 4, Color::White, PieceType::Pawn);
        put(&mut board, 5, 4, Color::Black, PieceType::Knight);
        let set = legal_destinations(&board, Color::White, Square::new(6, 4));
        // blocked immediately: no forward squares, and no forward capture
        assert!(set.moves.is_empty());
    }

    #[test]
    fn test_pawn_cannot_capture_forward() {
        let mut board = kings_only();
        put(&mut board, 4, 4, Color::White, PieceType::Pawn);
        put(&mut board, 3, 4, Color::Black, PieceType::Pawn);
        let set = legal_destinations(&board, Color::White, Square::new(4, 4));
        assert!(set.is_empty());
    }

    #[test]
    fn test_pawn_diagonal_captures() {
        let mut board = kings_only();
        put(&mut board, 4, 4, Color::White, PieceType::Pawn);
        put(&mut board, 3, 3, Color::Black, PieceType::Rook);
        put(&mut board, 3, 5, Color::White, PieceType::Knight);
        let set = legal_destinations(&board, Color::White, Square::new(4, 4));
        assert_eq!(set.attacks, vec![Square::new(3, 3)]);
        assert_eq!(set.moves, vec![Square::new(3, 4)]);
    }

    #[test]
    fn test_self_check_moves_excluded() {
        // a pinned bishop may not leave the king's file
        let mut board = kings_only();
        put(&mut board, 5, 4, Color::White, PieceType::Bishop);
        put(&mut board, 2, 4, Color::Black, PieceType::Rook);
        let set = legal_destinations(&board, Color::White, Square::new(5, 4));
        assert!(set.is_empty());
    }

    #[test]
    fn test_king_avoids_attacked_rank() {
        let mut board = kings_only();
        put(&mut board, 7, 0, Color::Black, PieceType::Rook);
        let set = legal_destinations(&board, Color::White, Square::new(7, 4));
        assert!(!set.is_empty());
        for dest in set.moves.iter().chain(set.attacks.iter()) {
            assert_ne!(dest.row, 7);
        }
    }

    #[test]
    fn test_check_evasion_only() {
        // king in check from a rook: blocking is the queen's only move
        let mut board = kings_only();
        put(&mut board, 3, 4, Color::Black, PieceType::Rook);
        put(&mut board, 5, 0, Color::White, PieceType::Queen);
        let set = legal_destinations(&board, Color::White, Square::new(5, 0));
        assert_eq!(set.moves, vec![Square::new(5, 4)]);
        assert!(set.attacks.is_empty());
    }
}
