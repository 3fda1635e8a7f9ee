//! Check detection by simulating a hypothetical move on a board copy and
//! projecting attack rays outward from the king's square. Attack patterns
//! are direction-symmetric, so scanning from the king finds the same
//! attackers that scanning from every enemy piece would, at lower cost.

use crate::board::Board;
use crate::movegen::{attack_deltas, slide_limit};
use crate::types::{Color, PieceType, Square};

const ALL_KINDS: [PieceType; 6] = [
    PieceType::Pawn,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Rook,
    PieceType::Queen,
    PieceType::King,
];

/// Would `color`'s king be attacked after playing `hypothetical`
/// (from, to)? Pass `None` to test the position as it stands.
///
/// The simulation runs on a clone, so the live board is never touched.
/// Panics if `color` has no king, which only happens on a corrupted board.
pub fn king_attacked_after(
    board: &Board,
    color: Color,
    hypothetical: Option<(Square, Square)>,
) -> bool {
    let mut probe = board.clone();
    if let Some((from, to)) = hypothetical {
        let piece = probe.piece_at(from);
        probe.set_piece(to, piece);
        probe.set_piece(from, None);
    }
    let king = probe.find_king(color);

    for kind in ALL_KINDS {
        // Pawn attack squares depend on which way the *enemy* pawns
        // advance; projecting from the king with the defender's forward
        // direction lands exactly on them.
        let direction = if kind == PieceType::Pawn {
            color.forward()
        } else {
            1
        };
        for &(d_row, d_col) in attack_deltas(kind) {
            let mut next = king;
            for _ in 0..slide_limit(kind) {
                next = match next.offset(direction * d_row, direction * d_col) {
                    Some(sq) => sq,
                    None => break,
                };
                match probe.piece_at(next) {
                    None => continue,
                    Some(p) => {
                        if p.color != color && p.kind == kind {
                            return true;
                        }
                        // first piece on the ray blocks it either way
                        break;
                    }
                }
            }
        }
    }
    false
}
