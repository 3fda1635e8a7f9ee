use std::fmt;

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opponent(&self) -> Color {
        if *self == Color::White {
            Color::Black
        } else {
            Color::White
        }
    }

    /// White is 0, Black is 1. Used to index the per-side captured lists.
    pub fn index(&self) -> usize {
        match self {
            Self::White => 0,
            Self::Black => 1,
        }
    }

    /// Row direction this color's pawns advance in. White starts at the
    /// high rows and pushes toward row 0.
    pub fn forward(&self) -> i8 {
        match self {
            Self::White => -1,
            Self::Black => 1,
        }
    }

    pub fn pawn_start_row(&self) -> u8 {
        match self {
            Self::White => 6,
            Self::Black => 1,
        }
    }

    /// The farthest row from this color's side, where pawns promote.
    pub fn promotion_row(&self) -> u8 {
        match self {
            Self::White => 0,
            Self::Black => 7,
        }
    }

    pub fn to_human(&self) -> &str {
        match self {
            Self::White => "White",
            Self::Black => "Black",
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    /// Is the piece a sliding piece (one which can move multiple squares in a given direction)
    pub fn is_sliding(&self) -> bool {
        matches!(self, PieceType::Rook | PieceType::Bishop | PieceType::Queen)
    }

    pub fn to_human(&self) -> &str {
        match self {
            Self::Pawn => "pawn",
            Self::Knight => "knight",
            Self::Bishop => "bishop",
            Self::Rook => "rook",
            Self::Queen => "queen",
            Self::King => "king",
        }
    }
}

/// Types a pawn may promote to. Kings and pawns are never valid choices.
pub const PROMOTION_CHOICES: [PieceType; 4] = [
    PieceType::Queen,
    PieceType::Rook,
    PieceType::Bishop,
    PieceType::Knight,
];

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceType,
}

impl Piece {
    pub fn new(color: Color, kind: PieceType) -> Piece {
        Piece { color, kind }
    }

    pub fn to_symbol(&self) -> &str {
        let is_white = self.color == Color::White;
        match self.kind {
            PieceType::Pawn => {
                if is_white {
                    "♙"
                } else {
                    "♟"
                }
            }
            PieceType::Knight => {
                if is_white {
                    "♘"
                } else {
                    "♞"
                }
            }
            PieceType::Bishop => {
                if is_white {
                    "♗"
                } else {
                    "♝"
                }
            }
            PieceType::Rook => {
                if is_white {
                    "♖"
                } else {
                    "♜"
                }
            }
            PieceType::Queen => {
                if is_white {
                    "♕"
                } else {
                    "♛"
                }
            }
            PieceType::King => {
                if is_white {
                    "♔"
                } else {
                    "♚"
                }
            }
        }
    }

    pub fn to_human(&self) -> String {
        format!("{} {}", self.color.to_human(), self.kind.to_human())
    }
}

/// A board coordinate. Row 0 is Black's back rank in the default layout,
/// row 7 is White's.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub fn new(row: u8, col: u8) -> Square {
        if row > 7 || col > 7 {
            panic!("Square ({row}, {col}) is off the board.")
        }
        Square { row, col }
    }

    /// The square offset by (d_row, d_col), or `None` if that falls off
    /// the board.
    pub fn offset(&self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    pub fn to_algebraic(&self) -> String {
        format!(
            "{}{}",
            (b'a' + self.col) as char,
            (b'0' + (8 - self.row)) as char
        )
    }
}

/// Everything needed to reverse an applied move. Pushed when a move is
/// applied, popped on undo, never mutated afterwards — except that
/// `promoted_to` is stamped once if the move turned out to be a promotion,
/// so that undo can restore the original pawn.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct MoveRecord {
    pub from: Square,
    pub to: Square,
    /// The piece as it stood on `from` before the move. For a promotion
    /// this is the pawn, not the piece it became.
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub from_had_moved: bool,
    pub to_had_moved: bool,
    pub promoted_to: Option<PieceType>,
}

impl MoveRecord {
    pub fn to_human(&self) -> String {
        let maybe_capture_str = match self.captured {
            Some(p) => format!(" capturing {}", p.to_human()),
            None => "".to_string(),
        };
        let maybe_promotion_str = match self.promoted_to {
            Some(kind) => format!(" promoting to {}", kind.to_human()),
            None => "".to_string(),
        };
        format!(
            "{} {} to {}{}{}",
            self.piece.to_human(),
            self.from.to_algebraic(),
            self.to.to_algebraic(),
            maybe_capture_str,
            maybe_promotion_str,
        )
    }
}

/// Result of a successfully validated move application.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MoveOutcome {
    /// The move is complete and the turn has passed to the opponent.
    Applied,
    /// A pawn reached the farthest rank. The turn does not pass until
    /// `promote_pawn` resolves the promotion.
    PromotionPending,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Status {
    /// The side to move has legal moves and is not in check.
    Normal,
    /// The side to move is in check but has legal moves.
    Check,
    /// The side to move is checkmated; the contained color won.
    Checkmate(Color),
    /// Stalemate: not in check, no legal moves.
    Draw,
}

impl Status {
    pub fn is_over(&self) -> bool {
        matches!(self, Status::Checkmate(_) | Status::Draw)
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MoveError {
    /// The target square is not a legal destination for the source square.
    IllegalDestination,
    /// A pawn promotion must be resolved before any other move.
    PromotionPending,
    /// `promote_pawn` was called with no promotion outstanding.
    NoPromotionPending,
    /// Pawns cannot promote to a king or stay a pawn.
    InvalidPromotion,
    /// The game has already ended in checkmate or a draw.
    GameOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IllegalDestination => write!(f, "target square is not a legal destination"),
            Self::PromotionPending => write!(f, "a pawn promotion must be resolved first"),
            Self::NoPromotionPending => write!(f, "no pawn promotion is pending"),
            Self::InvalidPromotion => write!(f, "pawns cannot promote to that piece"),
            Self::GameOver => write!(f, "the game is already over"),
        }
    }
}

impl std::error::Error for MoveError {}
