use itertools::iproduct;

use crate::types::{Color, Piece, PieceType, Square};

/// One square of the grid. The highlight flags (`selected`, `valid_move`,
/// `valid_attack`) are transient display state, recomputed on every
/// selection and cleared on deselect. `moved` records whether the piece
/// currently occupying the square has moved at least once.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub struct Cell {
    pub piece: Option<Piece>,
    pub selected: bool,
    pub valid_move: bool,
    pub valid_attack: bool,
    pub moved: bool,
}

impl Cell {
    fn with_piece(piece: Piece) -> Cell {
        Cell {
            piece: Some(piece),
            ..Cell::default()
        }
    }
}

const BACK_RANK: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// An 8×8 grid of cells. This is a plain value type: `Clone` is a
/// structural copy of the cells, which is what the check oracle relies on
/// to simulate moves without touching the live board.
///
/// Invariant: at most one king of each color. The default layout places
/// exactly one of each, and no operation adds or removes kings (promotion
/// never creates one).
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Board {
    cells: [[Cell; 8]; 8],
}

impl Board {
    /// The standard starting position: Black on rows 0–1, White on rows 6–7.
    pub fn new() -> Board {
        let mut board = Board::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            let col = col as u8;
            board.cells[0][col as usize] = Cell::with_piece(Piece::new(Color::Black, kind));
            board.cells[7][col as usize] = Cell::with_piece(Piece::new(Color::White, kind));
            board.cells[1][col as usize] =
                Cell::with_piece(Piece::new(Color::Black, PieceType::Pawn));
            board.cells[6][col as usize] =
                Cell::with_piece(Piece::new(Color::White, PieceType::Pawn));
        }
        board
    }

    pub fn empty() -> Board {
        Board {
            cells: [[Cell::default(); 8]; 8],
        }
    }

    pub fn cell(&self, sq: Square) -> &Cell {
        &self.cells[sq.row as usize][sq.col as usize]
    }

    pub fn cell_mut(&mut self, sq: Square) -> &mut Cell {
        &mut self.cells[sq.row as usize][sq.col as usize]
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cell(sq).piece
    }

    pub fn set_piece(&mut self, sq: Square, piece: Option<Piece>) {
        self.cell_mut(sq).piece = piece;
    }

    /// All 64 squares, row by row.
    pub fn squares() -> impl Iterator<Item = Square> {
        iproduct!(0..8u8, 0..8u8).map(|(row, col)| Square { row, col })
    }

    /// Locate `color`'s king. Panics if it is missing: under the one-king
    /// invariant that is a corrupted board, not a game condition.
    pub fn find_king(&self, color: Color) -> Square {
        Self::squares()
            .find(|&sq| self.piece_at(sq) == Some(Piece::new(color, PieceType::King)))
            .unwrap_or_else(|| panic!("No {} king on the board, something is amiss", color.to_human()))
    }

    /// Clear `selected`/`valid_move`/`valid_attack` on every cell.
    pub fn clear_highlights(&mut self) {
        for row in self.cells.iter_mut() {
            for cell in row.iter_mut() {
                cell.selected = false;
                cell.valid_move = false;
                cell.valid_attack = false;
            }
        }
    }

    pub fn draw_board(&self) -> String {
        let mut string = String::new();
        for row in 0..8u8 {
            string.push_str(&format!("{} ", 8 - row));
            for col in 0..8u8 {
                match self.piece_at(Square { row, col }) {
                    Some(p) => string.push_str(&format!(" {}", p.to_symbol())),
                    None => string.push_str(" ."),
                }
            }
            string.push('\n');
        }
        string.push_str("   a b c d e f g h\n");
        string
    }

    pub fn draw_to_terminal(&self) {
        println!("{}", self.draw_board());
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
