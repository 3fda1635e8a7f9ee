//! The turn/history state machine. `GameState` exclusively owns the live
//! board; every operation here runs to completion before the next one is
//! accepted, and the check oracle only ever works on copies.

use crate::board::Board;
use crate::check::king_attacked_after;
use crate::movegen::{legal_destinations, MoveSet};
use crate::types::{
    Color, MoveError, MoveOutcome, MoveRecord, Piece, PieceType, Square, Status,
};

pub struct GameState {
    board: Board,
    turn: Color,
    selected: Option<Square>,
    pending_promotion: Option<Square>,
    history: Vec<MoveRecord>,
    captured: [Vec<Piece>; 2],
    status: Status,
}

impl GameState {
    /// A fresh game: default layout, White to move, empty history and
    /// captured lists, nothing selected. Also serves as reset.
    pub fn new() -> GameState {
        GameState {
            board: Board::new(),
            turn: Color::White,
            selected: None,
            pending_promotion: None,
            history: Vec::new(),
            captured: [Vec::new(), Vec::new()],
            status: Status::Normal,
        }
    }

    /// Start from an arbitrary position. The board must satisfy the
    /// one-king-per-color invariant.
    pub fn from_board(board: Board, turn: Color) -> GameState {
        let mut game = GameState {
            board,
            turn,
            selected: None,
            pending_promotion: None,
            history: Vec::new(),
            captured: [Vec::new(), Vec::new()],
            status: Status::Normal,
        };
        game.status = game.classify_status();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    pub fn pending_promotion(&self) -> Option<Square> {
        self.pending_promotion
    }

    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Pieces captured *by* `color`.
    pub fn captured(&self, color: Color) -> &[Piece] {
        &self.captured[color.index()]
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Legal destinations for the piece on `from`, for the side to move.
    /// This is the enumeration an automated opponent drives its choices
    /// from.
    pub fn legal_destinations(&self, from: Square) -> MoveSet {
        legal_destinations(&self.board, self.turn, from)
    }

    /// Select `square` and paint its destinations onto the board.
    ///
    /// Returns `false` without changing anything if the square is empty,
    /// opponent-owned, another selection is still active (callers must
    /// deselect first), a promotion is pending, or the game is over.
    pub fn select(&mut self, square: Square) -> bool {
        if self.is_over() || self.pending_promotion.is_some() || self.selected.is_some() {
            return false;
        }
        match self.board.piece_at(square) {
            Some(p) if p.color == self.turn => {}
            _ => return false,
        }

        let set = self.legal_destinations(square);
        self.board.cell_mut(square).selected = true;
        for &sq in &set.moves {
            self.board.cell_mut(sq).valid_move = true;
        }
        for &sq in &set.attacks {
            self.board.cell_mut(sq).valid_attack = true;
        }
        self.selected = Some(square);
        true
    }

    /// Clear the selection and every highlight flag. Idempotent.
    pub fn deselect(&mut self) {
        self.board.clear_highlights();
        self.selected = None;
    }

    /// Validate and apply a move. Legality is re-checked here from
    /// scratch, so callers do not have to go through `select` first.
    ///
    /// On `Ok(MoveOutcome::PromotionPending)` the pawn has reached the
    /// farthest rank: the turn has *not* passed and every operation other
    /// than `promote_pawn` and `undo` is rejected until it does.
    pub fn try_move(&mut self, from: Square, to: Square) -> Result<MoveOutcome, MoveError> {
        if self.is_over() {
            return Err(MoveError::GameOver);
        }
        if self.pending_promotion.is_some() {
            return Err(MoveError::PromotionPending);
        }
        let set = self.legal_destinations(from);
        if !set.contains(to) {
            return Err(MoveError::IllegalDestination);
        }
        // a non-empty destination set implies a piece of ours on `from`
        let piece = match self.board.piece_at(from) {
            Some(p) => p,
            None => return Err(MoveError::IllegalDestination),
        };

        let captured = self.board.piece_at(to);
        if let Some(cap) = captured {
            self.captured[self.turn.index()].push(cap);
        }

        let from_had_moved = self.board.cell(from).moved;
        let to_had_moved = self.board.cell(to).moved;
        self.board.set_piece(to, Some(piece));
        self.board.cell_mut(to).moved = true;
        self.board.set_piece(from, None);
        self.board.cell_mut(from).moved = false;
        self.deselect();

        self.history.push(MoveRecord {
            from,
            to,
            piece,
            captured,
            from_had_moved,
            to_had_moved,
            promoted_to: None,
        });

        if piece.kind == PieceType::Pawn && to.row == self.turn.promotion_row() {
            self.pending_promotion = Some(to);
            return Ok(MoveOutcome::PromotionPending);
        }

        self.turn = self.turn.opponent();
        self.status = self.classify_status();
        Ok(MoveOutcome::Applied)
    }

    /// Resolve a pending promotion by converting the pawn, then complete
    /// the turn toggle that `try_move` deferred.
    pub fn promote_pawn(&mut self, kind: PieceType) -> Result<(), MoveError> {
        let square = self.pending_promotion.ok_or(MoveError::NoPromotionPending)?;
        if matches!(kind, PieceType::King | PieceType::Pawn) {
            return Err(MoveError::InvalidPromotion);
        }
        self.board
            .set_piece(square, Some(Piece::new(self.turn, kind)));
        if let Some(record) = self.history.last_mut() {
            record.promoted_to = Some(kind);
        }
        self.pending_promotion = None;
        self.turn = self.turn.opponent();
        self.status = self.classify_status();
        Ok(())
    }

    /// Reverse the most recent move: restore both cells exactly (piece
    /// identities and `moved` flags), pop the capture, hand the turn back
    /// to the mover. A promotion is rolled all the way back to the pawn.
    /// Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let record = match self.history.pop() {
            Some(r) => r,
            None => return false,
        };
        self.deselect();

        let mover = record.piece.color;
        if record.captured.is_some() {
            self.captured[mover.index()].pop();
        }
        self.board.set_piece(record.from, Some(record.piece));
        self.board.cell_mut(record.from).moved = record.from_had_moved;
        self.board.set_piece(record.to, record.captured);
        self.board.cell_mut(record.to).moved = record.to_had_moved;

        self.pending_promotion = None;
        self.turn = mover;
        self.status = self.classify_status();
        true
    }

    /// Does `color` have any legal move at all? Only used for terminal
    /// classification.
    pub fn can_player_move(&self, color: Color) -> bool {
        Board::squares().any(|sq| {
            self.board.piece_at(sq).is_some_and(|p| p.color == color)
                && !legal_destinations(&self.board, color, sq).is_empty()
        })
    }

    /// Classify the live position for the side to move.
    pub fn classify_status(&self) -> Status {
        let check = king_attacked_after(&self.board, self.turn, None);
        let can_move = self.can_player_move(self.turn);
        match (check, can_move) {
            (true, true) => Status::Check,
            (true, false) => Status::Checkmate(self.turn.opponent()),
            (false, false) => Status::Draw,
            (false, true) => Status::Normal,
        }
    }

    /// The status string a frontend displays verbatim.
    pub fn status_line(&self) -> String {
        match self.status {
            Status::Normal => format!("{}'s Turn", self.turn.to_human()),
            Status::Check => format!("{}'s Turn - Check", self.turn.to_human()),
            Status::Checkmate(winner) => format!("{} Won", winner.to_human()),
            Status::Draw => "Draw".to_string(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}
