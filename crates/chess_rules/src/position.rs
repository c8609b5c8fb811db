//! Mutable position handle with make/unmake and a null-move skip.

use cozy_chess::{BitBoard, Board, Color, Piece, Rank, Square};

use crate::types::{Move, RulesError};

/// A chess position owned by the searching side.
///
/// The search mutates it in place through [`Position::make_move`] /
/// [`Position::unmake_move`] (and the skip-turn pair) in strictly nested
/// fashion; an undo stack of prior boards provides unmake on top of a rules
/// engine that has none. Cloning is for hosts and tests; the search never
/// copies a position.
#[derive(Debug, Clone)]
pub struct Position {
    board: Board,
    undo_stack: Vec<Board>,
}

impl Position {
    /// The standard starting position.
    pub fn startpos() -> Self {
        Self {
            board: Board::default(),
            undo_stack: Vec::new(),
        }
    }

    /// Parse a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, RulesError> {
        let board = Board::from_fen(fen, false)
            .map_err(|err| RulesError::InvalidFen(format!("{fen}: {err:?}")))?;
        Ok(Self {
            board,
            undo_stack: Vec::new(),
        })
    }

    pub fn side_to_move(&self) -> Color {
        self.board.side_to_move()
    }

    pub fn is_check(&self) -> bool {
        !self.board.checkers().is_empty()
    }

    pub fn is_checkmate(&self) -> bool {
        self.is_check() && !self.has_legal_moves()
    }

    pub fn is_stalemate(&self) -> bool {
        !self.is_check() && !self.has_legal_moves()
    }

    /// Plies played since the start of the game.
    pub fn ply(&self) -> u32 {
        let completed = (u32::from(self.board.fullmove_number()) - 1) * 2;
        completed + u32::from(self.board.side_to_move() == Color::Black)
    }

    /// 64-bit Zobrist fingerprint of the current position.
    pub fn fingerprint(&self) -> u64 {
        self.board.hash()
    }

    /// Squares holding `piece` of `color`.
    pub fn pieces(&self, color: Color, piece: Piece) -> BitBoard {
        self.board.colored_pieces(color, piece)
    }

    /// All legal moves for the side to move.
    pub fn legal_moves(&self) -> Vec<Move> {
        let enemy = self.board.colors(!self.board.side_to_move());
        let ep = self.en_passant_square();
        let mut moves = Vec::with_capacity(64);
        self.board.generate_moves(|set| {
            let pawn = set.piece == Piece::Pawn;
            for mv in set {
                moves.push(Move {
                    inner: mv,
                    capture: enemy.has(mv.to) || (pawn && Some(mv.to) == ep),
                    promotion: mv.promotion.is_some(),
                });
            }
            false
        });
        moves
    }

    /// Legal capture moves only. En passant is included; a promotion is
    /// included only when it also captures.
    pub fn capture_moves(&self) -> Vec<Move> {
        let enemy = self.board.colors(!self.board.side_to_move());
        let ep = self.en_passant_square();
        let mut moves = Vec::with_capacity(16);
        self.board.generate_moves(|mut set| {
            let mut targets = enemy;
            if set.piece == Piece::Pawn {
                if let Some(sq) = ep {
                    targets |= sq.bitboard();
                }
            }
            set.to &= targets;
            for mv in set {
                moves.push(Move {
                    inner: mv,
                    capture: true,
                    promotion: mv.promotion.is_some(),
                });
            }
            false
        });
        moves
    }

    /// Apply a move generated from this position.
    pub fn make_move(&mut self, mv: Move) {
        self.undo_stack.push(self.board.clone());
        self.board.play_unchecked(mv.inner);
    }

    /// Undo the most recent [`Position::make_move`].
    pub fn unmake_move(&mut self) {
        self.board = self.undo_stack.pop().expect("unmake without matching make");
    }

    /// Pass the turn without moving. Refused while in check.
    pub fn try_skip_turn(&mut self) -> bool {
        match self.board.null_move() {
            Some(next) => {
                self.undo_stack.push(std::mem::replace(&mut self.board, next));
                true
            }
            None => false,
        }
    }

    /// Undo a successful [`Position::try_skip_turn`].
    pub fn undo_skip_turn(&mut self) {
        self.board = self
            .undo_stack
            .pop()
            .expect("skip-turn undo without matching skip");
    }

    fn has_legal_moves(&self) -> bool {
        let mut any = false;
        self.board.generate_moves(|_| {
            any = true;
            true
        });
        any
    }

    /// Destination square of a legal en-passant capture, if one exists.
    fn en_passant_square(&self) -> Option<Square> {
        self.board.en_passant().map(|file| {
            let rank = match self.board.side_to_move() {
                Color::White => Rank::Sixth,
                Color::Black => Rank::Third,
            };
            Square::new(file, rank)
        })
    }
}

#[cfg(test)]
#[path = "position_tests.rs"]
mod position_tests;
