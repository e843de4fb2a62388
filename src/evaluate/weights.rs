use crate::board::piece::PieceKind;

use super::Score;

/// Tunable constants of the heuristic evaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct EvaluationWeights {
    pub pawn: Score,
    pub knight: Score,
    pub bishop: Score,
    pub rook: Score,
    pub queen: Score,
    pub bishop_pair: Score,
    pub rook_open_file: Score,
    pub rook_semi_open_file: Score,
    /// Multiplies the length of a pawn chain longer than one link.
    pub pawn_chain: Score,
    /// Multiplies the average attack count over the four center squares.
    pub center_control: Score,
    /// Charged once per file holding two or more of a side's pawns.
    pub doubled_pawns: Score,
}

impl Default for EvaluationWeights {
    fn default() -> Self {
        Self {
            pawn: 1.0,
            knight: 3.0,
            bishop: 3.0,
            rook: 5.0,
            queen: 9.0,
            bishop_pair: 1.0,
            rook_open_file: 0.5,
            rook_semi_open_file: 0.2,
            pawn_chain: 0.2,
            center_control: 2.0,
            doubled_pawns: 0.09,
        }
    }
}

impl EvaluationWeights {
    pub fn material_value(&self, kind: PieceKind) -> Score {
        match kind {
            PieceKind::Pawn => self.pawn,
            PieceKind::Knight => self.knight,
            PieceKind::Bishop => self.bishop,
            PieceKind::Rook => self.rook,
            PieceKind::Queen => self.queen,
            PieceKind::King => 0.0,
        }
    }
}
