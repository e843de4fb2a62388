use super::color::Color;
use super::piece::Piece;
use super::square::Square;

/// Stable handle to a piece. Ids stay valid while other pieces are removed,
/// so a capture never disturbs the piece that is being moved.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PieceId(usize);

/// Slot storage for the pieces of a board. Removing a piece empties its slot
/// rather than shifting the others.
#[derive(Clone, Debug, Default)]
pub struct PieceSet {
    slots: Vec<Option<Piece>>,
}

impl PieceSet {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn insert(&mut self, piece: Piece) -> PieceId {
        self.slots.push(Some(piece));
        PieceId(self.slots.len() - 1)
    }

    pub fn get(&self, id: PieceId) -> Option<&Piece> {
        self.slots.get(id.0).and_then(|slot| slot.as_ref())
    }

    pub fn get_mut(&mut self, id: PieceId) -> Option<&mut Piece> {
        self.slots.get_mut(id.0).and_then(|slot| slot.as_mut())
    }

    pub fn remove(&mut self, id: PieceId) -> Option<Piece> {
        self.slots.get_mut(id.0).and_then(|slot| slot.take())
    }

    /// Linear scan for the piece standing on `square`.
    pub fn find(&self, square: Square) -> Option<PieceId> {
        self.iter_with_ids()
            .find(|(_, piece)| piece.square == square)
            .map(|(id, _)| id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        self.slots.iter().flatten()
    }

    pub fn iter_with_ids(&self) -> impl Iterator<Item = (PieceId, &Piece)> {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|piece| (PieceId(index), piece)))
    }

    pub fn of_color(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.iter().filter(move |piece| piece.color == color)
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::piece::PieceKind;
    use crate::board::square::{A1, B1, C1};

    #[test]
    fn test_ids_survive_removal_of_other_pieces() {
        let mut set = PieceSet::new();
        let rook = set.insert(Piece::new(A1, Color::White, PieceKind::Rook));
        let knight = set.insert(Piece::new(B1, Color::White, PieceKind::Knight));
        let bishop = set.insert(Piece::new(C1, Color::White, PieceKind::Bishop));

        assert_eq!(Some(PieceKind::Rook), set.remove(rook).map(|p| p.kind));
        assert_eq!(None, set.get(rook));
        assert_eq!(Some(B1), set.get(knight).map(|p| p.square));
        assert_eq!(Some(C1), set.get(bishop).map(|p| p.square));
        assert_eq!(Some(bishop), set.find(C1));
        assert_eq!(2, set.len());
    }

    #[test]
    fn test_clone_does_not_alias() {
        let mut set = PieceSet::new();
        let rook = set.insert(Piece::new(A1, Color::White, PieceKind::Rook));
        let copy = set.clone();

        if let Some(piece) = set.get_mut(rook) {
            piece.square = B1;
        }

        assert_eq!(Some(A1), copy.get(rook).map(|p| p.square));
        assert_eq!(Some(B1), set.get(rook).map(|p| p.square));
    }
}
