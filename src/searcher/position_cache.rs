use rustc_hash::FxHashMap;

use crate::board::Board;

use super::tree::NodeId;

/// How positions are keyed in the per-search cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheKeyPolicy {
    /// The full FEN, move counters included. Transpositions that differ only
    /// in clock bookkeeping get separate entries.
    FullPosition,
    /// Placement, side to move, castling rights and en passant target.
    Placement,
}

impl Default for CacheKeyPolicy {
    fn default() -> Self {
        CacheKeyPolicy::FullPosition
    }
}

impl CacheKeyPolicy {
    pub fn key(&self, board: &Board) -> String {
        match self {
            CacheKeyPolicy::FullPosition => board.to_fen(),
            CacheKeyPolicy::Placement => board.to_placement_key(),
        }
    }
}

/// Maps positions already expanded in the current search to their subtree.
/// Built fresh for every top-level search and dropped with it.
#[derive(Debug, Default)]
pub struct PositionCache {
    policy: CacheKeyPolicy,
    entries: FxHashMap<String, NodeId>,
    hits: usize,
}

impl PositionCache {
    pub fn new(policy: CacheKeyPolicy) -> Self {
        Self {
            policy,
            entries: FxHashMap::default(),
            hits: 0,
        }
    }

    pub fn key(&self, board: &Board) -> String {
        self.policy.key(board)
    }

    pub fn get(&mut self, key: &str) -> Option<NodeId> {
        let found = self.entries.get(key).copied();
        if found.is_some() {
            self.hits += 1;
        }
        found
    }

    pub fn insert(&mut self, key: String, id: NodeId) -> Option<NodeId> {
        self.entries.insert(key, id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> usize {
        self.hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::fen::parse_fen;
    use crate::searcher::tree::{SearchNode, SearchTree};

    #[test]
    fn test_full_position_key_separates_move_counters() {
        let early = parse_fen("4k3/8/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let late = parse_fen("4k3/8/8/8/8/8/8/4K3 w - - 12 40").unwrap();

        let full = CacheKeyPolicy::FullPosition;
        assert_ne!(full.key(&early), full.key(&late));

        let placement = CacheKeyPolicy::Placement;
        assert_eq!(placement.key(&early), placement.key(&late));
    }

    #[test]
    fn test_cache_counts_hits() {
        let mut tree = SearchTree::new();
        let board = Board::starting_position();
        let id = tree.add(SearchNode::leaf(board.clone(), 0.0, 0.0));

        let mut cache = PositionCache::new(CacheKeyPolicy::default());
        let key = cache.key(&board);
        assert_eq!(None, cache.get(&key));
        cache.insert(key.clone(), id);

        assert_eq!(Some(id), cache.get(&key));
        assert_eq!(1, cache.hits());
        assert_eq!(1, cache.len());
    }
}
