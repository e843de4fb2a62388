use crate::board::Board;
use crate::evaluate::Score;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Clone, Debug)]
pub struct SearchNode {
    pub board: Board,
    /// Static evaluation of `board`.
    pub static_score: Score,
    /// Zero for checkmate leaves until minimax fills it in.
    pub score: Score,
    pub children: Vec<NodeId>,
}

impl SearchNode {
    pub fn leaf(board: Board, static_score: Score, score: Score) -> Self {
        Self {
            board,
            static_score,
            score,
            children: Vec::new(),
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Arena holding every node built during one search. Subtrees reached
/// through transpositions are shared by id, so a node may have more than
/// one parent.
#[derive(Default, Debug)]
pub struct SearchTree {
    nodes: Vec<SearchNode>,
}

impl SearchTree {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn add(&mut self, node: SearchNode) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    pub fn node(&self, id: NodeId) -> &SearchNode {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut SearchNode {
        &mut self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
