pub mod position_cache;
pub mod tree;


use log::{debug, info, warn};
use thiserror::Error;

use crate::board::color::Color;
use crate::board::Board;
use crate::chess_move::ChessMove;
use crate::evaluate::{Evaluator, HeuristicEvaluator, Score};
use crate::move_generation::{is_checkmate, legal_moves};

pub use position_cache::{CacheKeyPolicy, PositionCache};
use tree::{NodeId, SearchNode, SearchTree};

pub const DEFAULT_SEARCH_DEPTH: u8 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies expanded below each root move.
    pub depth: u8,
    pub cache_key: CacheKeyPolicy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_SEARCH_DEPTH,
            cache_key: CacheKeyPolicy::default(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("no move found: {color} has no legal moves")]
    NoMoveFound { color: Color },
}

/// Counters of the most recent `best_move` call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub nodes: usize,
    pub cache_hits: usize,
    pub cache_size: usize,
}

/// Fixed-depth tree search: every root move gets its own subtree, built
/// through a per-call position cache and scored with alpha-beta minimax.
pub struct Searcher<E: Evaluator = HeuristicEvaluator> {
    config: SearchConfig,
    evaluator: E,
    stats: SearchStats,
}

impl Default for Searcher<HeuristicEvaluator> {
    fn default() -> Self {
        Self::new(SearchConfig::default(), HeuristicEvaluator::default())
    }
}

impl<E: Evaluator> Searcher<E> {
    pub fn new(config: SearchConfig, evaluator: E) -> Self {
        Self {
            config,
            evaluator,
            stats: SearchStats::default(),
        }
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    pub fn set_depth(&mut self, depth: u8) {
        self.config.depth = depth;
    }

    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// Picks the move with the strictly greatest advantage for the side to
    /// move; the first of equally good moves wins. `board` is never touched.
    pub fn best_move(&mut self, board: &Board) -> Result<ChessMove, SearchError> {
        let root_color = board.turn();
        let depth = self.config.depth;
        let mut tree = SearchTree::new();
        let mut cache = PositionCache::new(self.config.cache_key);

        let candidates = legal_moves(board, root_color);
        info!(
            "searching {} moves for {} at depth {}",
            candidates.len(),
            root_color,
            depth
        );

        let mut best: Option<(ChessMove, Score)> = None;

        for chess_move in candidates {
            let mut child = board.clone();
            if let Err(error) = chess_move.apply(&mut child) {
                warn!("skipping root move {:?}: {}", chess_move, error);
                continue;
            }

            let mover = child.turn();
            let root = self.build_tree(&mut tree, &mut cache, child, depth, 0.0);
            let score = self.minimax(
                &mut tree,
                root,
                depth,
                Score::NEG_INFINITY,
                Score::INFINITY,
                mover,
            );

            let advantage = if root_color.maximize_score() {
                score
            } else {
                -score
            };
            debug!("{} ({}): advantage {}", chess_move, chess_move.to_uci(), advantage);

            if best.map_or(true, |(_, best_advantage)| advantage > best_advantage) {
                best = Some((chess_move, advantage));
            }
        }

        self.stats = SearchStats {
            nodes: tree.len(),
            cache_hits: cache.hits(),
            cache_size: cache.len(),
        };
        debug!(
            "search built {} nodes, {} cached positions, {} cache hits",
            self.stats.nodes, self.stats.cache_size, self.stats.cache_hits
        );

        match best {
            Some((chess_move, advantage)) => {
                info!("best move {} with advantage {}", chess_move, advantage);
                Ok(chess_move)
            }
            None => Err(SearchError::NoMoveFound { color: root_color }),
        }
    }

    /// Expands `board` into `tree`, `remaining_depth` plies deep.
    ///
    /// Stops early at checkmate, and when the position looks bad for the side
    /// to move both here and one ply up. Positions already expanded in this
    /// search are shared through `cache` instead of being rebuilt.
    pub fn build_tree(
        &self,
        tree: &mut SearchTree,
        cache: &mut PositionCache,
        board: Board,
        remaining_depth: u8,
        parent_score: Score,
    ) -> NodeId {
        if is_checkmate(&board) {
            let static_score = self.evaluator.evaluate(&board);
            return tree.add(SearchNode::leaf(board, static_score, 0.0));
        }

        let score = self.evaluator.evaluate(&board);
        let turn = board.turn();
        let losing_line = (score < 0.0 && parent_score < 0.0 && turn == Color::White)
            || (score > 0.0 && parent_score > 0.0 && turn == Color::Black);
        if losing_line || remaining_depth == 0 {
            return tree.add(SearchNode::leaf(board, score, score));
        }

        let key = cache.key(&board);
        if let Some(id) = cache.get(&key) {
            return id;
        }

        let mut children = Vec::new();
        for chess_move in legal_moves(&board, turn) {
            let mut child = board.clone();
            match chess_move.apply(&mut child) {
                Ok(_) => {
                    children.push(self.build_tree(tree, cache, child, remaining_depth - 1, score))
                }
                Err(error) => warn!("skipping branch {:?}: {}", chess_move, error),
            }
        }

        let id = tree.add(SearchNode {
            board,
            static_score: score,
            score,
            children,
        });
        cache.insert(key, id);
        id
    }

    /// Alpha-beta minimax over `tree`. `mover` is the side to move at `id`;
    /// white maximizes. Every visited node's score is overwritten with its
    /// backed-up value.
    pub fn minimax(
        &self,
        tree: &mut SearchTree,
        id: NodeId,
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
        mover: Color,
    ) -> Score {
        if depth == 0 || tree.node(id).is_leaf() {
            let node = tree.node_mut(id);
            node.score = node.static_score;
            return node.score;
        }

        let children = tree.node(id).children.clone();
        let maximizing = mover.maximize_score();
        let mut best = if maximizing {
            Score::NEG_INFINITY
        } else {
            Score::INFINITY
        };

        for child in children {
            let eval = self.minimax(tree, child, depth - 1, alpha, beta, mover.opposite());
            if maximizing {
                best = best.max(eval);
                alpha = alpha.max(eval);
            } else {
                best = best.min(eval);
                beta = beta.min(eval);
            }
            if alpha >= beta {
                break;
            }
        }

        tree.node_mut(id).score = best;
        best
    }
}
