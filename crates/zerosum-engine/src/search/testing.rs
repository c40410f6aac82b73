//! A hand-built game tree for exercising the search algorithms.
//!
//! Nodes are addressed by index; the key of a position is the index of the
//! node the game currently sits on. Two parents may share a child, which
//! gives transpositions.

use std::cell::Cell;

use crate::game::{Evaluation, GameMove, ZeroSumGame};

/// Move to the child node with this index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Edge(pub usize);

impl GameMove for Edge {
    fn same_move(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

#[derive(Debug, thiserror::Error)]
#[error("node {from} has no edge to node {to}")]
pub(crate) struct NoSuchEdge {
    from: usize,
    to: usize,
}

#[derive(Debug, Clone)]
pub(crate) struct TreeNode {
    pub children: Vec<usize>,
    pub eval: Evaluation,
    pub max_to_move: bool,
}

impl TreeNode {
    pub fn inner(max_to_move: bool, children: &[usize]) -> Self {
        Self {
            children: children.to_vec(),
            eval: Evaluation::heuristic(0.0),
            max_to_move,
        }
    }

    pub fn leaf(max_to_move: bool, score: f64) -> Self {
        Self {
            children: Vec::new(),
            eval: Evaluation::heuristic(score),
            max_to_move,
        }
    }

    pub fn with_eval(mut self, eval: Evaluation) -> Self {
        self.eval = eval;
        self
    }
}

#[derive(Debug)]
pub(crate) struct TreeGame {
    nodes: Vec<TreeNode>,
    path: Vec<usize>,
    /// Every child index passed to a successful `make_move`, in order.
    pub played: Vec<usize>,
    /// Number of `legal_moves` calls.
    pub expansions: Cell<u32>,
    /// Child indices `make_move` refuses even though they are listed.
    pub refused: Vec<usize>,
}

impl TreeGame {
    pub fn new(nodes: Vec<TreeNode>) -> Self {
        Self {
            nodes,
            path: vec![0],
            played: Vec::new(),
            expansions: Cell::new(0),
            refused: Vec::new(),
        }
    }

    /// Max root, three min children, nine leaves:
    ///
    /// ```text
    ///              0
    ///      1       2        3
    ///   3 12 8   2 1 6   14 5 2
    /// ```
    ///
    /// Leaves are nodes 4..=12 left to right. Minimax value 3 via node 1.
    pub fn textbook() -> Self {
        let leaves = [3.0, 12.0, 8.0, 2.0, 1.0, 6.0, 14.0, 5.0, 2.0];
        let mut nodes = vec![
            TreeNode::inner(true, &[1, 2, 3]),
            TreeNode::inner(false, &[4, 5, 6]),
            TreeNode::inner(false, &[7, 8, 9]),
            TreeNode::inner(false, &[10, 11, 12]),
        ];
        nodes.extend(leaves.iter().map(|&score| TreeNode::leaf(true, score)));
        Self::new(nodes)
    }

    /// Max root whose children are leaves with the given scores.
    pub fn flat(scores: &[f64]) -> Self {
        let children: Vec<usize> = (1..=scores.len()).collect();
        let mut nodes = vec![TreeNode::inner(true, &children)];
        nodes.extend(scores.iter().map(|&score| TreeNode::leaf(false, score)));
        Self::new(nodes)
    }

    pub fn node_mut(&mut self, index: usize) -> &mut TreeNode {
        &mut self.nodes[index]
    }

    /// Moves played since the root.
    pub fn ply(&self) -> usize {
        self.path.len() - 1
    }

    fn current(&self) -> &TreeNode {
        &self.nodes[*self.path.last().unwrap()]
    }
}

impl ZeroSumGame for TreeGame {
    type Move = Edge;
    type Key = usize;
    type Error = NoSuchEdge;

    fn legal_moves(&self) -> Vec<Edge> {
        self.expansions.set(self.expansions.get() + 1);
        self.current().children.iter().copied().map(Edge).collect()
    }

    fn make_move(&mut self, mv: &Edge) -> Result<(), NoSuchEdge> {
        let from = self.position_key();
        if !self.current().children.contains(&mv.0) || self.refused.contains(&mv.0) {
            return Err(NoSuchEdge { from, to: mv.0 });
        }
        self.path.push(mv.0);
        self.played.push(mv.0);
        Ok(())
    }

    fn take_back(&mut self) {
        if self.path.len() > 1 {
            self.path.pop();
        }
    }

    fn evaluate(&self) -> Evaluation {
        self.current().eval
    }

    fn is_max_player_turn(&self) -> bool {
        self.current().max_to_move
    }

    fn position_key(&self) -> usize {
        *self.path.last().unwrap()
    }
}
