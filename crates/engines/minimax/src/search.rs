//! Exhaustive minimax with random tie-breaking at the root.
//!
//! Scores are always from X's point of view: X maximizes, O minimizes.
//! A win scores `100 - depth` for X and `-100 + depth` for O so that quick
//! wins and slow losses are preferred. No pruning is done; without a depth
//! limit every node of the game tree below the root is visited.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, trace};
use ttt_core::{Board, Mark, Outcome, SearchLimits};

use crate::error::SearchError;

/// Score of an immediate win at the root.
pub const WIN_SCORE: i32 = 100;

/// Score of a finished game `depth` plies below the root.
pub fn terminal_score(outcome: Outcome, depth: u8) -> i32 {
    match outcome.winner() {
        Some(Mark::X) => WIN_SCORE - depth as i32,
        Some(Mark::O) => -WIN_SCORE + depth as i32,
        None => 0,
    }
}

/// Root moves grouped by the score of the position they lead to.
///
/// Within a score, moves keep the order the board enumerated them in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RootScores {
    by_score: BTreeMap<i32, Vec<usize>>,
}

impl RootScores {
    fn record(&mut self, score: i32, idx: usize) {
        self.by_score.entry(score).or_default().push(idx);
    }

    /// Moves that scored exactly `score`.
    pub fn bucket(&self, score: i32) -> &[usize] {
        self.by_score
            .get(&score)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn score_of(&self, idx: usize) -> Option<i32> {
        self.by_score
            .iter()
            .find(|(_, moves)| moves.contains(&idx))
            .map(|(&score, _)| score)
    }

    /// `(score, moves)` pairs in ascending score order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (i32, &[usize])> {
        self.by_score.iter().map(|(&s, m)| (s, m.as_slice()))
    }

    /// Number of root moves recorded.
    pub fn len(&self) -> usize {
        self.by_score.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_score.is_empty()
    }
}

/// Everything the root learned about its direct children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RootAnalysis {
    pub best_score: i32,
    pub scores: RootScores,
    /// Nodes visited, root included
    pub nodes: u64,
}

impl RootAnalysis {
    /// The tie-break bucket: every root move achieving `best_score`.
    pub fn best_moves(&self) -> &[usize] {
        self.scores.bucket(self.best_score)
    }
}

/// The move picked by a root search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub best_move: usize,
    pub analysis: RootAnalysis,
}

impl SearchOutcome {
    pub fn score(&self) -> i32 {
        self.analysis.best_score
    }
}

/// Minimax searcher. One root call at a time; no state survives a call
/// apart from the random source.
#[derive(Debug, Clone)]
pub struct Minimax<R = StdRng> {
    limits: SearchLimits,
    rng: R,
}

impl Minimax<StdRng> {
    pub fn new(limits: SearchLimits) -> Self {
        Self::with_rng(limits, StdRng::from_entropy())
    }

    pub fn seeded(limits: SearchLimits, seed: u64) -> Self {
        Self::with_rng(limits, StdRng::seed_from_u64(seed))
    }
}

impl Default for Minimax<StdRng> {
    fn default() -> Self {
        Self::new(SearchLimits::unlimited())
    }
}

impl<R: Rng> Minimax<R> {
    pub fn with_rng(limits: SearchLimits, rng: R) -> Self {
        Self { limits, rng }
    }

    pub fn limits(&self) -> SearchLimits {
        self.limits
    }

    pub fn set_limits(&mut self, limits: SearchLimits) {
        self.limits = limits;
    }

    /// Index of the best move for the side given by `maximizing`.
    ///
    /// `callback` runs exactly once with the chosen index before it is
    /// returned. It does not run when the search fails.
    ///
    /// # Errors
    /// [`SearchError::TerminalPosition`] if the game is already over.
    pub fn best_move<B, F>(
        &mut self,
        board: &B,
        maximizing: bool,
        callback: F,
    ) -> Result<usize, SearchError>
    where
        B: Board,
        F: FnOnce(usize),
    {
        self.search(board, maximizing, callback)
            .map(|outcome| outcome.best_move)
    }

    /// Same as [`Minimax::best_move`] but also returns the root analysis.
    pub fn search<B, F>(
        &mut self,
        board: &B,
        maximizing: bool,
        callback: F,
    ) -> Result<SearchOutcome, SearchError>
    where
        B: Board,
        F: FnOnce(usize),
    {
        let analysis = analyze(board, maximizing, self.limits)?;
        let best_move = self.select(&analysis)?;

        debug!(
            best_move,
            score = analysis.best_score,
            tied = analysis.best_moves().len(),
            nodes = analysis.nodes,
            "minimax root search finished"
        );

        callback(best_move);
        Ok(SearchOutcome {
            best_move,
            analysis,
        })
    }

    /// Uniform pick from the tie-break bucket.
    pub fn select(&mut self, analysis: &RootAnalysis) -> Result<usize, SearchError> {
        analysis
            .best_moves()
            .choose(&mut self.rng)
            .copied()
            .ok_or(SearchError::NoAvailableMoves)
    }
}

/// Scores every move available at the root.
///
/// The returned ledger is built fresh for this call and only ever holds the
/// root's direct children.
pub fn analyze<B: Board>(
    board: &B,
    maximizing: bool,
    limits: SearchLimits,
) -> Result<RootAnalysis, SearchError> {
    if let Some(outcome) = board.terminal() {
        return Err(SearchError::TerminalPosition(outcome));
    }
    let moves = board.available_moves();
    if moves.is_empty() {
        return Err(SearchError::NoAvailableMoves);
    }

    let mark = Mark::from_maximizing(maximizing);
    let mut scores = RootScores::default();
    let mut best = initial_best(maximizing);
    let mut nodes = 1u64;

    for idx in moves {
        let child = board.child(mark, idx)?;
        let score = minimax(&child, !maximizing, 1, limits, &mut nodes)?;
        best = fold(maximizing, best, score);
        trace!(idx, score, "root move scored");
        scores.record(score, idx);
    }

    Ok(RootAnalysis {
        best_score: best,
        scores,
        nodes,
    })
}

/// Minimax value of `board` with `maximizing` to move. Finished boards
/// score as terminal nodes at depth 0.
pub fn evaluate<B: Board>(
    board: &B,
    maximizing: bool,
    limits: SearchLimits,
) -> Result<i32, SearchError> {
    let mut nodes = 0u64;
    minimax(board, maximizing, 0, limits, &mut nodes)
}

fn minimax<B: Board>(
    board: &B,
    maximizing: bool,
    depth: u8,
    limits: SearchLimits,
    nodes: &mut u64,
) -> Result<i32, SearchError> {
    *nodes += 1;

    if let Some(outcome) = board.terminal() {
        return Ok(terminal_score(outcome, depth));
    }
    // Cutoff treats the position as neutral for both sides.
    if limits.reached(depth) {
        return Ok(0);
    }

    let moves = board.available_moves();
    if moves.is_empty() {
        return Err(SearchError::NoAvailableMoves);
    }

    let mark = Mark::from_maximizing(maximizing);
    let mut best = initial_best(maximizing);
    for idx in moves {
        let child = board.child(mark, idx)?;
        let score = minimax(&child, !maximizing, depth + 1, limits, nodes)?;
        best = fold(maximizing, best, score);
    }
    Ok(best)
}

#[inline]
fn initial_best(maximizing: bool) -> i32 {
    if maximizing {
        -WIN_SCORE
    } else {
        WIN_SCORE
    }
}

#[inline]
fn fold(maximizing: bool, best: i32, score: i32) -> i32 {
    if maximizing {
        best.max(score)
    } else {
        best.min(score)
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
