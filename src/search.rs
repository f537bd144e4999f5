//! Depth-limited minimax search over a generic game position

use crate::position::{Player, Position};

/// The numeric evaluation of a position
pub type Score = i64;

/// Sentinel bound above any score the evaluator can produce
pub const SCORE_POS_INF: Score = 1_000_000_000_000;
/// Sentinel bound below any score the evaluator can produce
pub const SCORE_NEG_INF: Score = -SCORE_POS_INF;

/// The number of plies explored by [`solve`]
pub const DEFAULT_DEPTH: u32 = 4;

/// Scores a position from the perspective of `maximizer`
///
/// Runs of length 2 to 4 are weighted by 100^length, so a single length-4
/// run outweighs any realistic number of shorter runs. Positive favours
/// `maximizer`, negative favours the opponent, zero is neutral.
pub fn evaluate<P: Position>(position: &P, maximizer: Player) -> Score {
    let minimizer = maximizer.opponent();
    let mut score = 0;
    for length in 2..=4 {
        let weight = 100_i64.pow(length as u32);
        score += position.count_lines(length, maximizer) as Score * weight;
        score -= position.count_lines(length, minimizer) as Score * weight;
    }
    score
}

/// Returns whether the search must stop and evaluate `position` directly
///
/// True iff the depth budget is exhausted or no legal continuation exists.
/// These are the only two terminal conditions for both search variants.
/// Successors are only enumerated once the depth check has failed, so a
/// depth-0 call never queries them.
pub fn is_base_case<P: Position>(position: &P, depth: u32) -> bool {
    depth == 0 || position.successors().is_empty()
}

/// Plain depth-limited minimax
///
/// Explores every successor down to `depth` plies, alternating between
/// maximizing and minimizing according to the side to move, and evaluates
/// the frontier from the fixed perspective of `maximizer`. Comparisons are
/// strict, so ties keep the earliest-seen value.
pub fn minimax<P: Position>(position: &P, depth: u32, maximizer: Player) -> Score {
    if is_base_case(position, depth) {
        return evaluate(position, maximizer);
    }

    let successors = position.successors();
    if position.to_move() == maximizer {
        let mut best = SCORE_NEG_INF;
        for successor in &successors {
            let value = minimax(successor, depth - 1, maximizer);
            if value > best {
                best = value;
            }
        }
        best
    } else {
        let mut best = SCORE_POS_INF;
        for successor in &successors {
            let value = minimax(successor, depth - 1, maximizer);
            if value < best {
                best = value;
            }
        }
        best
    }
}

/// Alpha-beta pruned minimax
///
/// Computes exactly the same score as [`minimax`] for any position, depth
/// and maximizing side, visiting fewer positions by discarding branches a
/// perfect opponent would never allow.
pub fn minimax_alpha_beta<P: Position>(position: &P, depth: u32, maximizer: Player) -> Score {
    alpha_beta(position, depth, SCORE_NEG_INF, SCORE_POS_INF, maximizer)
}

/// The bounded search behind [`minimax_alpha_beta`]
///
/// `alpha` is the best score the maximizing side can already guarantee
/// from the ancestors, `beta` the best the minimizing side can. Both are
/// passed by value: a call narrows its own copies while walking its
/// successors and never touches the caller's bounds.
fn alpha_beta<P: Position>(
    position: &P,
    depth: u32,
    alpha: Score,
    beta: Score,
    maximizer: Player,
) -> Score {
    if is_base_case(position, depth) {
        return evaluate(position, maximizer);
    }

    let successors = position.successors();
    if position.to_move() == maximizer {
        let mut best = SCORE_NEG_INF;
        let mut alpha = alpha;
        for successor in &successors {
            let value = alpha_beta(successor, depth - 1, alpha, beta, maximizer);
            if value > best {
                best = value;
            }
            if value >= alpha {
                alpha = value;
            }
            // the minimizing ancestor will never pick this branch, so the
            // remaining siblings cannot change its decision
            if value >= beta {
                break;
            }
        }
        best
    } else {
        let mut best = SCORE_POS_INF;
        let mut beta = beta;
        for successor in &successors {
            let value = alpha_beta(successor, depth - 1, alpha, beta, maximizer);
            if value < best {
                best = value;
            }
            if value <= beta {
                beta = value;
            }
            if value <= alpha {
                break;
            }
        }
        best
    }
}

/// Scores `position` for `maximizer` at the default search depth
///
/// The entry point for callers that do not care about the depth budget;
/// delegates to the pruning search.
pub fn solve<P: Position>(position: &P, maximizer: Player) -> Score {
    minimax_alpha_beta(position, DEFAULT_DEPTH, maximizer)
}
