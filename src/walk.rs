//! A single knight random walk (the core simulation primitive).
//!
//! A walk starts at the origin of an unbounded integer lattice. Each step
//! picks one of the 8 knight offsets uniformly at random and applies it
//! unconditionally; the board is infinite, so every move is legal. The walk
//! tracks the set of distinct squares occupied at any point, starting
//! square included, and reports that set's size.
//!
//! Each call owns its position and visited set; nothing is shared between
//! walks, so callers may run any number of walks concurrently as long as
//! each thread owns its own [`fastrand::Rng`].

use std::collections::HashSet;

use fastrand::Rng;

use crate::constants::KNIGHT_MOVES;

/// A square on the unbounded board. i64 coordinates cannot overflow for
/// any realistic move count (drift per move is at most 2).
pub type Square = (i64, i64);

/// Simulate one random knight walk of `moves` steps and return the number
/// of distinct squares visited.
///
/// The result is always in `[1, moves + 1]`: the origin counts as visited
/// before the first move, and each step adds at most one new square.
/// `moves == 0` therefore yields exactly 1, and `moves == 1` yields
/// exactly 2 since no knight offset is the zero vector.
///
/// The walk is deterministic for a fixed RNG state, so seeding `rng` with
/// [`Rng::with_seed`] makes the result reproducible.
pub fn simulate_walk(rng: &mut Rng, moves: usize) -> usize {
    let mut position: Square = (0, 0);
    let mut visited: HashSet<Square> = HashSet::with_capacity(moves + 1);
    visited.insert(position);

    for _ in 0..moves {
        let (dx, dy) = KNIGHT_MOVES[rng.usize(..KNIGHT_MOVES.len())];
        position = (position.0 + dx, position.1 + dy);
        visited.insert(position);
    }

    visited.len()
}

/// Simulate one walk and return the distinct-square count after every step.
///
/// The returned vector has length `moves + 1`; element `k` is the count
/// after `k` steps, so it starts at 1 and is non-decreasing. The plain
/// count returned by [`simulate_walk`] equals the last element.
pub fn simulate_walk_history(rng: &mut Rng, moves: usize) -> Vec<usize> {
    let mut position: Square = (0, 0);
    let mut visited: HashSet<Square> = HashSet::with_capacity(moves + 1);
    visited.insert(position);

    let mut history = Vec::with_capacity(moves + 1);
    history.push(visited.len());

    for _ in 0..moves {
        let (dx, dy) = KNIGHT_MOVES[rng.usize(..KNIGHT_MOVES.len())];
        position = (position.0 + dx, position.1 + dy);
        visited.insert(position);
        history.push(visited.len());
    }

    history
}
