//! Search module for the Othello engine
//!
//! Contains the fixed-depth alpha-beta searcher and an unpruned reference
//! search over the same tree.

pub mod alphabeta;

pub use alphabeta::{ScoredMove, SearchResult, SearchStats, Searcher, INF};
