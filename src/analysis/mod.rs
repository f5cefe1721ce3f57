pub mod match_history;
pub mod mode_stats;
