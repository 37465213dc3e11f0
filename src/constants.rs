/// League points awarded for a win (no ties or no-results are modeled)
pub const POINTS_PER_WIN: u32 = 2;

/// Legal deliveries in one over
pub const BALLS_PER_OVER: f64 = 6.0;

/// Overs subtracted from the slowest qualifying chase to estimate the fastest one
pub const CHASE_OVERS_BUFFER: f64 = 5.0;

/// A chase can never be completed in less than this many (decimal) overs
pub const MIN_CHASE_OVERS: f64 = 0.1;

/// Decimal places used whenever an NRR figure is reported
pub const NRR_DECIMALS: i32 = 3;

/// Allowed difference between a stored NRR and the one recomputed from aggregates.
/// Stored figures are rounded to 3 decimals, so half a unit in the last place plus noise.
pub const NRR_TOLERANCE: f64 = 0.000_5 + 1e-9;

/// Shortest hypothetical match accepted by request validation
pub const MIN_MATCH_OVERS: f64 = 1.0;

/// Longest hypothetical match accepted by request validation
pub const MAX_MATCH_OVERS: f64 = 50.0;

/// Upper bound on runs scored or chased in a single innings
pub const MAX_INNINGS_RUNS: u32 = 500;

/// Lowest table rank a request may target
pub const MAX_DESIRED_POSITION: u32 = 5;
