//! Metrics collection.
//!
//! # Metrics
//! - `acceptnorm_negotiations_total` (counter): strategy invocations, by strategy
//! - `acceptnorm_truncated_total` (counter): inputs cut at capacity, by input kind
//! - `acceptnorm_fallback_total` (counter): fallback results served, by strategy
//!
//! # Design Decisions
//! - Thin wrappers so call sites stay one line and label names stay in one place
//! - Counters are no-ops until the embedding host installs a recorder

use metrics::counter;

/// Record one invocation of a negotiation strategy.
pub fn record_negotiation(strategy: &'static str) {
    counter!("acceptnorm_negotiations_total", "strategy" => strategy).increment(1);
}

/// Record an input list truncated at the entry capacity.
pub fn record_truncated(input: &'static str) {
    counter!("acceptnorm_truncated_total", "input" => input).increment(1);
}

/// Record a strategy that served its fallback result.
pub fn record_fallback(strategy: &'static str) {
    counter!("acceptnorm_fallback_total", "strategy" => strategy).increment(1);
}
