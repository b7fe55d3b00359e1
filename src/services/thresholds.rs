//! Trigger points for the recommendation rules, in percent deviation from the
//! benchmark. Rules compare against the rounded diff that is reported back.

/// Conversion this far below benchmark triggers a high priority alert.
pub const CONVERSION_GAP_THRESHOLD: f64 = -10.0;

/// Price this far below benchmark suggests room for a price increase.
pub const UNDERPRICED_THRESHOLD: f64 = -20.0;

/// LTV this far below benchmark points at a retention problem.
pub const LTV_GAP_THRESHOLD: f64 = -15.0;

/// Refund rate this far above benchmark points at an expectation mismatch.
pub const REFUND_EXCESS_THRESHOLD: f64 = 15.0;
