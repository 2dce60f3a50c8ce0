/// Multiplier applied to ratios reported as percentages.
pub const PERCENT_MULTIPLIER: i64 = 100;
