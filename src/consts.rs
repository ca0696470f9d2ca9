/// Represents the scaling factor used for two-decimal money rounding.
/// Amounts are truncated or rounded to whole cents by scaling with this value.
pub const CENT_SCALE: f64 = 100.0;

/// Argument key carrying the total amount to be paid (floating-point value).
pub const ARG_TOTAL: &str = "-t";

/// Argument key carrying the number of installments (integer value).
pub const ARG_COUNT: &str = "-a";

/// Parameter enabling colorized output.
pub const PARAM_PRETTY: &str = "--pretty";
