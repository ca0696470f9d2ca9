/// Represents the outcome of a recurring-payment calculation: the regular
/// per-installment amount, and the final installment when it differs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaymentPlan {
    /// The amount paid in each regular installment.
    pub regular_amount: f64,

    /// The final installment absorbing the rounding remainder, or `0.0`
    /// when the total divides evenly.
    pub last_amount: f64,
}

impl PaymentPlan {
    /// Returns whether the plan carries a distinct final installment.
    pub fn has_last_amount(&self) -> bool {
        self.last_amount != 0.0
    }
}
