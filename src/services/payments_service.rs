use crate::consts::CENT_SCALE;
use crate::models::payment_plan::PaymentPlan;

/// Given a total amount of money to be paid, and the number of times it will
/// be paid over a period of time, calculates the regular amount of money to
/// be paid each time. Where the total cannot be split into equal amounts,
/// the last payment is calculated separately.
///
/// The regular amount is the total divided by the count, truncated to two
/// decimal places. If multiplying it back does not reconstruct the total,
/// the last payment absorbs the remainder: the total minus `count - 1`
/// regular payments, rounded to two decimal places.
///
/// Inputs are not guarded; a zero or negative count propagates through the
/// arithmetic as-is.
///
/// # Arguments
/// * `total` - The total amount of money to be paid.
/// * `count` - The number of installments the total is paid over.
///
/// # Returns
/// * `PaymentPlan` - The regular amount and possibly different last amount.
pub fn calculate_regular_recurring_payment(total: f64, count: i64) -> PaymentPlan {
    let regular_amount = ((total / count as f64) * CENT_SCALE).floor() / CENT_SCALE;
    let mut last_amount = 0.0;

    let would_be_total = regular_amount * count as f64;
    if total != would_be_total {
        last_amount = total - (count - 1) as f64 * regular_amount;
        last_amount = (last_amount * CENT_SCALE).round() / CENT_SCALE;
    }

    PaymentPlan {
        regular_amount,
        last_amount,
    }
}
