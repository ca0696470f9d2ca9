use crate::errors::{AppErrors, AppResult};
use crate::models::payment_plan::PaymentPlan;
use colored::Colorize;
use std::io::Write;

/// Renders the calculated payment plan as human-readable lines.
///
/// Every amount is formatted with exactly two decimal digits; the stored
/// values are left untouched. The last-amount line is omitted when the total
/// divides evenly. In pretty mode each line is wrapped whole in a terminal
/// color (yellow, green, cyan) and reset at line end.
///
/// # Arguments
/// * `out` - The writer the lines are printed to.
/// * `total` - The total amount, echoed back on the first line.
/// * `count` - The number of installments, echoed back on the first line.
/// * `plan` - The calculated regular and last amounts.
/// * `pretty` - Whether to colorize the output.
///
/// # Returns
/// * `AppResult<()>` - Returns `Ok(())` if all lines were written, or an
///   `AppErrors::Io` if the writer fails.
pub fn render_payment_plan<W: Write>(
    out: &mut W,
    total: f64,
    count: i64,
    plan: &PaymentPlan,
    pretty: bool,
) -> AppResult<()> {
    let total_line = format!("Total amount to be paid is ${total:.2}, in {count} payments.");
    let regular_line = format!("Regular amount - ${:.2}", plan.regular_amount);
    let last_line = plan
        .has_last_amount()
        .then(|| format!("Last amount - ${:.2}", plan.last_amount));

    if pretty {
        // Colorize even when stdout is not a tty.
        colored::control::set_override(true);
        writeln!(out, "{}", total_line.yellow()).map_err(write_err)?;
        writeln!(out, "{}", regular_line.green()).map_err(write_err)?;
        if let Some(line) = last_line {
            writeln!(out, "{}", line.cyan()).map_err(write_err)?;
        }
    } else {
        writeln!(out, "{total_line}").map_err(write_err)?;
        writeln!(out, "{regular_line}").map_err(write_err)?;
        if let Some(line) = last_line {
            writeln!(out, "{line}").map_err(write_err)?;
        }
    }

    Ok(())
}

fn write_err(e: std::io::Error) -> AppErrors {
    AppErrors::Io(format!("write output: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render_to_string(total: f64, count: i64, plan: &PaymentPlan, pretty: bool) -> String {
        let mut buf = Vec::new();
        render_payment_plan(&mut buf, total, count, plan, pretty).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn plain_output_omits_last_line_on_even_split() {
        // arrange
        let plan = PaymentPlan {
            regular_amount: 25.0,
            last_amount: 0.0,
        };

        // act
        let out = render_to_string(100.0, 4, &plan, false);

        // assert
        assert_eq!(
            out,
            "Total amount to be paid is $100.00, in 4 payments.\n\
             Regular amount - $25.00\n"
        );
    }

    #[test]
    fn plain_output_includes_last_line_on_uneven_split() {
        let plan = PaymentPlan {
            regular_amount: 33.33,
            last_amount: 33.34,
        };

        let out = render_to_string(100.0, 3, &plan, false);

        assert_eq!(
            out,
            "Total amount to be paid is $100.00, in 3 payments.\n\
             Regular amount - $33.33\n\
             Last amount - $33.34\n"
        );
    }

    #[test]
    fn amounts_are_formatted_with_two_decimals() {
        let plan = PaymentPlan {
            regular_amount: 41.5,
            last_amount: 0.0,
        };

        let out = render_to_string(83.0, 2, &plan, false);

        assert!(out.contains("$83.00"), "total padded to two decimals");
        assert!(out.contains("$41.50"), "regular padded to two decimals");
    }

    #[test]
    fn pretty_output_wraps_each_line_in_its_color() {
        let plan = PaymentPlan {
            regular_amount: 33.33,
            last_amount: 33.34,
        };

        let out = render_to_string(100.0, 3, &plan, true);

        assert_eq!(
            out,
            "\u{1b}[33mTotal amount to be paid is $100.00, in 3 payments.\u{1b}[0m\n\
             \u{1b}[32mRegular amount - $33.33\u{1b}[0m\n\
             \u{1b}[36mLast amount - $33.34\u{1b}[0m\n"
        );
    }

    #[test]
    fn pretty_output_omits_last_line_on_even_split() {
        let plan = PaymentPlan {
            regular_amount: 25.0,
            last_amount: 0.0,
        };

        let out = render_to_string(100.0, 4, &plan, true);

        assert!(!out.contains("Last amount"));
        assert!(out.starts_with("\u{1b}[33m"));
    }
}
