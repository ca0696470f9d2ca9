use crate::cli::ArgumentResolver;
use crate::consts::{ARG_COUNT, ARG_TOTAL, PARAM_PRETTY};
use crate::errors::AppResult;
use crate::services::payments_service::calculate_regular_recurring_payment;
use crate::services::render_service::render_payment_plan;
use log::{debug, error, info};
use std::io;
use std::process::ExitCode;

mod cli;
mod consts;
mod errors;
mod models;
mod services;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    info!("Application started");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> AppResult<()> {
    let resolver = ArgumentResolver::from_tokens(std::env::args().skip(1))?;

    let total = resolver.float_argument(ARG_TOTAL)?;
    let count = resolver.int_argument(ARG_COUNT)?;
    debug!("resolved total={total}, count={count}");

    let plan = calculate_regular_recurring_payment(total, count);

    let pretty = resolver.has_parameter(PARAM_PRETTY);
    let out = io::stdout();
    let mut handle = out.lock();
    render_payment_plan(&mut handle, total, count, &plan, pretty)
}
