// src/handlers/salary.rs
use warp::reply::Json;
use warp::Rejection;
use crate::models::SalaryInput;
use crate::services::salary::calculate_salary;
use log::{info, warn};

pub async fn post_salary(input: SalaryInput) -> Result<Json, Rejection> {
    info!("Handling salary calculation request ({:?})", input.pay_frequency);

    let result = calculate_salary(&input).map_err(|errors| {
        warn!("Rejected salary input: {}", errors);
        warp::reject::custom(errors)
    })?;

    info!(
        "Net salary: {:.2} annual, {:.2} {}",
        result.net_annual, result.net_periodic, result.period_name
    );
    Ok(warp::reply::json(&result))
}
