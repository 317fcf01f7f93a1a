// src/handlers/compound_interest.rs
use warp::reply::Json;
use warp::Rejection;
use crate::handlers::error::ApiError;
use crate::models::CompoundInterestInput;
use crate::services::compound_interest::calculate_compound_interest;
use log::{error, info, warn};

pub async fn post_compound_interest(input: CompoundInterestInput) -> Result<Json, Rejection> {
    info!("Handling compound interest request for {} years", input.years);

    let result = calculate_compound_interest(&input).map_err(|errors| {
        warn!("Rejected compound interest input: {}", errors);
        warp::reject::custom(errors)
    })?;

    if !result.future_value.is_finite() {
        let api_error = ApiError::out_of_range();
        error!("Compound interest overflowed: {}", api_error);
        return Err(warp::reject::custom(api_error));
    }

    info!("Future value: {:.2}", result.future_value);
    Ok(warp::reply::json(&result))
}
