// src/routes.rs
use serde::de::DeserializeOwned;
use warp::filters::body::BodyDeserializeError;
use warp::reject::{MethodNotAllowed, PayloadTooLarge, Rejection, UnsupportedMediaType};
use crate::handlers::{
    compound_interest::post_compound_interest, regions::get_regions, salary::post_salary,
};
use crate::services::validation::ValidationErrors;
use log::{error, info};

use std::convert::Infallible;
use warp::http::StatusCode;
use warp::{Filter, Reply};
use crate::handlers::error::ApiError;

const MAX_BODY_BYTES: u64 = 16 * 1024;

// Map rejections to JSON error bodies
async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let api_error = if err.is_not_found() {
        ApiError::not_found()
    } else if let Some(errors) = err.find::<ValidationErrors>() {
        ApiError::validation(errors)
    } else if let Some(api_error) = err.find::<ApiError>() {
        api_error.clone()
    } else if let Some(e) = err.find::<BodyDeserializeError>() {
        ApiError::bad_request(format!("Invalid request body: {}", e))
    } else if err.find::<UnsupportedMediaType>().is_some() {
        ApiError::new(StatusCode::UNSUPPORTED_MEDIA_TYPE, "Expected a JSON body")
    } else if err.find::<PayloadTooLarge>().is_some() {
        ApiError::new(StatusCode::PAYLOAD_TOO_LARGE, "Request body too large")
    } else if err.find::<MethodNotAllowed>().is_some() {
        ApiError::new(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
    } else {
        error!("Unhandled rejection: {:?}", err);
        ApiError::internal()
    };

    Ok(api_error.into_reply())
}

fn json_body<T>() -> impl Filter<Extract = (T,), Error = Rejection> + Clone
where
    T: DeserializeOwned + Send,
{
    warp::body::content_length_limit(MAX_BODY_BYTES).and(warp::body::json())
}

pub fn routes() -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    info!("Configuring routes...");

    let salary_route = warp::path!("api" / "v1" / "salary")
        .and(warp::post())
        .and(json_body())
        .and_then(post_salary);

    let compound_interest_route = warp::path!("api" / "v1" / "compound_interest")
        .and(warp::post())
        .and(json_body())
        .and_then(post_compound_interest);

    let regions_route = warp::path!("api" / "v1" / "regions")
        .and(warp::get())
        .and_then(get_regions);

    let health_route = warp::path!("health")
        .and(warp::get())
        .map(|| warp::reply::json(&serde_json::json!({ "status": "ok" })));

    info!("All routes configured successfully.");

    salary_route
        .or(compound_interest_route)
        .or(regions_route)
        .or(health_route)
        .recover(handle_rejection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn body(res: &warp::http::Response<impl AsRef<[u8]>>) -> Value {
        serde_json::from_slice(res.body().as_ref()).unwrap()
    }

    fn salary_request() -> Value {
        json!({
            "grossSalary": 30000,
            "payFrequency": "monthly",
            "region": "madrid",
            "maritalStatus": "single",
            "childrenUnder25": 0,
            "childrenOver25": 0,
            "workerDisability": 0,
            "familyDisability": 0
        })
    }

    #[tokio::test]
    async fn salary_endpoint_returns_breakdown() {
        let res = warp::test::request()
            .method("POST")
            .path("/api/v1/salary")
            .json(&salary_request())
            .reply(&routes())
            .await;

        assert_eq!(res.status(), StatusCode::OK);
        let result = body(&res);
        assert_eq!(result["grossAnnual"], 30000.0);
        assert_eq!(result["periodName"], "mensual");
        assert_eq!(result["periodsPerYear"], 12);
        assert!(result["netAnnual"].as_f64().unwrap() < 30000.0);
    }

    #[tokio::test]
    async fn salary_endpoint_reports_every_invalid_field() {
        let mut request = salary_request();
        request["grossSalary"] = json!(0);
        request["region"] = json!("");
        request["workerDisability"] = json!(150);

        let res = warp::test::request()
            .method("POST")
            .path("/api/v1/salary")
            .json(&request)
            .reply(&routes())
            .await;

        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let error = body(&res);
        let fields = error["fields"].as_object().unwrap();
        assert_eq!(fields.len(), 3);
        assert!(fields.contains_key("grossSalary"));
        assert!(fields.contains_key("region"));
        assert!(fields.contains_key("workerDisability"));
    }

    #[tokio::test]
    async fn malformed_body_is_bad_request() {
        let res = warp::test::request()
            .method("POST")
            .path("/api/v1/salary")
            .header("content-type", "application/json")
            .body("{\"grossSalary\": \"lots\"}")
            .reply(&routes())
            .await;

        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
        assert!(body(&res)["error"].as_str().unwrap().starts_with("Invalid request body"));
    }

    #[tokio::test]
    async fn compound_interest_endpoint_returns_series() {
        let res = warp::test::request()
            .method("POST")
            .path("/api/v1/compound_interest")
            .json(&json!({
                "initialBalance": 1000,
                "periodicDeposit": 0,
                "frequency": 1,
                "depositTiming": "end",
                "annualInterestRate": 0,
                "years": 3
            }))
            .reply(&routes())
            .await;

        assert_eq!(res.status(), StatusCode::OK);
        let result = body(&res);
        assert_eq!(result["futureValue"], 1000.0);
        assert_eq!(result["yearly"].as_array().unwrap().len(), 4);
        assert_eq!(result["yearly"][0]["interest"], 0.0);
    }

    #[tokio::test]
    async fn compound_interest_endpoint_rejects_zero_years() {
        let res = warp::test::request()
            .method("POST")
            .path("/api/v1/compound_interest")
            .json(&json!({
                "initialBalance": 1000,
                "periodicDeposit": 10,
                "frequency": 12,
                "depositTiming": "beginning",
                "annualInterestRate": 4,
                "years": 0
            }))
            .reply(&routes())
            .await;

        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body(&res)["fields"]["years"].is_string());
    }

    #[tokio::test]
    async fn compound_interest_endpoint_rejects_rates_above_one_hundred() {
        let res = warp::test::request()
            .method("POST")
            .path("/api/v1/compound_interest")
            .json(&json!({
                "initialBalance": 1000,
                "periodicDeposit": 10,
                "frequency": 12,
                "depositTiming": "end",
                "annualInterestRate": 1000000,
                "years": 100
            }))
            .reply(&routes())
            .await;

        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body(&res)["fields"]["annualInterestRate"].is_string());
    }

    #[tokio::test]
    async fn compound_interest_endpoint_refuses_overflowing_figures() {
        let res = warp::test::request()
            .method("POST")
            .path("/api/v1/compound_interest")
            .json(&json!({
                "initialBalance": 1e306,
                "periodicDeposit": 0,
                "frequency": 12,
                "depositTiming": "end",
                "annualInterestRate": 100,
                "years": 100
            }))
            .reply(&routes())
            .await;

        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let error = body(&res);
        assert!(error["error"].is_string());
        assert!(error.get("fields").is_none());
    }

    #[tokio::test]
    async fn salary_endpoint_handles_huge_child_counts() {
        let mut request = salary_request();
        request["childrenUnder25"] = json!(i32::MAX);
        request["childrenOver25"] = json!(1);

        let res = warp::test::request()
            .method("POST")
            .path("/api/v1/salary")
            .json(&request)
            .reply(&routes())
            .await;

        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body(&res)["irpf"], 0.0);
    }

    #[tokio::test]
    async fn regions_endpoint_lists_all_regions() {
        let res = warp::test::request()
            .method("GET")
            .path("/api/v1/regions")
            .reply(&routes())
            .await;

        assert_eq!(res.status(), StatusCode::OK);
        let regions = body(&res);
        let regions = regions.as_array().unwrap();
        assert_eq!(regions.len(), 19);
        let madrid = regions.iter().find(|r| r["code"] == "madrid").unwrap();
        assert_eq!(madrid["irpfMultiplier"], 1.0);
    }

    #[tokio::test]
    async fn unknown_path_is_not_found() {
        let res = warp::test::request()
            .method("GET")
            .path("/api/v1/nothing")
            .reply(&routes())
            .await;

        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(body(&res)["error"], "Not Found");
    }

    #[tokio::test]
    async fn health_check() {
        let res = warp::test::request().path("/health").reply(&routes()).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(body(&res)["status"], "ok");
    }
}
