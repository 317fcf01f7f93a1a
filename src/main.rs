use dotenv::dotenv;
use log::{info, warn};
use warp::Filter;
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use calculadora_nomina::routes;

const DEFAULT_PORT: u16 = 3030;

fn port_from_env() -> u16 {
    match env::var("PORT") {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("PORT '{}' is not a valid port, defaulting to {}", raw, DEFAULT_PORT);
            DEFAULT_PORT
        }),
        Err(_) => {
            warn!("$PORT not set, defaulting to {}", DEFAULT_PORT);
            DEFAULT_PORT
        }
    }
}

fn bind_addr_from_env() -> IpAddr {
    let fallback = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
    match env::var("BIND_ADDR") {
        Ok(raw) => raw.parse().unwrap_or_else(|_| {
            warn!("BIND_ADDR '{}' is not an IP address, defaulting to {}", raw, fallback);
            fallback
        }),
        Err(_) => fallback,
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    // Initialize the logger
    env_logger::init();
    info!("Logger initialized. Starting the calculator service...");

    let addr = SocketAddr::new(bind_addr_from_env(), port_from_env());
    info!("Will bind to: {}", addr);

    // Set up CORS
    let cors = warp::cors()
        .allow_any_origin()
        .allow_header("content-type")
        .allow_methods(vec!["GET", "POST"]);

    let api = routes::routes().with(cors);
    info!("Routes configured successfully with CORS.");

    info!("Starting server on {}", addr);
    warp::serve(api)
        .run(addr)
        .await;
}
