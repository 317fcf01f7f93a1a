// src/handlers/regions.rs
use std::convert::Infallible;
use warp::reply::Json;
use crate::models::{Region, RegionInfo};
use crate::services::irpf::region_multiplier;
use log::debug;

pub async fn get_regions() -> Result<Json, Infallible> {
    let regions: Vec<RegionInfo> = Region::ALL
        .iter()
        .map(|&region| RegionInfo {
            code: region.code(),
            name: region.name(),
            irpf_multiplier: region_multiplier(region),
        })
        .collect();

    debug!("Returning {} regions", regions.len());
    Ok(warp::reply::json(&regions))
}
