// src/handlers/mod.rs
pub mod error;
pub mod salary;
pub mod compound_interest;
pub mod regions;
