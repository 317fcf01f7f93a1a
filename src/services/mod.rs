// src/services/mod.rs
pub mod brackets;
pub mod validation;
pub mod social_security;
pub mod irpf;
pub mod salary;
pub mod compound_interest;
