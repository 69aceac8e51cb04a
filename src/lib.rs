// src/lib.rs
pub mod layout;
pub mod math;
