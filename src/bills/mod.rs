// src/bills/mod.rs

pub mod bills_router;
pub mod bills_structs;
pub mod read_model;
pub mod settlement;
