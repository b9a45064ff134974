// src/products/mod.rs

pub mod products_router;
pub mod products_store;
pub mod products_structs;
