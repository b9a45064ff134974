// src/shop/mod.rs

pub mod shop_router;
pub mod shop_store;
pub mod shop_structs;
