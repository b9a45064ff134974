// src/stock/mod.rs

pub mod ledger;
