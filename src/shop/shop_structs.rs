// src/shop/shop_structs.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The shop profile printed on receipts. A single row, updated in place.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ShopSettings {
    pub id: i32,
    pub shop_name: String,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub gst_number: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Full replacement payload for the shop profile.
#[derive(Debug, Deserialize)]
pub struct ShopSettingsUpdate {
    pub shop_name: String,
    pub address_line1: Option<String>,
    pub address_line2: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub gst_number: Option<String>,
}
