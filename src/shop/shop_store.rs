// src/shop/shop_store.rs

use super::shop_structs::{ShopSettings, ShopSettingsUpdate};
use crate::error::ApiError;
use crate::store::Store;

const SETTINGS_COLUMNS: &str = "id, shop_name, address_line1, address_line2, \
                                phone, email, website, gst_number, updated_at";

/// Reads the current shop profile, the newest row if several exist.
pub async fn get_settings(store: &Store) -> Result<ShopSettings, ApiError> {
    sqlx::query_as::<_, ShopSettings>(&format!(
        "SELECT {SETTINGS_COLUMNS} FROM shop_settings ORDER BY id DESC LIMIT 1"
    ))
    .fetch_optional(store.pool())
    .await?
    .ok_or_else(|| ApiError::NotFound("shop settings not configured".into()))
}

/// Replaces the current shop profile in place.
pub async fn update_settings(
    store: &Store,
    update: ShopSettingsUpdate,
) -> Result<ShopSettings, ApiError> {
    sqlx::query_as::<_, ShopSettings>(&format!(
        "UPDATE shop_settings \
         SET shop_name = $1, address_line1 = $2, address_line2 = $3, phone = $4, \
             email = $5, website = $6, gst_number = $7, updated_at = now() \
         WHERE id = (SELECT id FROM shop_settings ORDER BY id DESC LIMIT 1) \
         RETURNING {SETTINGS_COLUMNS}"
    ))
    .bind(&update.shop_name)
    .bind(&update.address_line1)
    .bind(&update.address_line2)
    .bind(&update.phone)
    .bind(&update.email)
    .bind(&update.website)
    .bind(&update.gst_number)
    .fetch_optional(store.pool())
    .await?
    .ok_or_else(|| ApiError::NotFound("shop settings not configured".into()))
}
