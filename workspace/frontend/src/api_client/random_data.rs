use common::{Bank, Resource, User};
use crate::api_client;
use crate::settings;

/// Fetch `size` random users
pub async fn fetch_users(size: u32) -> Result<Vec<User>, String> {
    log::trace!("Fetching {} random users", size);
    let url = settings::get_settings().source().url(Resource::Users, size);
    let result = api_client::get_records::<User>(&url).await;
    match &result {
        Ok(users) => log::info!("Fetched {} users", users.len()),
        Err(e) => log::error!("Failed to fetch users: {}", e),
    }
    result
}

/// Fetch `size` random banks
pub async fn fetch_banks(size: u32) -> Result<Vec<Bank>, String> {
    log::trace!("Fetching {} random banks", size);
    let url = settings::get_settings().source().url(Resource::Banks, size);
    let result = api_client::get_records::<Bank>(&url).await;
    match &result {
        Ok(banks) => log::info!("Fetched {} banks", banks.len()),
        Err(e) => log::error!("Failed to fetch banks: {}", e),
    }
    result
}
