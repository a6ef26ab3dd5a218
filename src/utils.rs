use crate::constants::SJ_SECRET_KEY_ENV;
use crate::error::{Error, Result};

/// Read the SuperJob application key from the environment
pub fn get_sj_secret_key() -> Result<String> {
    std::env::var(SJ_SECRET_KEY_ENV)
        .ok()
        .filter(|key| !key.trim().is_empty())
        .ok_or_else(|| {
            Error::Config(format!(
                "{} is not set; register an app at api.superjob.ru to get a key",
                SJ_SECRET_KEY_ENV
            ))
        })
}
