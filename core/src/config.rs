use std::{env, fmt};

use anyhow::{bail, Context};

use crate::domain::ports::hashing::{MAX_HASH_COST, MIN_HASH_COST};

/// Work factor used when `PASSWORD_HASH_COST` is not set
pub const DEFAULT_PASSWORD_HASH_COST: u32 = 6;

#[derive(Clone)]
pub struct Config {
    /// May carry credentials; never printed by `Debug`
    pub database_url: String,
    /// Bcrypt work factor for newly hashed passwords
    pub password_hash_cost: u32,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        Self::from_vars(
            env::var("DATABASE_URL").ok(),
            env::var("PASSWORD_HASH_COST").ok(),
        )
    }

    fn from_vars(database_url: Option<String>, hash_cost: Option<String>) -> anyhow::Result<Self> {
        Ok(Self {
            database_url: database_url.context("DATABASE_URL must be set")?,
            password_hash_cost: parse_hash_cost(hash_cost.as_deref())?,
        })
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"<redacted>")
            .field("password_hash_cost", &self.password_hash_cost)
            .finish()
    }
}

fn parse_hash_cost(raw: Option<&str>) -> anyhow::Result<u32> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_PASSWORD_HASH_COST);
    };

    let cost: u32 = raw
        .trim()
        .parse()
        .with_context(|| format!("PASSWORD_HASH_COST is not a number: {}", raw))?;

    if !(MIN_HASH_COST..=MAX_HASH_COST).contains(&cost) {
        bail!(
            "PASSWORD_HASH_COST must be between {} and {}, got {}",
            MIN_HASH_COST,
            MAX_HASH_COST,
            cost
        );
    }

    Ok(cost)
}
