use std::{
    collections::HashMap,
    env,
    error::Error,
    sync::{OnceLock, RwLock},
};

use rand::{random, rngs::StdRng, SeedableRng};

mod recording;

pub use recording::{CallJournal, Notification, RecordingObserver};

pub const DEFAULT_TEST_SEED_ENV: &str = "DEFAULT_TEST_SEED";

static SEEDS: OnceLock<RwLock<HashMap<&'static str, u64>>> = OnceLock::new();

fn get_seeds_lock() -> &'static RwLock<HashMap<&'static str, u64>> {
    SEEDS.get_or_init(|| RwLock::new(HashMap::new()))
}

/// Seeds are resolved once per key: from the env var named by `key` when it
/// parses as `u64`, randomly otherwise. The chosen seed is printed so a failing
/// run can be replayed.
fn get_seed(key: &'static str) -> Result<u64, Box<dyn Error>> {
    let mut seeds = get_seeds_lock().write()?;
    Ok(*seeds.entry(key).or_insert_with(|| {
        let seed = env::var(key)
            .ok()
            .and_then(|seed_var| seed_var.parse::<u64>().ok())
            .unwrap_or_else(random);
        println!("Using seed {} for {}", seed, key);
        seed
    }))
}

fn build_rng(key: Option<&'static str>) -> Result<StdRng, Box<dyn Error>> {
    let seed = get_seed(key.unwrap_or(DEFAULT_TEST_SEED_ENV))?;
    Ok(StdRng::seed_from_u64(seed))
}

pub fn get_seeded_rng() -> Result<StdRng, Box<dyn Error>> {
    build_rng(None)
}

pub fn get_seeded_rng_from_scope(key: &'static str) -> Result<StdRng, Box<dyn Error>> {
    build_rng(Some(key))
}
