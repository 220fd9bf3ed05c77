//! Seed resolution for runs that do not pin an explicit seed.

use std::process;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeedChoice {
    Configured(u64),
    Generated(u64),
}

impl SeedChoice {
    pub fn resolve(configured: Option<u64>) -> Self {
        match configured {
            Some(seed) => Self::Configured(seed),
            None => Self::Generated(generate_runtime_seed()),
        }
    }

    pub fn is_generated(self) -> bool {
        matches!(self, Self::Generated(_))
    }

    pub fn value(self) -> u64 {
        match self {
            Self::Configured(seed) | Self::Generated(seed) => seed,
        }
    }
}

static GENERATED_SEED_COUNTER: AtomicU64 = AtomicU64::new(0);

pub fn generate_runtime_seed() -> u64 {
    let now_nanos =
        SystemTime::now().duration_since(UNIX_EPOCH).map_or(0_u128, |duration| duration.as_nanos());
    let pid = u64::from(process::id());
    let counter = GENERATED_SEED_COUNTER.fetch_add(1, Ordering::Relaxed);

    let entropy = (now_nanos as u64)
        ^ ((now_nanos >> 64) as u64)
        ^ pid.rotate_left(17)
        ^ counter.rotate_left(7);

    mix_seed(entropy)
}

fn mix_seed(mut value: u64) -> u64 {
    value ^= value >> 30;
    value = value.wrapping_mul(0xBF58_476D_1CE4_E5B9);
    value ^= value >> 27;
    value = value.wrapping_mul(0x94D0_49BB_1331_11EB);
    value ^ (value >> 31)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_seed_is_used_verbatim() {
        assert_eq!(SeedChoice::resolve(Some(4_242)), SeedChoice::Configured(4_242));
        assert_eq!(SeedChoice::resolve(Some(0)).value(), 0);
    }

    #[test]
    fn missing_seed_is_generated() {
        assert!(SeedChoice::resolve(None).is_generated());
        assert!(!SeedChoice::resolve(Some(5)).is_generated());
    }

    #[test]
    fn generated_seed_changes_between_calls() {
        let first = generate_runtime_seed();
        let second = generate_runtime_seed();
        assert_ne!(first, second, "runtime seed generation should vary per call");
    }

    #[test]
    fn mixing_spreads_adjacent_inputs() {
        assert_ne!(mix_seed(1), mix_seed(2));
        assert_eq!(mix_seed(0), 0);
    }
}
