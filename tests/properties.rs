use passgen::pass::{Category, build_pool, generate, pick_index};
use passgen::settings::{MAX_LENGTH, MIN_LENGTH};
use passgen::{GenerationConfig, ValidationError, assess, generate_password, random};
use proptest::prelude::*;

fn config_strategy() -> impl Strategy<Value = GenerationConfig> {
    (MIN_LENGTH..=MAX_LENGTH, any::<[bool; 4]>()).prop_map(|(length, flags)| {
        Category::ALL
            .into_iter()
            .zip(flags)
            .fold(GenerationConfig::default().with_length(length), |cfg, (c, on)| {
                cfg.with_category(c, on)
            })
    })
}

proptest! {
    #[test]
    fn index_stays_in_range(draw in 0.0f64..1.0, len in 1usize..10_000) {
        let index = pick_index(draw, len);
        prop_assert!(index < len);
    }

    #[test]
    fn index_stays_in_range_near_one(ulps in 1u64..1024, len in 1usize..usize::MAX / 2) {
        let draw = f64::from_bits(1.0f64.to_bits() - ulps);
        prop_assert!(pick_index(draw, len) < len);
    }

    #[test]
    fn generated_length_and_membership(config in config_strategy(), seed in any::<u64>()) {
        let mut rng = random::seeded(seed);
        match generate_password(&config, &mut rng) {
            Ok(password) => {
                let pool = build_pool(&config);
                prop_assert!(config.has_category());
                prop_assert_eq!(password.len(), config.length());
                prop_assert!(password.as_str().chars().all(|c| pool.contains(c)));
            }
            Err(e) => {
                prop_assert_eq!(e, ValidationError::NoCategorySelected);
                prop_assert!(!config.has_category());
            }
        }
    }

    #[test]
    fn generate_honours_any_length(length in 1usize..512, seed in any::<u64>()) {
        let pool = build_pool(&GenerationConfig::all());
        let password = generate(&pool, length, &mut random::seeded(seed));
        prop_assert_eq!(password.len(), length);
    }

    #[test]
    fn assess_is_pure(s in ".*") {
        prop_assert_eq!(assess(&s), assess(&s));
        prop_assert_eq!(assess(&s).percent == 0, s.is_empty());
    }
}
