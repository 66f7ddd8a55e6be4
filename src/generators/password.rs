use rand::{Rng, seq::SliceRandom};

use crate::models::PasswordPolicy;

pub const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const NUMBERS: &[u8] = b"0123456789";
pub const SYMBOLS: &[u8] = b"!#$%&()*+";

/// Convenience generator for site passwords.
///
/// Every password mixes letters, symbols and digits in the counts given by
/// the policy, then shuffles the result. It uses a non-cryptographic RNG
/// and makes no strength promise beyond the presence of each class.
#[derive(Debug, Clone, Default)]
pub struct PasswordGenerator {
    policy: PasswordPolicy,
}

impl PasswordGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with_policy(policy: PasswordPolicy) -> Self {
        Self { policy }
    }

    #[cfg(test)]
    pub fn policy(&self) -> &PasswordPolicy {
        &self.policy
    }

    pub fn generate_password(&self) -> String {
        self.generate_with(&mut rand::thread_rng())
    }

    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let policy = &self.policy;

        let letter_count = rng.gen_range(policy.min_letters..=policy.max_letters);
        let symbol_count = rng.gen_range(policy.min_symbols..=policy.max_symbols);
        let number_count = rng.gen_range(policy.min_numbers..=policy.max_numbers);

        let mut chars = Vec::with_capacity(letter_count + symbol_count + number_count);
        chars.extend(pick(rng, LETTERS, letter_count));
        chars.extend(pick(rng, SYMBOLS, symbol_count));
        chars.extend(pick(rng, NUMBERS, number_count));

        chars.shuffle(rng);

        log::debug!("Generated password of length {}", chars.len());
        chars.into_iter().collect()
    }
}

// Draw `count` characters uniformly from `set`
fn pick<R: Rng + ?Sized>(rng: &mut R, set: &[u8], count: usize) -> Vec<char> {
    (0..count)
        .map(|_| set[rng.gen_range(0..set.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn in_set(set: &[u8], c: char) -> bool {
        c.is_ascii() && set.contains(&(c as u8))
    }

    #[test]
    fn test_generated_passwords_respect_length_bounds() {
        let generator = PasswordGenerator::new();
        for _ in 0..500 {
            let password = generator.generate_password();
            let len = password.chars().count();
            assert!((12..=18).contains(&len), "unexpected length {} for {}", len, password);
        }
    }

    #[test]
    fn test_generated_passwords_contain_every_class() {
        let generator = PasswordGenerator::new();
        for _ in 0..500 {
            let password = generator.generate_password();
            assert!(password.chars().any(|c| in_set(LETTERS, c)), "no letter in {}", password);
            assert!(password.chars().any(|c| in_set(NUMBERS, c)), "no digit in {}", password);
            assert!(password.chars().any(|c| in_set(SYMBOLS, c)), "no symbol in {}", password);
        }
    }

    #[test]
    fn test_generated_passwords_use_only_known_characters() {
        let generator = PasswordGenerator::new();
        for _ in 0..500 {
            let password = generator.generate_password();
            for c in password.chars() {
                assert!(
                    in_set(LETTERS, c) || in_set(NUMBERS, c) || in_set(SYMBOLS, c),
                    "unexpected character {:?} in {}",
                    c,
                    password
                );
            }
        }
    }

    #[test]
    fn test_class_counts_stay_within_policy() {
        let generator = PasswordGenerator::new();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let password = generator.generate_with(&mut rng);
            let letters = password.chars().filter(|c| in_set(LETTERS, *c)).count();
            let numbers = password.chars().filter(|c| in_set(NUMBERS, *c)).count();
            let symbols = password.chars().filter(|c| in_set(SYMBOLS, *c)).count();
            assert!((8..=10).contains(&letters));
            assert!((2..=4).contains(&numbers));
            assert!((2..=4).contains(&symbols));
        }
    }

    #[test]
    fn test_same_seed_gives_same_password() {
        let generator = PasswordGenerator::new();
        let first = generator.generate_with(&mut StdRng::seed_from_u64(42));
        let second = generator.generate_with(&mut StdRng::seed_from_u64(42));
        assert_eq!(first, second);
    }

    #[test]
    fn test_fixed_policy_yields_fixed_length() {
        let policy = PasswordPolicy {
            min_letters: 3,
            max_letters: 3,
            min_symbols: 1,
            max_symbols: 1,
            min_numbers: 2,
            max_numbers: 2,
        };
        let generator = PasswordGenerator::with_policy(policy);
        assert_eq!(generator.policy().min_length(), 6);
        assert_eq!(generator.policy().max_length(), 6);
        assert_eq!(generator.generate_password().len(), 6);
    }

    #[test]
    fn test_default_policy_bounds() {
        let policy = PasswordPolicy::default();
        assert_eq!(policy.min_length(), 12);
        assert_eq!(policy.max_length(), 18);
    }
}
