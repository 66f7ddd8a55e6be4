// src/models.rs
/// One saved login, keyed by website name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CredentialRecord {
    pub website: String,
    pub email: String,
    pub password: String,
}

impl CredentialRecord {
    pub fn new(website: &str, email: &str, password: &str) -> Self {
        Self {
            website: website.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}

// Password generation options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordPolicy {
    pub min_letters: usize,
    pub max_letters: usize,
    pub min_symbols: usize,
    pub max_symbols: usize,
    pub min_numbers: usize,
    pub max_numbers: usize,
}

impl PasswordPolicy {
    #[cfg(test)]
    pub fn min_length(&self) -> usize {
        self.min_letters + self.min_symbols + self.min_numbers
    }

    #[cfg(test)]
    pub fn max_length(&self) -> usize {
        self.max_letters + self.max_symbols + self.max_numbers
    }
}

impl Default for PasswordPolicy {
    fn default() -> Self {
        Self {
            min_letters: 8,
            max_letters: 10,
            min_symbols: 2,
            max_symbols: 4,
            min_numbers: 2,
            max_numbers: 4,
        }
    }
}
