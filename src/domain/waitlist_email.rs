//! src/domain/waitlist_email.rs
use validator::validate_email;

#[derive(thiserror::Error, Debug)]
pub enum EmailError {
    #[error("Empty email")]
    Empty,
    #[error("{0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WaitlistEmail(String);

impl WaitlistEmail {
    pub fn parse(s: String) -> Result<Self, EmailError> {
        if s.is_empty() {
            return Err(EmailError::Empty);
        }

        if validate_email(&s) && has_dotted_domain(&s) {
            Ok(Self(s))
        } else {
            Err(EmailError::Invalid(format!("Invalid email: {}", s)))
        }
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

/// The domain must end in a dot followed by a top-level label of at least two
/// letters (`example.com`, not `localhost` or `example`).
fn has_dotted_domain(s: &str) -> bool {
    let domain = match s.rsplit_once('@') {
        Some((_, domain)) => domain,
        None => return false,
    };

    match domain.rsplit_once('.') {
        Some((rest, tld)) => {
            !rest.is_empty()
                && !rest.ends_with('.')
                && tld.len() >= 2
                && tld.chars().all(|c| c.is_ascii_alphabetic())
        }
        None => false,
    }
}

impl AsRef<str> for WaitlistEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WaitlistEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}
