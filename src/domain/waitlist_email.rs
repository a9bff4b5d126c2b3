use validator::ValidateEmail;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistEmail(String);

impl WaitlistEmail {
    pub fn parse(s: String) -> Result<Self, String> {
        if s.trim().is_empty() {
            return Err("Email is required.".to_string());
        }
        if !s.validate_email() {
            return Err(format!("{} is not a valid email address.", s));
        };
        Ok(Self(s))
    }
}

impl AsRef<str> for WaitlistEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
