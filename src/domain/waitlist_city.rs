/// A city name as it is stored: trimmed and non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitlistCity(String);

impl WaitlistCity {
    pub fn parse(s: String) -> Result<Self, String> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err("City is required.".to_string());
        }

        Ok(Self(trimmed.to_string()))
    }
}

impl AsRef<str> for WaitlistCity {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
