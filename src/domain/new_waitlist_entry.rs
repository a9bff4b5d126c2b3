use super::{WaitlistCity, WaitlistEmail};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWaitlistEntry {
    pub email: WaitlistEmail,
    pub city: WaitlistCity,
}

impl NewWaitlistEntry {
    pub fn parse(email: String, city: String) -> Result<Self, String> {
        let email = WaitlistEmail::parse(email)?;
        let city = WaitlistCity::parse(city)?;
        Ok(Self { email, city })
    }
}
