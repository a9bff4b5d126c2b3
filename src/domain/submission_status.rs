/// Outcome of the latest submission attempt of a waitlist form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Success,
    Exists,
    Error,
}

impl SubmissionStatus {
    /// Message shown under the form, if any.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            SubmissionStatus::Idle => None,
            SubmissionStatus::Success => Some("You’re on the list ✨"),
            SubmissionStatus::Exists => Some("You’re already on the list 👀"),
            SubmissionStatus::Error => Some("Something went wrong. Try again."),
        }
    }
}
