mod new_waitlist_entry;
mod submission_status;
mod waitlist_city;
mod waitlist_email;

pub use new_waitlist_entry::NewWaitlistEntry;
pub use submission_status::SubmissionStatus;
pub use waitlist_city::WaitlistCity;
pub use waitlist_email::WaitlistEmail;
