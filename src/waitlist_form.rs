use actix_web::{ResponseError, http::StatusCode};
use tokio::sync::watch;

use crate::{
    domain::{NewWaitlistEntry, SubmissionStatus},
    routes::error_chain_fmt,
    waitlist_store::{StoreError, WaitlistStore},
};

#[derive(thiserror::Error)]
pub enum SubmitError {
    #[error("{0}")]
    ValidationError(String),
    #[error("The email is already on the waitlist.")]
    DuplicateError,
    #[error(transparent)]
    UnknownStoreError(#[from] anyhow::Error),
}

impl std::fmt::Debug for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl From<StoreError> for SubmitError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UniqueViolation => SubmitError::DuplicateError,
            StoreError::UnexpectedError(e) => SubmitError::UnknownStoreError(e),
        }
    }
}

impl ResponseError for SubmitError {
    fn status_code(&self) -> StatusCode {
        match self {
            SubmitError::ValidationError(_) => StatusCode::BAD_REQUEST,
            SubmitError::DuplicateError => StatusCode::CONFLICT,
            SubmitError::UnknownStoreError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl SubmitError {
    pub fn status(&self) -> SubmissionStatus {
        match self {
            SubmitError::DuplicateError => SubmissionStatus::Exists,
            SubmitError::ValidationError(_) | SubmitError::UnknownStoreError(_) => {
                SubmissionStatus::Error
            }
        }
    }
}

/// Everything the waitlist form shows: the two inputs, the outcome of the
/// latest attempt and whether an attempt is in flight.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
pub struct FormState {
    pub email: String,
    pub city: String,
    pub status: SubmissionStatus,
    pub loading: bool,
}

enum Attempt {
    InFlight(SubmissionStatus),
    Rejected(SubmitError),
    Start(NewWaitlistEntry),
}

/// A single waitlist form instance.
///
/// At most one submission is in flight at a time: `submit` is a no-op while
/// `loading` is set. Every state transition is published on a watch channel,
/// see [`WaitlistForm::subscribe`].
pub struct WaitlistForm<'s, S> {
    store: &'s S,
    state: watch::Sender<FormState>,
}

impl<'s, S> WaitlistForm<'s, S>
where
    S: WaitlistStore,
{
    pub fn new(store: &'s S) -> Self {
        Self {
            store,
            state: watch::Sender::new(FormState::default()),
        }
    }

    pub fn with_input(store: &'s S, email: impl Into<String>, city: impl Into<String>) -> Self {
        let form = Self::new(store);
        form.set_email(email);
        form.set_city(city);
        form
    }

    pub fn set_email(&self, email: impl Into<String>) {
        let email = email.into();
        self.state.send_modify(|state| state.email = email);
    }

    pub fn set_city(&self, city: impl Into<String>) {
        let city = city.into();
        self.state.send_modify(|state| state.city = city);
    }

    pub fn state(&self) -> FormState {
        self.state.borrow().clone()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.state.borrow().status
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    pub fn subscribe(&self) -> watch::Receiver<FormState> {
        self.state.subscribe()
    }

    /// Submits the current inputs to the waitlist and returns the new status.
    pub async fn submit(&self) -> SubmissionStatus {
        self.try_submit().await.unwrap_or_else(|e| e.status())
    }

    /// Like [`WaitlistForm::submit`], but keeps the reason a submission failed.
    ///
    /// While another submission is in flight this is a no-op returning
    /// `Ok` with the current status.
    #[tracing::instrument(
        name = "Submitting waitlist form",
        skip(self),
        fields(waitlist_email = tracing::field::Empty)
    )]
    pub async fn try_submit(&self) -> Result<SubmissionStatus, SubmitError> {
        let entry = match self.begin() {
            Attempt::InFlight(status) => {
                tracing::debug!("A submission is already in flight, ignoring.");
                return Ok(status);
            }
            Attempt::Rejected(e) => {
                tracing::info!(error.message = %e, "Rejected waitlist input.");
                return Err(e);
            }
            Attempt::Start(entry) => entry,
        };
        tracing::Span::current().record(
            "waitlist_email",
            tracing::field::display(entry.email.as_ref()),
        );

        let _loading = LoadingGuard(&self.state);

        let outcome = self
            .store
            .insert(&entry)
            .await
            .map_err(SubmitError::from);

        let status = match &outcome {
            Ok(()) => SubmissionStatus::Success,
            Err(e) => e.status(),
        };
        if let Err(SubmitError::UnknownStoreError(e)) = &outcome {
            tracing::error!(
                error.cause_chain = ?e,
                error.message = %e,
                "Failed to add the entry to the waitlist."
            );
        }

        self.state.send_modify(|state| {
            state.status = status;
            if status == SubmissionStatus::Success {
                state.email.clear();
                state.city.clear();
            }
        });

        outcome.map(|()| status)
    }

    /// Checks for an in-flight attempt, resets the status and validates the
    /// inputs in one state transition, so two callers can never both start.
    fn begin(&self) -> Attempt {
        let mut attempt = None;
        self.state.send_if_modified(|state| {
            if state.loading {
                attempt = Some(Attempt::InFlight(state.status));
                return false;
            }

            state.status = SubmissionStatus::Idle;
            attempt = Some(
                match NewWaitlistEntry::parse(state.email.clone(), state.city.clone()) {
                    Ok(entry) => {
                        state.loading = true;
                        Attempt::Start(entry)
                    }
                    Err(reason) => {
                        let e = SubmitError::ValidationError(reason);
                        state.status = e.status();
                        Attempt::Rejected(e)
                    }
                },
            );
            true
        });
        attempt.unwrap_or_else(|| Attempt::InFlight(self.status()))
    }
}

struct LoadingGuard<'a>(&'a watch::Sender<FormState>);

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.send_modify(|state| state.loading = false);
    }
}
