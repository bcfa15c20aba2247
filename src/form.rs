use secrecy::{ExposeSecret, Secret};
use serde_json::{Map, Value};

use crate::{
    connection::Connection,
    domain::{AccountRecord, AccountUpdate},
    errors::Error,
    notify::Notifier,
    Result,
};

/// Message shown when the two new-password fields differ.
pub const PASSWORD_MISMATCH_MESSAGE: &str = "New password and confirmation must match.";

/// Message shown after the server accepts an update.
pub const UPDATE_SUCCEEDED_MESSAGE: &str = "Update succeeded";

/// The four editable inputs of the account screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    ExistingPassword,
    NewPassword,
    PasswordConfirmation,
}

/// Local state behind the controlled inputs. One instance per mounted
/// form; created empty, dropped with the form.
#[derive(Debug, Clone)]
pub struct FormState {
    pub email: String,
    pub existing_password: Secret<String>,
    pub new_password: Secret<String>,
    pub password_confirmation: Secret<String>,
    /// Profile fields the load operation returned beyond `email`. Carried
    /// verbatim, never edited here.
    pub extra: Map<String, Value>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            email: String::new(),
            existing_password: Secret::new(String::new()),
            new_password: Secret::new(String::new()),
            password_confirmation: Secret::new(String::new()),
            extra: Map::new(),
        }
    }
}

impl FormState {
    /// Field-by-field overwrite: whatever the record carries wins, whatever
    /// it omits keeps its current value.
    fn apply_record(&mut self, record: AccountRecord) {
        self.email = record.email;
        for (key, value) in record.extra {
            self.extra.insert(key, value);
        }
    }

    fn clear_passwords(&mut self) {
        self.existing_password = Secret::new(String::new());
        self.new_password = Secret::new(String::new());
        self.password_confirmation = Secret::new(String::new());
    }

    fn confirmation_matches(&self) -> bool {
        self.new_password.expose_secret() == self.password_confirmation.expose_secret()
    }
}

/// What a call to [`AccountForm::submit`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The confirmation did not match the new password; nothing was sent.
    Rejected,
    /// The server accepted the update; password fields were cleared.
    Updated,
    /// The server rejected the update; the form kept its state.
    Failed(Error),
}

/// Controller for the account screen: loads the current record, tracks
/// edits, validates and submits.
///
/// `load` and `submit` take `&mut self`, so a second request cannot start
/// while one is in flight, and dropping the form (or an in-flight future)
/// drops the request with it.
pub struct AccountForm<C, N> {
    state: FormState,
    conn: C,
    notifier: N,
}

impl<C, N> AccountForm<C, N>
where
    C: Connection,
    N: Notifier,
{
    pub fn new(conn: C, notifier: N) -> Self {
        Self {
            state: FormState::default(),
            conn,
            notifier,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Fetch the current account record and merge it into the form.
    ///
    /// The inputs are usable before this resolves. A failed fetch leaves
    /// the form untouched and hands the error back to the host; nothing is
    /// retried and the user is not notified here.
    pub async fn load(&mut self) -> Result<()> {
        match self.conn.get_account().await {
            Ok(record) => {
                tracing::debug!("Loaded account record for {}", record.email);
                self.state.apply_record(record);
                Ok(())
            }
            Err(e) => {
                tracing::error!("Failed to load account: {:?}", e);
                Err(e)
            }
        }
    }

    /// Overwrite one field with the user's input, verbatim. No trimming,
    /// no validation; the confirmation check runs once, at submit.
    pub fn edit(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Email => self.state.email = value,
            Field::ExistingPassword => self.state.existing_password = Secret::new(value),
            Field::NewPassword => self.state.new_password = Secret::new(value),
            Field::PasswordConfirmation => self.state.password_confirmation = Secret::new(value),
        }
    }

    /// Validate and send the update. Every branch notifies the user
    /// exactly once.
    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.state.confirmation_matches() {
            self.notifier.notify(PASSWORD_MISMATCH_MESSAGE);
            return SubmitOutcome::Rejected;
        }

        let update = AccountUpdate {
            email: self.state.email.clone(),
            existing_password: self.state.existing_password.clone(),
            new_password: self.state.new_password.clone(),
        };
        match self.conn.update_account(update).await {
            Ok(()) => {
                tracing::debug!("Account update accepted");
                self.state.clear_passwords();
                self.notifier.notify(UPDATE_SUCCEEDED_MESSAGE);
                SubmitOutcome::Updated
            }
            Err(e) => {
                // Keep the password fields so the user can correct and resubmit.
                tracing::warn!("Account update failed: {:?}", e);
                self.notifier.notify(&e.to_string());
                SubmitOutcome::Failed(e)
            }
        }
    }
}
