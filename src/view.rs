//! Declarative description of the rendered account screen.
//!
//! The core is headless. A host widget layer walks [`AccountForm::fields`]
//! to build its inputs, routes each keystroke back through
//! [`AccountForm::edit`], and wires its submit control to
//! [`AccountForm::submit`] in place of the toolkit's own submit handling.

use secrecy::ExposeSecret;

use crate::{
    connection::Connection,
    form::{AccountForm, Field},
    notify::Notifier,
};

/// Label for the form's submit control.
pub const SUBMIT_LABEL: &str = "Update";

/// Input widget flavor. Password inputs are expected to mask their value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Email,
    Password,
}

/// One labeled input of the account screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldView<'a> {
    pub field: Field,
    /// Stable machine name, matching the wire name where the field has one.
    pub name: &'static str,
    pub label: &'static str,
    pub kind: InputKind,
    /// Current value for the controlled input.
    pub value: &'a str,
}

impl<C, N> AccountForm<C, N>
where
    C: Connection,
    N: Notifier,
{
    /// The four inputs, in render order.
    pub fn fields(&self) -> [FieldView<'_>; 4] {
        let state = self.state();
        [
            FieldView {
                field: Field::Email,
                name: "email",
                label: "Email",
                kind: InputKind::Email,
                value: &state.email,
            },
            FieldView {
                field: Field::ExistingPassword,
                name: "existingPassword",
                label: "Existing Password",
                kind: InputKind::Password,
                value: state.existing_password.expose_secret(),
            },
            FieldView {
                field: Field::NewPassword,
                name: "newPassword",
                label: "New Password",
                kind: InputKind::Password,
                value: state.new_password.expose_secret(),
            },
            FieldView {
                field: Field::PasswordConfirmation,
                name: "passwordConfirmation",
                label: "Password Confirmation",
                kind: InputKind::Password,
                value: state.password_confirmation.expose_secret(),
            },
        ]
    }
}
