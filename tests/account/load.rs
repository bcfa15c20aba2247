use account_form::{domain::AccountRecord, form::Field};
use claims::{assert_err, assert_ok};
use secrecy::ExposeSecret;
use serde_json::json;

use crate::helpers::{fake_email, spawn_form};

#[tokio::test]
async fn load_merges_the_returned_record_into_state() {
    let mut t = spawn_form();
    let email = fake_email();
    t.conn.serve_account(AccountRecord {
        email: email.clone(),
        extra: Default::default(),
    });

    assert_ok!(t.form.load().await);

    let state = t.form.state();
    assert_eq!(state.email, email);
    assert_eq!(state.existing_password.expose_secret(), "");
    assert_eq!(state.new_password.expose_secret(), "");
    assert_eq!(state.password_confirmation.expose_secret(), "");
}

#[tokio::test]
async fn load_keeps_unknown_profile_fields_around() {
    let mut t = spawn_form();
    let record: AccountRecord = serde_json::from_value(json!({
        "email": "joe@example.com",
        "name": "joe",
    }))
    .unwrap();
    t.conn.serve_account(record);

    assert_ok!(t.form.load().await);

    assert_eq!(t.form.state().extra.get("name"), Some(&json!("joe")));
}

#[tokio::test]
async fn load_never_touches_the_password_inputs() {
    let mut t = spawn_form();
    t.form.edit(Field::ExistingPassword, "typed-before-load");
    t.conn.serve_account(AccountRecord {
        email: fake_email(),
        extra: Default::default(),
    });

    assert_ok!(t.form.load().await);

    assert_eq!(
        t.form.state().existing_password.expose_secret(),
        "typed-before-load"
    );
}

#[tokio::test]
async fn load_failure_leaves_the_form_untouched() {
    let mut t = spawn_form();
    t.form.edit(Field::Email, "typed@before.load");
    t.conn.fail_get("account service unavailable");

    let e = assert_err!(t.form.load().await);

    assert_eq!(e.to_string(), "account service unavailable");
    assert_eq!(t.form.state().email, "typed@before.load");
    assert!(t.notifier.messages().is_empty());
}
