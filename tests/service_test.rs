//! Credential service scenarios against the in-memory store.

use std::sync::Arc;

use uuid::Uuid;

use credential_core::{
    Account, AccountStore, Argon2Hasher, CredentialError, CredentialManager, CredentialService,
    CredentialVerdict, InMemoryAccountStore, PasswordChange, PasswordHasher, PasswordPolicy,
    RejectionReason,
};

fn setup_account(store: &InMemoryAccountStore, password: Option<&str>) -> Uuid {
    let account = match password {
        Some(plain) => Account::with_credential(
            "user@example.com",
            "Test User",
            Argon2Hasher.derive(plain).expect("hashing should succeed"),
        ),
        None => Account::new("user@example.com", "Test User"),
    };
    let id = account.id;
    store.insert(account).expect("insert should succeed");
    id
}

fn stored_password_verifies(store: &InMemoryAccountStore, id: Uuid, plain: &str) -> bool {
    let account = store.find(id).unwrap().expect("account should exist");
    match account.password_hash() {
        Some(hash) => Argon2Hasher.verify(plain, hash),
        None => false,
    }
}

#[test]
fn test_full_credential_lifecycle() {
    let store = Arc::new(InMemoryAccountStore::new());
    let id = setup_account(&store, None);
    let manager = CredentialManager::new(store.clone());

    // No credential yet, so an empty change is rejected as blank.
    let error = manager
        .change_password(id, PasswordChange::none())
        .unwrap_err();
    let report = error.rejection().expect("should carry a report");
    assert_eq!(report.reasons(), [RejectionReason::BlankPassword]);

    // First credential: no old password needed.
    manager
        .change_password(id, PasswordChange::new("FirstPass1!", "FirstPass1!"))
        .unwrap();
    assert!(stored_password_verifies(&store, id, "FirstPass1!"));

    // Changing it now requires proving the current one.
    let change =
        PasswordChange::new("SecondPass2@", "SecondPass2@").with_old_password("FirstPass1!");
    manager.change_password(id, change).unwrap();
    assert!(stored_password_verifies(&store, id, "SecondPass2@"));
    assert!(!stored_password_verifies(&store, id, "FirstPass1!"));

    // A wrong old password leaves the stored credential untouched.
    let change =
        PasswordChange::new("ThirdPass3#", "ThirdPass3#").with_old_password("FirstPass1!");
    let error = manager.change_password(id, change).unwrap_err();
    let report = error.rejection().expect("should carry a report");
    assert_eq!(report.reasons(), [RejectionReason::IncorrectOldPassword]);
    assert!(stored_password_verifies(&store, id, "SecondPass2@"));
}

#[test]
fn test_rejected_change_reports_every_field_at_once() {
    let store = Arc::new(InMemoryAccountStore::new());
    let id = setup_account(&store, Some("OldPass1!"));
    let manager = CredentialManager::new(store.clone());

    let change = PasswordChange::new("short", "different").with_old_password("WrongPass1!");
    let error = manager.change_password(id, change).unwrap_err();

    let report = error.rejection().expect("should carry a report");
    assert_eq!(report.len(), 3);
    assert!(report.contains(&RejectionReason::complexity(&PasswordPolicy::default())));
    assert!(report.contains(&RejectionReason::ConfirmationMismatch));
    assert!(report.contains(&RejectionReason::IncorrectOldPassword));
    assert!(stored_password_verifies(&store, id, "OldPass1!"));
}

#[test]
fn test_noop_change_succeeds_without_modifying_anything() {
    let store = Arc::new(InMemoryAccountStore::new());
    let id = setup_account(&store, Some("OldPass1!"));
    let before = store.find(id).unwrap().unwrap();
    let manager = CredentialManager::new(store.clone());

    manager.change_password(id, PasswordChange::none()).unwrap();

    let after = store.find(id).unwrap().unwrap();
    assert_eq!(before.password_hash(), after.password_hash());
    assert_eq!(before.updated_at, after.updated_at);
}

#[test]
fn test_unknown_account_is_not_found() {
    let manager = CredentialManager::new(Arc::new(InMemoryAccountStore::new()));
    let result = manager.change_password(Uuid::new_v4(), PasswordChange::none());
    assert!(matches!(result, Err(CredentialError::AccountNotFound)));
}

#[test]
fn test_validate_change_previews_without_persisting() {
    let store = Arc::new(InMemoryAccountStore::new());
    let id = setup_account(&store, Some("OldPass1!"));
    let manager = CredentialManager::new(store.clone());

    let change = PasswordChange::new("NewPass2@", "NewPass2@").with_old_password("OldPass1!");
    let verdict = manager.validate_change(id, change).unwrap();

    assert!(matches!(
        verdict,
        CredentialVerdict::Accepted {
            hash_to_persist: Some(_)
        }
    ));
    // Preview only: the stored credential is still the old one.
    assert!(stored_password_verifies(&store, id, "OldPass1!"));
}
