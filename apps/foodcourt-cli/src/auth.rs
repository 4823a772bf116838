//! # Authentication
//!
//! The role menu shown at the start of a session.
//!
//! ```text
//! 1. Admin Login     username + password checked against [admin] settings
//! 2. Customer Login  name + phone, validated, then registered or recognized
//! ```

use std::io::{BufRead, Write};

use tracing::{info, warn};

use foodcourt_core::validation::{validate_customer_name, validate_phone};
use foodcourt_core::{CoreError, Customer};

use crate::config::AdminSettings;
use crate::error::{AppError, AppResult};
use crate::prompt::Prompter;
use crate::state::FoodCourtManager;

/// Who is at the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    Admin,
    Customer(Customer),
}

/// Runs one pass of the login menu.
///
/// ## Errors
/// - `InvalidChoice` for anything but 1 or 2
/// - `AuthenticationFailure` for wrong admin credentials
/// - `Core(Validation)` for an empty name or a malformed phone
pub fn authenticate<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    admin: &AdminSettings,
    manager: &mut FoodCourtManager<'_>,
) -> AppResult<Role> {
    prompter.say("\n======== Food Court Login ========")?;
    prompter.say("1. Admin Login")?;
    prompter.say("2. Customer Login")?;

    match prompter.ask_number("Enter your choice: ", "1 or 2")? {
        1 => {
            let username = prompter.ask("Enter admin username: ")?;
            let password = prompter.ask("Enter admin password: ")?;

            if !admin.matches(&username, &password) {
                warn!(username = %username, "Admin login rejected");
                return Err(AppError::AuthenticationFailure);
            }

            manager.log().record("Admin logged in");
            Ok(Role::Admin)
        }
        2 => {
            let name = prompter.ask("Enter your name: ")?;
            let name = validate_customer_name(&name).map_err(CoreError::from)?;
            let phone = prompter.ask("Enter your phone number: ")?;
            let phone = validate_phone(&phone).map_err(CoreError::from)?;

            let registration = manager.register_customer(&name, &phone)?;
            let customer = registration.customer().clone();

            if registration.is_new() {
                prompter.say(format!("Welcome, {}!", customer.name))?;
            } else {
                prompter.say(format!("Welcome back, {}!", customer.name))?;
            }
            info!(phone = %customer.phone, new = registration.is_new(), "Customer logged in");
            Ok(Role::Customer(customer))
        }
        other => Err(AppError::invalid_choice(other.to_string(), "1 or 2")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foodcourt_store::{FoodCourtStore, StoreConfig};
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_admin_login() {
        let dir = tempfile::tempdir().unwrap();
        let store = FoodCourtStore::open(StoreConfig::new(dir.path())).unwrap();
        let log = store.event_log();
        let mut manager = FoodCourtManager::load(store, &log);
        let admin = AdminSettings::default();

        let mut p = prompter("1\nadmin\nadmin@12345\n");
        assert_eq!(authenticate(&mut p, &admin, &mut manager).unwrap(), Role::Admin);

        let mut p = prompter("1\nadmin\nwrong\n");
        assert!(matches!(
            authenticate(&mut p, &admin, &mut manager),
            Err(AppError::AuthenticationFailure)
        ));
    }

    #[test]
    fn test_customer_login_validates_input() {
        let dir = tempfile::tempdir().unwrap();
        let store = FoodCourtStore::open(StoreConfig::new(dir.path())).unwrap();
        let log = store.event_log();
        let mut manager = FoodCourtManager::load(store, &log);
        let admin = AdminSettings::default();

        let mut p = prompter("2\nAsha\nnot a phone\n");
        let err = authenticate(&mut p, &admin, &mut manager).unwrap_err();
        assert!(err.is_recoverable());
        assert_eq!(manager.customers().len(), 0);

        let mut p = prompter("2\n Asha \n98765\n");
        match authenticate(&mut p, &admin, &mut manager).unwrap() {
            Role::Customer(c) => {
                assert_eq!(c.name, "Asha");
                assert_eq!(c.id, Some(1));
            }
            Role::Admin => panic!("expected a customer"),
        }
    }

    #[test]
    fn test_unknown_role_is_invalid_choice() {
        let dir = tempfile::tempdir().unwrap();
        let store = FoodCourtStore::open(StoreConfig::new(dir.path())).unwrap();
        let log = store.event_log();
        let mut manager = FoodCourtManager::load(store, &log);

        let mut p = prompter("3\n");
        assert!(matches!(
            authenticate(&mut p, &AdminSettings::default(), &mut manager),
            Err(AppError::InvalidChoice { .. })
        ));
    }
}
