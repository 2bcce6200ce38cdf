//! Login form, remember-me and the logged-in session.
//!
//! Four keys live in the store: `savedEmail` / `savedPassword` hold the
//! remembered credentials, `userEmail` / `userName` the active session.
//! Logging out only drops the latter pair.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error;

use crate::storage::KeyValueStore;

pub const KEY_SAVED_EMAIL: &str = "savedEmail";
pub const KEY_SAVED_PASSWORD: &str = "savedPassword";
pub const KEY_USER_EMAIL: &str = "userEmail";
pub const KEY_USER_NAME: &str = "userName";

pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct User {
    pub email: String,
    pub name: String,
}

impl User {
    /// The display name is the local part of the address.
    pub fn from_email(email: &str) -> Self {
        let name = email.split('@').next().unwrap_or_default();
        Self {
            email: email.to_string(),
            name: name.to_string(),
        }
    }

    /// Avatar letter: first character of the name, uppercased.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Email é obrigatório")]
    EmailRequired,
    #[error("Email inválido")]
    InvalidEmail,
    #[error("Senha é obrigatória")]
    PasswordRequired,
    #[error("Senha deve ter no mínimo 6 caracteres")]
    PasswordTooShort,
}

/// Per-field validation outcome. Both fields are checked on every submit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginErrors {
    pub email: Option<FieldError>,
    pub password: Option<FieldError>,
}

impl LoginErrors {
    pub fn is_empty(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
    RememberMe,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
    pub focus: Field,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            remember_me: false,
            focus: Field::Email,
        }
    }
}

impl LoginForm {
    /// Prefill from remembered credentials. Both keys must be present.
    pub fn restore(store: &dyn KeyValueStore) -> Self {
        let mut form = Self::default();
        if let (Some(email), Some(password)) =
            (store.get(KEY_SAVED_EMAIL), store.get(KEY_SAVED_PASSWORD))
        {
            form.email = email;
            form.password = password;
            form.remember_me = true;
        }
        form
    }

    pub fn validate(&self) -> LoginErrors {
        let email = self.email.trim();
        let email_error = if email.is_empty() {
            Some(FieldError::EmailRequired)
        } else if !EMAIL_PATTERN.is_match(email) {
            Some(FieldError::InvalidEmail)
        } else {
            None
        };

        let password_error = if self.password.trim().is_empty() {
            Some(FieldError::PasswordRequired)
        } else if self.password.chars().count() < MIN_PASSWORD_LEN {
            Some(FieldError::PasswordTooShort)
        } else {
            None
        };

        LoginErrors {
            email: email_error,
            password: password_error,
        }
    }

    /// Typed character goes to the focused text field; Space on the
    /// checkbox toggles it. Returns whether the form changed.
    pub fn type_char(&mut self, c: char) -> bool {
        match self.focus {
            Field::Email => self.email.push(c),
            Field::Password => self.password.push(c),
            Field::RememberMe if c == ' ' => self.remember_me = !self.remember_me,
            Field::RememberMe => return false,
        }
        true
    }

    pub fn backspace(&mut self) -> bool {
        match self.focus {
            Field::Email => self.email.pop().is_some(),
            Field::Password => self.password.pop().is_some(),
            Field::RememberMe => false,
        }
    }

    pub fn next_field(&mut self) {
        self.focus = match self.focus {
            Field::Email => Field::Password,
            Field::Password => Field::RememberMe,
            Field::RememberMe => Field::Email,
        };
    }

    pub fn toggle_remember(&mut self) {
        self.remember_me = !self.remember_me;
    }
}

/// Validate and start a session. Nothing is written when validation fails.
pub fn login(store: &mut dyn KeyValueStore, form: &LoginForm) -> Result<User, LoginErrors> {
    let errors = form.validate();
    if !errors.is_empty() {
        return Err(errors);
    }

    let email = form.email.trim();
    if form.remember_me {
        store.set(KEY_SAVED_EMAIL, email);
        store.set(KEY_SAVED_PASSWORD, &form.password);
    } else {
        store.remove(KEY_SAVED_EMAIL);
        store.remove(KEY_SAVED_PASSWORD);
    }

    let user = User::from_email(email);
    store.set(KEY_USER_EMAIL, &user.email);
    store.set(KEY_USER_NAME, &user.name);
    log!("SkillUpPlus: logged in ({})", user.email);
    Ok(user)
}

pub fn restore_session(store: &dyn KeyValueStore) -> Option<User> {
    let email = store.get(KEY_USER_EMAIL)?;
    let name = store.get(KEY_USER_NAME)?;
    Some(User { email, name })
}

pub fn logout(store: &mut dyn KeyValueStore) {
    store.remove(KEY_USER_EMAIL);
    store.remove(KEY_USER_NAME);
    log!("SkillUpPlus: logged out");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn form(email: &str, password: &str, remember_me: bool) -> LoginForm {
        LoginForm {
            email: email.to_string(),
            password: password.to_string(),
            remember_me,
            ..LoginForm::default()
        }
    }

    // ── validate ───────────────────────────────────────────────

    #[test]
    fn empty_form_reports_both_fields() {
        let errors = LoginForm::default().validate();
        assert_eq!(errors.email, Some(FieldError::EmailRequired));
        assert_eq!(errors.password, Some(FieldError::PasswordRequired));
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let errors = form("   ", "      ", false).validate();
        assert_eq!(errors.email, Some(FieldError::EmailRequired));
        assert_eq!(errors.password, Some(FieldError::PasswordRequired));
    }

    #[test]
    fn email_shape() {
        for bad in ["ana", "ana@empresa", "@.", "ana @ x.com"] {
            assert_eq!(form(bad, "segredo", false).validate().email, Some(FieldError::InvalidEmail), "{bad}");
        }
        for good in ["ana@empresa.com", "a.b@c.d", "  ana@empresa.com.br "] {
            assert_eq!(form(good, "segredo", false).validate().email, None, "{good}");
        }
    }

    #[test]
    fn password_length_counts_characters() {
        assert_eq!(
            form("ana@x.com", "12345", false).validate().password,
            Some(FieldError::PasswordTooShort)
        );
        assert_eq!(form("ana@x.com", "123456", false).validate().password, None);
        // six characters, more than six bytes
        assert_eq!(form("ana@x.com", "çãéíõú", false).validate().password, None);
    }

    #[test]
    fn messages_are_portuguese() {
        assert_eq!(FieldError::EmailRequired.to_string(), "Email é obrigatório");
        assert_eq!(FieldError::InvalidEmail.to_string(), "Email inválido");
        assert_eq!(FieldError::PasswordRequired.to_string(), "Senha é obrigatória");
        assert_eq!(
            FieldError::PasswordTooShort.to_string(),
            "Senha deve ter no mínimo 6 caracteres"
        );
    }

    // ── login / remember-me ────────────────────────────────────

    #[test]
    fn login_with_remember_me_saves_credentials() {
        let mut store = MemoryStore::new();
        let user = login(&mut store, &form("maria.silva@empresa.com", "segredo1", true)).unwrap();

        assert_eq!(user.name, "maria.silva");
        assert_eq!(store.get(KEY_SAVED_EMAIL).as_deref(), Some("maria.silva@empresa.com"));
        assert_eq!(store.get(KEY_SAVED_PASSWORD).as_deref(), Some("segredo1"));
        assert_eq!(store.get(KEY_USER_EMAIL).as_deref(), Some("maria.silva@empresa.com"));
        assert_eq!(store.get(KEY_USER_NAME).as_deref(), Some("maria.silva"));
    }

    #[test]
    fn login_without_remember_me_clears_credentials() {
        let mut store = MemoryStore::new();
        store.set(KEY_SAVED_EMAIL, "old@x.com");
        store.set(KEY_SAVED_PASSWORD, "oldpass");

        login(&mut store, &form("ana@x.com", "segredo", false)).unwrap();

        assert_eq!(store.get(KEY_SAVED_EMAIL), None);
        assert_eq!(store.get(KEY_SAVED_PASSWORD), None);
        assert_eq!(store.get(KEY_USER_NAME).as_deref(), Some("ana"));
    }

    #[test]
    fn invalid_form_writes_nothing() {
        let mut store = MemoryStore::new();
        let err = login(&mut store, &form("ana", "123", true)).unwrap_err();
        assert_eq!(err.email, Some(FieldError::InvalidEmail));
        assert_eq!(err.password, Some(FieldError::PasswordTooShort));
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn restore_form_needs_both_keys() {
        let mut store = MemoryStore::new();
        store.set(KEY_SAVED_EMAIL, "ana@x.com");
        let f = LoginForm::restore(&store);
        assert!(f.email.is_empty());
        assert!(!f.remember_me);

        store.set(KEY_SAVED_PASSWORD, "segredo");
        let f = LoginForm::restore(&store);
        assert_eq!(f.email, "ana@x.com");
        assert_eq!(f.password, "segredo");
        assert!(f.remember_me);
    }

    #[test]
    fn logout_keeps_remembered_credentials() {
        let mut store = MemoryStore::new();
        login(&mut store, &form("ana@x.com", "segredo", true)).unwrap();
        assert!(restore_session(&store).is_some());

        logout(&mut store);

        assert_eq!(restore_session(&store), None);
        assert_eq!(store.get(KEY_SAVED_EMAIL).as_deref(), Some("ana@x.com"));
        let f = LoginForm::restore(&store);
        assert!(f.remember_me);
        assert_eq!(f.password, "segredo");
    }

    #[test]
    fn restore_session_needs_both_keys() {
        let mut store = MemoryStore::new();
        store.set(KEY_USER_EMAIL, "ana@x.com");
        assert_eq!(restore_session(&store), None);
        store.set(KEY_USER_NAME, "ana");
        assert_eq!(
            restore_session(&store),
            Some(User { email: "ana@x.com".into(), name: "ana".into() })
        );
    }

    // ── form editing ───────────────────────────────────────────

    #[test]
    fn typing_goes_to_focused_field() {
        let mut f = LoginForm::default();
        for c in "a@b.co".chars() {
            f.type_char(c);
        }
        f.next_field();
        f.type_char('x');
        assert_eq!(f.email, "a@b.co");
        assert_eq!(f.password, "x");

        f.next_field();
        assert!(!f.type_char('q'));
        assert!(f.type_char(' '));
        assert!(f.remember_me);

        f.next_field();
        assert_eq!(f.focus, Field::Email);
        assert!(f.backspace());
        assert_eq!(f.email, "a@b.c");
    }

    #[test]
    fn user_initial_is_uppercased() {
        assert_eq!(User::from_email("maria@x.com").initial(), "M");
        assert_eq!(User::from_email("élise@x.com").initial(), "É");
        assert_eq!(User::from_email("@x.com").initial(), "");
    }
}
