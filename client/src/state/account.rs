//! Sign-in and sign-up form validation.

#[cfg(test)]
#[path = "account_test.rs"]
mod account_test;

use crate::net::types::{Credentials, Registration, UserType};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginForm {
    pub user_type: UserType,
    pub email: String,
    pub password: String,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self { user_type: UserType::Customer, email: String::new(), password: String::new() }
    }
}

impl LoginForm {
    /// # Errors
    ///
    /// Returns the message to show when a field is missing.
    pub fn to_credentials(&self) -> Result<Credentials, &'static str> {
        let email = self.email.trim();
        if email.is_empty() || self.password.is_empty() {
            return Err("Enter your email and password.");
        }
        Ok(Credentials { email: email.to_owned(), password: self.password.clone() })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterForm {
    pub user_type: UserType,
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
    pub address: String,
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self {
            user_type: UserType::Customer,
            name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            phone: String::new(),
            address: String::new(),
        }
    }
}

impl RegisterForm {
    /// # Errors
    ///
    /// Returns the message to show for the first invalid field.
    pub fn to_registration(&self) -> Result<Registration, &'static str> {
        let name = self.name.trim();
        let email = self.email.trim();
        if name.is_empty() || email.is_empty() {
            return Err("Name and email are required.");
        }
        if !email.contains('@') {
            return Err("Enter a valid email address.");
        }
        if self.password.len() < 6 {
            return Err("Password must be at least 6 characters.");
        }
        if self.password != self.confirm_password {
            return Err("Passwords do not match.");
        }
        Ok(Registration {
            name: name.to_owned(),
            email: email.to_owned(),
            password: self.password.clone(),
            phone: non_blank(&self.phone),
            address: non_blank(&self.address),
        })
    }
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
