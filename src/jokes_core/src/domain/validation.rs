//! Field validators shared by the login and joke forms.
//!
//! Each validator returns the message to show next to the field, or `None`
//! when the value is acceptable. Lengths are counted in characters, not bytes.

pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MIN_JOKE_NAME_LENGTH: usize = 3;
pub const MIN_JOKE_CONTENT_LENGTH: usize = 10;

pub fn validate_username(username: &str) -> Option<&'static str> {
    if username.chars().count() < MIN_USERNAME_LENGTH {
        return Some("Usernames must be at least 3 characters long");
    }
    None
}

pub fn validate_password(password: &str) -> Option<&'static str> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Some("Passwords must be at least 6 characters long");
    }
    None
}

pub fn validate_joke_name(name: &str) -> Option<&'static str> {
    if name.chars().count() < MIN_JOKE_NAME_LENGTH {
        return Some("That joke's name is too short");
    }
    None
}

pub fn validate_joke_content(content: &str) -> Option<&'static str> {
    if content.chars().count() < MIN_JOKE_CONTENT_LENGTH {
        return Some("That joke is too short");
    }
    None
}
