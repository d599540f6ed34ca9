use crate::config::{GENRES, MAX_FAVORITE_GENRES, MIN_PASSWORD_LEN};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub type UserId = i64;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct User {
	pub id: UserId,
	#[serde(default)]
	pub first_name: String,
	#[serde(default)]
	pub last_name: String,
	pub username: String,
	#[serde(default)]
	pub email: Option<String>,
	#[serde(default)]
	pub bio: Option<String>,
	#[serde(default)]
	pub profile_image_url: Option<String>,
	#[serde(default)]
	pub favorite_genres: FavoriteGenres,
}

impl User {
	pub fn display_name(&self) -> String {
		let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
		match full.trim() {
			"" => self.username.clone(),
			name => name.to_owned(),
		}
	}
}

/// At most [`MAX_FAVORITE_GENRES`] distinct genres.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteGenres(Vec<String>);

impl FavoriteGenres {
	pub fn contains(&self, genre: &str) -> bool {
		self.0.iter().any(|own| own.eq_ignore_ascii_case(genre))
	}

	pub fn is_full(&self) -> bool {
		self.0.len() >= MAX_FAVORITE_GENRES
	}

	/// Add or remove `genre`. Returns false when adding would exceed the limit.
	pub fn toggle(&mut self, genre: &str) -> bool {
		if let Some(idx) = self.0.iter().position(|own| own.eq_ignore_ascii_case(genre)) {
			self.0.remove(idx);
			return true;
		}
		if self.is_full() {
			return false;
		}
		self.0.push(genre.to_owned());
		true
	}

	pub fn iter(&self) -> impl Iterator<Item = &String> {
		self.0.iter()
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Credentials {
	pub username: String,
	pub password: String,
}

impl Credentials {
	pub fn validate(&self) -> Result<(), ValidationError> {
		require("Username", &self.username)?;
		require("Password", &self.password)?;
		Ok(())
	}
}

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
	pub first_name: String,
	pub last_name: String,
	pub email: String,
	pub username: String,
	pub password: String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub bio: Option<String>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub profile_image_url: Option<String>,
	pub favorite_genres: FavoriteGenres,
}

lazy_static! {
	static ref EMAIL: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
}

impl Registration {
	pub fn validate(&self) -> Result<(), ValidationError> {
		require("First name", &self.first_name)?;
		require("Last name", &self.last_name)?;
		require("Email", &self.email)?;
		require("Username", &self.username)?;
		require("Password", &self.password)?;
		if !EMAIL.is_match(self.email.trim()) {
			return Err(ValidationError::InvalidEmail);
		}
		if self.password.chars().count() < MIN_PASSWORD_LEN {
			return Err(ValidationError::PasswordTooShort);
		}
		if let Some(image_url) = &self.profile_image_url {
			match url::Url::parse(image_url.trim()) {
				Ok(url) if matches!(url.scheme(), "http" | "https") => {}
				_ => return Err(ValidationError::InvalidImageUrl),
			}
		}
		if self.favorite_genres.len() > MAX_FAVORITE_GENRES {
			return Err(ValidationError::TooManyGenres);
		}
		if let Some(genre) = self.favorite_genres.iter().find(|genre| !GENRES.contains(&genre.as_str())) {
			return Err(ValidationError::UnknownGenre(genre.clone()));
		}
		Ok(())
	}
}

/// Optional free-text fields are sent only when they hold something.
pub fn optional_text(value: &str) -> Option<String> {
	match value.trim() {
		"" => None,
		trimmed => Some(trimmed.to_owned()),
	}
}

pub(crate) fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
	match value.trim().is_empty() {
		true => Err(ValidationError::Required(field)),
		false => Ok(()),
	}
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
	#[error("{0} is required.")]
	Required(&'static str),
	#[error("Enter a valid email address.")]
	InvalidEmail,
	#[error("Password must be at least {} characters.", MIN_PASSWORD_LEN)]
	PasswordTooShort,
	#[error("Profile image must be an http(s) URL.")]
	InvalidImageUrl,
	#[error("Pick at most {} favorite genres.", MAX_FAVORITE_GENRES)]
	TooManyGenres,
	#[error("Unknown genre {0:?}.")]
	UnknownGenre(String),
	#[error("Reviews are limited to {0} characters.")]
	TooLong(usize),
}

#[cfg(test)]
mod tests {
	use super::*;

	fn registration() -> Registration {
		Registration {
			first_name: "Ada".into(),
			last_name: "Lovelace".into(),
			email: "ada@example.com".into(),
			username: "ada".into(),
			password: "analytical".into(),
			..Default::default()
		}
	}

	#[test]
	fn user_from_api() {
		let user: User = serde_json::from_str(
			r#"{"id":4,"first_name":"Ada","last_name":"Lovelace","username":"ada","bio":null,"favorite_genres":["Drama"]}"#,
		)
		.unwrap();
		assert_eq!(user.display_name(), "Ada Lovelace");
		assert!(user.favorite_genres.contains("drama"));
		assert_eq!(user.bio, None);
	}

	#[test]
	fn display_name_falls_back_to_username() {
		let user = User { username: "ghost".into(), ..Default::default() };
		assert_eq!(user.display_name(), "ghost");
	}

	#[test]
	fn favorite_genres_capped() {
		let mut genres = FavoriteGenres::default();
		assert!(genres.toggle("Drama"));
		assert!(genres.toggle("Comedy"));
		assert!(genres.toggle("Horror"));
		assert!(genres.is_full());
		assert!(!genres.toggle("Western"));
		assert_eq!(genres.len(), 3);
		assert!(genres.toggle("comedy"));
		assert!(!genres.contains("Comedy"));
		assert!(genres.toggle("Western"));
	}

	#[test]
	fn registration_body_is_camel_case() {
		let mut form = registration();
		form.profile_image_url = Some("https://img.example/ada.png".into());
		let json = serde_json::to_value(&form).unwrap();
		assert_eq!(json["firstName"], "Ada");
		assert_eq!(json["profileImageUrl"], "https://img.example/ada.png");
		assert!(json.get("bio").is_none());
		assert_eq!(json["favoriteGenres"], serde_json::json!([]));
	}

	#[test]
	fn registration_validation() {
		assert_eq!(registration().validate(), Ok(()));

		let mut form = registration();
		form.last_name = "  ".into();
		assert_eq!(form.validate(), Err(ValidationError::Required("Last name")));

		let mut form = registration();
		form.email = "ada.example.com".into();
		assert_eq!(form.validate(), Err(ValidationError::InvalidEmail));

		let mut form = registration();
		form.password = "short".into();
		assert_eq!(form.validate(), Err(ValidationError::PasswordTooShort));

		let mut form = registration();
		form.profile_image_url = Some("ftp://img.example/ada.png".into());
		assert_eq!(form.validate(), Err(ValidationError::InvalidImageUrl));

		let mut form = registration();
		form.favorite_genres.toggle("Polka");
		assert_eq!(form.validate(), Err(ValidationError::UnknownGenre("Polka".into())));
	}

	#[test]
	fn credentials_require_both_fields() {
		let credentials = Credentials { username: "ada".into(), password: String::new() };
		assert_eq!(credentials.validate(), Err(ValidationError::Required("Password")));
		assert_eq!(ValidationError::Required("Password").to_string(), "Password is required.");
	}

	#[test]
	fn optional_text_trims() {
		assert_eq!(optional_text("  "), None);
		assert_eq!(optional_text(" hi "), Some("hi".into()));
	}
}
