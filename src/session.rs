use gloo_storage::{SessionStorage, Storage};
use serde::{Deserialize, Serialize};

/// A value persisted in the browser's session storage under a fixed key.
pub trait SessionValue {
	fn id() -> &'static str;

	fn load() -> Option<Self>
	where
		Self: for<'de> Deserialize<'de>,
	{
		SessionStorage::get::<Self>(Self::id()).ok()
	}

	fn apply_to_session(self)
	where
		Self: Sized + Serialize,
	{
		if let Err(err) = SessionStorage::set(Self::id(), self) {
			log::error!(target: "session", "failed to store {:?}: {err:?}", Self::id());
		}
	}

	fn delete() {
		SessionStorage::delete(Self::id());
	}
}

/// Opaque token the API hands out on login/registration.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccessToken(String);

impl From<String> for AccessToken {
	fn from(value: String) -> Self {
		Self(value)
	}
}

impl AccessToken {
	pub fn as_str(&self) -> &str {
		&self.0
	}
}

// Keep the secret out of logs.
impl std::fmt::Debug for AccessToken {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "AccessToken(..{} chars)", self.0.len())
	}
}

impl SessionValue for AccessToken {
	fn id() -> &'static str {
		"token"
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn token_is_a_bare_json_string() {
		let token: AccessToken = serde_json::from_str("\"abc.def\"").unwrap();
		assert_eq!(token.as_str(), "abc.def");
		assert_eq!(serde_json::to_string(&token).unwrap(), "\"abc.def\"");
	}

	#[test]
	fn debug_hides_token() {
		let token = AccessToken::from("secret".to_owned());
		assert_eq!(format!("{token:?}"), "AccessToken(..6 chars)");
	}
}
