use super::{prepare, query_authorized, query_rest};
use crate::{
	data::{Credentials, Registration, User, UserId},
	response::Error,
	session::AccessToken,
};
use reqwest::Method;
use serde::Deserialize;

/// Login and registration answer with the token itself, or an object wrapping it.
#[derive(Deserialize)]
#[serde(untagged)]
enum TokenResponse {
	Bare(AccessToken),
	Wrapped { token: AccessToken },
}
impl From<TokenResponse> for AccessToken {
	fn from(value: TokenResponse) -> Self {
		match value {
			TokenResponse::Bare(token) | TokenResponse::Wrapped { token } => token,
		}
	}
}

pub async fn register(registration: &Registration) -> Result<AccessToken, Error> {
	let request = prepare::<TokenResponse>(Method::POST, "/users/register", None).with_json(registration);
	Ok(request.send().await?.into())
}

pub async fn login(credentials: &Credentials) -> Result<AccessToken, Error> {
	let request = prepare::<TokenResponse>(Method::POST, "/users/login", None).with_json(credentials);
	Ok(request.send().await?.into())
}

pub async fn me() -> Result<User, Error> {
	query_authorized::<User>(Method::GET, "/users/me")?.send().await
}

pub async fn get(id: UserId) -> Result<User, Error> {
	query_rest::<User>(Method::GET, &format!("/users/{id}")).send().await
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn token_response_shapes() {
		let bare: AccessToken = serde_json::from_str::<TokenResponse>("\"t1\"").unwrap().into();
		let wrapped: AccessToken = serde_json::from_str::<TokenResponse>(r#"{"token":"t2"}"#).unwrap().into();
		assert_eq!(bare.as_str(), "t1");
		assert_eq!(wrapped.as_str(), "t2");
	}

	#[test]
	fn login_posts_credentials_without_token() {
		let credentials = Credentials { username: "ada".into(), password: "pw".into() };
		let request = prepare::<TokenResponse>(Method::POST, "/users/login", None).with_json(&credentials).build();
		assert!(request.url().path().ends_with("/users/login"));
		assert!(request.headers().get("authorization").is_none());
	}
}
