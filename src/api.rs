use crate::{
	response::{Error, Response},
	session::{AccessToken, SessionValue},
};
use reqwest::Method;
use serde::de::DeserializeOwned;

pub mod followers;
pub mod movies;
pub mod ratings;
pub mod reviews;
pub mod users;
pub mod watchlist;

pub fn endpoint_url(endpoint: &str) -> String {
	format!("{}{endpoint}", crate::config::API_BASE_URL.trim_end_matches('/'))
}

pub fn prepare<T>(method: Method, endpoint: &str, token: Option<&AccessToken>) -> Response<T>
where
	T: DeserializeOwned,
{
	let mut builder = reqwest::Client::new().request(method, endpoint_url(endpoint));
	builder = builder.header("Accept", "application/json");
	if let Some(token) = token {
		builder = builder.header("Authorization", format!("Bearer {}", token.as_str()));
	}
	Response::<T>::from(builder)
}

/// A request carrying the session token when one is stored.
pub fn query_rest<T>(method: Method, endpoint: &str) -> Response<T>
where
	T: DeserializeOwned,
{
	prepare(method, endpoint, AccessToken::load().as_ref())
}

/// A request that needs the session token; fails before sending when logged out.
pub fn query_authorized<T>(method: Method, endpoint: &str) -> Result<Response<T>, Error>
where
	T: DeserializeOwned,
{
	let Some(token) = AccessToken::load() else {
		return Err(Error::Unauthenticated);
	};
	Ok(prepare(method, endpoint, Some(&token)))
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn url_joins_base() {
		let url = endpoint_url("/movies/3");
		assert!(url.ends_with("/movies/3"));
		assert!(!url.contains("//movies"));
	}

	#[test]
	fn token_becomes_bearer_header() {
		let token = AccessToken::from("abc".to_owned());
		let request = prepare::<()>(Method::DELETE, "/watchlist/2", Some(&token)).build();
		assert_eq!(request.method(), &Method::DELETE);
		assert_eq!(request.url().as_str(), endpoint_url("/watchlist/2"));
		assert_eq!(request.headers()["authorization"], "Bearer abc");
		assert_eq!(request.headers()["accept"], "application/json");
	}

	#[test]
	fn anonymous_request_has_no_auth() {
		let request = prepare::<()>(Method::GET, "/movies", None).build();
		assert!(request.headers().get("authorization").is_none());
	}

	#[test]
	fn json_body_is_attached() {
		let body = crate::data::NewWatchlistEntry { movie_id: 4 };
		let request = prepare::<()>(Method::POST, "/watchlist", None).with_json(&body).build();
		assert_eq!(request.headers()["content-type"], "application/json");
		let bytes = request.body().and_then(|body| body.as_bytes()).unwrap();
		assert_eq!(bytes, br#"{"movieId":4}"#);
	}
}
