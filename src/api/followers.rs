use super::query_authorized;
use crate::{
	data::{NewFollow, User, UserId},
	response::Error,
};
use reqwest::Method;

/// Users the current user follows.
pub async fn following() -> Result<Vec<User>, Error> {
	query_authorized::<Vec<User>>(Method::GET, "/followers")?.send().await
}

pub async fn follow(user_id: UserId) -> Result<(), Error> {
	query_authorized::<()>(Method::POST, "/followers")?
		.with_json(&NewFollow { user_id })
		.send_discarding()
		.await
}

pub async fn unfollow(user_id: UserId) -> Result<(), Error> {
	query_authorized::<()>(Method::DELETE, &format!("/followers/{user_id}"))?
		.send_discarding()
		.await
}
