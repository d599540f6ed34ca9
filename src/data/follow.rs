use super::{User, UserId};
use serde::Serialize;

/// Body of a follow request; the follower is whoever holds the token.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewFollow {
	pub user_id: UserId,
}

pub fn is_following(following: &[User], user_id: UserId) -> bool {
	following.iter().any(|user| user.id == user_id)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn follow_body() {
		assert_eq!(serde_json::to_value(NewFollow { user_id: 2 }).unwrap(), serde_json::json!({"userId": 2}));
	}

	#[test]
	fn following_lookup() {
		let following = vec![User { id: 2, username: "bo".into(), ..Default::default() }];
		assert!(is_following(&following, 2));
		assert!(!is_following(&following, 3));
	}
}
