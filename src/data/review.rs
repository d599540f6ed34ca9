use super::{require, MovieId, UserId, ValidationError};
use crate::config::MAX_REVIEW_LEN;
use serde::{Deserialize, Serialize};

pub type ReviewId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
	pub id: ReviewId,
	pub movie_id: MovieId,
	pub user_id: UserId,
	#[serde(default)]
	pub username: Option<String>,
	#[serde(default)]
	pub title: Option<String>,
	pub content: String,
	#[serde(default)]
	pub created_at: Option<String>,
}

impl Review {
	pub fn author(&self) -> String {
		match &self.username {
			Some(username) => username.clone(),
			None => format!("User #{}", self.user_id),
		}
	}

	/// Calendar date portion of the timestamp.
	pub fn posted_on(&self) -> Option<&str> {
		let created_at = self.created_at.as_deref()?;
		Some(created_at.split('T').next().unwrap_or(created_at))
	}
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewReview {
	pub movie_id: MovieId,
	pub content: String,
}

impl NewReview {
	pub fn validate(&self) -> Result<(), ValidationError> {
		require("Review", &self.content)?;
		if self.content.chars().count() > MAX_REVIEW_LEN {
			return Err(ValidationError::TooLong(MAX_REVIEW_LEN));
		}
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn review_from_api() {
		let review: Review = serde_json::from_str(
			r#"{"id":1,"movie_id":3,"user_id":8,"username":"ada","content":"Loved it","created_at":"2024-05-01T10:00:00Z"}"#,
		)
		.unwrap();
		assert_eq!(review.author(), "ada");
		assert_eq!(review.posted_on(), Some("2024-05-01"));
	}

	#[test]
	fn anonymous_author() {
		let review: Review = serde_json::from_str(r#"{"id":1,"movie_id":3,"user_id":8,"content":"Meh"}"#).unwrap();
		assert_eq!(review.author(), "User #8");
		assert_eq!(review.posted_on(), None);
	}

	#[test]
	fn review_validation() {
		let blank = NewReview { movie_id: 1, content: " \n".into() };
		assert_eq!(blank.validate(), Err(ValidationError::Required("Review")));
		let long = NewReview { movie_id: 1, content: "a".repeat(MAX_REVIEW_LEN + 1) };
		assert_eq!(long.validate(), Err(ValidationError::TooLong(MAX_REVIEW_LEN)));
		let fine = NewReview { movie_id: 1, content: "Great pacing.".into() };
		assert_eq!(fine.validate(), Ok(()));
		assert_eq!(serde_json::to_value(&fine).unwrap()["movieId"], 1);
	}
}
