use super::{Movie, MovieId};
use serde::{Deserialize, Serialize};

pub type RatingId = i64;

/// Like or dislike; the API carries it as a boolean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "bool", into = "bool")]
pub enum Verdict {
	Like,
	Dislike,
}

impl From<bool> for Verdict {
	fn from(value: bool) -> Self {
		match value {
			true => Self::Like,
			false => Self::Dislike,
		}
	}
}

impl From<Verdict> for bool {
	fn from(value: Verdict) -> Self {
		value == Verdict::Like
	}
}

impl Verdict {
	pub fn icon(&self) -> &'static str {
		match self {
			Self::Like => "👍",
			Self::Dislike => "👎",
		}
	}

	pub fn label(&self) -> &'static str {
		match self {
			Self::Like => "Thumbs Up",
			Self::Dislike => "Thumbs Down",
		}
	}
}

/// A movie the current user has rated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatedMovie {
	#[serde(flatten)]
	pub movie: Movie,
	pub rating: Verdict,
	#[serde(default)]
	pub rating_id: Option<RatingId>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRating {
	pub movie_id: MovieId,
	pub rating: Verdict,
}

/// What to send to the ratings endpoint when the user settles on `selected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RatingChange {
	Keep,
	Clear(RatingId),
	Set(Verdict),
}

impl RatingChange {
	/// Choosing the verdict already on record clears it; anything else replaces it.
	pub fn resolve(current: Option<Verdict>, rating_id: Option<RatingId>, selected: Option<Verdict>) -> Self {
		match (selected, current == selected, rating_id) {
			(None, _, _) => Self::Keep,
			(Some(_), true, Some(id)) => Self::Clear(id),
			(Some(_), true, None) => Self::Keep,
			(Some(verdict), false, _) => Self::Set(verdict),
		}
	}
}

/// Clicking the selected thumb deselects it.
pub fn toggle_verdict(selected: Option<Verdict>, clicked: Verdict) -> Option<Verdict> {
	match selected == Some(clicked) {
		true => None,
		false => Some(clicked),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn verdict_is_boolean_on_the_wire() {
		let body = NewRating { movie_id: 9, rating: Verdict::Dislike };
		assert_eq!(serde_json::to_value(&body).unwrap(), serde_json::json!({"movieId": 9, "rating": false}));
		let verdict: Verdict = serde_json::from_str("true").unwrap();
		assert_eq!(verdict, Verdict::Like);
	}

	#[test]
	fn rated_movie_flattens_movie() {
		let rated: RatedMovie = serde_json::from_str(r#"{"id":9,"title":"Heat","genres":["Crime"],"rating":true,"rating_id":12}"#).unwrap();
		assert_eq!(rated.movie.title, "Heat");
		assert_eq!(rated.rating_id, Some(12));
	}

	#[test]
	fn same_verdict_clears() {
		let change = RatingChange::resolve(Some(Verdict::Like), Some(5), Some(Verdict::Like));
		assert_eq!(change, RatingChange::Clear(5));
	}

	#[test]
	fn other_verdict_replaces() {
		assert_eq!(
			RatingChange::resolve(Some(Verdict::Like), Some(5), Some(Verdict::Dislike)),
			RatingChange::Set(Verdict::Dislike)
		);
		assert_eq!(RatingChange::resolve(None, None, Some(Verdict::Like)), RatingChange::Set(Verdict::Like));
	}

	#[test]
	fn nothing_selected_keeps() {
		assert_eq!(RatingChange::resolve(Some(Verdict::Like), Some(5), None), RatingChange::Keep);
		assert_eq!(RatingChange::resolve(Some(Verdict::Like), None, Some(Verdict::Like)), RatingChange::Keep);
	}

	#[test]
	fn thumbs_toggle() {
		assert_eq!(toggle_verdict(None, Verdict::Like), Some(Verdict::Like));
		assert_eq!(toggle_verdict(Some(Verdict::Like), Verdict::Like), None);
		assert_eq!(toggle_verdict(Some(Verdict::Like), Verdict::Dislike), Some(Verdict::Dislike));
	}
}
