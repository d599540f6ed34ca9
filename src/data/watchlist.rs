use super::{Movie, MovieId, RatingId, Verdict};
use serde::{Deserialize, Serialize};

/// A movie on the current user's watchlist, with their rating if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchlistEntry {
	#[serde(flatten)]
	pub movie: Movie,
	#[serde(default)]
	pub rating: Option<Verdict>,
	#[serde(default)]
	pub rating_id: Option<RatingId>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewWatchlistEntry {
	pub movie_id: MovieId,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn entry_without_rating() {
		let entry: WatchlistEntry = serde_json::from_str(r#"{"id":1,"title":"Alien","movie_poster":"a.jpg"}"#).unwrap();
		assert_eq!(entry.movie.id, 1);
		assert_eq!(entry.rating, None);
		assert_eq!(entry.rating_id, None);
	}

	#[test]
	fn entry_with_rating() {
		let entry: WatchlistEntry =
			serde_json::from_str(r#"{"id":1,"title":"Alien","rating":false,"rating_id":30}"#).unwrap();
		assert_eq!(entry.rating, Some(Verdict::Dislike));
		assert_eq!(entry.rating_id, Some(30));
	}

	#[test]
	fn new_entry_body() {
		let body = serde_json::to_value(NewWatchlistEntry { movie_id: 4 }).unwrap();
		assert_eq!(body, serde_json::json!({"movieId": 4}));
	}
}
