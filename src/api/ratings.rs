use super::query_authorized;
use crate::{
	data::{MovieId, NewRating, RatedMovie, RatingChange, RatingId, Verdict},
	response::Error,
};
use reqwest::Method;

/// Movies the current user has rated.
pub async fn list() -> Result<Vec<RatedMovie>, Error> {
	query_authorized::<Vec<RatedMovie>>(Method::GET, "/ratings")?.send().await
}

pub async fn rate(movie_id: MovieId, rating: Verdict) -> Result<(), Error> {
	let request = query_authorized::<()>(Method::POST, "/ratings")?;
	request.with_json(&NewRating { movie_id, rating }).send_discarding().await
}

pub async fn unrate(rating_id: RatingId) -> Result<(), Error> {
	query_authorized::<()>(Method::DELETE, &format!("/ratings/{rating_id}"))?
		.send_discarding()
		.await
}

pub async fn apply(movie_id: MovieId, change: RatingChange) -> Result<(), Error> {
	log::debug!(target: "ratings", "movie {movie_id}: {change:?}");
	match change {
		RatingChange::Keep => Ok(()),
		RatingChange::Clear(rating_id) => unrate(rating_id).await,
		RatingChange::Set(verdict) => rate(movie_id, verdict).await,
	}
}
