use super::{query_authorized, query_rest};
use crate::{
	data::{MovieId, NewReview, Review, ReviewId, UserId},
	response::Error,
};
use reqwest::Method;

pub async fn for_movie(movie_id: MovieId) -> Result<Vec<Review>, Error> {
	query_rest::<Vec<Review>>(Method::GET, &format!("/reviews/movies/{movie_id}")).send().await
}

pub async fn by_user(user_id: UserId) -> Result<Vec<Review>, Error> {
	query_rest::<Vec<Review>>(Method::GET, &format!("/reviews/users/{user_id}")).send().await
}

pub async fn create(review: &NewReview) -> Result<(), Error> {
	query_authorized::<()>(Method::POST, "/reviews")?
		.with_json(review)
		.send_discarding()
		.await
}

pub async fn delete(review_id: ReviewId) -> Result<(), Error> {
	query_authorized::<()>(Method::DELETE, &format!("/reviews/{review_id}"))?
		.send_discarding()
		.await
}
