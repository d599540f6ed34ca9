use super::query_rest;
use crate::{
	data::{Movie, MovieId},
	response::Error,
};
use reqwest::Method;

pub async fn list() -> Result<Vec<Movie>, Error> {
	query_rest::<Vec<Movie>>(Method::GET, "/movies").send().await
}

pub async fn get(id: MovieId) -> Result<Movie, Error> {
	query_rest::<Movie>(Method::GET, &format!("/movies/{id}")).send().await
}
