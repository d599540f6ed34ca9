use super::{query_authorized, ratings};
use crate::{
	data::{MovieId, NewWatchlistEntry, RatingChange, WatchlistEntry},
	response::Error,
};
use reqwest::Method;
use std::future::Future;

pub async fn list() -> Result<Vec<WatchlistEntry>, Error> {
	query_authorized::<Vec<WatchlistEntry>>(Method::GET, "/watchlist")?.send().await
}

pub async fn add(movie_id: MovieId) -> Result<(), Error> {
	let request = query_authorized::<()>(Method::POST, "/watchlist")?;
	request.with_json(&NewWatchlistEntry { movie_id }).send_discarding().await?;
	log::debug!(target: "watchlist", "added movie {movie_id}");
	Ok(())
}

pub async fn remove(movie_id: MovieId) -> Result<(), Error> {
	query_authorized::<()>(Method::DELETE, &format!("/watchlist/{movie_id}"))?
		.send_discarding()
		.await?;
	log::debug!(target: "watchlist", "removed movie {movie_id}");
	Ok(())
}

/// Which half of a rate-then-remove went wrong.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum RemovalError {
	/// Nothing changed on the server.
	#[error(transparent)]
	Rating(Error),
	/// The rating change went through but the entry is still listed.
	#[error(transparent)]
	Removal(Error),
}

impl RemovalError {
	pub fn rating_applied(&self) -> bool {
		matches!(self, Self::Removal(_))
	}
}

impl From<RemovalError> for Error {
	fn from(value: RemovalError) -> Self {
		match value {
			RemovalError::Rating(err) | RemovalError::Removal(err) => err,
		}
	}
}

/// Settle the rating first, then drop the entry from the watchlist.
pub async fn remove_rated(movie_id: MovieId, change: RatingChange) -> Result<(), RemovalError> {
	rate_then_remove(ratings::apply(movie_id, change), || remove(movie_id)).await
}

/// A failed rating step skips the removal entirely.
pub(crate) async fn rate_then_remove<R, D, DF>(rating: R, removal: D) -> Result<(), RemovalError>
where
	R: Future<Output = Result<(), Error>>,
	D: FnOnce() -> DF,
	DF: Future<Output = Result<(), Error>>,
{
	rating.await.map_err(RemovalError::Rating)?;
	removal().await.map_err(RemovalError::Removal)
}

#[cfg(test)]
mod tests {
	use super::*;
	use futures_util::{future::ready, FutureExt};
	use std::cell::Cell;

	fn server_error() -> Error {
		Error::Status { status: 500, message: "boom".into() }
	}

	#[test]
	fn rating_then_removal() {
		let removed = Cell::new(false);
		let result = rate_then_remove(ready(Ok(())), || {
			removed.set(true);
			ready(Ok(()))
		})
		.now_or_never()
		.unwrap();
		assert_eq!(result, Ok(()));
		assert!(removed.get());
	}

	#[test]
	fn rating_failure_skips_removal() {
		let removed = Cell::new(false);
		let result = rate_then_remove(ready(Err(server_error())), || {
			removed.set(true);
			ready(Ok(()))
		})
		.now_or_never()
		.unwrap();
		assert_eq!(result, Err(RemovalError::Rating(server_error())));
		assert!(!result.unwrap_err().rating_applied());
		assert!(!removed.get());
	}

	#[test]
	fn removal_failure_reports_rating_applied() {
		let result = rate_then_remove(ready(Ok(())), || ready(Err(server_error()))).now_or_never().unwrap();
		let err = result.unwrap_err();
		assert!(err.rating_applied());
		assert_eq!(Error::from(err), server_error());
	}
}
