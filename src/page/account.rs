use crate::{
	api,
	components::{action_error, stale_error, user::UserCard, ErrorText, Loading},
	data::{FavoriteGenres, Movie, MovieId, RatedMovie, User, WatchlistEntry},
	hooks::{use_action, use_query, QueryStatus},
	page::{MovieRow, Watchlist},
	Route,
};
use futures_util::future::try_join3;
use itertools::Itertools;
use std::collections::BTreeSet;
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountTab {
	Rated,
	Watchlist,
	Suggestions,
	Following,
}

impl AccountTab {
	pub const ALL: [Self; 4] = [Self::Rated, Self::Watchlist, Self::Suggestions, Self::Following];

	pub fn label(&self) -> &'static str {
		match self {
			Self::Rated => "Rated Movies",
			Self::Watchlist => "Watchlist",
			Self::Suggestions => "Movie Suggestions",
			Self::Following => "Following",
		}
	}
}

#[function_component]
pub fn Account() -> Html {
	let me = use_query(api::users::me);
	let tab = use_state_eq(|| AccountTab::Rated);
	let user = match me.status() {
		QueryStatus::Idle | QueryStatus::Pending => return html!(<p>{"Loading account info..."}</p>),
		QueryStatus::Failed(err) if err.is_unauthorized() => {
			return html! {
				<p>
					{"Your session has expired. "}
					<Link<Route> to={Route::Login}>{"Log in again"}</Link<Route>>
				</p>
			};
		}
		QueryStatus::Failed(err) => return html!(<p>{format!("Error: {err}")}</p>),
		QueryStatus::Ready(user) => user.clone(),
	};
	html! {
		<div class="account">
			<h1>{format!("Welcome, {}!", user.first_name)}</h1>
			if let Some(email) = &user.email {
				<p class="text-muted">{email.clone()}</p>
			}
			if let Some(bio) = &user.bio {
				<p class="lead">{bio.clone()}</p>
			}
			<nav class="nav nav-tabs mb-3">
				{for AccountTab::ALL.into_iter().map(|option| {
					let onclick = {
						let tab = tab.clone();
						Callback::from(move |_: MouseEvent| tab.set(option))
					};
					let class = classes!("nav-link", (*tab == option).then_some("active"));
					html!(<button type="button" {class} {onclick}>{option.label()}</button>)
				})}
			</nav>
			{match *tab {
				AccountTab::Rated => html!(<RatedMovies />),
				AccountTab::Watchlist => html!(<Watchlist />),
				AccountTab::Suggestions => html!(<Suggestions user={user.clone()} />),
				AccountTab::Following => html!(<Following />),
			}}
		</div>
	}
}

#[function_component]
fn RatedMovies() -> Html {
	let ratings = use_query(api::ratings::list);
	match ratings.status() {
		QueryStatus::Idle | QueryStatus::Pending => html!(<Loading label="Loading ratings..." />),
		QueryStatus::Failed(err) => html!(<ErrorText message={err.to_string()} />),
		QueryStatus::Ready(rated) if rated.is_empty() => html!(<p>{"You haven't rated any movies yet."}</p>),
		QueryStatus::Ready(rated) => html! {<>
			{stale_error(&ratings)}
			<ul class="list-group">
				{for rated.iter().sorted_by(|a, b| a.movie.title.cmp(&b.movie.title)).map(|rated| html! {
					<MovieRow movie={rated.movie.clone()}>
						<span aria-label={rated.rating.label()}>{rated.rating.icon()}</span>
					</MovieRow>
				})}
			</ul>
		</>},
	}
}

/// Catalog movies sharing a genre with the user's favorites that are neither
/// rated nor on the watchlist, ordered by title.
pub fn suggest<'a>(
	movies: &'a [Movie],
	favorites: &FavoriteGenres,
	rated: &[RatedMovie],
	watchlist: &[WatchlistEntry],
) -> Vec<&'a Movie> {
	let seen = rated
		.iter()
		.map(|rated| rated.movie.id)
		.chain(watchlist.iter().map(|entry| entry.movie.id))
		.collect::<BTreeSet<MovieId>>();
	movies
		.iter()
		.filter(|movie| !seen.contains(&movie.id))
		.filter(|movie| favorites.iter().any(|genre| movie.genres.contains_ignore_case(genre)))
		.sorted_by(|a, b| a.title.cmp(&b.title).then(a.id.cmp(&b.id)))
		.collect()
}

#[derive(Clone, PartialEq, Properties)]
struct SuggestionsProps {
	user: User,
}

#[function_component]
fn Suggestions(SuggestionsProps { user }: &SuggestionsProps) -> Html {
	let sources = use_query(|| async {
		try_join3(api::movies::list(), api::ratings::list(), api::watchlist::list()).await
	});
	if user.favorite_genres.is_empty() {
		return html!(<p>{"Pick some favorite genres to get suggestions."}</p>);
	}
	match sources.status() {
		QueryStatus::Idle | QueryStatus::Pending => html!(<Loading label="Finding suggestions..." />),
		QueryStatus::Failed(err) => html!(<ErrorText message={err.to_string()} />),
		QueryStatus::Ready((movies, rated, watchlist)) => {
			let picks = suggest(movies, &user.favorite_genres, rated, watchlist);
			if picks.is_empty() {
				return html!(<p>{"No new suggestions right now."}</p>);
			}
			html! {
				<ul class="list-group">
					{for picks.into_iter().map(|movie| html!(<MovieRow movie={movie.clone()} />))}
				</ul>
			}
		}
	}
}

#[function_component]
fn Following() -> Html {
	let following = use_query(api::followers::following);
	let action = use_action();
	let body = match following.status() {
		QueryStatus::Idle | QueryStatus::Pending => html!(<Loading label="Loading..." />),
		QueryStatus::Failed(err) => html!(<ErrorText message={err.to_string()} />),
		QueryStatus::Ready(users) if users.is_empty() => html!(<p>{"You aren't following anyone yet."}</p>),
		QueryStatus::Ready(users) => html! {
			<ul class="list-group">
				{for users.iter().map(|user| {
					let onclick = Callback::from({
						let action = action.clone();
						let following = following.clone();
						let user_id = user.id;
						move |_: MouseEvent| {
							let following = following.clone();
							action.run("followers", api::followers::unfollow(user_id), move |_| following.run());
						}
					});
					html! {
						<UserCard user={user.clone()}>
							<button class="btn btn-outline-secondary btn-sm" {onclick} disabled={action.pending()}>{"Unfollow"}</button>
						</UserCard>
					}
				})}
			</ul>
		},
	};
	html! {<>
		{body}
		{stale_error(&following)}
		{action_error(action.error())}
	</>}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::data::{Genres, Verdict};

	fn movie(id: MovieId, title: &str, genres: &[&str]) -> Movie {
		Movie {
			id,
			title: title.to_owned(),
			genres: Genres::from(genres.iter().map(|g| g.to_string()).collect::<Vec<_>>()),
			..Default::default()
		}
	}

	fn favorites(genres: &[&str]) -> FavoriteGenres {
		let mut favorites = FavoriteGenres::default();
		for genre in genres {
			favorites.toggle(genre);
		}
		favorites
	}

	#[test]
	fn suggestions_follow_favorite_genres() {
		let movies = vec![
			movie(1, "Zodiac", &["Crime", "Mystery"]),
			movie(2, "Alien", &["Horror"]),
			movie(3, "Fargo", &["crime"]),
		];
		let picks = suggest(&movies, &favorites(&["Crime"]), &[], &[]);
		let titles = picks.iter().map(|m| m.title.as_str()).collect::<Vec<_>>();
		assert_eq!(titles, vec!["Fargo", "Zodiac"]);
	}

	#[test]
	fn suggestions_skip_rated_and_watchlisted() {
		let movies = vec![movie(1, "Zodiac", &["Crime"]), movie(2, "Heat", &["Crime"]), movie(3, "Fargo", &["Crime"])];
		let rated = vec![RatedMovie {
			movie: movies[0].clone(),
			rating: Verdict::Like,
			rating_id: Some(1),
		}];
		let watchlist = vec![WatchlistEntry {
			movie: movies[1].clone(),
			rating: None,
			rating_id: None,
		}];
		let picks = suggest(&movies, &favorites(&["Crime"]), &rated, &watchlist);
		assert_eq!(picks.len(), 1);
		assert_eq!(picks[0].id, 3);
	}

	#[test]
	fn no_favorites_no_suggestions() {
		let movies = vec![movie(1, "Zodiac", &["Crime"])];
		assert!(suggest(&movies, &FavoriteGenres::default(), &[], &[]).is_empty());
	}

	#[test]
	fn tab_labels() {
		let labels = AccountTab::ALL.iter().map(AccountTab::label).collect::<Vec<_>>();
		assert_eq!(labels, vec!["Rated Movies", "Watchlist", "Movie Suggestions", "Following"]);
	}
}
