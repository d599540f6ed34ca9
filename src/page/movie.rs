use crate::{
	api,
	auth::use_session,
	components::{action_error, stale_error, AuthSwitch, ErrorText, Loading, ReviewForm, ReviewList, Thumbs},
	data::{Movie, MovieId, RatingChange, Verdict},
	hooks::{use_action, use_query, use_query_with, QueryStatus},
	Route,
};
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Clone, PartialEq, Properties)]
pub struct MovieDetailsProps {
	pub id: MovieId,
}

#[allow(unused_parens)]
#[function_component]
pub fn MovieDetails(MovieDetailsProps { id }: &MovieDetailsProps) -> Html {
	let movie = use_query_with(*id, |id: &MovieId| api::movies::get(*id));
	let movie_data = match movie.status() {
		QueryStatus::Idle | QueryStatus::Pending => return html!(<Loading />),
		QueryStatus::Failed(err) => return html!(<ErrorText message={err.to_string()} />),
		QueryStatus::Ready(movie) => movie.clone(),
	};
	let movie_id = movie_data.id;
	html! {
		<div class="movie-details">
			{stale_error(&movie)}
			<MovieFacts movie={movie_data} />
			<AuthSwitch
				identified={(html!(<MovieActions {movie_id} />))}
				anonymous={(html! {
					<p>
						<Link<Route> to={Route::Login}>{"Log in"}</Link<Route>>
						{" to rate, review or save this movie."}
					</p>
				})}
			/>
			<MovieReviews {movie_id} />
		</div>
	}
}

#[derive(Clone, PartialEq, Properties)]
struct MovieFactsProps {
	movie: Movie,
}

#[function_component]
fn MovieFacts(MovieFactsProps { movie }: &MovieFactsProps) -> Html {
	let fact = |label: &'static str, value: &Option<String>| match value {
		Some(value) => html!(<p><strong>{label}</strong>{" "}{value.clone()}</p>),
		None => html!(),
	};
	html! {<>
		<h2>{movie.title.clone()}</h2>
		if let Some(poster) = &movie.movie_poster {
			<img class="img-fluid mb-3" src={poster.clone()} alt={movie.poster_alt()} style="max-width: 300px;" />
		}
		if !movie.genres.is_empty() {
			<p><strong>{"Genres:"}</strong>{" "}{movie.genres.to_string()}</p>
		}
		{fact("Director:", &movie.director)}
		{fact("Release Date:", &movie.release_date)}
		{fact("Plot Summary:", &movie.plot_summary)}
	</>}
}

#[derive(Clone, PartialEq, Properties)]
struct MovieActionsProps {
	movie_id: MovieId,
}

/// Watchlist and rating controls for a logged-in user.
#[function_component]
fn MovieActions(MovieActionsProps { movie_id }: &MovieActionsProps) -> Html {
	let movie_id = *movie_id;
	let watchlist = use_query(api::watchlist::list);
	let ratings = use_query(api::ratings::list);
	let action = use_action();

	let on_watchlist = watchlist
		.data
		.as_ref()
		.map(|entries| entries.iter().any(|entry| entry.movie.id == movie_id));
	let rated = ratings
		.data
		.as_ref()
		.and_then(|rated| rated.iter().find(|rated| rated.movie.id == movie_id))
		.map(|rated| (rated.rating, rated.rating_id));
	let current = rated.map(|(verdict, _)| verdict);

	let add_to_watchlist = Callback::from({
		let action = action.clone();
		let watchlist = watchlist.clone();
		move |_: MouseEvent| {
			let watchlist = watchlist.clone();
			action.run("watchlist", api::watchlist::add(movie_id), move |_| watchlist.run());
		}
	});
	let on_pick = Callback::from({
		let action = action.clone();
		let ratings = ratings.clone();
		move |verdict: Verdict| {
			let change = RatingChange::resolve(current, rated.and_then(|(_, id)| id), Some(verdict));
			let ratings = ratings.clone();
			action.run("ratings", api::ratings::apply(movie_id, change), move |_| ratings.run());
		}
	});

	html! {
		<div class="movie-actions card card-body mb-3">
			<div class="d-flex align-items-center gap-3">
				{match on_watchlist {
					Some(true) => html! {
						<Link<Route> classes="btn btn-outline-success" to={Route::Watchlist}>{"On your watchlist"}</Link<Route>>
					},
					Some(false) => html! {
						<button class="btn btn-success" onclick={add_to_watchlist} disabled={action.pending()}>
							{"Add to watchlist"}
						</button>
					},
					None => html!(<Loading label="Checking watchlist..." />),
				}}
				<Thumbs selected={current} current={current} disabled={action.pending() || ratings.loading} {on_pick} />
			</div>
			{stale_error(&watchlist)}
			{stale_error(&ratings)}
			{action_error(action.error())}
		</div>
	}
}

#[derive(Clone, PartialEq, Properties)]
struct MovieReviewsProps {
	movie_id: MovieId,
}

#[function_component]
fn MovieReviews(MovieReviewsProps { movie_id }: &MovieReviewsProps) -> Html {
	let session = use_session();
	let reviews = use_query_with(*movie_id, |id: &MovieId| api::reviews::for_movie(*id));
	let me = use_query_with(session.token.clone(), |_| api::users::me());
	let viewer = me.data.as_ref().filter(|_| session.is_authenticated()).map(|user| user.id);
	let refetch = reviews.refetch_callback::<()>();
	html! {
		<section class="mt-4">
			<h3>{"Reviews"}</h3>
			{match reviews.status() {
				QueryStatus::Idle | QueryStatus::Pending => html!(<Loading label="Loading reviews..." />),
				QueryStatus::Failed(err) => html!(<ErrorText message={err.to_string()} />),
				QueryStatus::Ready(list) => html! {
					<ReviewList reviews={list.clone()} {viewer} on_changed={refetch.clone()} />
				},
			}}
			{stale_error(&reviews)}
			if session.is_authenticated() {
				<ReviewForm movie_id={*movie_id} on_posted={refetch} />
			}
		</section>
	}
}
