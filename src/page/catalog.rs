use crate::{
	api,
	components::{stale_error, ErrorText, Loading},
	data::{filter_movies, Movie},
	hooks::{use_query, QueryStatus},
	util::web_ext::InputExt,
	Route,
};
use yew::prelude::*;
use yew_router::prelude::Link;

#[function_component]
pub fn Catalog() -> Html {
	let movies = use_query(api::movies::list);
	let filter = use_state_eq(String::new);
	let oninput = Callback::from({
		let filter = filter.clone();
		move |ev: InputEvent| {
			if let Some(value) = ev.input_value() {
				filter.set(value);
			}
		}
	});
	let body = match movies.status() {
		QueryStatus::Idle | QueryStatus::Pending => html!(<Loading label="Loading movies..." />),
		QueryStatus::Failed(err) => html!(<ErrorText message={err.to_string()} />),
		QueryStatus::Ready(all) => {
			let visible = filter_movies(all, &filter);
			match visible.is_empty() {
				true => html!(<p>{empty_notice(all.len())}</p>),
				false => html! {
					<ul class="list-group">
						{for visible.into_iter().map(|movie| html!(<MovieRow movie={movie.clone()} />))}
					</ul>
				},
			}
		}
	};
	html! {
		<div class="movie-catalog">
			<h2>{"Movie Catalog"}</h2>
			<input
				class="form-control mb-3"
				type="search"
				placeholder="Filter by title, genre or director"
				value={(*filter).clone()}
				{oninput}
			/>
			{stale_error(&movies)}
			{body}
		</div>
	}
}

/// Shown in place of the list when no movie is visible.
pub fn empty_notice(total: usize) -> &'static str {
	match total {
		0 => "No movies yet.",
		_ => "No movies match.",
	}
}

#[derive(Clone, PartialEq, Properties)]
pub struct MovieRowProps {
	pub movie: Movie,
	#[prop_or_default]
	pub children: Html,
}

#[function_component]
pub fn MovieRow(MovieRowProps { movie, children }: &MovieRowProps) -> Html {
	html! {
		<li class="list-group-item d-flex align-items-center gap-3">
			<Link<Route> to={Route::Movie { id: movie.id }}>
				if let Some(poster) = &movie.movie_poster {
					<img src={poster.clone()} alt={movie.poster_alt()} width="60" class="me-2" />
				}
				{movie.title.clone()}
			</Link<Route>>
			if !movie.genres.is_empty() {
				<span class="text-muted">{movie.genres.to_string()}</span>
			}
			<span class="ms-auto">{children.clone()}</span>
		</li>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_catalog_differs_from_no_match() {
		assert_eq!(empty_notice(0), "No movies yet.");
		assert_eq!(empty_notice(12), "No movies match.");
	}
}
