use crate::{
	api,
	components::{stale_error, Loading, RemoveFromWatchlistButton},
	hooks::{use_query, QueryStatus},
	page::MovieRow,
};
use yew::prelude::*;

#[function_component]
pub fn Watchlist() -> Html {
	let watchlist = use_query(api::watchlist::list);
	let on_changed = watchlist.refetch_callback::<()>();
	match watchlist.status() {
		QueryStatus::Idle | QueryStatus::Pending => html!(<Loading label="Loading watchlist..." />),
		QueryStatus::Failed(err) => {
			log::warn!(target: "watchlist", "{err:?}");
			html!(<p>{"Failed to load watchlist"}</p>)
		}
		QueryStatus::Ready(entries) if entries.is_empty() => html!(<p>{"Your watchlist is empty."}</p>),
		QueryStatus::Ready(entries) => html! {
			<div class="watchlist">
				<h2>{"Your Watchlist"}</h2>
				{stale_error(&watchlist)}
				<ul class="list-group">
					{for entries.iter().map(|entry| html! {
						<MovieRow key={entry.movie.id} movie={entry.movie.clone()}>
							<RemoveFromWatchlistButton entry={entry.clone()} on_changed={on_changed.clone()} />
						</MovieRow>
					})}
				</ul>
			</div>
		},
	}
}
