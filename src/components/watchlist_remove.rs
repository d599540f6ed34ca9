use crate::{
	api,
	components::{action_error, Thumbs},
	data::{toggle_verdict, RatingChange, Verdict, WatchlistEntry},
	hooks::use_action,
	response::Error,
};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct RemoveFromWatchlistProps {
	pub entry: WatchlistEntry,
	/// Fired whenever the server-side watchlist or rating changed.
	pub on_changed: Callback<()>,
}

/// Remove button that first asks how the movie should be rated.
#[function_component]
pub fn RemoveFromWatchlistButton(props: &RemoveFromWatchlistProps) -> Html {
	let show_modal = use_state_eq(|| false);
	let selected = use_state_eq(|| None::<Verdict>);
	let rating_applied = use_state_eq(|| false);
	let action = use_action();

	let close = {
		let show_modal = show_modal.clone();
		let selected = selected.clone();
		let rating_applied = rating_applied.clone();
		let action = action.clone();
		move || {
			show_modal.set(false);
			selected.set(None);
			rating_applied.set(false);
			action.clear();
		}
	};

	let remove = {
		let action = action.clone();
		let entry = props.entry.clone();
		let on_changed = props.on_changed.clone();
		let rating_applied = rating_applied.clone();
		let close = close.clone();
		move |change: RatingChange| {
			let movie_id = entry.movie.id;
			// A retry after a failed removal must not repeat the rating change.
			let change = match *rating_applied {
				true => RatingChange::Keep,
				false => change,
			};
			let rating_applied = rating_applied.clone();
			let on_failure = on_changed.clone();
			let on_changed = on_changed.clone();
			let close = close.clone();
			action.run(
				"watchlist",
				async move {
					let result = api::watchlist::remove_rated(movie_id, change).await;
					if let Err(err) = &result {
						if err.rating_applied() {
							rating_applied.set(true);
							on_failure.emit(());
						}
					}
					result.map_err(Error::from)
				},
				move |_| {
					close();
					on_changed.emit(());
				},
			);
		}
	};

	let open = Callback::from({
		let show_modal = show_modal.clone();
		move |_: MouseEvent| show_modal.set(true)
	});
	if !*show_modal {
		return html! {
			<button class="btn btn-outline-danger btn-sm" onclick={open}>{"Remove"}</button>
		};
	}

	let on_pick = Callback::from({
		let selected = selected.clone();
		move |verdict: Verdict| selected.set(toggle_verdict(*selected, verdict))
	});
	let remove_with_rating = Callback::from({
		let remove = remove.clone();
		let entry = props.entry.clone();
		let selected = *selected;
		move |_: MouseEvent| remove(RatingChange::resolve(entry.rating, entry.rating_id, selected))
	});
	let remove_only = Callback::from(move |_: MouseEvent| remove(RatingChange::Keep));
	let cancel = Callback::from(move |_: MouseEvent| close());
	let pending = action.pending();

	html! {<>
		<button class="btn btn-outline-danger btn-sm" disabled=true>{"Remove"}</button>
		<div class="modal d-block" tabindex="-1" role="dialog">
			<div class="modal-dialog modal-dialog-centered">
				<div class="modal-content">
					<div class="modal-header">
						<h3 class="modal-title fs-5">{"How do you want to rate this movie?"}</h3>
					</div>
					<div class="modal-body d-flex flex-column align-items-center gap-2">
						<Thumbs selected={*selected} current={props.entry.rating} disabled={pending} {on_pick} />
						<button class="btn btn-dark fw-bold" onclick={remove_with_rating} disabled={selected.is_none() || pending}>
							{"Remove from watchlist with rating"}
						</button>
						<button class="btn btn-light border" onclick={remove_only} disabled={pending}>
							{"I did not watch, I just want to remove"}
						</button>
						<button class="btn btn-link text-secondary" onclick={cancel} disabled={pending}>{"Cancel"}</button>
						{action_error(action.error())}
					</div>
				</div>
			</div>
		</div>
		<div class="modal-backdrop show" />
	</>}
}
