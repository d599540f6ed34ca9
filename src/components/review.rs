use crate::{
	api,
	components::{action_error, ErrorText},
	data::{MovieId, NewReview, Review, ReviewId, UserId},
	hooks::use_action,
	util::web_ext::InputExt,
	Route,
};
use yew::prelude::*;
use yew_router::prelude::Link;

#[derive(Clone, PartialEq, Properties)]
pub struct ReviewListProps {
	pub reviews: Vec<Review>,
	/// Reviews by this user get a delete button.
	#[prop_or_default]
	pub viewer: Option<UserId>,
	/// Link each review to its movie instead of its author.
	#[prop_or_default]
	pub link_movie: bool,
	#[prop_or_default]
	pub on_changed: Callback<()>,
}

#[function_component]
pub fn ReviewList(props: &ReviewListProps) -> Html {
	if props.reviews.is_empty() {
		return html!(<p class="text-muted">{"No reviews yet."}</p>);
	}
	html! {
		<ul class="list-unstyled reviews">
			{for props.reviews.iter().map(|review| html! {
				<ReviewItem
					review={review.clone()}
					deletable={props.viewer == Some(review.user_id)}
					link_movie={props.link_movie}
					on_deleted={props.on_changed.clone()}
				/>
			})}
		</ul>
	}
}

#[derive(Clone, PartialEq, Properties)]
struct ReviewItemProps {
	review: Review,
	deletable: bool,
	link_movie: bool,
	on_deleted: Callback<()>,
}

#[function_component]
fn ReviewItem(props: &ReviewItemProps) -> Html {
	let action = use_action();
	let review = &props.review;
	let heading = match props.link_movie {
		true => html!(<Link<Route> to={Route::Movie { id: review.movie_id }}>{format!("Movie #{}", review.movie_id)}</Link<Route>>),
		false => html!(<Link<Route> to={Route::Reviewer { id: review.user_id }}>{review.author()}</Link<Route>>),
	};
	let delete = props.deletable.then(|| {
		let onclick = Callback::from({
			let action = action.clone();
			let review_id: ReviewId = review.id;
			let on_deleted = props.on_deleted.clone();
			move |_: MouseEvent| {
				let on_deleted = on_deleted.clone();
				action.run("reviews", api::reviews::delete(review_id), move |_| on_deleted.emit(()));
			}
		});
		html! {
			<button class="btn btn-link btn-sm text-danger" {onclick} disabled={action.pending()}>{"Delete"}</button>
		}
	});
	html! {
		<li class="card mb-2">
			<div class="card-body">
				<div class="d-flex align-items-center gap-2">
					<strong>{heading}</strong>
					if let Some(title) = &review.title {
						<span>{title.clone()}</span>
					}
					if let Some(date) = review.posted_on() {
						<small class="text-muted">{date.to_owned()}</small>
					}
					<span class="ms-auto">{delete}</span>
				</div>
				<p class="card-text mt-2">{review.content.clone()}</p>
				{action_error(action.error())}
			</div>
		</li>
	}
}

#[derive(Clone, PartialEq, Properties)]
pub struct ReviewFormProps {
	pub movie_id: MovieId,
	pub on_posted: Callback<()>,
}

#[function_component]
pub fn ReviewForm(ReviewFormProps { movie_id, on_posted }: &ReviewFormProps) -> Html {
	let content = use_state_eq(String::new);
	let action = use_action();
	let oninput = Callback::from({
		let content = content.clone();
		move |ev: InputEvent| {
			if let Some(value) = ev.input_value() {
				content.set(value);
			}
		}
	});
	let onsubmit = Callback::from({
		let content = content.clone();
		let action = action.clone();
		let movie_id = *movie_id;
		let on_posted = on_posted.clone();
		move |ev: SubmitEvent| {
			ev.prevent_default();
			let review = NewReview {
				movie_id,
				content: content.trim().to_owned(),
			};
			if let Err(err) = review.validate() {
				action.fail(err.to_string());
				return;
			}
			let content = content.clone();
			let on_posted = on_posted.clone();
			action.run(
				"reviews",
				async move { api::reviews::create(&review).await },
				move |_| {
					content.set(String::new());
					on_posted.emit(());
				},
			);
		}
	});
	html! {
		<form class="review-form my-3" {onsubmit}>
			<label class="form-label w-100">
				{"Write a review"}
				<textarea class="form-control" name="content" rows="4" value={(*content).clone()} {oninput} />
			</label>
			<button type="submit" class="btn btn-primary" disabled={action.pending()}>{"Post review"}</button>
			if let Some(message) = action.error() {
				<ErrorText {message} />
			}
		</form>
	}
}
