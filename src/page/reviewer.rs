use crate::{
	api,
	auth::use_session,
	components::{action_error, stale_error, user::Avatar, ErrorText, Loading, ReviewList},
	data::{is_following, UserId},
	hooks::{use_action, use_query, use_query_with, QueryStatus},
};
use itertools::Itertools;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct ReviewerProps {
	pub id: UserId,
}

/// Another user's profile with their reviews.
#[function_component]
pub fn Reviewer(ReviewerProps { id }: &ReviewerProps) -> Html {
	let session = use_session();
	let user = use_query_with(*id, |id: &UserId| api::users::get(*id));
	let reviews = use_query_with(*id, |id: &UserId| api::reviews::by_user(*id));
	let me = use_query_with(session.token.clone(), |_| api::users::me());

	let user = match user.status() {
		QueryStatus::Idle | QueryStatus::Pending => return html!(<Loading />),
		QueryStatus::Failed(err) => return html!(<ErrorText message={err.to_string()} />),
		QueryStatus::Ready(user) => user.clone(),
	};
	let viewer = me.data.as_ref().filter(|_| session.is_authenticated()).map(|me| me.id);

	html! {
		<div class="reviewer">
			<h2 class="d-flex align-items-center">
				<Avatar user={user.clone()} />
				{user.display_name()}
				<small class="text-muted ms-2">{format!("@{}", user.username)}</small>
			</h2>
			if let Some(bio) = &user.bio {
				<p>{bio.clone()}</p>
			}
			if !user.favorite_genres.is_empty() {
				<p><strong>{"Favorite genres: "}</strong>{user.favorite_genres.iter().join(", ")}</p>
			}
			if viewer.map_or(false, |viewer| viewer != user.id) {
				<FollowButton user_id={user.id} />
			}
			<h3 class="mt-4">{"Reviews"}</h3>
			{match reviews.status() {
				QueryStatus::Idle | QueryStatus::Pending => html!(<Loading label="Loading reviews..." />),
				QueryStatus::Failed(err) => html!(<ErrorText message={err.to_string()} />),
				QueryStatus::Ready(list) => html! {
					<ReviewList reviews={list.clone()} {viewer} link_movie=true on_changed={reviews.refetch_callback::<()>()} />
				},
			}}
			{stale_error(&reviews)}
		</div>
	}
}

#[derive(Clone, PartialEq, Properties)]
pub struct FollowButtonProps {
	pub user_id: UserId,
}

#[function_component]
pub fn FollowButton(FollowButtonProps { user_id }: &FollowButtonProps) -> Html {
	let user_id = *user_id;
	let following = use_query(api::followers::following);
	let action = use_action();
	let Some(list) = &following.data else {
		return match &following.error {
			Some(err) => html!(<ErrorText message={err.to_string()} />),
			None => html!(<Loading label="Checking follows..." />),
		};
	};
	let follows = is_following(list, user_id);
	let onclick = Callback::from({
		let action = action.clone();
		let following = following.clone();
		move |_: MouseEvent| {
			let following = following.clone();
			let refetch = move |_: ()| following.run();
			match follows {
				true => action.run("followers", api::followers::unfollow(user_id), refetch),
				false => action.run("followers", api::followers::follow(user_id), refetch),
			}
		}
	});
	let (class, label) = match follows {
		true => ("btn btn-outline-secondary", "Unfollow"),
		false => ("btn btn-primary", "Follow"),
	};
	html! {<>
		<button {class} {onclick} disabled={action.pending() || following.loading}>{label}</button>
		{action_error(action.error())}
	</>}
}
