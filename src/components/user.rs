use crate::{
	api,
	auth::{use_on_login, use_session},
	data::User,
	hooks::{use_query, QueryStatus},
	Route,
};
use yew::prelude::*;
use yew_router::prelude::Link;

/// Username of whoever is logged in, re-fetched each time a session starts.
#[function_component]
pub fn Identification() -> Html {
	let session = use_session();
	let me = use_query(api::users::me);
	use_on_login({
		let me = me.clone();
		move || me.run()
	});
	if !session.is_authenticated() {
		return html!();
	}
	match me.status() {
		QueryStatus::Ready(user) => html! {
			<Link<Route> classes="navbar-text text-light" to={Route::Account}>
				<Avatar user={user.clone()} />
				{format!("@{}", user.username)}
			</Link<Route>>
		},
		_ => html!(),
	}
}

#[derive(Clone, PartialEq, Properties)]
pub struct AvatarProps {
	pub user: User,
}

#[function_component]
pub fn Avatar(AvatarProps { user }: &AvatarProps) -> Html {
	let Some(url) = &user.profile_image_url else {
		return html!();
	};
	html! {
		<img class="rounded-circle me-2" src={url.clone()} alt={user.display_name()} width="28" height="28" />
	}
}

#[derive(Clone, PartialEq, Properties)]
pub struct UserCardProps {
	pub user: User,
	#[prop_or_default]
	pub children: Html,
}

#[function_component]
pub fn UserCard(UserCardProps { user, children }: &UserCardProps) -> Html {
	html! {
		<li class="list-group-item d-flex align-items-center gap-2">
			<Avatar user={user.clone()} />
			<Link<Route> to={Route::Reviewer { id: user.id }}>{user.display_name()}</Link<Route>>
			<span class="text-muted">{format!("@{}", user.username)}</span>
			<span class="ms-auto">{children.clone()}</span>
		</li>
	}
}
