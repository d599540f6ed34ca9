use yew::{html, Component, Context, Html};
use yew_router::Routable;

pub struct Switch<T>(std::marker::PhantomData<T>);
impl<T> Component for Switch<T>
where
	T: Routable + Route + 'static,
{
	type Message = ();
	type Properties = ();

	fn create(_ctx: &Context<Self>) -> Self {
		Self(Default::default())
	}

	fn view(&self, _ctx: &Context<Self>) -> Html {
		html! {
			<yew_router::Switch<T> render={T::render} />
		}
	}
}

pub trait Route {
	/// Shown in the browser tab while the route is active.
	fn title(&self) -> &'static str;

	fn html(self) -> Html;

	fn render(self) -> Html
	where
		Self: Sized,
	{
		crate::config::set_page_title(self.title());
		self.html()
	}

	fn switch() -> Html
	where
		Self: Routable + 'static,
	{
		html! { <Switch<Self> /> }
	}
}
