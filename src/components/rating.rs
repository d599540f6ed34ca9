use crate::data::Verdict;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct ThumbsProps {
	/// Verdict highlighted as picked.
	pub selected: Option<Verdict>,
	/// Verdict already on record, shown in bold.
	#[prop_or_default]
	pub current: Option<Verdict>,
	#[prop_or_default]
	pub disabled: bool,
	pub on_pick: Callback<Verdict>,
}

#[function_component]
pub fn Thumbs(props: &ThumbsProps) -> Html {
	let thumb = |verdict: Verdict| {
		let mut classes = classes!("btn", "btn-lg", "thumb");
		classes.push(match (props.selected == Some(verdict), verdict) {
			(true, Verdict::Like) => "btn-success",
			(true, Verdict::Dislike) => "btn-danger",
			(false, _) => "btn-outline-secondary",
		});
		if props.current == Some(verdict) {
			classes.push("fw-bold");
		}
		let onclick = props.on_pick.reform(move |_: MouseEvent| verdict);
		html! {
			<button type="button" class={classes} aria-label={verdict.label()} {onclick} disabled={props.disabled}>
				{verdict.icon()}
			</button>
		}
	};
	html! {
		<div class="d-flex gap-3 justify-content-center my-2">
			{thumb(Verdict::Like)}
			{thumb(Verdict::Dislike)}
		</div>
	}
}
