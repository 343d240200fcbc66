use leptos::{either::Either, prelude::*};

/// Round portrait, falling back to initials when there is no picture.
#[component]
pub fn Avatar(
    image: Option<String>,
    #[prop(into)] initials: String,
    #[prop(into)] alt: String,
    #[prop(default = "h-12 w-12 text-sm")] size: &'static str,
) -> impl IntoView {
    let class = format!(
        "relative flex shrink-0 items-center justify-center overflow-hidden rounded-full bg-muted font-medium {size}"
    );
    view! {
        <span class=class>
            {match image {
                Some(src) => Either::Left(view! { <img src=src alt=alt class="h-full w-full object-cover" /> }),
                None => Either::Right(view! { <span aria-label=alt>{initials}</span> }),
            }}
        </span>
    }
}
