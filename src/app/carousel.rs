use leptos::{either::EitherOf3, ev, prelude::*};

use crate::media::{CarouselState, ListenerGuard, Media, Presentation, Surface};

const ARROW_CLASS: &str = "absolute top-1/2 -translate-y-1/2 h-9 w-9 rounded-md text-xl leading-none";

/// Circular media viewer with a lightbox.
///
/// The inline strip and the lightbox are two projections of one
/// [`CarouselState`]. The window keydown listener only exists while the
/// lightbox is open.
#[component]
pub fn MediaCarousel(items: Vec<Media>, #[prop(into)] title: String) -> impl IntoView {
    let state = RwSignal::new(CarouselState::new(items.len()));
    let items = StoredValue::new(items);
    let title = StoredValue::new(title);
    let modal_open = Memo::new(move |_| state.with(CarouselState::is_modal_open));
    let key_listener = StoredValue::new(None::<ListenerGuard>);

    Effect::new(move |_| {
        if modal_open.get() {
            let handle = window_event_listener(ev::keydown, move |ev| {
                let consumed = state
                    .try_update(|s| s.handle_key(&ev.key()))
                    .unwrap_or(false);
                if consumed {
                    ev.prevent_default();
                }
            });
            log::debug!("{}: keyboard navigation attached", title.get_value());
            // replacing an old guard releases it
            key_listener.set_value(Some(ListenerGuard::new(move || handle.remove())));
        } else if key_listener.with_value(Option::is_some) {
            key_listener.set_value(None);
            log::debug!("{}: keyboard navigation detached", title.get_value());
        }
    });
    on_cleanup(move || {
        key_listener.try_update_value(Option::take);
    });

    let has_controls = state.with_untracked(CarouselState::has_controls);
    let transform = move || state.with(CarouselState::transform);
    let open = move || state.update(CarouselState::open_modal);

    let inline_slides = items.with_value(|items| {
        items
            .iter()
            .enumerate()
            .map(|(i, media)| {
                let selected = move || state.with(|s| s.is_active(i));
                view! {
                    <button
                        role="option"
                        aria-selected=move || if selected() { "true" } else { "false" }
                        tabindex=move || if selected() { "0" } else { "-1" }
                        class="relative aspect-video w-full shrink-0 focus:outline-none"
                        on:click=move |_| open()
                    >
                        {slide_view(media.present(Surface::Inline), Surface::Inline)}
                        <div
                            class="absolute inset-0 cursor-zoom-in bg-black/0 hover:bg-black/20 transition"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                open();
                            }
                        />
                        <span class="pointer-events-none absolute bottom-2 right-2 text-white drop-shadow opacity-0 group-hover:opacity-100 transition-opacity">
                            "⤢"
                        </span>
                    </button>
                }
            })
            .collect_view()
    });

    view! {
        <div
            class="group relative"
            aria-label=title.with_value(|t| format!("{t} media carousel"))
        >
            <div class="relative overflow-hidden rounded-md border bg-muted">
                <div
                    class="flex transition-transform duration-300 ease-out will-change-transform"
                    style:transform=transform
                    role="listbox"
                    aria-roledescription="carousel"
                    aria-label=title.with_value(|t| format!("{t} media"))
                >
                    {inline_slides}
                </div>
                {has_controls
                    .then(|| {
                        view! {
                            <NavButtons
                                state
                                prev_label="Previous slide"
                                next_label="Next slide"
                                class="bg-background/60 hover:bg-background/80"
                            />
                        }
                    })}
            </div>
            {has_controls.then(|| view! { <Dots state /> })}
            <Show when=move || modal_open.get()>
                <Lightbox state items title />
            </Show>
        </div>
    }
}

#[component]
fn Lightbox(
    state: RwSignal<CarouselState>,
    items: StoredValue<Vec<Media>>,
    title: StoredValue<String>,
) -> impl IntoView {
    let close = move || state.update(CarouselState::close_modal);
    let has_controls = state.with_untracked(CarouselState::has_controls);
    let slides = items.with_value(|items| {
        items
            .iter()
            .map(|media| {
                view! {
                    <div class="w-full h-[82vh] shrink-0 bg-black">
                        {slide_view(media.present(Surface::Modal), Surface::Modal)}
                    </div>
                }
            })
            .collect_view()
    });

    view! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center bg-black/70"
            on:click=move |_| close()
        >
            <div
                role="dialog"
                aria-modal="true"
                aria-label=title.get_value()
                class="relative w-screen max-w-[96vw] rounded-lg border bg-background p-5 shadow-lg"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="mb-4 flex items-start justify-between gap-4">
                    <div>
                        <h2 class="text-lg font-semibold">{title.get_value()}</h2>
                        <p class="text-sm text-muted-foreground">"Use ← → keys to navigate"</p>
                    </div>
                    <button
                        aria-label="Close"
                        class="rounded-md px-2 text-xl opacity-70 hover:opacity-100"
                        on:click=move |_| close()
                    >
                        "✕"
                    </button>
                </div>
                <div class="relative w-full">
                    <div class="relative overflow-hidden rounded-xl bg-background">
                        <div
                            class="flex transition-transform duration-300"
                            style:transform=move || state.with(CarouselState::transform)
                        >
                            {slides}
                        </div>
                    </div>
                    {has_controls
                        .then(|| {
                            view! {
                                <NavButtons
                                    state
                                    prev_label="Previous"
                                    next_label="Next"
                                    class="bg-secondary text-secondary-foreground"
                                />
                            }
                        })}
                </div>
            </div>
        </div>
    }
}

#[component]
fn NavButtons(
    state: RwSignal<CarouselState>,
    prev_label: &'static str,
    next_label: &'static str,
    class: &'static str,
) -> impl IntoView {
    view! {
        <button
            aria-label=prev_label
            class=format!("{ARROW_CLASS} left-2 {class}")
            on:click=move |_| state.update(CarouselState::prev)
        >
            "‹"
        </button>
        <button
            aria-label=next_label
            class=format!("{ARROW_CLASS} right-2 {class}")
            on:click=move |_| state.update(CarouselState::next)
        >
            "›"
        </button>
    }
}

#[component]
fn Dots(state: RwSignal<CarouselState>) -> impl IntoView {
    let len = state.with_untracked(CarouselState::len);
    view! {
        <div class="mt-2 flex items-center justify-center gap-2" aria-hidden="true">
            {(0..len)
                .map(|i| {
                    view! {
                        <button
                            class=move || {
                                if state.with(|s| s.is_active(i)) {
                                    "h-2.5 w-2.5 rounded-full transition-colors bg-foreground"
                                } else {
                                    "h-2.5 w-2.5 rounded-full transition-colors bg-muted-foreground/30 hover:bg-muted-foreground/60"
                                }
                            }
                            aria-label=format!("Go to slide {}", i + 1)
                            on:click=move |_| state.update(|s| s.go_to(i as i64))
                        />
                    }
                })
                .collect_view()}
        </div>
    }
}

fn slide_view(presentation: Presentation, surface: Surface) -> impl IntoView {
    let fit = match surface {
        Surface::Inline => "h-full w-full object-cover",
        Surface::Modal => "h-full w-full object-contain",
    };
    match presentation {
        Presentation::Image { src, alt } => EitherOf3::A(view! {
            <img src=src alt=alt class=fit crossorigin="anonymous" />
        }),
        Presentation::Embed { src, title } => EitherOf3::B(view! {
            <iframe
                src=src
                title=title
                allow="autoplay; fullscreen; picture-in-picture"
                allowfullscreen=true
                class="h-full w-full rounded-md"
            />
        }),
        Presentation::Video {
            src,
            poster,
            muted,
            controls,
        } => EitherOf3::C(view! {
            <video
                src=src
                poster=poster
                muted=muted
                controls=controls
                playsinline=true
                preload=muted.then_some("metadata")
                class=fit
            />
        }),
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render(items: Vec<Media>) -> String {
        let owner = Owner::new();
        owner.with(|| view! { <MediaCarousel items title="Demo" /> }.to_html())
    }

    fn images(n: usize) -> Vec<Media> {
        (0..n)
            .map(|i| Media::Image {
                src: format!("/images/{i}.png"),
                alt: format!("slide {i}"),
            })
            .collect()
    }

    #[test]
    fn test_render_empty() {
        let html = render(Vec::new());
        assert!(!html.contains("Next slide"));
        assert!(!html.contains("Go to slide"));
        assert!(!html.contains("role=\"option\""));
        assert!(html.contains("translateX(-0%)"));
    }

    #[test]
    fn test_render_single_slide_has_no_controls() {
        let html = render(images(1));
        assert!(!html.contains("Previous slide"));
        assert!(!html.contains("Next slide"));
        assert!(!html.contains("Go to slide"));
        assert_eq!(html.matches("role=\"option\"").count(), 1);
        assert!(html.contains("translateX(-0%)"));
    }

    #[test]
    fn test_render_three_slides() {
        let html = render(images(3));
        assert!(html.contains("Previous slide"));
        assert!(html.contains("Next slide"));
        assert!(html.contains("Go to slide 1"));
        assert!(html.contains("Go to slide 3"));
        assert!(!html.contains("Go to slide 4"));
        assert_eq!(html.matches("role=\"option\"").count(), 3);
        assert_eq!(html.matches("aria-selected=\"true\"").count(), 1);
        assert!(html.contains("translateX(-0%)"));
        // lightbox starts closed
        assert!(!html.contains("role=\"dialog\""));
    }
}
