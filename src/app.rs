mod avatar;
mod carousel;
mod clipboard;
mod contact;
mod header;
mod homepage;
mod projects;
mod resume;
mod theme;

pub use carousel::MediaCarousel;

use header::Header;
use homepage::HomePage;
use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};
use theme::provide_theme;

use crate::content::{site_content, SiteMeta};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="min-h-screen bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    let theme = provide_theme();

    let profile = site_content().ok().map(|c| &c.profile);
    let brand = profile
        .map(|p| p.name.as_str())
        .unwrap_or("Portfolio");
    let meta = site_content().ok().map(|c| &c.meta);
    let description = meta
        .map(|m| m.description.clone())
        .filter(|d| !d.is_empty())
        .or_else(|| profile.map(|p| p.summary.clone()))
        .unwrap_or_default();

    view! {
        <Html {..} class=move || theme.theme().class() />
        <Title formatter=move |title| format!("{brand} - {title}") />
        <Meta name="description" content=description />
        {meta.map(|meta| view! { <SiteMetaTags meta /> })}

        <Router>
            <Header profile />
            <main class="flex flex-col flex-grow mx-auto w-full">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
        </Router>
    }
}

/// Keywords, authorship, OpenGraph card and icon links for `<head>`.
#[component]
fn SiteMetaTags(meta: &'static SiteMeta) -> impl IntoView {
    let og = meta.open_graph.as_ref().map(|og| {
        let image = og.image.as_ref().map(|image| {
            view! {
                <Meta property="og:image" content=meta.absolute_url(&image.url) />
                <Meta property="og:image:width" content=image.width.to_string() />
                <Meta property="og:image:height" content=image.height.to_string() />
                <Meta property="og:image:alt" content=image.alt.clone() />
            }
        });
        view! {
            <Meta property="og:title" content=og.title.clone() />
            <Meta property="og:description" content=og.description.clone() />
            <Meta property="og:site_name" content=og.site_name.clone() />
            <Meta property="og:locale" content=og.locale.clone() />
            <Meta property="og:type" content=og.kind.clone() />
            <Meta property="og:url" content=meta.absolute_url("/") />
            {image}
        }
    });

    view! {
        {(!meta.keywords.is_empty())
            .then(|| view! { <Meta name="keywords" content=meta.keywords.join(", ") /> })}
        {meta
            .generator
            .clone()
            .map(|generator| view! { <Meta name="generator" content=generator /> })}
        {meta
            .authors
            .iter()
            .map(|author| {
                let url = author.url.clone().map(|href| view! { <Link rel="author" href /> });
                view! {
                    <Meta name="author" content=author.name.clone() />
                    {url}
                }
            })
            .collect_view()}
        {og}
        {meta
            .icons
            .iter()
            .map(|icon| match icon.mime.clone() {
                Some(mime) => {
                    Either::Left(
                        view! { <Link rel=icon.rel.clone() href=icon.href.clone() type_=mime /> },
                    )
                }
                None => Either::Right(view! { <Link rel=icon.rel.clone() href=icon.href.clone() /> }),
            })
            .collect_view()}
    }
}
