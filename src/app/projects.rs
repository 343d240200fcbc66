use leptos::prelude::*;

use crate::content::Project;

use super::{
    carousel::MediaCarousel,
    homepage::{Badges, SectionHeading},
};

#[component]
pub fn ProjectsSection(projects: &'static [Project]) -> impl IntoView {
    view! {
        <section id="projects" class="container mx-auto px-4 py-16 scroll-mt-20 section-content">
            <SectionHeading title="Projects" kicker="Selected work" />
            <div class="grid gap-8 lg:grid-cols-2">
                {projects.iter().map(|project| view! { <ProjectCard project /> }).collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <article class="flex flex-col gap-4 rounded-lg border bg-background p-5 shadow-sm">
            <MediaCarousel items=project.media.clone() title=project.name.clone() />
            <div>
                <div class="flex items-center justify-between gap-2">
                    <h3 class="text-lg font-semibold">{project.name.as_str()}</h3>
                    {project
                        .link
                        .as_deref()
                        .map(|href| {
                            view! {
                                <a
                                    href=href
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-sm text-muted-foreground hover:text-foreground"
                                >
                                    "Visit ↗"
                                </a>
                            }
                        })}
                </div>
                <p class="text-xs uppercase tracking-wide text-muted-foreground">
                    {project.categories.as_str()}
                </p>
            </div>
            <p class="text-sm leading-relaxed">{project.description.as_str()}</p>
            <ul class="list-disc pl-5 space-y-1 text-sm">
                {project
                    .highlights
                    .iter()
                    .map(|h| view! { <li>{h.as_str()}</li> })
                    .collect_view()}
            </ul>
            <Badges items=&project.stack />
        </article>
    }
}
