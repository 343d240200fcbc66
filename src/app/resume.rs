use leptos::prelude::*;

use crate::content::{Education, Experience};

use super::homepage::{Badges, SectionHeading};

#[component]
pub fn ExperienceSection(experiences: &'static [Experience]) -> impl IntoView {
    view! {
        <section id="experience" class="container mx-auto px-4 py-16 scroll-mt-20 section-content">
            <SectionHeading title="Experience" kicker="Career" />
            <ol class="relative border-l border-muted ml-3 space-y-10">
                {experiences
                    .iter()
                    .map(|job| view! { <Job job /> })
                    .collect_view()}
            </ol>
        </section>
    }
}

#[component]
fn Job(job: &'static Experience) -> impl IntoView {
    view! {
        <li class="ml-6">
            <span class="absolute -left-1.5 mt-1.5 h-3 w-3 rounded-full bg-foreground" />
            <div class="flex flex-wrap items-start justify-between gap-2">
                <div class="text-left">
                    <h3 class="font-bold">{job.title.as_str()}</h3>
                    <div class="text-muted-foreground">
                        {job.company.as_str()}
                        {job.location.as_deref().map(|l| format!(" · {l}"))}
                    </div>
                </div>
                <div class="shrink-0 text-right text-sm font-bold">
                    {format!("{} - {}", job.start, job.end)}
                </div>
            </div>
            <ul class="mt-3 list-disc pl-5 space-y-1 text-sm leading-relaxed">
                {job.bullets.iter().map(|b| view! { <li>{b.as_str()}</li> }).collect_view()}
            </ul>
            <Badges items=&job.stack />
        </li>
    }
}

#[component]
pub fn SkillsSection(skills: &'static [String]) -> impl IntoView {
    view! {
        <section id="skills" class="container mx-auto px-4 py-16 scroll-mt-20 section-content">
            <SectionHeading title="Skills" kicker="Toolbox" />
            <Badges items=skills />
        </section>
    }
}

#[component]
pub fn EducationSection(education: &'static [Education]) -> impl IntoView {
    view! {
        <section id="education" class="container mx-auto px-4 py-16 scroll-mt-20 section-content">
            <SectionHeading title="Education" kicker="Background" />
            <div class="grid gap-4 md:grid-cols-2">
                {education
                    .iter()
                    .map(|e| {
                        view! {
                            <div class="rounded-lg border p-4">
                                <strong>{e.school.as_str()}</strong>
                                <div>{e.credential.as_str()}</div>
                                <div class="text-sm text-muted-foreground">{e.time.as_str()}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
