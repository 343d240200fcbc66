use chrono::{DateTime, Datelike};
use leptos::{either::Either, prelude::*};
use leptos_meta::Title;

use crate::content::{site_content, Expertise, Industry, Profile, SiteContent, Testimonial};

use super::{
    avatar::Avatar,
    contact::ContactSection,
    projects::ProjectsSection,
    resume::{EducationSection, ExperienceSection, SkillsSection},
};

const BUILD_TIME: &str = env!("BUILD_TIME");

#[component]
pub fn HomePage() -> impl IntoView {
    match site_content() {
        Ok(content) => Either::Left(view! { <Portfolio content /> }),
        Err(e) => {
            log::error!("{e}");
            Either::Right(view! {
                <Title text="Unavailable" />
                <p class="py-32 text-center text-muted-foreground">
                    "This page's content is unavailable right now."
                </p>
            })
        }
    }
}

#[component]
fn Portfolio(content: &'static SiteContent) -> impl IntoView {
    view! {
        <Title text=content.profile.role.clone() />
        <Hero profile=&content.profile />
        <About profile=&content.profile />
        <ExpertiseSection expertise=&content.expertise />
        <IndustriesSection industries=&content.industries />
        <ExperienceSection experiences=&content.experiences />
        <TextSection
            id="career-highlight"
            title="Career Highlight"
            kicker="Milestone"
            body=&content.career_highlight
        />
        <ProjectsSection projects=&content.projects />
        <SkillsSection skills=&content.skills />
        <EducationSection education=&content.education />
        <TestimonialsSection testimonials=&content.testimonials />
        <TextSection id="philosophy" title="Philosophy" kicker="Approach" body=&content.philosophy />
        <ContactSection profile=&content.profile />
        <Footer name=&content.profile.name />
    }
}

#[component]
pub fn SectionHeading(title: &'static str, kicker: &'static str) -> impl IntoView {
    view! {
        <div class="mb-8">
            <p class="text-xs uppercase tracking-widest text-muted-foreground">{kicker}</p>
            <h2 class="text-2xl md:text-3xl font-bold">{title}</h2>
        </div>
    }
}

#[component]
pub fn Badges(items: &'static [String]) -> impl IntoView {
    view! {
        <div class="mt-3 flex flex-wrap gap-2">
            {items
                .iter()
                .map(|s| {
                    view! {
                        <span class="rounded-md border px-2 py-0.5 text-xs font-normal">
                            {s.as_str()}
                        </span>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
fn Hero(profile: &'static Profile) -> impl IntoView {
    view! {
        <section id="home" class="container mx-auto px-4 pt-24 pb-16 section-content">
            <p class="text-sm text-muted-foreground">{format!("📍 {}", profile.location)}</p>
            <h1 class="mt-2 text-4xl md:text-6xl font-bold tracking-tight">
                {profile.name.as_str()}
            </h1>
            <p class="mt-2 text-xl md:text-2xl text-muted-foreground">{profile.role.as_str()}</p>
            <div class="mt-8 flex flex-wrap gap-3">
                <a
                    href="#projects"
                    class="rounded-md bg-foreground px-5 py-2.5 text-background font-medium"
                >
                    "View projects"
                </a>
                <a href="#contact" class="rounded-md border px-5 py-2.5 font-medium">
                    "Get in touch"
                </a>
                <a
                    href=profile.github.clone()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="rounded-md border px-5 py-2.5 font-medium"
                >
                    <i class="devicon-github-plain mr-2" />
                    "GitHub"
                </a>
            </div>
        </section>
    }
}

#[component]
fn About(profile: &'static Profile) -> impl IntoView {
    view! {
        <section id="about" class="container mx-auto px-4 py-16 scroll-mt-20 section-content">
            <SectionHeading title="About" kicker="Profile" />
            <div class="grid md:grid-cols-[1fr_auto] gap-8 items-start">
                <p class="text-base leading-relaxed text-muted-foreground">
                    {profile.summary.as_str()}
                </p>
                <Avatar
                    image=profile.avatar.clone()
                    initials=profile.initials.clone()
                    alt=profile.name.clone()
                    size="h-40 w-40 text-4xl"
                />
            </div>
        </section>
    }
}

#[component]
fn ExpertiseSection(expertise: &'static [Expertise]) -> impl IntoView {
    view! {
        <section id="expertise" class="container mx-auto px-4 py-16 scroll-mt-20 section-content">
            <SectionHeading title="Key Areas of Expertise" kicker="What I do" />
            <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-3">
                {expertise
                    .iter()
                    .map(|e| {
                        view! {
                            <div class="rounded-lg border p-5 transition-transform hover:-translate-y-1">
                                <h3 class="font-semibold">{e.title.as_str()}</h3>
                                <p class="mt-2 text-sm text-muted-foreground leading-relaxed">
                                    {e.body.as_str()}
                                </p>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn IndustriesSection(industries: &'static [Industry]) -> impl IntoView {
    view! {
        <section id="industries" class="container mx-auto px-4 py-16 scroll-mt-20 section-content">
            <SectionHeading title="Industries Served" kicker="Domains" />
            <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4">
                {industries
                    .iter()
                    .map(|industry| {
                        view! {
                            <div class="group relative overflow-hidden rounded-lg border bg-card/95 p-5">
                                {industry
                                    .sketch
                                    .as_ref()
                                    .map(|sketch| {
                                        view! {
                                            <div
                                                class="absolute inset-0 bg-cover bg-center bg-no-repeat opacity-20 transition-opacity duration-500 group-hover:opacity-30"
                                                style:background-image=format!("url({sketch})")
                                                aria-hidden="true"
                                            />
                                        }
                                    })}
                                <div
                                    class=format!(
                                        "absolute -inset-2 rounded-xl bg-gradient-to-br {} blur-xl opacity-0 transition-opacity duration-500 group-hover:opacity-100",
                                        industry.accent,
                                    )
                                    aria-hidden="true"
                                />
                                <div class="relative">
                                    <h3 class="font-semibold">{industry.name.as_str()}</h3>
                                    <p class="mt-2 text-sm text-muted-foreground leading-relaxed">
                                        {industry.description.as_str()}
                                    </p>
                                </div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn TextSection(
    id: &'static str,
    title: &'static str,
    kicker: &'static str,
    body: &'static str,
) -> impl IntoView {
    view! {
        <section id=id class="container mx-auto px-4 py-16 scroll-mt-20 section-content">
            <SectionHeading title kicker />
            <blockquote class="max-w-3xl border-l-4 pl-4 text-lg leading-relaxed">{body}</blockquote>
        </section>
    }
}

#[component]
fn TestimonialsSection(testimonials: &'static [Testimonial]) -> impl IntoView {
    view! {
        <section id="testimonials" class="container mx-auto px-4 py-16 scroll-mt-20 section-content">
            <SectionHeading title="Testimonials" kicker="Kind words" />
            <div class="grid gap-4 md:grid-cols-3">
                {testimonials
                    .iter()
                    .map(|t| {
                        view! {
                            <figure class="flex flex-col justify-between rounded-lg border p-5">
                                <blockquote class="text-sm leading-relaxed">
                                    {format!("“{}”", t.quote)}
                                </blockquote>
                                <figcaption class="mt-4 flex items-center gap-3">
                                    <Avatar
                                        image=t.avatar.clone()
                                        initials=t.initials.clone()
                                        alt=t.name.clone()
                                    />
                                    <div>
                                        <div class="font-medium">{t.name.as_str()}</div>
                                        <div class="text-xs text-muted-foreground">
                                            {t.title.as_str()}
                                        </div>
                                    </div>
                                </figcaption>
                            </figure>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

fn build_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(BUILD_TIME)
        .ok()
        .map(|t| t.year())
}

#[component]
fn Footer(name: &'static str) -> impl IntoView {
    view! {
        <footer class="border-t py-8 text-center text-sm text-muted-foreground">
            {build_year().map(|y| format!("© {y} ")).unwrap_or_else(|| "© ".to_string())}
            {name}
        </footer>
    }
}
