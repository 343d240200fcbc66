use leptos::prelude::*;

use crate::content::Profile;

use super::{clipboard::CopyButton, homepage::SectionHeading};

#[component]
pub fn ContactSection(profile: &'static Profile) -> impl IntoView {
    view! {
        <section id="contact" class="container mx-auto px-4 py-16 scroll-mt-20 section-content">
            <SectionHeading title="Contact" kicker="Let's talk" />
            <div class="max-w-2xl rounded-lg border p-6">
                <p class="mb-6 text-lg">
                    "Open to collaboration, interesting conversations and new opportunities."
                </p>
                <ul class="space-y-3">
                    <li class="flex items-center gap-3">
                        <span aria-hidden="true">"✉"</span>
                        <a href=format!("mailto:{}", profile.email) class="hover:underline">
                            {profile.email.as_str()}
                        </a>
                        <CopyButton value=profile.email.clone() label="Email">
                            "⧉"
                        </CopyButton>
                    </li>
                    <li class="flex items-center gap-3">
                        <span aria-hidden="true">"☏"</span>
                        <a
                            href=format!("tel:{}", profile.phone.replace(' ', ""))
                            class="hover:underline"
                        >
                            {profile.phone.as_str()}
                        </a>
                        <CopyButton value=profile.phone.clone() label="Phone">
                            "⧉"
                        </CopyButton>
                    </li>
                    <li class="flex items-center gap-3">
                        <span aria-hidden="true">"📍"</span>
                        {profile.location.as_str()}
                    </li>
                </ul>
                <div class="mt-6 flex gap-4 text-2xl">
                    <a
                        href=profile.linkedin.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="LinkedIn Profile"
                    >
                        <i class="devicon-linkedin-plain" />
                    </a>
                    <a
                        href=profile.github.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        aria-label="GitHub Profile"
                    >
                        <i class="devicon-github-plain" />
                    </a>
                </div>
            </div>
        </section>
    }
}
