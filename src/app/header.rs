use leptos::prelude::*;

use crate::content::Profile;

use super::theme::ThemeToggle;

/// Page sections in scroll order, as `(anchor id, nav label)`.
pub const SECTIONS: [(&str, &str); 11] = [
    ("about", "About"),
    ("expertise", "Expertise"),
    ("industries", "Industries"),
    ("experience", "Experience"),
    ("career-highlight", "Career Highlight"),
    ("projects", "Projects"),
    ("skills", "Skills"),
    ("education", "Education"),
    ("testimonials", "Testimonials"),
    ("philosophy", "Philosophy"),
    ("contact", "Contact"),
];

#[component]
pub fn Header(profile: Option<&'static Profile>) -> impl IntoView {
    view! {
        <header class="sticky top-0 z-40 border-b backdrop-blur bg-background/80">
            <div class="container mx-auto px-4 h-16 flex items-center justify-between">
                <a href="#home" class="font-semibold tracking-tight">
                    {profile.map(|p| p.name.as_str())}
                </a>
                <nav class="hidden md:flex items-center gap-4 text-sm">
                    {SECTIONS
                        .iter()
                        .map(|(id, label)| {
                            view! {
                                <a
                                    href=format!("#{id}")
                                    class="text-muted-foreground hover:text-foreground"
                                >
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="flex items-center gap-2">
                    <ThemeToggle />
                    {profile
                        .map(|p| {
                            view! {
                                <a
                                    href=p.linkedin.clone()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="text-muted-foreground hover:text-foreground"
                                    aria-label="LinkedIn"
                                >
                                    <i class="devicon-linkedin-plain" />
                                </a>
                                <a
                                    href=format!("mailto:{}", p.email)
                                    class="text-muted-foreground hover:text-foreground"
                                    aria-label="Email"
                                >
                                    "✉"
                                </a>
                            }
                        })}
                </div>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_anchors_are_unique() {
        let mut ids = SECTIONS.iter().map(|(id, _)| *id).collect::<Vec<_>>();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), SECTIONS.len());
        assert!(ids.iter().all(|id| !id.contains(' ') && !id.starts_with('#')));
    }

    #[test]
    fn test_industries_follow_expertise() {
        let pos = |anchor| SECTIONS.iter().position(|(id, _)| *id == anchor);
        assert_eq!(pos("industries"), pos("expertise").map(|i| i + 1));
    }
}
