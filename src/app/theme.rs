use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Class put on `<html>`; tailwind's `dark:` variants key off it.
    pub fn class(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    fn toggle_label(self) -> &'static str {
        match self {
            Self::Light => "Switch to dark theme",
            Self::Dark => "Switch to light theme",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Self::Light => "☾",
            Self::Dark => "☀",
        }
    }
}

/// Starts light on every visit; the toggle flips it for the session.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    theme: RwSignal<Theme>,
}

impl ThemeContext {
    pub fn theme(&self) -> Theme {
        self.theme.get()
    }

    pub fn toggle(&self) {
        self.theme.update(|t| *t = t.toggled());
    }
}

pub fn provide_theme() -> ThemeContext {
    let ctx = ThemeContext {
        theme: RwSignal::new(Theme::default()),
    };
    provide_context(ctx);
    ctx
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = expect_context::<ThemeContext>();
    view! {
        <button
            type="button"
            class="h-9 w-9 rounded-md text-lg text-muted-foreground hover:text-foreground"
            aria-label=move || ctx.theme().toggle_label()
            title=move || ctx.theme().toggle_label()
            on:click=move |_| ctx.toggle()
        >
            {move || ctx.theme().icon()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_defaults_to_light() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::default().class(), "light");
    }

    #[test]
    fn test_context_toggles_from_light() {
        let owner = Owner::new();
        owner.set();
        let ctx = provide_theme();
        assert_eq!(ctx.theme(), Theme::Light);
        ctx.toggle();
        assert_eq!(ctx.theme(), Theme::Dark);
        ctx.toggle();
        assert_eq!(ctx.theme(), Theme::Light);
    }

    #[test]
    fn test_theme_toggle() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.class(), "dark");
        assert_eq!(Theme::Light.class(), "light");
        assert_ne!(Theme::Light.toggle_label(), Theme::Dark.toggle_label());
    }
}
