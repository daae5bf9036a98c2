use gloo_events::EventListener;
use shared::theme::{Theme, ThemeSwitcher};
use yew::prelude::*;

use super::utils::{LocalThemeStore, apply_theme_attribute};

pub enum Msg {
    ToggleDropdown,
    Select(Theme),
    CloseDropdown,
}

/// Theme button with a dropdown of the available themes.
pub struct ThemeToggle {
    switcher: ThemeSwitcher<LocalThemeStore>,
    document_click: Option<EventListener>,
}

impl Component for ThemeToggle {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let switcher = ThemeSwitcher::new(LocalThemeStore);
        apply_theme_attribute(switcher.theme());
        log::info!("Theme initialised to {}", switcher.theme());

        let document_click = web_sys::window().and_then(|window| window.document()).map(|document| {
            let link = ctx.link().clone();
            EventListener::new(&document, "click", move |_| link.send_message(Msg::CloseDropdown))
        });
        if document_click.is_none() {
            log::error!("No document available, theme dropdown will only close on selection");
        }

        Self { switcher, document_click }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ToggleDropdown => {
                self.switcher.toggle_dropdown();
                true
            }
            Msg::Select(theme) => {
                let applied = self.switcher.select_theme(theme);
                apply_theme_attribute(applied);
                true
            }
            Msg::CloseDropdown => self.switcher.close_dropdown(),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let current = self.switcher.theme();

        html! {
            <div class="theme-switcher">
                <button
                    class="theme-toggle"
                    title="Change theme"
                    onclick={link.callback(|e: MouseEvent| {
                        e.stop_propagation();
                        Msg::ToggleDropdown
                    })}
                >
                    <span class="theme-icon">{ current.icon() }</span>
                    <span class="theme-text">{ current.label() }</span>
                </button>
                <div class={classes!("theme-dropdown", self.switcher.is_open().then_some("active"))}>
                    { for self.switcher.options().map(|option| {
                        let theme = option.theme;
                        html! {
                            <button
                                class={classes!("theme-option", option.active.then_some("active"))}
                                data-theme={theme.as_ref().to_string()}
                                onclick={link.callback(move |_| Msg::Select(theme))}
                            >
                                { format!("{} {}", theme.icon(), theme.label()) }
                            </button>
                        }
                    })}
                </div>
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.document_click.take();
    }
}
