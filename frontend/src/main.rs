mod api;
mod components;
mod config;

use shared::Domain;
use yew::prelude::*;

use components::ensemble_form::EnsembleForm;
use components::header::render_header;
use components::text_analyzer::TextAnalyzer;
use components::theme_toggle::ThemeToggle;
use config::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Page {
    Job,
    Internship,
    Text,
}

impl Page {
    const ALL: [Page; 3] = [Page::Job, Page::Internship, Page::Text];

    fn title(self) -> &'static str {
        match self {
            Page::Job => "Job Posting Detector",
            Page::Internship => "Internship Scam Detector",
            Page::Text => "Text Analyzer",
        }
    }
}

enum Msg {
    Navigate(Page),
}

struct App {
    page: Page,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self { page: Page::Job }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Navigate(page) => {
                let changed = self.page != page;
                self.page = page;
                changed
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        let body = match self.page {
            Page::Job => html! { <EnsembleForm key="job" domain={Domain::Job} /> },
            Page::Internship => html! { <EnsembleForm key="internship" domain={Domain::Internship} /> },
            Page::Text => html! { <TextAnalyzer key="text" /> },
        };

        html! {
            <div class="container">
                <div class="top-bar">
                    <nav class="nav-tabs">
                        { for Page::ALL.iter().map(|&page| html! {
                            <button
                                class={classes!("nav-tab", (page == self.page).then_some("active"))}
                                onclick={link.callback(move |_| Msg::Navigate(page))}
                            >
                                { page.title() }
                            </button>
                        })}
                    </nav>
                    <ThemeToggle />
                </div>

                { render_header() }

                <main class="card">
                    <h2 class="page-title">{ self.page.title() }</h2>
                    { body }
                </main>

                <footer class="app-footer">
                    <p>{"Predictions come from an ensemble of machine-learning models and are advisory only. Always verify an employer independently."}</p>
                </footer>
            </div>
        }
    }
}

fn main() {
    let config = AppConfig::from_build_env();
    wasm_logger::init(wasm_logger::Config::new(config.log_level));
    log::info!("App starting...");
    if !config.api_base_url.is_empty() {
        log::info!("Using API base {}", config.api_base_url);
    }
    yew::Renderer::<App>::new().render();
}
