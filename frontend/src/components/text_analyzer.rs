use std::rc::Rc;

use shared::request::MIN_TEXT_CHARS;
use shared::{
    Domain, Endpoint, FormSubmitController, SubmissionView, TextAnalysisRequest, TextAnalysisResponse,
    TextReport,
};
use strum::IntoEnumIterator;
use wasm_bindgen_futures::spawn_local;
use yew::html::Scope;
use yew::prelude::*;

use super::text_results::render_text_report;
use super::utils::{alert, control_value, scroll_into_view};
use crate::api::GlooTransport;
use crate::config::AppConfig;

pub enum Msg {
    SelectKind(Domain),
    Input(usize),
    Submit,
    SetLoading(bool),
    HideResults,
    Render(TextAnalysisResponse),
}

fn tab_label(kind: Domain) -> &'static str {
    match kind {
        Domain::Job => "💼 Job Posting",
        Domain::Internship => "🎓 Internship Offer",
    }
}

/// Free-text analyzer for pasted postings and recruiter messages.
pub struct TextAnalyzer {
    controller: Rc<FormSubmitController<GlooTransport>>,
    kind: Domain,
    char_count: usize,
    text_ref: NodeRef,
    spinner_ref: NodeRef,
    results_ref: NodeRef,
    loading: bool,
    report: Option<TextReport>,
    scroll_pending: bool,
}

struct TextView {
    link: Scope<TextAnalyzer>,
}

impl SubmissionView for TextView {
    type Response = TextAnalysisResponse;

    fn hide_results(&self) {
        self.link.send_message(Msg::HideResults);
    }

    fn show_loading(&self) {
        self.link.send_message(Msg::SetLoading(true));
    }

    fn hide_loading(&self) {
        self.link.send_message(Msg::SetLoading(false));
    }

    fn render(&self, response: TextAnalysisResponse) {
        self.link.send_message(Msg::Render(response));
    }

    fn notify(&self, message: &str) {
        alert(message);
    }
}

impl TextAnalyzer {
    fn handle_submit(&self, ctx: &Context<Self>) -> bool {
        if self.controller.is_busy() {
            log::warn!("Text analysis submitted while a request is in flight");
            return false;
        }
        let Some(raw) = control_value(&self.text_ref) else {
            log::error!("Required element not found: #jobText");
            return false;
        };
        if self.spinner_ref.get().is_none() || self.results_ref.get().is_none() {
            log::error!("Required element not found: loading indicator or results container");
            return false;
        }

        // Short text is rejected before the loading indicator ever shows.
        let request = match TextAnalysisRequest::new(&raw, self.kind) {
            Ok(request) => request,
            Err(err) => {
                log::info!("Text analysis rejected: {}", err);
                alert(&err.user_message());
                return false;
            }
        };

        let controller = Rc::clone(&self.controller);
        let view = TextView { link: ctx.link().clone() };
        spawn_local(async move {
            controller.submit(&view, move || Ok(request)).await;
        });
        false
    }

    fn render_tabs(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="tab-buttons">
                { for Domain::iter().map(|kind| html! {
                    <button
                        type="button"
                        class={classes!("tab-button", (kind == self.kind).then_some("active"))}
                        data-type={kind.as_ref().to_string()}
                        onclick={ctx.link().callback(move |_| Msg::SelectKind(kind))}
                    >
                        { tab_label(kind) }
                    </button>
                })}
            </div>
        }
    }
}

impl Component for TextAnalyzer {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        let transport = GlooTransport::new(&AppConfig::from_build_env());

        Self {
            controller: Rc::new(FormSubmitController::new(transport, Endpoint::AnalyzeText)),
            kind: Domain::default(),
            char_count: 0,
            text_ref: NodeRef::default(),
            spinner_ref: NodeRef::default(),
            results_ref: NodeRef::default(),
            loading: false,
            report: None,
            scroll_pending: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SelectKind(kind) => {
                let changed = self.kind != kind;
                self.kind = kind;
                changed
            }
            Msg::Input(count) => {
                self.char_count = count;
                true
            }
            Msg::Submit => self.handle_submit(ctx),
            Msg::SetLoading(loading) => {
                self.loading = loading;
                true
            }
            Msg::HideResults => self.report.take().is_some(),
            Msg::Render(response) => {
                let report = TextReport::build(&response);
                log::info!("Text analysis category: {:?}, risk {}", report.status.category, report.risk_score);
                self.report = Some(report);
                self.scroll_pending = true;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let text_ref = self.text_ref.clone();
        let oninput = link.callback(move |_: InputEvent| {
            Msg::Input(control_value(&text_ref).map_or(0, |text| text.chars().count()))
        });
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });
        let counter_class = (self.char_count < MIN_TEXT_CHARS).then_some("too-short");

        html! {
            <section class="detector">
                <form class="detector-form" id="textAnalyzerForm" {onsubmit}>
                    { self.render_tabs(ctx) }
                    <div class="form-group">
                        <label for="jobText">{"Paste the posting or message"}</label>
                        <textarea
                            ref={self.text_ref.clone()}
                            id="jobText"
                            name="text"
                            rows="10"
                            placeholder="Paste the full job description, internship offer or recruiter message here..."
                            {oninput}
                        ></textarea>
                        <div class={classes!("char-counter", counter_class)}>
                            <span id="charCount">{ self.char_count.to_string() }</span>
                            { format!(" characters (minimum {})", MIN_TEXT_CHARS) }
                        </div>
                    </div>
                    <button type="submit" class="analyze-btn" disabled={self.loading}>
                        { if self.loading { "Analyzing..." } else { "Analyze Text" } }
                    </button>
                </form>

                <div ref={self.spinner_ref.clone()} class={classes!("loading", self.loading.then_some("active"))}>
                    <div class="spinner"></div>
                    <p>{"Analyzing text patterns..."}</p>
                </div>

                <div
                    ref={self.results_ref.clone()}
                    class={classes!("results", self.report.is_some().then_some("active"))}
                >
                    { self.report.as_ref().map(render_text_report).unwrap_or_default() }
                </div>
            </section>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if self.scroll_pending {
            self.scroll_pending = false;
            scroll_into_view(&self.results_ref);
        }
    }
}
