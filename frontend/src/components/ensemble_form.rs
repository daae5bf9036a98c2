use std::rc::Rc;

use shared::report::EnsembleReport;
use shared::request::{FieldInput, FieldSpec};
use shared::{Domain, FormSubmitController, FormValues, PredictionResponse, SubmissionView};
use wasm_bindgen_futures::spawn_local;
use yew::html::Scope;
use yew::prelude::*;

use super::results::render_ensemble_report;
use super::utils::{alert, control_value, scroll_into_view};
use crate::api::GlooTransport;
use crate::config::AppConfig;

pub enum Msg {
    Submit,
    SetLoading(bool),
    HideResults,
    Render(PredictionResponse),
}

#[derive(Properties, PartialEq)]
pub struct EnsembleFormProps {
    pub domain: Domain,
}

/// Feature form for one domain, backed by the ensemble prediction endpoint.
pub struct EnsembleForm {
    controller: Rc<FormSubmitController<GlooTransport>>,
    inputs: Vec<(FieldSpec, NodeRef)>,
    spinner_ref: NodeRef,
    results_ref: NodeRef,
    loading: bool,
    report: Option<EnsembleReport>,
    scroll_pending: bool,
}

/// What the controller drives while a submission runs.
struct EnsembleView {
    link: Scope<EnsembleForm>,
}

impl SubmissionView for EnsembleView {
    type Response = PredictionResponse;

    fn hide_results(&self) {
        self.link.send_message(Msg::HideResults);
    }

    fn show_loading(&self) {
        self.link.send_message(Msg::SetLoading(true));
    }

    fn hide_loading(&self) {
        self.link.send_message(Msg::SetLoading(false));
    }

    fn render(&self, response: PredictionResponse) {
        self.link.send_message(Msg::Render(response));
    }

    fn notify(&self, message: &str) {
        alert(message);
    }
}

impl EnsembleForm {
    fn handle_submit(&self, ctx: &Context<Self>) -> bool {
        if self.controller.is_busy() {
            log::warn!("{} form submitted while a request is in flight", ctx.props().domain);
            return false;
        }
        if self.spinner_ref.get().is_none() || self.results_ref.get().is_none() {
            log::error!("Required element not found: loading indicator or results container");
            return false;
        }

        let domain = ctx.props().domain;
        // Unmounted inputs stay absent and surface as a missing element.
        let values: FormValues = self
            .inputs
            .iter()
            .filter_map(|(field, node)| control_value(node).map(|raw| (field.id, raw)))
            .collect();

        let controller = Rc::clone(&self.controller);
        let view = EnsembleView { link: ctx.link().clone() };
        spawn_local(async move {
            controller.submit(&view, move || domain.build_request(&values)).await;
        });
        false
    }

    fn render_field(field: &FieldSpec, node: &NodeRef) -> Html {
        let control = match field.input {
            FieldInput::Number { placeholder } => html! {
                <input
                    ref={node.clone()}
                    type="number"
                    id={field.id}
                    name={field.id}
                    step="any"
                    placeholder={placeholder}
                    required=true
                />
            },
            FieldInput::YesNo => html! {
                <select ref={node.clone()} id={field.id} name={field.id} required=true>
                    <option value="1">{"Yes"}</option>
                    <option value="0">{"No"}</option>
                </select>
            },
        };

        html! {
            <div class="form-group" key={field.id}>
                <label for={field.id}>{ field.label }</label>
                { control }
            </div>
        }
    }
}

impl Component for EnsembleForm {
    type Message = Msg;
    type Properties = EnsembleFormProps;

    fn create(ctx: &Context<Self>) -> Self {
        let domain = ctx.props().domain;
        let transport = GlooTransport::new(&AppConfig::from_build_env());

        Self {
            controller: Rc::new(FormSubmitController::new(transport, domain.endpoint())),
            inputs: domain.fields().iter().map(|field| (*field, NodeRef::default())).collect(),
            spinner_ref: NodeRef::default(),
            results_ref: NodeRef::default(),
            loading: false,
            report: None,
            scroll_pending: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Submit => self.handle_submit(ctx),
            Msg::SetLoading(loading) => {
                self.loading = loading;
                true
            }
            Msg::HideResults => self.report.take().is_some(),
            Msg::Render(response) => {
                let report = EnsembleReport::build(ctx.props().domain, &response);
                log::info!(
                    "{} verdict: {} at {}",
                    ctx.props().domain,
                    report.verdict.label,
                    report.confidence
                );
                self.report = Some(report);
                self.scroll_pending = true;
                true
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().domain == old_props.domain {
            return false;
        }
        *self = <Self as Component>::create(ctx);
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let domain = ctx.props().domain;
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <section class="detector">
                <form class="detector-form" id={format!("{}Form", domain)} {onsubmit}>
                    <div class="form-grid">
                        { for self.inputs.iter().map(|(field, node)| Self::render_field(field, node)) }
                    </div>
                    <button type="submit" class="analyze-btn" disabled={self.loading}>
                        { if self.loading { "Analyzing..." } else { "Analyze" } }
                    </button>
                </form>

                <div ref={self.spinner_ref.clone()} class={classes!("loading", self.loading.then_some("active"))}>
                    <div class="spinner"></div>
                    <p>{"Running ensemble models..."}</p>
                </div>

                <div
                    ref={self.results_ref.clone()}
                    class={classes!("results", self.report.is_some().then_some("active"))}
                >
                    { self.report.as_ref().map(render_ensemble_report).unwrap_or_default() }
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
