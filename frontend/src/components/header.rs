use yew::prelude::*;

/// Renders the application header
pub fn render_header() -> Html {
    html! {
        <header class="app-header">
            <h1><i class="fa-solid fa-shield-halved"></i> {" Fraud Detection Suite"}</h1>
            <p class="subtitle">{"Check job postings, internship offers and recruitment messages before you apply"}</p>
        </header>
    }
}
