//! Root component of the calculator page: navigation, theme toggle, the
//! calculator form with its custom-allocation section, and the results area.

use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::allocation::{self, ToggleOutcome, INVESTMENT_TYPES};
use crate::api::{self, CalcOutcome, CalcPayload};
use crate::dom;
use crate::format;
use crate::theme::{self, Theme};

const MSG_EMPTY_AMOUNT: &str = "Por favor, insira um valor para investimento.";
const MSG_LAST_TYPE: &str = "Você deve selecionar pelo menos um tipo de investimento.";

#[derive(Clone, Copy, PartialEq, Debug)]
enum AlertLevel {
    Warning,
    Danger,
}

impl AlertLevel {
    fn css_class(self) -> &'static str {
        match self {
            AlertLevel::Warning => "alert alert-warning alert-dismissible fade show",
            AlertLevel::Danger => "alert alert-danger alert-dismissible fade show",
        }
    }
}

/// What the results area currently shows: nothing, the server-rendered
/// fragment, or an alert banner.
#[derive(Clone, PartialEq, Debug, Default)]
enum ResultsView {
    #[default]
    Empty,
    Fragment(AttrValue),
    Alert { level: AlertLevel, message: String },
}

/// Results area state. `epoch` changes on every show, so presenting the same
/// banner twice still re-runs the scroll effect.
#[derive(Clone, PartialEq, Debug, Default)]
struct ResultsState {
    epoch: u32,
    view: ResultsView,
}

impl ResultsState {
    fn show(&self, view: ResultsView) -> ResultsState {
        ResultsState {
            epoch: self.epoch.wrapping_add(1),
            view,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProps {
    /// Chart re-render capability, injected at mount when the page provides
    /// one. Fired after theme changes and successful calculations.
    #[prop_or_default]
    pub chart_refresh: Option<Callback<()>>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let theme = use_state(theme::load);
    let amount = use_state(String::new);
    let custom_allocation = use_state(|| false);
    let selected_types = use_state(allocation::default_selection);
    let submitting = use_state(|| false);
    let results = use_state(ResultsState::default);

    // Keep the body class in sync with the flag, including the initial load.
    use_effect_with_deps(
        move |theme| {
            theme::apply(*theme);
            || ()
        },
        *theme,
    );

    {
        let chart_refresh = props.chart_refresh.clone();
        use_effect_with_deps(
            move |state| {
                match &state.view {
                    ResultsView::Fragment(_) => {
                        dom::scroll_to_element("results");
                        dom::init_widget_library();
                        if let Some(refresh) = &chart_refresh {
                            refresh.emit(());
                        }
                    }
                    ResultsView::Alert { .. } => {
                        dom::scroll_to_element("results");
                    }
                    ResultsView::Empty => {}
                }
                || ()
            },
            (*results).clone(),
        );
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        let chart_refresh = props.chart_refresh.clone();
        Callback::from(move |_| {
            let next = theme.flipped();
            theme::store(next);
            theme.set(next);
            if let Some(refresh) = &chart_refresh {
                refresh.emit(());
            }
        })
    };

    let on_amount_input = {
        let amount = amount.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            amount.set(format::mask_amount(&input.value()));
        })
    };

    let on_custom_toggle = {
        let custom_allocation = custom_allocation.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            custom_allocation.set(input.checked());
        })
    };

    let on_dismiss = {
        let results = results.clone();
        Callback::from(move |_| results.set(results.show(ResultsView::Empty)))
    };

    let on_submit = {
        let amount = amount.clone();
        let custom_allocation = custom_allocation.clone();
        let selected_types = selected_types.clone();
        let submitting = submitting.clone();
        let results = results.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            // A submit while a request is in flight is ignored.
            if *submitting {
                return;
            }

            let valor = match api::validate_amount(&amount) {
                Some(valor) => valor,
                None => {
                    results.set(results.show(ResultsView::Alert {
                        level: AlertLevel::Warning,
                        message: MSG_EMPTY_AMOUNT.to_string(),
                    }));
                    return;
                }
            };

            let tipos = if *custom_allocation {
                Some(allocation::selected_ids(&selected_types))
            } else {
                None
            };

            log::debug!("enviando valor do investimento: {}", valor);
            if let Some(tipos) = &tipos {
                log::debug!("tipos de investimento selecionados: {:?}", tipos);
            }

            results.set(results.show(ResultsView::Empty));
            submitting.set(true);

            let submitting = submitting.clone();
            let results = results.clone();
            spawn_local(async move {
                let payload = CalcPayload { valor, tipos };
                match api::submit(&payload).await {
                    Ok(CalcOutcome::Success { html }) => {
                        results.set(results.show(ResultsView::Fragment(AttrValue::from(html))));
                    }
                    Ok(CalcOutcome::Failure { message }) => {
                        log::warn!("cálculo recusado pelo servidor: {}", message);
                        results.set(results.show(ResultsView::Alert {
                            level: AlertLevel::Danger,
                            message,
                        }));
                    }
                    Err(err) => {
                        log::warn!("erro na requisição: {}", err);
                        results.set(results.show(ResultsView::Alert {
                            level: AlertLevel::Danger,
                            message: format!("Erro ao processar a solicitação: {}", err),
                        }));
                    }
                }
                submitting.set(false);
            });
        })
    };

    let amount_preview = format::parse_amount(&amount).map(format::format_currency);
    let share = if selected_types.is_empty() {
        0.0
    } else {
        100.0 / selected_types.len() as f64
    };

    html! {
        <>
            <header class="navbar navbar-expand-lg border-bottom">
                <div class="container">
                    <a class="navbar-brand" href="#">{"Calculadora de Investimentos"}</a>
                    <nav class="d-flex align-items-center gap-3">
                        { nav_link("Calculadora", "calculadora") }
                        { nav_link("Resultados", "results") }
                        { nav_link("Sobre", "sobre") }
                        <button type="button" id="theme-toggle" class="btn btn-outline-secondary btn-sm" onclick={on_toggle_theme}>
                            { if *theme == Theme::Dark { icon_sun() } else { icon_moon() } }
                            <span class="ms-2">{ theme.toggle_label() }</span>
                        </button>
                    </nav>
                </div>
            </header>

            <main class="container py-4">
                <section id="calculadora" class="mb-4">
                    <h1 class="h3 mb-3">{"Monte sua carteira"}</h1>
                    <form id="calculator-form" onsubmit={on_submit}>
                        <div class="mb-3">
                            <label class="form-label" for="investment-amount">{"Valor para investir (R$)"}</label>
                            <input
                                type="text"
                                id="investment-amount"
                                class="form-control"
                                inputmode="decimal"
                                placeholder="10.000,00"
                                autocomplete="off"
                                value={(*amount).clone()}
                                oninput={on_amount_input}
                            />
                            {
                                if let Some(preview) = amount_preview {
                                    html! { <div class="form-text">{ format!("Valor informado: {}", preview) }</div> }
                                } else {
                                    html! {}
                                }
                            }
                        </div>

                        <div class="form-check form-switch mb-2">
                            <input
                                type="checkbox"
                                class="form-check-input"
                                id="distribuicao-personalizada"
                                checked={*custom_allocation}
                                onchange={on_custom_toggle}
                            />
                            <label class="form-check-label" for="distribuicao-personalizada">
                                {"Distribuição personalizada"}
                            </label>
                        </div>

                        {
                            if *custom_allocation {
                                html! {
                                    <div id="opcoes-distribuicao" class="border rounded p-3 mb-3">
                                        <p class="mb-2">
                                            { format!("Cada tipo selecionado recebe {} da carteira.", format::format_percent(share)) }
                                        </p>
                                        { for INVESTMENT_TYPES.iter().map(|tipo| {
                                            let checked = selected_types.contains(tipo.id);
                                            let onchange = {
                                                let selected_types = selected_types.clone();
                                                let results = results.clone();
                                                let id = tipo.id;
                                                Callback::from(move |e: Event| {
                                                    match allocation::toggle_type(&selected_types, id) {
                                                        ToggleOutcome::Toggled(next) => selected_types.set(next),
                                                        ToggleOutcome::LastRemaining => {
                                                            // Undo the browser-side uncheck.
                                                            let input: HtmlInputElement = e.target_unchecked_into();
                                                            input.set_checked(true);
                                                            results.set(results.show(ResultsView::Alert {
                                                                level: AlertLevel::Warning,
                                                                message: MSG_LAST_TYPE.to_string(),
                                                            }));
                                                        }
                                                    }
                                                })
                                            };
                                            html! {
                                                <div class="form-check" key={tipo.id}>
                                                    <input
                                                        type="checkbox"
                                                        class="form-check-input tipo-investimento"
                                                        id={format!("tipo-{}", tipo.id)}
                                                        value={tipo.id}
                                                        checked={checked}
                                                        onchange={onchange}
                                                    />
                                                    <label class="form-check-label" for={format!("tipo-{}", tipo.id)}>
                                                        { tipo.label }
                                                    </label>
                                                </div>
                                            }
                                        }) }
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }

                        <button type="submit" class="btn btn-primary" disabled={*submitting}>
                            { if *submitting { "Calculando..." } else { "Calcular" } }
                        </button>
                    </form>
                </section>

                <div id="loading-indicator" class={if *submitting { "text-center my-4" } else { "d-none" }}>
                    <div class="spinner-border text-primary" role="status">
                        <span class="visually-hidden">{"Calculando..."}</span>
                    </div>
                    <p class="mt-2">{"Calculando a distribuição da carteira..."}</p>
                </div>

                <section id="results" class="mb-4">
                    <div id="results-container">
                        {
                            match &results.view {
                                ResultsView::Empty => html! {},
                                ResultsView::Fragment(fragment) => Html::from_html_unchecked(fragment.clone()),
                                ResultsView::Alert { level, message } => html! {
                                    <div class={level.css_class()} role="alert">
                                        { message.clone() }
                                        <button
                                            type="button"
                                            class="btn-close"
                                            aria-label="Fechar"
                                            onclick={on_dismiss}
                                        ></button>
                                    </div>
                                },
                            }
                        }
                    </div>
                </section>

                <section id="sobre" class="border-top pt-4">
                    <h2 class="h5">{"Sobre"}</h2>
                    <p class="text-muted mb-0">
                        {"A calculadora distribui o valor informado entre fundos imobiliários, \
                          ações, ETFs e renda fixa, com base nas recomendações atuais da carteira."}
                    </p>
                </section>
            </main>
        </>
    }
}

fn nav_link(label: &'static str, target: &'static str) -> Html {
    let onclick = Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        dom::scroll_to_element(target);
    });
    html! {
        <a class="nav-link" href={format!("#{}", target)} onclick={onclick}>{ label }</a>
    }
}

fn icon_base(path: &'static str) -> Html {
    html! {
        <svg width="16" height="16" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d={path}></path>
        </svg>
    }
}

fn icon_moon() -> Html {
    icon_base("M21 12.79A9 9 0 1111.21 3a7 7 0 109.79 9.79z")
}

fn icon_sun() -> Html {
    icon_base("M12 7a5 5 0 100 10 5 5 0 000-10zM12 1v2M12 21v2M4.22 4.22l1.42 1.42M18.36 18.36l1.42 1.42M1 12h2M21 12h2M4.22 19.78l1.42-1.42M18.36 5.64l1.42-1.42")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn warning(message: &str) -> ResultsView {
        ResultsView::Alert {
            level: AlertLevel::Warning,
            message: message.to_string(),
        }
    }

    #[test]
    fn showing_the_same_banner_twice_still_changes_the_state() {
        let first = ResultsState::default().show(warning("valor vazio"));
        let second = first.show(warning("valor vazio"));
        // The scroll effect is keyed on this state, so a repeated banner must
        // not compare equal to the previous one.
        assert_eq!(first.view, second.view);
        assert_ne!(first, second);
    }

    #[test]
    fn show_replaces_the_view() {
        let state = ResultsState::default().show(warning("aviso"));
        assert_eq!(state.view, warning("aviso"));
        let cleared = state.show(ResultsView::Empty);
        assert_eq!(cleared.view, ResultsView::Empty);
        assert_ne!(cleared, ResultsState::default());
    }
}
