use std::rc::Rc;

use log::info;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::SpecTab;
use crate::hooks::use_hover;
use crate::sections::SPECS_ID;
use crate::specs::{SpecField, SpecificationDocument};
use crate::state::{Selection, SelectionAction};
use crate::styles;

#[derive(Properties, PartialEq)]
struct TabButtonProps {
    tab: SpecTab,
    active: bool,
    on_select: Callback<SpecTab>,
}

#[function_component(TabButton)]
fn tab_button(props: &TabButtonProps) -> Html {
    let hover = use_hover();
    let onclick = {
        let on_select = props.on_select.clone();
        let tab = props.tab;
        Callback::from(move |_: MouseEvent| on_select.emit(tab))
    };

    html! {
        <button
            class="spec-tab"
            role="tab"
            aria-selected={props.active.to_string()}
            style={styles::spec_tab(props.active, hover.hovered)}
            onclick={onclick}
            onmouseenter={hover.onmouseenter}
            onmouseleave={hover.onmouseleave}
        >
            { props.tab.label() }
        </button>
    }
}

fn field_grid(fields: Vec<SpecField>) -> Html {
    html! {
        <div class="spec-fields">
            { for fields.into_iter().map(|field| html! {
                <div class="spec-field" key={field.key.clone()}>
                    <div class="spec-label muted">{ field.label }</div>
                    <div class="spec-value">{ field.value }</div>
                </div>
            }) }
        </div>
    }
}

// A labelled value; empty values are left out.
fn spec_row(label: &'static str, value: &str) -> Html {
    if value.trim().is_empty() {
        return html! {};
    }
    html! {
        <div class="spec-field">
            <div class="spec-label muted">{ label }</div>
            <div class="spec-value">{ value.to_string() }</div>
        </div>
    }
}

fn spec_group(title: &'static str, rows: Html) -> Html {
    html! {
        <div class="spec-group">
            <h3 class="panel-title">{ title }</h3>
            <div class="spec-group-rows">{ rows }</div>
        </div>
    }
}

fn chassis_panel(doc: &SpecificationDocument) -> Html {
    let chassi = &doc.chassi;
    html! {
        <div class="spec-groups">
            { spec_group("Chassi", html! {
                <>
                    { spec_row("Quadro", &chassi.quadro) }
                    { spec_row("Braço Oscilante", &chassi.braco_oscilante) }
                </>
            }) }
            { spec_group("Suspensão", html! {
                <>
                    { spec_row("Dianteira", &chassi.suspensao_dianteira) }
                    { spec_row("Traseira", &chassi.suspensao_traseira) }
                </>
            }) }
            { spec_group("Rodas & Pneus", html! {
                <>
                    { spec_row("Dianteira", &chassi.rodas.dianteira) }
                    { spec_row("Traseira", &chassi.rodas.traseira) }
                </>
            }) }
            { spec_group("Freios", html! {
                <>
                    { spec_row("Dianteiro", &chassi.freios.dianteiro) }
                    { spec_row("Traseiro", &chassi.freios.traseiro) }
                </>
            }) }
        </div>
    }
}

fn text_group(title: &'static str, value: &str) -> Html {
    if value.trim().is_empty() {
        return html! {};
    }
    spec_group(title, html! { <div class="spec-value">{ value.to_string() }</div> })
}

fn equipment_panel(doc: &SpecificationDocument) -> Html {
    let equipamentos = &doc.equipamentos;

    html! {
        <div class="spec-groups">
            { text_group("Iluminação", &equipamentos.iluminacao) }
            { text_group("Painel", &equipamentos.painel) }
            { spec_group("Sistemas de Segurança", html! {
                <ul class="spec-list">
                    { for equipamentos.seguranca.iter().map(|item| html! {
                        <li><span class="bullet">{"•"}</span>{ item.clone() }</li>
                    }) }
                </ul>
            }) }
            { text_group("Ergonomia", &equipamentos.ergonomia) }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct SpecSheetProps {
    pub selection: Selection,
    pub specs: Rc<SpecificationDocument>,
}

#[function_component(SpecSheet)]
pub fn spec_sheet(props: &SpecSheetProps) -> Html {
    let active = props.selection.active_spec_tab();
    let doc = &props.specs;

    let on_select = {
        let selection = props.selection.clone();
        Callback::from(move |tab: SpecTab| {
            info!("Spec tab selected: {}", tab.id());
            selection.dispatch(SelectionAction::SelectSpecTab(tab.id().to_string()));
        })
    };

    let panel = match active {
        SpecTab::Motor => field_grid(doc.motor_fields()),
        SpecTab::Chassi => chassis_panel(doc),
        SpecTab::Dimensoes => field_grid(doc.dimension_fields()),
        SpecTab::Equipamentos => equipment_panel(doc),
    };

    html! {
        <section class="section spec-sheet" id={SPECS_ID}>
            <div class="container">
                <h2 class="section-title">{"Ficha Técnica Completa"}</h2>

                <div class="spec-tabs" role="tablist">
                    { for SpecTab::ALL.into_iter().map(|tab| html! {
                        <TabButton
                            key={tab.id()}
                            tab={tab}
                            active={props.selection.is_tab_active(tab)}
                            on_select={on_select.clone()}
                        />
                    }) }
                </div>

                <div class="spec-panel" role="tabpanel" style={styles::glass_panel(0.15)}>
                    { panel }
                </div>

                <Reveal class="spec-panel features-panel" style={styles::glass_panel(0.15)}>
                    <h3 class="panel-title">{"Características & Diferenciais"}</h3>
                    <div class="feature-grid">
                        { for doc.caracteristicas.iter().map(|item| html! {
                            <div class="feature-item">
                                <span class="check">{"✓"}</span>
                                <span class="muted">{ item.clone() }</span>
                            </div>
                        }) }
                    </div>
                </Reveal>
            </div>

            <style>
                {r#"
                    .spec-tabs {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        gap: 0.75rem;
                        margin-bottom: 2rem;
                    }

                    .spec-tab {
                        font-family: 'Inter', system-ui, sans-serif;
                        font-weight: 600;
                        padding: 0.75rem 1.5rem;
                        border-radius: 12px;
                        cursor: pointer;
                        transition: all 0.3s ease;
                    }

                    .spec-panel {
                        border-radius: 24px;
                        padding: 2rem;
                        margin-bottom: 2rem;
                    }

                    .spec-fields,
                    .spec-groups,
                    .feature-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1.5rem 2rem;
                    }

                    .spec-field {
                        border-bottom: 1px solid rgba(184, 189, 195, 0.1);
                        padding-bottom: 1rem;
                    }

                    .spec-label {
                        font-size: 0.875rem;
                        margin-bottom: 0.25rem;
                    }

                    .spec-value {
                        font-size: 1rem;
                    }

                    .spec-group-rows {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }

                    .spec-list {
                        list-style: none;
                        padding: 0;
                        margin: 0;
                    }

                    .spec-list li {
                        margin-bottom: 0.5rem;
                    }

                    .bullet {
                        margin-right: 0.5rem;
                    }

                    .feature-item {
                        display: flex;
                        align-items: flex-start;
                    }

                    .check {
                        color: #2F4A3A;
                        margin-right: 0.75rem;
                    }

                    @media (max-width: 768px) {
                        .spec-fields,
                        .spec-groups,
                        .feature-grid {
                            grid-template-columns: 1fr;
                        }
                    }
                "#}
            </style>
        </section>
    }
}
