use std::rc::Rc;

use contracts::domain::a002_service::{Service, ServiceIcon, ServiceId};
use contracts::domain::common::Facet;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a002_service::ui::details::ServiceFormDialog;
use crate::shared::components::filter_tabs::{facet_choices, FilterTabs};
use crate::shared::components::page_header::PageHeader;
use crate::shared::data::HttpSource;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{ListController, SearchInput};
use crate::system::auth::context::session_token;

const SERVICES_PATH: &str = "/api/services/";

#[component]
#[allow(non_snake_case)]
pub fn ServiceList() -> impl IntoView {
    let list = ListController::<Service>::new(Rc::new(HttpSource::new(
        SERVICES_PATH,
        session_token(),
    )));

    let form_open = RwSignal::new(false);
    let editing = RwSignal::new(Option::<ServiceId>::None);

    let add_service = move |_: leptos::ev::MouseEvent| {
        editing.set(None);
        form_open.set(true);
    };

    let delete_service = move |service: Service| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!("Delete service \"{}\"?", service.title))
                    .ok()
            })
            .unwrap_or(false);
        if confirmed {
            list.spawn_remove(service.id);
        }
    };

    view! {
        <div class="page">
            <PageHeader title="Services" subtitle="The IT services offered to clients">
                <Button appearance=ButtonAppearance::Primary on_click=add_service>
                    {icon("plus")}
                    "Add service"
                </Button>
            </PageHeader>

            <div class="toolbar">
                <SearchInput
                    value=Signal::derive(move || list.search_term())
                    on_change=move |text: String| list.set_search_term(text)
                    placeholder="Search services..."
                />
                <FilterTabs
                    choices={facet_choices::<ServiceIcon>()}
                    active=Signal::derive(move || list.filter_key())
                    on_select=move |key: &'static str| list.set_filter(key)
                />
            </div>

            {move || list.error().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>{format!("Failed to load services: {}", e)}</MessageBar>
            })}

            <Show
                when=move || !list.is_loading()
                fallback=|| view! { <Spinner label="Loading services..." /> }
            >
                <div class="service-grid">
                    {move || {
                        list.visible()
                            .into_iter()
                            .map(|service| {
                                let id = service.id.clone();
                                let for_delete = service.clone();
                                view! {
                                    <div class="service-card">
                                        <div class="service-card__icon">{icon(service.icon.key())}</div>
                                        <div class="service-card__body">
                                            <h3>{service.title.clone()}</h3>
                                            <p>{service.description.clone()}</p>
                                            <span class="text-muted">
                                                {format!("Added {}", format_date(service.created_at.date_naive()))}
                                            </span>
                                        </div>
                                        <div class="row-actions">
                                            <button
                                                class="icon-button"
                                                title="Edit"
                                                on:click=move |_| {
                                                    editing.set(Some(id.clone()));
                                                    form_open.set(true);
                                                }
                                            >
                                                {icon("edit")}
                                            </button>
                                            <button
                                                class="icon-button icon-button--danger"
                                                title="Delete"
                                                on:click=move |_| delete_service(for_delete.clone())
                                            >
                                                {icon("trash")}
                                            </button>
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                <Show when=move || list.visible().is_empty()>
                    <div class="empty-state">"No services found"</div>
                </Show>
            </Show>

            <ServiceFormDialog open=form_open editing=editing list=list />
        </div>
    }
}
