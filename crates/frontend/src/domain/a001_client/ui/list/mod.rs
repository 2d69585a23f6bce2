use std::rc::Rc;

use contracts::domain::a001_client::{seed_clients, Client, ClientSummary, Industry};
use contracts::domain::common::{Facet, RecordId};
use contracts::shared::money::format_usd;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_client::ui::details::{
    status_badge_color, ClientFormDialog, ClientProfileDialog,
};
use crate::layout::use_notifications;
use crate::shared::components::filter_tabs::{facet_choices, FilterTabs};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::format_count;
use crate::shared::data::MemorySource;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_utils::{ListController, SearchInput};

#[component]
#[allow(non_snake_case)]
pub fn ClientList() -> impl IntoView {
    let notifications = use_notifications();
    // clients have no API yet; the page works on its own seeded copy
    let list = ListController::<Client>::new(Rc::new(MemorySource::new(seed_clients())));

    let form_open = RwSignal::new(false);
    let editing = RwSignal::new(Option::<RecordId>::None);
    let profile_open = RwSignal::new(false);
    let profile = RwSignal::new(Option::<Client>::None);

    let summary = Memo::new(move |_| list.with_items(|items| ClientSummary::of(items)));

    let add_client = move |_: leptos::ev::MouseEvent| {
        editing.set(None);
        form_open.set(true);
    };

    let edit_client = move |id: RecordId| {
        editing.set(Some(id));
        form_open.set(true);
    };

    let view_client = move |id: RecordId| match list.view(&id) {
        Ok(client) => {
            profile.set(Some(client));
            profile_open.set(true);
        }
        Err(e) => notifications.error(e.to_string()),
    };

    let delete_client = move |client: Client| {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(&format!("Delete {}?", client.name))
                    .ok()
            })
            .unwrap_or(false);
        if confirmed {
            list.spawn_remove(client.id);
        }
    };

    view! {
        <div class="page">
            <PageHeader title="Clients" subtitle="Manage your client relationships">
                <Button appearance=ButtonAppearance::Primary on_click=add_client>
                    {icon("plus")}
                    "Add client"
                </Button>
            </PageHeader>

            <div class="toolbar">
                <SearchInput
                    value=Signal::derive(move || list.search_term())
                    on_change=move |text: String| list.set_search_term(text)
                    placeholder="Search clients..."
                />
                <FilterTabs
                    choices={facet_choices::<Industry>()}
                    active=Signal::derive(move || list.filter_key())
                    on_select=move |key: &'static str| list.set_filter(key)
                />
            </div>

            {move || list.error().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
            })}

            <Show
                when=move || !list.is_loading()
                fallback=|| view! { <Spinner label="Loading clients..." /> }
            >
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Client"</TableHeaderCell>
                            <TableHeaderCell>"Contact"</TableHeaderCell>
                            <TableHeaderCell>"Industry"</TableHeaderCell>
                            <TableHeaderCell>"Joined"</TableHeaderCell>
                            <TableHeaderCell>"Total spent"</TableHeaderCell>
                            <TableHeaderCell>"Status"</TableHeaderCell>
                            <TableHeaderCell>"Actions"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            list.visible()
                                .into_iter()
                                .map(|client| {
                                    let id = client.id;
                                    let for_delete = client.clone();
                                    let initials = client.initials();
                                    let total_spent = client.total_spent_display();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <div class="client-cell">
                                                    <div class="avatar">{initials}</div>
                                                    <div>
                                                        <div class="client-cell__name">{client.name.clone()}</div>
                                                        <div class="client-cell__location">{client.location.clone()}</div>
                                                    </div>
                                                </div>
                                            </TableCell>
                                            <TableCell>
                                                <div>{client.email.clone()}</div>
                                                <div class="text-muted">{client.phone.clone()}</div>
                                            </TableCell>
                                            <TableCell>{client.industry.label()}</TableCell>
                                            <TableCell>{format_date(client.join_date)}</TableCell>
                                            <TableCell>{total_spent}</TableCell>
                                            <TableCell>
                                                <Badge appearance=BadgeAppearance::Tint color=status_badge_color(client.status)>
                                                    {client.status.label()}
                                                </Badge>
                                            </TableCell>
                                            <TableCell>
                                                <div class="row-actions">
                                                    <button class="icon-button" title="View" on:click=move |_| view_client(id)>
                                                        {icon("eye")}
                                                    </button>
                                                    <button class="icon-button" title="Edit" on:click=move |_| edit_client(id)>
                                                        {icon("edit")}
                                                    </button>
                                                    <button
                                                        class="icon-button icon-button--danger"
                                                        title="Delete"
                                                        on:click=move |_| delete_client(for_delete.clone())
                                                    >
                                                        {icon("trash")}
                                                    </button>
                                                </div>
                                            </TableCell>
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                        }}
                    </TableBody>
                </Table>
                <Show when=move || list.visible().is_empty()>
                    <div class="empty-state">"No clients match your search"</div>
                </Show>
            </Show>

            <div class="stat-grid">
                <div class="summary-card">
                    <div class="summary-card__label">"Total clients"</div>
                    <div class="summary-card__value">{move || format_count(summary.get().total as u64)}</div>
                </div>
                <div class="summary-card">
                    <div class="summary-card__label">"Active"</div>
                    <div class="summary-card__value">{move || format_count(summary.get().active as u64)}</div>
                </div>
                <div class="summary-card">
                    <div class="summary-card__label">"Pending"</div>
                    <div class="summary-card__value">{move || format_count(summary.get().pending as u64)}</div>
                </div>
                <div class="summary-card">
                    <div class="summary-card__label">"Total revenue"</div>
                    <div class="summary-card__value">{move || format_usd(summary.get().revenue)}</div>
                </div>
            </div>

            <ClientFormDialog open=form_open editing=editing list=list />
            <ClientProfileDialog open=profile_open client=profile />
        </div>
    }
}
