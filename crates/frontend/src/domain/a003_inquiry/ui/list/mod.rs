use std::rc::Rc;

use chrono::Utc;
use contracts::domain::a003_inquiry::{seed_inquiries, Inquiry, InquiryCounts, InquiryStatus};
use contracts::domain::common::{Facet, RecordId};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a003_inquiry::ui::details::{
    priority_badge_color, status_badge_color, InquiryDialog,
};
use crate::layout::use_notifications;
use crate::shared::components::filter_tabs::{facet_choices, FilterChoice, FilterTabs};
use crate::shared::components::page_header::PageHeader;
use crate::shared::data::MemorySource;
use crate::shared::date_utils::format_relative;
use crate::shared::icons::icon;
use crate::shared::list_utils::{ListController, SearchInput};

/// Status tabs labelled with how many inquiries each holds, e.g. "New (3)"
fn counted_choices(counts: &InquiryCounts) -> Vec<FilterChoice> {
    facet_choices::<InquiryStatus>()
        .into_iter()
        .map(|choice| FilterChoice {
            label: format!("{} ({})", choice.label, counts.for_key(choice.key)),
            key: choice.key,
        })
        .collect()
}

#[component]
#[allow(non_snake_case)]
pub fn InquiryList() -> impl IntoView {
    let notifications = use_notifications();
    let list = ListController::<Inquiry>::new(Rc::new(MemorySource::new(seed_inquiries())));

    let dialog_open = RwSignal::new(false);
    let selected = RwSignal::new(Option::<RecordId>::None);

    let counts = Memo::new(move |_| list.with_items(|items| InquiryCounts::of(items)));

    let open_inquiry = move |id: RecordId| {
        selected.set(Some(id));
        dialog_open.set(true);
    };

    let toggle_star = move |id: RecordId| {
        if let Some(Err(e)) = list.update_local(|c| c.toggle_star(&id)) {
            notifications.error(e.to_string());
        }
    };

    let archive = move |id: RecordId| match list.update_local(|c| c.archive(&id).map(|i| i.name.clone())) {
        Some(Ok(name)) => notifications.success(format!("Inquiry from {} archived", name)),
        Some(Err(e)) => notifications.error(e.to_string()),
        None => {}
    };

    let delete = move |id: RecordId| {
        let confirmed = web_sys::window()
            .and_then(|w| w.confirm_with_message("Delete this inquiry?").ok())
            .unwrap_or(false);
        if confirmed {
            list.spawn_remove(id);
        }
    };

    let archive_all = move |_: leptos::ev::MouseEvent| {
        let changed = list.update_local(|c| c.archive_all()).unwrap_or(0);
        notifications.success(format!("{} inquiries archived", changed));
    };

    let bulk_reply = move |_: leptos::ev::MouseEvent| {
        let changed = list.update_local(|c| c.bulk_reply()).unwrap_or(0);
        if changed == 0 {
            notifications.success("No open inquiries to reply to");
        } else {
            notifications.success(format!("Marked {} inquiries as responded", changed));
        }
    };

    view! {
        <div class="page">
            <PageHeader title="Contact Inquiries" subtitle="Messages received through the contact form">
                <Button appearance=ButtonAppearance::Secondary on_click=bulk_reply>
                    {icon("reply")}
                    "Bulk reply"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=archive_all>
                    {icon("archive")}
                    "Archive all"
                </Button>
            </PageHeader>

            <div class="toolbar">
                <SearchInput
                    value=Signal::derive(move || list.search_term())
                    on_change=move |text: String| list.set_search_term(text)
                    placeholder="Search inquiries..."
                />
                {move || view! {
                    <FilterTabs
                        choices=counted_choices(&counts.get())
                        active=Signal::derive(move || list.filter_key())
                        on_select=move |key: &'static str| list.set_filter(key)
                    />
                }}
            </div>

            {move || list.error().map(|e| view! {
                <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
            })}

            <Show
                when=move || !list.is_loading()
                fallback=|| view! { <Spinner label="Loading inquiries..." /> }
            >
                <div class="inquiry-list">
                    {move || {
                        let now = Utc::now();
                        list.visible()
                            .into_iter()
                            .map(|inquiry| {
                                let id = inquiry.id;
                                let star_class = if inquiry.starred {
                                    "icon-button icon-button--starred"
                                } else {
                                    "icon-button"
                                };
                                view! {
                                    <div
                                        class="inquiry-row"
                                        class:inquiry-row--unread={inquiry.status == InquiryStatus::New}
                                    >
                                        <button class=star_class title="Star" on:click=move |_| toggle_star(id)>
                                            {icon("star")}
                                        </button>
                                        <div class="inquiry-row__main" on:click=move |_| open_inquiry(id)>
                                            <div class="inquiry-row__head">
                                                <span class="inquiry-row__name">{inquiry.name.clone()}</span>
                                                <span class="text-muted">{inquiry.company.clone()}</span>
                                                <span class="inquiry-row__time">
                                                    {format_relative(inquiry.created_at, now)}
                                                </span>
                                            </div>
                                            <div class="inquiry-row__subject">{inquiry.subject.clone()}</div>
                                            <div class="inquiry-row__preview">{inquiry.message.clone()}</div>
                                            <div class="inquiry-row__tags">
                                                <Badge appearance=BadgeAppearance::Tint color=priority_badge_color(inquiry.priority)>
                                                    {inquiry.priority.as_str()}
                                                </Badge>
                                                <Badge appearance=BadgeAppearance::Tint color=status_badge_color(inquiry.status)>
                                                    {inquiry.status.label()}
                                                </Badge>
                                                <span class="text-muted">{inquiry.category.clone()}</span>
                                            </div>
                                        </div>
                                        <div class="row-actions">
                                            <button class="icon-button" title="Open" on:click=move |_| open_inquiry(id)>
                                                {icon("eye")}
                                            </button>
                                            <button class="icon-button" title="Archive" on:click=move |_| archive(id)>
                                                {icon("archive")}
                                            </button>
                                            <button
                                                class="icon-button icon-button--danger"
                                                title="Delete"
                                                on:click=move |_| delete(id)
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
                    <div class="empty-state">"No inquiries found"</div>
                </Show>
            </Show>

            <InquiryDialog open=dialog_open selected=selected list=list />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_carry_counts() {
        let inquiries = seed_inquiries();
        let counts = InquiryCounts::of(&inquiries);
        let choices = counted_choices(&counts);

        assert_eq!(choices.len(), 5);
        assert_eq!(choices[0].key, "all");
        assert_eq!(choices[0].label, format!("All ({})", inquiries.len()));
        let new = inquiries
            .iter()
            .filter(|i| i.status == InquiryStatus::New)
            .count();
        assert_eq!(choices[1].label, format!("New ({})", new));
        assert_eq!(choices[2].key, "in-progress");
    }
}
