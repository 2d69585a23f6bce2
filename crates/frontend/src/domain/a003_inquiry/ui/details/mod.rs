//! Inquiry detail dialog with the reply box.

use chrono::Utc;
use contracts::domain::a003_inquiry::{Inquiry, InquiryPriority, InquiryStatus};
use contracts::domain::common::{Facet, RecordId};
use leptos::prelude::*;
use thaw::*;

use crate::layout::use_notifications;
use crate::shared::date_utils::{format_datetime, format_relative};
use crate::shared::icons::icon;
use crate::shared::list_utils::ListController;

pub fn priority_badge_color(priority: InquiryPriority) -> BadgeColor {
    match priority {
        InquiryPriority::High => BadgeColor::Danger,
        InquiryPriority::Medium => BadgeColor::Warning,
        InquiryPriority::Low => BadgeColor::Success,
    }
}

pub fn status_badge_color(status: InquiryStatus) -> BadgeColor {
    match status {
        InquiryStatus::New => BadgeColor::Brand,
        InquiryStatus::InProgress => BadgeColor::Warning,
        InquiryStatus::Responded => BadgeColor::Success,
        InquiryStatus::Closed => BadgeColor::Subtle,
    }
}

/// Full message, previous replies and the reply box of the inquiry `selected`
#[component]
pub fn InquiryDialog(
    open: RwSignal<bool>,
    selected: RwSignal<Option<RecordId>>,
    list: ListController<Inquiry>,
) -> impl IntoView {
    let notifications = use_notifications();
    let reply = RwSignal::new(String::new());

    // tracked, so the dialog follows replies and status changes
    let inquiry = Memo::new(move |_| {
        let id = selected.get()?;
        list.with_items(|items| items.iter().find(|i| i.id == id).cloned())
    });

    Effect::new(move |_| {
        if open.get() {
            reply.set(String::new());
        }
    });

    let send_reply = move |_: leptos::ev::MouseEvent| {
        let Some(id) = selected.get_untracked() else {
            return;
        };
        let message = reply.get_untracked();
        match list.update_local(|c| c.reply(&id, &message).map(|i| i.name.clone())) {
            Some(Ok(name)) => {
                log::info!("Replied to inquiry {}", id);
                notifications.success(format!("Reply sent to {}", name));
                reply.set(String::new());
                open.set(false);
            }
            Some(Err(e)) => notifications.error(e.to_string()),
            None => {}
        }
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>
                        {move || inquiry.get().map(|i| i.subject).unwrap_or_default()}
                    </DialogTitle>
                    <DialogContent>
                        {move || inquiry.get().map(|i| {
                            let now = Utc::now();
                            view! {
                                <div class="inquiry-detail">
                                    <div class="inquiry-detail__meta">
                                        <Badge appearance=BadgeAppearance::Tint color=priority_badge_color(i.priority)>
                                            {i.priority.as_str()}
                                        </Badge>
                                        <Badge appearance=BadgeAppearance::Tint color=status_badge_color(i.status)>
                                            {i.status.label()}
                                        </Badge>
                                        <span class="text-muted">{i.category.clone()}</span>
                                    </div>
                                    <dl class="inquiry-detail__contact">
                                        <dt>"From"</dt>
                                        <dd>{format!("{} ({})", i.name, i.company)}</dd>
                                        <dt>{icon("mail")}"Email"</dt>
                                        <dd>{i.email.clone()}</dd>
                                        <dt>{icon("phone")}"Phone"</dt>
                                        <dd>{i.phone.clone()}</dd>
                                        <dt>{icon("clock")}"Received"</dt>
                                        <dd title=format_datetime(i.created_at)>{format_relative(i.created_at, now)}</dd>
                                    </dl>
                                    <p class="inquiry-detail__message">{i.message.clone()}</p>
                                    {(!i.replies.is_empty()).then(|| view! {
                                        <div class="inquiry-detail__replies">
                                            <h4>"Replies"</h4>
                                            {i.replies
                                                .iter()
                                                .map(|r| view! { <blockquote>{r.clone()}</blockquote> })
                                                .collect_view()}
                                        </div>
                                    })}
                                </div>
                            }
                        })}
                        <Field label="Reply">
                            <Textarea value=reply placeholder="Type your reply..." />
                        </Field>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| open.set(false)>
                            "Close"
                        </Button>
                        <Button appearance=ButtonAppearance::Primary on_click=send_reply>
                            {icon("reply")}
                            "Send reply"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
