use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use thaw::*;

const NOTICE_LIFETIME_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

/// Short-lived message banner shared by all pages
#[derive(Clone, Copy)]
pub struct NotificationService {
    current: RwSignal<Option<Notice>>,
    next_id: StoredValue<u64>,
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            next_id: StoredValue::new(1),
        }
    }

    pub fn success(&self, text: impl Into<String>) {
        self.show(NoticeKind::Success, text.into());
    }

    pub fn error(&self, text: impl Into<String>) {
        self.show(NoticeKind::Error, text.into());
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }

    fn show(&self, kind: NoticeKind, text: String) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);
        self.current.set(Some(Notice { id, kind, text }));

        // Hide after a while unless a newer notice replaced this one
        let current = self.current;
        Timeout::new(NOTICE_LIFETIME_MS, move || {
            current.try_update(|slot| {
                if slot.as_ref().is_some_and(|n| n.id == id) {
                    *slot = None;
                }
            });
        })
        .forget();
    }
}

pub fn use_notifications() -> NotificationService {
    expect_context::<NotificationService>()
}

#[component]
pub fn NotificationHost() -> impl IntoView {
    let notifications = use_notifications();

    move || {
        notifications.current.get().map(|notice| {
            let intent = match notice.kind {
                NoticeKind::Success => MessageBarIntent::Success,
                NoticeKind::Error => MessageBarIntent::Error,
            };
            view! {
                <div class="notification-host" on:click=move |_| notifications.dismiss()>
                    <MessageBar intent=intent>{notice.text}</MessageBar>
                </div>
            }
        })
    }
}
