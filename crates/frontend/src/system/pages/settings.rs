//! Settings page: profile, company, security and notification preferences.
//!
//! Saving is local; each section reports success through the notification banner.

use contracts::system::settings::{
    CompanySettings, NotificationSettings, PasswordChange, ProfileSettings,
};
use leptos::prelude::*;
use thaw::*;

use crate::layout::use_notifications;
use crate::shared::components::filter_tabs::{FilterChoice, FilterTabs};
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::system::auth::context::{sign_out, use_auth};

const SECTIONS: [(&str, &str); 4] = [
    ("profile", "Profile"),
    ("company", "Company"),
    ("security", "Security"),
    ("notifications", "Notifications"),
];

#[component]
pub fn SettingsPage() -> impl IntoView {
    let active = RwSignal::new("profile");

    let choices = SECTIONS
        .iter()
        .map(|&(key, label)| FilterChoice {
            key,
            label: label.to_string(),
        })
        .collect::<Vec<_>>();

    view! {
        <div class="page">
            <PageHeader title="Settings" subtitle="Manage your account and company preferences">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| sign_out()>
                    {icon("log-out")}
                    "Logout"
                </Button>
            </PageHeader>

            <FilterTabs choices=choices active=active on_select=move |key: &'static str| active.set(key) />

            <div class="settings-panel">
                {move || match active.get() {
                    "company" => view! { <CompanySection /> }.into_any(),
                    "security" => view! { <SecuritySection /> }.into_any(),
                    "notifications" => view! { <NotificationsSection /> }.into_any(),
                    _ => view! { <ProfileSection /> }.into_any(),
                }}
            </div>
        </div>
    }
}

/// Profile defaults, with the signed-in administrator's name and email when known
fn initial_profile(full_name: Option<(String, String)>) -> ProfileSettings {
    let mut profile = ProfileSettings::default();
    if let Some((name, email)) = full_name {
        let mut parts = name.splitn(2, ' ');
        if let Some(first) = parts.next().filter(|s| !s.is_empty()) {
            profile.first_name = first.to_string();
            profile.last_name = parts.next().unwrap_or_default().to_string();
        }
        if !email.is_empty() {
            profile.email = email;
        }
    }
    profile
}

#[component]
fn ProfileSection() -> impl IntoView {
    let notifications = use_notifications();
    let (session, _) = use_auth();
    let profile = initial_profile(
        session.with_untracked(|s| s.as_ref().map(|s| (s.admin.name.clone(), s.admin.email.clone()))),
    );

    let first_name = RwSignal::new(profile.first_name);
    let last_name = RwSignal::new(profile.last_name);
    let email = RwSignal::new(profile.email);
    let bio = RwSignal::new(profile.bio);

    let initials = move || {
        ProfileSettings {
            first_name: first_name.get(),
            last_name: last_name.get(),
            email: String::new(),
            bio: String::new(),
        }
        .initials()
    };

    let save = move |_: leptos::ev::MouseEvent| {
        if first_name.get_untracked().trim().is_empty() || email.get_untracked().trim().is_empty() {
            notifications.error("First name and email are required");
            return;
        }
        log::info!("Profile saved for {}", email.get_untracked());
        notifications.success("Profile updated successfully");
    };

    view! {
        <Flex vertical=true gap=FlexGap::Large>
            <div class="settings-avatar">{initials}</div>
            <Flex gap=FlexGap::Medium>
                <Field label="First name">
                    <Input value=first_name />
                </Field>
                <Field label="Last name">
                    <Input value=last_name />
                </Field>
            </Flex>
            <Field label="Email">
                <Input value=email input_type=InputType::Email />
            </Field>
            <Field label="Bio">
                <Textarea value=bio placeholder="Tell us about yourself" />
            </Field>
            <div>
                <Button appearance=ButtonAppearance::Primary on_click=save>"Save changes"</Button>
            </div>
        </Flex>
    }
}

#[component]
fn CompanySection() -> impl IntoView {
    let notifications = use_notifications();
    let company = CompanySettings::default();

    let name = RwSignal::new(company.name);
    let website = RwSignal::new(company.website);
    let phone = RwSignal::new(company.phone);
    let address = RwSignal::new(company.address);

    let save = move |_: leptos::ev::MouseEvent| {
        if name.get_untracked().trim().is_empty() {
            notifications.error("Company name is required");
            return;
        }
        notifications.success("Company information updated successfully");
    };

    view! {
        <Flex vertical=true gap=FlexGap::Large>
            <Field label="Company name">
                <Input value=name />
            </Field>
            <Field label="Website">
                <Input value=website input_type=InputType::Url />
            </Field>
            <Field label="Phone">
                <Input value=phone input_type=InputType::Tel />
            </Field>
            <Field label="Address">
                <Textarea value=address />
            </Field>
            <div>
                <Button appearance=ButtonAppearance::Primary on_click=save>"Save changes"</Button>
            </div>
        </Flex>
    }
}

#[component]
fn SecuritySection() -> impl IntoView {
    let notifications = use_notifications();

    let current = RwSignal::new(String::new());
    let new = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let two_factor = RwSignal::new(false);

    let change_password = move |_: leptos::ev::MouseEvent| {
        let change = PasswordChange {
            current: current.get_untracked(),
            new: new.get_untracked(),
            confirm: confirm.get_untracked(),
        };
        match change.validate() {
            Ok(()) => {
                current.set(String::new());
                new.set(String::new());
                confirm.set(String::new());
                notifications.success("Password updated successfully");
            }
            Err(e) => notifications.error(e.to_string()),
        }
    };

    view! {
        <Flex vertical=true gap=FlexGap::Large>
            <h3>"Change password"</h3>
            <Field label="Current password">
                <Input value=current input_type=InputType::Password />
            </Field>
            <Field label="New password">
                <Input value=new input_type=InputType::Password />
            </Field>
            <Field label="Confirm new password">
                <Input value=confirm input_type=InputType::Password />
            </Field>
            <div>
                <Button appearance=ButtonAppearance::Primary on_click=change_password>
                    "Update password"
                </Button>
            </div>

            <h3>"Two-factor authentication"</h3>
            <Switch checked=two_factor label="Require a one-time code at sign in" />
        </Flex>
    }
}

#[component]
fn NotificationsSection() -> impl IntoView {
    let notifications = use_notifications();
    let defaults = NotificationSettings::default();

    let email = RwSignal::new(defaults.email);
    let inquiries = RwSignal::new(defaults.inquiries);
    let alerts = RwSignal::new(defaults.alerts);
    let reports = RwSignal::new(defaults.reports);
    let marketing = RwSignal::new(defaults.marketing);

    let save = move |_: leptos::ev::MouseEvent| {
        let settings = NotificationSettings {
            email: email.get_untracked(),
            inquiries: inquiries.get_untracked(),
            alerts: alerts.get_untracked(),
            reports: reports.get_untracked(),
            marketing: marketing.get_untracked(),
        };
        log::debug!("Notification preferences: {:?}", settings);
        notifications.success("Notification preferences saved");
    };

    view! {
        <Flex vertical=true gap=FlexGap::Large>
            <Switch checked=email label="Email notifications" />
            <Switch checked=inquiries label="New contact inquiries" />
            <Switch checked=alerts label="System alerts" />
            <Switch checked=reports label="Weekly reports" />
            <Switch checked=marketing label="Marketing emails" />
            <div>
                <Button appearance=ButtonAppearance::Primary on_click=save>"Save preferences"</Button>
            </div>
        </Flex>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_takes_name_and_email_from_session() {
        let profile = initial_profile(Some(("Jane Q Public".into(), "jane@itzenith.com".into())));
        assert_eq!(profile.first_name, "Jane");
        assert_eq!(profile.last_name, "Q Public");
        assert_eq!(profile.email, "jane@itzenith.com");
    }

    #[test]
    fn profile_falls_back_to_defaults() {
        assert_eq!(initial_profile(None), ProfileSettings::default());

        let single = initial_profile(Some(("Admin".into(), String::new())));
        assert_eq!(single.first_name, "Admin");
        assert_eq!(single.last_name, "");
        assert_eq!(single.email, "john.doe@itzenith.com");
    }
}
