use contracts::domain::a002_service::{Service, ServiceDraft, ServiceIcon, ServiceId};
use contracts::domain::common::{Facet, RecordDraft};
use leptos::prelude::*;
use thaw::*;

use crate::layout::use_notifications;
use crate::shared::icons::icon;
use crate::shared::data::SourceError;
use crate::shared::list_utils::ListController;

/// Validated draft from the dialog's inputs; unknown icon keys fall back to `server`
pub fn draft_from_inputs(title: &str, description: &str, icon_key: &str) -> Result<ServiceDraft, String> {
    let draft = ServiceDraft {
        title: title.trim().to_string(),
        description: description.trim().to_string(),
        icon: ServiceIcon::from(icon_key),
    };
    draft.validate().map_err(|e| e.to_string())?;
    Ok(draft)
}

/// Add/edit dialog of the Services page. `editing` is the id of the service being
/// edited, `None` adds a new one.
#[component]
pub fn ServiceFormDialog(
    open: RwSignal<bool>,
    editing: RwSignal<Option<ServiceId>>,
    list: ListController<Service>,
) -> impl IntoView {
    let notifications = use_notifications();
    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let icon_key = RwSignal::new(ServiceIcon::default().key().to_string());
    let form_error = RwSignal::new(Option::<String>::None);
    let saving = RwSignal::new(false);

    Effect::new(move |_| {
        if !open.get() {
            return;
        }
        let draft = editing
            .get_untracked()
            .and_then(|id| list.view(&id).ok())
            .map(|service| ServiceDraft::from(&service))
            .unwrap_or_default();
        title.set(draft.title);
        description.set(draft.description);
        icon_key.set(draft.icon.key().to_string());
        form_error.set(None);
    });

    let save = move |_: leptos::ev::MouseEvent| {
        let draft = match draft_from_inputs(
            &title.get_untracked(),
            &description.get_untracked(),
            &icon_key.get_untracked(),
        ) {
            Ok(draft) => draft,
            Err(e) => {
                form_error.set(Some(e));
                return;
            }
        };
        saving.set(true);
        let target = editing.get_untracked();
        let is_edit = target.is_some();
        let on_done = move |result: Result<Service, SourceError>| {
            saving.try_set(false);
            match result {
                Ok(service) => {
                    let verb = if is_edit { "updated" } else { "created" };
                    notifications.success(format!("Service \"{}\" {}", service.title, verb));
                    open.try_set(false);
                }
                Err(e) => {
                    log::error!("Service save failed: {}", e);
                    form_error.try_set(Some(e.to_string()));
                }
            }
        };
        match target {
            Some(id) => list.spawn_update(id, draft.into(), on_done),
            None => list.spawn_create(draft, on_done),
        }
    };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>
                        {move || if editing.get().is_some() { "Edit service" } else { "Add new service" }}
                    </DialogTitle>
                    <DialogContent>
                        <Flex vertical=true gap=FlexGap::Medium>
                            {move || form_error.get().map(|e| view! {
                                <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
                            })}
                            <Field label="Title">
                                <Input value=title placeholder="Cloud Infrastructure" />
                            </Field>
                            <Field label="Description">
                                <Textarea value=description placeholder="What the service covers" />
                            </Field>
                            <Field label="Icon">
                                <Select value=icon_key>
                                    {ServiceIcon::ALL
                                        .iter()
                                        .map(|i| view! { <option value=i.key()>{i.label()}</option> })
                                        .collect_view()}
                                </Select>
                            </Field>
                            <div class="service-icon-preview">
                                {move || icon(&icon_key.get())}
                            </div>
                        </Flex>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| open.set(false)>
                            "Cancel"
                        </Button>
                        <Button appearance=ButtonAppearance::Primary disabled=saving on_click=save>
                            {move || if saving.get() { "Saving..." } else { "Save" }}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inputs_are_trimmed_and_icon_resolved() {
        let draft = draft_from_inputs("  Backup ", " Nightly snapshots ", "database").unwrap();
        assert_eq!(draft.title, "Backup");
        assert_eq!(draft.description, "Nightly snapshots");
        assert_eq!(draft.icon, ServiceIcon::Database);

        let fallback = draft_from_inputs("Backup", "Nightly snapshots", "rocket").unwrap();
        assert_eq!(fallback.icon, ServiceIcon::Server);
    }

    #[test]
    fn blank_title_or_description_is_rejected() {
        assert!(draft_from_inputs(" ", "Nightly snapshots", "server").is_err());
        assert!(draft_from_inputs("Backup", "", "server").is_err());
    }
}
