//! Dialogs of the Clients page: add/edit form and the read-only profile.

use contracts::domain::a001_client::{Client, ClientDraft, ClientStatus, Industry};
use contracts::domain::common::{Facet, RecordDraft, RecordId};
use contracts::shared::money::{format_usd, parse_usd};
use leptos::prelude::*;
use thaw::*;

use crate::layout::use_notifications;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::data::SourceError;
use crate::shared::list_utils::ListController;

/// Text content of the client form, as typed
#[derive(Debug, Clone, PartialEq)]
pub struct ClientFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub total_spent: String,
    /// Comma separated
    pub services: String,
    pub status: String,
    pub industry: String,
}

impl Default for ClientFields {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            location: String::new(),
            total_spent: String::new(),
            services: String::new(),
            status: ClientStatus::default().key().to_string(),
            industry: Industry::default().key().to_string(),
        }
    }
}

impl From<&Client> for ClientFields {
    fn from(c: &Client) -> Self {
        Self {
            name: c.name.clone(),
            email: c.email.clone(),
            phone: c.phone.clone(),
            location: c.location.clone(),
            total_spent: format_usd(c.total_spent),
            services: c.services.join(", "),
            status: c.status.key().to_string(),
            industry: c.industry.key().to_string(),
        }
    }
}

impl ClientFields {
    /// Parse the form into a draft. An empty amount means no spend yet.
    pub fn to_draft(&self) -> Result<ClientDraft, String> {
        let total_spent = if self.total_spent.trim().is_empty() {
            0
        } else {
            parse_usd(&self.total_spent)
                .ok_or_else(|| format!("'{}' is not a dollar amount", self.total_spent.trim()))?
        };

        let draft = ClientDraft {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            location: self.location.trim().to_string(),
            join_date: None,
            total_spent,
            services: self
                .services
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            status: ClientStatus::from_key(&self.status).unwrap_or_default(),
            industry: Industry::from_key(&self.industry).unwrap_or_default(),
        };
        draft.validate().map_err(|e| e.to_string())?;
        Ok(draft)
    }
}

/// Input signals bound to the form controls
#[derive(Clone, Copy)]
struct ClientForm {
    name: RwSignal<String>,
    email: RwSignal<String>,
    phone: RwSignal<String>,
    location: RwSignal<String>,
    total_spent: RwSignal<String>,
    services: RwSignal<String>,
    status: RwSignal<String>,
    industry: RwSignal<String>,
}

impl ClientForm {
    fn new() -> Self {
        let fields = ClientFields::default();
        Self {
            name: RwSignal::new(fields.name),
            email: RwSignal::new(fields.email),
            phone: RwSignal::new(fields.phone),
            location: RwSignal::new(fields.location),
            total_spent: RwSignal::new(fields.total_spent),
            services: RwSignal::new(fields.services),
            status: RwSignal::new(fields.status),
            industry: RwSignal::new(fields.industry),
        }
    }

    fn load(&self, fields: ClientFields) {
        self.name.set(fields.name);
        self.email.set(fields.email);
        self.phone.set(fields.phone);
        self.location.set(fields.location);
        self.total_spent.set(fields.total_spent);
        self.services.set(fields.services);
        self.status.set(fields.status);
        self.industry.set(fields.industry);
    }

    fn read(&self) -> ClientFields {
        ClientFields {
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            phone: self.phone.get_untracked(),
            location: self.location.get_untracked(),
            total_spent: self.total_spent.get_untracked(),
            services: self.services.get_untracked(),
            status: self.status.get_untracked(),
            industry: self.industry.get_untracked(),
        }
    }
}

/// Add/edit dialog. `editing` holds the id of the client being edited, `None` adds.
#[component]
pub fn ClientFormDialog(
    open: RwSignal<bool>,
    editing: RwSignal<Option<RecordId>>,
    list: ListController<Client>,
) -> impl IntoView {
    let notifications = use_notifications();
    let form = ClientForm::new();
    let form_error = RwSignal::new(Option::<String>::None);
    let saving = RwSignal::new(false);

    // refill the controls every time the dialog opens
    Effect::new(move |_| {
        if !open.get() {
            return;
        }
        let fields = editing
            .get_untracked()
            .and_then(|id| list.view(&id).ok())
            .map(|client| ClientFields::from(&client))
            .unwrap_or_default();
        form.load(fields);
        form_error.set(None);
    });

    let save = move |_: leptos::ev::MouseEvent| {
        let draft = match form.read().to_draft() {
            Ok(draft) => draft,
            Err(e) => {
                form_error.set(Some(e));
                return;
            }
        };
        saving.set(true);
        let target = editing.get_untracked();
        let on_done = move |result: Result<Client, SourceError>| {
            saving.try_set(false);
            match result {
                Ok(client) => {
                    let verb = if target.is_some() { "updated" } else { "added" };
                    notifications.success(format!("Client {} {}", client.name, verb));
                    open.try_set(false);
                }
                Err(e) => {
                    log::warn!("Client save failed: {}", e);
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
                        {move || if editing.get().is_some() { "Edit client" } else { "Add new client" }}
                    </DialogTitle>
                    <DialogContent>
                        <Flex vertical=true gap=FlexGap::Medium>
                            {move || form_error.get().map(|e| view! {
                                <MessageBar intent=MessageBarIntent::Error>{e}</MessageBar>
                            })}
                            <Field label="Company name">
                                <Input value=form.name placeholder="Acme Corp" />
                            </Field>
                            <Field label="Email">
                                <Input value=form.email input_type=InputType::Email />
                            </Field>
                            <Flex gap=FlexGap::Medium>
                                <Field label="Phone">
                                    <Input value=form.phone input_type=InputType::Tel />
                                </Field>
                                <Field label="Location">
                                    <Input value=form.location placeholder="City, ST" />
                                </Field>
                            </Flex>
                            <Flex gap=FlexGap::Medium>
                                <Field label="Industry">
                                    <Select value=form.industry>
                                        {Industry::ALL
                                            .iter()
                                            .map(|i| view! { <option value=i.key()>{i.label()}</option> })
                                            .collect_view()}
                                    </Select>
                                </Field>
                                <Field label="Status">
                                    <Select value=form.status>
                                        {ClientStatus::ALL
                                            .iter()
                                            .map(|s| view! { <option value=s.key()>{s.label()}</option> })
                                            .collect_view()}
                                    </Select>
                                </Field>
                            </Flex>
                            <Field label="Total spent">
                                <Input value=form.total_spent placeholder="$0" />
                            </Field>
                            <Field label="Services">
                                <Input value=form.services placeholder="Cloud Migration, Security Audit" />
                            </Field>
                        </Flex>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| open.set(false)>
                            "Cancel"
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=saving
                            on_click=save
                        >
                            {move || if editing.get().is_some() { "Save changes" } else { "Add client" }}
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

pub fn status_badge_color(status: ClientStatus) -> BadgeColor {
    match status {
        ClientStatus::Active => BadgeColor::Success,
        ClientStatus::Pending => BadgeColor::Warning,
        ClientStatus::Inactive => BadgeColor::Subtle,
    }
}

/// Read-only profile of one client
#[component]
pub fn ClientProfileDialog(open: RwSignal<bool>, client: RwSignal<Option<Client>>) -> impl IntoView {
    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Client details"</DialogTitle>
                    <DialogContent>
                        {move || client.get().map(|c| {
                            let services = if c.services.is_empty() {
                                "None".to_string()
                            } else {
                                c.services.join(", ")
                            };
                            view! {
                                <div class="client-profile">
                                    <div class="client-profile__head">
                                        <div class="avatar avatar--large">{c.initials()}</div>
                                        <div>
                                            <h3>{c.name.clone()}</h3>
                                            <Badge appearance=BadgeAppearance::Tint color=status_badge_color(c.status)>
                                                {c.status.label()}
                                            </Badge>
                                        </div>
                                    </div>
                                    <dl class="client-profile__facts">
                                        <dt>{icon("mail")}"Email"</dt>
                                        <dd>{c.email.clone()}</dd>
                                        <dt>{icon("phone")}"Phone"</dt>
                                        <dd>{c.phone.clone()}</dd>
                                        <dt>{icon("map-pin")}"Location"</dt>
                                        <dd>{c.location.clone()}</dd>
                                        <dt>{icon("calendar")}"Client since"</dt>
                                        <dd>{format_date(c.join_date)}</dd>
                                        <dt>{icon("briefcase")}"Industry"</dt>
                                        <dd>{c.industry.label()}</dd>
                                        <dt>{icon("dollar-sign")}"Total spent"</dt>
                                        <dd>{c.total_spent_display()}</dd>
                                        <dt>{icon("server")}"Services"</dt>
                                        <dd>{services}</dd>
                                    </dl>
                                </div>
                            }
                        })}
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| open.set(false)>
                            "Close"
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
    use contracts::domain::a001_client::seed_clients;

    #[test]
    fn form_parses_amount_and_services() {
        let fields = ClientFields {
            name: "  Nimbus Labs ".into(),
            email: "ops@nimbus.io".into(),
            total_spent: "$12,450.50".into(),
            services: "Cloud Migration, , Security Audit ".into(),
            status: "pending".into(),
            industry: "research".into(),
            ..Default::default()
        };
        let draft = fields.to_draft().unwrap();
        assert_eq!(draft.name, "Nimbus Labs");
        assert_eq!(draft.total_spent, 1_245_050);
        assert_eq!(draft.services, vec!["Cloud Migration", "Security Audit"]);
        assert_eq!(draft.status, ClientStatus::Pending);
        assert_eq!(draft.industry, Industry::Research);
        assert_eq!(draft.join_date, None);
    }

    #[test]
    fn form_rejects_bad_amount_and_missing_fields() {
        let mut fields = ClientFields {
            name: "Nimbus Labs".into(),
            email: "ops@nimbus.io".into(),
            total_spent: "twelve".into(),
            ..Default::default()
        };
        assert!(fields.to_draft().unwrap_err().contains("twelve"));

        fields.total_spent = String::new();
        assert_eq!(fields.to_draft().unwrap().total_spent, 0);

        fields.email = "   ".into();
        assert!(fields.to_draft().is_err());
    }

    #[test]
    fn editing_prefills_every_field() {
        let client = seed_clients().remove(0);
        let fields = ClientFields::from(&client);
        let draft = fields.to_draft().unwrap();
        assert_eq!(draft.name, client.name);
        assert_eq!(draft.total_spent, client.total_spent);
        assert_eq!(draft.services, client.services);
        assert_eq!(draft.status, client.status);
        assert_eq!(draft.industry, client.industry);
    }
}
