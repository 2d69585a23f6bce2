//! Reactive wrapper around the list-management contract plus the search input
//! every list page shows.

use std::rc::Rc;

use contracts::domain::common::ListRecord;
use contracts::shared::list::{Collection, ListError, ListState};
use std::future::Future;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::reactive::owner::Owner;
use web_sys::AbortSignal;

use crate::shared::data::{RecordSource, SourceError};
use crate::shared::icons::icon;
use crate::shared::request::{spawn_cancellable, spawn_cancellable_in};

const SEARCH_DEBOUNCE_MS: u32 = 200;

/// State of one list page: its records, search and filter, bound to a [`RecordSource`].
///
/// Every mutation goes through the source first; the page's copy is only updated
/// with what the source returned. Source calls carry the request timeout and are
/// aborted when the page unmounts.
pub struct ListController<T: ListRecord + 'static> {
    state: RwSignal<ListState<T>>,
    loading: RwSignal<bool>,
    error: RwSignal<Option<String>>,
    source: StoredValue<Rc<dyn RecordSource<T>>, LocalStorage>,
    owner: StoredValue<Option<Owner>, LocalStorage>,
}

impl<T: ListRecord + 'static> Clone for ListController<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ListRecord + 'static> Copy for ListController<T> {}

impl<T> ListController<T>
where
    T: ListRecord + 'static,
    T::Id: 'static,
    T::Draft: 'static,
    T::Patch: 'static,
    ListState<T>: Send + Sync,
{
    /// Create the controller and load the source's records. Must be called while
    /// the page component is being built: the initial load is cancelled with it.
    pub fn new(source: Rc<dyn RecordSource<T>>) -> Self {
        let controller = Self {
            state: RwSignal::new(ListState::default()),
            loading: RwSignal::new(true),
            error: RwSignal::new(None),
            source: StoredValue::new_local(source),
            owner: StoredValue::new_local(Owner::current()),
        };
        controller.load();
        controller
    }

    fn source(&self) -> Rc<dyn RecordSource<T>> {
        self.source.get_value()
    }

    fn load(&self) {
        let this = *self;
        let source = self.source();
        spawn_cancellable(
            move |signal| async move {
                source
                    .list(signal)
                    .await
                    .map_err(|e| e.to_string())
            },
            move |result| {
                match result {
                    Ok(items) => {
                        log::debug!("Loaded {} records", items.len());
                        this.state
                            .update(|s| s.collection_mut().replace_all(items));
                    }
                    Err(e) => {
                        log::error!("Failed to load records: {}", e);
                        this.error.set(Some(e));
                    }
                }
                this.loading.set(false);
            },
        );
    }

    pub fn is_loading(&self) -> bool {
        self.loading.get()
    }

    /// Last load or action failure shown above the table
    pub fn error(&self) -> Option<String> {
        self.error.get()
    }

    pub fn set_error(&self, message: Option<String>) {
        self.error.set(message);
    }

    /// Derived view in collection order (tracked)
    pub fn visible(&self) -> Vec<T> {
        self.state
            .with(|s| s.visible().into_iter().cloned().collect())
    }

    /// Every record regardless of search and filter (tracked)
    pub fn items(&self) -> Vec<T> {
        self.state.with(|s| s.collection().items().to_vec())
    }

    /// Run `f` over all records without cloning them (tracked)
    pub fn with_items<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        self.state.with(|s| f(s.collection().items()))
    }

    pub fn search_term(&self) -> String {
        self.state.with(|s| s.search_term().to_string())
    }

    pub fn set_search_term(&self, text: String) {
        self.state.update(|s| s.set_search_term(text));
    }

    pub fn filter_key(&self) -> &'static str {
        self.state.with(|s| s.filter().key())
    }

    /// Accepts `"all"` or a facet key. Anything else keeps the current filter and is
    /// reported through [`Self::error`].
    pub fn set_filter(&self, key: &str) {
        let result = self
            .state
            .try_update(|s| s.set_filter(key))
            .unwrap_or(Ok(()));
        if let Err(e) = result {
            log::warn!("{}", e);
            self.error.try_set(Some(e.to_string()));
        }
    }

    pub fn view(&self, id: &T::Id) -> Result<T, ListError> {
        self.state.with_untracked(|s| s.view(id).cloned())
    }

    /// Apply a local-only change (inquiry status actions) to the page's records.
    ///
    /// The change is not sent to the source: a later `update` or reload through the
    /// source brings back the source's version of the record.
    pub fn update_local<R>(&self, f: impl FnOnce(&mut Collection<T>) -> R) -> Option<R> {
        self.state.try_update(|s| f(s.collection_mut()))
    }

    /// Run one source call as a request of the page that built this controller
    fn spawn_call<R, F, Fut, D>(self, call: F, on_done: D)
    where
        R: 'static,
        F: FnOnce(Rc<dyn RecordSource<T>>, Option<AbortSignal>) -> Fut,
        Fut: Future<Output = Result<R, SourceError>> + 'static,
        D: FnOnce(Result<R, SourceError>) + 'static,
    {
        let source = self.source();
        let owner = self.owner.try_get_value().flatten();
        spawn_cancellable_in(owner, move |signal| call(source, signal), on_done);
    }

    /// Create through the source, then show the stored record
    pub fn spawn_create(
        self,
        draft: T::Draft,
        on_done: impl FnOnce(Result<T, SourceError>) + 'static,
    ) {
        self.spawn_call(
            move |source, signal| async move { source.create(draft, signal).await },
            move |result| {
                if let Ok(record) = &result {
                    self.state
                        .try_update(|s| s.collection_mut().upsert(record.clone()));
                }
                on_done(result);
            },
        );
    }

    /// Update through the source, then show the stored record
    pub fn spawn_update(
        self,
        id: T::Id,
        patch: T::Patch,
        on_done: impl FnOnce(Result<T, SourceError>) + 'static,
    ) {
        self.spawn_call(
            move |source, signal| async move { source.update(&id, patch, signal).await },
            move |result| {
                if let Ok(record) = &result {
                    self.state
                        .try_update(|s| s.collection_mut().upsert(record.clone()));
                }
                on_done(result);
            },
        );
    }

    /// Fire-and-report delete used by row buttons
    pub fn spawn_remove(self, id: T::Id) {
        let target = id.clone();
        self.spawn_call(
            move |source, signal| async move { source.delete(&target, signal).await },
            move |result| {
                // a record the source no longer knows is gone for the page too
                if result.is_ok() || result.as_ref().is_err_and(SourceError::is_not_found) {
                    self.state.try_update(|s| {
                        let _ = s.remove(&id);
                    });
                }
                if let Err(e) = result {
                    log::error!("Delete failed: {}", e);
                    self.error.try_set(Some(e.to_string()));
                }
            },
        );
    }
}

/// Search box with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Current search text
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());
    let pending = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || on_change.run(new_value));
        // replacing the previous timeout drops, and so cancels, it
        pending.set_value(Some(timeout));
    };

    let clear = move |_| {
        pending.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=move || !value.get().is_empty()
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" title="Clear" on:click=clear>
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}
