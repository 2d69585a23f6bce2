use contracts::domain::common::Facet;
use contracts::shared::list::ListFilter;
use leptos::prelude::*;
use thaw::*;

/// One tab of a [`FilterTabs`] row
#[derive(Debug, Clone, PartialEq)]
pub struct FilterChoice {
    pub key: &'static str,
    pub label: String,
}

/// "All" followed by every value of the facet `F`
pub fn facet_choices<F: Facet>() -> Vec<FilterChoice> {
    ListFilter::<F>::choices()
        .into_iter()
        .map(|filter| FilterChoice {
            key: filter.key(),
            label: filter.label().to_string(),
        })
        .collect()
}

/// Row of toggle buttons selecting a list filter; the active key is highlighted
#[component]
pub fn FilterTabs(
    choices: Vec<FilterChoice>,
    #[prop(into)] active: Signal<&'static str>,
    #[prop(into)] on_select: Callback<&'static str>,
) -> impl IntoView {
    view! {
        <div class="filter-tabs" role="tablist">
            {choices
                .into_iter()
                .map(|choice| {
                    let key = choice.key;
                    view! {
                        <Button
                            size=ButtonSize::Small
                            appearance=move || {
                                if active.get() == key {
                                    ButtonAppearance::Primary
                                } else {
                                    ButtonAppearance::Subtle
                                }
                            }
                            on_click=move |_| on_select.run(key)
                        >
                            {choice.label}
                        </Button>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_client::Industry;
    use contracts::domain::a002_service::ServiceIcon;
    use contracts::domain::a003_inquiry::InquiryStatus;

    fn all_keys_parse<F: Facet>() {
        for choice in facet_choices::<F>() {
            assert!(
                ListFilter::<F>::parse(choice.key).is_ok(),
                "tab key {} rejected",
                choice.key
            );
        }
    }

    #[test]
    fn facet_choices_start_with_all() {
        let choices = facet_choices::<ServiceIcon>();
        assert_eq!(choices.len(), ServiceIcon::ALL.len() + 1);
        assert_eq!(choices[0].key, "all");
        assert_eq!(choices[0].label, "All");
        assert_eq!(choices[2].key, "shield");
        assert_eq!(choices[2].label, "Security");
    }

    #[test]
    fn every_tab_key_is_an_accepted_filter() {
        all_keys_parse::<Industry>();
        all_keys_parse::<ServiceIcon>();
        all_keys_parse::<InquiryStatus>();
    }
}
