//! Side menu with one link per page of the console

use crate::layout::ShellContext;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    label: &'static str,
    icon: &'static str,
    href: &'static str,
}

fn get_menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem {
            label: "Dashboard",
            icon: "layout-dashboard",
            href: "/",
        },
        MenuItem {
            label: "Services",
            icon: "briefcase",
            href: "/services",
        },
        MenuItem {
            label: "Clients",
            icon: "users",
            href: "/clients",
        },
        MenuItem {
            label: "Contact Inquiries",
            icon: "mail",
            href: "/contacts",
        },
        MenuItem {
            label: "Analytics",
            icon: "bar-chart",
            href: "/analytics",
        },
        MenuItem {
            label: "Settings",
            icon: "settings",
            href: "/settings",
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let shell = expect_context::<ShellContext>();

    view! {
        <aside class="app-sidebar" class:app-sidebar--open=move || shell.sidebar_open.get()>
            <div class="app-sidebar__brand">
                {icon("server")}
                <span>"IT Zenith Admin"</span>
            </div>
            <nav class="app-sidebar__content">
                {get_menu_items()
                    .into_iter()
                    .map(|item| {
                        view! {
                            // `/` must only be active on the dashboard itself
                            <A href=item.href exact={item.href == "/"} attr:class="app-sidebar__item">
                                <span
                                    class="app-sidebar__item-content"
                                    on:click=move |_| shell.sidebar_open.set(false)
                                >
                                    {icon(item.icon)}
                                    <span>{item.label}</span>
                                </span>
                            </A>
                        }
                    })
                    .collect_view()}
            </nav>
        </aside>
    }
}
