use dioxus::prelude::*;
use shared_types::{AdminDestination, AdminOutcome, ADMIN_LINKS, NOT_AUTHORIZED};
use shared_ui::components::PageHeader;

use crate::routes::Route;

/// Route for an admin landing view.
pub fn admin_route(destination: AdminDestination) -> Route {
    match destination {
        AdminDestination::Management => Route::Management {},
        AdminDestination::Student => Route::StudentView {},
    }
}

#[component]
fn NotAuthorized() -> Element {
    rsx! {
        h1 { class: "not-authorized", "{NOT_AUTHORIZED}" }
    }
}

#[component]
fn Loading() -> Element {
    rsx! {
        div { class: "page-loading",
            p { "Loading..." }
        }
    }
}

/// `/admin`: send the visitor to their landing view, or refuse them.
#[component]
pub fn AdminPage() -> Element {
    let resource =
        use_server_future(move || async move { server::api::resolve_admin_destination().await })?;

    let result = resource.read().as_ref().cloned();

    match result {
        Some(Ok(AdminOutcome::Redirect { to })) => {
            navigator().push(admin_route(to));
            rsx! {
                div { class: "page-loading",
                    p { "Redirecting..." }
                }
            }
        }
        Some(Ok(AdminOutcome::Unauthorized)) => rsx! { NotAuthorized {} },
        Some(Err(e)) => {
            tracing::warn!(error = %e, "Admin dispatch failed");
            rsx! { NotAuthorized {} }
        }
        None => rsx! { Loading {} },
    }
}

/// What a guarded admin layout shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Pending,
    Granted,
    Refused,
}

/// Decide access to `area` from the dispatch result. Failed lookups refuse.
pub fn access_for(
    result: Option<&Result<AdminOutcome, ServerFnError>>,
    area: AdminDestination,
) -> Access {
    match result {
        None => Access::Pending,
        Some(Ok(outcome)) if outcome.admits(area) => Access::Granted,
        Some(Ok(_)) => Access::Refused,
        Some(Err(e)) => {
            tracing::warn!(error = %e, "Admin dispatch failed");
            Access::Refused
        }
    }
}

#[component]
fn AccessGate(access: Access) -> Element {
    match access {
        Access::Granted => rsx! { Outlet::<Route> {} },
        Access::Refused => rsx! { NotAuthorized {} },
        Access::Pending => rsx! { Loading {} },
    }
}

fn guard(area: AdminDestination) -> Element {
    let resource =
        use_server_future(move || async move { server::api::resolve_admin_destination().await })?;

    let access = access_for(resource.read().as_ref(), area);
    rsx! { AccessGate { access } }
}

/// Layout over the management, modeler and botanist pages.
#[component]
pub fn ManagementGuard() -> Element {
    guard(AdminDestination::Management)
}

/// Layout over the student page. Managers may open it too.
#[component]
pub fn StudentGuard() -> Element {
    guard(AdminDestination::Student)
}

#[component]
pub fn Management() -> Element {
    rsx! {
        PageHeader { title: "Management" }
        ul { class: "admin-menu",
            for (label, href) in ADMIN_LINKS.iter() {
                li { key: "{href}",
                    Link { to: *href, "{label}" }
                }
            }
        }
    }
}

#[component]
pub fn StudentView() -> Element {
    rsx! {
        PageHeader { title: "Student", subtitle: "Annotation workspace" }
        div { class: "notice",
            p { "Specimens assigned to you for annotation will be listed here." }
        }
    }
}

#[component]
pub fn ModelerView() -> Element {
    rsx! {
        PageHeader { title: "3D Modeler" }
        div { class: "notice",
            p { "Review and publish submitted 3D models." }
        }
    }
}

#[component]
pub fn BotanistView() -> Element {
    rsx! {
        PageHeader { title: "Botanist" }
        div { class: "notice",
            p { "Verify specimen identifications and annotation content." }
        }
    }
}
