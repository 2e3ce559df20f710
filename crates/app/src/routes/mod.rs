pub mod admin;
pub mod collections;
pub mod home;
pub mod model_submit;
pub mod not_found;

use dioxus::prelude::*;
use shared_types::ADMIN_LINKS;
use shared_ui::components::{Navbar, NavbarContent, NavbarItem, NavbarNav, NavbarTrigger};

use crate::components::Header;
use admin::{
    AdminPage, BotanistView, Management, ManagementGuard, ModelerView, StudentGuard, StudentView,
};
use collections::Collections;
use home::Home;
use model_submit::ModelSubmit;
use not_found::NotFound;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[layout(SiteLayout)]
    #[route("/")]
    Home {},
    #[route("/collections/:query")]
    Collections { query: String },
    #[route("/modelSubmit")]
    ModelSubmit {},
    #[route("/admin")]
    AdminPage {},
    #[layout(ManagementGuard)]
    #[route("/admin/management")]
    Management {},
    #[route("/admin/modeler")]
    ModelerView {},
    #[route("/admin/botanist")]
    BotanistView {},
    #[end_layout]
    #[layout(StudentGuard)]
    #[route("/admin/student")]
    StudentView {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

/// Entries of the admin dropdown: the dispatching `/admin` page, then the
/// management link menu.
pub fn admin_nav_items() -> Vec<(&'static str, Route)> {
    let mut items = vec![("My Admin Page", Route::AdminPage {})];
    items.extend(
        ADMIN_LINKS
            .iter()
            .filter_map(|(label, href)| href.parse::<Route>().ok().map(|to| (*label, to))),
    );
    items
}

/// Top navbar with the header search, above every catalog page.
#[component]
fn SiteLayout() -> Element {
    rsx! {
        Navbar {
            div { class: "catalog-navbar-bar",
                Link { class: "catalog-navbar-brand", to: Route::Home {}, "Herbarium Catalog" }
                div { class: "catalog-navbar-search",
                    Header {}
                }
                NavbarNav { index: 0usize,
                    NavbarTrigger { "Admin" }
                    NavbarContent {
                        for (i, (label, to)) in admin_nav_items().into_iter().enumerate() {
                            NavbarItem {
                                key: "{i}",
                                index: i,
                                value: label.to_string(),
                                to,
                                "{label}"
                            }
                        }
                    }
                }
            }
        }
        main { class: "container",
            Outlet::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{collection_path, AdminDestination, MODEL_SUBMIT_PATH};

    #[test]
    fn paths_match_shared_constants() {
        assert_eq!(Route::ModelSubmit {}.to_string(), MODEL_SUBMIT_PATH);
        assert_eq!(
            Route::Management {}.to_string(),
            AdminDestination::Management.path()
        );
        assert_eq!(
            Route::StudentView {}.to_string(),
            AdminDestination::Student.path()
        );
        assert_eq!(
            Route::Collections {
                query: "quercus".to_string()
            }
            .to_string(),
            collection_path("quercus")
        );
    }

    #[test]
    fn admin_dropdown_lists_every_admin_page() {
        let items = admin_nav_items();
        let labels: Vec<&str> = items.iter().map(|(label, _)| *label).collect();
        assert_eq!(
            labels,
            vec!["My Admin Page", "Management", "3D Modeler", "Botanist"]
        );
        assert_eq!(items[0].1, Route::AdminPage {});
        assert_eq!(items[2].1, Route::ModelerView {});
        assert_eq!(items[3].1, Route::BotanistView {});
    }

    #[test]
    fn collection_route_parses() {
        let parsed: Route = "/collections/orchid".parse().unwrap();
        assert_eq!(
            parsed,
            Route::Collections {
                query: "orchid".to_string()
            }
        );
    }
}
