use dioxus::prelude::*;

mod components;
mod routes;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    dioxus::serve(|| async move {
        server::config::load_config();
        let flags = server::config::feature_flags();
        server::health::record_start_time();

        let directory = server::db::directory().await?;
        let state = server::db::AppState::new(directory);

        let mut router =
            dioxus::server::router(App).merge(server::rest::api_router().with_state(state));

        if flags.request_tracing {
            router = router.layer(tower_http::trace::TraceLayer::new_for_http());
        }

        let router = router
            .layer(axum::middleware::from_fn(
                server::auth::middleware::session_middleware,
            ))
            .layer(tower_http::request_id::PropagateRequestIdLayer::x_request_id())
            .layer(tower_http::request_id::SetRequestIdLayer::x_request_id(
                tower_http::request_id::MakeRequestUuid,
            ));
        Ok(router)
    });

    #[cfg(not(feature = "server"))]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        SuspenseBoundary {
            fallback: |_| rsx! {
                div { class: "page-loading",
                    p { "Loading..." }
                }
            },
            Router::<Route> {}
        }
    }
}
