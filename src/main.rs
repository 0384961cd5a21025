//! Investment calculator frontend entry point.

mod allocation;
mod api;
mod app;
mod dom;
mod format;
mod theme;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Debug).ok();

    let props = app::AppProps {
        chart_refresh: dom::chart_refresh_hook(),
    };
    yew::Renderer::<App>::with_props(props).render();
}
