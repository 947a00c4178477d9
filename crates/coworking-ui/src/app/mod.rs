use crate::components::shell::AppShell;
use crate::config::UiConfig;
use crate::pages::page_view;
use crate::routes::Route;
use gloo::console;
use web_sys::Element;
use yew::prelude::*;
use yew_router::history::{AnyHistory, BrowserHistory};
use yew_router::prelude::*;

const CONFIG_ATTR: &str = "data-config";

#[derive(Properties, PartialEq)]
pub(crate) struct AppProps {
    /// History backing the router; browser history in production.
    pub(crate) history: AnyHistory,
    pub(crate) config: UiConfig,
}

#[function_component(CoworkingApp)]
pub(crate) fn coworking_app(props: &AppProps) -> Html {
    let basename = props.config.basename.clone().map(AttrValue::from);
    let active_class = AttrValue::from(props.config.link_active_class.clone());
    html! {
        <Router history={props.history.clone()} basename={basename}>
            <RoutedShell active_class={active_class} />
        </Router>
    }
}

#[derive(Properties, PartialEq)]
struct RoutedShellProps {
    pub(crate) active_class: AttrValue,
}

#[function_component(RoutedShell)]
fn routed_shell(props: &RoutedShellProps) -> Html {
    let route = use_route::<Route>();
    let path = use_location()
        .map(|location| location.path().to_string())
        .unwrap_or_default();
    {
        let route = route.clone();
        use_effect_with_deps(
            |(route, path)| {
                match route {
                    Some(route) => console::debug!("route", route.name().as_str(), path.as_str()),
                    // No catch-all route is declared; the main region stays empty.
                    None => console::warn!("no route matches", path.as_str()),
                }
                || ()
            },
            (route, path),
        );
    }

    html! {
        <AppShell active={route} active_class={props.active_class.clone()}>
            <Switch<Route> render={page_view} />
        </AppShell>
    }
}

fn load_config(root: &Element) -> UiConfig {
    let Some(raw) = root.get_attribute(CONFIG_ATTR) else {
        return UiConfig::default();
    };
    UiConfig::from_json(&raw).unwrap_or_else(|err| {
        console::error!("ignoring invalid config", CONFIG_ATTR, err.to_string());
        UiConfig::default()
    })
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    let root = gloo::utils::document().get_element_by_id("root");
    let props = AppProps {
        history: AnyHistory::from(BrowserHistory::new()),
        config: root.as_ref().map_or_else(UiConfig::default, load_config),
    };
    if let Some(root) = root {
        yew::Renderer::<CoworkingApp>::with_root_and_props(root, props).render();
    } else {
        yew::Renderer::<CoworkingApp>::with_props(props).render();
    }
}
