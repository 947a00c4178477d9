use crate::routes::{Route, is_active};
use yew::prelude::*;
use yew_router::prelude::Link;

/// Links shown in the sidebar, in display order.
const NAV_ROUTES: [Route; 13] = [
    Route::Home,
    Route::Shop,
    Route::ShopBooks,
    Route::Cart,
    Route::Checkout,
    Route::Coffeeshop,
    Route::CoffeeshopCoffee,
    Route::CoffeeshopBakery,
    Route::Coworking,
    Route::CoworkingBooking,
    Route::Analytics,
    Route::Profile,
    Route::Login,
];

#[derive(Properties, PartialEq)]
pub(crate) struct ShellProps {
    pub(crate) children: Children,
    pub(crate) active: Option<Route>,
    pub(crate) active_class: AttrValue,
}

#[function_component(AppShell)]
pub(crate) fn app_shell(props: &ShellProps) -> Html {
    let nav_open = use_state(|| false);
    let toggle_nav = {
        let nav_open = nav_open.clone();
        Callback::from(move |_| nav_open.set(!*nav_open))
    };

    html! {
        <div class="app-shell">
            <aside class={classes!("sidebar", if *nav_open { "open" } else { "closed" })}>
                <div class="brand">
                    <button class="ghost mobile-only" onclick={toggle_nav.clone()} aria-label="Close navigation">{"✕"}</button>
                    <strong>{"Coworking"}</strong>
                </div>
                <nav>
                    {for NAV_ROUTES.iter().map(|route| nav_item(route, props.active.as_ref(), &props.active_class))}
                </nav>
            </aside>
            <div class="main">
                <header class="topbar">
                    <button class="ghost mobile-only" aria-label="Open navigation" onclick={toggle_nav}>{"☰"}</button>
                    <Link<Route> to={Route::Cart} classes={classes!("pill", "subtle")}>{"Cart"}</Link<Route>>
                </header>
                <main>
                    {for props.children.iter()}
                </main>
            </div>
        </div>
    }
}

fn nav_item(route: &Route, current: Option<&Route>, active_class: &AttrValue) -> Html {
    let classes = classes!(
        "nav-item",
        is_active(route, current).then(|| active_class.to_string())
    );
    html! {
        <Link<Route> to={route.clone()} classes={classes}>{route.name().title()}</Link<Route>>
    }
}
