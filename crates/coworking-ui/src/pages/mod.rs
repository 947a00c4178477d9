//! Page views mounted by the router.
//!
//! # Design
//! - One view per route table entry; business data is fetched by the pages themselves later.
//! - Book pages receive the raw `:id` segment and display it unchanged.

use crate::routes::{Page, Route};
use yew::prelude::*;

/// Render the view bound to a matched route.
pub(crate) fn page_view(route: Route) -> Html {
    let title = route.name().title();
    let page = route.page();
    match route {
        Route::BookDetail { id } => html! {
            <BookPage title={title} id={AttrValue::from(id)} editing={false} />
        },
        Route::BookEdit { id } => html! {
            <BookPage title={title} id={AttrValue::from(id)} editing={true} />
        },
        _ => html! { <Placeholder title={title} body={summary(page)} /> },
    }
}

const fn summary(page: Page) -> &'static str {
    match page {
        Page::Home => "Books, coffee and desks in one place.",
        Page::Shop => "Browse the bookshop by category.",
        Page::Books => "Full book catalog.",
        Page::BookDetail | Page::BookEdit => "Book record.",
        Page::Cart => "Items waiting for checkout.",
        Page::Checkout => "Confirm the order and pay.",
        Page::Login => "Sign in to continue.",
        Page::Profile => "Account details and order history.",
        Page::Coffeeshop => "Current promotions from the coffeeshop.",
        Page::Coffee => "Coffee menu.",
        Page::Bakery => "Bakery menu.",
        Page::Analytics => "Bookshop and coworking reports.",
        Page::Coworking => "Rooms and tariffs.",
        Page::Booking => "Reserve a room.",
    }
}

#[derive(Properties, PartialEq)]
struct PlaceholderProps {
    pub(crate) title: AttrValue,
    pub(crate) body: AttrValue,
}

#[function_component(Placeholder)]
fn placeholder(props: &PlaceholderProps) -> Html {
    html! {
        <div class="placeholder">
            <h2>{&props.title}</h2>
            <p class="muted">{&props.body}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct BookPageProps {
    pub(crate) title: AttrValue,
    pub(crate) id: AttrValue,
    pub(crate) editing: bool,
}

#[function_component(BookPage)]
fn book_page(props: &BookPageProps) -> Html {
    html! {
        <div class={classes!("placeholder", props.editing.then_some("editing"))}>
            <h2>{&props.title}</h2>
            <span class="pill subtle">{format!("#{}", props.id)}</span>
        </div>
    }
}
