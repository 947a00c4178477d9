//! Route table for the coworking front-end.
//!
//! # Design
//! - `Route` is the table handed to the navigation runtime; variant order is the match order.
//! - `ROUTE_TABLE` mirrors the enum as plain data (path, logical name, view) for lookups by name.
//! - Path parameters are forwarded to views as-is. Only ids passed to `Route::from_name` are checked,
//!   so that the rendered path resolves back to the same route.
//! - There is no catch-all entry, so an unknown path recognizes as `None`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use yew_router::prelude::*;

/// Every navigable location of the application, in match order.
#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    /// Landing page.
    #[at("/")]
    Home,
    /// Shop overview.
    #[at("/shop")]
    Shop,
    /// Book catalog.
    #[at("/shop/books")]
    ShopBooks,
    /// Single book.
    #[at("/shop/books/:id")]
    BookDetail {
        /// Book identifier taken from the path.
        id: String,
    },
    /// Book editor.
    #[at("/shop/books/:id/edit")]
    BookEdit {
        /// Book identifier taken from the path.
        id: String,
    },
    /// Shopping cart.
    #[at("/cart")]
    Cart,
    /// Checkout flow.
    #[at("/checkout")]
    Checkout,
    /// Sign-in form.
    #[at("/login")]
    Login,
    /// Account profile.
    #[at("/profile")]
    Profile,
    /// Coffeeshop landing page.
    #[at("/coffeeshop")]
    Coffeeshop,
    /// Coffee menu.
    #[at("/coffeeshop/coffee")]
    CoffeeshopCoffee,
    /// Bakery menu.
    #[at("/coffeeshop/bakery")]
    CoffeeshopBakery,
    /// Sales and booking reports.
    #[at("/analytics")]
    Analytics,
    /// Coworking landing page.
    #[at("/coworking")]
    Coworking,
    /// Room booking.
    #[at("/coworking/booking")]
    CoworkingBooking,
}

/// Unique logical identifier of a route, used for navigation without hard-coded paths.
///
/// The string forms keep the historical spellings (`coffeshop`, `coffeshop-coffe`)
/// because links elsewhere in the product refer to them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RouteName {
    /// `home`
    #[serde(rename = "home")]
    Home,
    /// `shop`
    #[serde(rename = "shop")]
    Shop,
    /// `shop-books`
    #[serde(rename = "shop-books")]
    ShopBooks,
    /// `book-detail`
    #[serde(rename = "book-detail")]
    BookDetail,
    /// `book-edit`
    #[serde(rename = "book-edit")]
    BookEdit,
    /// `cart`
    #[serde(rename = "cart")]
    Cart,
    /// `checkout`
    #[serde(rename = "checkout")]
    Checkout,
    /// `login`
    #[serde(rename = "login")]
    Login,
    /// `profile`
    #[serde(rename = "profile")]
    Profile,
    /// `coffeshop`
    #[serde(rename = "coffeshop")]
    Coffeeshop,
    /// `coffeshop-coffe`
    #[serde(rename = "coffeshop-coffe")]
    CoffeeshopCoffee,
    /// `coffeshop-bakery`
    #[serde(rename = "coffeshop-bakery")]
    CoffeeshopBakery,
    /// `analytics`
    #[serde(rename = "analytics")]
    Analytics,
    /// `coworking`
    #[serde(rename = "coworking")]
    Coworking,
    /// `coworking-booking`
    #[serde(rename = "coworking-booking")]
    CoworkingBooking,
}

impl RouteName {
    /// All names in table order.
    #[must_use]
    pub const fn all() -> [Self; 15] {
        [
            Self::Home,
            Self::Shop,
            Self::ShopBooks,
            Self::BookDetail,
            Self::BookEdit,
            Self::Cart,
            Self::Checkout,
            Self::Login,
            Self::Profile,
            Self::Coffeeshop,
            Self::CoffeeshopCoffee,
            Self::CoffeeshopBakery,
            Self::Analytics,
            Self::Coworking,
            Self::CoworkingBooking,
        ]
    }

    /// Wire form of the name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Shop => "shop",
            Self::ShopBooks => "shop-books",
            Self::BookDetail => "book-detail",
            Self::BookEdit => "book-edit",
            Self::Cart => "cart",
            Self::Checkout => "checkout",
            Self::Login => "login",
            Self::Profile => "profile",
            Self::Coffeeshop => "coffeshop",
            Self::CoffeeshopCoffee => "coffeshop-coffe",
            Self::CoffeeshopBakery => "coffeshop-bakery",
            Self::Analytics => "analytics",
            Self::Coworking => "coworking",
            Self::CoworkingBooking => "coworking-booking",
        }
    }

    /// Label shown in navigation and page headers.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Shop => "Shop",
            Self::ShopBooks => "Books",
            Self::BookDetail => "Book",
            Self::BookEdit => "Edit book",
            Self::Cart => "Cart",
            Self::Checkout => "Checkout",
            Self::Login => "Log in",
            Self::Profile => "Profile",
            Self::Coffeeshop => "Coffeeshop",
            Self::CoffeeshopCoffee => "Coffee",
            Self::CoffeeshopBakery => "Bakery",
            Self::Analytics => "Analytics",
            Self::Coworking => "Coworking",
            Self::CoworkingBooking => "Booking",
        }
    }

    /// Whether the route pattern carries an `:id` segment.
    #[must_use]
    pub const fn takes_id(self) -> bool {
        matches!(self, Self::BookDetail | Self::BookEdit)
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RouteName {
    type Err = RouteError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|name| name.as_str() == value)
            .ok_or_else(|| RouteError::UnknownName(value.to_string()))
    }
}

/// View mounted for a matched route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    /// Landing page.
    Home,
    /// Shop overview.
    Shop,
    /// Book catalog.
    Books,
    /// Book detail.
    BookDetail,
    /// Book editor.
    BookEdit,
    /// Cart.
    Cart,
    /// Checkout.
    Checkout,
    /// Login.
    Login,
    /// Profile.
    Profile,
    /// Coffeeshop landing page.
    Coffeeshop,
    /// Coffee menu.
    Coffee,
    /// Bakery menu.
    Bakery,
    /// Report page.
    Analytics,
    /// Coworking landing page.
    Coworking,
    /// Booking form.
    Booking,
}

/// One row of the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    /// Path pattern, `:id` marks a named parameter.
    pub path: &'static str,
    /// Logical name.
    pub name: RouteName,
    /// View to mount.
    pub page: Page,
}

const fn entry(path: &'static str, name: RouteName, page: Page) -> RouteEntry {
    RouteEntry { path, name, page }
}

/// The full route table in match order.
pub static ROUTE_TABLE: [RouteEntry; 15] = [
    entry("/", RouteName::Home, Page::Home),
    entry("/shop", RouteName::Shop, Page::Shop),
    entry("/shop/books", RouteName::ShopBooks, Page::Books),
    entry("/shop/books/:id", RouteName::BookDetail, Page::BookDetail),
    entry("/shop/books/:id/edit", RouteName::BookEdit, Page::BookEdit),
    entry("/cart", RouteName::Cart, Page::Cart),
    entry("/checkout", RouteName::Checkout, Page::Checkout),
    entry("/login", RouteName::Login, Page::Login),
    entry("/profile", RouteName::Profile, Page::Profile),
    entry("/coffeeshop", RouteName::Coffeeshop, Page::Coffeeshop),
    entry("/coffeeshop/coffee", RouteName::CoffeeshopCoffee, Page::Coffee),
    entry("/coffeeshop/bakery", RouteName::CoffeeshopBakery, Page::Bakery),
    entry("/analytics", RouteName::Analytics, Page::Analytics),
    entry("/coworking", RouteName::Coworking, Page::Coworking),
    entry("/coworking/booking", RouteName::CoworkingBooking, Page::Booking),
];

/// Table row for a logical name.
#[must_use]
pub fn entry_for(name: RouteName) -> &'static RouteEntry {
    match name {
        RouteName::Home => &ROUTE_TABLE[0],
        RouteName::Shop => &ROUTE_TABLE[1],
        RouteName::ShopBooks => &ROUTE_TABLE[2],
        RouteName::BookDetail => &ROUTE_TABLE[3],
        RouteName::BookEdit => &ROUTE_TABLE[4],
        RouteName::Cart => &ROUTE_TABLE[5],
        RouteName::Checkout => &ROUTE_TABLE[6],
        RouteName::Login => &ROUTE_TABLE[7],
        RouteName::Profile => &ROUTE_TABLE[8],
        RouteName::Coffeeshop => &ROUTE_TABLE[9],
        RouteName::CoffeeshopCoffee => &ROUTE_TABLE[10],
        RouteName::CoffeeshopBakery => &ROUTE_TABLE[11],
        RouteName::Analytics => &ROUTE_TABLE[12],
        RouteName::Coworking => &ROUTE_TABLE[13],
        RouteName::CoworkingBooking => &ROUTE_TABLE[14],
    }
}

/// Characters that would split a path segment or start a query or fragment.
const RESERVED_IN_SEGMENT: [char; 3] = ['/', '?', '#'];

/// Failures when building a route from its logical name.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RouteError {
    /// No route carries this name.
    #[error("unknown route name `{0}`")]
    UnknownName(String),
    /// The route needs an `:id` and none was supplied.
    #[error("route `{0}` requires an id parameter")]
    MissingParam(RouteName),
    /// The route has no parameters but one was supplied.
    #[error("route `{0}` takes no parameters")]
    UnexpectedParam(RouteName),
    /// The id cannot be placed in a single path segment.
    #[error("route `{name}` cannot take id `{id}`: it contains `/`, `?` or `#`")]
    InvalidParam {
        /// Route the id was meant for.
        name: RouteName,
        /// Rejected id.
        id: String,
    },
}

impl Route {
    /// Logical name of the route.
    #[must_use]
    pub const fn name(&self) -> RouteName {
        match self {
            Self::Home => RouteName::Home,
            Self::Shop => RouteName::Shop,
            Self::ShopBooks => RouteName::ShopBooks,
            Self::BookDetail { .. } => RouteName::BookDetail,
            Self::BookEdit { .. } => RouteName::BookEdit,
            Self::Cart => RouteName::Cart,
            Self::Checkout => RouteName::Checkout,
            Self::Login => RouteName::Login,
            Self::Profile => RouteName::Profile,
            Self::Coffeeshop => RouteName::Coffeeshop,
            Self::CoffeeshopCoffee => RouteName::CoffeeshopCoffee,
            Self::CoffeeshopBakery => RouteName::CoffeeshopBakery,
            Self::Analytics => RouteName::Analytics,
            Self::Coworking => RouteName::Coworking,
            Self::CoworkingBooking => RouteName::CoworkingBooking,
        }
    }

    /// View mounted for the route.
    #[must_use]
    pub fn page(&self) -> Page {
        entry_for(self.name()).page
    }

    /// Bound `:id` parameter, if the route has one.
    #[must_use]
    pub fn param(&self) -> Option<&str> {
        match self {
            Self::BookDetail { id } | Self::BookEdit { id } => Some(id.as_str()),
            _ => None,
        }
    }

    /// Build a route from its logical name, the way links address pages.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::UnknownName`] for names outside the table, and
    /// [`RouteError::MissingParam`] / [`RouteError::UnexpectedParam`] when the
    /// supplied id does not fit the route's pattern. An empty id counts as
    /// missing. [`RouteError::InvalidParam`] is returned for ids that would not
    /// stay inside one path segment, since the rendered path would resolve elsewhere.
    pub fn from_name(name: &str, id: Option<&str>) -> Result<Self, RouteError> {
        let name = name.parse::<RouteName>()?;
        let id = match (name.takes_id(), id) {
            (true, None | Some("")) => return Err(RouteError::MissingParam(name)),
            (true, Some(id)) if id.contains(RESERVED_IN_SEGMENT) => {
                return Err(RouteError::InvalidParam {
                    name,
                    id: id.to_string(),
                });
            }
            (false, Some(_)) => return Err(RouteError::UnexpectedParam(name)),
            (_, id) => id.unwrap_or_default().to_string(),
        };
        Ok(match name {
            RouteName::Home => Self::Home,
            RouteName::Shop => Self::Shop,
            RouteName::ShopBooks => Self::ShopBooks,
            RouteName::BookDetail => Self::BookDetail { id },
            RouteName::BookEdit => Self::BookEdit { id },
            RouteName::Cart => Self::Cart,
            RouteName::Checkout => Self::Checkout,
            RouteName::Login => Self::Login,
            RouteName::Profile => Self::Profile,
            RouteName::Coffeeshop => Self::Coffeeshop,
            RouteName::CoffeeshopCoffee => Self::CoffeeshopCoffee,
            RouteName::CoffeeshopBakery => Self::CoffeeshopBakery,
            RouteName::Analytics => Self::Analytics,
            RouteName::Coworking => Self::Coworking,
            RouteName::CoworkingBooking => Self::CoworkingBooking,
        })
    }
}

/// Whether a nav link pointing at `link` should carry the active class.
///
/// A link is active when it targets the same route record with the same
/// parameter values as the current location.
#[must_use]
pub fn is_active(link: &Route, current: Option<&Route>) -> bool {
    current.is_some_and(|current| current == link)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sample(name: RouteName) -> Route {
        let id = name.takes_id().then_some("42");
        Route::from_name(name.as_str(), id).expect("table names build routes")
    }

    #[test]
    fn every_literal_path_resolves_to_its_entry() {
        for entry in ROUTE_TABLE.iter().filter(|entry| !entry.path.contains(':')) {
            let route = Route::recognize(entry.path)
                .unwrap_or_else(|| panic!("{} should resolve", entry.path));
            assert_eq!(route.name(), entry.name, "{}", entry.path);
            assert_eq!(route.page(), entry.page, "{}", entry.path);
            assert_eq!(route.to_path(), entry.path);
        }
    }

    #[test]
    fn names_are_pairwise_distinct() {
        let names: HashSet<_> = ROUTE_TABLE.iter().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names.len(), ROUTE_TABLE.len());
    }

    #[test]
    fn table_order_matches_declaration_order() {
        let declared = Route::routes();
        let tabled: Vec<_> = ROUTE_TABLE.iter().map(|entry| entry.path).collect();
        assert_eq!(declared, tabled);
        let names: Vec<_> = ROUTE_TABLE.iter().map(|entry| entry.name).collect();
        assert_eq!(names, RouteName::all().to_vec());
    }

    #[test]
    fn book_detail_binds_id() {
        let route = Route::recognize("/shop/books/42");
        assert_eq!(
            route,
            Some(Route::BookDetail {
                id: "42".to_string()
            })
        );
        let route = route.expect("matched");
        assert_eq!(route.name(), RouteName::BookDetail);
        assert_eq!(route.page(), Page::BookDetail);
        assert_eq!(route.param(), Some("42"));
    }

    #[test]
    fn book_edit_binds_same_id() {
        let route = Route::recognize("/shop/books/42/edit").expect("matched");
        assert_eq!(route.name(), RouteName::BookEdit);
        assert_eq!(route.page(), Page::BookEdit);
        assert_eq!(route.param(), Some("42"));
        assert_eq!(route.to_path(), "/shop/books/42/edit");
    }

    #[test]
    fn ids_pass_through_unvalidated() {
        let route = Route::recognize("/shop/books/not-a-number").expect("matched");
        assert_eq!(route.param(), Some("not-a-number"));
    }

    #[test]
    fn undeclared_path_matches_nothing() {
        assert_eq!(Route::recognize("/nonexistent"), None);
        assert_eq!(Route::recognize("/shop/books/42/delete"), None);
        assert_eq!(Route::not_found_route(), None);
    }

    #[test]
    fn names_round_trip_through_routes() {
        for name in RouteName::all() {
            let route = sample(name);
            assert_eq!(route.name(), name);
            assert_eq!(Route::recognize(&route.to_path()), Some(route.clone()));
            assert_eq!(name.as_str().parse::<RouteName>(), Ok(name));
            assert_eq!(entry_for(name).name, name);
        }
    }

    #[test]
    fn named_book_routes_resolve_back_to_themselves() {
        for name in [RouteName::BookDetail, RouteName::BookEdit] {
            for id in ["42", "isbn-978-0-13-110362-7", "dune_1965"] {
                let route = Route::from_name(name.as_str(), Some(id)).expect("valid id");
                let resolved = Route::recognize(&route.to_path());
                assert_eq!(resolved.as_ref(), Some(&route), "{name} {id}");
                assert_eq!(resolved.as_ref().and_then(Route::param), Some(id));
            }
        }
    }

    #[test]
    fn every_table_row_is_found_by_its_name() {
        for entry in &ROUTE_TABLE {
            assert_eq!(entry_for(entry.name), entry);
        }
    }

    #[test]
    fn historical_name_spellings_are_kept() {
        assert_eq!(RouteName::Coffeeshop.to_string(), "coffeshop");
        assert_eq!(RouteName::CoffeeshopCoffee.to_string(), "coffeshop-coffe");
        assert_eq!(
            serde_json::to_string(&RouteName::CoffeeshopBakery).expect("serialize"),
            "\"coffeshop-bakery\""
        );
        assert_eq!(
            serde_json::from_str::<RouteName>("\"coworking-booking\"").expect("deserialize"),
            RouteName::CoworkingBooking
        );
    }

    #[test]
    fn from_name_reports_bad_requests() {
        assert_eq!(
            Route::from_name("library", None),
            Err(RouteError::UnknownName("library".to_string()))
        );
        assert_eq!(
            Route::from_name("book-detail", None),
            Err(RouteError::MissingParam(RouteName::BookDetail))
        );
        assert_eq!(
            Route::from_name("cart", Some("1")),
            Err(RouteError::UnexpectedParam(RouteName::Cart))
        );
        assert_eq!(
            Route::from_name("book-detail", Some("")),
            Err(RouteError::MissingParam(RouteName::BookDetail))
        );
        assert_eq!(
            Route::from_name("book-edit", Some("")),
            Err(RouteError::MissingParam(RouteName::BookEdit))
        );
        assert_eq!(
            Route::from_name("book-edit", Some("a/b")),
            Err(RouteError::InvalidParam {
                name: RouteName::BookEdit,
                id: "a/b".to_string(),
            })
        );
        assert!(matches!(
            Route::from_name("book-detail", Some("42?draft")),
            Err(RouteError::InvalidParam { .. })
        ));
        assert!(matches!(
            Route::from_name("book-detail", Some("42#top")),
            Err(RouteError::InvalidParam { .. })
        ));
        assert_eq!(
            RouteError::MissingParam(RouteName::BookEdit).to_string(),
            "route `book-edit` requires an id parameter"
        );
    }

    #[test]
    fn active_link_requires_same_route_and_params() {
        let detail = Route::BookDetail {
            id: "42".to_string(),
        };
        let other = Route::BookDetail {
            id: "7".to_string(),
        };
        assert!(is_active(&detail, Some(&detail)));
        assert!(!is_active(&other, Some(&detail)));
        assert!(!is_active(&Route::ShopBooks, Some(&detail)));
        assert!(!is_active(&Route::Home, None));
    }
}
