pub mod analytics;
pub mod customers;
pub mod overview;
pub mod products;

use dioxus::prelude::*;

pub use analytics::AdminAnalytics;
pub use customers::{AdminCustomerDetail, AdminCustomers};
pub use overview::{AdminOverview, OverviewStats};
pub use products::AdminProducts;

use super::payments::PaymentList;
use super::reservations::ReservationList;
use super::rooms::RoomList;

#[component]
pub fn AdminReservations() -> Element {
    rsx! { ReservationList { scoped: false } }
}

#[component]
pub fn AdminPayments() -> Element {
    rsx! { PaymentList { scoped: false } }
}

#[component]
pub fn AdminRooms() -> Element {
    rsx! { RoomList { admin: true } }
}
