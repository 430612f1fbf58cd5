use dioxus::prelude::*;
use pretty_assertions::assert_eq;
use shared_types::{detect, format_cents, Room, RoomStatus, RouteTable, View};
use shared_ui::{
    Badge, Banner, BannerTone, DataTable, DataTableBody, DataTableCell, DataTableRow, Sidebar,
    SidebarProvider, StatCard, StatGrid,
};

fn render(element: Element) -> String {
    dioxus_ssr::render_element(element)
}

fn room(number: &str, status: RoomStatus) -> Room {
    Room {
        id: number.parse().unwrap(),
        number: number.to_string(),
        room_type: "Double".to_string(),
        floor: 2,
        capacity: 2,
        nightly_rate_cents: 18_900,
        status,
    }
}

#[test]
fn test_sidebar_is_tinted_for_each_view() {
    for view in View::ALL {
        let html = render(rsx! {
            SidebarProvider { view: view.as_str(),
                Sidebar { "{view.label()}" }
            }
        });
        assert!(html.contains(&format!(r#"data-view="{view}""#)), "{html}");
        assert!(html.contains(view.label()));
    }
}

#[test]
fn test_switch_offer_names_the_target_view() {
    let detection = detect(&RouteTable::dashboard(), "/admin/products", View::User);
    let target = detection.switch_target().unwrap();
    let message = format!("This page belongs to the {}.", target.label().to_lowercase());

    let html = render(rsx! {
        Banner { message: message, tone: BannerTone::Info,
            span { "Switch" }
        }
    });
    assert!(html.contains("This page belongs to the admin view."), "{html}");
}

#[test]
fn test_room_rows_render_rate_and_status() {
    let rooms = vec![room("204", RoomStatus::ALL[0]), room("305", RoomStatus::ALL[1])];
    let html = render(rsx! {
        DataTable {
            DataTableBody {
                for room in rooms {
                    DataTableRow { key: "{room.id}",
                        DataTableCell { "{room.number}" }
                        DataTableCell { numeric: true, "{format_cents(room.nightly_rate_cents)}" }
                        DataTableCell { Badge { "{room.status.label()}" } }
                    }
                }
            }
        }
    });
    assert_eq!(html.matches("$189.00").count(), 2, "{html}");
    assert!(html.contains(RoomStatus::ALL[0].label()));
    assert!(html.contains(RoomStatus::ALL[1].label()));
}

#[test]
fn test_stat_grid_shows_money_in_dollars() {
    let html = render(rsx! {
        StatGrid {
            StatCard { label: "Revenue this month", value: format_cents(1_050_075) }
        }
    });
    assert!(html.contains("$10,500.75"), "{html}");
}
