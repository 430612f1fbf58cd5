use dioxus::prelude::*;
use shared_types::{format_cents, Product};
use shared_ui::components::{
    Badge, BadgeVariant, DataTable, DataTableBody, DataTableCell, DataTableColumn,
    DataTableHeader, DataTableRow, PageHeader, PageTitle,
};

use crate::api::ApiClient;
use crate::routes::shared::{
    use_list_state, DisabledCard, EmptyCard, ErrorCard, ListFilters, Loading, PaginationControls,
};
use crate::use_features;

/// Add-ons sold with a stay (breakfast, parking, spa).
#[component]
pub fn AdminProducts() -> Element {
    let features = use_features();

    rsx! {
        PageHeader {
            PageTitle { "Products" }
        }
        if features.products {
            ProductCatalog {}
        } else {
            DisabledCard { feature: "Products" }
        }
    }
}

#[component]
fn ProductCatalog() -> Element {
    let api = use_context::<ApiClient>();
    let state = use_list_state();

    let data = use_resource(move || {
        let api = api.clone();
        let query = state.query();
        async move { api.list_products(&query).await }
    });

    rsx! {
        ListFilters {
            state: state,
            placeholder: "Search products...",
            statuses: vec![("active", "Active"), ("inactive", "Inactive")],
        }

        match &*data.read() {
            Some(Ok(resp)) if resp.data.is_empty() => rsx! {
                EmptyCard { message: "No products in the catalog." }
            },
            Some(Ok(resp)) => rsx! {
                ProductTable { products: resp.data.clone() }
                PaginationControls { meta: resp.meta.clone(), page: state.page }
            },
            Some(Err(e)) => rsx! { ErrorCard { error: e.clone() } },
            None => rsx! { Loading {} },
        }
    }
}

#[component]
fn ProductTable(products: Vec<Product>) -> Element {
    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "Name" }
                DataTableColumn { "Category" }
                DataTableColumn { "Description" }
                DataTableColumn { "Status" }
                DataTableColumn { numeric: true, "Price" }
            }
            DataTableBody {
                for product in products {
                    DataTableRow { key: "{product.id}",
                        DataTableCell { "{product.name}" }
                        DataTableCell { "{product.category}" }
                        DataTableCell { "{product.description}" }
                        DataTableCell {
                            if product.active {
                                Badge { variant: BadgeVariant::Success, "Active" }
                            } else {
                                Badge { "Inactive" }
                            }
                        }
                        DataTableCell { numeric: true, "{format_cents(product.price_cents)}" }
                    }
                }
            }
        }
    }
}
