use pretty_assertions::assert_eq;
use shared_types::{ListQuery, PaginatedResponse};

#[test]
fn test_default_query_has_normalized_paging() {
    assert_eq!(ListQuery::new().to_query_string(), "page=1&limit=20");
}

#[test]
fn test_guest_scoped_search_query() {
    let query = ListQuery::new()
        .page(2)
        .search("  sea view  ")
        .status("confirmed")
        .customer(Some(12));
    assert_eq!(
        query.to_query_string(),
        "page=2&limit=20&search=sea%20view&status=confirmed&customer_id=12"
    );
}

#[test]
fn test_all_status_and_blank_search_are_dropped() {
    let query = ListQuery::new().search("   ").status("all").limit(500).page(-3);
    assert_eq!(query.to_query_string(), "page=1&limit=100");
}

#[test]
fn test_paginated_response_from_api_json() {
    let body = r#"{
        "data": [{"id": 1, "name": "Breakfast", "description": "Buffet", "price_cents": 1800, "category": "food", "active": true}],
        "meta": {"page": 1, "limit": 20, "total": 1, "total_pages": 1, "has_next": false, "has_prev": false}
    }"#;
    let resp: PaginatedResponse<shared_types::Product> = serde_json::from_str(body).unwrap();
    assert_eq!(resp.data[0].name, "Breakfast");
    assert_eq!(resp.meta.total_pages, 1);
    assert!(!resp.meta.has_next);
}
