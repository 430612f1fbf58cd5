//! Thin JSON client for the hotel REST API.
//!
//! Every call resolves to `Result<T, AppError>`: transport failures become
//! `AppErrorKind::Network`, non-2xx answers are decoded with
//! `AppError::from_status`.

use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use shared_types::{
    AnalyticsSummary, AppError, AppErrorKind, AuthUser, Customer, ListQuery, LoginRequest,
    PaginatedResponse, Payment, Product, Reservation, Role, Room,
};

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn list_url(&self, path: &str, query: &ListQuery) -> String {
        format!("{}{}?{}", self.base_url, path, query.to_query_string())
    }

    async fn send(&self, request: RequestBuilder) -> Result<String, AppError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!(error = %e, "request did not reach the API");
            AppError::network(e.to_string())
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AppError::network(e.to_string()))?;

        if !status.is_success() {
            let err = AppError::from_status(status.as_u16(), &body);
            tracing::warn!(status = status.as_u16(), kind = %err.kind, "API returned an error");
            return Err(err);
        }
        Ok(body)
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, AppError> {
        let body = self.send(request).await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(error = %e, "API response did not match the expected shape");
            AppError::internal(format!("Unexpected response from server: {e}"))
        })
    }

    async fn get<T: DeserializeOwned>(&self, url: String) -> Result<T, AppError> {
        self.fetch(self.http.get(url)).await
    }

    // ── Auth ──

    /// The signed-in user, or `None` when the session is missing or expired.
    pub async fn current_user(&self) -> Result<Option<AuthUser>, AppError> {
        match self.get::<AuthUser>(self.url("/auth/me")).await {
            Ok(user) => Ok(Some(user)),
            Err(e) if e.kind == AppErrorKind::Unauthorized => Ok(None),
            Err(e) => Err(e),
        }
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<AuthUser, AppError> {
        self.fetch(self.http.post(self.url("/auth/login")).json(request))
            .await
    }

    pub async fn logout(&self) -> Result<(), AppError> {
        self.send(self.http.post(self.url("/auth/logout")))
            .await
            .map(|_| ())
    }

    // ── Reservations & customers ──

    pub async fn list_reservations(
        &self,
        query: &ListQuery,
    ) -> Result<PaginatedResponse<Reservation>, AppError> {
        self.get(self.list_url("/reservations", query)).await
    }

    pub async fn get_reservation(&self, id: i64) -> Result<Reservation, AppError> {
        self.get(self.url(&format!("/reservations/{id}"))).await
    }

    pub async fn list_customers(
        &self,
        query: &ListQuery,
    ) -> Result<PaginatedResponse<Customer>, AppError> {
        self.get(self.list_url("/customers", query)).await
    }

    pub async fn get_customer(&self, id: i64) -> Result<Customer, AppError> {
        self.get(self.url(&format!("/customers/{id}"))).await
    }

    // ── Billing & inventory ──

    pub async fn list_payments(
        &self,
        query: &ListQuery,
    ) -> Result<PaginatedResponse<Payment>, AppError> {
        self.get(self.list_url("/payments", query)).await
    }

    pub async fn list_rooms(&self, query: &ListQuery) -> Result<PaginatedResponse<Room>, AppError> {
        self.get(self.list_url("/rooms", query)).await
    }

    pub async fn list_products(
        &self,
        query: &ListQuery,
    ) -> Result<PaginatedResponse<Product>, AppError> {
        self.get(self.list_url("/products", query)).await
    }

    pub async fn list_roles(&self) -> Result<Vec<Role>, AppError> {
        self.get(self.url("/roles")).await
    }

    pub async fn analytics(&self) -> Result<AnalyticsSummary, AppError> {
        self.get(self.url("/analytics/summary")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn base_url_loses_trailing_slash() {
        let client = ApiClient::new("http://localhost:8080/api/");
        assert_eq!(client.base_url(), "http://localhost:8080/api");
        assert_eq!(client.url("/roles"), "http://localhost:8080/api/roles");
    }

    #[test]
    fn list_urls_carry_the_query() {
        let client = ApiClient::new("http://localhost:8080/api");
        let query = ListQuery::new()
            .page(2)
            .search("Ada Lovelace")
            .status("confirmed")
            .customer(Some(7));
        assert_eq!(
            client.list_url("/reservations", &query),
            "http://localhost:8080/api/reservations?page=2&limit=20&search=Ada%20Lovelace&status=confirmed&customer_id=7"
        );
    }

    #[test]
    fn unscoped_list_has_paging_only() {
        let client = ApiClient::new("http://api.test");
        assert_eq!(
            client.list_url("/payments", &ListQuery::new().status("all")),
            "http://api.test/payments?page=1&limit=20"
        );
    }
}
