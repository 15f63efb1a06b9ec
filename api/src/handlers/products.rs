//! Product handlers
//!
//! CRUD endpoints for products. All of them sit behind the bearer middleware.

use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use crate::auth::AuthenticatedUser;
use crate::domain::entities::{Id, Product};
use crate::domain::pagination::PageRequest;
use crate::error::AppError;
use crate::AppState;

/// Request body for creating a product
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub name: String,
    pub price: f64,
}

/// Request body for replacing a product.
///
/// Clients usually send the whole product back; `id` and `created_at` are
/// accepted and ignored (the path id wins, creation time never changes).
#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub name: String,
    pub price: f64,
}

/// Query parameters for listing products.
///
/// Kept as raw strings: unparseable numbers mean "no pagination" rather than
/// a rejected request.
#[derive(Debug, Default, Deserialize)]
pub struct ListProductsQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort: Option<String>,
}

impl ListProductsQuery {
    pub fn page_request(&self) -> PageRequest {
        PageRequest::new(
            parse_or_zero(self.page.as_deref()),
            parse_or_zero(self.limit.as_deref()),
            self.sort.as_deref().unwrap_or_default(),
        )
    }
}

fn parse_or_zero(raw: Option<&str>) -> u64 {
    raw.and_then(|v| v.trim().parse().ok()).unwrap_or(0)
}

#[derive(Debug, Serialize)]
pub struct ProductResponse {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub created_at: String,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id.to_string(),
            name: p.name,
            price: p.price,
            created_at: p.created_at.to_rfc3339(),
        }
    }
}

fn is_blank(id: &str) -> bool {
    id.trim().is_empty()
}

/// Unknown and unparseable ids are indistinguishable to the caller
fn lookup_id(raw: &str) -> Result<Id, AppError> {
    raw.parse()
        .map_err(|_| AppError::NotFound(format!("Product {} not found", raw)))
}

/// POST /products
pub async fn create_product(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    payload: Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ProductResponse>), AppError> {
    let Json(request) = payload?;
    tracing::debug!(user_id = %caller.user_id, "Create product requested");

    let product = state
        .product_service
        .create(request.name, request.price)
        .await?;

    Ok((StatusCode::CREATED, Json(product.into())))
}

/// GET /products/:id
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductResponse>, AppError> {
    if is_blank(&id) {
        return Err(AppError::BadRequest("id is required".to_string()));
    }

    let product = state.product_service.get(&lookup_id(&id)?).await?;

    Ok(Json(product.into()))
}

/// PUT /products/:id
///
/// A blank id answers 404 here, unlike GET and DELETE which answer 400.
pub async fn update_product(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateProductRequest>, JsonRejection>,
) -> Result<Json<ProductResponse>, AppError> {
    if is_blank(&id) {
        return Err(AppError::NotFound("id is required".to_string()));
    }

    let Json(request) = payload?;
    tracing::debug!(user_id = %caller.user_id, product_id = %id, "Update product requested");

    let product = state
        .product_service
        .update(&id, request.name, request.price)
        .await?;

    Ok(Json(product.into()))
}

/// DELETE /products/:id
pub async fn delete_product(
    State(state): State<AppState>,
    Extension(caller): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    if is_blank(&id) {
        return Err(AppError::BadRequest("id is required".to_string()));
    }
    tracing::debug!(user_id = %caller.user_id, product_id = %id, "Delete product requested");

    state.product_service.delete(&lookup_id(&id)?).await?;

    Ok(StatusCode::OK)
}

/// GET /products?page&limit&sort
pub async fn list_products(
    State(state): State<AppState>,
    Query(query): Query<ListProductsQuery>,
) -> Result<Json<Vec<ProductResponse>>, AppError> {
    let products = state.product_service.list(query.page_request()).await?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::pagination::SortOrder;

    #[test]
    fn parse_create_request() {
        let request: CreateProductRequest =
            serde_json::from_str(r#"{"name": "Geladeira", "price": 10}"#).unwrap();
        assert_eq!(request.name, "Geladeira");
        assert_eq!(request.price, 10.0);
    }

    #[test]
    fn create_request_requires_price() {
        let result: Result<CreateProductRequest, _> =
            serde_json::from_str(r#"{"name": "Geladeira"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_request_accepts_full_product_shape() {
        let json = r#"{
            "id": "5f8e2f39-54bb-4b5b-9d4f-0d7b4d2ec1a1",
            "name": "Geladeira2",
            "price": 12.5,
            "created_at": "2024-01-01T00:00:00Z"
        }"#;
        let request: UpdateProductRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.name, "Geladeira2");
        assert_eq!(request.price, 12.5);
    }

    #[test]
    fn list_query_defaults_to_unpaginated() {
        let page = ListProductsQuery::default().page_request();
        assert!(!page.is_paginated());
        assert_eq!(page.sort, SortOrder::Asc);
    }

    #[test]
    fn list_query_ignores_unparseable_numbers() {
        let query = ListProductsQuery {
            page: Some("two".to_string()),
            limit: Some("10".to_string()),
            sort: Some("desc".to_string()),
        };
        let page = query.page_request();

        assert_eq!(page.page, 0);
        assert_eq!(page.limit, 10);
        assert!(!page.is_paginated());
        assert_eq!(page.sort, SortOrder::Desc);
    }

    #[test]
    fn negative_numbers_disable_pagination() {
        let query = ListProductsQuery {
            page: Some("-1".to_string()),
            limit: Some("10".to_string()),
            sort: None,
        };
        assert!(!query.page_request().is_paginated());
    }

    #[test]
    fn response_uses_rfc3339_timestamps() {
        let product = Product::create("Geladeira", 10.0).unwrap();
        let response = ProductResponse::from(product.clone());

        assert_eq!(response.id, product.id.to_string());
        assert_eq!(response.created_at, product.created_at.to_rfc3339());
    }
}
