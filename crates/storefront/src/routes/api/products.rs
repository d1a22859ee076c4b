//! Product API handlers.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use duka_core::{ProductId, ShopError};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use super::ProductJson;
use crate::error::{ApiResult, add_breadcrumb};
use crate::shop::detail::TRENDING_LIMIT;
use crate::state::AppState;

/// Default page size for product listings.
const DEFAULT_LIMIT: usize = 20;

/// Largest page size a client may ask for.
const MAX_LIMIT: usize = 100;

/// Product listing query parameters.
#[derive(Debug, Deserialize)]
pub struct ProductsQuery {
    pub category: Option<String>,
    pub offset: Option<usize>,
    pub limit: Option<usize>,
}

/// Trending query parameters.
#[derive(Debug, Deserialize)]
pub struct TrendingQuery {
    pub limit: Option<usize>,
}

/// A product with its like count.
#[derive(Debug, Serialize)]
pub struct TrendingJson {
    pub id: i32,
    pub name: String,
    pub price: u64,
    pub likes: u32,
}

/// Response to a like.
#[derive(Debug, Serialize)]
pub struct LikeJson {
    pub message: &'static str,
    pub likes: u32,
}

/// Distinct categories.
#[derive(Debug, Serialize)]
pub struct CategoriesJson {
    pub categories: Vec<String>,
}

/// List products in catalog order, optionally filtered by category.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<ProductsQuery>,
) -> ApiResult<Json<Vec<ProductJson>>> {
    let offset = query.offset.unwrap_or(0);
    let limit = query.limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT);
    let category = query
        .category
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty());

    let products: Vec<ProductJson> = state.with_shop(|shop| {
        let catalog = shop.catalog();
        match category {
            Some(category) => catalog
                .by_category(category)
                .skip(offset)
                .take(limit)
                .map(ProductJson::from)
                .collect(),
            None => catalog.page(offset, limit).map(ProductJson::from).collect(),
        }
    })?;

    Ok(Json(products))
}

/// Show one product.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> ApiResult<Json<ProductJson>> {
    let product = state.with_shop(|shop| shop.catalog().find(id).map(ProductJson::from))?;
    let product = product.ok_or(ShopError::NotFound(id))?;
    Ok(Json(product))
}

/// Most liked products.
#[instrument(skip(state))]
pub async fn trending(
    State(state): State<AppState>,
    Query(query): Query<TrendingQuery>,
) -> ApiResult<Json<Vec<TrendingJson>>> {
    let limit = query.limit.unwrap_or(TRENDING_LIMIT).min(MAX_LIMIT);

    let ranked: Vec<TrendingJson> = state.with_shop(|shop| {
        shop.trending(limit)
            .into_iter()
            .map(|(product, likes)| TrendingJson {
                id: product.id.as_i32(),
                name: product.name.clone(),
                price: product.price.amount,
                likes,
            })
            .collect()
    })?;

    Ok(Json(ranked))
}

/// Like a product.
#[instrument(skip(state))]
pub async fn like(
    State(state): State<AppState>,
    Path(id): Path<ProductId>,
) -> ApiResult<Json<LikeJson>> {
    let likes = state.with_shop(|shop| shop.like(id))??;
    add_breadcrumb(
        "shop",
        "Liked product",
        Some(&[("product_id", &id.to_string())]),
    );

    Ok(Json(LikeJson {
        message: "Liked successfully",
        likes,
    }))
}

/// List distinct categories.
#[instrument(skip(state))]
pub async fn categories(State(state): State<AppState>) -> ApiResult<Json<CategoriesJson>> {
    let categories: Vec<String> = state.with_shop(|shop| {
        shop.catalog()
            .categories()
            .into_iter()
            .map(str::to_string)
            .collect()
    })?;

    Ok(Json(CategoriesJson { categories }))
}
