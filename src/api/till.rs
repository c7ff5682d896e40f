//! Till catalogue and checkout endpoints.

use axum::{extract::State, Json};
use chrono::Utc;

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{Product, ProductRequest, Transaction, TransactionRequest};
use crate::AppState;

/// GET /api/products - List the till catalogue.
pub async fn list_products(State(state): State<AppState>) -> ApiResult<Vec<Product>> {
    success(state.repo.list_products().await?)
}

/// POST /api/products - Add a product to the till grid.
pub async fn create_product(
    State(state): State<AppState>,
    Json(request): Json<ProductRequest>,
) -> ApiResult<Product> {
    if request.name.trim().is_empty() {
        return Err(AppError::Validation("Product name is required".to_string()));
    }
    if request.price < 0.0 {
        return Err(AppError::Validation(
            "Price cannot be negative".to_string(),
        ));
    }

    let product = Product {
        id: uuid::Uuid::new_v4().to_string(),
        name: request.name,
        price: request.price,
        color: request.color,
    };
    state.repo.create_product(&product).await?;
    success(product)
}

/// GET /api/transactions - List sale records, newest first.
pub async fn list_transactions(State(state): State<AppState>) -> ApiResult<Vec<Transaction>> {
    success(state.repo.list_transactions().await?)
}

/// POST /api/transactions - Record a checkout. Append-only.
pub async fn create_transaction(
    State(state): State<AppState>,
    Json(request): Json<TransactionRequest>,
) -> ApiResult<Transaction> {
    if request.items.is_empty() {
        return Err(AppError::Validation(
            "A transaction needs at least one item".to_string(),
        ));
    }

    let tx = Transaction {
        id: uuid::Uuid::new_v4().to_string(),
        timestamp: Utc::now().to_rfc3339(),
        items: request.items,
        total: request.total,
        method: request.method,
    };
    state.repo.create_transaction(&tx).await?;
    success(tx)
}
