//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Deserialize;
use shared::{ApiResponse, MenuCategory, MenuItem};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult, ErrorCode, ok};

/// Query params for listing the menu
#[derive(Debug, Deserialize)]
pub struct MenuQuery {
    pub category: Option<String>,
    pub available: Option<bool>,
}

/// List menu items
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<MenuQuery>,
) -> AppResult<Json<ApiResponse<Vec<MenuItem>>>> {
    let category = query
        .category
        .as_deref()
        .map(str::parse::<MenuCategory>)
        .transpose()
        .map_err(AppError::validation)?;

    let items = state
        .catalog
        .all()
        .iter()
        .filter(|item| category.is_none_or(|c| item.category == c))
        .filter(|item| query.available.is_none_or(|a| item.available == a))
        .cloned()
        .collect();
    Ok(ok(items))
}

/// Get one menu item
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<ApiResponse<MenuItem>>> {
    let item = state.catalog.get(&id).cloned().ok_or_else(|| {
        AppError::with_message(ErrorCode::MenuItemNotFound, format!("Menu item {} not found", id))
    })?;
    Ok(ok(item))
}
