//! Listing REST API handlers
//!
//! Creation runs the full validation pipeline before anything is written:
//! contact rules, city directory, then image placement, then the record.

use crate::{
    ApiError, ApiResult, AppState, DeleteResponse, ListListingsQuery, ListingDto,
    ListingListResponse, ListingResponse,
};

use ad_core::validation::listing::{validate_listing, ListingDraft};
use ad_core::{export, ContactBundle, Listing};

use axum::{
    extract::{Multipart, Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::NaiveDate;
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/v1/listings
///
/// Create a listing from a multipart form (text fields plus an optional
/// `image` part).
pub async fn create_listing(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<impl IntoResponse> {
    let mut draft = ListingDraft::default();
    let mut contacts = ContactBundle::default();
    let mut image: Option<(&'static str, Vec<u8>)> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "title" => draft.title = field.text().await?,
            "tagline" => draft.tagline = Some(field.text().await?),
            "description" => draft.description = field.text().await?,
            "city" => draft.city = field.text().await?,
            "price" => {
                let raw = field.text().await?;
                draft.price = raw.trim().parse().map_err(|_| {
                    ApiError::validation_field("price", format!("price must be a number, got '{raw}'"))
                })?;
            }
            "phone" => contacts.phone = Some(field.text().await?),
            "email" => contacts.email = Some(field.text().await?),
            "handle" => contacts.handle = Some(field.text().await?),
            "other" => contacts.other = Some(field.text().await?),
            "image" => {
                let content_type = field.content_type().unwrap_or_default().to_string();
                let extension = state.upload.extension_for(&content_type).ok_or_else(|| {
                    ApiError::validation_field(
                        "image",
                        format!("unsupported image type '{content_type}'"),
                    )
                })?;

                let bytes = field.bytes().await?;
                if bytes.len() > state.upload.max_bytes {
                    return Err(ApiError::validation_field(
                        "image",
                        format!("image exceeds the {} byte limit", state.upload.max_bytes),
                    ));
                }
                image = Some((extension, bytes.to_vec()));
            }
            // Unknown fields are ignored
            _ => {}
        }
    }

    draft.contacts = contacts;
    let valid = validate_listing(draft)?;

    let mut listing = Listing::new(
        valid.title,
        valid.tagline,
        valid.description,
        valid.city.to_string(),
        valid.price,
        valid.contacts,
    );

    if let Some((extension, bytes)) = image {
        listing.image = Some(state.images.save(extension, &bytes).await?);
    }

    if let Err(e) = state.store.append(listing.clone()).await {
        // Don't leave an orphaned upload behind a failed record write
        if let Some(ref reference) = listing.image {
            if let Err(cleanup) = state.images.delete(reference).await {
                log::warn!("Failed to clean up image {}: {}", reference, cleanup);
            }
        }
        return Err(e.into());
    }

    log::info!("Created listing {} in {}", listing.id, listing.city);

    Ok((
        StatusCode::CREATED,
        Json(ListingResponse {
            listing: listing.into(),
        }),
    ))
}

/// GET /api/v1/listings
///
/// List all listings, optionally restricted to one creation day.
pub async fn list_listings(
    State(state): State<AppState>,
    Query(query): Query<ListListingsQuery>,
) -> ApiResult<Json<ListingListResponse>> {
    let listings = match query.date {
        Some(ref raw) => {
            let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
                ApiError::validation_field("date", format!("date must be YYYY-MM-DD, got '{raw}'"))
            })?;
            state.store.find_by_date(date).await?
        }
        None => state.store.load_all().await?,
    };

    Ok(Json(ListingListResponse {
        listings: listings.into_iter().map(ListingDto::from).collect(),
    }))
}

/// GET /api/v1/listings/:id
///
/// Get a single listing by ID
pub async fn get_listing(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ListingResponse>> {
    let listing_id = Uuid::parse_str(&id)?;

    let listing = state
        .store
        .find_by_id(listing_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Listing {} not found", id)))?;

    Ok(Json(ListingResponse {
        listing: listing.into(),
    }))
}

/// DELETE /api/v1/listings/:id
///
/// Delete a listing and any uploaded image it references.
pub async fn delete_listing(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let listing_id = Uuid::parse_str(&id)?;

    let removed = state
        .store
        .remove(listing_id)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Listing {} not found", id)))?;

    if let Some(ref reference) = removed.image {
        // Record removal already happened; an image cleanup failure is
        // logged, not surfaced.
        if let Err(e) = state.images.delete(reference).await {
            log::warn!("Failed to delete image {}: {}", reference, e);
        }
    }

    log::info!("Deleted listing {}", listing_id);

    Ok(Json(DeleteResponse {
        deleted: true,
        id: listing_id.to_string(),
    }))
}

/// GET /api/v1/listings/export.csv
///
/// Export all listings as comma-separated text.
pub async fn export_listings(State(state): State<AppState>) -> ApiResult<Response> {
    let listings = state.store.load_all().await?;
    let csv = export::export_csv(&listings);

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"listings.csv\"",
            ),
        ],
        csv,
    )
        .into_response())
}
