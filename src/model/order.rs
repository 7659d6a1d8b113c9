use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: Uuid,
    pub member_ref: Uuid,
    pub book_ref: Uuid,
    pub initial_date: NaiveDate,
    pub delivery_date: NaiveDate,
}

/// Order creation payload.
///
/// Accepts the legacy `CustomerID`/`BookID` field names used by the existing dashboard.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderDto {
    #[serde(default, alias = "CustomerID")]
    pub member_ref: Option<String>,
    #[serde(default, alias = "BookID")]
    pub book_ref: Option<String>,
    #[serde(default)]
    pub initial_date: Option<String>,
    #[serde(default)]
    pub delivery_date: Option<String>,
}

/// Human-readable view of a loan, assembled from the order, member and book records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetailsDto {
    pub member_name: String,
    pub book_title: String,
    pub initial_date: NaiveDate,
    pub delivery_date: NaiveDate,
}
