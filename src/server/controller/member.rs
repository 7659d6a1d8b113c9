use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        member::{CreateMemberDto, MemberDto},
    },
    server::{
        controller::json_payload, error::AppError, model::member::CreateMemberParams,
        service::member::MemberService, state::AppState, util::parse::parse_record_id,
    },
};

/// Tag for grouping member endpoints in OpenAPI documentation
pub static MEMBER_TAG: &str = "member";

/// Create a new member.
///
/// # Returns
/// - `201 Created` - Successfully created member
/// - `400 Bad Request` - Name or email missing, or email malformed
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/member",
    tag = MEMBER_TAG,
    request_body = CreateMemberDto,
    responses(
        (status = 201, description = "Successfully created member", body = MemberDto),
        (status = 400, description = "Invalid member data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_member(
    State(state): State<AppState>,
    payload: Result<Json<CreateMemberDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let params = CreateMemberParams::from_dto(json_payload(payload)?)?;

    let member = MemberService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(member.into_dto())))
}

/// Get all members.
#[utoipa::path(
    get,
    path = "/members",
    tag = MEMBER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved members", body = Vec<MemberDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_members(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let members = MemberService::new(&state.db).get_all().await?;

    let members: Vec<MemberDto> = members.into_iter().map(|m| m.into_dto()).collect();

    Ok((StatusCode::OK, Json(members)))
}

/// Get a specific member by ID.
///
/// Consumed by the order service during enrichment.
#[utoipa::path(
    get,
    path = "/members/{id}",
    tag = MEMBER_TAG,
    params(
        ("id" = String, Path, description = "Member ID (UUID)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved member", body = MemberDto),
        (status = 400, description = "Malformed member ID", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_member_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_record_id(&id)?;

    match MemberService::new(&state.db).get_by_id(id).await? {
        Some(member) => Ok((StatusCode::OK, Json(member.into_dto()))),
        None => Err(AppError::NotFound("Member not found".to_string())),
    }
}

/// Delete a member.
#[utoipa::path(
    delete,
    path = "/members/{id}",
    tag = MEMBER_TAG,
    params(
        ("id" = String, Path, description = "Member ID (UUID)")
    ),
    responses(
        (status = 200, description = "Successfully deleted member", body = MessageDto),
        (status = 400, description = "Malformed member ID", body = ErrorDto),
        (status = 404, description = "Member not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_member(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_record_id(&id)?;

    if !MemberService::new(&state.db).delete(id).await? {
        return Err(AppError::NotFound("Member not found".to_string()));
    }

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Member deleted successfully".to_string(),
        }),
    ))
}
