use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;
use validator::ValidationErrors;

use crate::application::app_error::AppError;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub msg: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FieldError {
    pub param: String,
    pub msg: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub errors: Vec<FieldError>,
}

const SERVER_ERROR: &str = "Server Error";

fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut result: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| FieldError {
                param: field.to_string(),
                msg: error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| format!("Invalid value for `{}`", field)),
            })
        })
        .collect();
    result.sort_by(|a, b| a.param.cmp(&b.param));
    result
}

fn validation_response(errors: Vec<FieldError>) -> Response {
    (StatusCode::BAD_REQUEST, Json(ValidationErrorResponse { errors })).into_response()
}

fn message_response(status: StatusCode, msg: String) -> Response {
    (status, Json(ErrorResponse { msg })).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::ValidationError(errors) => validation_response(field_errors(errors)),
            AppError::InvalidJson(rejection) => validation_response(vec![FieldError {
                param: "body".to_string(),
                msg: rejection.body_text(),
            }]),
            AppError::StatusRequired => validation_response(vec![FieldError {
                param: "status".to_string(),
                msg: self.to_string(),
            }]),
            AppError::InvalidDate { field, .. } => validation_response(vec![FieldError {
                param: field.to_string(),
                msg: self.to_string(),
            }]),
            AppError::ProfileNotFound | AppError::InvalidId(_) => {
                message_response(StatusCode::BAD_REQUEST, AppError::ProfileNotFound.to_string())
            }
            AppError::MissingToken | AppError::InvalidToken => {
                message_response(StatusCode::UNAUTHORIZED, self.to_string())
            }
            AppError::DatabaseError(_) => {
                tracing::error!(error = %self, "Request failed");
                message_response(StatusCode::INTERNAL_SERVER_ERROR, SERVER_ERROR.to_string())
            }
        }
    }
}
