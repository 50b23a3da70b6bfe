use actix_web::{get, post, web, HttpResponse};
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::datatypes::requests::NewComment;
use crate::storage::CommentStore;

pub const SERVICE_NAME: &str = "travel-diary";

fn bad_request(message: &str) -> HttpResponse {
    HttpResponse::BadRequest().json(json!({ "error": message }))
}

fn server_error(message: &str) -> HttpResponse {
    HttpResponse::InternalServerError().json(json!({ "error": message }))
}

/// All comments for a city, oldest first. A city nobody commented on yields
/// `[]` rather than an error. The path segment is the lookup key verbatim.
#[get("/comments/{city}")]
pub async fn get_comments(
    store: web::Data<CommentStore>,
    city: web::Path<String>,
) -> HttpResponse {
    match store.city_comments(&city).await {
        Ok(comments) => HttpResponse::Ok().json(comments),
        Err(error) => {
            warn!(%city, ?error, "Failed to read comments");
            server_error("cannot read comments")
        }
    }
}

/// Appends one comment to a city. The body is parsed by hand so malformed
/// JSON and bad fields both come back as a JSON error object.
#[post("/comments/{city}")]
pub async fn post_comment(
    store: web::Data<CommentStore>,
    city: web::Path<String>,
    body: web::Bytes,
) -> HttpResponse {
    let payload: Value = match serde_json::from_slice(&body) {
        Ok(value) => value,
        Err(_) => return bad_request("invalid request body"),
    };
    let request = match NewComment::from_value(&payload) {
        Ok(request) => request,
        Err(message) => return bad_request(message),
    };

    match store.append(&city, request.nick, request.text).await {
        Ok(comment) => {
            debug!(%city, id = comment.id, "Comment stored");
            HttpResponse::Ok().json(comment)
        }
        Err(error) => {
            warn!(%city, ?error, "Failed to save comment");
            server_error("cannot save comment")
        }
    }
}

#[get("/health")]
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "status": "ok", "service": SERVICE_NAME }))
}
