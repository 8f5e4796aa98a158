use axum::{
    http::{header, StatusCode, Uri},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

// Mood picker page served at "/"
#[derive(RustEmbed)]
#[folder = "frontend/"]
pub struct Assets;

pub async fn serve_frontend(uri: Uri) -> Response {
    let path = uri.path().trim_start_matches('/');

    if let Some(content) = Assets::get(path) {
        return serve_asset(path, content.data.into_owned());
    }

    let index_path = if path.is_empty() {
        "index.html".to_string()
    } else {
        format!("{}/index.html", path.trim_end_matches('/'))
    };
    if let Some(content) = Assets::get(&index_path) {
        return serve_asset(&index_path, content.data.into_owned());
    }

    // Unknown non-API routes get the shell page
    if !path.starts_with("api/") {
        if let Some(content) = Assets::get("index.html") {
            return serve_asset("index.html", content.data.into_owned());
        }
    }

    (StatusCode::NOT_FOUND, "404 Not Found").into_response()
}

fn serve_asset(path: &str, data: Vec<u8>) -> Response {
    let mime = mime_guess::from_path(path).first_or_octet_stream();

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, mime.as_ref().to_string()),
            (header::CACHE_CONTROL, cache_control_value(path).to_string()),
        ],
        data,
    )
        .into_response()
}

fn cache_control_value(path: &str) -> &'static str {
    if path.ends_with(".html") {
        "no-cache"
    } else {
        "public, max-age=3600"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn fetch(path: &str) -> Response {
        serve_frontend(path.parse::<Uri>().unwrap()).await
    }

    fn content_type(response: &Response) -> &str {
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }

    #[tokio::test]
    async fn test_root_serves_index() {
        let response = fetch("/").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(content_type(&response).starts_with("text/html"));
        assert_eq!(response.headers()[header::CACHE_CONTROL], "no-cache");
    }

    #[tokio::test]
    async fn test_assets_get_their_mime_type() {
        let response = fetch("/script.js").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(content_type(&response).contains("javascript"));
        assert_eq!(response.headers()[header::CACHE_CONTROL], "public, max-age=3600");
    }

    #[tokio::test]
    async fn test_unknown_routes_fall_back_to_index() {
        let response = fetch("/some/client/route").await;

        assert_eq!(response.status(), StatusCode::OK);
        assert!(content_type(&response).starts_with("text/html"));
    }

    #[tokio::test]
    async fn test_unknown_api_routes_are_not_found() {
        let response = fetch("/api/unknown").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
