use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Template rendering error: {0}")]
    Template(#[from] tera::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("Internal error: {:?}", self);
        let status = StatusCode::INTERNAL_SERVER_ERROR;

        let body = format!(
            r#"<!DOCTYPE html>
<html>
<head>
    <title>Error {}</title>
</head>
<body>
    <div class="error-page">
        <h1>Error {}</h1>
        <p>Internal server error</p>
        <a href="/home">Return to homepage</a>
    </div>
</body>
</html>"#,
            status.as_u16(),
            status.as_u16()
        );

        (status, Html(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_error_becomes_500_html_page() {
        let err = AppError::Template(tera::Error::msg("boom"));
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let content_type = response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(content_type.starts_with("text/html"));
    }
}
