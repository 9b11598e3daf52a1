use paramecho::axum::response::IntoResponse;

pub async fn status() -> impl IntoResponse {
    "status accepted"
}
