use paramecho::axum::extract::Path;

pub async fn greet(Path(name): Path<String>) -> String {
    format!("hello {name}")
}
