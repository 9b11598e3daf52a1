pub async fn index() -> &'static str {
    "index"
}
