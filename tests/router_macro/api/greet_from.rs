use paramecho::axum::extract::Path;

pub async fn greet_from(Path((caller, name)): Path<(String, String)>) -> String {
    format!("hello {name} from {caller}")
}
