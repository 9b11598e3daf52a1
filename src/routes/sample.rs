//! `GET /sample`: echo the `param` query parameter back as a JSON object.

use axum::{
    extract::Query,
    Json,
};
use serde::Serialize;
use tracing::debug;

/// The value echoed when the request carries no `param` key at all.
pub const DEFAULT_PARAM: &str = "default";

/// The query string of a `/sample` request.
///
/// `param` is `None` only when the key is missing. `?param=` gives `Some("")`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SampleQuery {
    /// The percent-decoded value of the first `param` pair.
    pub param: Option<String>,
}
impl SampleQuery {
    /// Pick the first `param` out of the decoded query pairs. Later repetitions and other keys are ignored.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            param: pairs
                .into_iter()
                .find_map(|(key, value)| (key == "param").then_some(value)),
        }
    }
}

/// The body of every `/sample` response: `{"param": "<value>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EchoResult {
    /// Either the caller-supplied value or [`DEFAULT_PARAM`].
    pub param: String,
}
impl EchoResult {
    /// Resolve the echoed value. Only an absent parameter is replaced; an empty one is kept.
    pub fn resolve(param: Option<String>) -> Self {
        Self {
            param: param.unwrap_or_else(|| DEFAULT_PARAM.to_string()),
        }
    }
}

/// Handler of `GET /sample`.
pub async fn sample(Query(pairs): Query<Vec<(String, String)>>) -> Json<EchoResult> {
    let query = SampleQuery::from_pairs(pairs);
    let supplied = query.param.is_some();
    let result = EchoResult::resolve(query.param);
    debug!(supplied, param = %result.param, "Echoing the sample parameter.");

    Json(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_param_falls_back_to_default() {
        assert_eq!(EchoResult::resolve(None).param, "default");
    }

    #[test]
    fn empty_param_is_kept() {
        assert_eq!(EchoResult::resolve(Some(String::new())).param, "");
    }

    fn pairs(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn first_param_pair_wins() {
        let query = SampleQuery::from_pairs(pairs(&[("other", "x"), ("param", "a"), ("param", "b")]));
        assert_eq!(query.param.as_deref(), Some("a"));
    }

    #[test]
    fn missing_and_empty_params_stay_distinct() {
        assert_eq!(SampleQuery::from_pairs(pairs(&[("other", "")])).param, None);
        assert_eq!(
            SampleQuery::from_pairs(pairs(&[("param", "")])).param.as_deref(),
            Some("")
        );
    }

    #[test]
    fn supplied_param_is_echoed() {
        assert_eq!(EchoResult::resolve(Some("hello".into())).param, "hello");
    }
}
