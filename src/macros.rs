//! This module exports two macros used to declare the routes of an [`axum Router`](axum::Router):
//! - [`route_table`](crate::route_table) -> Declare the routes of one group.
//! - [`route_group`](crate::route_group) -> Nest several route tables under their module names.

/// Use this macro to nest route tables declared in child modules. \
/// To declare the routes themselves use the [`route_table`](crate::route_table) macro.
///
/// # Example
///
/// .../v1/mod.rs
/// ```ignore
/// paramecho::route_table! {
///     v1 {
///         sample, get;
///     }
/// }
/// ```
/// .../mod.rs
/// ```ignore
/// paramecho::route_group! {
///     api {   // The name of the generated function, usually the name of this module.
///         v1;
///     }
/// }
/// ```
///
/// The second block expands to:
///
/// ```ignore
/// mod v1;
///
/// pub fn api() -> paramecho::axum::Router {
///     paramecho::axum::Router::new()
///         .nest("/v1", v1::v1())
/// }
/// ```
#[macro_export]
macro_rules! route_group {
    {
        $group_id:ident {
            $( $group:ident );* ;
        }
    } => {
        $(
            mod $group;
        )*

        /// Router nesting every child group under `/<group>`.
        pub fn $group_id() -> $crate::axum::Router {
            $crate::axum::Router::new()
                $(
                    .nest(
                        &$crate::macros::route_path(::std::stringify!($group), &[]),
                        $group::$group()
                    )
                )*
        }
    };
}

/// Use this macro to declare a table of routes. \
/// To nest tables under a common prefix, use the [`route_group`](crate::route_group) macro.
///
/// # Example
///
/// Each route needs a handler function of the same name, declared in its own module.
///
/// .../routes/sample.rs
/// ```ignore
/// pub async fn sample(Query(pairs): Query<Vec<(String, String)>>) -> Json<EchoResult> {
///     // ...
/// }
/// ```
///
/// .../routes/mod.rs
/// ```ignore
/// paramecho::route_table! {
///     router {
///         index, get;                 // A handler called `index` is served at `/`.
///         sample, get;                // `GET /sample`
///         greet, post, ":name";       // `POST /greet/:name`
///     }
/// }
/// ```
///
/// The method is the name of any function in [`axum::routing`]. The table above expands to:
///
/// ```ignore
/// mod index;
/// mod sample;
/// mod greet;
///
/// pub fn router() -> paramecho::axum::Router {
///     paramecho::axum::Router::new()
///         .route("/", paramecho::axum::routing::get(index::index))
///         .route("/sample", paramecho::axum::routing::get(sample::sample))
///         .route("/greet/:name", paramecho::axum::routing::post(greet::greet))
/// }
/// ```
#[macro_export]
macro_rules! route_table {
    {
        $group_id:ident {
            $(
                $route:ident,
                $method:ident
                $(, $suffix:expr)?
            );*
            ;
        }
    } => {
        $( mod $route; )*

        /// Router serving every route of this table.
        pub fn $group_id() -> $crate::axum::Router {
            $crate::axum::Router::new()
                $(
                    .route(
                        &$crate::macros::route_path(::std::stringify!($route), &[$($suffix)?]),
                        $crate::axum::routing::$method($route::$route)
                    )
                )*
        }
    };
}

/// Build the path a route is registered under: `/<name>[/<suffix>]`, where the name `index` stands for `/`.
#[doc(hidden)]
pub fn route_path(name: &str, suffixes: &[&str]) -> String {
    let mut path = String::from("/");
    if name != "index" {
        path.push_str(name);
    }

    for suffix in suffixes {
        let suffix = suffix.trim_start_matches('/');
        if !path.ends_with('/') {
            path.push('/');
        }
        path.push_str(suffix);
    }

    path
}

#[cfg(test)]
mod tests {
    use super::route_path;

    #[test]
    fn index_maps_to_root() {
        assert_eq!(route_path("index", &[]), "/");
        assert_eq!(route_path("index", &[":id"]), "/:id");
    }

    #[test]
    fn named_routes_keep_their_name() {
        assert_eq!(route_path("sample", &[]), "/sample");
        assert_eq!(route_path("greet", &[":name"]), "/greet/:name");
        assert_eq!(route_path("greet", &["/:name"]), "/greet/:name");
    }
}
