use hyper::{
    service::Service,
    Body,
    Request,
    StatusCode,
};
use paramecho::axum::Router;

async fn call(router: &mut Router, method: &str, uri: &str) -> (StatusCode, String) {
    let response = router
        .call(Request::builder().method(method).uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = hyper::body::to_bytes(response.into_body()).await.unwrap();

    (status, String::from_utf8(body.to_vec()).unwrap())
}

#[tokio::test]
async fn routes_are_generated() {
    let mut website = website().merge(nested());

    assert_eq!(
        call(&mut website, "GET", "/").await,
        (StatusCode::OK, "index".to_string())
    );
    assert_eq!(
        call(&mut website, "POST", "/status").await,
        (StatusCode::OK, "status accepted".to_string())
    );
    assert_eq!(
        call(&mut website, "GET", "/status").await.0,
        StatusCode::METHOD_NOT_ALLOWED
    );
    assert_eq!(
        call(&mut website, "GET", "/api/greet/MySuperAwesomeClient").await,
        (StatusCode::OK, "hello MySuperAwesomeClient".to_string())
    );
    assert_eq!(
        call(&mut website, "GET", "/api/greet_from/Alice/Bob").await,
        (StatusCode::OK, "hello Bob from Alice".to_string())
    );
    assert_eq!(
        call(&mut website, "GET", "/this_route_does_not_exist").await.0,
        StatusCode::NOT_FOUND
    );
}

paramecho::route_table! {
    website {
        index, get;
        status, post;
    }
}

paramecho::route_group! {
    nested {
        api;
    }
}
