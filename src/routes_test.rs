use std::net::SocketAddr;

use super::*;

async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

fn public_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("public")
}

#[tokio::test]
async fn healthz_returns_ok() {
    let addr = serve(site_routes(&public_dir())).await;
    let resp = reqwest::get(format!("http://{addr}/healthz")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
}

#[tokio::test]
async fn static_assets_are_served() {
    let addr = serve(site_routes(&public_dir())).await;
    let resp = reqwest::get(format!("http://{addr}/robots.txt")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let body = resp.text().await.unwrap();
    assert!(body.contains("User-agent"));
}

#[tokio::test]
async fn unknown_paths_are_not_found() {
    let addr = serve(site_routes(&public_dir())).await;
    let resp = reqwest::get(format!("http://{addr}/missing.html")).await.unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn http_layers_compress_responses() {
    let addr = serve(with_http_layers(site_routes(&public_dir()))).await;
    let resp = reqwest::Client::new()
        .get(format!("http://{addr}/robots.txt"))
        .header(reqwest::header::ACCEPT_ENCODING, "gzip")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), reqwest::StatusCode::OK);
    let encoding = resp.headers().get(reqwest::header::CONTENT_ENCODING).unwrap();
    assert_eq!(encoding, "gzip");
}

#[tokio::test]
async fn bare_site_routes_are_not_compressed() {
    let addr = serve(site_routes(&public_dir())).await;
    let resp = reqwest::Client::new()
        .get(format!("http://{addr}/robots.txt"))
        .header(reqwest::header::ACCEPT_ENCODING, "gzip")
        .send()
        .await
        .unwrap();
    assert!(resp.headers().get(reqwest::header::CONTENT_ENCODING).is_none());
}
