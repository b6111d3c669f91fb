//! HTTP server for the server-rendered article routes

use anyhow::Result;
use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::helpers::encode_component;
use crate::pages::{not_found_html, Section};
use crate::Site;

/// Query string of `/post` and `/api/article`
#[derive(Debug, Deserialize)]
struct SlugQuery {
    slug: Option<String>,
}

/// Query string of section pages
#[derive(Debug, Deserialize)]
struct SectionQuery {
    sub: Option<String>,
}

/// Build the application router
pub fn router(site: Site) -> Router {
    let public_dir = site.public_dir.clone();
    let state = Arc::new(site);

    Router::new()
        .route("/post/:slug", get(share_handler))
        .route("/post", get(post_redirect_handler))
        .route("/api/article", get(api_article_handler))
        .route("/fragments/post/:slug", get(article_fragment_handler))
        .route("/fragments/home", get(home_fragment_handler))
        .route("/fragments/:section", get(section_fragment_handler))
        .fallback_service(ServeDir::new(public_dir).append_index_html_on_directories(true))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the server
pub async fn start(site: &Site, ip: &str, port: u16) -> Result<()> {
    let app = router(site.clone());

    // Parse address - handle "localhost" specially
    let bind_ip = if ip == "localhost" { "127.0.0.1" } else { ip };
    let addr: SocketAddr = format!("{}:{}", bind_ip, port).parse()?;

    println!("Server running at http://{}:{}", ip, port);
    println!("Press Ctrl+C to stop.");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// `/post/<slug>`: article document with social meta tags
async fn share_handler(
    State(site): State<Arc<Site>>,
    Path(slug): Path<String>,
    headers: HeaderMap,
) -> Response {
    share_response(&site, &slug, host(&headers)).await
}

/// `/api/article?slug=<slug>`: same document, slug from the query string
async fn api_article_handler(
    State(site): State<Arc<Site>>,
    Query(query): Query<SlugQuery>,
    headers: HeaderMap,
) -> Response {
    match query.slug.filter(|s| !s.is_empty()) {
        Some(slug) => share_response(&site, &slug, host(&headers)).await,
        None => (StatusCode::BAD_REQUEST, "Slug is required").into_response(),
    }
}

/// `/post?slug=<slug>`: legacy link, moved to the clean URL
async fn post_redirect_handler(Query(query): Query<SlugQuery>) -> Response {
    let location = redirect_location(query.slug.as_deref());
    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, location)]).into_response()
}

async fn article_fragment_handler(
    State(site): State<Arc<Site>>,
    Path(target): Path<String>,
) -> Response {
    match site.article_fragment(&target).await {
        Ok(Some(html)) => Html(html).into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, Html(not_found_html())).into_response(),
        Err(e) => {
            tracing::error!("Error loading article {:?}: {}", target, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error loading article").into_response()
        }
    }
}

async fn home_fragment_handler(State(site): State<Arc<Site>>) -> Response {
    match site.home().await {
        Ok(fragments) => Json(fragments).into_response(),
        Err(e) => {
            tracing::error!("Error loading articles: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error loading articles. Please try again later.",
            )
                .into_response()
        }
    }
}

async fn section_fragment_handler(
    State(site): State<Arc<Site>>,
    Path(name): Path<String>,
    Query(query): Query<SectionQuery>,
) -> Response {
    let Some(section) = Section::from_path(&name) else {
        return (StatusCode::NOT_FOUND, "Not found").into_response();
    };

    match site.section(section, query.sub.as_deref()).await {
        Ok(html) => Html(html).into_response(),
        Err(e) => {
            tracing::error!("Error loading {} articles: {}", section.title(), e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Error loading articles. Please try again later.",
            )
                .into_response()
        }
    }
}

async fn share_response(site: &Site, slug: &str, host: Option<&str>) -> Response {
    match site.share_document(slug, host).await {
        Ok(Some(html)) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            html,
        )
            .into_response(),
        Ok(None) => (StatusCode::NOT_FOUND, "Article not found").into_response(),
        Err(e) => {
            tracing::error!("Error fetching article {:?}: {}", slug, e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Error loading article").into_response()
        }
    }
}

/// Where `/post?slug=` points: the clean article URL, or home without a slug
fn redirect_location(slug: Option<&str>) -> String {
    match slug.filter(|s| !s.is_empty()) {
        Some(slug) => format!("/post/{}", encode_component(slug)),
        None => "/".to_string(),
    }
}

fn host(headers: &HeaderMap) -> Option<&str> {
    headers.get(header::HOST).and_then(|h| h.to_str().ok())
}
