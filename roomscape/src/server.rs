use crate::config::RoomscapeConfig;
use crate::routes::{ROUTES, View};
use crate::tokens;
use crate::views;
use axum::Router;
use axum::extract::Request;
use axum::http::{StatusCode, Uri};
use axum::middleware::{self, Next};
use axum::response::{Html, Response};
use axum::routing::get;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;
use strum::IntoEnumIterator;
use tower_http::services::ServeDir;
use vitrine::styling::utilities::{check_rules, check_utilities, generate};
use vitrine::{AppShell, AppShellBuilder, Theme, create_asset_files, shared_rules};

pub fn app_shell(config: &RoomscapeConfig) -> AppShell {
    AppShellBuilder::new()
        .title("Roomscape")
        .default_theme(config.default_theme())
        .header_label("Roomscape")
        .footer_label("Roomscape. Furniture that fits before it ships.")
        .build()
}

/// Views are immutable, so every page is rendered once at startup, each
/// through the containment boundary.
pub fn render_pages(shell: &AppShell) -> HashMap<View, String> {
    let mut pages = HashMap::new();
    for view in View::iter() {
        pages.insert(view, shell.guarded_page(|| views::render(view)));
    }
    pages
}

pub fn router(config: &RoomscapeConfig) -> Router {
    let shell = app_shell(config);
    let pages = Arc::new(render_pages(&shell));

    let mut app = Router::new().nest_service(
        "/assets",
        ServeDir::new(Path::new(&config.content.dist).join("assets")),
    );

    for (path, view) in ROUTES.entries() {
        let html = pages.get(view).cloned().unwrap_or_default();
        app = app.route(
            path,
            get(move || {
                let html = html.clone();
                async move { Html(html) }
            }),
        );
    }

    let fallback_pages = pages.clone();
    app.route("/health", get(|| async { "OK" }))
        .fallback(move |uri: Uri| {
            let pages = fallback_pages.clone();
            async move {
                let view = ROUTES.resolve(uri.path());
                let status = if *view == View::NotFound {
                    StatusCode::NOT_FOUND
                } else {
                    StatusCode::OK
                };
                let html = pages.get(view).cloned().unwrap_or_default();
                (status, Html(html))
            }
        })
        .layer(middleware::from_fn(log_request))
}

async fn log_request(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let response = next.run(req).await;
    if path != "/health" {
        tracing::info!("{method} {path} -> {}", response.status());
    }
    response
}

pub fn emit_assets(config: &RoomscapeConfig) -> anyhow::Result<()> {
    create_asset_files(
        Path::new(&config.content.dist),
        Path::new(&config.content.root),
        &tokens::design_tokens(),
        &config.scan(),
        config.default_theme(),
        &Theme::iter().collect::<Vec<_>>(),
    )
}

/// Verifies that every `var()` reference in the generated utilities and the
/// shared stylesheet resolves in every theme.
pub fn check_styles() -> anyhow::Result<()> {
    let themes: Vec<(String, Vec<_>)> = Theme::iter()
        .map(|theme| (theme.to_string(), theme.variable_rules()))
        .collect();

    check_utilities(&generate(&tokens::design_tokens()), &themes)?;
    check_rules(&shared_rules(), &themes)?;
    Ok(())
}

pub async fn serve(config: RoomscapeConfig) -> anyhow::Result<()> {
    emit_assets(&config)?;

    let app = router(&config);
    let listener = tokio::net::TcpListener::bind(&config.server.addr).await?;
    tracing::info!("listening on http://{}", config.server.addr);
    axum::serve(listener, app).await?;
    Ok(())
}
