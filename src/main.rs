use std::sync::Arc;

use outpost::config::Config;
use outpost::http::response::Response;
use outpost::router::Router;
use outpost::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cfg = Config::load()?;

    let mut router = Router::new();
    router.route("^/$", "GET", |_req| {
        Ok(Response::ok("<html><body>outpost is up</body></html>"))
    })?;
    router.route("^/hello/(\\w+)$", "GET", |req| {
        Ok(Response::ok(format!("Hello, {}!", req.path)))
    })?;
    router.route("^/echo$", "POST", |req| {
        Ok(Response::ok(req.request.body.clone()))
    })?;
    let router = Arc::new(router);

    tokio::select! {
        res = server::listener::run(&cfg, router) => {
            res?;
        }

        _ = tokio::signal::ctrl_c() => {
            tracing::info!("Shutdown signal received");
        }
    }

    Ok(())
}
