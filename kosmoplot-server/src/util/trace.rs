use axum::{
    extract::{
        MatchedPath,
        Request,
    },
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::{
    DefaultOnRequest,
    DefaultOnResponse,
    TraceLayer,
};

pub fn with_request_tracing(router: Router) -> Router {
    router.layer(
        ServiceBuilder::new().layer(
            TraceLayer::new_for_http()
                .make_span_with(|req: &Request| {
                    let method = req.method();
                    let uri = req.uri();

                    // axum automatically adds this extension.
                    let matched_path = req
                        .extensions()
                        .get::<MatchedPath>()
                        .map(|matched_path| matched_path.as_str());

                    tracing::info_span!("request", %method, %uri, matched_path)
                })
                .on_request(DefaultOnRequest::new().level(tracing::Level::INFO))
                .on_response(DefaultOnResponse::new().level(tracing::Level::INFO)),
        ),
    )
}
