use axum::{
    Router,
    http::{HeaderValue, Method, request},
    routing::get,
};
use tokio::net::TcpListener;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use warden_adapters::AllowedOrigins;
use warden_application::AuthService;
use warden_core::{PasswordHasher, UserStore};

use crate::routes::index;
use crate::tracing::{make_span_with_request_id, on_request, on_response};

/// HTTP front of the service. The [`AuthService`] is shared with every route as state.
pub struct AuthServer {
    router: Router,
}

impl AuthServer {
    pub fn new<U, H>(auth_service: AuthService<U, H>) -> Self
    where
        U: UserStore + Clone + 'static,
        H: PasswordHasher + Clone + 'static,
    {
        let router = Router::new()
            .route("/", get(index))
            .with_state(auth_service);

        Self { router }
    }

    fn with_trace_layer(mut self) -> Self {
        self.router = self.router.layer(
            TraceLayer::new_for_http()
                .make_span_with(make_span_with_request_id)
                .on_request(on_request)
                .on_response(on_response),
        );
        self
    }

    /// Convert the AuthServer into a router that can be nested into another application
    ///
    /// # Arguments
    /// * `allowed_origins` - CORS origins; CORS stays off when empty
    pub fn as_nested_router(mut self, allowed_origins: AllowedOrigins) -> Router {
        if !allowed_origins.is_empty() {
            let cors = CorsLayer::new()
                .allow_methods([Method::GET])
                .allow_credentials(true)
                .allow_origin(AllowOrigin::predicate(
                    move |origin: &HeaderValue, _request_parts: &request::Parts| {
                        origin
                            .to_str()
                            .is_ok_and(|origin| allowed_origins.contains(origin))
                    },
                ));

            self.router = self.router.layer(cors);
        }
        self.with_trace_layer().router
    }

    /// Run as a standalone server until the listener fails
    pub async fn run_standalone(
        self,
        listener: TcpListener,
        allowed_origins: AllowedOrigins,
    ) -> Result<(), std::io::Error> {
        let router = self.as_nested_router(allowed_origins);

        tracing::info!("Warden listening on {}", listener.local_addr()?);

        axum::serve(listener, router).await
    }
}
