//! Axum route configuration and API documentation.
//!
//! Every handler is registered through `OpenApiRouter` so the OpenAPI
//! document stays in lockstep with the routing table; Swagger UI serves the
//! generated document at `/swagger-ui`.

use axum::Router;
use tower_http::cors::CorsLayer;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, state::AppState};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Quill API",
        description = "Blog platform backend with OAuth login, posts, and threaded comments"
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = controller::auth::AUTH_TAG, description = "OAuth login and token revocation"),
        (name = controller::post::POST_TAG, description = "Blog post management"),
        (name = controller::comment::COMMENT_TAG, description = "Threaded comments"),
        (name = controller::user::USER_TAG, description = "User profiles and administration"),
        (name = controller::health::HEALTH_TAG, description = "Service health"),
    )
)]
struct ApiDoc;

/// Registers the bearer-token security scheme referenced by the
/// `security(("bearer_auth" = []))` annotations on protected handlers.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

pub fn router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::health::health))
        .routes(routes!(controller::auth::login))
        .routes(routes!(controller::auth::callback))
        .routes(routes!(controller::auth::logout))
        .routes(routes!(
            controller::post::list_posts,
            controller::post::create_post
        ))
        .routes(routes!(
            controller::post::get_post,
            controller::post::update_post,
            controller::post::delete_post
        ))
        .routes(routes!(controller::post::get_post_by_slug))
        .routes(routes!(controller::post::get_posts_by_tag))
        .routes(routes!(
            controller::comment::get_post_comments,
            controller::comment::create_comment
        ))
        .routes(routes!(
            controller::comment::update_comment,
            controller::comment::delete_comment
        ))
        .routes(routes!(controller::user::list_users))
        .routes(routes!(
            controller::user::get_current_user,
            controller::user::update_current_user
        ))
        .routes(routes!(controller::user::get_user))
        .routes(routes!(controller::user::get_user_posts))
        .routes(routes!(controller::user::verify_user))
        .routes(routes!(controller::user::set_user_role))
        .routes(routes!(controller::user::deactivate_user))
        .split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
