use utoipa_axum::{router::OpenApiRouter, routes};

use crate::handlers;
use crate::state::AppState;

pub fn api_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .nest("/status", status_routes())
        .nest("/category", category_routes())
        .nest("/tag", tag_routes())
        .routes(routes!(handlers::tag::add_tag_to_pet))
        .nest("/pet", pet_routes())
        .nest("/order", order_routes())
        .nest("/user", user_routes())
        .routes(routes!(handlers::health::health))
}

fn status_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::status::list_statuses,
            handlers::status::create_status
        ))
        .routes(routes!(handlers::status::get_status))
}

fn category_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::category::list_categories,
            handlers::category::create_category
        ))
        .routes(routes!(handlers::category::get_category))
}

fn tag_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::tag::list_tags, handlers::tag::create_tag))
        .routes(routes!(handlers::tag::get_tag))
}

fn pet_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::pet::list_pets, handlers::pet::create_pet))
        .routes(routes!(handlers::pet::get_pet, handlers::pet::update_pet))
        // Static `/photourl` outranks `/{id}`.
        .routes(routes!(
            handlers::photo_url::list_photo_urls,
            handlers::photo_url::create_photo_url
        ))
        .routes(routes!(handlers::photo_url::get_photo_url))
}

fn order_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(
            handlers::order::list_orders,
            handlers::order::create_order
        ))
        .routes(routes!(handlers::order::get_order))
}

fn user_routes() -> OpenApiRouter<AppState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::user::list_users, handlers::user::create_user))
        .routes(routes!(
            handlers::user::get_user,
            handlers::user::update_user,
            handlers::user::delete_user
        ))
}
