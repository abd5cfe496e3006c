use crate::api;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        api::health::health_check,
        api::favs::list_favs,
        api::favs::create_fav,
        api::favs::update_fav,
        api::favs::delete_fav,
    ),
    components(
        schemas(
            crate::models::favorite::Favorite,
            api::favs::FavoriteRequest,
        )
    ),
    tags(
        (name = "favvault", description = "FavVault API")
    )
)]
pub struct ApiDoc;
