/// OpenAPI description of the JSON API
use crate::domain::ApodRecord;
use crate::errors::ErrorBody;
use utoipa::OpenApi;

pub const SWAGGER_UI_PATH: &str = "/swagger";
pub const OPENAPI_JSON_PATH: &str = "/api/swagger.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "NASA APOD API",
        version = "1.0",
        description = "An API to interact with NASA's Astronomy Picture of the Day"
    ),
    paths(crate::handlers::get_apod),
    components(schemas(ApodRecord, ErrorBody)),
    tags(
        (name = "apod", description = "NASA Astronomy Picture of the Day operations")
    )
)]
pub struct ApiDoc;
