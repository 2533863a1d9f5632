//! OpenAPI document for the HTTP API.

use utoipa::OpenApi;

use crate::dto::{AwardIntervalsDto, ProducerIntervalDto};
use crate::error::ErrorBody;

/// Path the OpenAPI JSON document is served from.
pub const OPENAPI_JSON_PATH: &str = "/v3/api-docs";

/// Path of the interactive documentation page.
pub const SWAGGER_UI_PATH: &str = "/swagger-ui";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Movies API",
        description = "Golden Raspberry Awards worst-picture nominees and producer win intervals"
    ),
    paths(crate::handlers::movies::awards_result),
    components(schemas(AwardIntervalsDto, ProducerIntervalDto, ErrorBody)),
    tags((name = "movie", description = "Award nominee queries"))
)]
pub struct ApiDoc;
