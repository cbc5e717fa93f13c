use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, web};
use log::{error, info, warn};

use crate::api::error::ApiError;
use crate::geocode::{GeocodeClient, GeocodeError};
use crate::utils::NonBlankExtension;

pub async fn district(
    req: HttpRequest,
    client: web::Data<GeocodeClient>
) -> Result<HttpResponse, ApiError> {
    // An unparsable query string counts as having no parameters
    let address = web::Query::<HashMap<String, String>>::from_query(req.query_string())
        .ok()
        .and_then(|query| query.into_inner().remove("address"))
        .non_blank()
        .ok_or(ApiError::MissingAddress)?;

    match client.resolve(&address).await {
        Ok(result) => {
            info!("Resolved '{}' to {} / {}", address.trim(), result.suburb, result.district);
            Ok(HttpResponse::Ok().json(result))
        },
        Err(err) => {
            match &err {
                GeocodeError::Unexpected(_) => {
                    error!("Error while resolving '{}': {}", address.trim(), err);
                },
                _ => {
                    warn!("Could not resolve '{}': {}", address.trim(), err);
                },
            }
            Err(err.into())
        },
    }
}
