//! A central place to register App routes.
use actix_service::ServiceFactory;
use actix_web::{
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    web, App, Error,
};

use super::state::Global;
use super::{authors, books};

#[expect(
    clippy::literal_string_with_formatting_args,
    reason = "Actix Web resource path uses `{param}` syntax which is not formatting but route pattern matching"
)]
/// Central place to register all the App routing.
///
/// Authors are keyed by a store-assigned id, so they are created with POST on
/// the collection; books are keyed by a client-supplied isbn, so they are
/// created (or overwritten) with PUT on the keyed resource.
#[tracing::instrument(skip(app, state))]
pub fn register_app<
    T: Global + Clone + 'static,
    U: MessageBody,
    V: ServiceFactory<
        ServiceRequest,
        Response = ServiceResponse<U>,
        Config = (),
        InitError = (),
        Error = Error,
    >,
>(
    mut app: App<V>,
    state: &T,
) -> App<V> {
    app = app
        .service(
            web::scope("/authors")
                .service(
                    web::resource("")
                        .route(web::post().to(authors::create))
                        .route(web::get().to(authors::list)),
                )
                .service(
                    web::resource("/{id}")
                        .route(web::get().to(authors::get))
                        .route(web::put().to(authors::full_update))
                        .route(web::patch().to(authors::partial_update))
                        .route(web::delete().to(authors::delete)),
                ),
        )
        .service(
            web::scope("/books")
                .service(web::resource("").route(web::get().to(books::list)))
                .service(
                    web::resource("/{isbn}")
                        .route(web::get().to(books::get))
                        .route(web::put().to(books::save))
                        .route(web::patch().to(books::partial_update))
                        .route(web::delete().to(books::delete)),
                ),
        )
        .app_data(web::Data::new(state.clone()));
    app
}
