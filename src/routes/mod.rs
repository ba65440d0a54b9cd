pub mod health;
pub mod tasks;
pub mod users;

use actix_web::web;

use crate::auth::AuthGuard;

/// Wires the HTTP surface: account routes at the root, task routes under
/// `/task` behind the auth guard.
///
/// `/health`, the `/task` scope, and `/login` are registered before the
/// `/{id}` lookup so the literal segments are matched first. Registration
/// and the user listing share the root resource.
pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(health::health)
        .service(
            web::scope("/task")
                .wrap(AuthGuard)
                .service(tasks::create_task)
                .service(tasks::list_tasks),
        )
        .service(users::login)
        .service(
            web::resource("/")
                .route(web::post().to(users::register))
                .route(web::get().to(users::list_users)),
        )
        .service(users::get_user);
}
