use crate::{
    auth::AuthenticatedUser,
    error::AppError,
    models::{OwnerRef, PagedTasks, Task, TaskInput, TaskWithOwner},
    pagination::{PageParams, PageQuery},
    state::AppState,
};
use actix_web::{get, post, web, HttpResponse, Responder};
use validator::Validate;

/// Create a task for the authenticated user.
///
/// The owner is always the verified subject from the bearer token; nothing
/// in the payload can reassign it. `status` defaults to incomplete when
/// absent.
///
/// ## Responses:
/// - `201 Created`: the created `Task` as JSON.
/// - `401 Unauthorized`: no bearer token on the request.
/// - `403 Forbidden`: the token is invalid or expired.
/// - `422 Unprocessable Entity`: input validation on `TaskInput` failed.
#[post("")]
pub async fn create_task(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
    task_data: web::Json<TaskInput>,
) -> Result<impl Responder, AppError> {
    // Validate input
    task_data.validate()?;

    let task = Task::new(task_data.into_inner(), auth.0);
    state.tasks.insert(&task).await?;

    Ok(HttpResponse::Created().json(task))
}

/// List one page of the authenticated user's tasks.
///
/// `offset` is a 1-based page number and `limit` the page size; both are
/// required and strictly validated. The listing is always scoped to the
/// authenticated subject, and each task carries the owner's display data
/// (`{name, id}`).
///
/// ## Responses:
/// - `200 OK`: `{tasks, amountItems, totalPages}`.
/// - `401 Unauthorized`: no bearer token on the request.
/// - `403 Forbidden`: the token is invalid or expired.
/// - `422 Unprocessable Entity`: missing, non-numeric, or non-positive
///   pagination parameters.
#[get("")]
pub async fn list_tasks(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
    query: web::Query<PageQuery>,
) -> Result<impl Responder, AppError> {
    let params = PageParams::from_query(&query)?;

    let owner = state
        .users
        .find_by_id(auth.0)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".into()))?;
    let owner_ref = OwnerRef::from(&owner);

    let tasks = state
        .tasks
        .list_page(auth.0, params.skip()?, params.take())
        .await?;
    let amount_items = state.tasks.count(auth.0).await?;

    let tasks = tasks
        .into_iter()
        .map(|task| TaskWithOwner {
            task,
            user: owner_ref.clone(),
        })
        .collect();

    Ok(HttpResponse::Ok().json(PagedTasks {
        tasks,
        amount_items,
        total_pages: params.total_pages(amount_items),
    }))
}
