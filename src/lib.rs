use serde::Serialize;
use worker::*;

pub mod config;
pub mod error;
pub mod models;
pub mod reporting;
pub mod service;
pub mod store;

use config::ServiceConfig;
use error::DirectoryError;
use service::EmployeeService;
use store::D1Directory;

#[derive(Serialize)]
struct HealthResponse<'a> {
    service: &'a str,
    status: &'a str,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

type Ctx = RouteContext<ServiceConfig>;

#[event(fetch)]
pub async fn fetch(req: Request, env: Env, _ctx: Context) -> Result<Response> {
    console_error_panic_hook::set_once();

    let config = ServiceConfig::from_env(&env);
    let started = js_sys::Date::now();
    let method = req.method();
    let path = req.path();
    let log_requests = config.log_requests;

    let response = Router::with_data(config)
        // health
        .get("/", |_, _| Response::ok("employee-directory-worker online"))
        .get("/health", |_, _| {
            Response::from_json(&HealthResponse {
                service: "employee-directory",
                status: "ok",
            })
        })
        // employees
        .post_async("/api/employee", create_employee)
        .get_async("/api/employee/:id", get_employee)
        .put_async("/api/employee/:id", replace_employee)
        .get_async("/api/employee/reportingStructure/:id", get_reporting_structure)
        // compensation
        .post_async("/api/employee/compensation", add_compensation)
        .get_async("/api/employee/compensation/:id", get_compensation)
        .run(req, env)
        .await;

    if log_requests {
        let elapsed = js_sys::Date::now() - started;
        match &response {
            Ok(resp) => console_log!(
                "{method:?} {} -> {} ({elapsed:.0}ms)",
                path,
                resp.status_code()
            ),
            Err(err) => console_error!("{method:?} {path} failed: {err}"),
        }
    }
    response
}

// ── Employees ───────────────────────────────────────────────────

async fn create_employee(mut req: Request, ctx: Ctx) -> Result<Response> {
    let employee: models::Employee = match req.json().await {
        Ok(body) => body,
        Err(err) => return invalid_request(format!("invalid employee payload: {err}")),
    };
    debug(
        &ctx,
        format!(
            "Received employee create request for '{} {}'",
            employee.first_name.as_deref().unwrap_or_default(),
            employee.last_name.as_deref().unwrap_or_default()
        ),
    );

    match employee_service(&ctx)?.create(employee).await {
        Ok(created) => {
            let location = format!("/api/employee/{}", created.employee_id);
            respond_created(&created, &location)
        }
        Err(err) => error_response(&err),
    }
}

async fn get_employee(_req: Request, ctx: Ctx) -> Result<Response> {
    let id = path_id(&ctx);
    debug(&ctx, format!("Received employee get request for '{id}'"));

    match employee_service(&ctx)?.get_by_id(&id).await {
        Ok(Some(employee)) => Response::from_json(&employee),
        Ok(None) => error_response(&DirectoryError::not_found("employee", id)),
        Err(err) => error_response(&err),
    }
}

async fn replace_employee(mut req: Request, ctx: Ctx) -> Result<Response> {
    let id = path_id(&ctx);
    debug(&ctx, format!("Received employee update request for '{id}'"));

    let replacement: models::Employee = match req.json().await {
        Ok(body) => body,
        Err(err) => return invalid_request(format!("invalid employee payload: {err}")),
    };

    match employee_service(&ctx)?
        .replace_by_id(&id, replacement)
        .await
    {
        Ok(updated) => Response::from_json(&updated),
        Err(err) => error_response(&err),
    }
}

async fn get_reporting_structure(_req: Request, ctx: Ctx) -> Result<Response> {
    let id = path_id(&ctx);
    debug(&ctx, format!("Received reporting structure request for '{id}'"));

    match employee_service(&ctx)?
        .reporting_structure_by_id(&id)
        .await
    {
        Ok(structure) => Response::from_json(&structure),
        Err(err) => error_response(&err),
    }
}

// ── Compensation ────────────────────────────────────────────────

async fn add_compensation(mut req: Request, ctx: Ctx) -> Result<Response> {
    let compensation: models::Compensation = match req.json().await {
        Ok(body) => body,
        Err(err) => return invalid_request(format!("invalid compensation payload: {err}")),
    };
    debug(
        &ctx,
        format!(
            "Received compensation add request for '{}'",
            compensation.employee_id
        ),
    );

    match employee_service(&ctx)?.add_compensation(compensation).await {
        Ok(added) => {
            let location = format!("/api/employee/compensation/{}", added.employee_id);
            respond_created(&added, &location)
        }
        Err(err) => error_response(&err),
    }
}

async fn get_compensation(_req: Request, ctx: Ctx) -> Result<Response> {
    let id = path_id(&ctx);
    debug(&ctx, format!("Received compensation request for '{id}'"));

    match employee_service(&ctx)?.get_compensation(&id).await {
        Ok(Some(compensation)) => Response::from_json(&compensation),
        Ok(None) => error_response(&DirectoryError::not_found("compensation", id)),
        Err(err) => error_response(&err),
    }
}

// ── Helpers ─────────────────────────────────────────────────────

fn employee_service(ctx: &Ctx) -> Result<EmployeeService<D1Directory>> {
    let store = D1Directory::from_env(&ctx.env, &ctx.data.db_binding)?;
    Ok(EmployeeService::new(store))
}

fn path_id(ctx: &Ctx) -> String {
    ctx.param("id").cloned().unwrap_or_default()
}

fn debug(ctx: &Ctx, message: String) {
    if ctx.data.log_requests {
        console_debug!("{message}");
    }
}

fn respond_created<T: Serialize>(body: &T, location: &str) -> Result<Response> {
    let mut resp = Response::from_json(body)?.with_status(201);
    resp.headers_mut().set("Location", location)?;
    Ok(resp)
}

fn error_response(err: &DirectoryError) -> Result<Response> {
    let status = err.status_code();
    if status >= 500 {
        console_error!("{err}");
    }
    Ok(Response::from_json(&ErrorBody {
        error: err.code(),
        message: err.to_string(),
    })?
    .with_status(status))
}

fn invalid_request(message: String) -> Result<Response> {
    Ok(Response::from_json(&ErrorBody {
        error: "invalid_request",
        message,
    })?
    .with_status(400))
}
