use actix_web::{HttpRequest, HttpResponse, Responder, delete, get, put, web};
use actix_web::{App, HttpServer};
use appointments_view::api::HttpAppointmentsApi;
use appointments_view::config::Config;
use serde_json::{Value, json};
use std::net::TcpListener;
use std::sync::Mutex;

/// A request as the fake backend saw it
#[derive(Debug, Clone, PartialEq)]
pub struct Received {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: Option<Value>,
}

/// Canned answers for the fake backend
pub struct Backend {
    pub list_status: u16,
    pub list_body: Value,
    pub mutation_body: String,
    pub received: Mutex<Vec<Received>>,
}

impl Default for Backend {
    fn default() -> Self {
        Backend {
            list_status: 200,
            list_body: json!([appointment_json(1), appointment_json(2)]),
            mutation_body: r#"{"status":"success","message":"Done"}"#.to_string(),
            received: Mutex::new(Vec::new()),
        }
    }
}

impl Backend {
    fn record(&self, req: &HttpRequest, body: Option<Value>) {
        let content_type = req
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        self.received.lock().unwrap().push(Received {
            method: req.method().to_string(),
            path: req.path().to_string(),
            content_type,
            body,
        });
    }
}

pub fn appointment_json(id: i64) -> Value {
    json!({
        "id": id,
        "fullName": format!("Patient {}", id),
        "phone": "555-0100",
        "department": "Cardiology",
        "appointmentDate": "2025-07-01",
        "appointmentTime": "09:00:00",
        "status": "Scheduled",
        "doctor": { "id": 3, "fullName": "Dr. Hopper" }
    })
}

#[get("/list")]
async fn list(req: HttpRequest, backend: web::Data<Backend>) -> impl Responder {
    backend.record(&req, None);
    match backend.list_status {
        200 => HttpResponse::Ok().json(&backend.list_body),
        code => HttpResponse::build(actix_web::http::StatusCode::from_u16(code).unwrap())
            .body("backend exploded"),
    }
}

#[delete("/{id}")]
async fn remove(req: HttpRequest, backend: web::Data<Backend>) -> impl Responder {
    backend.record(&req, None);
    HttpResponse::Ok().body(backend.mutation_body.clone())
}

#[put("/{id}")]
async fn update(
    req: HttpRequest,
    body: web::Json<Value>,
    backend: web::Data<Backend>,
) -> impl Responder {
    backend.record(&req, Some(body.into_inner()));
    HttpResponse::Ok().body(backend.mutation_body.clone())
}

#[get("/department/{name}")]
async fn doctors(req: HttpRequest, backend: web::Data<Backend>) -> impl Responder {
    backend.record(&req, None);
    HttpResponse::Ok().json(json!([
        { "id": 11, "fullName": "Dr. Snow", "department": "Cardiology", "available": true }
    ]))
}

fn init(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/appointments")
            .service(list)
            .service(remove)
            .service(update),
    )
    .service(web::scope("/api/doctors").service(doctors));
}

pub struct TestBackend {
    pub address: String,
    pub backend: web::Data<Backend>,
}

impl TestBackend {
    pub fn api(&self) -> HttpAppointmentsApi {
        HttpAppointmentsApi::new(Config::new(&self.address).expect("valid test address"))
    }

    pub fn received(&self) -> Vec<Received> {
        self.backend.received.lock().unwrap().clone()
    }
}

/// Serves `backend` on a random local port under `/api`.
pub async fn spawn_backend(backend: Backend) -> TestBackend {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let backend = web::Data::new(backend);

    let data = backend.clone();
    let server = HttpServer::new(move || App::new().app_data(data.clone()).configure(init))
        .workers(1)
        .listen(listener)
        .expect("Failed to listen")
        .run();
    let _ = tokio::spawn(server);

    TestBackend {
        address: format!("http://127.0.0.1:{}/api", port),
        backend,
    }
}
