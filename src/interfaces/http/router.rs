//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::FromRef,
    routing::{get, post},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::application::Services;
use crate::domain::{
    CreateCustomerDto, CreateDriverDto, CreateFeedbackDto, CreatePaymentDto,
    CreatePaymentMethodDto, CreateReservationDto, PaymentStatus, ReservationStatus,
    UpdateCustomerDto, UpdateDriverDto, UpdateFeedbackDto, UpdatePaymentDto,
    UpdatePaymentMethodDto, UpdateReservationDto, VehicleDto, VehicleStatus,
};
use crate::interfaces::http::common::ApiResponse;

use super::modules::{
    customers, drivers, feedback, health, payment_methods, payments, reservations, vehicles,
};

/// Router state. Handlers pick their part through `FromRef`.
#[derive(Clone)]
pub struct ApiState {
    pub services: Arc<Services>,
    pub db: Option<DatabaseConnection>,
    pub started_at: Arc<Instant>,
}

impl FromRef<ApiState> for Arc<Services> {
    fn from_ref(s: &ApiState) -> Self {
        Arc::clone(&s.services)
    }
}

impl FromRef<ApiState> for health::HealthState {
    fn from_ref(s: &ApiState) -> Self {
        health::HealthState {
            db: s.db.clone(),
            started_at: Arc::clone(&s.started_at),
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::home,
        health::health_check,
        // Customers
        customers::create_customer,
        customers::list_customers,
        customers::get_customer,
        customers::update_customer,
        customers::delete_customer,
        // Drivers
        drivers::create_driver,
        drivers::list_drivers,
        drivers::get_driver,
        drivers::update_driver,
        drivers::delete_driver,
        // Vehicles
        vehicles::create_vehicle,
        vehicles::list_vehicles,
        vehicles::get_vehicle,
        vehicles::list_driver_vehicles,
        vehicles::update_vehicle,
        vehicles::delete_vehicle,
        // Reservations
        reservations::create_reservation,
        reservations::list_reservations,
        reservations::get_reservation,
        reservations::list_customer_reservations,
        reservations::list_vehicle_reservations,
        reservations::update_reservation,
        reservations::delete_reservation,
        // Payments
        payments::create_payment,
        payments::list_payments,
        payments::get_payment,
        payments::update_payment,
        payments::delete_payment,
        // Payment methods
        payment_methods::create_payment_method,
        payment_methods::list_payment_methods,
        payment_methods::list_customer_payment_methods,
        payment_methods::get_payment_method,
        payment_methods::update_payment_method,
        payment_methods::delete_payment_method,
        // Feedback
        feedback::create_feedback,
        feedback::list_feedback,
        feedback::get_feedback,
        feedback::update_feedback,
        feedback::delete_feedback,
    ),
    components(
        schemas(
            ApiResponse<String>,
            health::HomeResponse,
            health::HealthResponse,
            health::ComponentHealth,
            CreateCustomerDto,
            UpdateCustomerDto,
            customers::CustomerResponse,
            CreateDriverDto,
            UpdateDriverDto,
            drivers::DriverResponse,
            VehicleDto,
            VehicleStatus,
            vehicles::VehicleResponse,
            CreateReservationDto,
            UpdateReservationDto,
            ReservationStatus,
            reservations::ReservationResponse,
            CreatePaymentDto,
            UpdatePaymentDto,
            PaymentStatus,
            payments::PaymentResponse,
            CreatePaymentMethodDto,
            UpdatePaymentMethodDto,
            payment_methods::PaymentMethodResponse,
            CreateFeedbackDto,
            UpdateFeedbackDto,
            feedback::FeedbackResponse,
        )
    ),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Customers", description = "Customer accounts"),
        (name = "Drivers", description = "Driver accounts"),
        (name = "Vehicles", description = "Fleet management and driver assignment"),
        (name = "Reservations", description = "Bookings with double-booking protection and status lifecycle"),
        (name = "Payments", description = "Payment bookkeeping per reservation"),
        (name = "Payment Methods", description = "Stored customer payment methods"),
        (name = "Feedback", description = "Customer ratings of completed bookings"),
    ),
    info(
        title = "Car Reservation API",
        version = "1.0.0",
        description = "REST API for the car reservation back office",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

fn customer_routes() -> Router<ApiState> {
    Router::new()
        .route("/create", post(customers::create_customer))
        .route("/get", get(customers::list_customers))
        .route(
            "/{id}",
            get(customers::get_customer)
                .put(customers::update_customer)
                .delete(customers::delete_customer),
        )
}

fn driver_routes() -> Router<ApiState> {
    Router::new()
        .route("/create", post(drivers::create_driver))
        .route("/get", get(drivers::list_drivers))
        .route(
            "/{id}",
            get(drivers::get_driver)
                .put(drivers::update_driver)
                .delete(drivers::delete_driver),
        )
}

fn vehicle_routes() -> Router<ApiState> {
    Router::new()
        .route("/create", post(vehicles::create_vehicle))
        .route("/get", get(vehicles::list_vehicles))
        .route("/driver/{driver_id}", get(vehicles::list_driver_vehicles))
        .route(
            "/{id}",
            get(vehicles::get_vehicle)
                .put(vehicles::update_vehicle)
                .delete(vehicles::delete_vehicle),
        )
}

fn reservation_routes() -> Router<ApiState> {
    Router::new()
        .route("/create", post(reservations::create_reservation))
        .route("/get", get(reservations::list_reservations))
        .route(
            "/customer/{customer_id}",
            get(reservations::list_customer_reservations),
        )
        .route(
            "/vehicle/{vehicle_id}",
            get(reservations::list_vehicle_reservations),
        )
        .route(
            "/{id}",
            get(reservations::get_reservation)
                .put(reservations::update_reservation)
                .delete(reservations::delete_reservation),
        )
}

fn payment_routes() -> Router<ApiState> {
    Router::new()
        .route("/create", post(payments::create_payment))
        .route("/get", get(payments::list_payments))
        .route(
            "/{id}",
            get(payments::get_payment)
                .put(payments::update_payment)
                .delete(payments::delete_payment),
        )
}

fn payment_method_routes() -> Router<ApiState> {
    Router::new()
        .route("/create", post(payment_methods::create_payment_method))
        .route("/get", get(payment_methods::list_payment_methods))
        .route(
            "/customer/{customer_id}",
            get(payment_methods::list_customer_payment_methods),
        )
        .route(
            "/{id}",
            get(payment_methods::get_payment_method)
                .put(payment_methods::update_payment_method)
                .delete(payment_methods::delete_payment_method),
        )
}

fn feedback_routes() -> Router<ApiState> {
    Router::new()
        .route("/", post(feedback::create_feedback))
        .route("/get", get(feedback::list_feedback))
        .route(
            "/{id}",
            get(feedback::get_feedback)
                .put(feedback::update_feedback)
                .delete(feedback::delete_feedback),
        )
}

/// Create the API router with all routes.
///
/// `db` is only used by the health check; pass `None` when the services run
/// on the in-memory store.
pub fn create_api_router(services: Arc<Services>, db: Option<DatabaseConnection>) -> Router {
    let state = ApiState {
        services,
        db,
        started_at: Arc::new(Instant::now()),
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    let api = Router::new()
        .route("/", get(health::home))
        .route("/health", get(health::health_check))
        .nest("/api/customers", customer_routes())
        .nest("/api/drivers", driver_routes())
        .nest("/api/vehicles", vehicle_routes())
        .nest("/api/reservations", reservation_routes())
        .nest("/api/payments", payment_routes())
        .nest("/api/payment-methods", payment_method_routes())
        .nest("/api/feedbacks", feedback_routes())
        .with_state(state);

    Router::new()
        .merge(swagger_routes)
        .merge(api)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
