// Toolbox - Web Server
// REST API over the tool kernels with Axum

use anyhow::{Context, Result};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use toolbox::{
    analyze, catalog_entries, convert, convert_at, hex_to_hsl, hex_to_rgb, Category, CharClasses,
    Config, Currency, Hsl, MockRateSource, Rgb, TextStats, ToolError,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Shared application state
#[derive(Clone)]
struct AppState {
    rates: Arc<MockRateSource>,
    password_length: usize,
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T> ApiResponse<T> {
    fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    fn err(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Bad input is the caller's fault (400); anything else is a transient upstream failure (503)
fn tool_error(e: ToolError) -> Response {
    let status = if e.is_validation() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    tracing::info!(error = %e, status = status.as_u16(), "request rejected");
    (status, Json(ApiResponse::<()>::err(e.to_string()))).into_response()
}

// ============================================================================
// Request / Response types
// ============================================================================

#[derive(Deserialize)]
struct UnitQuery {
    category: String,
    from: String,
    to: String,
    value: String,
}

#[derive(Serialize)]
struct UnitResponse {
    category: Category,
    from: String,
    to: String,
    value: String,
    /// Empty when the value isn't a number
    result: String,
}

#[derive(Deserialize)]
struct CurrencyQuery {
    amount: String,
    from: String,
    to: String,
}

#[derive(Serialize)]
struct CurrencyResponse {
    from: Currency,
    to: Currency,
    amount: String,
    rate: f64,
    converted: String,
    updated_at: String,
}

#[derive(Deserialize)]
struct PasswordQuery {
    length: Option<usize>,
    uppercase: Option<bool>,
    lowercase: Option<bool>,
    digits: Option<bool>,
    symbols: Option<bool>,
}

#[derive(Serialize)]
struct PasswordResponse {
    password: String,
    length: usize,
}

#[derive(Serialize)]
struct ColorResponse {
    hex: String,
    rgb: Rgb,
    hsl: Hsl,
    rgb_css: String,
    hsl_css: String,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::ok("OK"))
}

/// GET /api/tools - Tool catalog
async fn list_tools() -> impl IntoResponse {
    Json(ApiResponse::ok(catalog_entries()))
}

/// GET /api/units/convert - Convert a value between two units
async fn convert_units(Query(query): Query<UnitQuery>) -> Response {
    let category: Category = match query.category.parse() {
        Ok(c) => c,
        Err(e) => return tool_error(e),
    };

    for unit in [&query.from, &query.to] {
        if let Err(e) = category.require_unit(unit) {
            return tool_error(e);
        }
    }

    let result = convert(&query.value, &query.from, &query.to, category);

    Json(ApiResponse::ok(UnitResponse {
        category,
        from: query.from,
        to: query.to,
        value: query.value,
        result,
    }))
    .into_response()
}

/// GET /api/currency/convert - Convert an amount (applies the mock latency)
async fn convert_currency(
    State(state): State<AppState>,
    Query(query): Query<CurrencyQuery>,
) -> Response {
    let (from, to) = match (query.from.parse::<Currency>(), query.to.parse::<Currency>()) {
        (Ok(from), Ok(to)) => (from, to),
        (Err(e), _) | (_, Err(e)) => return tool_error(e),
    };

    let rate = if from == to {
        1.0
    } else {
        match state.rates.fetch(from, to).await {
            Ok(rate) => rate,
            Err(e) => return tool_error(e),
        }
    };

    let converted = convert_at(&query.amount, rate);

    Json(ApiResponse::ok(CurrencyResponse {
        from,
        to,
        amount: query.amount,
        rate,
        converted,
        updated_at: chrono::Utc::now().to_rfc3339(),
    }))
    .into_response()
}

/// GET /api/password - Generate a password
async fn generate_password(
    State(state): State<AppState>,
    Query(query): Query<PasswordQuery>,
) -> Response {
    let defaults = CharClasses::default();
    let classes = CharClasses {
        uppercase: query.uppercase.unwrap_or(defaults.uppercase),
        lowercase: query.lowercase.unwrap_or(defaults.lowercase),
        digits: query.digits.unwrap_or(defaults.digits),
        symbols: query.symbols.unwrap_or(defaults.symbols),
    };
    let length = toolbox::password::clamp_length(query.length.unwrap_or(state.password_length));

    match toolbox::generate(length, classes) {
        Ok(password) => Json(ApiResponse::ok(PasswordResponse { password, length })).into_response(),
        Err(e) => tool_error(e),
    }
}

/// POST /api/text/stats - Analyze the request body as plain text
async fn text_stats(body: String) -> Json<ApiResponse<TextStats>> {
    Json(ApiResponse::ok(analyze(&body)))
}

/// GET /api/color/:hex - RGB and HSL views of a hex color
async fn color_info(Path(hex): Path<String>) -> Response {
    match (hex_to_rgb(&hex), hex_to_hsl(&hex)) {
        (Some(rgb), Some(hsl)) => Json(ApiResponse::ok(ColorResponse {
            hex: format!("#{}", hex.trim_start_matches('#').to_uppercase()),
            rgb,
            hsl,
            rgb_css: rgb.css(),
            hsl_css: hsl.css(),
        }))
        .into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::<()>::err(format!("not a hex color: {}", hex))),
        )
            .into_response(),
    }
}

fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/tools", get(list_tools))
        .route("/units/convert", get(convert_units))
        .route("/currency/convert", get(convert_currency))
        .route("/password", get(generate_password))
        .route("/text/stats", post(text_stats))
        .route("/color/:hex", get(color_info))
        .with_state(state);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ============================================================================
// Main Server
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();
    toolbox::logging::init_stderr(&config)?;

    println!("🧰 Toolbox - Web Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let state = AppState {
        rates: Arc::new(MockRateSource::new(config.currency_delay)),
        password_length: config.password_length,
    };

    let listener = tokio::net::TcpListener::bind(&config.server_addr)
        .await
        .with_context(|| format!("Failed to bind to address {}", config.server_addr))?;

    println!("\n🚀 Server running on http://{}", config.server_addr);
    println!("   API: http://{}/api/tools", config.server_addr);
    println!("\n   Press Ctrl+C to stop\n");

    axum::serve(listener, router(state))
        .await
        .context("Server error")?;

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn state() -> AppState {
        AppState {
            rates: Arc::new(MockRateSource::new(Duration::from_millis(1))),
            password_length: 12,
        }
    }

    fn currency_query(amount: &str, from: &str, to: &str) -> Query<CurrencyQuery> {
        Query(CurrencyQuery {
            amount: amount.to_string(),
            from: from.to_string(),
            to: to.to_string(),
        })
    }

    #[tokio::test]
    async fn test_convert_units() {
        let response = convert_units(Query(UnitQuery {
            category: "length".to_string(),
            from: "meter".to_string(),
            to: "kilometer".to_string(),
            value: "1000".to_string(),
        }))
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let json = body_json(response).await;
        assert_eq!(json["data"]["result"], "1");
    }

    #[tokio::test]
    async fn test_convert_units_unknown_unit() {
        let response = convert_units(Query(UnitQuery {
            category: "weight".to_string(),
            from: "meter".to_string(),
            to: "gram".to_string(),
            value: "1".to_string(),
        }))
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["success"], false);
    }

    #[tokio::test]
    async fn test_convert_currency() {
        let response = convert_currency(
            State(state()),
            Query(CurrencyQuery {
                amount: "10".to_string(),
                from: "usd".to_string(),
                to: "EUR".to_string(),
            }),
        )
        .await;

        let json = body_json(response).await;
        assert_eq!(json["data"]["converted"], "8.50");
        assert_eq!(json["data"]["from"], "USD");
    }

    #[tokio::test]
    async fn test_converted_matches_returned_rate() {
        let response = convert_currency(State(state()), currency_query("4", "EUR", "USD")).await;

        let json = body_json(response).await;
        let rate = json["data"]["rate"].as_f64().unwrap();
        assert_eq!(json["data"]["converted"], format!("{:.2}", 4.0 * rate));
    }

    #[tokio::test]
    async fn test_convert_currency_error_statuses() {
        let response = convert_currency(State(state()), currency_query("1", "USD", "XYZ")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let failing = AppState {
            rates: Arc::new(MockRateSource::failing(Duration::from_millis(1))),
            password_length: 12,
        };
        let response = convert_currency(State(failing), currency_query("1", "USD", "EUR")).await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Failed to fetch exchange rate. Please try again.");
    }

    #[tokio::test]
    async fn test_password_empty_charset() {
        let response = generate_password(
            State(state()),
            Query(PasswordQuery {
                length: Some(10),
                uppercase: Some(false),
                lowercase: Some(false),
                digits: Some(false),
                symbols: Some(false),
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "Please select at least one character type");
    }

    #[tokio::test]
    async fn test_password_defaults_and_clamp() {
        let query = |length| PasswordQuery {
            length,
            uppercase: None,
            lowercase: None,
            digits: None,
            symbols: None,
        };

        let json = body_json(generate_password(State(state()), Query(query(None))).await).await;
        assert_eq!(json["data"]["length"], 12);
        assert_eq!(json["data"]["password"].as_str().unwrap().len(), 12);

        let json = body_json(generate_password(State(state()), Query(query(Some(500)))).await).await;
        assert_eq!(json["data"]["length"], 50);
    }

    #[tokio::test]
    async fn test_color_info() {
        let response = color_info(Path("3b82f6".to_string())).await;
        let json = body_json(response).await;
        assert_eq!(json["data"]["hex"], "#3B82F6");
        assert_eq!(json["data"]["rgb"]["g"], 130);

        let response = color_info(Path("nope".to_string())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_text_stats() {
        let Json(response) = text_stats("Hello world.".to_string()).await;
        let stats = response.data.unwrap();
        assert_eq!(stats.words, 2);
        assert_eq!(stats.sentences, 1);
    }
}
