// API Integration Tests
//
// Purpose: exercise every endpoint through the router
// Run with: cargo test --features api --test api_integration_tests

#[cfg(feature = "api")]
mod api_tests {
    use axum::{
        body::Body,
        http::{header, Request, StatusCode},
    };
    use farm_advisor::{AppState, ServerConfig, create_router};
    use serde_json::{json, Value};
    use tower::ServiceExt; // for oneshot

    // Helper: Create test app with a fixed diagnosis seed
    fn create_test_app() -> axum::Router {
        let config = ServerConfig {
            diagnosis_seed: Some(7),
            ..ServerConfig::default()
        };
        create_router(AppState::new(config))
    }

    // Helper: Parse JSON response
    async fn json_response(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        serde_json::from_slice(&body).expect("Failed to parse JSON")
    }

    async fn get(uri: &str) -> axum::response::Response {
        create_test_app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn post_json(uri: &str, payload: Value) -> axum::response::Response {
        create_test_app()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(payload.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap()
    }

    // =========================================================================
    // Section 1: Health Check
    // =========================================================================

    #[tokio::test]
    async fn test_health_check() {
        let response = get("/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].is_string());
    }

    // =========================================================================
    // Section 2: Soil Score
    // =========================================================================

    #[tokio::test]
    async fn test_soil_score_excellent() {
        let response = post_json(
            "/api/soil/score",
            json!({
                "nitrogen": 150.0,
                "phosphorus": 60.0,
                "potassium": 150.0,
                "ph": 6.5,
                "organic_matter_percent": 4.0,
                "soil_type": "loamy"
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["score"], 100);
        assert_eq!(body["band"], "Excellent");
        assert_eq!(body["ph_status"], "Optimal");
        assert_eq!(body["recommendations"].as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_soil_score_poor() {
        let response = post_json(
            "/api/soil/score",
            json!({
                "nitrogen": 50.0,
                "phosphorus": 15.0,
                "potassium": 50.0,
                "ph": 4.5,
                "organic_matter_percent": 0.5,
                "soil_type": "sandy"
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["score"], 38);
        assert_eq!(body["band"], "Poor");
        assert_eq!(body["nutrients"][0]["status"], "Very Low");
        assert_eq!(body["recommendations"].as_array().unwrap().len(), 7);
    }

    // =========================================================================
    // Section 3: Farm Plan
    // =========================================================================

    #[tokio::test]
    async fn test_farm_plan() {
        let response = post_json(
            "/api/farm/plan",
            json!({
                "farm_size_acres": 10.0,
                "crop": "wheat",
                "soil_type": "loamy",
                "water_source": "irrigation",
                "planting_date": "2024-01-01"
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["harvest_date"], "2024-04-30");
        assert_eq!(body["expected_yield_tons"], 50.4);
        assert_eq!(body["water_requirement_liters"], 4500.0);

        let timeline = body["timeline"].as_array().unwrap();
        assert_eq!(timeline.len(), 5);
        assert_eq!(timeline[1]["activity"], "First Fertilization");
        assert_eq!(timeline[4]["date"], "2024-04-30");
    }

    #[tokio::test]
    async fn test_farm_plan_rejects_zero_acres() {
        let response = post_json(
            "/api/farm/plan",
            json!({
                "farm_size_acres": 0.0,
                "crop": "wheat",
                "soil_type": "loamy",
                "water_source": "irrigation",
                "planting_date": "2024-01-01"
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = json_response(response).await;
        assert!(body["error"].as_str().unwrap().contains("farm size"));
    }

    #[tokio::test]
    async fn test_farm_plan_rejects_bad_date() {
        let response = post_json(
            "/api/farm/plan",
            json!({
                "farm_size_acres": 3.0,
                "crop": "corn",
                "soil_type": "clay",
                "water_source": "mixed",
                "planting_date": "next spring"
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    // =========================================================================
    // Section 4: Crop Browser
    // =========================================================================

    #[tokio::test]
    async fn test_list_all_crops() {
        let response = get("/api/crops?crop=all&soil=all").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["rows"], 6);
        assert_eq!(body["data"][0]["name"], "Wheat");
    }

    #[tokio::test]
    async fn test_filter_crops() {
        let response = get("/api/crops?crop=wheat&soil=Clay").await;
        let body = json_response(response).await;
        assert_eq!(body["rows"], 1);
        assert_eq!(body["data"][0]["name"], "Wheat");

        let response = get("/api/crops?soil=peat").await;
        let body = json_response(response).await;
        assert_eq!(body["rows"], 0);
    }

    #[tokio::test]
    async fn test_get_crop() {
        let response = get("/api/crops/3").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["name"], "Rice");
        assert_eq!(body["chemicals"].as_array().unwrap().len(), 4);

        let response = get("/api/crops/99").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    // =========================================================================
    // Section 5: Market, Diagnosis, Contact
    // =========================================================================

    #[tokio::test]
    async fn test_market_trend() {
        let response = get("/api/market/wheat?range=1m").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = json_response(response).await;
        assert_eq!(body["series"]["range"], "1m");
        assert_eq!(body["series"]["historical"].as_array().unwrap().len(), 4);
        assert_eq!(body["series"]["projected"].as_array().unwrap().len(), 1);
        assert_eq!(body["insight"]["percent_change"], 3.9);
        assert_eq!(body["insight"]["title"], "Wheat Price Prediction");
    }

    #[tokio::test]
    async fn test_market_trend_defaults_to_one_year() {
        let response = get("/api/market/corn").await;
        let body = json_response(response).await;
        assert_eq!(body["series"]["range"], "1y");
        assert_eq!(body["series"]["labels"].as_array().unwrap().len(), 15);
    }

    #[tokio::test]
    async fn test_diagnosis_is_seeded() {
        let first = json_response(post_json("/api/diagnosis", json!({})).await).await;
        let second = json_response(post_json("/api/diagnosis", json!({})).await).await;
        assert_eq!(first, second);
        assert!(first["name"].is_string());
    }

    #[tokio::test]
    async fn test_contact_form() {
        let response = post_json(
            "/api/contact",
            json!({
                "name": "Asha",
                "email": "asha@example.org",
                "subject": "Soil test",
                "message": "When can you visit?"
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = json_response(response).await;
        assert_eq!(body["accepted"], true);

        let response = post_json(
            "/api/contact",
            json!({
                "name": "Asha",
                "email": "not-an-email",
                "subject": "Soil test",
                "message": "Hi"
            }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = json_response(response).await;
        assert_eq!(body["error"], "Please enter a valid email address");
    }
}
