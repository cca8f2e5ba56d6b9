//! Integration tests for the Tutor Match Engine.
//!
//! This test suite drives the HTTP router end to end:
//! - Matching against seeded records
//! - Matching against imported spreadsheet rows
//! - Record listing and deletion
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{Value, json};
use tower::ServiceExt;

use tutor_match::api::{AppState, create_router};
use tutor_match::matching::{ScoreWeights, rank_matches};
use tutor_match::models::Student;
use tutor_match::store::{ProfileStore, SeedData};

const LEA_ID: &str = "5f0c6a52-3b1e-4c4e-9a53-2f1d8e7b9a01";
const YANIS_ID: &str = "5f0c6a52-3b1e-4c4e-9a53-2f1d8e7b9a02";
const MARC_ID: &str = "9b2e4d10-7c3a-4f5b-8e21-6a0d3c4b5e01";
const SOPHIE_ID: &str = "9b2e4d10-7c3a-4f5b-8e21-6a0d3c4b5e02";

// =============================================================================
// Test Helpers
// =============================================================================

fn seeded_router() -> Router {
    let seed = SeedData::load("./data/seed.json").expect("Failed to load seed data");
    create_router(AppState::new(seed.into_store(), ScoreWeights::default()))
}

fn empty_router() -> Router {
    create_router(AppState::new(ProfileStore::default(), ScoreWeights::default()))
}

async fn send(router: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

async fn get_matches(router: Router, student_id: &str) -> (StatusCode, Value) {
    send(
        router,
        "GET",
        &format!("/api/matching/students/{}", student_id),
        None,
    )
    .await
}

fn student_row(name: &str, subjects: &str, level: &str, availability: &str) -> Value {
    json!({
        "Nom complet": name,
        "Matière(s) demandée(s)": subjects,
        "Niveau scolaire": level,
        "Disponibilités": availability
    })
}

fn tutor_row(name: &str, subjects: &str, levels: &str, availability: &str) -> Value {
    json!({
        "Nom complet": name,
        "Matière(s) enseignée(s)": subjects,
        "Niveaux enseignés": levels,
        "Disponibilités": availability
    })
}

/// Imports one student and the given tutors, returning the student's ID.
async fn import_scenario(router: &Router, student: Value, tutors: Vec<Value>) -> String {
    let (status, _) = send(
        router.clone(),
        "POST",
        "/api/students/import",
        Some(json!({ "rows": [student] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(
        router.clone(),
        "POST",
        "/api/tutors/import",
        Some(json!({ "rows": tutors })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(router.clone(), "GET", "/api/students", None).await;
    body["students"][0]["id"].as_str().unwrap().to_string()
}

fn scores(body: &Value) -> Vec<u64> {
    body["matches"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["matchingScore"].as_u64().unwrap())
        .collect()
}

// =============================================================================
// Matching against seed data
// =============================================================================

#[tokio::test]
async fn test_seeded_ranking_for_lea() {
    let (status, body) = get_matches(seeded_router(), LEA_ID).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["student"]["fullName"], "Léa Martin");
    assert_eq!(body["student"]["level"], "Terminale");

    // Marc: subjects 50, level 100, availability 50 -> 15 + 30 + 20
    // Sophie: subjects 0, level 0, availability 50 -> 20
    assert_eq!(scores(&body), vec![65, 20]);
    assert_eq!(body["matches"][0]["tutorId"], MARC_ID);
    assert_eq!(body["matches"][0]["tutor"]["fullName"], "Marc Petit");
    assert_eq!(body["matches"][1]["tutorId"], SOPHIE_ID);
}

#[tokio::test]
async fn test_seeded_details_and_explanation() {
    let (_, body) = get_matches(seeded_router(), LEA_ID).await;
    let marc = &body["matches"][0];

    assert_eq!(
        marc["details"],
        json!({ "subjectScore": 50, "levelScore": 100, "availabilityScore": 50 })
    );
    assert_eq!(marc["explanation"]["matchedSubjects"], json!(["Mathématiques"]));
    assert_eq!(marc["explanation"]["matchedLevel"], "terminale");
    assert_eq!(
        marc["explanation"]["coveredSlots"],
        json!([{ "day": "Lundi", "startTime": "18:00", "endTime": "20:00" }])
    );

    let rule_ids: Vec<&str> = marc["explanation"]["steps"]
        .as_array()
        .unwrap()
        .iter()
        .map(|step| step["ruleId"].as_str().unwrap())
        .collect();
    assert_eq!(
        rule_ids,
        vec!["subject_coverage", "level_match", "availability_coverage", "composite"]
    );
}

#[tokio::test]
async fn test_accented_level_matches_unaccented_label() {
    // "3ème" against "3eme", "Anglais" taught, Samedi 10-12 against 09-11
    let (status, body) = get_matches(seeded_router(), YANIS_ID).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["matches"][0]["tutorId"], SOPHIE_ID);
    assert_eq!(scores(&body), vec![100, 0]);
}

#[tokio::test]
async fn test_alias_route_returns_same_ranking() {
    let router = seeded_router();
    let (_, primary) = get_matches(router.clone(), LEA_ID).await;
    let (status, alias) = send(
        router,
        "GET",
        &format!("/api/students/matching/{}", LEA_ID),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(primary, alias);
}

#[tokio::test]
async fn test_repeated_requests_are_deterministic() {
    let router = seeded_router();
    let (_, first) = get_matches(router.clone(), LEA_ID).await;
    let (_, second) = get_matches(router, LEA_ID).await;
    assert_eq!(first, second);
}

// =============================================================================
// Scenarios through the import endpoints
// =============================================================================

#[tokio::test]
async fn test_scenario_a_half_subject_coverage() {
    let router = empty_router();
    let student_id = import_scenario(
        &router,
        student_row("Élève A", "Maths, Physique", "Terminale", ""),
        vec![tutor_row("Tuteur A", "maths, chimie", "Seconde", "")],
    )
    .await;

    let (_, body) = get_matches(router, &student_id).await;
    assert_eq!(body["matches"][0]["details"]["subjectScore"], 50);
    assert_eq!(body["matches"][0]["details"]["levelScore"], 0);
    assert_eq!(body["matches"][0]["matchingScore"], 15);
}

#[tokio::test]
async fn test_scenario_b_level_match_ignores_case_and_accents() {
    let router = empty_router();
    let student_id = import_scenario(
        &router,
        student_row("Élève B", "Histoire", "Terminale", ""),
        vec![tutor_row("Tuteur B", "Maths", "terminale, 1ere", "")],
    )
    .await;

    let (_, body) = get_matches(router, &student_id).await;
    assert_eq!(body["matches"][0]["details"]["levelScore"], 100);
    assert_eq!(body["matches"][0]["explanation"]["matchedLevel"], "terminale");
}

#[tokio::test]
async fn test_scenario_c_touching_slots_do_not_overlap() {
    let router = empty_router();
    let student_id = import_scenario(
        &router,
        student_row("Élève C", "Maths", "Terminale", "Lundi de 18:00 à 20:00"),
        vec![
            tutor_row("Chevauche", "Physique", "Seconde", "Lundi de 19:00 à 21:00"),
            tutor_row("Contigu", "Physique", "Seconde", "Lundi de 20:00 à 21:00"),
        ],
    )
    .await;

    let (_, body) = get_matches(router, &student_id).await;
    assert_eq!(body["matches"][0]["tutor"]["fullName"], "Chevauche");
    assert_eq!(body["matches"][0]["details"]["availabilityScore"], 100);
    assert_eq!(body["matches"][1]["tutor"]["fullName"], "Contigu");
    assert_eq!(body["matches"][1]["details"]["availabilityScore"], 0);
}

#[tokio::test]
async fn test_scenario_d_uncovered_slot() {
    let router = empty_router();
    let student_id = import_scenario(
        &router,
        student_row("Élève D", "Maths", "Terminale", "Mardi de 17:00 à 18:00"),
        vec![tutor_row("Tuteur D", "Maths", "Terminale", "Jeudi de 17:00 à 18:00")],
    )
    .await;

    let (_, body) = get_matches(router, &student_id).await;
    assert_eq!(scores(&body), vec![60]);
}

#[tokio::test]
async fn test_scenario_e_empty_tutor_collection() {
    let student = Student::new("Élève E", vec!["Maths".to_string()], "Terminale", vec![]);
    assert!(rank_matches(&student, &[]).unwrap().is_empty());

    // The HTTP boundary reports the empty collection as 404
    let router = empty_router();
    let (status, _) = send(
        router.clone(),
        "POST",
        "/api/students/import",
        Some(json!({ "rows": [student_row("Élève E", "Maths", "Terminale", "")] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let (_, listed) = send(router.clone(), "GET", "/api/students", None).await;
    let student_id = listed["students"][0]["id"].as_str().unwrap().to_string();

    let (status, body) = get_matches(router, &student_id).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NO_TUTORS_AVAILABLE");
}

#[tokio::test]
async fn test_ties_keep_import_order() {
    let router = empty_router();
    let student_id = import_scenario(
        &router,
        student_row("Élève", "Maths", "Terminale", ""),
        vec![
            tutor_row("Premier", "Maths", "Seconde", ""),
            tutor_row("Deuxième", "Physique", "Terminale", ""),
            tutor_row("Troisième", "Maths", "Seconde", ""),
        ],
    )
    .await;

    let (_, body) = get_matches(router, &student_id).await;
    let names: Vec<&str> = body["matches"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["tutor"]["fullName"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Premier", "Deuxième", "Troisième"]);
    assert_eq!(scores(&body), vec![30, 30, 30]);
}

#[tokio::test]
async fn test_composite_matches_weighted_details() {
    let (_, body) = get_matches(seeded_router(), LEA_ID).await;

    for result in body["matches"].as_array().unwrap() {
        let details = &result["details"];
        let subject = details["subjectScore"].as_f64().unwrap();
        let level = details["levelScore"].as_f64().unwrap();
        let availability = details["availabilityScore"].as_f64().unwrap();
        let expected = (subject * 0.3 + level * 0.3 + availability * 0.4).round();
        assert_eq!(result["matchingScore"].as_f64().unwrap(), expected);
    }
}

// =============================================================================
// Record management
// =============================================================================

#[tokio::test]
async fn test_list_seeded_records() {
    let router = seeded_router();

    let (status, students) = send(router.clone(), "GET", "/api/students", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(students["students"].as_array().unwrap().len(), 2);
    assert_eq!(students["message"], "2 student(s) found");

    let (status, tutors) = send(router, "GET", "/api/tutors", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(tutors["tutors"][0]["subjectsTaught"], json!(["mathematiques", "Chimie"]));
}

#[tokio::test]
async fn test_delete_tutors_then_match_returns_404() {
    let router = seeded_router();

    let (status, body) = send(router.clone(), "DELETE", "/api/tutors", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deleted"], 2);

    let (status, body) = get_matches(router, LEA_ID).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "NO_TUTORS_AVAILABLE");
}

#[tokio::test]
async fn test_delete_students_then_match_returns_404() {
    let router = seeded_router();

    let (status, _) = send(router.clone(), "DELETE", "/api/students", None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = get_matches(router, LEA_ID).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], "STUDENT_NOT_FOUND");
}

#[tokio::test]
async fn test_import_reports_count_and_drops_bad_slots() {
    let router = empty_router();
    let (status, body) = send(
        router.clone(),
        "POST",
        "/api/tutors/import",
        Some(json!({ "rows": [
            tutor_row("Marc", "Maths", "Terminale", "Lundi de 19:00 à 21:00; Mardi soir"),
            tutor_row("Sophie", "Anglais", "3eme", "Samedi de 12:00 à 10:00")
        ] })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["imported"], 2);

    let (_, tutors) = send(router, "GET", "/api/tutors", None).await;
    assert_eq!(tutors["tutors"][0]["availabilities"].as_array().unwrap().len(), 1);
    assert!(tutors["tutors"][1]["availabilities"].as_array().unwrap().is_empty());
}

// =============================================================================
// Error cases
// =============================================================================

#[tokio::test]
async fn test_invalid_student_id_returns_400() {
    let (status, body) = get_matches(seeded_router(), "12345").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "INVALID_STUDENT_ID");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_unknown_student_returns_404() {
    let (status, body) = get_matches(seeded_router(), MARC_ID).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "STUDENT_NOT_FOUND");
}

#[tokio::test]
async fn test_import_empty_sheet_returns_400() {
    let (status, body) = send(
        empty_router(),
        "POST",
        "/api/students/import",
        Some(json!({ "rows": [] })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "IMPORT_ERROR");
    assert_eq!(body["error"], "Import failed: the sheet is empty");
}

#[tokio::test]
async fn test_import_missing_columns_returns_400() {
    let (status, body) = send(
        empty_router(),
        "POST",
        "/api/tutors/import",
        Some(json!({ "rows": [ { "Nom complet": "Marc" } ] })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("Niveaux enseignés"), "got: {}", message);
}

#[tokio::test]
async fn test_rejected_import_stores_nothing() {
    let router = empty_router();
    let (status, _) = send(
        router.clone(),
        "POST",
        "/api/students/import",
        Some(json!({ "rows": [
            student_row("Léa", "Maths", "Terminale", ""),
            student_row("", "Maths", "Terminale", "")
        ] })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = send(router, "GET", "/api/students", None).await;
    assert!(body["students"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_import_without_rows_field_returns_400() {
    let (status, body) = send(
        empty_router(),
        "POST",
        "/api/students/import",
        Some(json!({ "sheet": [] })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_health_reports_version() {
    let (status, body) = send(empty_router(), "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
