//! Integration tests for the venue pages: listing, search, detail, create,
//! and the deliberate edit/delete stubs.

mod common;

use axum::http::StatusCode;
use common::{body_string, get, post_form};
use tower::ServiceExt;
use encore_db::models::venue::CreateVenue;
use encore_db::repositories::VenueRepo;
use sqlx::PgPool;

fn musical_hop() -> CreateVenue {
    CreateVenue {
        name: "The Musical Hop".to_string(),
        city: "San Francisco".to_string(),
        state: "CA".to_string(),
        address: Some("1015 Folsom Street".to_string()),
        phone: Some("123-123-1234".to_string()),
        genres: vec!["Jazz".to_string(), "Folk".to_string()],
        facebook_link: None,
        image_link: None,
        seeking_talent: true,
        seeking_description: Some("We are on the lookout for a local artist.".to_string()),
    }
}

// ---------------------------------------------------------------------------
// Test: creating a venue through the form flashes success on the home page
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn create_venue_form_flashes_success_and_persists(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_form(
        app,
        "/venues/create",
        "name=The+Dueling+Pianos+Bar&city=New+York&state=NY\
         &genres=Classical&genres=R%26B&phone=914-003-1132",
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("Venue The Dueling Pianos Bar was successfully listed!"));
    assert!(body.contains("flash-success"));

    // The row is retrievable through the list page afterwards.
    let app = common::build_test_app(pool.clone());
    let body = body_string(get(app, "/venues").await).await;
    assert!(body.contains("The Dueling Pianos Bar"));
    assert!(body.contains("New York, NY"));

    // And the repeated genres field decoded into both genres.
    let venues = VenueRepo::list_all(&pool).await.unwrap();
    assert_eq!(venues[0].genres, vec!["Classical", "R&B"]);
    assert!(!venues[0].seeking_talent, "unchecked box means not seeking");
}

// ---------------------------------------------------------------------------
// Test: venue detail renders fields, 404s on unknown id
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn venue_detail_renders_profile(pool: PgPool) {
    let venue = VenueRepo::create(&pool, &musical_hop()).await.unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/venues/{}", venue.id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("The Musical Hop"));
    assert!(body.contains("1015 Folsom Street"));
    assert!(body.contains("Jazz"));
    assert!(body.contains("Seeking talent"));
    assert!(body.contains("We are on the lookout for a local artist."));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn venue_detail_unknown_id_renders_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/venues/4242").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(body_string(response).await.contains("404"));
}

// ---------------------------------------------------------------------------
// Test: search matches case-insensitive substrings and echoes the term
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn venue_search_returns_matching_subset(pool: PgPool) {
    VenueRepo::create(&pool, &musical_hop()).await.unwrap();

    let mut other = musical_hop();
    other.name = "Park Square Live Music & Coffee".to_string();
    VenueRepo::create(&pool, &other).await.unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_form(app, "/venues/search", "search_term=hop").await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains(r#"1 result(s) for "hop""#));
    assert!(body.contains("The Musical Hop"));
    assert!(!body.contains("Park Square"));

    // An empty term matches everything.
    let app = common::build_test_app(pool);
    let body = body_string(post_form(app, "/venues/search", "search_term=").await).await;
    assert!(body.contains("2 result(s)"));
}

// ---------------------------------------------------------------------------
// Test: edit and delete are stubs
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn venue_edit_form_is_populated(pool: PgPool) {
    let venue = VenueRepo::create(&pool, &musical_hop()).await.unwrap();

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/venues/{}/edit", venue.id)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_string(response).await;
    assert!(body.contains("value=\"The Musical Hop\""));
    assert!(body.contains("checked"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn venue_edit_submit_redirects_without_writing(pool: PgPool) {
    let venue = VenueRepo::create(&pool, &musical_hop()).await.unwrap();

    let app = common::build_test_app(pool.clone());
    let response = post_form(
        app,
        &format!("/venues/{}/edit", venue.id),
        "name=Renamed&city=Nowhere&state=AK",
    )
    .await;

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(
        response.headers().get("location").unwrap(),
        &format!("/venues/{}", venue.id)
    );

    // Nothing was written.
    let unchanged = VenueRepo::find_by_id(&pool, venue.id).await.unwrap().unwrap();
    assert_eq!(unchanged.name, "The Musical Hop");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn venue_delete_is_not_implemented(pool: PgPool) {
    let venue = VenueRepo::create(&pool, &musical_hop()).await.unwrap();

    let app = common::build_test_app(pool.clone());
    let response = app
        .oneshot(
            axum::http::Request::builder()
                .method("DELETE")
                .uri(format!("/venues/{}", venue.id))
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_IMPLEMENTED);
    assert!(VenueRepo::find_by_id(&pool, venue.id)
        .await
        .unwrap()
        .is_some());
}
