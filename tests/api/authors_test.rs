use crate::common;
use actix_web::test;
use serde_json::{json, Value};

#[actix_web::test]
async fn test_create_author_expect_201() {
    let (app, _guard) = common::initialize_app().await;
    let req = test::TestRequest::post()
        .uri("/authors")
        .set_json(json!({ "name": "Lev Tolstoy", "age": 82 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 201);
}

#[actix_web::test]
async fn test_create_author_expect_saved_author_returned() {
    let (app, _guard) = common::initialize_app().await;
    let req = test::TestRequest::post()
        .uri("/authors")
        .set_json(json!({ "name": "Lev Tolstoy", "age": 82 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    assert!(body["id"].is_i64());
    assert_eq!(body["name"], "Lev Tolstoy");
    assert_eq!(body["age"], 82);
}

#[actix_web::test]
async fn test_create_authors_expect_store_assigned_sequential_ids() {
    let (app, _guard) = common::initialize_app().await;
    for (expected_id, name) in [(1, "a"), (2, "b"), (3, "c")] {
        let req = test::TestRequest::post()
            .uri("/authors")
            .set_json(json!({ "name": name, "age": 1 }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 201);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["id"], expected_id);
    }
}

#[actix_web::test]
async fn test_create_author_with_malformed_json_expect_400() {
    let (app, _guard) = common::initialize_app().await;
    let req = test::TestRequest::post()
        .uri("/authors")
        .insert_header(("content-type", "application/json"))
        .set_payload("{ not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
}

#[actix_web::test]
async fn test_create_author_with_wrong_field_type_expect_400() {
    let (app, _guard) = common::initialize_app().await;
    let req = test::TestRequest::post()
        .uri("/authors")
        .set_json(json!({ "name": "Lev Tolstoy", "age": "eighty-two" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
}

#[actix_web::test]
async fn test_create_author_with_missing_field_expect_400() {
    let (app, _guard) = common::initialize_app().await;
    let req = test::TestRequest::post()
        .uri("/authors")
        .set_json(json!({ "name": "Lev Tolstoy" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
}

#[actix_web::test]
async fn test_create_then_get_author_expect_roundtrip() {
    let (app, _guard) = common::initialize_app().await;
    let req = test::TestRequest::post()
        .uri("/authors")
        .set_json(json!({ "name": "J. R. R. Tolkien", "age": 81 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    let created: Value = test::read_body_json(resp).await;
    let id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::get()
        .uri(&format!("/authors/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "id": id, "name": "J. R. R. Tolkien", "age": 81 }));
}

#[actix_web::test]
async fn test_get_missing_author_expect_404() {
    let (app, _guard) = common::initialize_app().await;
    let req = test::TestRequest::get().uri("/authors/10").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);
}

#[actix_web::test]
async fn test_list_authors_expect_created_minus_deleted() {
    let (app, _guard) = common::initialize_app().await;
    for (name, age) in [("a", 1), ("b", 2), ("c", 3)] {
        let req = test::TestRequest::post()
            .uri("/authors")
            .set_json(json!({ "name": name, "age": age }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status().as_u16(), 201);
    }
    let req = test::TestRequest::delete().uri("/authors/2").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 204);

    let req = test::TestRequest::get().uri("/authors").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = test::read_body_json(resp).await;
    let authors = body.as_array().unwrap();
    assert_eq!(authors.len(), 2);
    assert_eq!(authors[0]["name"], "a");
    assert_eq!(authors[1]["name"], "c");
}

#[actix_web::test]
async fn test_list_authors_with_paging_expect_window() {
    let (app, _guard) = common::initialize_app().await;
    for (name, age) in [("a", 1), ("b", 2), ("c", 3)] {
        let req = test::TestRequest::post()
            .uri("/authors")
            .set_json(json!({ "name": name, "age": age }))
            .to_request();
        test::call_service(&app, req).await;
    }
    let req = test::TestRequest::get()
        .uri("/authors?page=1&size=2")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = test::read_body_json(resp).await;
    let authors = body.as_array().unwrap();
    assert_eq!(authors.len(), 1);
    assert_eq!(authors[0]["name"], "c");
}

#[actix_web::test]
async fn test_list_authors_with_huge_page_expect_200_and_empty_window() {
    let (app, _guard) = common::initialize_app().await;
    let req = test::TestRequest::post()
        .uri("/authors")
        .set_json(json!({ "name": "a", "age": 1 }))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get()
        .uri("/authors?page=4611686018427387904&size=4")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[actix_web::test]
async fn test_list_authors_with_zero_size_expect_full_collection() {
    let (app, _guard) = common::initialize_app().await;
    for name in ["a", "b"] {
        let req = test::TestRequest::post()
            .uri("/authors")
            .set_json(json!({ "name": name, "age": 1 }))
            .to_request();
        test::call_service(&app, req).await;
    }
    let req = test::TestRequest::get()
        .uri("/authors?page=0&size=0")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[actix_web::test]
async fn test_full_update_author_expect_200_and_updated_body() {
    let (app, _guard) = common::initialize_app().await;
    let req = test::TestRequest::post()
        .uri("/authors")
        .set_json(json!({ "name": "Lev Tolstoy", "age": 82 }))
        .to_request();
    let created: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::put()
        .uri(&format!("/authors/{id}"))
        .set_json(json!({ "name": "Leo Tolstoy", "age": 83 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "id": id, "name": "Leo Tolstoy", "age": 83 }));
}

#[actix_web::test]
async fn test_full_update_missing_author_expect_404_and_no_mutation() {
    let (app, _guard) = common::initialize_app().await;
    let req = test::TestRequest::put()
        .uri("/authors/10")
        .set_json(json!({ "name": "Nobody", "age": 1 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);

    let req = test::TestRequest::get().uri("/authors").to_request();
    let body: Value = test::read_body_json(test::call_service(&app, req).await).await;
    assert_eq!(body.as_array().unwrap().len(), 0);
}

#[actix_web::test]
async fn test_partial_update_author_expect_other_fields_preserved() {
    let (app, _guard) = common::initialize_app().await;
    let req = test::TestRequest::post()
        .uri("/authors")
        .set_json(json!({ "name": "Lev Tolstoy", "age": 82 }))
        .to_request();
    let created: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::patch()
        .uri(&format!("/authors/{id}"))
        .set_json(json!({ "age": 83 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({ "id": id, "name": "Lev Tolstoy", "age": 83 }));
}

#[actix_web::test]
async fn test_partial_update_missing_author_expect_404() {
    let (app, _guard) = common::initialize_app().await;
    let req = test::TestRequest::patch()
        .uri("/authors/10")
        .set_json(json!({ "age": 83 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);
}

#[actix_web::test]
async fn test_delete_author_expect_204_then_get_404() {
    let (app, _guard) = common::initialize_app().await;
    let req = test::TestRequest::post()
        .uri("/authors")
        .set_json(json!({ "name": "Lev Tolstoy", "age": 82 }))
        .to_request();
    let created: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/authors/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 204);

    let req = test::TestRequest::get()
        .uri(&format!("/authors/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);
}

#[actix_web::test]
async fn test_delete_author_twice_expect_404_on_second() {
    let (app, _guard) = common::initialize_app().await;
    let req = test::TestRequest::post()
        .uri("/authors")
        .set_json(json!({ "name": "Lev Tolstoy", "age": 82 }))
        .to_request();
    let created: Value = test::read_body_json(test::call_service(&app, req).await).await;
    let id = created["id"].as_i64().unwrap();

    let req = test::TestRequest::delete()
        .uri(&format!("/authors/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 204);

    let req = test::TestRequest::delete()
        .uri(&format!("/authors/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 404);
}

#[actix_web::test]
async fn test_create_author_ignores_client_supplied_id() {
    let (app, _guard) = common::initialize_app().await;
    let req = test::TestRequest::post()
        .uri("/authors")
        .set_json(json!({ "id": 999, "name": "Lev Tolstoy", "age": 82 }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 201);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["id"], 1);
}
