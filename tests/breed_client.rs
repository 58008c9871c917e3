//! Integration tests for the dog.ceo breed client against a mock server.

mod common;

use common::{breed_client, breed_message};
use dog_disk_e2e::prelude::*;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const BOSTON_IMAGE: &str = "https://images.dog.ceo/breeds/bulldog-boston/n02096585_1.jpg";

#[tokio::test]
async fn test_sub_breeds_lists_names() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/breed/bulldog/list"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(breed_message(json!(["boston", "english", "french"]))),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = breed_client(&server);
    let subs = client.sub_breeds("bulldog").await.unwrap();
    assert_eq!(subs, vec!["boston", "english", "french"]);
}

#[tokio::test]
async fn test_breed_without_sub_breeds() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/breed/collie/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(breed_message(json!([]))))
        .mount(&server)
        .await;

    let breed = breed_client(&server).breed("collie").await.unwrap();
    assert_eq!(breed.name, "collie");
    assert!(!breed.has_sub_breeds());
    assert_eq!(breed.upload_targets().len(), 1);
}

#[tokio::test]
async fn test_random_images() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/breed/collie/images/random"))
        .respond_with(ResponseTemplate::new(200).set_body_json(breed_message(json!(
            "https://images.dog.ceo/breeds/collie-border/n02106166_355.jpg"
        ))))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/breed/bulldog/boston/images/random"))
        .respond_with(ResponseTemplate::new(200).set_body_json(breed_message(json!(BOSTON_IMAGE))))
        .expect(2)
        .mount(&server)
        .await;

    let client = breed_client(&server);
    let collie = client.random_image("collie").await.unwrap();
    assert!(collie.contains("collie-border"));

    let boston = client
        .random_sub_breed_image("bulldog", "boston")
        .await
        .unwrap();
    assert_eq!(boston, BOSTON_IMAGE);

    let target = UploadTarget {
        breed: "bulldog".into(),
        sub_breed: Some("boston".into()),
    };
    assert_eq!(client.image_for(&target).await.unwrap(), BOSTON_IMAGE);
}

#[tokio::test]
async fn test_unknown_breed_is_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/breed/unicorn/list"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "status": "error",
            "message": "Breed not found (master breed does not exist)",
            "code": 404
        })))
        .mount(&server)
        .await;

    let err = breed_client(&server).sub_breeds("unicorn").await.unwrap_err();
    assert!(matches!(err, HttpError::NotFound(ref body) if body.contains("Breed not found")));
}

#[tokio::test]
async fn test_non_200_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/breed/collie/images/random"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = breed_client(&server).random_image("collie").await.unwrap_err();
    assert!(matches!(
        err,
        HttpError::UnexpectedStatus { status: 500, ref body, .. } if body == "boom"
    ));
}
