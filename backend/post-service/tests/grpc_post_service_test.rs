// Integration tests for the Post Service gRPC API
//
// These tests drive PostServiceImpl directly through tonic request/response
// types, covering the status-code mapping:
// - CreatePost (validation -> INVALID_ARGUMENT)
// - GetPost (missing -> NOT_FOUND)
// - ListPosts (pagination + argument bounds)
// - UpdatePost (partial updates, missing -> NOT_FOUND)
// - DeletePost (missing and foreign posts both -> NOT_FOUND)

use std::sync::Arc;

use tonic::{Code, Request};

use post_service::db::{MemoryStore, PostRepository};
use post_service::grpc::pulse::post_service::post_service_server::PostService;
use post_service::grpc::pulse::post_service::*;
use post_service::grpc::PostServiceImpl;

fn service() -> PostServiceImpl {
    PostServiceImpl::new(PostRepository::new(Arc::new(MemoryStore::new())))
}

async fn create(service: &PostServiceImpl, owner: &str, title: &str) -> Post {
    service
        .create_post(Request::new(CreatePostRequest {
            owner_id: owner.to_string(),
            title: title.to_string(),
            content: format!("content of {title}"),
        }))
        .await
        .expect("create succeeds")
        .into_inner()
}

#[tokio::test]
async fn create_post_returns_fresh_post_with_equal_timestamps() {
    let service = service();
    let post = create(&service, "alice", "hello").await;

    assert!(!post.id.is_empty());
    assert_eq!(post.owner_id, "alice");
    assert_eq!(post.title, "hello");
    assert_eq!(post.created_at, post.updated_at);
}

#[tokio::test]
async fn create_post_with_empty_title_is_invalid_argument() {
    let service = service();
    let status = service
        .create_post(Request::new(CreatePostRequest {
            owner_id: "alice".to_string(),
            title: "  ".to_string(),
            content: "content".to_string(),
        }))
        .await
        .expect_err("validation rejects blank title");

    assert_eq!(status.code(), Code::InvalidArgument);
}

#[tokio::test]
async fn get_post_round_trips_and_maps_missing_to_not_found() {
    let service = service();
    let created = create(&service, "alice", "hello").await;

    let fetched = service
        .get_post(Request::new(GetPostRequest {
            post_id: created.id.clone(),
        }))
        .await
        .expect("post exists")
        .into_inner();
    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.title, "hello");

    let status = service
        .get_post(Request::new(GetPostRequest {
            post_id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
        }))
        .await
        .expect_err("unknown id");
    assert_eq!(status.code(), Code::NotFound);
}

#[tokio::test]
async fn get_post_with_malformed_id_is_invalid_argument() {
    let service = service();
    let status = service
        .get_post(Request::new(GetPostRequest {
            post_id: "not-a-uuid".to_string(),
        }))
        .await
        .expect_err("malformed id");
    assert_eq!(status.code(), Code::InvalidArgument);
}

#[tokio::test]
async fn list_posts_pages_in_creation_order() {
    let service = service();
    let mut created = Vec::new();
    for i in 1..=7 {
        created.push(create(&service, "alice", &format!("post {i}")).await);
    }

    let page2 = service
        .list_posts(Request::new(ListPostsRequest {
            owner_id: "alice".to_string(),
            page: 2,
            page_size: 5,
        }))
        .await
        .expect("list succeeds")
        .into_inner();

    assert_eq!(page2.total, 7);
    assert_eq!(page2.posts.len(), 2);
    assert_eq!(page2.posts[0].id, created[5].id);
    assert_eq!(page2.posts[1].id, created[6].id);

    let page3 = service
        .list_posts(Request::new(ListPostsRequest {
            owner_id: "alice".to_string(),
            page: 3,
            page_size: 5,
        }))
        .await
        .expect("list succeeds")
        .into_inner();

    assert_eq!(page3.total, 7);
    assert!(page3.posts.is_empty());
}

#[tokio::test]
async fn list_posts_rejects_bad_arguments() {
    let service = service();

    for request in [
        ListPostsRequest {
            owner_id: String::new(),
            page: 1,
            page_size: 10,
        },
        ListPostsRequest {
            owner_id: "alice".to_string(),
            page: 0,
            page_size: 10,
        },
        ListPostsRequest {
            owner_id: "alice".to_string(),
            page: 1,
            page_size: 0,
        },
        ListPostsRequest {
            owner_id: "alice".to_string(),
            page: 1,
            page_size: 101,
        },
    ] {
        let status = service
            .list_posts(Request::new(request))
            .await
            .expect_err("argument validation");
        assert_eq!(status.code(), Code::InvalidArgument);
    }
}

#[tokio::test]
async fn update_post_applies_only_provided_fields() {
    let service = service();
    let created = create(&service, "alice", "old title").await;

    let updated = service
        .update_post(Request::new(UpdatePostRequest {
            post_id: created.id.clone(),
            title: Some("new title".to_string()),
            content: None,
        }))
        .await
        .expect("update succeeds")
        .into_inner();

    assert_eq!(updated.title, "new title");
    assert_eq!(updated.content, created.content);
    assert_eq!(updated.created_at, created.created_at);
}

#[tokio::test]
async fn update_post_without_fields_is_invalid_argument() {
    let service = service();
    let created = create(&service, "alice", "title").await;

    let status = service
        .update_post(Request::new(UpdatePostRequest {
            post_id: created.id,
            title: None,
            content: None,
        }))
        .await
        .expect_err("nothing to update");
    assert_eq!(status.code(), Code::InvalidArgument);
}

#[tokio::test]
async fn update_missing_post_is_not_found() {
    let service = service();
    let status = service
        .update_post(Request::new(UpdatePostRequest {
            post_id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            title: Some("title".to_string()),
            content: None,
        }))
        .await
        .expect_err("unknown id");
    assert_eq!(status.code(), Code::NotFound);
}

#[tokio::test]
async fn delete_post_hides_foreign_posts_behind_not_found() {
    let service = service();
    let created = create(&service, "alice", "title").await;

    // Another owner's delete reads exactly like a missing post.
    let foreign = service
        .delete_post(Request::new(DeletePostRequest {
            post_id: created.id.clone(),
            owner_id: "mallory".to_string(),
        }))
        .await
        .expect_err("foreign delete");
    assert_eq!(foreign.code(), Code::NotFound);

    let missing = service
        .delete_post(Request::new(DeletePostRequest {
            post_id: "550e8400-e29b-41d4-a716-446655440000".to_string(),
            owner_id: "alice".to_string(),
        }))
        .await
        .expect_err("missing delete");
    assert_eq!(missing.code(), Code::NotFound);
    assert_eq!(foreign.message(), missing.message().replace(
        "550e8400-e29b-41d4-a716-446655440000",
        &created.id,
    ));

    let deleted = service
        .delete_post(Request::new(DeletePostRequest {
            post_id: created.id.clone(),
            owner_id: "alice".to_string(),
        }))
        .await
        .expect("owner delete succeeds")
        .into_inner();
    assert!(deleted.success);

    let gone = service
        .get_post(Request::new(GetPostRequest {
            post_id: created.id,
        }))
        .await
        .expect_err("post removed");
    assert_eq!(gone.code(), Code::NotFound);
}
