//! HTTP-level tests for the conversation and message endpoints, with the
//! lock lifecycle exercised end to end through likes.

mod common;

use axum::http::StatusCode;
use sqlx::PgPool;

use common::{ban_user, body_json, build_test_app, get, post_json, seed_user};

/// Like `liked` as `liker` and return the conversation id from the response.
async fn like_and_conversation(pool: &PgPool, liker: i64, liked: i64) -> i64 {
    let response = post_json(
        build_test_app(pool.clone()),
        liker,
        "/api/v1/likes",
        serde_json::json!({ "liked_id": liked }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    body["data"]["conversation"]["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_conversation_requires_participant(pool: PgPool) {
    let alice = seed_user(&pool, "Alice", true).await;
    let bob = seed_user(&pool, "Bob", true).await;
    let mallory = seed_user(&pool, "Mallory", true).await;

    let conversation_id = like_and_conversation(&pool, alice, bob).await;

    let allowed = get(
        build_test_app(pool.clone()),
        bob,
        &format!("/api/v1/conversations/{conversation_id}"),
    )
    .await;
    assert_eq!(allowed.status(), StatusCode::OK);

    let denied = get(
        build_test_app(pool.clone()),
        mallory,
        &format!("/api/v1/conversations/{conversation_id}"),
    )
    .await;
    assert_eq!(denied.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_unknown_conversation_not_found(pool: PgPool) {
    let alice = seed_user(&pool, "Alice", true).await;

    let response = get(
        build_test_app(pool.clone()),
        alice,
        "/api/v1/conversations/999999",
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_locked_conversation_intro_rules(pool: PgPool) {
    let alice = seed_user(&pool, "Alice", true).await;
    let bob = seed_user(&pool, "Bob", true).await;

    let conversation_id = like_and_conversation(&pool, alice, bob).await;

    // Bob never liked Alice; while locked he cannot send at all.
    let denied = post_json(
        build_test_app(pool.clone()),
        bob,
        &format!("/api/v1/conversations/{conversation_id}/messages"),
        serde_json::json!({ "content": "hey" }),
    )
    .await;
    assert_eq!(denied.status(), StatusCode::FORBIDDEN);

    // Alice owns the originating like, her single intro goes through.
    let intro = post_json(
        build_test_app(pool.clone()),
        alice,
        &format!("/api/v1/conversations/{conversation_id}/messages"),
        serde_json::json!({ "content": "hi Bob!" }),
    )
    .await;
    assert_eq!(intro.status(), StatusCode::CREATED);
    let body = body_json(intro).await;
    assert_eq!(body["data"]["sender_id"], alice);
    assert_eq!(body["data"]["content"], "hi Bob!");

    // A second message while still locked is refused, even from Alice.
    let second = post_json(
        build_test_app(pool.clone()),
        alice,
        &format!("/api/v1/conversations/{conversation_id}/messages"),
        serde_json::json!({ "content": "hello again" }),
    )
    .await;
    assert_eq!(second.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_unlocked_conversation_is_unrestricted(pool: PgPool) {
    let alice = seed_user(&pool, "Alice", true).await;
    let bob = seed_user(&pool, "Bob", true).await;

    like_and_conversation(&pool, alice, bob).await;
    let conversation_id = like_and_conversation(&pool, bob, alice).await;

    for (sender, text) in [(alice, "hi!"), (bob, "hey!"), (alice, "how are you?")] {
        let response = post_json(
            build_test_app(pool.clone()),
            sender,
            &format!("/api/v1/conversations/{conversation_id}/messages"),
            serde_json::json!({ "content": text }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let messages = get(
        build_test_app(pool.clone()),
        bob,
        &format!("/api/v1/conversations/{conversation_id}/messages"),
    )
    .await;
    assert_eq!(messages.status(), StatusCode::OK);
    let body = body_json(messages).await;
    let list = body["data"].as_array().unwrap();
    assert_eq!(list.len(), 3);
    // Chronological order.
    assert_eq!(list[0]["content"], "hi!");
    assert_eq!(list[2]["content"], "how are you?");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_banned_sender_cannot_message(pool: PgPool) {
    let alice = seed_user(&pool, "Alice", true).await;
    let bob = seed_user(&pool, "Bob", true).await;

    like_and_conversation(&pool, alice, bob).await;
    let conversation_id = like_and_conversation(&pool, bob, alice).await;
    ban_user(&pool, alice).await;

    let response = post_json(
        build_test_app(pool.clone()),
        alice,
        &format!("/api/v1/conversations/{conversation_id}/messages"),
        serde_json::json!({ "content": "hi" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_message_rejected(pool: PgPool) {
    let alice = seed_user(&pool, "Alice", true).await;
    let bob = seed_user(&pool, "Bob", true).await;

    let conversation_id = like_and_conversation(&pool, alice, bob).await;

    let response = post_json(
        build_test_app(pool.clone()),
        alice,
        &format!("/api/v1/conversations/{conversation_id}/messages"),
        serde_json::json!({ "content": "   " }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_conversations_reconciles_lock_state(pool: PgPool) {
    let alice = seed_user(&pool, "Alice", true).await;
    let bob = seed_user(&pool, "Bob", true).await;

    let conversation_id = like_and_conversation(&pool, alice, bob).await;
    like_and_conversation(&pool, bob, alice).await;

    // Force the row back to locked to simulate a lost eager unlock; the
    // listing must heal it because both like edges exist.
    sqlx::query("UPDATE conversations SET is_locked = TRUE WHERE id = $1")
        .bind(conversation_id)
        .execute(&pool)
        .await
        .unwrap();

    let response = get(build_test_app(pool.clone()), alice, "/api/v1/conversations").await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let list = body["data"].as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"], conversation_id);
    assert_eq!(list[0]["is_locked"], false);
}
