//! Integration tests for the reward ledger's calendar-day idempotency.
//!
//! The claim is a single conditional UPDATE; these tests verify one grant
//! per user/task/day under sequential repeats, concurrent storms, and
//! across day boundaries.

use sqlx::PgPool;

use mutuals_core::rewards::RewardTask;
use mutuals_db::repositories::RewardRepo;

const CHECKIN_POINTS: i64 = 50;
const LIKE_POINTS: i64 = 25;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn seed_user(pool: &PgPool, name: &str) -> i64 {
    let (id,): (i64,) = sqlx::query_as(
        "INSERT INTO users (display_name, verified) VALUES ($1, TRUE) RETURNING id",
    )
    .bind(name)
    .fetch_one(pool)
    .await
    .unwrap();
    id
}

// ---------------------------------------------------------------------------
// Test: lazy vivification
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_or_create_vivifies_zeroed_ledger(pool: PgPool) {
    let alice = seed_user(&pool, "Alice").await;

    let ledger = RewardRepo::find_or_create(&pool, alice).await.unwrap();
    assert_eq!(ledger.total_points, 0);
    assert_eq!(ledger.daily_checkin_date, None);
    assert_eq!(ledger.daily_like_date, None);

    // A second call returns the same row, not a new one.
    let again = RewardRepo::find_or_create(&pool, alice).await.unwrap();
    assert_eq!(again.user_id, ledger.user_id);
    assert_eq!(again.total_points, 0);
}

// ---------------------------------------------------------------------------
// Test: claim once, then conflict
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_claim_then_already_claimed(pool: PgPool) {
    let alice = seed_user(&pool, "Alice").await;
    let today = chrono::Utc::now().date_naive();

    let total = RewardRepo::claim(&pool, alice, RewardTask::DailyCheckin, today, CHECKIN_POINTS)
        .await
        .unwrap();
    assert_eq!(total, Some(CHECKIN_POINTS));

    // The guard no longer matches: zero rows affected means already
    // claimed, never an error.
    let repeat =
        RewardRepo::claim(&pool, alice, RewardTask::DailyCheckin, today, CHECKIN_POINTS)
            .await
            .unwrap();
    assert_eq!(repeat, None);

    let ledger = RewardRepo::find_or_create(&pool, alice).await.unwrap();
    assert_eq!(ledger.total_points, CHECKIN_POINTS);
    assert_eq!(ledger.daily_checkin_date, Some(today));
}

// ---------------------------------------------------------------------------
// Test: the two task kinds are independent
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_task_kinds_are_independent(pool: PgPool) {
    let alice = seed_user(&pool, "Alice").await;
    let today = chrono::Utc::now().date_naive();

    RewardRepo::claim(&pool, alice, RewardTask::DailyCheckin, today, CHECKIN_POINTS)
        .await
        .unwrap()
        .unwrap();
    let total = RewardRepo::claim(&pool, alice, RewardTask::DailyLikeBonus, today, LIKE_POINTS)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(total, CHECKIN_POINTS + LIKE_POINTS);
}

// ---------------------------------------------------------------------------
// Test: different days are independent claims
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_different_days_claim_independently(pool: PgPool) {
    let alice = seed_user(&pool, "Alice").await;
    let today = chrono::Utc::now().date_naive();
    let tomorrow = today.succ_opt().unwrap();

    RewardRepo::claim(&pool, alice, RewardTask::DailyCheckin, today, CHECKIN_POINTS)
        .await
        .unwrap()
        .unwrap();
    let total =
        RewardRepo::claim(&pool, alice, RewardTask::DailyCheckin, tomorrow, CHECKIN_POINTS)
            .await
            .unwrap()
            .unwrap();

    assert_eq!(total, 2 * CHECKIN_POINTS);
}

// ---------------------------------------------------------------------------
// Test: claims never go to another user's ledger
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_claims_are_per_user(pool: PgPool) {
    let alice = seed_user(&pool, "Alice").await;
    let bob = seed_user(&pool, "Bob").await;
    let today = chrono::Utc::now().date_naive();

    RewardRepo::claim(&pool, alice, RewardTask::DailyCheckin, today, CHECKIN_POINTS)
        .await
        .unwrap()
        .unwrap();

    let bob_ledger = RewardRepo::find_or_create(&pool, bob).await.unwrap();
    assert_eq!(bob_ledger.total_points, 0);
    assert_eq!(bob_ledger.daily_checkin_date, None);
}

// ---------------------------------------------------------------------------
// Test: N concurrent claims, exactly one grant
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_concurrent_claims_single_grant(pool: PgPool) {
    let alice = seed_user(&pool, "Alice").await;
    let today = chrono::Utc::now().date_naive();

    let mut handles = Vec::new();
    for _ in 0..25 {
        let pool = pool.clone();
        handles.push(tokio::spawn(async move {
            RewardRepo::claim(&pool, alice, RewardTask::DailyCheckin, today, CHECKIN_POINTS)
                .await
                .unwrap()
        }));
    }

    let mut grants = 0;
    for handle in handles {
        if handle.await.unwrap().is_some() {
            grants += 1;
        }
    }

    assert_eq!(grants, 1, "the database sequences the conditional updates");

    let ledger = RewardRepo::find_or_create(&pool, alice).await.unwrap();
    assert_eq!(ledger.total_points, CHECKIN_POINTS);
}
