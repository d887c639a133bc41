use crate::e2e::helpers;

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use helpers::assertions::{assert_profile_response, assert_voucher_response};
use helpers::TestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use serde_json::json;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_forbid_admin_routes_to_regular_users(ctx: &TestContext) {
    let user = ctx.fixtures.create_profile("Regular").await.unwrap();
    let token = ctx.token_for(user.user_id);

    for path in [
        "/api/admin/users",
        "/api/admin/vouchers",
        "/api/admin/stats",
        "/api/admin/analytics",
    ] {
        let response = ctx.client.get_with_auth(path, &token).await.unwrap();
        response
            .assert_status(StatusCode::FORBIDDEN)
            .assert_error_message("Admin role required");
    }

    let response = ctx.client.get("/api/admin/users").await.unwrap();
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_users_newest_first(ctx: &TestContext) {
    let admin = ctx.fixtures.create_admin("Admin").await.unwrap();
    ctx.fixtures
        .create_profile_created_at(Some("Older"), Utc::now() - Duration::days(3))
        .await
        .unwrap();
    let token = ctx.token_for(admin.user_id);

    let response = ctx
        .client
        .get_with_auth("/api/admin/users", &token)
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let users = response.body().as_array().unwrap();
    assert_eq!(users.len(), 2);
    users.iter().for_each(assert_profile_response);
    assert_eq!(users[0].get("full_name"), Some(&json!("Admin")));
    assert_eq!(users[1].get("full_name"), Some(&json!("Older")));
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_grant_and_revoke_premium(ctx: &TestContext) {
    let admin = ctx.fixtures.create_admin("Admin").await.unwrap();
    let user = ctx.fixtures.create_profile("Member").await.unwrap();
    let token = ctx.token_for(admin.user_id);
    let path = format!("/api/admin/users/{}/premium", user.user_id);

    let response = ctx
        .client
        .post_with_auth(&path, &json!({ "active": true }), &token)
        .await
        .unwrap();
    response.assert_status(StatusCode::OK);

    let profile = ctx.fixtures.find_profile(user.user_id).await.unwrap();
    assert!(profile.is_premium);
    let expiry = profile.premium_expiry.unwrap();
    assert!(expiry > Utc::now() + Duration::days(29));
    assert!(expiry <= Utc::now() + Duration::days(30));

    ctx.client
        .post_with_auth(&path, &json!({ "active": true, "duration_days": 365 }), &token)
        .await
        .unwrap()
        .assert_status(StatusCode::OK);
    let profile = ctx.fixtures.find_profile(user.user_id).await.unwrap();
    assert!(profile.premium_expiry.unwrap() > Utc::now() + Duration::days(364));

    ctx.client
        .post_with_auth(&path, &json!({ "active": false }), &token)
        .await
        .unwrap()
        .assert_status(StatusCode::OK);
    let profile = ctx.fixtures.find_profile(user.user_id).await.unwrap();
    assert!(!profile.is_premium);
    assert_eq!(profile.premium_expiry, None);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_not_found_for_unknown_users(ctx: &TestContext) {
    let admin = ctx.fixtures.create_admin("Admin").await.unwrap();
    let token = ctx.token_for(admin.user_id);
    let path = format!("/api/admin/users/{}/premium", uuid::Uuid::new_v4());

    let response = ctx
        .client
        .post_with_auth(&path, &json!({ "active": true }), &token)
        .await
        .unwrap();

    response
        .assert_status(StatusCode::NOT_FOUND)
        .assert_error_message("Profile not found");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_suspend_and_lock_out_a_user(ctx: &TestContext) {
    let admin = ctx.fixtures.create_admin("Admin").await.unwrap();
    let user = ctx.fixtures.create_profile("Member").await.unwrap();
    let admin_token = ctx.token_for(admin.user_id);
    let user_token = ctx.token_for(user.user_id);
    let path = format!("/api/admin/users/{}/suspension", user.user_id);

    ctx.client
        .get_with_auth("/api/me", &user_token)
        .await
        .unwrap()
        .assert_status(StatusCode::OK);

    let response = ctx
        .client
        .post_with_auth(&path, &json!({ "suspended": true }), &admin_token)
        .await
        .unwrap();
    response.assert_status(StatusCode::OK);
    assert_eq!(response.body().get("suspended"), Some(&json!(true)));
    assert_eq!(response.body().get("is_premium"), Some(&json!(false)));

    ctx.client
        .get_with_auth("/api/me", &user_token)
        .await
        .unwrap()
        .assert_status(StatusCode::FORBIDDEN);

    ctx.client
        .post_with_auth(&path, &json!({ "suspended": false }), &admin_token)
        .await
        .unwrap()
        .assert_status(StatusCode::OK);

    ctx.client
        .get_with_auth("/api/me", &user_token)
        .await
        .unwrap()
        .assert_status(StatusCode::OK);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_not_let_admins_suspend_themselves(ctx: &TestContext) {
    let admin = ctx.fixtures.create_admin("Admin").await.unwrap();
    let token = ctx.token_for(admin.user_id);
    let path = format!("/api/admin/users/{}/suspension", admin.user_id);

    let response = ctx
        .client
        .post_with_auth(&path, &json!({ "suspended": true }), &token)
        .await
        .unwrap();

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_manage_the_voucher_lifecycle(ctx: &TestContext) {
    let admin = ctx.fixtures.create_admin("Admin").await.unwrap();
    let member = ctx.fixtures.create_profile("Member").await.unwrap();
    let token = ctx.token_for(admin.user_id);

    let response = ctx
        .client
        .post_with_auth(
            "/api/admin/vouchers",
            &json!({ "code": "spring-24", "duration_days": 14, "usage_limit": 3, "expires_in_days": 10 }),
            &token,
        )
        .await
        .unwrap();
    response.assert_status(StatusCode::CREATED);
    let voucher = response.body().clone();
    assert_voucher_response(&voucher, "SPRING-24");
    assert_eq!(voucher.get("used_count"), Some(&json!(0)));
    let voucher_id = voucher.get("id").and_then(|v| v.as_str()).unwrap().to_string();

    let response = ctx
        .client
        .get_with_auth("/api/admin/vouchers", &token)
        .await
        .unwrap();
    response.assert_status(StatusCode::OK);
    assert_eq!(response.body().as_array().unwrap().len(), 1);

    // Kill-switch blocks redemption
    let response = ctx
        .client
        .patch_with_auth(
            &format!("/api/admin/vouchers/{}", voucher_id),
            &json!({ "active": false }),
            &token,
        )
        .await
        .unwrap();
    response.assert_status(StatusCode::OK);
    assert_eq!(response.body().get("active"), Some(&json!(false)));

    ctx.client
        .post_with_auth(
            "/api/premium/redeem",
            &json!({ "code": "SPRING-24" }),
            &ctx.token_for(member.user_id),
        )
        .await
        .unwrap()
        .assert_status(StatusCode::NOT_FOUND);

    ctx.client
        .delete_with_auth(&format!("/api/admin/vouchers/{}", voucher_id), &token)
        .await
        .unwrap()
        .assert_status(StatusCode::NO_CONTENT);

    ctx.client
        .delete_with_auth(&format!("/api/admin/vouchers/{}", voucher_id), &token)
        .await
        .unwrap()
        .assert_status(StatusCode::NOT_FOUND);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_validate_new_vouchers(ctx: &TestContext) {
    let admin = ctx.fixtures.create_admin("Admin").await.unwrap();
    let token = ctx.token_for(admin.user_id);

    let invalid = [
        json!({ "code": "A", "duration_days": 7, "usage_limit": 1, "expires_in_days": 7 }),
        json!({ "code": "HAS SPACE", "duration_days": 7, "usage_limit": 1, "expires_in_days": 7 }),
        json!({ "code": "GOOD", "duration_days": 0, "usage_limit": 1, "expires_in_days": 7 }),
        json!({ "code": "GOOD", "duration_days": 7, "usage_limit": 0, "expires_in_days": 7 }),
        json!({ "code": "GOOD", "duration_days": 7, "usage_limit": 1, "expires_in_days": 0 }),
    ];

    for body in invalid {
        ctx.client
            .post_with_auth("/api/admin/vouchers", &body, &token)
            .await
            .unwrap()
            .assert_status(StatusCode::BAD_REQUEST);
    }

    let valid = json!({ "code": "DUPE", "duration_days": 7, "usage_limit": 1, "expires_in_days": 7 });
    ctx.client
        .post_with_auth("/api/admin/vouchers", &valid, &token)
        .await
        .unwrap()
        .assert_status(StatusCode::CREATED);

    ctx.client
        .post_with_auth("/api/admin/vouchers", &json!({ "code": "dupe", "duration_days": 7, "usage_limit": 1, "expires_in_days": 7 }), &token)
        .await
        .unwrap()
        .assert_status(StatusCode::CONFLICT)
        .assert_error_message("already exists");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_platform_stats(ctx: &TestContext) {
    let admin = ctx.fixtures.create_admin("Admin").await.unwrap();
    let member = ctx.fixtures.create_profile("Member").await.unwrap();
    let token = ctx.token_for(admin.user_id);

    ctx.fixtures
        .create_voucher("LIVE", 7, 1, Duration::days(30))
        .await
        .unwrap();
    let dead = ctx
        .fixtures
        .create_voucher("DEAD", 7, 1, Duration::days(30))
        .await
        .unwrap();
    ctx.fixtures.deactivate_voucher(dead.id).await.unwrap();

    let today = Utc::now().date_naive();
    for _ in 0..3 {
        ctx.fixtures
            .create_food_log(member.user_id, today, Some(Decimal::from(100)))
            .await
            .unwrap();
    }

    ctx.client
        .post_with_auth(
            &format!("/api/admin/users/{}/premium", member.user_id),
            &json!({ "active": true }),
            &token,
        )
        .await
        .unwrap()
        .assert_status(StatusCode::OK);

    let response = ctx
        .client
        .get_with_auth("/api/admin/stats", &token)
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    assert_eq!(
        response.body(),
        &json!({
            "total_users": 2,
            "premium_users": 1,
            "active_vouchers": 1,
            "total_food_logs": 3
        })
    );
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_report_signups_and_top_users(ctx: &TestContext) {
    let admin = ctx.fixtures.create_admin("Admin").await.unwrap();
    let token = ctx.token_for(admin.user_id);

    let jan_1 = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
    let heavy = ctx
        .fixtures
        .create_profile_created_at(Some("Heavy"), jan_1)
        .await
        .unwrap();
    let anonymous = ctx
        .fixtures
        .create_profile_created_at(None, jan_1 + Duration::hours(2))
        .await
        .unwrap();

    let day = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    for _ in 0..4 {
        ctx.fixtures.create_food_log(heavy.user_id, day, None).await.unwrap();
    }
    ctx.fixtures
        .create_food_log(anonymous.user_id, day, None)
        .await
        .unwrap();

    let response = ctx
        .client
        .get_with_auth("/api/admin/analytics", &token)
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body();

    let signups = body.get("daily_signups").and_then(|v| v.as_array()).unwrap();
    assert_eq!(signups[0], json!({ "date": "2024-01-01", "count": 2 }));
    assert_eq!(signups.len(), 2);

    let top = body.get("top_users").and_then(|v| v.as_array()).unwrap();
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].get("name"), Some(&json!("Heavy")));
    assert_eq!(top[0].get("logs"), Some(&json!(4)));
    assert_eq!(top[1].get("name"), Some(&json!("Unknown")));
    assert_eq!(top[1].get("logs"), Some(&json!(1)));
}
