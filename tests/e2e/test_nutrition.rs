use crate::e2e::helpers;

use helpers::assertions::assert_number;
use helpers::TestContext;
use hyper::StatusCode;
use serde_json::json;
use test_context::test_context;

const ESTIMATE_PATH: &str = "/api/nutrition/estimate";

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_estimate_nutrition_for_a_food(ctx: &TestContext) {
    let user = ctx.fixtures.create_profile("Cook").await.unwrap();

    let response = ctx
        .client
        .post_with_auth(
            ESTIMATE_PATH,
            &json!({ "food_name": "1 medium apple" }),
            &ctx.token_for(user.user_id),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);
    let body = response.body();
    assert_number(body, "calories", 95.0);
    assert_number(body, "protein", 0.5);
    assert_number(body, "carbs", 25.0);
    assert_number(body, "fat", 0.3);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_blank_or_oversized_food_names(ctx: &TestContext) {
    let user = ctx.fixtures.create_profile("Cook").await.unwrap();
    let token = ctx.token_for(user.user_id);

    ctx.client
        .post_with_auth(ESTIMATE_PATH, &json!({ "food_name": "  " }), &token)
        .await
        .unwrap()
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("food_name is required");

    ctx.client
        .post_with_auth(ESTIMATE_PATH, &json!({ "food_name": "a".repeat(201) }), &token)
        .await
        .unwrap()
        .assert_status(StatusCode::BAD_REQUEST)
        .assert_error_message("food_name must be at most 200 characters");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_map_gateway_failures_to_statuses(ctx: &TestContext) {
    let user = ctx.fixtures.create_profile("Cook").await.unwrap();
    let token = ctx.token_for(user.user_id);

    let cases = [
        ("rate limited", StatusCode::TOO_MANY_REQUESTS, "Rate limit exceeded"),
        ("no credits", StatusCode::PAYMENT_REQUIRED, "AI credits exhausted"),
        ("gateway down", StatusCode::SERVICE_UNAVAILABLE, "AI gateway error"),
    ];

    for (food_name, status, message) in cases {
        ctx.client
            .post_with_auth(ESTIMATE_PATH, &json!({ "food_name": food_name }), &token)
            .await
            .unwrap()
            .assert_status(status)
            .assert_error_message(message);
    }
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_require_authentication_for_estimates(ctx: &TestContext) {
    ctx.client
        .post(ESTIMATE_PATH, &json!({ "food_name": "apple" }))
        .await
        .unwrap()
        .assert_status(StatusCode::UNAUTHORIZED);
}
