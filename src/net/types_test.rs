use super::*;

#[test]
fn token_response_parses_key() {
    let t: TokenResponse = serde_json::from_value(serde_json::json!({"key": "tok1"})).unwrap();
    assert_eq!(t.key, "tok1");
}

#[test]
fn user_profile_tolerates_missing_fields() {
    let p: UserProfile = serde_json::from_value(serde_json::json!({
        "username": "ant",
        "email": "ant@example.com"
    }))
    .unwrap();
    assert_eq!(p.username, "ant");
    assert!(p.nickname.is_none());
    assert!(p.joined_deposits.is_empty());
    assert_eq!(p.display_name(), "ant");
}

#[test]
fn user_profile_display_name_prefers_nickname() {
    let p = UserProfile {
        username: "ant".to_owned(),
        nickname: Some("Queen".to_owned()),
        ..UserProfile::default()
    };
    assert_eq!(p.display_name(), "Queen");
}

#[test]
fn registration_request_skips_absent_name() {
    let req = RegistrationRequest {
        username: "a".to_owned(),
        password1: "pw".to_owned(),
        password2: "pw".to_owned(),
        email: "a@b.c".to_owned(),
        nickname: "n".to_owned(),
        name: None,
    };
    let v = serde_json::to_value(&req).unwrap();
    assert!(v.get("name").is_none());
    assert_eq!(v["password1"], v["password2"]);
}

#[test]
fn product_parses_fss_fields_and_options() {
    let p: Product = serde_json::from_value(serde_json::json!({
        "id": 7,
        "fin_prdt_cd": "WR0001B",
        "kor_co_nm": "우리은행",
        "fin_prdt_nm": "WON플러스예금",
        "intr_rate": 3.0,
        "max_intr_rate": 3.45,
        "options": [
            {"id": 70, "save_trm": 12, "intr_rate": 3.0, "intr_rate2": 3.45}
        ]
    }))
    .unwrap();
    assert_eq!(p.kor_co_nm, "우리은행");
    assert_eq!(p.options.len(), 1);
    assert_eq!(p.options[0].save_trm, Some(12));
}

#[test]
fn market_snapshot_accepts_null_quotes() {
    let snap: MarketSnapshot = serde_json::from_value(serde_json::json!({
        "KOSPI": {"value": "2,501.32", "change": "+12.20", "rate": "+0.49%", "isUp": true, "symbol": "^KS11"},
        "NASDAQ": null
    }))
    .unwrap();
    assert!(snap["KOSPI"].as_ref().unwrap().is_up);
    assert!(snap["NASDAQ"].is_none());
}

#[test]
fn stock_row_maps_renamed_columns() {
    let row: StockRow = serde_json::from_value(serde_json::json!({
        "ticker": "005930",
        "name": "삼성전자",
        "score": 81.5,
        "DIV": 2.1,
        "PER": 11.3,
        "PBR": 1.1,
        "Sector": "IT"
    }))
    .unwrap();
    assert_eq!(row.ticker, "005930");
    assert_eq!(row.per, Some(11.3));
    assert!(row.roe_est.is_none());
}

#[test]
fn post_listing_accepts_paginated_shape() {
    let listing: PostListing = serde_json::from_value(serde_json::json!({
        "count": 42,
        "results": [{"id": 1, "title": "hello"}]
    }))
    .unwrap();
    match listing {
        PostListing::Paginated { count, results } => {
            assert_eq!(count, 42);
            assert_eq!(results.len(), 1);
        }
        PostListing::Plain(_) => panic!("expected paginated shape"),
    }
}

#[test]
fn post_listing_accepts_plain_array() {
    let listing: PostListing =
        serde_json::from_value(serde_json::json!([{"id": 1, "title": "hello"}])).unwrap();
    match listing {
        PostListing::Plain(posts) => assert_eq!(posts[0].title, "hello"),
        PostListing::Paginated { .. } => panic!("expected plain shape"),
    }
}
