//! HTTP 层集成测试：内存 SQLite + Moka 会话存储，路由与主程序一致

use std::sync::Arc;

use actix_web::cookie::Cookie;
use actix_web::http::StatusCode;
use actix_web::{App, test, web};
use serde_json::{Value, json};

use educenter_api::cache::ObjectCache;
use educenter_api::cache::object_cache::moka::MokaCacheWrapper;
use educenter_api::models::AppStartTime;
use educenter_api::routes::configure_all_routes;
use educenter_api::runtime::lifetime::startup::seed_roles;
use educenter_api::storage::Storage;
use educenter_api::storage::sea_orm_storage::SeaOrmStorage;
use educenter_api::utils::{json_error_handler, query_error_handler};

async fn setup() -> (Arc<dyn Storage>, Arc<dyn ObjectCache>) {
    let storage = SeaOrmStorage::connect("sqlite::memory:", 1, 30)
        .await
        .expect("in-memory database");
    let storage: Arc<dyn Storage> = Arc::new(storage);
    seed_roles(storage.as_ref()).await.expect("seed roles");
    let cache: Arc<dyn ObjectCache> = Arc::new(MokaCacheWrapper::with_settings(1_000, 3_600));
    (storage, cache)
}

macro_rules! init_app {
    ($storage:expr, $cache:expr) => {
        test::init_service(
            App::new()
                .app_data(web::QueryConfig::default().error_handler(query_error_handler))
                .app_data(web::JsonConfig::default().error_handler(json_error_handler))
                .app_data(web::Data::new($storage.clone()))
                .app_data(web::Data::new($cache.clone()))
                .app_data(web::Data::new(AppStartTime {
                    start_datetime: chrono::Utc::now(),
                }))
                .configure(configure_all_routes),
        )
        .await
    };
}

fn id_of(body: &Value) -> i64 {
    body["id"].as_i64().expect("record id")
}

#[actix_web::test]
async fn test_create_get_update_delete_round_trip() {
    let (storage, cache) = setup().await;
    let app = init_app!(storage, cache);

    let req = test::TestRequest::post()
        .uri("/cities")
        .set_json(json!({"name": "Tashkent"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(resp).await;
    let id = id_of(&created);
    assert_eq!(created["name"], "Tashkent");
    assert!(created["createdAt"].is_string());

    let req = test::TestRequest::get().uri(&format!("/cities/{id}")).to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched["name"], "Tashkent");

    let req = test::TestRequest::put()
        .uri(&format!("/cities/{id}"))
        .set_json(json!({"name": "Toshkent"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = test::read_body_json(resp).await;
    assert_eq!(updated["name"], "Toshkent");

    let req = test::TestRequest::get().uri(&format!("/cities/{id}")).to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(fetched["name"], "Toshkent");

    let req = test::TestRequest::delete().uri(&format!("/cities/{id}")).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(
        body["message"],
        format!("City with id {id} was deleted successfully!")
    );

    let req = test::TestRequest::get().uri(&format!("/cities/{id}")).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], format!("Not found City with id {id}."));
}

#[actix_web::test]
async fn test_missing_records_give_not_found() {
    let (storage, cache) = setup().await;
    let app = init_app!(storage, cache);

    let req = test::TestRequest::delete().uri("/branches/4242").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::put()
        .uri("/faqs/4242")
        .set_json(json!({"answer": "Yes"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Not found FAQ with id 4242.");
}

#[actix_web::test]
async fn test_deleting_city_cascades_to_districts() {
    let (storage, cache) = setup().await;
    let app = init_app!(storage, cache);

    let req = test::TestRequest::post()
        .uri("/cities")
        .set_json(json!({"name": "Samarkand"}))
        .to_request();
    let city: Value = test::call_and_read_body_json(&app, req).await;
    let city_id = id_of(&city);

    let req = test::TestRequest::post()
        .uri("/districts")
        .set_json(json!({"cityId": city_id, "name": "Registan"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let district: Value = test::read_body_json(resp).await;
    let district_id = id_of(&district);

    let req = test::TestRequest::get()
        .uri(&format!("/districts?cityId={city_id}"))
        .to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(listed.as_array().map(Vec::len), Some(1));

    let req = test::TestRequest::delete()
        .uri(&format!("/cities/{city_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/districts/{district_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_bad_input_gives_bad_request() {
    let (storage, cache) = setup().await;
    let app = init_app!(storage, cache);

    // 缺少必填字段 cityId
    let req = test::TestRequest::post()
        .uri("/districts")
        .set_json(json!({"name": "Chilonzor"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert!(body["message"].is_string());

    // 非法 JSON
    let req = test::TestRequest::post()
        .uri("/cities")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"name\": ")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // 非整数 id
    for uri in ["/cities/abc", "/cities/-3", "/cities/0"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
    }

    // 字段校验
    let req = test::TestRequest::post()
        .uri("/reviews")
        .set_json(json!({"userId": 1, "branchId": 1, "rating": 9, "description": "Great"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/educenters")
        .set_json(json!({"name": "x".repeat(101)}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_list_order_pagination_and_search() {
    let (storage, cache) = setup().await;
    let app = init_app!(storage, cache);

    for name in ["Bukhara", "Khiva", "Fergana"] {
        let req = test::TestRequest::post()
            .uri("/cities")
            .set_json(json!({"name": name}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let req = test::TestRequest::get().uri("/cities").to_request();
    let all: Value = test::call_and_read_body_json(&app, req).await;
    let names: Vec<&str> = all
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|c| c["name"].as_str())
        .collect();
    assert_eq!(names, vec!["Bukhara", "Khiva", "Fergana"]);

    let req = test::TestRequest::get().uri("/cities?page=2&size=2").to_request();
    let page: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(page.as_array().map(Vec::len), Some(1));
    assert_eq!(page[0]["name"], "Fergana");

    let req = test::TestRequest::get().uri("/cities?search=khi").to_request();
    let found: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(found.as_array().map(Vec::len), Some(1));

    // 通配符按字面量匹配
    let req = test::TestRequest::get().uri("/cities?search=%25").to_request();
    let none: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(none.as_array().map(Vec::len), Some(0));
}

#[actix_web::test]
async fn test_user_password_is_hidden_and_email_unique() {
    let (storage, cache) = setup().await;
    let app = init_app!(storage, cache);

    let role = storage
        .get_user_role_by_name("user")
        .await
        .expect("role lookup")
        .expect("seeded role");

    let payload = json!({
        "email": "aziz@edu.uz",
        "password": "Maktab2024Yangi",
        "name": "Aziz",
        "userRoleId": role.id,
    });
    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let user: Value = test::read_body_json(resp).await;
    assert_eq!(user["email"], "aziz@edu.uz");
    assert!(user.get("password").is_none());
    assert!(user.get("passwordHash").is_none());

    let req = test::TestRequest::get()
        .uri(&format!("/users/{}", id_of(&user)))
        .to_request();
    let fetched: Value = test::call_and_read_body_json(&app, req).await;
    assert!(fetched.get("passwordHash").is_none());

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(&payload)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
}

#[actix_web::test]
async fn test_session_login_me_logout() {
    let (storage, cache) = setup().await;
    let app = init_app!(storage, cache);

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(json!({"email": "malika@edu.uz", "password": "Kitob2024Yangi", "name": "Malika"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    // 错误密码
    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({"email": "malika@edu.uz", "password": "Wrong2024Pass"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({"email": "malika@edu.uz", "password": "Kitob2024Yangi"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let sid: Cookie<'static> = resp
        .response()
        .cookies()
        .find(|c| c.name() == "sid")
        .map(|c| c.into_owned())
        .expect("session cookie");
    assert_eq!(sid.http_only(), Some(true));
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["user"]["email"], "malika@edu.uz");
    assert!(body["expiresIn"].as_u64().is_some());

    let req = test::TestRequest::get()
        .uri("/auth/me")
        .cookie(sid.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let me: Value = test::read_body_json(resp).await;
    assert_eq!(me["name"], "Malika");

    let req = test::TestRequest::post()
        .uri("/auth/logout")
        .cookie(sid.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/auth/me")
        .cookie(sid)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get().uri("/auth/me").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_form_login_and_weak_password_register() {
    let (storage, cache) = setup().await;
    let app = init_app!(storage, cache);

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(json!({"email": "bobur@edu.uz", "password": "short", "name": "Bobur"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(json!({"email": "bobur@edu.uz", "password": "Daftar2024Qalam", "name": "Bobur"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_form([("email", "bobur@edu.uz"), ("password", "Daftar2024Qalam")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_course_tag_and_enrollment_associations() {
    let (storage, cache) = setup().await;
    let app = init_app!(storage, cache);

    let req = test::TestRequest::post()
        .uri("/courses")
        .set_json(json!({"name": "IELTS Preparation"}))
        .to_request();
    let course: Value = test::call_and_read_body_json(&app, req).await;
    let course_id = id_of(&course);
    assert_eq!(course["currentStudents"], 0);

    let req = test::TestRequest::post()
        .uri("/courseTags")
        .set_json(json!({"tagName": "English"}))
        .to_request();
    let tag: Value = test::call_and_read_body_json(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/courseTagMappings")
        .set_json(json!({"courseId": course_id, "tagId": id_of(&tag)}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::get()
        .uri(&format!("/courses/{course_id}/tags"))
        .to_request();
    let tags: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(tags[0]["tagName"], "English");

    let req = test::TestRequest::get().uri("/courses/999/tags").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(json!({"email": "dilnoza@edu.uz", "password": "Sinf2024Dars", "name": "Dilnoza"}))
        .to_request();
    let user: Value = test::call_and_read_body_json(&app, req).await;
    let user_id = id_of(&user);

    let req = test::TestRequest::post()
        .uri("/enrollments")
        .set_json(json!({"userId": user_id, "courseId": course_id}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::get()
        .uri(&format!("/users/{user_id}/courses"))
        .to_request();
    let courses: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(courses[0]["name"], "IELTS Preparation");
}

#[actix_web::test]
async fn test_index_and_openapi() {
    let (storage, cache) = setup().await;
    let app = init_app!(storage, cache);

    let req = test::TestRequest::get().uri("/").to_request();
    let info: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(info["name"], "educenter-api");
    assert!(info["uptime"].as_i64().is_some());

    let req = test::TestRequest::get().uri("/api/openapi.json").to_request();
    let doc: Value = test::call_and_read_body_json(&app, req).await;
    assert!(doc["openapi"].as_str().is_some_and(|v| v.starts_with("3.")));
    assert!(doc["paths"]["/workers/{id}"].is_object());
}

#[actix_web::test]
async fn test_huge_page_returns_empty_list() {
    let (storage, cache) = setup().await;
    let app = init_app!(storage, cache);

    let req = test::TestRequest::post()
        .uri("/cities")
        .set_json(json!({"name": "Bukhara"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::get()
        .uri("/cities?page=100000000000000000&size=100")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!([]));

    let req = test::TestRequest::get()
        .uri(&format!("/cities?page={}&size=1", u64::MAX))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn test_dangling_reference_reports_storage_error() {
    let (storage, cache) = setup().await;
    let app = init_app!(storage, cache);

    let req = test::TestRequest::post()
        .uri("/courses")
        .set_json(json!({"name": "Algebra", "branchId": 999}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = test::read_body_json(resp).await;
    let message = body["message"].as_str().expect("message");
    assert!(message.contains("FOREIGN KEY"), "unexpected message: {message}");
}

#[actix_web::test]
async fn test_workers_are_users_with_workplace() {
    let (storage, cache) = setup().await;
    let app = init_app!(storage, cache);

    let req = test::TestRequest::post()
        .uri("/educenters")
        .set_json(json!({"name": "Ilm Markazi"}))
        .to_request();
    let center: Value = test::call_and_read_body_json(&app, req).await;
    let center_id = id_of(&center);

    let worker_role = storage
        .get_user_role_by_name("worker")
        .await
        .expect("role lookup")
        .expect("seeded role");
    let user_role = storage
        .get_user_role_by_name("user")
        .await
        .expect("role lookup")
        .expect("seeded role");

    // 缺少工作单位
    let req = test::TestRequest::post()
        .uri("/workers")
        .set_json(json!({
            "email": "dilnoza@edu.uz",
            "password": "Ustoz2024Yangi",
            "name": "Dilnoza",
            "userRoleId": worker_role.id,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let req = test::TestRequest::post()
        .uri("/workers")
        .set_json(json!({
            "email": "dilnoza@edu.uz",
            "password": "Ustoz2024Yangi",
            "name": "Dilnoza",
            "userRoleId": worker_role.id,
            "workEducationCenterId": center_id,
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let worker: Value = test::read_body_json(resp).await;
    let worker_id = id_of(&worker);
    assert_eq!(worker["workEducationCenterId"], center_id);
    assert!(worker.get("passwordHash").is_none());

    let req = test::TestRequest::post()
        .uri("/users")
        .set_json(json!({
            "email": "sardor@edu.uz",
            "password": "Talaba2024Yangi",
            "name": "Sardor",
            "userRoleId": user_role.id,
        }))
        .to_request();
    let plain: Value = test::call_and_read_body_json(&app, req).await;
    let plain_id = id_of(&plain);

    let req = test::TestRequest::get()
        .uri(&format!("/workers/{plain_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get().uri("/workers").to_request();
    let listed: Value = test::call_and_read_body_json(&app, req).await;
    let ids: Vec<i64> = listed
        .as_array()
        .expect("worker list")
        .iter()
        .map(id_of)
        .collect();
    assert_eq!(ids, vec![worker_id]);

    // 普通用户不能通过 /workers 删除
    let req = test::TestRequest::delete()
        .uri(&format!("/workers/{plain_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri(&format!("/users/{plain_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    // 删除教育中心级联删除其员工
    let req = test::TestRequest::delete()
        .uri(&format!("/educenters/{center_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri(&format!("/users/{worker_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let req = test::TestRequest::get()
        .uri(&format!("/users/{plain_id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
}

#[actix_web::test]
async fn test_unknown_email_and_wrong_password_look_alike() {
    let (storage, cache) = setup().await;
    let app = init_app!(storage, cache);

    let req = test::TestRequest::post()
        .uri("/auth/register")
        .set_json(json!({"email": "nodira@edu.uz", "password": "Daftar2024Yangi", "name": "Nodira"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({"email": "nodira@edu.uz", "password": "Wrong2024Pass"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let wrong_password: Value = test::read_body_json(resp).await;

    let req = test::TestRequest::post()
        .uri("/auth/login")
        .set_json(json!({"email": "nobody@edu.uz", "password": "Wrong2024Pass"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let unknown_email: Value = test::read_body_json(resp).await;

    assert_eq!(wrong_password, unknown_email);
}
