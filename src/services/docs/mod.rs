//! OpenAPI 文档生成
//!
//! 资源部分由 [`visit_resources`] 遍历生成，认证与关联接口单独补充。

use utoipa::openapi::{
    OpenApi, OpenApiBuilder, RefOr, Required,
    content::ContentBuilder,
    info::InfoBuilder,
    path::{OperationBuilder, Parameter, ParameterBuilder, ParameterIn, PathItemBuilder, PathItemType, PathsBuilder},
    request_body::{RequestBody, RequestBodyBuilder},
    response::{Response, ResponseBuilder},
    schema::{
        ArrayBuilder, ComponentsBuilder, KnownFormat, ObjectBuilder, Ref, Schema,
        SchemaFormat, SchemaType,
    },
    tag::{Tag, TagBuilder},
};
use utoipa::{IntoParams, ToSchema};

use crate::models::{
    MessageResponse, PaginationQuery, Resource, ResourceVisitor,
    auth::{
        requests::{LoginRequest, RegisterRequest},
        responses::LoginResponse,
    },
    courses::entities::{Course, CourseTag},
    users::entities::User,
    visit_resources,
};
use crate::storage::{CrudStorage, Storage};

const JSON: &str = "application/json";

fn json_response(description: &str, schema: impl Into<RefOr<Schema>>) -> Response {
    ResponseBuilder::new()
        .description(description)
        .content(JSON, ContentBuilder::new().schema(schema).build())
        .build()
}

fn message_response(description: &str) -> Response {
    json_response(description, Ref::from_schema_name("MessageResponse"))
}

fn json_body(schema_name: &str) -> RequestBody {
    RequestBodyBuilder::new()
        .content(
            JSON,
            ContentBuilder::new()
                .schema(Ref::from_schema_name(schema_name))
                .build(),
        )
        .required(Some(Required::True))
        .build()
}

fn array_of(schema_name: &str) -> Schema {
    Schema::Array(
        ArrayBuilder::new()
            .items(Ref::from_schema_name(schema_name))
            .build(),
    )
}

fn id_parameter() -> Parameter {
    let schema = Schema::Object(
        ObjectBuilder::new()
            .schema_type(SchemaType::Integer)
            .format(Some(SchemaFormat::KnownFormat(KnownFormat::Int64)))
            .build(),
    );
    ParameterBuilder::new()
        .name("id")
        .parameter_in(ParameterIn::Path)
        .required(Required::True)
        .schema(Some(schema))
        .build()
}

fn schema_name<'s, T: ToSchema<'s>>() -> &'s str {
    T::schema().0
}

fn tag(name: &str, description: String) -> Tag {
    TagBuilder::new()
        .name(name)
        .description(Some(description))
        .build()
}

/// 遍历资源，为每个资源生成两条路径、五个操作及其组件
struct OpenApiCollector {
    paths: PathsBuilder,
    components: ComponentsBuilder,
    tags: Vec<Tag>,
}

impl ResourceVisitor for OpenApiCollector {
    fn visit<R>(&mut self)
    where
        R: Resource,
        dyn Storage: CrudStorage<R>,
    {
        let name = R::NAME;
        let (record_name, record_schema) = R::schema();
        let (create_name, create_schema) = <R::Create as ToSchema<'static>>::schema();
        let (update_name, update_schema) = <R::Update as ToSchema<'static>>::schema();

        self.components = std::mem::take(&mut self.components)
            .schema(record_name, record_schema)
            .schema(create_name, create_schema)
            .schema(update_name, update_schema);
        self.tags.push(tag(name, format!("CRUD operations on {}", R::PATH)));

        let mut query_params = <R::Filter as IntoParams>::into_params(|| Some(ParameterIn::Query));
        query_params.extend(PaginationQuery::into_params(|| Some(ParameterIn::Query)));

        let list = OperationBuilder::new()
            .tags(Some(vec![name.to_string()]))
            .operation_id(Some(format!("list_{}", R::PATH)))
            .summary(Some(format!("List {}", R::PATH)))
            .parameters(Some(query_params))
            .response("200", json_response("Records ordered by id", array_of(record_name)))
            .response("400", message_response("Invalid query parameters"))
            .response("500", message_response("Storage error"))
            .build();
        let create = OperationBuilder::new()
            .tags(Some(vec![name.to_string()]))
            .operation_id(Some(format!("create_{}", R::PATH)))
            .summary(Some(format!("Create a {name}")))
            .request_body(Some(json_body(create_name)))
            .response("201", json_response("Created record", Ref::from_schema_name(record_name)))
            .response("400", message_response("Missing or invalid fields"))
            .response("409", message_response("Unique value already in use"))
            .response("500", message_response("Storage error"))
            .build();
        let get = OperationBuilder::new()
            .tags(Some(vec![name.to_string()]))
            .operation_id(Some(format!("get_{}", R::PATH)))
            .summary(Some(format!("Get a {name} by id")))
            .parameter(id_parameter())
            .response("200", json_response("The record", Ref::from_schema_name(record_name)))
            .response("400", message_response("Invalid id"))
            .response("404", message_response("Record not found"))
            .build();
        let update = OperationBuilder::new()
            .tags(Some(vec![name.to_string()]))
            .operation_id(Some(format!("update_{}", R::PATH)))
            .summary(Some(format!("Update fields of a {name}")))
            .parameter(id_parameter())
            .request_body(Some(json_body(update_name)))
            .response("200", json_response("Updated record", Ref::from_schema_name(record_name)))
            .response("400", message_response("Invalid id or fields"))
            .response("404", message_response("Record not found"))
            .response("500", message_response("Storage error"))
            .build();
        let delete = OperationBuilder::new()
            .tags(Some(vec![name.to_string()]))
            .operation_id(Some(format!("delete_{}", R::PATH)))
            .summary(Some(format!("Delete a {name}")))
            .parameter(id_parameter())
            .response("200", message_response("Record deleted"))
            .response("400", message_response("Invalid id"))
            .response("404", message_response("Record not found"))
            .response("500", message_response("Storage error"))
            .build();

        let collection = PathItemBuilder::new()
            .operation(PathItemType::Get, list)
            .operation(PathItemType::Post, create)
            .build();
        let item = PathItemBuilder::new()
            .operation(PathItemType::Get, get)
            .operation(PathItemType::Put, update)
            .operation(PathItemType::Delete, delete)
            .build();

        self.paths = std::mem::take(&mut self.paths)
            .path(format!("/{}", R::PATH), collection)
            .path(format!("/{}/{{id}}", R::PATH), item);
    }
}

impl OpenApiCollector {
    fn add_auth_paths(&mut self) {
        let auth_tag = || Some(vec!["Auth".to_string()]);

        let login = OperationBuilder::new()
            .tags(auth_tag())
            .operation_id(Some("login"))
            .summary(Some("Open a cookie session"))
            .request_body(Some(json_body(schema_name::<LoginRequest>())))
            .response(
                "200",
                json_response("Session opened", Ref::from_schema_name(schema_name::<LoginResponse>())),
            )
            .response("401", message_response("Incorrect email or password"))
            .build();
        let logout = || {
            OperationBuilder::new()
                .tags(auth_tag())
                .operation_id(Some("logout"))
                .summary(Some("Close the current session"))
                .response("200", message_response("Session closed"))
                .build()
        };
        let register = OperationBuilder::new()
            .tags(auth_tag())
            .operation_id(Some("register"))
            .summary(Some("Register a user with the default role"))
            .request_body(Some(json_body(schema_name::<RegisterRequest>())))
            .response("201", json_response("Registered user", Ref::from_schema_name("User")))
            .response("400", message_response("Invalid email or weak password"))
            .response("409", message_response("Email already in use"))
            .build();
        let me = OperationBuilder::new()
            .tags(auth_tag())
            .operation_id(Some("me"))
            .summary(Some("Current session user"))
            .response("200", json_response("Session user", Ref::from_schema_name("User")))
            .response("401", message_response("No valid session"))
            .build();

        self.paths = std::mem::take(&mut self.paths)
            .path(
                "/auth/login",
                PathItemBuilder::new().operation(PathItemType::Post, login).build(),
            )
            .path(
                "/auth/logout",
                PathItemBuilder::new()
                    .operation(PathItemType::Get, logout())
                    .operation(PathItemType::Post, logout())
                    .build(),
            )
            .path(
                "/auth/register",
                PathItemBuilder::new().operation(PathItemType::Post, register).build(),
            )
            .path(
                "/auth/me",
                PathItemBuilder::new().operation(PathItemType::Get, me).build(),
            );

        let (name, schema) = LoginRequest::schema();
        let (register_name, register_schema) = RegisterRequest::schema();
        let (login_name, login_schema) = LoginResponse::schema();
        let (message_name, message_schema) = MessageResponse::schema();
        self.components = std::mem::take(&mut self.components)
            .schema(name, schema)
            .schema(register_name, register_schema)
            .schema(login_name, login_schema)
            .schema(message_name, message_schema);
        self.tags
            .push(tag("Auth", "Cookie session authentication".to_string()));
    }

    fn add_association_paths(&mut self) {
        let course_tags = OperationBuilder::new()
            .tags(Some(vec![schema_name::<Course>().to_string()]))
            .operation_id(Some("list_course_tags"))
            .summary(Some("Tags mapped to a course"))
            .parameter(id_parameter())
            .response("200", json_response("Tags", array_of(schema_name::<CourseTag>())))
            .response("404", message_response("Course not found"))
            .build();
        let user_courses = OperationBuilder::new()
            .tags(Some(vec![schema_name::<User>().to_string()]))
            .operation_id(Some("list_user_courses"))
            .summary(Some("Courses a user is enrolled in"))
            .parameter(id_parameter())
            .response("200", json_response("Courses", array_of(schema_name::<Course>())))
            .response("404", message_response("User not found"))
            .build();

        self.paths = std::mem::take(&mut self.paths)
            .path(
                "/courses/{id}/tags",
                PathItemBuilder::new().operation(PathItemType::Get, course_tags).build(),
            )
            .path(
                "/users/{id}/courses",
                PathItemBuilder::new().operation(PathItemType::Get, user_courses).build(),
            );
    }
}

/// 生成完整的 OpenAPI 3 文档
pub fn build_openapi() -> OpenApi {
    let mut collector = OpenApiCollector {
        paths: PathsBuilder::new(),
        components: ComponentsBuilder::new(),
        tags: Vec::new(),
    };
    visit_resources(&mut collector);
    collector.add_auth_paths();
    collector.add_association_paths();

    let info = InfoBuilder::new()
        .title(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .description(Some("REST API for education centers, branches and courses"))
        .build();

    OpenApiBuilder::new()
        .info(info)
        .paths(collector.paths.build())
        .components(Some(collector.components.build()))
        .tags(Some(collector.tags))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_covers_resources() {
        let doc = build_openapi();
        let json = serde_json::to_value(&doc).expect("serialize openapi");

        let paths = json["paths"].as_object().expect("paths object");
        assert!(paths.contains_key("/branches"));
        assert!(paths.contains_key("/branches/{id}"));
        assert!(paths.contains_key("/educenters"));
        assert!(paths.contains_key("/courses/{id}/tags"));
        assert!(paths.contains_key("/auth/login"));

        let branch_item = &paths["/branches/{id}"];
        assert!(branch_item.get("get").is_some());
        assert!(branch_item.get("put").is_some());
        assert!(branch_item.get("delete").is_some());

        let schemas = json["components"]["schemas"].as_object().expect("schemas");
        assert!(schemas.contains_key("Branch"));
        assert!(schemas.contains_key("CreateBranchRequest"));
        assert!(schemas.contains_key("MessageResponse"));
    }

    #[test]
    fn test_password_hash_not_in_user_schema() {
        let doc = build_openapi();
        let json = serde_json::to_value(&doc).expect("serialize openapi");
        let user = &json["components"]["schemas"]["User"]["properties"];
        assert!(user.get("email").is_some());
        assert!(user.get("passwordHash").is_none());
    }
}
