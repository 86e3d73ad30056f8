//! OpenAPI description of the HTTP surface. Mounted outside production only.

use axum::{routing::get, Json, Router};
use serde_json::{json, Map, Value};

pub const OPENAPI_PATH: &str = "/swagger/v1/swagger.json";

pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route(OPENAPI_PATH, get(openapi))
}

async fn openapi() -> Json<Value> {
    Json(openapi_document())
}

pub fn openapi_document() -> Value {
    let mut paths: Map<String, Value> = Map::new();
    paths.insert("/api/emailaccounts".into(), accounts_collection());
    paths.insert("/api/emailaccounts/{id}".into(), account_item());
    paths.insert("/api/emailaccounts/{id}/emailmessages".into(), messages_collection());
    paths.insert("/api/emailaccounts/{id}/emailmessages/{message_id}".into(), message_item());

    json!({
        "openapi": "3.0.1",
        "info": { "title": "EmailService", "version": "v1" },
        "paths": paths,
        "components": { "schemas": schemas() }
    })
}

fn id_param(name: &str) -> Value {
    json!({
        "name": name,
        "in": "path",
        "required": true,
        "schema": { "type": "integer", "format": "int64" }
    })
}

fn schema_ref(name: &str) -> Value {
    json!({ "$ref": format!("#/components/schemas/{name}") })
}

fn json_body(schema: Value) -> Value {
    json!({ "application/json": { "schema": schema } })
}

fn accounts_collection() -> Value {
    let list = json!({
        "summary": "Get all EmailAccounts",
        "responses": {
            "200": { "description": "OK", "content": json_body(json!({ "type": "array", "items": schema_ref("EmailAccount") })) }
        }
    });
    let create = json!({
        "summary": "Create an EmailAccount",
        "requestBody": { "required": true, "content": json_body(schema_ref("NewEmailAccount")) },
        "responses": {
            "201": { "description": "Created", "content": json_body(schema_ref("EmailAccount")) },
            "400": { "description": "Invalid email format." }
        }
    });
    json!({ "get": list, "post": create })
}

fn account_item() -> Value {
    let get = json!({
        "summary": "Get an EmailAccount by id",
        "parameters": [id_param("id")],
        "responses": {
            "200": { "description": "OK", "content": json_body(schema_ref("EmailAccount")) },
            "404": { "description": "Not Found" }
        }
    });
    let delete = json!({
        "summary": "Delete an EmailAccount",
        "parameters": [id_param("id")],
        "responses": {
            "204": { "description": "No Content" },
            "404": { "description": "Not Found" }
        }
    });
    json!({ "get": get, "delete": delete })
}

fn messages_collection() -> Value {
    let text = json!({ "type": "string" });
    let send = json!({
        "summary": "Send an EmailMessage from an EmailAccount",
        "parameters": [id_param("id")],
        "requestBody": {
            "required": true,
            "content": {
                "application/json": { "schema": text.clone() },
                "text/plain": { "schema": text }
            }
        },
        "responses": {
            "201": { "description": "Created", "content": json_body(schema_ref("EmailMessage")) },
            "404": { "description": "Email Account not found." }
        }
    });
    json!({ "post": send })
}

fn message_item() -> Value {
    let update = json!({
        "summary": "Update an EmailMessage",
        "parameters": [id_param("id"), id_param("message_id")],
        "requestBody": { "required": true, "content": json_body(schema_ref("UpdateEmailMessage")) },
        "responses": {
            "204": { "description": "No Content" },
            "400": { "description": "Invalid request body" },
            "404": { "description": "Email Account or Email Message not found." }
        }
    });
    let delete = json!({
        "summary": "Delete an EmailMessage",
        "parameters": [id_param("id"), id_param("message_id")],
        "responses": {
            "204": { "description": "No Content" },
            "404": { "description": "Email Account or Email Message not found." }
        }
    });
    json!({ "put": update, "delete": delete })
}

fn schemas() -> Value {
    let int64 = json!({ "type": "integer", "format": "int64" });
    let address = json!({ "type": "string", "example": "user@example.com" });
    let date_time = json!({ "type": "string", "format": "date-time" });

    let account = json!({
        "type": "object",
        "properties": {
            "id": int64.clone(),
            "address": address.clone(),
            "sentEmails": { "type": "array", "items": schema_ref("EmailMessage") }
        }
    });
    let new_account = json!({
        "type": "object",
        "required": ["address"],
        "properties": { "address": address }
    });
    let message = json!({
        "type": "object",
        "properties": {
            "id": int64.clone(),
            "content": { "type": "string" },
            "sentDate": date_time.clone(),
            "emailAccountId": int64
        }
    });
    let update = json!({
        "type": "object",
        "required": ["content", "sentDate"],
        "properties": {
            "content": { "type": "string" },
            "sentDate": date_time
        }
    });

    json!({
        "EmailAccount": account,
        "NewEmailAccount": new_account,
        "EmailMessage": message,
        "UpdateEmailMessage": update
    })
}
