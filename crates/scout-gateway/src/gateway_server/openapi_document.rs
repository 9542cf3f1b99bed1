//! Static OpenAPI description of the gateway routes.

pub(super) const OPENAPI_DOCUMENT: &str = r##"{
  "openapi": "3.0.3",
  "info": {
    "title": "scout gateway",
    "version": "0.1.0",
    "description": "Chat-triggered web search, issue-tracker lookups, comment summaries and message delivery."
  },
  "paths": {
    "/slack/events": {
      "post": {
        "summary": "Events API callback (url_verification and app_mention)",
        "requestBody": {"required": true, "content": {"application/json": {"schema": {"type": "object"}}}},
        "responses": {"200": {"description": "Acknowledged; url_verification echoes {challenge}"}}
      }
    },
    "/api/jira/issues": {
      "get": {
        "summary": "Search issues by summary, assignee and status",
        "parameters": [
          {"name": "summary", "in": "query", "schema": {"type": "string"}},
          {"name": "assignee", "in": "query", "schema": {"type": "string"}},
          {"name": "status", "in": "query", "schema": {"type": "string"}}
        ],
        "responses": {
          "200": {"description": "Up to five issues", "content": {"application/json": {"schema": {"type": "object", "properties": {"issues": {"type": "array", "items": {"$ref": "#/components/schemas/TrackerIssue"}}}}}}},
          "400": {"$ref": "#/components/responses/Error"},
          "500": {"$ref": "#/components/responses/Error"}
        }
      }
    },
    "/api/jira/comments": {
      "get": {
        "summary": "List comments of an issue as plain text",
        "parameters": [{"name": "key", "in": "query", "required": true, "schema": {"type": "string"}}],
        "responses": {
          "200": {"description": "Comments", "content": {"application/json": {"schema": {"type": "object", "properties": {"comments": {"type": "array", "items": {"$ref": "#/components/schemas/Comment"}}}}}}},
          "400": {"$ref": "#/components/responses/Error"},
          "500": {"$ref": "#/components/responses/Error"}
        }
      }
    },
    "/api/jira/comments/summary": {
      "get": {
        "summary": "Summarize issue comments and post the summary to a channel",
        "parameters": [
          {"name": "key", "in": "query", "required": true, "schema": {"type": "string"}},
          {"name": "channel", "in": "query", "required": true, "schema": {"type": "string"}}
        ],
        "responses": {
          "200": {"description": "Summary posted", "content": {"application/json": {"schema": {"type": "object", "properties": {"ok": {"type": "boolean"}}}}}},
          "400": {"$ref": "#/components/responses/Error"},
          "500": {"$ref": "#/components/responses/Error"}
        }
      }
    },
    "/api/slack/send": {
      "post": {
        "summary": "Post a message, optionally converting markdown and attaching an image",
        "requestBody": {
          "required": true,
          "content": {"application/json": {"schema": {
            "type": "object",
            "required": ["channel", "message"],
            "properties": {
              "channel": {"type": "string"},
              "message": {"type": "string"},
              "imageUrl": {"type": "string"},
              "format": {"type": "string", "enum": ["plain", "markdown"]}
            }
          }}}
        },
        "responses": {
          "200": {"description": "Platform acknowledgment", "content": {"application/json": {"schema": {"type": "object", "properties": {"ok": {"type": "boolean"}, "ts": {"type": "string", "nullable": true}}}}}},
          "400": {"$ref": "#/components/responses/Error"},
          "500": {"$ref": "#/components/responses/Error"}
        }
      }
    },
    "/api/search/food": {
      "get": {
        "summary": "Web search returning up to five results",
        "parameters": [{"name": "query", "in": "query", "required": true, "schema": {"type": "string"}}],
        "responses": {
          "200": {"description": "Results", "content": {"application/json": {"schema": {"type": "array", "items": {"$ref": "#/components/schemas/SearchResultItem"}}}}},
          "400": {"$ref": "#/components/responses/Error"},
          "500": {"$ref": "#/components/responses/Error"}
        }
      }
    },
    "/health": {"get": {"summary": "Liveness probe", "responses": {"200": {"description": "{\"status\":\"ok\"}"}}}},
    "/": {"get": {"summary": "Plain OK", "responses": {"200": {"description": "OK"}}}}
  },
  "components": {
    "schemas": {
      "TrackerIssue": {"type": "object", "properties": {"key": {"type": "string"}, "url": {"type": "string"}, "summary": {"type": "string"}, "status": {"type": "string"}, "assignee": {"type": "string"}}},
      "Comment": {"type": "object", "properties": {"author": {"type": "string"}, "createdAt": {"type": "string"}, "bodyPlainText": {"type": "string"}}},
      "SearchResultItem": {"type": "object", "properties": {"title": {"type": "string"}, "link": {"type": "string"}, "snippet": {"type": "string", "nullable": true}}}
    },
    "responses": {
      "Error": {"description": "Failure", "content": {"application/json": {"schema": {"type": "object", "properties": {"error": {"type": "string"}}}}}}
    }
  }
}"##;
