use crate::types::EndpointDescriptor;
use crate::types::HttpMethod::{Delete, Get, Patch, Post, Put};
use crate::types::ParamKind::{Array, Integer, String as Str};
use crate::types::ParamSpec as P;

pub(super) const ENDPOINTS: &[EndpointDescriptor] = &[
    EndpointDescriptor {
        name: "list_api_keys",
        description: "Retrieve all API keys belonging to the authenticated user.",
        method: Get,
        path: "/v3/api_keys",
        params: &[P::query("limit", Integer, "Maximum number of keys to return.")],
    },
    EndpointDescriptor {
        name: "create_api_key",
        description: "Create a new API key with the given name and scopes.",
        method: Post,
        path: "/v3/api_keys",
        params: &[
            P::body("name", Str, "Name of the new API key.").required(),
            P::body("scopes", Array, "Permissions granted to the key; full access when omitted."),
        ],
    },
    EndpointDescriptor {
        name: "get_api_key",
        description: "Retrieve a single API key by ID.",
        method: Get,
        path: "/v3/api_keys/{api_key_id}",
        params: &[P::path("api_key_id", "ID of the API key.")],
    },
    EndpointDescriptor {
        name: "update_api_key_name",
        description: "Rename an API key.",
        method: Patch,
        path: "/v3/api_keys/{api_key_id}",
        params: &[
            P::path("api_key_id", "ID of the API key."),
            P::body("name", Str, "New name for the key.").required(),
        ],
    },
    EndpointDescriptor {
        name: "update_api_key",
        description: "Update the name and scopes of an API key.",
        method: Put,
        path: "/v3/api_keys/{api_key_id}",
        params: &[
            P::path("api_key_id", "ID of the API key."),
            P::body("name", Str, "New name for the key.").required(),
            P::body("scopes", Array, "Replacement list of scopes."),
        ],
    },
    EndpointDescriptor {
        name: "delete_api_key",
        description: "Revoke an API key.",
        method: Delete,
        path: "/v3/api_keys/{api_key_id}",
        params: &[P::path("api_key_id", "ID of the API key.")],
    },
    EndpointDescriptor {
        name: "list_scopes",
        description: "List the scopes granted to the current API key.",
        method: Get,
        path: "/v3/scopes",
        params: &[],
    },
    EndpointDescriptor {
        name: "list_scope_requests",
        description: "List pending teammate requests for additional scopes.",
        method: Get,
        path: "/v3/scopes/requests",
        params: &[
            P::query("limit", Integer, "Number of results to return."),
            P::query("offset", Integer, "Number of results to skip."),
        ],
    },
    EndpointDescriptor {
        name: "deny_scope_request",
        description: "Deny a teammate's pending scope request.",
        method: Delete,
        path: "/v3/scopes/requests/{request_id}",
        params: &[P::path("request_id", "ID of the scope request.")],
    },
    EndpointDescriptor {
        name: "approve_scope_request",
        description: "Approve a teammate's pending scope request.",
        method: Patch,
        path: "/v3/scopes/requests/{request_id}/approve",
        params: &[P::path("request_id", "ID of the scope request.")],
    },
];
