use crate::types::EndpointDescriptor;
use crate::types::HttpMethod::{Delete, Get, Patch, Post};
use crate::types::ParamKind::{Boolean, Integer, String as Str};
use crate::types::ParamSpec as P;

pub(super) const ENDPOINTS: &[EndpointDescriptor] = &[
    EndpointDescriptor {
        name: "list_templates",
        description: "Retrieve paged transactional templates.",
        method: Get,
        path: "/v3/templates",
        params: &[
            P::query("page_size", Integer, "Templates per page (1-200).").required(),
            P::query("generations", Str, "legacy, dynamic, or both comma-separated."),
            P::query("page_token", Str, "Token of the page to return."),
        ],
    },
    EndpointDescriptor {
        name: "create_template",
        description: "Create a transactional template.",
        method: Post,
        path: "/v3/templates",
        params: &[
            P::body("name", Str, "Name of the template.").required(),
            P::body("generation", Str, "legacy or dynamic."),
        ],
    },
    EndpointDescriptor {
        name: "get_template",
        description: "Retrieve a transactional template and its versions.",
        method: Get,
        path: "/v3/templates/{template_id}",
        params: &[P::path("template_id", "ID of the template.")],
    },
    EndpointDescriptor {
        name: "duplicate_template",
        description: "Duplicate a transactional template.",
        method: Post,
        path: "/v3/templates/{template_id}",
        params: &[
            P::path("template_id", "ID of the template to copy."),
            P::body("name", Str, "Name of the copy."),
        ],
    },
    EndpointDescriptor {
        name: "update_template",
        description: "Rename a transactional template.",
        method: Patch,
        path: "/v3/templates/{template_id}",
        params: &[
            P::path("template_id", "ID of the template."),
            P::body("name", Str, "New name of the template."),
        ],
    },
    EndpointDescriptor {
        name: "delete_template",
        description: "Delete a transactional template.",
        method: Delete,
        path: "/v3/templates/{template_id}",
        params: &[P::path("template_id", "ID of the template.")],
    },
    EndpointDescriptor {
        name: "create_template_version",
        description: "Create a new version of a transactional template.",
        method: Post,
        path: "/v3/templates/{template_id}/versions",
        params: &[
            P::path("template_id", "ID of the template."),
            P::body("name", Str, "Name of the version.").required(),
            P::body("subject", Str, "Subject line."),
            P::body("html_content", Str, "HTML body."),
            P::body("plain_content", Str, "Plain-text body."),
            P::body("active", Integer, "1 to make this the active version."),
            P::body("generate_plain_content", Boolean, "Derive plain text from the HTML."),
            P::body("editor", Str, "code or design."),
            P::body("test_data", Str, "Mock JSON used for previews."),
        ],
    },
    EndpointDescriptor {
        name: "get_template_version",
        description: "Retrieve one version of a transactional template.",
        method: Get,
        path: "/v3/templates/{template_id}/versions/{version_id}",
        params: &[
            P::path("template_id", "ID of the template."),
            P::path("version_id", "ID of the version."),
        ],
    },
    EndpointDescriptor {
        name: "update_template_version",
        description: "Edit a version of a transactional template.",
        method: Patch,
        path: "/v3/templates/{template_id}/versions/{version_id}",
        params: &[
            P::path("template_id", "ID of the template."),
            P::path("version_id", "ID of the version."),
            P::body("name", Str, "Name of the version."),
            P::body("subject", Str, "Subject line."),
            P::body("html_content", Str, "HTML body."),
            P::body("plain_content", Str, "Plain-text body."),
            P::body("active", Integer, "1 to make this the active version."),
            P::body("generate_plain_content", Boolean, "Derive plain text from the HTML."),
            P::body("test_data", Str, "Mock JSON used for previews."),
        ],
    },
    EndpointDescriptor {
        name: "delete_template_version",
        description: "Delete a version of a transactional template.",
        method: Delete,
        path: "/v3/templates/{template_id}/versions/{version_id}",
        params: &[
            P::path("template_id", "ID of the template."),
            P::path("version_id", "ID of the version."),
        ],
    },
    EndpointDescriptor {
        name: "activate_template_version",
        description: "Make a version the active one for its template.",
        method: Post,
        path: "/v3/templates/{template_id}/versions/{version_id}/activate",
        params: &[
            P::path("template_id", "ID of the template."),
            P::path("version_id", "ID of the version."),
        ],
    },
];
