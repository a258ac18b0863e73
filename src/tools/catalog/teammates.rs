use crate::types::EndpointDescriptor;
use crate::types::HttpMethod::{Delete, Get, Patch, Post};
use crate::types::ParamKind::{Array, Boolean, Integer, String as Str};
use crate::types::ParamSpec as P;

pub(super) const ENDPOINTS: &[EndpointDescriptor] = &[
    EndpointDescriptor {
        name: "list_teammates",
        description: "Retrieve all teammates on the account.",
        method: Get,
        path: "/v3/teammates",
        params: &[
            P::query("limit", Integer, "Number of teammates to return."),
            P::query("offset", Integer, "Number of teammates to skip."),
        ],
    },
    EndpointDescriptor {
        name: "invite_teammate",
        description: "Send an invitation to a new teammate.",
        method: Post,
        path: "/v3/teammates",
        params: &[
            P::body("email", Str, "Address of the invitee.").required(),
            P::body("scopes", Array, "Scopes to grant; ignored for admins.").required(),
            P::body("is_admin", Boolean, "Grant full admin access.").required(),
        ],
    },
    EndpointDescriptor {
        name: "get_teammate",
        description: "Retrieve a teammate by username.",
        method: Get,
        path: "/v3/teammates/{username}",
        params: &[P::path("username", "Username of the teammate.")],
    },
    EndpointDescriptor {
        name: "update_teammate_permissions",
        description: "Change a teammate's scopes or admin status.",
        method: Patch,
        path: "/v3/teammates/{username}",
        params: &[
            P::path("username", "Username of the teammate."),
            P::body("scopes", Array, "Replacement scopes.").required(),
            P::body("is_admin", Boolean, "Grant full admin access.").required(),
        ],
    },
    EndpointDescriptor {
        name: "delete_teammate",
        description: "Remove a teammate from the account.",
        method: Delete,
        path: "/v3/teammates/{username}",
        params: &[P::path("username", "Username of the teammate.")],
    },
    EndpointDescriptor {
        name: "list_pending_teammates",
        description: "Retrieve invitations that have not been accepted.",
        method: Get,
        path: "/v3/teammates/pending",
        params: &[],
    },
    EndpointDescriptor {
        name: "resend_teammate_invite",
        description: "Resend a pending teammate invitation.",
        method: Post,
        path: "/v3/teammates/pending/{token}/resend",
        params: &[P::path("token", "Token of the pending invitation.")],
    },
    EndpointDescriptor {
        name: "delete_pending_teammate",
        description: "Cancel a pending teammate invitation.",
        method: Delete,
        path: "/v3/teammates/pending/{token}",
        params: &[P::path("token", "Token of the pending invitation.")],
    },
];
