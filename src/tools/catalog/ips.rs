use crate::types::EndpointDescriptor;
use crate::types::HttpMethod::{Delete, Get, Post, Put};
use crate::types::ParamKind::{Array, Boolean, Integer, String as Str};
use crate::types::ParamSpec as P;

pub(super) const ENDPOINTS: &[EndpointDescriptor] = &[
    // -- IP addresses ---------------------------------------------------------
    EndpointDescriptor {
        name: "list_ips",
        description: "Retrieve IP addresses on the account.",
        method: Get,
        path: "/v3/ips",
        params: &[
            P::query("ip", Str, "Filter by IP prefix."),
            P::query("exclude_whitelabels", Boolean, "Omit IPs with reverse DNS."),
            P::query("limit", Integer, "Number of IPs to return."),
            P::query("offset", Integer, "Number of IPs to skip."),
            P::query("subuser", Str, "Only IPs assigned to this subuser."),
            P::query("sort_by_direction", Str, "asc or desc."),
        ],
    },
    EndpointDescriptor {
        name: "add_ips",
        description: "Purchase additional dedicated IP addresses.",
        method: Post,
        path: "/v3/ips",
        params: &[
            P::body("count", Integer, "Number of IPs to add.").required(),
            P::body("subusers", Array, "Subusers the IPs are assigned to."),
            P::body("warmup", Boolean, "Start the IPs in warmup."),
        ],
    },
    EndpointDescriptor {
        name: "get_remaining_ips",
        description: "Retrieve how many IPs can still be added.",
        method: Get,
        path: "/v3/ips/remaining",
        params: &[],
    },
    EndpointDescriptor {
        name: "list_assigned_ips",
        description: "Retrieve IPs assigned to the account.",
        method: Get,
        path: "/v3/ips/assigned",
        params: &[],
    },
    EndpointDescriptor {
        name: "get_ip",
        description: "Retrieve the pools and subusers of an IP address.",
        method: Get,
        path: "/v3/ips/{ip_address}",
        params: &[P::path("ip_address", "The IP address.")],
    },
    // -- IP pools -------------------------------------------------------------
    EndpointDescriptor {
        name: "list_ip_pools",
        description: "Retrieve IP pools.",
        method: Get,
        path: "/v3/ips/pools",
        params: &[],
    },
    EndpointDescriptor {
        name: "create_ip_pool",
        description: "Create an IP pool.",
        method: Post,
        path: "/v3/ips/pools",
        params: &[P::body("name", Str, "Name of the pool.").required()],
    },
    EndpointDescriptor {
        name: "get_ip_pool",
        description: "Retrieve the IPs in a pool.",
        method: Get,
        path: "/v3/ips/pools/{pool_name}",
        params: &[P::path("pool_name", "Name of the pool.")],
    },
    EndpointDescriptor {
        name: "update_ip_pool",
        description: "Rename an IP pool.",
        method: Put,
        path: "/v3/ips/pools/{pool_name}",
        params: &[
            P::path("pool_name", "Current name of the pool."),
            P::body("name", Str, "New name of the pool.").required(),
        ],
    },
    EndpointDescriptor {
        name: "delete_ip_pool",
        description: "Delete an IP pool.",
        method: Delete,
        path: "/v3/ips/pools/{pool_name}",
        params: &[P::path("pool_name", "Name of the pool.")],
    },
    EndpointDescriptor {
        name: "add_ip_to_pool",
        description: "Add an IP address to a pool.",
        method: Post,
        path: "/v3/ips/pools/{pool_name}/ips",
        params: &[
            P::path("pool_name", "Name of the pool."),
            P::body("ip", Str, "IP address to add.").required(),
        ],
    },
    EndpointDescriptor {
        name: "remove_ip_from_pool",
        description: "Remove an IP address from a pool.",
        method: Delete,
        path: "/v3/ips/pools/{pool_name}/ips/{ip}",
        params: &[
            P::path("pool_name", "Name of the pool."),
            P::path("ip", "IP address to remove."),
        ],
    },
    // -- IP warmup ------------------------------------------------------------
    EndpointDescriptor {
        name: "list_warmup_ips",
        description: "Retrieve IPs currently in warmup.",
        method: Get,
        path: "/v3/ips/warmup",
        params: &[],
    },
    EndpointDescriptor {
        name: "start_ip_warmup",
        description: "Put an IP address into warmup.",
        method: Post,
        path: "/v3/ips/warmup",
        params: &[P::body("ip", Str, "IP address to warm up.").required()],
    },
    EndpointDescriptor {
        name: "get_ip_warmup_status",
        description: "Retrieve the warmup status of an IP address.",
        method: Get,
        path: "/v3/ips/warmup/{ip_address}",
        params: &[P::path("ip_address", "The IP address.")],
    },
    EndpointDescriptor {
        name: "stop_ip_warmup",
        description: "Take an IP address out of warmup.",
        method: Delete,
        path: "/v3/ips/warmup/{ip_address}",
        params: &[P::path("ip_address", "The IP address.")],
    },
    // -- IP access management -------------------------------------------------
    EndpointDescriptor {
        name: "list_access_activity",
        description: "Retrieve recent login attempts to the account.",
        method: Get,
        path: "/v3/access_settings/activity",
        params: &[P::query("limit", Integer, "Number of attempts to return.")],
    },
    EndpointDescriptor {
        name: "list_allowed_ips",
        description: "Retrieve IPs allowed to access the account.",
        method: Get,
        path: "/v3/access_settings/whitelist",
        params: &[],
    },
    EndpointDescriptor {
        name: "add_allowed_ips",
        description: "Allow IP addresses to access the account.",
        method: Post,
        path: "/v3/access_settings/whitelist",
        params: &[P::body("ips", Array, "Entries as [{ip}].").required()],
    },
    EndpointDescriptor {
        name: "delete_allowed_ips",
        description: "Remove several allowed IP rules.",
        method: Delete,
        path: "/v3/access_settings/whitelist",
        params: &[P::body("ids", Array, "Rule IDs to remove.")],
    },
    EndpointDescriptor {
        name: "get_allowed_ip",
        description: "Retrieve one allowed IP rule.",
        method: Get,
        path: "/v3/access_settings/whitelist/{rule_id}",
        params: &[P::path("rule_id", "ID of the rule.")],
    },
    EndpointDescriptor {
        name: "delete_allowed_ip",
        description: "Remove one allowed IP rule.",
        method: Delete,
        path: "/v3/access_settings/whitelist/{rule_id}",
        params: &[P::path("rule_id", "ID of the rule.")],
    },
];
