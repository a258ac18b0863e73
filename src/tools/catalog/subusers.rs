use crate::types::EndpointDescriptor;
use crate::types::HttpMethod::{Delete, Get, Patch, Post};
use crate::types::ParamKind::{Array, Boolean, Integer, String as Str};
use crate::types::ParamSpec as P;

pub(super) const ENDPOINTS: &[EndpointDescriptor] = &[
    EndpointDescriptor {
        name: "list_subusers",
        description: "Retrieve subusers of the parent account.",
        method: Get,
        path: "/v3/subusers",
        params: &[
            P::query("username", Str, "Filter by username."),
            P::query("limit", Integer, "Number of subusers to return."),
            P::query("offset", Integer, "Number of subusers to skip."),
        ],
    },
    EndpointDescriptor {
        name: "create_subuser",
        description: "Create a new subuser.",
        method: Post,
        path: "/v3/subusers",
        params: &[
            P::body("username", Str, "Username of the subuser.").required(),
            P::body("email", Str, "Contact email of the subuser.").required(),
            P::body("password", Str, "Password of the subuser.").required(),
            P::body("ips", Array, "IP addresses assigned to the subuser.").required(),
        ],
    },
    EndpointDescriptor {
        name: "update_subuser",
        description: "Enable or disable a subuser.",
        method: Patch,
        path: "/v3/subusers/{subuser_name}",
        params: &[
            P::path("subuser_name", "Username of the subuser."),
            P::body("disabled", Boolean, "Whether the subuser is disabled.").required(),
        ],
    },
    EndpointDescriptor {
        name: "delete_subuser",
        description: "Permanently delete a subuser.",
        method: Delete,
        path: "/v3/subusers/{subuser_name}",
        params: &[P::path("subuser_name", "Username of the subuser.")],
    },
    EndpointDescriptor {
        name: "get_subuser_reputations",
        description: "Retrieve sender reputations for subusers.",
        method: Get,
        path: "/v3/subusers/reputations",
        params: &[P::query("usernames", Array, "Subusers to look up.")],
    },
    EndpointDescriptor {
        name: "get_subuser_monthly_stats",
        description: "Retrieve monthly email statistics for one subuser.",
        method: Get,
        path: "/v3/subusers/{subuser_name}/stats/monthly",
        params: &[
            P::path("subuser_name", "Username of the subuser."),
            P::query("date", Str, "Month to report on, YYYY-MM-DD.").required(),
            P::query("sort_by_metric", Str, "Metric to sort by."),
            P::query("sort_by_direction", Str, "asc or desc."),
            P::query("limit", Integer, "Number of results to return."),
            P::query("offset", Integer, "Number of results to skip."),
        ],
    },
    EndpointDescriptor {
        name: "get_subuser_stats",
        description: "Retrieve email statistics for the given subusers.",
        method: Get,
        path: "/v3/subusers/stats",
        params: &[
            P::query("subusers", Array, "Subusers to include.").required(),
            P::query("start_date", Str, "Start date, YYYY-MM-DD.").required(),
            P::query("end_date", Str, "End date, YYYY-MM-DD."),
            P::query("aggregated_by", Str, "day, week or month."),
            P::query("limit", Integer, "Number of results to return."),
            P::query("offset", Integer, "Number of results to skip."),
        ],
    },
    EndpointDescriptor {
        name: "get_subuser_stats_sums",
        description: "Retrieve totals of each email statistic per subuser.",
        method: Get,
        path: "/v3/subusers/stats/sums",
        params: &[
            P::query("start_date", Str, "Start date, YYYY-MM-DD.").required(),
            P::query("end_date", Str, "End date, YYYY-MM-DD."),
            P::query("sort_by_metric", Str, "Metric to sort by."),
            P::query("sort_by_direction", Str, "asc or desc."),
            P::query("aggregated_by", Str, "day, week or month."),
            P::query("limit", Integer, "Number of results to return."),
            P::query("offset", Integer, "Number of results to skip."),
        ],
    },
];
