use crate::types::EndpointDescriptor;
use crate::types::HttpMethod::Get;
use crate::types::ParamKind::{Array, Integer, String as Str};
use crate::types::ParamSpec as P;

pub(super) const ENDPOINTS: &[EndpointDescriptor] = &[
    EndpointDescriptor {
        name: "get_global_stats",
        description: "Retrieve global email statistics.",
        method: Get,
        path: "/v3/stats",
        params: &[
            P::query("start_date", Str, "Start date, YYYY-MM-DD.").required(),
            P::query("end_date", Str, "End date, YYYY-MM-DD."),
            P::query("aggregated_by", Str, "day, week or month."),
            P::query("limit", Integer, "Number of results to return."),
            P::query("offset", Integer, "Number of results to skip."),
        ],
    },
    EndpointDescriptor {
        name: "list_categories",
        description: "Retrieve categories used on the account.",
        method: Get,
        path: "/v3/categories",
        params: &[
            P::query("limit", Integer, "Number of categories to return."),
            P::query("category", Str, "Filter by category prefix."),
            P::query("offset", Integer, "Number of categories to skip."),
        ],
    },
    EndpointDescriptor {
        name: "get_category_stats",
        description: "Retrieve email statistics for up to ten categories.",
        method: Get,
        path: "/v3/categories/stats",
        params: &[
            P::query("start_date", Str, "Start date, YYYY-MM-DD.").required(),
            P::query("categories", Array, "Categories to report on.").required(),
            P::query("end_date", Str, "End date, YYYY-MM-DD."),
            P::query("aggregated_by", Str, "day, week or month."),
        ],
    },
    EndpointDescriptor {
        name: "get_category_stats_sums",
        description: "Retrieve totals of each statistic per category.",
        method: Get,
        path: "/v3/categories/stats/sums",
        params: &[
            P::query("start_date", Str, "Start date, YYYY-MM-DD.").required(),
            P::query("end_date", Str, "End date, YYYY-MM-DD."),
            P::query("sort_by_metric", Str, "Metric to sort by."),
            P::query("sort_by_direction", Str, "asc or desc."),
            P::query("limit", Integer, "Number of results to return."),
            P::query("offset", Integer, "Number of results to skip."),
            P::query("aggregated_by", Str, "day, week or month."),
        ],
    },
    EndpointDescriptor {
        name: "get_mailbox_provider_stats",
        description: "Retrieve statistics broken down by mailbox provider.",
        method: Get,
        path: "/v3/mailbox_providers/stats",
        params: &[
            P::query("start_date", Str, "Start date, YYYY-MM-DD.").required(),
            P::query("mailbox_providers", Str, "Providers to include."),
            P::query("end_date", Str, "End date, YYYY-MM-DD."),
            P::query("aggregated_by", Str, "day, week or month."),
            P::query("limit", Integer, "Number of results to return."),
            P::query("offset", Integer, "Number of results to skip."),
        ],
    },
    EndpointDescriptor {
        name: "get_browser_stats",
        description: "Retrieve click statistics broken down by browser.",
        method: Get,
        path: "/v3/browsers/stats",
        params: &[
            P::query("start_date", Str, "Start date, YYYY-MM-DD.").required(),
            P::query("browsers", Str, "Browsers to include."),
            P::query("end_date", Str, "End date, YYYY-MM-DD."),
            P::query("aggregated_by", Str, "day, week or month."),
            P::query("limit", Integer, "Number of results to return."),
            P::query("offset", Integer, "Number of results to skip."),
        ],
    },
    EndpointDescriptor {
        name: "get_device_stats",
        description: "Retrieve open statistics broken down by device type.",
        method: Get,
        path: "/v3/devices/stats",
        params: &[
            P::query("start_date", Str, "Start date, YYYY-MM-DD.").required(),
            P::query("end_date", Str, "End date, YYYY-MM-DD."),
            P::query("aggregated_by", Str, "day, week or month."),
            P::query("limit", Integer, "Number of results to return."),
            P::query("offset", Integer, "Number of results to skip."),
        ],
    },
    EndpointDescriptor {
        name: "get_client_stats",
        description: "Retrieve open statistics broken down by email client.",
        method: Get,
        path: "/v3/clients/stats",
        params: &[
            P::query("start_date", Str, "Start date, YYYY-MM-DD.").required(),
            P::query("end_date", Str, "End date, YYYY-MM-DD."),
            P::query("aggregated_by", Str, "day, week or month."),
        ],
    },
    EndpointDescriptor {
        name: "get_geo_stats",
        description: "Retrieve statistics broken down by country and state.",
        method: Get,
        path: "/v3/geo/stats",
        params: &[
            P::query("start_date", Str, "Start date, YYYY-MM-DD.").required(),
            P::query("country", Str, "US or CA."),
            P::query("end_date", Str, "End date, YYYY-MM-DD."),
            P::query("aggregated_by", Str, "day, week or month."),
            P::query("limit", Integer, "Number of results to return."),
            P::query("offset", Integer, "Number of results to skip."),
        ],
    },
    EndpointDescriptor {
        name: "get_single_send_stats",
        description: "Retrieve statistics for all single sends.",
        method: Get,
        path: "/v3/marketing/stats/singlesends",
        params: &[
            P::query("singlesend_ids", Array, "Only these single sends."),
            P::query("page_size", Integer, "Results per page."),
            P::query("page_token", Str, "Token of the page to return."),
        ],
    },
    EndpointDescriptor {
        name: "get_single_send_stats_by_id",
        description: "Retrieve statistics for one single send.",
        method: Get,
        path: "/v3/marketing/stats/singlesends/{id}",
        params: &[
            P::path("id", "ID of the single send."),
            P::query("aggregated_by", Str, "day or total."),
            P::query("start_date", Str, "Start date, YYYY-MM-DD."),
            P::query("end_date", Str, "End date, YYYY-MM-DD."),
            P::query("timezone", Str, "IANA time zone for dates."),
            P::query("group_by", Array, "ab_variation and/or ab_phase."),
        ],
    },
    EndpointDescriptor {
        name: "get_automation_stats",
        description: "Retrieve statistics for all automations.",
        method: Get,
        path: "/v3/marketing/stats/automations",
        params: &[
            P::query("automation_ids", Array, "Only these automations."),
            P::query("page_size", Integer, "Results per page."),
            P::query("page_token", Str, "Token of the page to return."),
        ],
    },
];
