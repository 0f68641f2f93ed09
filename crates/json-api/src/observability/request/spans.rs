//! HTTP span and metric route naming.

const FUNCTIONS_PREFIX: &str = "/functions/v1/";

const FUNCTIONS: [&str; 5] = [
    "create-match",
    "get-match",
    "add-participant",
    "update-participant",
    "update-match-notes",
];

const STATIC_ROUTES: [&str; 3] = ["/healthcheck", "/config.js", "/metrics"];

#[derive(Debug, Clone)]
pub(super) struct RequestSpanName {
    pub(super) route: &'static str,
    pub(super) function: Option<&'static str>,
    pub(super) otel_span_name: String,
}

/// Name a request by the route it hit.
///
/// Unknown paths collapse into one label so scanners cannot blow up metric
/// cardinality.
pub(super) fn request_span_name(method: &str, path: &str) -> RequestSpanName {
    let path = path.trim_end_matches('/');

    let function = path
        .strip_prefix(FUNCTIONS_PREFIX)
        .and_then(|name| FUNCTIONS.into_iter().find(|known| *known == name));

    let route = match function {
        Some(name) => function_route(name),
        None => STATIC_ROUTES
            .into_iter()
            .find(|known| *known == path)
            .unwrap_or("unmatched"),
    };

    RequestSpanName {
        route,
        function,
        otel_span_name: format!("{method} {route}"),
    }
}

fn function_route(name: &str) -> &'static str {
    match name {
        "create-match" => "/functions/v1/create-match",
        "get-match" => "/functions/v1/get-match",
        "add-participant" => "/functions/v1/add-participant",
        "update-participant" => "/functions/v1/update-participant",
        _ => "/functions/v1/update-match-notes",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn functions_are_named_by_route() {
        let names = request_span_name("POST", "/functions/v1/add-participant/");

        assert_eq!(names.route, "/functions/v1/add-participant");
        assert_eq!(names.function, Some("add-participant"));
        assert_eq!(names.otel_span_name, "POST /functions/v1/add-participant");
    }

    #[test]
    fn every_function_has_its_own_route() {
        for name in FUNCTIONS {
            let names = request_span_name("OPTIONS", &format!("{FUNCTIONS_PREFIX}{name}"));

            assert_eq!(names.route, format!("{FUNCTIONS_PREFIX}{name}"));
        }
    }

    #[test]
    fn static_routes_keep_their_path() {
        assert_eq!(request_span_name("GET", "/healthcheck").route, "/healthcheck");
        assert_eq!(request_span_name("GET", "/config.js").route, "/config.js");
    }

    #[test]
    fn unknown_paths_collapse() {
        for path in ["/", "/wp-admin", "/functions/v1/hello", "/functions/v1/"] {
            let names = request_span_name("GET", path);

            assert_eq!(names.route, "unmatched", "{path}");
            assert_eq!(names.function, None, "{path}");
        }
    }
}
