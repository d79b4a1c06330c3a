/// Joins a base URL and an absolute resource path, ignoring a trailing `/` on the base.
pub fn join_url(base_url: &str, resource: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        resource.trim_start_matches('/')
    )
}
