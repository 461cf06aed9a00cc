use reqwest;

/// Get standard user agent string
pub fn get_user_agent() -> &'static str {
    concat!("DeckFetch/", env!("CARGO_PKG_VERSION"))
}

/// Build the HTTP client shared by every request of a run.
///
/// No timeout is set: a stalled server stalls the run.
pub fn build_client() -> reqwest::Result<reqwest::Client> {
    reqwest::Client::builder()
        .user_agent(get_user_agent())
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_agent_names_the_tool_and_version() {
        let agent = get_user_agent();
        assert!(agent.starts_with("DeckFetch/"));
        assert!(agent.ends_with(env!("CARGO_PKG_VERSION")));
    }
}
