use crate::api::client::WarzoneClient;
use crate::api::models::{LastGamesResponse, Match};
use crate::api::request::StatsRequest;
use crate::api::transport::Transport;
use crate::error::AppError;
use tracing::debug;

/// Matches returned per page by the details endpoint.
pub const PAGE_SIZE: usize = 20;

/// Start time of the oldest match in a page. Pages are usually newest-first, but the
/// scan does not rely on it. Matches without a usable start time are skipped.
pub fn oldest_start(matches: &[Match]) -> Option<f64> {
    matches
        .iter()
        .map(|m| m.utc_start_seconds)
        .filter(|secs| secs.is_finite() && *secs >= 1.0)
        .min_by(|a, b| a.total_cmp(b))
}

/// The details endpoint takes milliseconds; match start times are whole seconds.
/// `end/0` means "most recent", so a cursor at or below zero is refused.
pub fn end_cursor(start_seconds: f64) -> Result<String, AppError> {
    if !start_seconds.is_finite() || start_seconds < 1.0 {
        return Err(AppError::DecodeError(format!(
            "match start time {} cannot be used as a page cursor",
            start_seconds
        )));
    }
    Ok(format!("{}000", start_seconds.trunc() as u64))
}

/// Walk `cycles` pages back through a player's history and return them as one response.
///
/// Page 0 is the plain recent-matches query; every later page asks for matches that
/// started before the oldest match of the page before it. Matches keep fetch order and
/// the summary comes from page 0. Any failure aborts the walk and nothing is returned.
/// `on_page` sees each page as it lands.
pub fn fetch_cycles<T, F>(
    client: &WarzoneClient<T>,
    request: &StatsRequest,
    cycles: usize,
    mut on_page: F,
) -> Result<LastGamesResponse, AppError>
where
    T: Transport,
    F: FnMut(usize, &[Match]),
{
    if cycles == 0 {
        return Err(AppError::InvalidArgument(
            "cycles must be at least 1".to_string(),
        ));
    }

    let mut combined = client.get_last_games(request)?;
    on_page(0, &combined.data.matches);
    let mut cursor = oldest_start(&combined.data.matches);

    for cycle in 1..cycles {
        let Some(start) = cursor else {
            debug!(cycle, "previous page had no dated matches, stopping early");
            break;
        };

        let end = end_cursor(start)?;
        debug!(cycle, end = %end, "fetching older page");
        let page = client.get_last_games_before(request, &end)?;
        on_page(cycle, &page.data.matches);

        cursor = oldest_start(&page.data.matches);
        combined.data.matches.extend(page.data.matches);
    }

    Ok(combined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::tests::test_config;
    use crate::api::transport::testing::ScriptedTransport;
    use serde_json::json;

    /// A page of `count` matches, newest first, starting at `newest` and one minute apart.
    fn page(newest: u64, count: usize, id_prefix: &str) -> String {
        let matches: Vec<_> = (0..count)
            .map(|i| {
                json!({
                    "utcStartSeconds": newest - (i as u64) * 60,
                    "mode": "br_brquads",
                    "gametype": "br",
                    "matchID": format!("{}-{}", id_prefix, i),
                    "playerStats": {"kills": 1, "deaths": 1}
                })
            })
            .collect();
        json!({
            "status": "success",
            "data": {"summary": {"all": {"kills": count}}, "matches": matches}
        })
        .to_string()
    }

    fn request() -> StatsRequest {
        StatsRequest::last_games("inbargab#6797419", "uno")
    }

    #[test]
    fn single_cycle_returns_first_page_untouched() {
        let transport = ScriptedTransport::new().reply(page(1_654_000_000, PAGE_SIZE, "a"));
        let client = WarzoneClient::with_transport(test_config(), transport);

        let result = fetch_cycles(&client, &request(), 1, |_, _| {}).unwrap();

        assert_eq!(result.data.matches.len(), PAGE_SIZE);
        assert_eq!(result.data.matches[0].match_id, "a-0");
        assert_eq!(result.data.matches[19].match_id, "a-19");
        assert_eq!(result.username, "inbargab#6797419");
    }

    #[test]
    fn three_cycles_concatenate_in_fetch_order() {
        let transport = ScriptedTransport::new()
            .reply(page(1_654_000_000, PAGE_SIZE, "a"))
            .reply(page(1_653_990_000, PAGE_SIZE, "b"))
            .reply(page(1_653_980_000, PAGE_SIZE, "c"));
        let client = WarzoneClient::with_transport(test_config(), transport);

        let mut seen = Vec::new();
        let result = fetch_cycles(&client, &request(), 3, |cycle, matches| {
            seen.push((cycle, matches.len()))
        })
        .unwrap();

        assert_eq!(result.data.matches.len(), 3 * PAGE_SIZE);
        assert_eq!(result.data.matches[0].match_id, "a-0");
        assert_eq!(result.data.matches[20].match_id, "b-0");
        assert_eq!(result.data.matches[59].match_id, "c-19");
        assert_eq!(result.data.summary.all.kills, 20.0);
        assert_eq!(seen, vec![(0, 20), (1, 20), (2, 20)]);
    }

    #[test]
    fn cursor_is_oldest_start_in_milliseconds() {
        let transport = ScriptedTransport::new()
            .reply(page(1_654_000_000, PAGE_SIZE, "a"))
            .reply(page(1_653_990_000, PAGE_SIZE, "b"));
        let client = WarzoneClient::with_transport(test_config(), transport);

        fetch_cycles(&client, &request(), 2, |_, _| {}).unwrap();

        let urls = client_urls(&client);
        assert!(urls[0].ends_with("/gamer/inbargab%236797419/matches/wz/start/0/end/0/details"));
        // oldest of page a: 1_654_000_000 - 19 * 60
        assert!(urls[1].ends_with("/matches/wz/start/0/end/1653998860000/details"));
    }

    #[test]
    fn cursor_does_not_assume_order() {
        let first = json!({
            "status": "success",
            "data": {"matches": [
                {"utcStartSeconds": 300, "matchID": "x"},
                {"utcStartSeconds": 100, "matchID": "oldest"},
                {"utcStartSeconds": 200, "matchID": "y"}
            ]}
        })
        .to_string();
        let transport = ScriptedTransport::new().reply(first).reply(page(99, 1, "b"));
        let client = WarzoneClient::with_transport(test_config(), transport);

        fetch_cycles(&client, &request(), 2, |_, _| {}).unwrap();

        assert!(client_urls(&client)[1].contains("/end/100000/"));
    }

    #[test]
    fn failure_mid_walk_discards_everything() {
        let transport = ScriptedTransport::new()
            .reply(page(1_654_000_000, PAGE_SIZE, "a"))
            .fail(AppError::TransportError("connection reset".into()));
        let client = WarzoneClient::with_transport(test_config(), transport);

        let err = fetch_cycles(&client, &request(), 3, |_, _| {}).unwrap_err();

        assert!(matches!(err, AppError::TransportError(_)));
        assert_eq!(client_urls(&client).len(), 2);
    }

    #[test]
    fn rejected_later_page_fails_the_walk() {
        let transport = ScriptedTransport::new()
            .reply(page(1_654_000_000, PAGE_SIZE, "a"))
            .reply(r#"{"status": "error", "data": {"message": "Not permitted"}}"#);
        let client = WarzoneClient::with_transport(test_config(), transport);

        let err = fetch_cycles(&client, &request(), 2, |_, _| {}).unwrap_err();
        assert!(matches!(err, AppError::UpstreamRejected(_)));
    }

    #[test]
    fn first_page_failure_fails_immediately() {
        let transport = ScriptedTransport::new().reply("not json");
        let client = WarzoneClient::with_transport(test_config(), transport);

        let err = fetch_cycles(&client, &request(), 5, |_, _| {}).unwrap_err();
        assert!(matches!(err, AppError::DecodeError(_)));
        assert_eq!(client_urls(&client).len(), 1);
    }

    #[test]
    fn empty_page_ends_the_walk() {
        let transport = ScriptedTransport::new()
            .reply(page(1_654_000_000, 5, "a"))
            .reply(page(0, 0, "b"));
        let client = WarzoneClient::with_transport(test_config(), transport);

        let result = fetch_cycles(&client, &request(), 4, |_, _| {}).unwrap();
        assert_eq!(result.data.matches.len(), 5);
        assert_eq!(client_urls(&client).len(), 2);
    }

    #[test]
    fn zero_cycles_is_invalid() {
        let client = WarzoneClient::with_transport(test_config(), ScriptedTransport::new());
        let err = fetch_cycles(&client, &request(), 0, |_, _| {}).unwrap_err();
        assert!(matches!(err, AppError::InvalidArgument(_)));
    }

    #[test]
    fn oldest_start_of_empty_page() {
        assert_eq!(oldest_start(&[]), None);
    }

    #[test]
    fn end_cursor_appends_milliseconds() {
        assert_eq!(end_cursor(1_654_876_543.0).unwrap(), "1654876543000");
        assert_eq!(end_cursor(1_654_876_543.9).unwrap(), "1654876543000");
    }

    #[test]
    fn end_cursor_refuses_unusable_times() {
        for secs in [0.0, -5.0, 0.5, f64::NAN, f64::INFINITY] {
            assert!(matches!(end_cursor(secs), Err(AppError::DecodeError(_))));
        }
    }

    #[test]
    fn undated_matches_are_skipped_by_the_scan() {
        let matches = vec![
            Match {
                utc_start_seconds: 1_654_000_000.0,
                ..Default::default()
            },
            Match::default(),
            Match {
                utc_start_seconds: f64::NAN,
                ..Default::default()
            },
        ];
        assert_eq!(oldest_start(&matches), Some(1_654_000_000.0));
        assert_eq!(oldest_start(&[Match::default()]), None);
    }

    #[test]
    fn match_without_start_time_does_not_restart_the_walk() {
        let first = json!({
            "status": "success",
            "data": {"matches": [
                {"utcStartSeconds": 1_654_000_000u64, "matchID": "a"},
                {"matchID": "no-timestamp"}
            ]}
        })
        .to_string();
        let transport = ScriptedTransport::new().reply(first).reply(page(1_653_999_000, 1, "b"));
        let client = WarzoneClient::with_transport(test_config(), transport);

        let result = fetch_cycles(&client, &request(), 2, |_, _| {}).unwrap();

        let urls = client_urls(&client);
        assert!(urls[1].ends_with("/matches/wz/start/0/end/1654000000000/details"));
        let ids: Vec<_> = result.data.matches.iter().map(|m| m.match_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "no-timestamp", "b-0"]);
    }

    #[test]
    fn page_with_only_undated_matches_ends_the_walk() {
        let first = json!({
            "status": "success",
            "data": {"matches": [{"matchID": "x"}, {"matchID": "y"}]}
        })
        .to_string();
        let transport = ScriptedTransport::new().reply(first);
        let client = WarzoneClient::with_transport(test_config(), transport);

        let result = fetch_cycles(&client, &request(), 3, |_, _| {}).unwrap();
        assert_eq!(result.data.matches.len(), 2);
        assert_eq!(client_urls(&client).len(), 1);
    }

    fn client_urls(client: &WarzoneClient<ScriptedTransport>) -> Vec<String> {
        client.transport().urls()
    }
}
