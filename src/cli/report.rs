use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config::{self, Endpoints, PLAYLIST_ID},
    error, info,
    report::{self as aggregate, Report},
    spotify::{SpotifyClient, artists::AuthorizedArtists},
    types::{ArtistTableRow, TrackTableRow},
    utils, warning,
};

/// Runs one full report against the fixed playlist.
///
/// Credentials, token acquisition and playlist pagination are fatal: the
/// first failure prints one diagnostic line and exits. Failed artist lookups
/// are printed as warnings after the report.
pub async fn report(max_pages: Option<usize>) {
    let credentials = match config::load_credentials() {
        Ok(c) => c,
        Err(e) => error!("{}", e),
    };

    let client = SpotifyClient::new(Endpoints::from_env());

    let token = match client.acquire_token(&credentials).await {
        Ok(t) => t,
        Err(e) => error!("Failed to acquire access token: {}", e),
    };

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching playlist tracks...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let fetched = match client
        .fetch_all_tracks_with(PLAYLIST_ID, &token, max_pages, |fetched| {
            pb.set_message(format!(
                "Fetched {} tracks from {} pages...",
                fetched.tracks.len(),
                fetched.pages
            ));
        })
        .await
    {
        Ok(f) => f,
        Err(e) => {
            pb.finish_and_clear();
            error!("Failed to fetch playlist tracks: {}", e);
        }
    };

    pb.set_message("Fetching artists...");
    let artists = AuthorizedArtists::new(&client, &token);
    let report = aggregate::build_report(&fetched.tracks, &artists).await;
    pb.finish_and_clear();

    render_report(&report);
}

/// Prints both tables to stdout and every artist warning to stderr.
pub fn render_report(report: &Report) {
    info!("Top {} longest tracks", report.top_tracks.len());
    let track_rows: Vec<TrackTableRow> = report
        .top_tracks
        .iter()
        .map(|t| TrackTableRow {
            name: t.name.clone(),
            duration_ms: t.duration_ms,
            length: utils::format_duration(t.duration_ms),
        })
        .collect();
    println!("{}", Table::new(track_rows));

    info!("Artists by followers");
    let artist_rows: Vec<ArtistTableRow> = report
        .artists
        .iter()
        .map(|a| ArtistTableRow {
            name: a.name.clone(),
            followers: a.followers,
        })
        .collect();
    println!("{}", Table::new(artist_rows));

    for w in &report.warnings {
        warning!("{}", w);
    }
}
