/// MoodTune - mood-driven playlist browser and player
use anyhow::Context;
use clap::{Parser, Subcommand};
use mood_core::{Mood, TrackId};
use mood_player::{
    config::AppConfig, detect_mood, driver::play_through, render, transport::SimulatedTransport,
};
use mood_playback::{derive_queue, PlayerController};
use std::{path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "moodtune")]
#[command(about = "Browse and play playlists that match your mood", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "MOODTUNE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List playlists, optionally filtered by mood
    Playlists {
        /// Mood label (happy, sad, chill, energetic, angry, anxious)
        #[arg(short, long)]
        mood: Option<String>,
    },
    /// Detect a mood and show matching playlists
    Detect {
        /// Still image to classify instead of a camera frame
        #[arg(short, long)]
        image: Option<PathBuf>,
    },
    /// Play a track and the rest of its playlist
    Play {
        /// Track id
        track_id: String,
        /// Progress updates per track
        #[arg(short, long, default_value_t = 4)]
        ticks: u32,
    },
    /// Show a track and what would play after it
    Info {
        /// Track id
        track_id: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "mood_player=info,mood_playback=info,mood_detect=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Playlists { mood } => list_playlists(&config, mood.as_deref())?,
        Commands::Detect { image } => detect(&config, image).await?,
        Commands::Play { track_id, ticks } => play(&config, &track_id, ticks)?,
        Commands::Info { track_id } => info(&config, &track_id)?,
    }

    Ok(())
}

fn list_playlists(config: &AppConfig, mood: Option<&str>) -> anyhow::Result<()> {
    let catalog = config.load_catalog()?;

    let (title, visible) = match mood {
        Some(label) => {
            let title = match Mood::parse(label) {
                Ok(mood) => mood_core::browse_title(Some(mood)),
                Err(_) => {
                    tracing::warn!("Unknown mood {:?}, showing all playlists", label);
                    mood_core::browse_title(None)
                }
            };
            (title, mood_core::filter_by_mood(&catalog, label))
        }
        None => (
            mood_core::browse_title(None),
            catalog.playlists().iter().collect(),
        ),
    };

    print!("{}", render::playlists(&title, &visible));
    Ok(())
}

async fn detect(config: &AppConfig, image: Option<PathBuf>) -> anyhow::Result<()> {
    let catalog = Arc::new(config.load_catalog()?);
    let mut player = PlayerController::new(catalog, config.player.clone());

    println!("Analyzing your mood...");
    let mood = detect_mood(&config.detector, image).await;
    player.set_mood(mood);

    println!("You seem {}.", mood.as_str());
    println!();
    print!(
        "{}",
        render::playlists(&player.browse_title(), &player.visible_playlists())
    );
    Ok(())
}

fn play(config: &AppConfig, track_id: &str, ticks: u32) -> anyhow::Result<()> {
    let catalog = Arc::new(config.load_catalog()?);
    let mut player = PlayerController::new(catalog, config.player.clone());
    let transport = SimulatedTransport::new();
    player.set_transport(Box::new(transport.clone()));

    player
        .select_track(&TrackId::new(track_id))
        .with_context(|| format!("Cannot play {track_id}"))?;

    for track in play_through(&mut player, ticks) {
        println!(
            "Played {} - {} [{}] ({})",
            track.title, track.artist, track.id, track.position
        );
    }

    let state = transport.state();
    tracing::info!(tracks = state.loaded.len(), "Playback finished");
    Ok(())
}

fn info(config: &AppConfig, track_id: &str) -> anyhow::Result<()> {
    let catalog = config.load_catalog()?;
    let id = TrackId::new(track_id);
    let track = catalog
        .track(&id)
        .with_context(|| format!("Unknown track: {track_id}"))?;

    let queue: Vec<_> = derive_queue(&catalog, &id).into_iter().collect();
    print!("{}", render::track_info(&catalog, track, &queue));
    Ok(())
}
