//! Dictate command: speak a search query

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use tracing::{debug, warn};

use glyphscout::config::Config;
use glyphscout::grid::GridEvent;
use glyphscout::voice::{
    CuePlayer, DictationSlot, SilentCuePlayer, SoxCuePlayer, SoxWhisperEngine,
    VoiceDictationController, VoiceEvent,
};

use super::{grid_from_config, print_page};

const TICK: Duration = Duration::from_millis(100);

/// Listen until Ctrl+C (or the end of a single-shot session), searching as
/// the transcript grows
pub async fn dictate_command(config: &Config, continuous: bool) -> Result<()> {
    if !config.voice.enabled {
        bail!("Voice dictation is disabled. Set `enabled = true` under [voice] in the config.");
    }

    let mut options = config.voice.session_options();
    options.continuous |= continuous;

    let engine = Arc::new(SoxWhisperEngine::from_settings(&config.voice));
    let cues: Arc<dyn CuePlayer> = if config.voice.cues {
        Arc::new(SoxCuePlayer::default())
    } else {
        Arc::new(SilentCuePlayer)
    };
    let mut voice = VoiceDictationController::new(engine, cues, DictationSlot::new(), options);
    let mut grid = grid_from_config(config);

    voice.start().context("Cannot start dictation")?;
    println!("Listening... press Ctrl+C to stop.");

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    let mut ticker = tokio::time::interval(TICK);

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = &mut ctrl_c => {
                voice.stop();
                break;
            }
        }

        for event in voice.apply_to(&mut grid) {
            match event {
                VoiceEvent::Transcript { text } => println!("> {}", text),
                VoiceEvent::Failed { message } => eprintln!("Dictation failed: {}", message),
                VoiceEvent::Stopped | VoiceEvent::Preempted => println!("Stopped listening."),
                VoiceEvent::Started { session } | VoiceEvent::Restarted { session } => {
                    debug!(session, "listening");
                }
            }
        }

        grid.poll(Instant::now());
        for event in grid.drain() {
            match event {
                GridEvent::Loaded { .. } => println!("  {}", grid.status_line()),
                GridEvent::Failed { error, .. } => warn!("Search failed: {}", error),
                GridEvent::Discarded { .. } => {}
            }
        }

        if !voice.is_listening() {
            break;
        }
    }

    if grid.state().text.is_empty() {
        return Ok(());
    }

    grid.flush();
    grid.settle_latest().await;
    if let Some(err) = grid.last_error() {
        bail!("Search failed: {}", err);
    }

    println!("\nQuery: {}", grid.state().text);
    println!("{}\n", grid.status_line());
    print_page(grid.displayed());
    Ok(())
}
