//! Timed terminal playback of a replay schedule

use std::io::{self, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use roadpath_core::error::{Result, RoadpathError};
use roadpath_core::format::PATH_SEPARATOR;
use roadpath_core::replay::Frame;

fn frame_line(frame: &Frame) -> String {
    match frame {
        Frame::Visit(node) => format!("[visit] {}", node),
        Frame::PathEdge(a, b) => format!("[path]  {}{}{}", a, PATH_SEPARATOR, b),
        Frame::Finish => "[done]".to_string(),
    }
}

/// Write frames to `out`, pausing `delay` after each timed frame.
///
/// Stops early once `interrupted` is set. Returns how many frames were
/// shown.
pub fn play_to<W: Write>(
    frames: &[Frame],
    delay: Duration,
    out: &mut W,
    interrupted: &AtomicBool,
) -> io::Result<usize> {
    let mut shown = 0;
    for frame in frames {
        if interrupted.load(Ordering::SeqCst) {
            writeln!(out, "[stopped]")?;
            break;
        }
        writeln!(out, "{}", frame_line(frame))?;
        out.flush()?;
        shown += 1;
        if frame.is_timed() && !delay.is_zero() {
            thread::sleep(delay);
        }
    }
    Ok(shown)
}

/// Play frames on stdout; Ctrl-C stops the replay without failing
pub fn play(frames: &[Frame], delay: Duration) -> Result<()> {
    let interrupted = Arc::new(AtomicBool::new(false));
    let interrupted_clone = Arc::clone(&interrupted);

    // A handler may already be installed; playback then runs to completion
    let _ = ctrlc::set_handler(move || {
        interrupted_clone.store(true, Ordering::SeqCst);
    });

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let shown = play_to(frames, delay, &mut out, &interrupted)
        .map_err(|e| RoadpathError::io_operation("write", "replay", e))?;
    tracing::debug!(shown, total = frames.len(), "replay finished");
    Ok(())
}
