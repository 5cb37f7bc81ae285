//! Frame loop and shutdown handling

use std::io::BufRead;
use std::path::Path;
use std::process::ExitCode;

use vidcfg_core::{CommandSource, FatalError, Host};

/// Run frames until the input ends
///
/// Each input line is executed as console text, then one frame is run.
/// The video config is saved on a clean exit only.
pub fn run<R: BufRead>(
    mut host: Host,
    input: R,
    video_config: Option<&Path>,
) -> Result<(), FatalError> {
    host.frame()?;

    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(err) => {
                tracing::warn!("Stopped reading console input: {}", err);
                break;
            }
        };

        host.execute(&line, CommandSource::Local);
        host.frame()?;
    }

    if let Some(path) = video_config {
        if let Err(err) = host.save_video_config(path) {
            tracing::warn!("Failed to save video config: {}", err);
        }
    }

    host.shutdown();
    Ok(())
}

/// Report a fatal error and pick the exit status
pub fn fatal(err: &FatalError) -> ExitCode {
    tracing::error!("Fatal error: {}", err);
    eprintln!("Fatal error: {}", err);
    ExitCode::FAILURE
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;
    use std::sync::Arc;

    use vidcfg_core::CoreConfig;
    use vidcfg_engine::{BufferConsole, EngineInterfaces, HeadlessRenderer, Renderer};

    use super::*;

    fn host(renderer: Arc<HeadlessRenderer>) -> Host {
        let engine = EngineInterfaces::new(renderer, Arc::new(BufferConsole::default()));
        Host::new(engine, &CoreConfig::default(), None).unwrap()
    }

    #[test]
    fn test_run_executes_each_line() {
        let renderer = Arc::new(HeadlessRenderer::default());
        let input = Cursor::new("vid_setmode 800 600\nfullscreen 1\n");

        run(host(renderer.clone()), input, None).unwrap();

        let request = renderer.last_request().unwrap();
        assert_eq!((request.width, request.height), (800, 600));
        assert_eq!(renderer.render_state().width, 800);
    }

    #[test]
    fn test_run_stops_on_fatal_error() {
        let renderer = Arc::new(HeadlessRenderer::default());
        let host = host(renderer.clone());
        renderer.set_fail_mode_changes(true);
        let input = Cursor::new("fullscreen 1\nvid_setmode 800 600\n");

        let result = run(host, input, None);

        assert!(matches!(result, Err(FatalError::VideoReinit(_))));
        // The second line never ran
        assert_eq!(renderer.requests().len(), 2);
    }
}
