//! Rotating ASCII wireframe with a live OSC message overlay (default binary).
//!
//! Loads an OBJ mesh, listens for OSC messages on UDP and renders both into a
//! custom framebuffer at ~60 FPS until interrupted (SIGINT or a Ctrl-C
//! keypress in raw mode).

use std::time::{Duration, Instant};

use anyhow::{Context, Result};

use osc_wireframe::adapter::OscReceiver;
use osc_wireframe::cli::parse_args;
use osc_wireframe::core::{load_obj_mesh, Mesh};
use osc_wireframe::input::{poll_interrupt, RunningFlag};
use osc_wireframe::logging;
use osc_wireframe::term::{FramePacer, FrameState, SceneView, TerminalRenderer};
use osc_wireframe::types::FRAME_INTERVAL_US;

/// Pause between the startup summary and the first frame.
const STARTUP_PAUSE: Duration = Duration::from_secs(1);

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args)?;
    logging::init(config.log_path.as_deref())?;

    println!("ASCII OBJ + OSC renderer");
    println!("Loading: {}", config.mesh_path.display());
    let mesh = load_obj_mesh(&config.mesh_path)
        .with_context(|| format!("load mesh: {}", config.mesh_path.display()))?;
    println!(
        "Vertices: {}, Faces: {} (width {})",
        mesh.vertex_count(),
        mesh.face_count(),
        mesh.face_width()
    );
    tracing::info!(
        path = %config.mesh_path.display(),
        vertices = mesh.vertex_count(),
        faces = mesh.face_count(),
        extent = mesh.extent(),
        "mesh loaded"
    );

    // A failed bind is not fatal: the wireframe still renders, just without messages.
    let receiver = config
        .receiver
        .as_ref()
        .and_then(|rx_config| match OscReceiver::bind(rx_config) {
            Ok(rx) => {
                println!("Listening on {}", rx.local_addr());
                Some(rx)
            }
            Err(error) => {
                tracing::warn!(%error, "OSC receiver unavailable");
                println!("OSC receiver unavailable: {error}");
                None
            }
        });
    // Registered before raw mode so a signal can never skip terminal restore.
    let running = RunningFlag::install()?;

    println!("Starting render...");
    std::thread::sleep(STARTUP_PAUSE);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mesh, receiver, &running);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(
    term: &mut TerminalRenderer,
    mesh: &Mesh,
    mut receiver: Option<OscReceiver>,
    running: &RunningFlag,
) -> Result<()> {
    let view = SceneView::default();
    let mut state = FrameState::new(&view);
    let mut pacer = FramePacer::new(FRAME_INTERVAL_US);
    let epoch = Instant::now();
    let elapsed_us = || epoch.elapsed().as_micros() as u64;

    while running.is_running() {
        pacer.begin_frame(elapsed_us());

        let record = receiver.as_mut().and_then(|rx| rx.poll());
        state.compose(&view, mesh, record.as_ref());
        term.present(&state.fb, state.total_messages())?;
        state.advance();

        // The frame's leftover time is spent waiting on input.
        if poll_interrupt(pacer.remaining(elapsed_us()))? {
            running.stop();
        }
    }

    tracing::info!(
        frames = pacer.frames(),
        messages = state.total_messages(),
        "render loop stopped"
    );
    Ok(())
}
