use {
    base::{init_file_logger, init_stdout_logger, parse_level},
    control::{Coordinator, PipelineConfig},
    inference::KeywordModel,
    std::{io::Write, time::Duration},
    tokio::io::{AsyncBufReadExt, BufReader},
    vehicle::{Position, SimVehicle},
    video::{Capture, FrameBuffer, TestPattern},
};

const FRAME_WIDTH: usize = 640;
const FRAME_HEIGHT: usize = 480;
const FRAME_RATE: f32 = 10.0;
const LINK_LATENCY: Duration = Duration::from_millis(50);

// Canberra model airfield, the usual SITL home
const HOME: Position = Position {
    lat: -35.363261,
    lng: 149.165230,
    alt: 0.0,
    yaw: 0.0,
};

fn prompt() {
    print!("> ");
    std::io::stdout().flush().ok();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let level = std::env::var("VLA_LOG").unwrap_or_else(|_| "info".to_string());
    let level = parse_level(&level);
    match std::env::var("VLA_LOG_DIR") {
        Ok(dir) => init_file_logger(dir, level)?,
        Err(_) => init_stdout_logger(level),
    }

    let config = match std::env::args().nth(1) {
        Some(path) => {
            log::info!("loading config from {}", path);
            PipelineConfig::load(&path)?
        }
        None => PipelineConfig::default(),
    };
    log::debug!("config: {:?}", config);

    let frames = FrameBuffer::new();
    let capture = Capture::spawn(
        TestPattern::new(FRAME_WIDTH, FRAME_HEIGHT, FRAME_RATE),
        frames.clone(),
    );

    let vehicle = SimVehicle::new(HOME).with_latency(LINK_LATENCY);
    let coordinator = Coordinator::new(&config, frames, KeywordModel::default(), vehicle.clone());

    let mut status = coordinator.subscribe();
    let printer = tokio::spawn(async move {
        while let Some(event) = status.recv().await {
            println!("{}", event);
        }
    });

    println!("Type a command for the drone (\"quit\" to exit).");
    prompt();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line == "quit" || line == "exit" {
            break;
        }
        if !line.is_empty() {
            let outcome = coordinator.run_once(line).await;
            let position = vehicle.position();
            log::info!(
                "outcome {:?}, vehicle at {:.7},{:.7} alt {:.1}m mode {:?}",
                outcome,
                position.lat,
                position.lng,
                position.alt,
                vehicle.mode()
            );
        }
        prompt();
    }

    capture.stop().await;
    drop(coordinator);
    printer.await?;
    Ok(())
}
