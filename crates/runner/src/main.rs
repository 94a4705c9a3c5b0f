use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use zenith_astrometry::{to_dms, to_hms};
use zenith_clock::IntervalTicks;
use zenith_core::{EquatorialCoordinate, Pointing, ScreenCoordinate};
use zenith_gateway::{FocuserClient, MountClient, RotatorClient, StatusMonitor, StatusStream};
use zenith_pipeline::{InputEvent, Key};
use zenith_runner::{Observatory, ObservatoryConfig, load_config};

const SHUTDOWN_GRACE: Duration = Duration::from_secs(2);

fn print_help() {
    eprintln!(
        r#"Zenith - telescope pointing session

USAGE:
    zenith [OPTIONS]

OPTIONS:
    --config <PATH>     Load configuration from JSON file
    --offline           Do not contact the hardware servers
    --help              Print this help message

COMMANDS (stdin):
    goto <ra> <dec>     Point at an equatorial target, in degrees
    slew <x> <y>        Simulate a slew to a screen position
    reset               Recenter the slew on the viewport midpoint
    key <name>          Press a key (ArrowLeft, ".", ",", "/", "`")
    where               Print the current pointing
    quit                Leave

ENVIRONMENT VARIABLES:
    RUST_LOG            Log level filter (default: info)
"#
    );
}

fn print_pointing(label: &str, pointing: &Pointing) {
    println!(
        "{:<8} RA {}  Dec {}  Alt {:.3}  Az {:.3}",
        label,
        to_hms(pointing.ra),
        to_dms(pointing.dec),
        pointing.alt,
        pointing.az
    );
}

fn parse_pair(args: &[&str]) -> Option<(f64, f64)> {
    match args {
        [a, b] => Some((a.parse().ok()?, b.parse().ok()?)),
        _ => None,
    }
}

/// Hardware clients and the status stream, when online
struct Hardware {
    mount: Arc<MountClient>,
    focuser: FocuserClient,
    rotator: RotatorClient,
    status: StatusStream,
}

impl Hardware {
    fn connect(config: &ObservatoryConfig) -> Self {
        let hardware = Self {
            mount: Arc::new(MountClient::new(&config.mount)),
            focuser: FocuserClient::new(&config.focuser),
            rotator: RotatorClient::new(&config.rotator),
            status: StatusStream::connect(&config.status, Arc::new(StatusMonitor::new())),
        };

        let (mount, focuser, rotator) = (
            Arc::clone(&hardware.mount),
            hardware.focuser.clone(),
            hardware.rotator.clone(),
        );
        tokio::spawn(async move {
            tokio::join!(mount.start(), focuser.start(), rotator.start());
        });

        let mut status = hardware.status.monitor().subscribe();
        tokio::spawn(async move {
            while status.changed().await.is_ok() {
                let current = *status.borrow_and_update();
                log::info!(
                    "mount status: offline={} connected={} slewing={} tracking={} alt={} az={}",
                    current.is_offline,
                    current.is_connected,
                    current.is_slewing,
                    current.is_tracking,
                    current.alt,
                    current.az
                );
            }
        });

        hardware
    }

    async fn shutdown(&self) {
        self.status.close();
        let teardown = async {
            tokio::join!(
                self.mount.shutdown(),
                self.focuser.shutdown(),
                self.rotator.shutdown()
            )
        };
        if tokio::time::timeout(SHUTDOWN_GRACE, teardown).await.is_err() {
            log::warn!("hardware shutdown timed out");
        }
    }
}

async fn run_command(observatory: &mut Observatory, frame_interval_ms: u64, line: &str) -> bool {
    let words: Vec<&str> = line.split_whitespace().collect();
    let Some((command, args)) = words.split_first() else {
        return true;
    };

    match *command {
        "quit" | "exit" => return false,
        "where" => {
            let pointing = observatory.pointing().await;
            print_pointing("pointing", &pointing);
        }
        "goto" => match parse_pair(args) {
            Some((ra, dec)) => match observatory.set_target(EquatorialCoordinate::new(ra, dec)).await {
                Ok(pointing) => print_pointing("target", &pointing),
                Err(e) => eprintln!("{}", e),
            },
            None => eprintln!("usage: goto <ra> <dec>"),
        },
        "slew" => match parse_pair(args) {
            Some((x, y)) => {
                if let Err(e) = observatory.slew_to(ScreenCoordinate::new(x, y)).await {
                    eprintln!("{}", e);
                    return true;
                }
                let mut ticks = IntervalTicks::every_millis(frame_interval_ms);
                let outcome = observatory.animate_slew(&mut ticks).await;
                log::debug!("slew outcome: {:?}", outcome);
                print_pointing("slewed", &observatory.slew().pointing());
            }
            None => eprintln!("usage: slew <x> <y>"),
        },
        "reset" => {
            let pointing = observatory.reset_slew().await;
            print_pointing("center", &pointing);
        }
        "key" => match args.first().and_then(|name| Key::parse(name)) {
            Some(key) => observatory.handle_input(InputEvent::KeyDown(key)).await,
            None => eprintln!("usage: key <name>"),
        },
        other => eprintln!("unknown command: {}", other),
    }
    true
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Parse command line arguments
    let args: Vec<String> = std::env::args().collect();
    let mut config_path: Option<String> = None;
    let mut offline = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            "--config" | "-c" => {
                i += 1;
                if i >= args.len() {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
                config_path = Some(args[i].clone());
            }
            "--offline" => offline = true,
            arg => {
                eprintln!("Unknown argument: {}", arg);
                print_help();
                std::process::exit(1);
            }
        }
        i += 1;
    }

    let mut config = match config_path {
        Some(path) => {
            log::info!("Loading configuration from: {}", path);
            load_config(&path)?
        }
        None => ObservatoryConfig::default(),
    };
    config.offline |= offline;

    let hardware = (!config.offline).then(|| Hardware::connect(&config));

    let mut observatory = Observatory::new(&config);
    if let Some(hardware) = &hardware {
        let mount: Arc<dyn zenith_ports::MountControl> = hardware.mount.clone();
        observatory = observatory.with_mount(mount);
    }
    observatory.start().await;

    let pointing = observatory.pointing().await;
    print_pointing("start", &pointing);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => {
                match line? {
                    Some(line) => {
                        if !run_command(&mut observatory, config.slew.frame_interval_ms, &line).await {
                            break;
                        }
                    }
                    None => break,
                }
            }
            _ = tokio::signal::ctrl_c() => {
                log::info!("interrupted");
                break;
            }
        }
    }

    observatory.stop();
    if let Some(hardware) = &hardware {
        hardware.shutdown().await;
    }
    Ok(())
}
