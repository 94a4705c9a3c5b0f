//! Gateway clients against an in-process HTTP server

use std::sync::Arc;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::mpsc;
use zenith_core::{EquatorialCoordinate, HorizontalCoordinate, MountStatus};
use zenith_gateway::{
    FocuserClient, HardwareConfig, MountClient, RotatorClient, StatusMonitor, StatusStream,
};
use zenith_ports::{FocuserControl, HardwareError, MountControl, RotatorControl};

const STATUS_JSON: &str =
    r#"{"isOffline":false,"isConnected":true,"isSlewing":true,"isTracking":false,"alt":30.0,"az":90.0}"#;

/// Canned reply for every request
#[derive(Clone, Copy)]
enum Reply {
    Json(u16, &'static str),
    EventStream(&'static str),
}

async fn read_request_line(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }
    let head = String::from_utf8_lossy(&buf);
    head.lines().next().unwrap_or_default().to_string()
}

/// Serve `reply` forever; request lines are reported on the channel
async fn serve(reply: Reply) -> (String, mpsc::UnboundedReceiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        loop {
            let (mut socket, _) = listener.accept().await.unwrap();
            let tx = tx.clone();
            tokio::spawn(async move {
                let line = read_request_line(&mut socket).await;
                let _ = tx.send(line);

                match reply {
                    Reply::Json(status, body) => {
                        let response = format!(
                            "HTTP/1.1 {} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status,
                            body.len(),
                            body
                        );
                        socket.write_all(response.as_bytes()).await.unwrap();
                        socket.shutdown().await.unwrap();
                    }
                    Reply::EventStream(events) => {
                        let head = "HTTP/1.1 200 OK\r\nContent-Type: text/event-stream\r\nConnection: close\r\n\r\n";
                        socket.write_all(head.as_bytes()).await.unwrap();
                        socket.write_all(events.as_bytes()).await.unwrap();
                        // Hold the stream open
                        tokio::time::sleep(Duration::from_secs(3600)).await;
                    }
                }
            });
        }
    });

    (url, rx)
}

fn config(url: &str, immediate: bool) -> HardwareConfig {
    HardwareConfig {
        url: url.to_string(),
        immediate,
    }
}

#[tokio::test]
async fn test_equatorial_goto_sends_hours_and_decodes_status() {
    let _ = env_logger::builder().is_test(true).try_init();
    let (url, mut requests) = serve(Reply::Json(200, STATUS_JSON)).await;
    let mount = MountClient::new(&config(&url, false));

    let status = mount
        .goto_equatorial(EquatorialCoordinate::new(90.0, -16.5))
        .await
        .unwrap();

    assert_eq!(
        requests.recv().await.unwrap(),
        "GET /mount/goto/coordinates/equatorial?ra_hours=6&dec_degs=-16.5 HTTP/1.1"
    );
    assert!(status.is_connected);
    assert!(status.is_slewing);
    assert_eq!(status.alt, 30.0);
}

#[tokio::test]
async fn test_horizontal_goto() {
    let (url, mut requests) = serve(Reply::Json(200, STATUS_JSON)).await;
    let mount = MountClient::new(&config(&url, false));

    mount
        .goto_horizontal(HorizontalCoordinate::new(45.5, 270.0))
        .await
        .unwrap();

    assert_eq!(
        requests.recv().await.unwrap(),
        "GET /mount/goto/coordinates/horizontal?alt_degs=45.5&az_degs=270 HTTP/1.1"
    );
}

#[tokio::test]
async fn test_immediate_mount_enables_then_connects() {
    let (url, mut requests) = serve(Reply::Json(200, "")).await;
    let mount = MountClient::new(&config(&url, true));

    mount.start().await;
    mount.shutdown().await;

    let mut lines = Vec::new();
    for _ in 0..4 {
        lines.push(requests.recv().await.unwrap());
    }
    assert_eq!(
        lines,
        vec![
            "GET /mount/enable HTTP/1.1",
            "GET /mount/connect HTTP/1.1",
            "GET /mount/stop HTTP/1.1",
            "GET /mount/disconnect HTTP/1.1",
        ]
    );
}

#[tokio::test]
async fn test_deferred_mount_sends_nothing_on_start() {
    let (url, mut requests) = serve(Reply::Json(200, "")).await;
    let mount = MountClient::new(&config(&url, false));

    mount.start().await;
    mount.park().await.unwrap();

    assert_eq!(requests.recv().await.unwrap(), "GET /mount/park HTTP/1.1");
}

#[tokio::test]
async fn test_server_error_is_reported() {
    let (url, _requests) = serve(Reply::Json(503, "")).await;
    let mount = MountClient::new(&config(&url, false));

    let err = mount.stop().await.unwrap_err();

    assert!(matches!(err, HardwareError::Status { status: 503, .. }));
}

#[tokio::test]
async fn test_unreachable_server_is_a_request_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let url = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);

    let mount = MountClient::new(&config(&url, true));
    assert!(matches!(mount.connect().await, Err(HardwareError::Request(_))));

    // Lifecycle helpers only log
    mount.start().await;
    mount.shutdown().await;
}

#[tokio::test]
async fn test_focuser_and_rotator_endpoints() {
    let (url, mut requests) = serve(Reply::Json(200, STATUS_JSON)).await;
    let focuser = FocuserClient::new(&config(&url, true));
    let rotator = RotatorClient::new(&config(&url, true));

    focuser.start().await;
    focuser.goto_target("12000").await.unwrap();
    focuser.shutdown().await;
    rotator.goto_mech_target("45").await.unwrap();
    rotator.goto_field_target("90").await.unwrap();
    rotator.shutdown().await;

    let mut lines = Vec::new();
    for _ in 0..8 {
        lines.push(requests.recv().await.unwrap());
    }
    assert_eq!(
        lines,
        vec![
            "GET /focuser/enable HTTP/1.1",
            "GET /focuser/goto?target=12000 HTTP/1.1",
            "GET /focuser/stop HTTP/1.1",
            "GET /focuser/disable HTTP/1.1",
            "GET /rotator/goto/mech/target?target=45 HTTP/1.1",
            "GET /rotator/goto/field/target?target=90 HTTP/1.1",
            "GET /rotator/stop HTTP/1.1",
            "GET /rotator/disable HTTP/1.1",
        ]
    );
}

#[tokio::test]
async fn test_status_stream_feeds_monitor() {
    let (url, mut requests) = serve(Reply::EventStream(
        "data: {\"isOffline\":false,\"isConnected\":true,\"isSlewing\":false,\"isTracking\":true,\"alt\":12.5,\"az\":3.0}\n\n",
    ))
    .await;
    let monitor = Arc::new(StatusMonitor::new());
    let mut rx = monitor.subscribe();

    let stream = StatusStream::connect_with(
        reqwest::Client::new(),
        format!("{}/status", url),
        Arc::clone(&monitor),
        Duration::from_millis(50),
    );

    rx.changed().await.unwrap();
    assert_eq!(requests.recv().await.unwrap(), "GET /status HTTP/1.1");
    assert!(monitor.is_connected());
    assert!(monitor.is_tracking());
    assert_eq!(monitor.alt(), 12.5);

    stream.close();
    stream.close();
    assert!(!stream.is_open());
}

#[tokio::test]
async fn test_status_stream_failure_stays_offline() {
    let (url, mut requests) = serve(Reply::Json(500, "")).await;
    let monitor = Arc::new(StatusMonitor::new());
    monitor.update(MountStatus {
        is_offline: false,
        ..MountStatus::OFFLINE
    });

    let stream = StatusStream::connect_with(
        reqwest::Client::new(),
        format!("{}/status", url),
        Arc::clone(&monitor),
        Duration::from_millis(50),
    );

    // Two attempts prove the reset happened and the stream retries
    requests.recv().await.unwrap();
    requests.recv().await.unwrap();
    assert_eq!(monitor.status(), MountStatus::OFFLINE);

    drop(stream);
}
