use std::io::{BufRead, BufReader, Write};
use std::process::{Command, Stdio};

fn send(stdin: &mut impl Write, message: serde_json::Value) -> Result<(), Box<dyn std::error::Error>> {
    writeln!(stdin, "{}", serde_json::to_string(&message)?)?;
    stdin.flush()?;
    Ok(())
}

fn receive(stdout: &mut impl BufRead) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    let mut line = String::new();
    stdout.read_line(&mut line)?;
    Ok(serde_json::from_str(line.trim())?)
}

#[test]
fn handshake_initialize_notify_ping() -> Result<(), Box<dyn std::error::Error>> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_rhythmic-ribbon-mcp"))
        .args(["serve", "--stdio"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()?;

    let mut stdin = child.stdin.take().expect("stdin available");
    let mut stdout = BufReader::new(child.stdout.take().expect("stdout available"));

    send(
        &mut stdin,
        serde_json::json!({
            "jsonrpc": "2.0",
            "id": "init",
            "method": "initialize",
            "params": {"protocolVersion": "2025-11-25", "capabilities": {}}
        }),
    )?;
    let initialized = receive(&mut stdout)?;
    assert_eq!(initialized["id"].as_str(), Some("init"));
    assert_eq!(
        initialized["result"]["protocolVersion"].as_str(),
        Some("2025-11-25")
    );
    assert!(initialized["result"]["capabilities"]["tools"].is_object());
    assert_eq!(
        initialized["result"]["serverInfo"]["name"].as_str(),
        Some("rhythmic-ribbon-mcp")
    );

    // The client acknowledges, then pings; only the ping is answered.
    send(
        &mut stdin,
        serde_json::json!({"jsonrpc": "2.0", "method": "notifications/initialized"}),
    )?;
    send(
        &mut stdin,
        serde_json::json!({"jsonrpc": "2.0", "id": 7, "method": "ping"}),
    )?;
    let pong = receive(&mut stdout)?;
    assert_eq!(pong["id"].as_i64(), Some(7));
    assert_eq!(pong["result"], serde_json::json!({}));

    // Closing stdin ends the loop cleanly with nothing left unread.
    drop(stdin);
    let mut rest = String::new();
    stdout.read_line(&mut rest)?;
    assert!(rest.is_empty());
    assert!(child.wait()?.success());
    Ok(())
}
