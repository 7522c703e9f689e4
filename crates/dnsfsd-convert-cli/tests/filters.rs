// crates/dnsfsd-convert-cli/tests/filters.rs

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_with_stdin(cmd: &mut Command, input: &[u8]) -> Output {
    let mut child = cmd
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn command");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(input)
        .expect("write stdin");
    child.wait_with_output().expect("wait command")
}

fn stdout_ok(out: &Output) -> String {
    assert!(
        out.status.success(),
        "command failed: status={:?}\nstdout:\n{}\nstderr:\n{}",
        out.status.code(),
        String::from_utf8_lossy(&out.stdout),
        String::from_utf8_lossy(&out.stderr)
    );
    String::from_utf8(out.stdout.clone()).expect("utf8 stdout")
}

#[test]
fn adblock_filter() {
    let out = run_with_stdin(
        &mut Command::new(env!("CARGO_BIN_EXE_dnsfsd-adblock")),
        b"[Adblock Plus 2.0]\n||ads.example.com^\n|http://example.com/x.js|\n@@||ok.example.com^\n",
    );
    assert_eq!(
        stdout_ok(&out),
        "# Converted from adblock plus 2.0 to dnsfsd\n\
         # Script usage: dnsfsd-adblock < original.txt > converted.txt\n\
         e;;ads.example.com\n\
         e;;http://example.com/x.js\n"
    );
}

#[test]
fn dnscrypt_proxy_filter() {
    let out = run_with_stdin(
        &mut Command::new(env!("CARGO_BIN_EXE_dnsfsd-dnscrypt-proxy")),
        b"# list\nads.example.com\n\ntracker.example.net\n",
    );
    assert_eq!(
        stdout_ok(&out),
        "# Converted from dnscrypt-proxy to dnsfsd\n\
         # Script usage: dnsfsd-dnscrypt-proxy < original.txt > converted.txt\n\
         e;;ads.example.com\n\
         e;;tracker.example.net\n"
    );
}

#[test]
fn hostfile_filter() {
    let out = run_with_stdin(
        &mut Command::new(env!("CARGO_BIN_EXE_dnsfsd-hostfile")),
        b"localhost 127.0.0.1\n0.0.0.0 example.com\n127.0.0.1 example.org\nbroken\n",
    );
    assert_eq!(
        stdout_ok(&out),
        "# Converted hostfile to dnsfsd\n\
         # Script usage: dnsfsd-hostfile < original.txt > converted.txt\n\
         e;;example.com\n\
         e;w;example.org\n"
    );
}

#[test]
fn empty_redirected_input_prints_header_only() {
    for (bin, first) in [
        (env!("CARGO_BIN_EXE_dnsfsd-adblock"), "# Converted from adblock plus 2.0 to dnsfsd"),
        (env!("CARGO_BIN_EXE_dnsfsd-dnscrypt-proxy"), "# Converted from dnscrypt-proxy to dnsfsd"),
        (env!("CARGO_BIN_EXE_dnsfsd-hostfile"), "# Converted hostfile to dnsfsd"),
    ] {
        let out = Command::new(bin)
            .stdin(Stdio::null())
            .output()
            .expect("spawn command");
        let stdout = stdout_ok(&out);
        let lines: Vec<&str> = stdout.lines().collect();
        assert_eq!(lines.len(), 2, "{bin}: {stdout}");
        assert_eq!(lines[0], first);
        assert!(lines[1].starts_with("# Script usage: "));
    }
}

#[test]
fn debug_logging_stays_off_stdout() {
    let out = run_with_stdin(
        Command::new(env!("CARGO_BIN_EXE_dnsfsd-dnscrypt-proxy")).env("RUST_LOG", "debug"),
        b"ads.example.com\n",
    );
    let stdout = stdout_ok(&out);
    assert_eq!(stdout.lines().count(), 3);
    assert!(String::from_utf8_lossy(&out.stderr).contains("conversion finished"));
}

#[cfg(unix)]
#[test]
fn terminal_stdin_is_refused() {
    let pty = nix::pty::openpty(None, None).expect("openpty");

    for bin in [
        env!("CARGO_BIN_EXE_dnsfsd-adblock"),
        env!("CARGO_BIN_EXE_dnsfsd-dnscrypt-proxy"),
        env!("CARGO_BIN_EXE_dnsfsd-hostfile"),
    ] {
        let follower = pty.slave.try_clone().expect("dup pty follower");
        let out = Command::new(bin)
            .stdin(Stdio::from(follower))
            .output()
            .expect("spawn command");

        assert_eq!(out.status.code(), Some(1), "{bin}");
        assert!(out.stdout.is_empty(), "{bin}: {:?}", out.stdout);
        assert!(
            String::from_utf8_lossy(&out.stderr).contains("no data piped in to script"),
            "{bin}: {}",
            String::from_utf8_lossy(&out.stderr)
        );
    }

    drop(pty.master);
}
