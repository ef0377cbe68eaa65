use std::path::PathBuf;
use std::process::{Command, Output};

fn scratch_file(name: &str, contents: &[u8]) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("crckit-cli-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();

    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cli"))
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn defaults_to_crc8() {
    let path = scratch_file("default.txt", b"123456789");
    let output = run(&[path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout(&output),
        "CRC8:\nBinary value: 0b11110111\nHex value: 0xf7\n"
    );
}

#[test]
fn selects_type() {
    let path = scratch_file("typed.txt", b"123456789");
    let path = path.to_str().unwrap();

    let crc4 = run(&["-t", "crc4", path]);
    assert_eq!(crc4.status.code(), Some(0));
    assert_eq!(stdout(&crc4), "CRC4:\nBinary value: 0b1100\nHex value: 0xc\n");

    let crc16 = run(&["-t", "crc16", path]);
    assert!(stdout(&crc16).contains("Hex value: 0x29b1"));

    let crc32 = run(&["--type", "crc32", path]);
    assert!(stdout(&crc32).contains("Binary value: 0b11001011111101000011100100100110"));
    assert!(stdout(&crc32).contains("Hex value: 0xcbf43926"));
}

#[test]
fn all_reports_every_width() {
    let path = scratch_file("all.txt", b"123456789");
    let output = run(&["-t", "all", path.to_str().unwrap()]);
    let out = stdout(&output);

    assert_eq!(output.status.code(), Some(0));
    for expected in ["0xc\n", "0xf7\n", "0x29b1\n", "0xcbf43926\n"] {
        assert!(out.contains(expected), "missing {expected:?} in {out}");
    }
    assert!(out.find("CRC4:").unwrap() < out.find("CRC32:").unwrap());
}

#[test]
fn empty_file() {
    let path = scratch_file("empty.txt", b"");
    let output = run(&["-t", "crc32", path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("Hex value: 0x0\n"));
}

#[test]
fn help_exits_zero() {
    for flag in ["-h", "--help"] {
        let output = run(&[flag]);
        assert_eq!(output.status.code(), Some(0));
        assert!(stdout(&output).contains("Usage"));
    }
}

#[test]
fn unknown_type_exits_one() {
    let path = scratch_file("bad-type.txt", b"123456789");
    let output = run(&["-t", "crc64", path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    let err = String::from_utf8_lossy(&output.stderr);
    assert!(err.contains("invalid arguments"));
    assert!(err.contains("unknown CRC type `crc64`"));
    assert!(err.contains("Usage"));
}

#[test]
fn missing_path_exits_one() {
    let output = run(&["-t", "crc8"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn unreadable_file_exits_one() {
    let output = run(&["/definitely/not/a/real/file"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to open input file"));
}

#[test]
fn locked_file_exits_one() {
    let path = scratch_file("locked.txt", b"123456789");
    let holder = std::fs::File::open(&path).unwrap();
    fs2::FileExt::try_lock_exclusive(&holder).unwrap();

    let output = run(&[path.to_str().unwrap()]);

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Failed to lock input file"));
    assert!(output.stdout.is_empty());

    fs2::FileExt::unlock(&holder).unwrap();
}
