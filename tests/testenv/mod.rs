use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{self, Output, Stdio};

use tempfile::TempDir;

// A chat state with a DM, a group DM and two guilds. The channels of
// "Guild B" are not cached.
pub const STATE: &str = r#"
private_channels:
  - id: 1
    kind: direct_message
    recipients:
      - { id: 10, username: bob, avatar: 8342729096ea3675442027381ff50dfe }
  - id: 2
    kind: group_dm
    recipients:
      - { id: 20, username: ann }
      - { id: 21, username: cat }
guilds:
  - id: 100
    name: Guild A
    channels:
      - { id: 101, kind: guild_text, name: general }
      - { id: 102, kind: guild_text, name: random, nsfw: true }
      - { id: 103, kind: guild_voice, name: lounge }
      - { id: 104, kind: guild_category, name: text channels }
      - { id: 105, kind: guild_public_thread, name: release notes }
  - id: 200
    name: Guild B
"#;

// Environment for the integration tests.
pub struct TestEnv {
    // Temporary working directory.
    pub temp_dir: TempDir,
    // Path to the quickswitch executable.
    exe: PathBuf,
}

impl TestEnv {
    pub fn new(state: &str) -> TestEnv {
        let temp_dir = TempDir::new().expect("temp dir");
        fs::write(temp_dir.path().join("state.yml"), state).expect("state file");

        TestEnv {
            temp_dir,
            exe: PathBuf::from(env!("CARGO_BIN_EXE_quickswitch")),
        }
    }

    // Writes a config file where `XDG_CONFIG_HOME` points to.
    pub fn with_config(self, contents: &str) -> TestEnv {
        let dir = self.temp_dir.path().join("config").join("quickswitch");
        fs::create_dir_all(&dir).expect("config dir");
        fs::write(dir.join("quickswitch.yml"), contents).expect("config file");
        self
    }

    // Assert that running with `args` prints exactly the `expected` row names,
    // in order.
    pub fn assert_rows(&self, args: &[&str], expected: &[&str]) {
        let output = self.run_command(args, None);
        let rows = row_names(&output);

        assert!(
            output.status.success(),
            "quickswitch failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        assert_eq!(
            rows,
            expected,
            "\n\
            ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~\n\
            The printed rows:\n\
            {:?}\n\
            do not match the expected rows:\n\
            {:?}\n\
            ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~\n",
            rows,
            expected
        );
    }

    // Assert that running with `args` produces the expected error.
    pub fn assert_error_msg(&self, args: &[&str], expected: &str) {
        let output = self.run_command(args, None);
        let stderr = String::from_utf8(output.stderr).expect("error message should be utf8");

        assert!(
            stderr.contains(expected),
            "\n\
            ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~\n\
            The error message:\n\
            {:?}\n\
            does not contain the expected message:\n\
            {:?}\n\
            ~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~~\n",
            stderr,
            expected
        );
    }

    pub fn run(&self, args: &[&str], stdin: Option<&str>) -> Output {
        self.run_command(args, stdin)
    }

    fn run_command(&self, args: &[&str], stdin: Option<&str>) -> Output {
        let mut cmd = process::Command::new(&self.exe);
        cmd.current_dir(self.temp_dir.path());
        cmd.env("XDG_CONFIG_HOME", self.temp_dir.path().join("config"));
        cmd.env("HOME", self.temp_dir.path());
        cmd.env_remove("RUST_LOG");
        cmd.args(args);
        cmd.stdin(Stdio::piped());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());

        let mut child = cmd.spawn().expect("quickswitch should start");
        {
            let mut child_stdin = child.stdin.take().expect("stdin is piped");
            if let Some(input) = stdin {
                child_stdin
                    .write_all(input.as_bytes())
                    .expect("stdin should be writable");
            }
        }

        child.wait_with_output().expect("quickswitch output")
    }
}

// The names printed on each row, with the icon column and the guild column
// stripped. Blank lines are kept as empty names.
pub fn row_names(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .filter(|line| !line.starts_with("   "))
        .map(|line| {
            line.get(3..)
                .unwrap_or_default()
                .split("  ")
                .next()
                .unwrap_or_default()
                .trim()
                .to_string()
        })
        .collect()
}
